use crate::application::dto::{CategoryOutput, GetCategoryCommand};
use crate::application::repositories::CategoryRepository;
use crate::domain::DomainResult;

/// Use case for fetching a single category by ID
pub struct GetCategoryById<'a, R: CategoryRepository> {
    repository: &'a R,
}

impl<'a, R: CategoryRepository> GetCategoryById<'a, R> {
    pub fn new(repository: &'a R) -> Self {
        Self { repository }
    }

    pub fn execute(&self, command: GetCategoryCommand) -> DomainResult<CategoryOutput> {
        let category = self.repository.get(&command.id)?;
        Ok(CategoryOutput::from(category))
    }
}
