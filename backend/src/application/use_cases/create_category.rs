use super::commit_write;
use crate::application::dto::{CategoryOutput, CreateCategoryCommand};
use crate::application::repositories::{CategoryRepository, UnitOfWork};
use crate::domain::{Category, DomainResult, Entity};

/// Use case for creating a category
///
/// The category is validated in full before the repository is touched, so a
/// rejected command never produces a write.
pub struct CreateCategory<'a, R: CategoryRepository, U: UnitOfWork> {
    repository: &'a mut R,
    unit_of_work: &'a mut U,
}

impl<'a, R: CategoryRepository, U: UnitOfWork> CreateCategory<'a, R, U> {
    pub fn new(repository: &'a mut R, unit_of_work: &'a mut U) -> Self {
        Self {
            repository,
            unit_of_work,
        }
    }

    pub fn execute(&mut self, command: CreateCategoryCommand) -> DomainResult<CategoryOutput> {
        let category = Category::new_category(
            command.name.as_deref(),
            command.description.as_deref(),
            command.is_active,
        )?;

        let write = self.repository.insert(&category);
        commit_write(&mut *self.unit_of_work, write)?;

        tracing::info!(category_id = %category.id(), "Created category");
        Ok(CategoryOutput::from(category))
    }
}
