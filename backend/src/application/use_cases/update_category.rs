use super::commit_write;
use crate::application::dto::{CategoryOutput, UpdateCategoryCommand};
use crate::application::repositories::{CategoryRepository, UnitOfWork};
use crate::domain::DomainResult;

/// Use case for updating a category
///
/// Loads the category, applies the change through the aggregate (which
/// validates it) and only then writes and commits.
pub struct UpdateCategory<'a, R: CategoryRepository, U: UnitOfWork> {
    repository: &'a mut R,
    unit_of_work: &'a mut U,
}

impl<'a, R: CategoryRepository, U: UnitOfWork> UpdateCategory<'a, R, U> {
    pub fn new(repository: &'a mut R, unit_of_work: &'a mut U) -> Self {
        Self {
            repository,
            unit_of_work,
        }
    }

    pub fn execute(&mut self, command: UpdateCategoryCommand) -> DomainResult<CategoryOutput> {
        let mut category = self.repository.get(&command.id)?;
        category.update(
            command.name.as_deref(),
            command.description.as_deref(),
            command.is_active,
        )?;

        let write = self.repository.update(&category);
        commit_write(&mut *self.unit_of_work, write)?;

        tracing::info!(category_id = %command.id, "Updated category");
        Ok(CategoryOutput::from(category))
    }
}
