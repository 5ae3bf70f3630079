use super::commit_write;
use crate::application::dto::DeleteCategoryCommand;
use crate::application::repositories::{CategoryRepository, UnitOfWork};
use crate::domain::DomainResult;

/// Use case for deleting a category
pub struct DeleteCategory<'a, R: CategoryRepository, U: UnitOfWork> {
    repository: &'a mut R,
    unit_of_work: &'a mut U,
}

impl<'a, R: CategoryRepository, U: UnitOfWork> DeleteCategory<'a, R, U> {
    pub fn new(repository: &'a mut R, unit_of_work: &'a mut U) -> Self {
        Self {
            repository,
            unit_of_work,
        }
    }

    /// Delete the category, failing with `NotFound` if it does not exist
    pub fn execute(&mut self, command: DeleteCategoryCommand) -> DomainResult<()> {
        let category = self.repository.get(&command.id)?;

        let write = self.repository.delete(&category);
        commit_write(&mut *self.unit_of_work, write)?;

        tracing::info!(category_id = %command.id, "Deleted category");
        Ok(())
    }
}
