pub mod create_category;
pub mod delete_category;
pub mod get_category;
pub mod list_categories;
pub mod update_category;

pub use create_category::CreateCategory;
pub use delete_category::DeleteCategory;
pub use get_category::GetCategoryById;
pub use list_categories::ListCategories;
pub use update_category::UpdateCategory;

use crate::application::repositories::UnitOfWork;
use crate::domain::DomainResult;

/// Commit a repository write, or roll it back when the write or the commit failed
fn commit_write<U: UnitOfWork>(unit_of_work: &mut U, write: DomainResult<()>) -> DomainResult<()> {
    let result = write.and_then(|()| unit_of_work.commit());

    if let Err(error) = &result {
        tracing::warn!("Rolling back after failed write: {}", error);
        if let Err(rollback_error) = unit_of_work.rollback() {
            tracing::error!("Rollback failed: {}", rollback_error);
        }
    }

    result
}
