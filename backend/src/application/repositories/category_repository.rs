use crate::domain::{Category, CategoryId, DomainResult, Page, SearchQuery};

/// Repository trait for managing Category aggregates.
///
/// This trait defines the contract for persisting and retrieving categories
/// from a data store. Implementations can be backed by different storage
/// mechanisms (in-memory, database, etc.). Writes may be staged until the
/// matching [`UnitOfWork`](super::UnitOfWork) commits.
pub trait CategoryRepository {
    /// Finds a category by its unique identifier.
    ///
    /// Returns `DomainError::NotFound` if no category has this ID.
    fn get(&self, id: &CategoryId) -> DomainResult<Category>;

    /// Adds a new category.
    fn insert(&mut self, category: &Category) -> DomainResult<()>;

    /// Replaces the stored state of an existing category.
    fn update(&mut self, category: &Category) -> DomainResult<()>;

    /// Removes a category.
    fn delete(&mut self, category: &Category) -> DomainResult<()>;

    /// Returns one page of categories matching the query.
    ///
    /// `meta.total` counts every match before pagination, and results are
    /// ordered by the query's sort field with the ID as tie-break.
    fn get_all(&self, query: &SearchQuery) -> DomainResult<Page<Category>>;
}
