use crate::application::repositories::CategoryRepository;
use crate::domain::{Category, CategoryId, DomainError, DomainResult, Entity, Page, SearchQuery};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Map-backed repository; writes are visible immediately
#[derive(Debug, Default)]
pub struct InMemoryCategoryRepository {
    categories: HashMap<CategoryId, Category>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

fn not_found(id: &CategoryId) -> DomainError {
    DomainError::not_found(format!("Category '{}' not found.", id))
}

impl CategoryRepository for InMemoryCategoryRepository {
    fn get(&self, id: &CategoryId) -> DomainResult<Category> {
        self.categories.get(id).cloned().ok_or_else(|| not_found(id))
    }

    /// Fails like a primary-key violation when the id is already stored
    fn insert(&mut self, category: &Category) -> DomainResult<()> {
        match self.categories.entry(*category.id()) {
            Entry::Occupied(_) => Err(DomainError::Persistence(format!(
                "Category '{}' already exists.",
                category.id()
            ))),
            Entry::Vacant(slot) => {
                slot.insert(category.clone());
                Ok(())
            }
        }
    }

    fn update(&mut self, category: &Category) -> DomainResult<()> {
        match self.categories.get_mut(category.id()) {
            Some(stored) => {
                *stored = category.clone();
                Ok(())
            }
            None => Err(not_found(category.id())),
        }
    }

    fn delete(&mut self, category: &Category) -> DomainResult<()> {
        self.categories
            .remove(category.id())
            .map(|_| ())
            .ok_or_else(|| not_found(category.id()))
    }

    fn get_all(&self, query: &SearchQuery) -> DomainResult<Page<Category>> {
        Ok(query.paginate(self.categories.values().cloned()))
    }
}
