use crate::application::dto::{ListCategoriesCommand, ListCategoriesOutput};
use crate::application::repositories::CategoryRepository;
use crate::domain::{DomainResult, Page};

/// Use case for listing categories one page at a time
pub struct ListCategories<'a, R: CategoryRepository> {
    repository: &'a R,
}

impl<'a, R: CategoryRepository> ListCategories<'a, R> {
    pub fn new(repository: &'a R) -> Self {
        Self { repository }
    }

    pub fn execute(
        &self,
        command: &ListCategoriesCommand,
    ) -> DomainResult<Page<ListCategoriesOutput>> {
        let query = command.to_search_query();
        let categories = self.repository.get_all(&query)?;

        tracing::debug!(
            page = query.page(),
            per_page = query.per_page(),
            total = categories.meta().total,
            "Listed categories"
        );
        Ok(categories.map(ListCategoriesOutput::from))
    }
}
