use catalog::application::{
    repositories::{CategoryRepository, UnitOfWork},
    CreateCategory, CreateCategoryCommand, DeleteCategory, DeleteCategoryCommand,
    GetCategoryById, GetCategoryCommand, ListCategories, ListCategoriesCommand, UpdateCategory,
    UpdateCategoryCommand,
};
use catalog::domain::{
    Category, CategoryId, DomainError, DomainResult, Page, SearchQuery,
};
use catalog::infrastructure::persistence::InMemoryCategoryRepository;

/// Unit of work that only counts what the use cases asked of it
#[derive(Default)]
struct CountingUnitOfWork {
    commits: usize,
    rollbacks: usize,
}

impl UnitOfWork for CountingUnitOfWork {
    fn commit(&mut self) -> DomainResult<()> {
        self.commits += 1;
        Ok(())
    }

    fn rollback(&mut self) -> DomainResult<()> {
        self.rollbacks += 1;
        Ok(())
    }
}

/// Repository whose writes always fail, reads delegate to an in-memory store
struct ReadOnlyRepository {
    inner: InMemoryCategoryRepository,
    write_attempts: usize,
}

impl ReadOnlyRepository {
    fn refuse(&mut self) -> DomainResult<()> {
        self.write_attempts += 1;
        Err(DomainError::Persistence("attempt to write a readonly database".to_string()))
    }
}

impl CategoryRepository for ReadOnlyRepository {
    fn get(&self, id: &CategoryId) -> DomainResult<Category> {
        self.inner.get(id)
    }

    fn insert(&mut self, _category: &Category) -> DomainResult<()> {
        self.refuse()
    }

    fn update(&mut self, _category: &Category) -> DomainResult<()> {
        self.refuse()
    }

    fn delete(&mut self, _category: &Category) -> DomainResult<()> {
        self.refuse()
    }

    fn get_all(&self, query: &SearchQuery) -> DomainResult<Page<Category>> {
        self.inner.get_all(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(
        repo: &mut InMemoryCategoryRepository,
        unit_of_work: &mut CountingUnitOfWork,
        name: &str,
    ) -> CategoryId {
        let output = CreateCategory::new(repo, unit_of_work)
            .execute(CreateCategoryCommand::new(name, format!("{} movies", name), true))
            .unwrap();
        CategoryId::from_uuid(output.id)
    }

    #[test]
    fn test_category_lifecycle() {
        let mut repo = InMemoryCategoryRepository::new();
        let mut unit_of_work = CountingUnitOfWork::default();

        let id = create(&mut repo, &mut unit_of_work, "Action");

        let fetched = GetCategoryById::new(&repo)
            .execute(GetCategoryCommand { id })
            .unwrap();
        assert_eq!(fetched.name, "Action");
        assert_eq!(fetched.description, "Action movies");

        let updated = UpdateCategory::new(&mut repo, &mut unit_of_work)
            .execute(UpdateCategoryCommand::new(id, "Adventure", None, false))
            .unwrap();
        assert_eq!(updated.name, "Adventure");
        assert_eq!(updated.description, "Action movies");
        assert!(!updated.is_active);
        assert_eq!(updated.created_at, fetched.created_at);

        DeleteCategory::new(&mut repo, &mut unit_of_work)
            .execute(DeleteCategoryCommand { id })
            .unwrap();

        let error = GetCategoryById::new(&repo)
            .execute(GetCategoryCommand { id })
            .unwrap_err();
        assert_eq!(error.to_string(), format!("Category '{}' not found.", id));
        assert_eq!(unit_of_work.commits, 3);
        assert_eq!(unit_of_work.rollbacks, 0);
    }

    #[test]
    fn test_rejected_update_leaves_stored_category_untouched() {
        let mut repo = InMemoryCategoryRepository::new();
        let mut unit_of_work = CountingUnitOfWork::default();
        let id = create(&mut repo, &mut unit_of_work, "Action");

        let error = UpdateCategory::new(&mut repo, &mut unit_of_work)
            .execute(UpdateCategoryCommand::new(id, "", Some("x".repeat(4_001)), true))
            .unwrap_err();

        assert_eq!(error.to_string(), "Failed to create a Category");
        assert_eq!(error.errors().len(), 2);
        assert_eq!(repo.get(&id).unwrap().name(), "Action");
        assert_eq!(unit_of_work.commits, 1);
    }

    #[test]
    fn test_failed_write_rolls_back() {
        let mut repo = ReadOnlyRepository {
            inner: InMemoryCategoryRepository::new(),
            write_attempts: 0,
        };
        let mut unit_of_work = CountingUnitOfWork::default();

        let error = CreateCategory::new(&mut repo, &mut unit_of_work)
            .execute(CreateCategoryCommand::new("Action", "desc", true))
            .unwrap_err();

        assert!(matches!(error, DomainError::Persistence(_)));
        assert_eq!(repo.write_attempts, 1);
        assert_eq!(unit_of_work.commits, 0);
        assert_eq!(unit_of_work.rollbacks, 1);
    }

    #[test]
    fn test_invalid_create_never_writes() {
        let mut repo = ReadOnlyRepository {
            inner: InMemoryCategoryRepository::new(),
            write_attempts: 0,
        };
        let mut unit_of_work = CountingUnitOfWork::default();

        let command = CreateCategoryCommand {
            name: None,
            description: None,
            is_active: true,
        };
        let error = CreateCategory::new(&mut repo, &mut unit_of_work)
            .execute(command)
            .unwrap_err();

        assert_eq!(error.errors().len(), 2);
        assert_eq!(repo.write_attempts, 0);
        assert_eq!(unit_of_work.rollbacks, 0);
    }

    #[test]
    fn test_list_from_raw_parameters() {
        let mut repo = InMemoryCategoryRepository::new();
        let mut unit_of_work = CountingUnitOfWork::default();
        for name in ["Horror", "Action", "Drama", "Action Comedy"] {
            create(&mut repo, &mut unit_of_work, name);
        }

        let command = ListCategoriesCommand {
            page: 1,
            per_page: 2,
            search: "Act".to_string(),
            sort: "NAME".to_string(),
            dir: "desc".to_string(),
        };
        let page = ListCategories::new(&repo).execute(&command).unwrap();

        assert_eq!(page.meta().total, 2);
        assert_eq!(page.meta().per_page, 2);
        let names: Vec<&str> = page.data().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Action Comedy", "Action"]);
    }

    #[test]
    fn test_list_defaults_and_unknown_sort() {
        let mut repo = InMemoryCategoryRepository::new();
        let mut unit_of_work = CountingUnitOfWork::default();
        for name in ["Horror", "Action"] {
            create(&mut repo, &mut unit_of_work, name);
        }

        let command = ListCategoriesCommand {
            sort: "popularity".to_string(),
            dir: "sideways".to_string(),
            ..ListCategoriesCommand::default()
        };
        let page = ListCategories::new(&repo).execute(&command).unwrap();

        assert_eq!(page.meta().current_page, 1);
        assert_eq!(page.meta().per_page, 10);
        let names: Vec<&str> = page.data().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Action", "Horror"]);
    }

    #[test]
    fn test_output_serializes_snake_case() {
        let mut repo = InMemoryCategoryRepository::new();
        let mut unit_of_work = CountingUnitOfWork::default();
        let id = create(&mut repo, &mut unit_of_work, "Action");

        let output = GetCategoryById::new(&repo)
            .execute(GetCategoryCommand { id })
            .unwrap();
        let json = serde_json::to_value(&output).unwrap();

        assert_eq!(json["id"], serde_json::json!(id.to_string()));
        assert_eq!(json["is_active"], serde_json::json!(true));
        assert!(json.get("created_at").is_some());
    }
}
