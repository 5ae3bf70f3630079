use crate::domain::{
    Category, CategoryId, Entity, SearchDirection, SearchQuery, SortField, DEFAULT_PAGE,
    DEFAULT_PER_PAGE,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

fn default_active() -> bool {
    true
}

/// Input for creating a category
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateCategoryCommand {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl CreateCategoryCommand {
    pub fn new(name: impl Into<String>, description: impl Into<String>, is_active: bool) -> Self {
        Self {
            name: Some(name.into()),
            description: Some(description.into()),
            is_active,
        }
    }
}

/// Input for fetching one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct GetCategoryCommand {
    pub id: CategoryId,
}

/// Input for updating a category
///
/// A missing description keeps the stored one.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateCategoryCommand {
    pub id: CategoryId,
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl UpdateCategoryCommand {
    pub fn new(
        id: CategoryId,
        name: impl Into<String>,
        description: Option<String>,
        is_active: bool,
    ) -> Self {
        Self {
            id,
            name: Some(name.into()),
            description,
            is_active,
        }
    }
}

/// Input for deleting a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct DeleteCategoryCommand {
    pub id: CategoryId,
}

/// Raw list parameters as received from the caller
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ListCategoriesCommand {
    pub page: u32,
    pub per_page: u32,
    pub search: String,
    pub sort: String,
    pub dir: String,
}

impl Default for ListCategoriesCommand {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
            search: String::new(),
            sort: SortField::Name.to_string(),
            dir: SearchDirection::Asc.to_string(),
        }
    }
}

impl ListCategoriesCommand {
    pub fn to_search_query(&self) -> SearchQuery {
        SearchQuery::new(
            self.page,
            self.per_page,
            self.search.clone(),
            SortField::from_param(&self.sort),
            SearchDirection::from_param(&self.dir),
        )
    }
}

/// External shape of a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryOutput {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&Category> for CategoryOutput {
    fn from(category: &Category) -> Self {
        Self {
            id: *category.id().as_uuid(),
            name: category.name().to_string(),
            description: category.description().unwrap_or_default().to_string(),
            is_active: category.is_active(),
            created_at: category.created_at(),
        }
    }
}

impl From<Category> for CategoryOutput {
    fn from(category: Category) -> Self {
        CategoryOutput::from(&category)
    }
}

/// Element shape of a category listing
pub type ListCategoriesOutput = CategoryOutput;
