pub mod dto;
pub mod repositories;
pub mod use_cases;

pub use dto::{
    CategoryOutput, CreateCategoryCommand, DeleteCategoryCommand, GetCategoryCommand,
    ListCategoriesCommand, ListCategoriesOutput, UpdateCategoryCommand,
};
pub use repositories::{CategoryRepository, UnitOfWork};
pub use use_cases::{
    CreateCategory, DeleteCategory, GetCategoryById, ListCategories, UpdateCategory,
};
