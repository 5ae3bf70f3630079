pub mod category;

pub use category::{
    CategoryOutput, CreateCategoryCommand, DeleteCategoryCommand, GetCategoryCommand,
    ListCategoriesCommand, ListCategoriesOutput, UpdateCategoryCommand,
};
