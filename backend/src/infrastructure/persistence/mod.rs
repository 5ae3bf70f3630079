mod in_memory_category_repository;
mod models;
mod schema;
mod sqlite_category_repository;

pub use in_memory_category_repository::InMemoryCategoryRepository;
pub use schema::initialize_database;
pub use sqlite_category_repository::{SqliteCategoryRepository, SqliteUnitOfWork};
