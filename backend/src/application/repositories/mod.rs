mod category_repository;
mod unit_of_work;

pub use category_repository::CategoryRepository;
pub use unit_of_work::UnitOfWork;
