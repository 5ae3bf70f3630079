// Domain layer module
pub mod base;
pub mod value_objects;
pub mod validation;
pub mod validators;
pub mod aggregates;
pub mod pagination;

pub use base::*;
pub use value_objects::*;
pub use validation::*;
pub use validators::*;
pub use aggregates::*;
pub use pagination::*;
