pub mod problem_details;

pub use problem_details::ProblemDetails;
