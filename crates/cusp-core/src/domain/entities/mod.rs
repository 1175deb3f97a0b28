pub mod common;
pub mod project;
pub mod scaffold_plan;
pub mod solution;

pub use crate::domain::DomainError;
pub use project::Project;
pub use scaffold_plan::ScaffoldPlan;
pub use solution::Solution;
