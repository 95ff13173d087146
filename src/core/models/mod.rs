//! Data models for the planner

pub mod course;
pub mod plan;
pub mod term;
pub mod track;

pub use course::{Course, CourseType};
pub use plan::PlanningState;
pub use term::Term;
pub use track::Track;
