//! Core planning functionality: catalog, rules, persistence and export

pub mod board;
pub mod catalog;
pub mod eligibility;
pub mod error;
pub mod models;
pub mod report;
pub mod store;

pub use catalog::Catalog;
pub use eligibility::{CourseStatus, EligibilityEngine, PlacementDecision, Progress, Rejection};
pub use error::{PlannerError, Result};
pub use store::{Destination, PlanStore};

/// Returns the current version of the `diploma-planner` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
