//! CLI command handlers for `dplanner`.
//!
//! Each command is implemented in its own submodule. Handlers return
//! [`Result`]; `main` reports errors and sets the exit code.

pub mod board;
pub mod catalog;
pub mod config;
pub mod export;
pub mod plan;

use diploma_planner::config::Config;
use diploma_planner::core::models::Course;
use diploma_planner::core::{Catalog, PlannerError, Result};
use logger::{debug, warn};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Load the configured catalog, or the built-in one when none is set
///
/// # Errors
/// Returns an error if a configured catalog cannot be read or parsed
pub fn load_catalog(config: &Config) -> Result<Catalog> {
    let catalog = if config.paths.catalog_file.is_empty() {
        debug!("Using built-in course catalog");
        Catalog::embedded()
    } else {
        Catalog::load(Path::new(&config.paths.catalog_file))?
    };

    for problem in catalog.dangling_references() {
        warn!("{problem}");
    }
    Ok(catalog)
}

/// Saved plan location from config, falling back to `$DPLANNER/plan.json`
pub fn plan_path(config: &Config) -> PathBuf {
    if config.paths.plan_file.is_empty() {
        Config::get_dplanner_dir().join("plan.json")
    } else {
        PathBuf::from(&config.paths.plan_file)
    }
}

/// Look a course up by id or code
///
/// # Errors
/// Returns [`PlannerError::UnknownCourse`] if nothing matches
pub fn resolve_course<'a>(catalog: &'a Catalog, reference: &str) -> Result<&'a Course> {
    catalog
        .resolve(reference)
        .ok_or_else(|| PlannerError::UnknownCourse {
            id: reference.to_string(),
        })
}

/// Ask a y/n question on stdin
pub fn confirm(prompt: &str) -> bool {
    print!("{prompt} (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();

    let response = response.trim();
    response.eq_ignore_ascii_case("y") || response.eq_ignore_ascii_case("yes")
}
