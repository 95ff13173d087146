//! Board and status command handlers

use super::resolve_course;
use diploma_planner::core::board::{BoardView, PoolFilter, TermColumn};
use diploma_planner::core::models::Course;
use diploma_planner::core::{PlanStore, Result};
use logger::verbose;
use std::fmt::Write;

/// Short badge list for a course line
fn badges(course: &Course) -> String {
    let mut parts = vec![format!("{} cr", course.credits)];
    if course.has_oppe {
        parts.push("OPPE".to_string());
    }
    if course.is_project {
        parts.push("Project".to_string());
    }
    if course.optional {
        parts.push("elective".to_string());
    }
    parts.join(", ")
}

fn print_column(column: &TermColumn) {
    let mut header = format!(
        "--- {} (id {}) · {} cr · {} theory",
        column.term.name, column.term.id, column.total_credits, column.theory_courses
    );
    if column.oppe_courses > 0 {
        let _ = write!(header, " · {} OPPE", column.oppe_courses);
    }
    println!("\n{header} ---");

    if column.is_empty() {
        println!("  (no courses planned)");
        return;
    }
    for course in &column.courses {
        println!("  {:<10} {} ({})", course.code, course.name, badges(course));
    }
}

/// Print progress, the course pool and every term
pub fn run(store: &PlanStore, filter: PoolFilter) {
    let state = store.state();
    let view = BoardView::build(store.catalog(), state, filter);
    let progress = &view.progress;

    println!("\n=== {} ===\n", store.catalog().name);
    println!("Track:    {}", state.selected_track.label());
    println!(
        "Credits:  {} / {} ({:.1}%)",
        progress.total_credits,
        progress.required_credits,
        progress.percentage()
    );
    println!(
        "Projects: {} / {}",
        progress.projects_completed, progress.total_projects
    );
    println!(
        "Courses:  {} completed, {} planned, {} counted toward the track",
        progress.courses_completed, view.planned_count, progress.total_courses
    );

    println!("\n--- Course Pool ({filter}) ---");
    if view.pool.is_empty() {
        println!("  (nothing left to plan)");
    }
    for entry in &view.pool {
        println!(
            "  [{:<9}] {:<10} {} ({})",
            entry.status,
            entry.course.code,
            entry.course.name,
            badges(entry.course)
        );
    }

    for column in &view.columns {
        print_column(column);
    }

    if let Some(path) = store.path() {
        verbose!("Plan file: {}", path.display());
    }
}

/// Print one course's status and whether it fits in each term
///
/// # Errors
/// Returns an error if the course is not in the catalog
pub fn status(store: &PlanStore, reference: &str) -> Result<()> {
    let course = resolve_course(store.catalog(), reference)?;
    let state = store.state();

    println!("\n{} ({})", course.name, course.code);
    println!("  id:       {}", course.id);
    println!("  type:     {}", course.course_type);
    println!("  details:  {}", badges(course));
    if !course.prerequisites.is_empty() {
        let codes: Vec<&str> = course
            .prerequisites
            .iter()
            .map(|id| store.catalog().code_for(id))
            .collect();
        println!("  requires: {}", codes.join(", "));
    }
    if !course.corequisites.is_empty() {
        let codes: Vec<&str> = course
            .corequisites
            .iter()
            .map(|id| store.catalog().code_for(id))
            .collect();
        println!("  with:     {}", codes.join(", "));
    }
    if !course.description.is_empty() {
        verbose!("{}", course.description);
    }

    println!("  status:   {}", store.status_of(course));
    match state.term_of(&course.id) {
        Some(term_id) => println!("  placed:   term {term_id}"),
        None => println!("  placed:   -"),
    }
    let counts = store
        .engine()
        .is_required(&course.id, state.selected_track);
    println!("  counts toward {}: {}", state.selected_track, if counts { "yes" } else { "no" });

    println!();
    for term in &state.terms {
        let decision = store.check_placement(&course.id, term.id)?;
        match decision.reason() {
            None => println!("  ✓ {}", term.name),
            Some(reason) => println!("  ✗ {}: {reason}", term.name),
        }
    }
    Ok(())
}
