//! Plan-editing command handlers
//!
//! Moves, completions, terms, track and reset. Every change is saved by the
//! store before the handler returns.

use super::{confirm, resolve_course};
use diploma_planner::core::models::Track;
use diploma_planner::core::{Destination, PlacementDecision, PlanStore, Result};
use logger::warn;

/// Move a course into a term or back to the pool
///
/// A rejected move prints the reason and leaves the plan unchanged.
///
/// # Returns
/// `false` if the move was rejected
///
/// # Errors
/// Returns an error if the course or term does not exist or saving fails
pub fn move_course(store: &mut PlanStore, reference: &str, destination: Destination) -> Result<bool> {
    let course = resolve_course(store.catalog(), reference)?;
    let (id, code) = (course.id.clone(), course.code.clone());

    match store.move_course(&id, destination)? {
        PlacementDecision::Allowed => {
            println!("✓ Moved {code} to {destination}");
            Ok(true)
        }
        PlacementDecision::Rejected(rejection) => {
            eprintln!("✗ Cannot move {code} to {destination}: {rejection}");
            Ok(false)
        }
    }
}

/// Mark a course completed
///
/// # Errors
/// Returns an error if the course does not exist or saving fails
pub fn complete(store: &mut PlanStore, reference: &str) -> Result<()> {
    let course = resolve_course(store.catalog(), reference)?;
    let (id, code) = (course.id.clone(), course.code.clone());

    let was_planned = store.state().term_of(&id).is_some();
    if store.mark_completed(&id)? {
        if was_planned {
            println!("✓ Marked {code} completed (removed from its term)");
        } else {
            println!("✓ Marked {code} completed");
        }
    } else {
        println!("✓ {code} is already completed");
    }
    Ok(())
}

/// Clear a completed mark
///
/// # Errors
/// Returns an error if the course does not exist or saving fails
pub fn uncomplete(store: &mut PlanStore, reference: &str) -> Result<()> {
    let course = resolve_course(store.catalog(), reference)?;
    let (id, code) = (course.id.clone(), course.code.clone());

    if store.unmark_completed(&id)? {
        println!("✓ {code} is no longer completed");
    } else {
        println!("✓ {code} was not marked completed");
    }
    Ok(())
}

/// Append a term
///
/// # Errors
/// Returns an error if saving fails
pub fn add_term(store: &mut PlanStore) -> Result<()> {
    let id = store.add_term()?;
    let name = store
        .state()
        .term(id)
        .map_or_else(|| format!("term {id}"), |t| t.name.clone());
    println!("✓ Added {name} (id {id})");
    Ok(())
}

/// Remove a term after confirmation
///
/// # Errors
/// Returns an error if the term does not exist, it is the last term, or
/// saving fails
pub fn remove_term(store: &mut PlanStore, term_id: u32, yes: bool) -> Result<()> {
    if let Some(term) = store.state().term(term_id) {
        if !term.courses.is_empty() && !yes {
            let prompt = format!(
                "Remove {} and return its {} course(s) to the pool?",
                term.name,
                term.courses.len()
            );
            if !confirm(&prompt) {
                println!("✗ Removal cancelled");
                return Ok(());
            }
        }
    }

    let removed = store.remove_term(term_id)?;
    println!("✓ Removed {} (id {term_id})", removed.name);
    Ok(())
}

/// Show or change the selected track
///
/// # Errors
/// Returns an error if saving fails
pub fn track(store: &mut PlanStore, track: Option<Track>) -> Result<()> {
    let Some(track) = track else {
        let current = store.state().selected_track;
        println!("{} ({current})", current.label());
        return Ok(());
    };

    store.set_track(track)?;
    println!("✓ Selected {}", track.label());

    let engine = store.engine();
    let state = store.state();
    let outside: Vec<&str> = state
        .planned_courses()
        .filter(|id| !engine.is_required(id, track))
        .collect();
    if !outside.is_empty() {
        warn!(
            "{} planned course(s) do not count toward {track}: {}",
            outside.len(),
            outside.join(", ")
        );
    }
    Ok(())
}

/// Reset the plan after confirmation
///
/// # Errors
/// Returns an error if saving fails
pub fn reset(store: &mut PlanStore, yes: bool) -> Result<()> {
    if !yes && !confirm("Are you sure you want to discard the whole plan?") {
        println!("✗ Reset cancelled");
        return Ok(());
    }
    store.reset()?;
    println!("✓ Plan reset to {} empty terms", store.state().terms.len());
    Ok(())
}
