//! Plan store: the mutable planning state plus its backing file
//!
//! Every user intent goes through here. Placements are checked with the
//! [`EligibilityEngine`] first; a rejection leaves the state untouched.
//! When the store has a backing path, each successful mutation is written
//! out immediately.

use crate::core::catalog::Catalog;
use crate::core::eligibility::{
    CourseStatus, EligibilityEngine, PlacementDecision, Progress, Rejection,
};
use crate::core::error::{PlannerError, Result};
use crate::core::models::{Course, PlanningState, Term, Track};
use logger::{debug, info, warn};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Where a course is being moved to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// A term, by id
    Term(u32),
    /// Back to the course pool (unplanned)
    Pool,
}

impl FromStr for Destination {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("pool") {
            return Ok(Self::Pool);
        }
        s.trim()
            .parse::<u32>()
            .map(Self::Term)
            .map_err(|_| format!("Invalid destination '{s}': expected a term id or 'pool'"))
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Term(id) => write!(f, "term {id}"),
            Self::Pool => write!(f, "pool"),
        }
    }
}

/// Read a stored plan, falling back to defaults
///
/// A missing file is a first run. An unreadable or structurally incompatible
/// file is logged and discarded.
#[must_use]
pub fn load_state(path: &Path) -> PlanningState {
    if !path.exists() {
        debug!("No saved plan at {}; starting fresh", path.display());
        return PlanningState::default();
    }

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            warn!("Failed to read saved plan {}: {e}", path.display());
            return PlanningState::default();
        }
    };

    match serde_json::from_str::<PlanningState>(&content) {
        Ok(state) => state,
        Err(e) => {
            warn!(
                "Discarding saved plan {} (incompatible record): {e}",
                path.display()
            );
            PlanningState::default()
        }
    }
}

/// Write a plan record as pretty JSON, creating parent directories
///
/// # Errors
/// Returns an error if serialization fails or the file cannot be written
pub fn save_state(state: &PlanningState, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| PlannerError::io(parent, e))?;
    }
    let json = serde_json::to_string_pretty(state)?;
    fs::write(path, json).map_err(|e| PlannerError::io(path, e))
}

/// Mutable plan bound to a catalog and, optionally, a file
#[derive(Debug)]
pub struct PlanStore<'a> {
    catalog: &'a Catalog,
    state: PlanningState,
    path: Option<PathBuf>,
}

impl<'a> PlanStore<'a> {
    /// In-memory store; nothing is persisted
    #[must_use]
    pub const fn new(catalog: &'a Catalog, state: PlanningState) -> Self {
        Self {
            catalog,
            state,
            path: None,
        }
    }

    /// Store backed by `path`, loading whatever is saved there
    #[must_use]
    pub fn open(catalog: &'a Catalog, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let state = load_state(&path);
        Self {
            catalog,
            state,
            path: Some(path),
        }
    }

    /// Current snapshot
    #[must_use]
    pub const fn state(&self) -> &PlanningState {
        &self.state
    }

    /// Backing file, if any
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Catalog the store validates against
    #[must_use]
    pub const fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Engine over the store's catalog
    #[must_use]
    pub const fn engine(&self) -> EligibilityEngine<'a> {
        EligibilityEngine::new(self.catalog)
    }

    /// Persist to the backing file (no-op for in-memory stores)
    ///
    /// # Errors
    /// Returns an error if the file cannot be written
    pub fn save(&self) -> Result<()> {
        match &self.path {
            Some(path) => {
                save_state(&self.state, path)?;
                debug!("Saved plan to {}", path.display());
                Ok(())
            }
            None => Ok(()),
        }
    }

    fn course(&self, course_id: &str) -> Result<&'a Course> {
        self.catalog
            .get(course_id)
            .ok_or_else(|| PlannerError::UnknownCourse {
                id: course_id.to_string(),
            })
    }

    /// Check a placement without changing anything
    ///
    /// # Errors
    /// Returns an error if the course or term does not exist
    pub fn check_placement(&self, course_id: &str, term_id: u32) -> Result<PlacementDecision> {
        let course = self.course(course_id)?;
        if self.state.is_completed(course_id) {
            return Ok(PlacementDecision::Rejected(Rejection::AlreadyCompleted));
        }

        let term = self
            .state
            .term(term_id)
            .ok_or(PlannerError::UnknownTerm { id: term_id })?;
        let satisfied = self
            .state
            .satisfied_before(term_id)
            .ok_or(PlannerError::UnknownTerm { id: term_id })?;

        Ok(self.engine().can_add_course(
            course,
            &term.courses,
            &satisfied,
            self.state.selected_track,
        ))
    }

    /// Move a course into a term or back to the pool
    ///
    /// Moving into a term is validated first; on rejection nothing changes
    /// and the decision is returned. Moving to the pool always succeeds.
    ///
    /// # Errors
    /// Returns an error if the course or term does not exist, or the plan
    /// cannot be saved
    pub fn move_course(&mut self, course_id: &str, destination: Destination) -> Result<PlacementDecision> {
        match destination {
            Destination::Term(term_id) => {
                let decision = self.check_placement(course_id, term_id)?;
                if let PlacementDecision::Rejected(rejection) = &decision {
                    info!("Rejected {course_id} -> term {term_id}: {rejection}");
                    return Ok(decision);
                }

                let source = self.state.term_of(course_id);
                if let Some(source_id) = source {
                    if let Some(term) = self.state.term_mut(source_id) {
                        term.remove_course(course_id);
                    }
                }
                if let Some(term) = self.state.term_mut(term_id) {
                    term.add_course(course_id.to_string());
                }
                info!("Placed {course_id} in term {term_id}");
            }
            Destination::Pool => {
                self.course(course_id)?;
                for term in &mut self.state.terms {
                    term.remove_course(course_id);
                }
                info!("Returned {course_id} to the pool");
            }
        }

        self.save()?;
        Ok(PlacementDecision::Allowed)
    }

    /// Append an empty term
    ///
    /// # Returns
    /// The id of the new term
    ///
    /// # Errors
    /// Returns an error if the plan cannot be saved
    pub fn add_term(&mut self) -> Result<u32> {
        let id = self.state.next_term_id();
        let position = self.state.terms.len() + 1;
        self.state.terms.push(Term::numbered(id, position));
        info!("Added term {id}");
        self.save()?;
        Ok(id)
    }

    /// Remove a term; its courses go back to the pool
    ///
    /// Remaining terms are relabelled "Term 1".."Term N" while keeping ids.
    ///
    /// # Returns
    /// The removed term
    ///
    /// # Errors
    /// Returns an error if the term does not exist, it is the only term, or
    /// the plan cannot be saved
    pub fn remove_term(&mut self, term_id: u32) -> Result<Term> {
        let position = self
            .state
            .term_position(term_id)
            .ok_or(PlannerError::UnknownTerm { id: term_id })?;
        if self.state.terms.len() <= 1 {
            return Err(PlannerError::LastTerm);
        }

        let removed = self.state.terms.remove(position);
        self.state.renumber_terms();
        info!(
            "Removed term {term_id} ({} courses returned to the pool)",
            removed.courses.len()
        );
        self.save()?;
        Ok(removed)
    }

    /// Switch the selected track
    ///
    /// # Errors
    /// Returns an error if the plan cannot be saved
    pub fn set_track(&mut self, track: Track) -> Result<()> {
        self.state.selected_track = track;
        info!("Selected track: {track}");
        self.save()
    }

    /// Mark a course as completed outside the planner
    ///
    /// The course leaves whatever term held it, keeping the completed and
    /// planned sets disjoint.
    ///
    /// # Returns
    /// `false` if the course was already completed
    ///
    /// # Errors
    /// Returns an error if the course does not exist or the plan cannot be
    /// saved
    pub fn mark_completed(&mut self, course_id: &str) -> Result<bool> {
        self.course(course_id)?;
        if self.state.is_completed(course_id) {
            return Ok(false);
        }

        for term in &mut self.state.terms {
            term.remove_course(course_id);
        }
        self.state.completed_courses.push(course_id.to_string());
        info!("Marked {course_id} completed");
        self.save()?;
        Ok(true)
    }

    /// Clear a completion mark
    ///
    /// # Returns
    /// `false` if the course was not marked completed
    ///
    /// # Errors
    /// Returns an error if the plan cannot be saved
    pub fn unmark_completed(&mut self, course_id: &str) -> Result<bool> {
        let before = self.state.completed_courses.len();
        self.state.completed_courses.retain(|c| c != course_id);
        if self.state.completed_courses.len() == before {
            return Ok(false);
        }
        info!("Cleared completion of {course_id}");
        self.save()?;
        Ok(true)
    }

    /// Discard the plan and start from defaults
    ///
    /// # Errors
    /// Returns an error if the plan cannot be saved
    pub fn reset(&mut self) -> Result<()> {
        self.state = PlanningState::default();
        info!("Plan reset to defaults");
        self.save()
    }

    /// Display status of a course in the current plan
    #[must_use]
    pub fn status_of(&self, course: &Course) -> CourseStatus {
        self.engine().status_in(course, &self.state)
    }

    /// Progress counters for the current plan
    #[must_use]
    pub fn progress(&self) -> Progress {
        self.engine().calculate_progress(&self.state)
    }
}
