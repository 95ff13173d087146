//! Planning state model

use super::{Term, Track};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Number of empty terms in a fresh plan
pub const DEFAULT_TERM_COUNT: u32 = 4;

/// The whole plan: terms in order, outside completions and the chosen track
///
/// Field names serialize in camelCase so stored plans keep the
/// `terms` / `completedCourses` / `selectedTrack` layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanningState {
    /// Terms in sequence; earlier terms gate later ones
    pub terms: Vec<Term>,

    /// Courses finished outside the planner
    pub completed_courses: Vec<String>,

    /// Selected diploma track
    pub selected_track: Track,
}

impl Default for PlanningState {
    fn default() -> Self {
        let terms = (1..=DEFAULT_TERM_COUNT)
            .zip(1_usize..)
            .map(|(id, position)| Term::numbered(id, position))
            .collect();
        Self {
            terms,
            completed_courses: Vec::new(),
            selected_track: Track::default(),
        }
    }
}

impl PlanningState {
    /// Get a term by id
    #[must_use]
    pub fn term(&self, term_id: u32) -> Option<&Term> {
        self.terms.iter().find(|t| t.id == term_id)
    }

    /// Get a mutable term by id
    pub fn term_mut(&mut self, term_id: u32) -> Option<&mut Term> {
        self.terms.iter_mut().find(|t| t.id == term_id)
    }

    /// Position of a term in the sequence
    #[must_use]
    pub fn term_position(&self, term_id: u32) -> Option<usize> {
        self.terms.iter().position(|t| t.id == term_id)
    }

    /// Id of the term currently holding a course
    #[must_use]
    pub fn term_of(&self, course_id: &str) -> Option<u32> {
        self.terms.iter().find(|t| t.contains(course_id)).map(|t| t.id)
    }

    /// Every planned course id, in term order
    pub fn planned_courses(&self) -> impl Iterator<Item = &str> {
        self.terms
            .iter()
            .flat_map(|t| t.courses.iter().map(String::as_str))
    }

    /// Set of every planned course id
    #[must_use]
    pub fn planned_set(&self) -> HashSet<&str> {
        self.planned_courses().collect()
    }

    /// Set of completed course ids
    #[must_use]
    pub fn completed_set(&self) -> HashSet<&str> {
        self.completed_courses.iter().map(String::as_str).collect()
    }

    /// Whether a course is marked completed
    #[must_use]
    pub fn is_completed(&self, course_id: &str) -> bool {
        self.completed_courses.iter().any(|c| c == course_id)
    }

    /// Course ids that count as done when placing into `term_id`
    ///
    /// Completed courses plus everything in terms positioned strictly
    /// before the destination. Courses in the destination itself are not
    /// included; the engine checks those separately.
    ///
    /// # Returns
    /// `None` if no term has that id
    #[must_use]
    pub fn satisfied_before(&self, term_id: u32) -> Option<HashSet<&str>> {
        let position = self.term_position(term_id)?;
        let mut satisfied = self.completed_set();
        satisfied.extend(
            self.terms[..position]
                .iter()
                .flat_map(|t| t.courses.iter().map(String::as_str)),
        );
        Some(satisfied)
    }

    /// Regenerate "Term N" labels from positions; ids are untouched
    pub fn renumber_terms(&mut self) {
        for (index, term) in self.terms.iter_mut().enumerate() {
            term.name = Term::label_for(index + 1);
        }
    }

    /// Id for a newly appended term
    #[must_use]
    pub fn next_term_id(&self) -> u32 {
        self.terms.iter().map(|t| t.id).max().map_or(1, |id| id + 1)
    }
}
