//! Term model

use serde::{Deserialize, Serialize};

/// A planning bucket holding an ordered list of course ids
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    /// Stable identifier; survives renumbering
    pub id: u32,

    /// Display label (e.g., "Term 2"), regenerated on structural changes
    pub name: String,

    /// Course ids in display order
    pub courses: Vec<String>,
}

impl Term {
    /// Create an empty term
    ///
    /// # Arguments
    /// * `id` - Stable term id
    /// * `name` - Display label
    #[must_use]
    pub const fn new(id: u32, name: String) -> Self {
        Self {
            id,
            name,
            courses: Vec::new(),
        }
    }

    /// Create an empty term labelled by its 1-based position
    #[must_use]
    pub fn numbered(id: u32, position: usize) -> Self {
        Self::new(id, Self::label_for(position))
    }

    /// Display label for the term at a 1-based position
    #[must_use]
    pub fn label_for(position: usize) -> String {
        format!("Term {position}")
    }

    /// Whether the term holds a course
    #[must_use]
    pub fn contains(&self, course_id: &str) -> bool {
        self.courses.iter().any(|c| c == course_id)
    }

    /// Append a course unless it is already present
    pub fn add_course(&mut self, course_id: String) {
        if !self.contains(&course_id) {
            self.courses.push(course_id);
        }
    }

    /// Remove a course from the term
    ///
    /// # Returns
    /// `true` if the course was removed, `false` if it wasn't in the term
    pub fn remove_course(&mut self, course_id: &str) -> bool {
        if let Some(pos) = self.courses.iter().position(|c| c == course_id) {
            self.courses.remove(pos);
            true
        } else {
            false
        }
    }
}
