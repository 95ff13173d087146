//! Course model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which diploma a course belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CourseType {
    /// Diploma in Programming
    Programming,
    /// Diploma in Data Science
    DataScience,
    /// Counts toward both diplomas
    Both,
}

impl CourseType {
    /// Lowercase identifier as used in catalog files
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Programming => "programming",
            Self::DataScience => "data-science",
            Self::Both => "both",
        }
    }
}

impl fmt::Display for CourseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents a course in the catalog
///
/// Only `id`, `name`, `code`, `credits` and `type` are required in a catalog
/// file; everything else falls back to an empty list, an empty string or
/// `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Unique identifier (e.g., "mlf")
    pub id: String,

    /// Course name (e.g., "Machine Learning Foundations")
    pub name: String,

    /// Course code (e.g., "BSCS2004"), used in messages
    pub code: String,

    /// Credit count
    pub credits: u32,

    /// Course ids that must be done before this course
    #[serde(default)]
    pub prerequisites: Vec<String>,

    /// Course ids that must be done before or taken in the same term
    #[serde(default)]
    pub corequisites: Vec<String>,

    /// Diploma the course belongs to
    #[serde(rename = "type")]
    pub course_type: CourseType,

    /// Project courses do not count toward the theory cap
    #[serde(default)]
    pub is_project: bool,

    /// Free-form description
    #[serde(default)]
    pub description: String,

    /// Whether the course has an online proctored programming exam
    #[serde(default)]
    pub has_oppe: bool,

    /// Whether the course has in-person quizzes
    #[serde(default)]
    pub has_quiz: bool,

    /// Alternative-path elective (BA vs DL); only required under one track
    #[serde(default)]
    pub optional: bool,
}

impl Course {
    /// Create a new course with no requisites and all flags off
    ///
    /// # Arguments
    /// * `id` - Unique course id
    /// * `name` - Full course name
    /// * `code` - Course code
    /// * `credits` - Credit count
    /// * `course_type` - Diploma the course belongs to
    #[must_use]
    pub const fn new(
        id: String,
        name: String,
        code: String,
        credits: u32,
        course_type: CourseType,
    ) -> Self {
        Self {
            id,
            name,
            code,
            credits,
            prerequisites: Vec::new(),
            corequisites: Vec::new(),
            course_type,
            is_project: false,
            description: String::new(),
            has_oppe: false,
            has_quiz: false,
            optional: false,
        }
    }

    /// Add a prerequisite by course id
    pub fn add_prerequisite(&mut self, course_id: impl Into<String>) {
        let course_id = course_id.into();
        if !self.prerequisites.contains(&course_id) {
            self.prerequisites.push(course_id);
        }
    }

    /// Add a co-requisite by course id
    pub fn add_corequisite(&mut self, course_id: impl Into<String>) {
        let course_id = course_id.into();
        if !self.corequisites.contains(&course_id) {
            self.corequisites.push(course_id);
        }
    }

    /// Theory courses are everything that is not a project
    #[must_use]
    pub const fn is_theory(&self) -> bool {
        !self.is_project
    }
}
