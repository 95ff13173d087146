//! Placement validation and status derivation
//!
//! Two policies live here:
//! - [`EligibilityEngine::can_add_course`] is strict and ordered. A
//!   prerequisite only counts if it is in the caller's satisfied set
//!   (completions plus strictly earlier terms) or already in the destination
//!   term.
//! - [`get_course_status`] is optimistic and global. A prerequisite counts if
//!   it is completed or placed anywhere in the plan, regardless of term order.
//!
//! Neither function mutates anything or touches I/O.

use crate::core::catalog::Catalog;
use crate::core::models::{Course, CourseType, PlanningState, Track};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

/// Theory (non-project) courses allowed in one term
pub const MAX_THEORY_COURSES_PER_TERM: usize = 4;

/// Courses with an OPPE allowed in one term
pub const MAX_OPPE_COURSES_PER_TERM: usize = 4;

/// Course codes that only count toward the Business Analytics path
pub const BA_TRACK_CODES: [&str; 2] = ["BSMS2002", "BSMS2001P"];

/// Course codes that only count toward the Deep Learning path
pub const DL_TRACK_CODES: [&str; 2] = ["BSDA2001", "BSDA2001P"];

/// Why a course may not be placed
///
/// `Display` yields the user-facing reason string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    /// Candidate is already in the destination term
    #[error("Already in this term")]
    AlreadyInTerm,
    /// Data science course under the programming track
    #[error("Not in Programming track")]
    NotInProgrammingTrack,
    /// Programming course under a data science track
    #[error("Not in Data Science track")]
    NotInDataScienceTrack,
    /// A prerequisite is neither satisfied nor in the destination term
    #[error("Requires {code} to be completed first")]
    MissingPrerequisite {
        /// Code of the prerequisite, or its raw id when not in the catalog
        code: String,
    },
    /// A corequisite is neither satisfied nor in the destination term
    #[error("Requires {code} in same term or completed")]
    MissingCorequisite {
        /// Code of the corequisite, or its raw id when not in the catalog
        code: String,
    },
    /// Destination already holds the maximum number of theory courses
    #[error("Max 4 theory courses per term")]
    TheoryCapReached,
    /// Destination already holds the maximum number of OPPE courses
    #[error("Max 4 OPPE courses per term")]
    OppeCapReached,
    /// Completed courses stay out of the board
    #[error("Already completed")]
    AlreadyCompleted,
}

/// Outcome of a placement check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementDecision {
    /// The course may be added
    Allowed,
    /// The course may not be added
    Rejected(Rejection),
}

impl PlacementDecision {
    /// Whether the course may be added
    #[must_use]
    pub const fn can_add(&self) -> bool {
        matches!(self, Self::Allowed)
    }

    /// The rejection, if any
    #[must_use]
    pub const fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Allowed => None,
            Self::Rejected(rejection) => Some(rejection),
        }
    }

    /// Human-readable reason, if rejected
    #[must_use]
    pub fn reason(&self) -> Option<String> {
        self.rejection().map(ToString::to_string)
    }
}

impl From<Result<(), Rejection>> for PlacementDecision {
    fn from(result: Result<(), Rejection>) -> Self {
        result.map_or_else(Self::Rejected, |()| Self::Allowed)
    }
}

/// Display status of a course in the current plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CourseStatus {
    /// All prerequisites are completed or planned somewhere
    Available,
    /// Some prerequisite is neither completed nor planned
    Locked,
    /// Finished outside the planner
    Completed,
    /// Placed in some term
    InProgress,
}

impl CourseStatus {
    /// Identifier used in output
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Locked => "locked",
            Self::Completed => "completed",
            Self::InProgress => "in-progress",
        }
    }
}

impl fmt::Display for CourseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregate progress counters for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    /// Credits of completed plus planned courses
    pub total_credits: u32,
    /// Credits the track requires
    pub required_credits: u32,
    /// Number of completed entries
    pub courses_completed: usize,
    /// Number of courses that count toward the track
    pub total_courses: usize,
    /// Projects completed or planned
    pub projects_completed: usize,
    /// Projects the track requires
    pub total_projects: usize,
}

impl Progress {
    /// Credit progress as a percentage (may exceed 100)
    #[must_use]
    pub fn percentage(&self) -> f64 {
        if self.required_credits == 0 {
            return 0.0;
        }
        f64::from(self.total_credits) / f64::from(self.required_credits) * 100.0
    }
}

/// Status of a course given completions and placements anywhere in the plan
///
/// # Arguments
/// * `course` - Course to classify
/// * `completed` - Completed course ids
/// * `planned` - Ids placed in any term
#[must_use]
pub fn get_course_status(
    course: &Course,
    completed: &HashSet<&str>,
    planned: &HashSet<&str>,
) -> CourseStatus {
    if completed.contains(course.id.as_str()) {
        return CourseStatus::Completed;
    }
    if planned.contains(course.id.as_str()) {
        return CourseStatus::InProgress;
    }

    let locked = course
        .prerequisites
        .iter()
        .any(|p| !completed.contains(p.as_str()) && !planned.contains(p.as_str()));
    if locked {
        CourseStatus::Locked
    } else {
        CourseStatus::Available
    }
}

/// Catalog-backed rule engine
#[derive(Debug, Clone, Copy)]
pub struct EligibilityEngine<'a> {
    catalog: &'a Catalog,
}

impl<'a> EligibilityEngine<'a> {
    /// Create an engine over a catalog
    #[must_use]
    pub const fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// The catalog this engine reads
    #[must_use]
    pub const fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Decide whether `course` may be added to a term
    ///
    /// Rules run in a fixed order and the first failure wins: duplicate,
    /// track, prerequisites, corequisites, theory cap, OPPE cap.
    ///
    /// # Arguments
    /// * `course` - Candidate course
    /// * `term_courses` - Ids already in the destination term
    /// * `satisfied` - Ids that count as done (completions plus strictly
    ///   earlier terms; see [`PlanningState::satisfied_before`])
    /// * `track` - Selected track
    #[must_use]
    pub fn can_add_course(
        &self,
        course: &Course,
        term_courses: &[String],
        satisfied: &HashSet<&str>,
        track: Track,
    ) -> PlacementDecision {
        self.check_placement(course, term_courses, satisfied, track)
            .into()
    }

    fn check_placement(
        &self,
        course: &Course,
        term_courses: &[String],
        satisfied: &HashSet<&str>,
        track: Track,
    ) -> Result<(), Rejection> {
        let in_term = |id: &str| term_courses.iter().any(|c| c == id);

        if in_term(course.id.as_str()) {
            return Err(Rejection::AlreadyInTerm);
        }

        check_track(course, track)?;

        let unmet = |id: &&String| !satisfied.contains(id.as_str()) && !in_term(id.as_str());

        if let Some(prereq) = course.prerequisites.iter().find(unmet) {
            return Err(Rejection::MissingPrerequisite {
                code: self.catalog.code_for(prereq).to_string(),
            });
        }

        if let Some(coreq) = course.corequisites.iter().find(unmet) {
            return Err(Rejection::MissingCorequisite {
                code: self.catalog.code_for(coreq).to_string(),
            });
        }

        let theory_count = term_courses
            .iter()
            .filter(|id| self.catalog.is_theory(id))
            .count();
        if course.is_theory() && theory_count >= MAX_THEORY_COURSES_PER_TERM {
            return Err(Rejection::TheoryCapReached);
        }

        let oppe_count = term_courses
            .iter()
            .filter(|id| self.catalog.has_oppe(id))
            .count();
        if course.has_oppe && oppe_count >= MAX_OPPE_COURSES_PER_TERM {
            return Err(Rejection::OppeCapReached);
        }

        Ok(())
    }

    /// Course ids that count toward a track, in catalog order
    #[must_use]
    pub fn get_required_courses(&self, track: Track) -> Vec<&'a str> {
        self.catalog
            .courses()
            .iter()
            .filter(|c| counts_toward(c, track))
            .map(|c| c.id.as_str())
            .collect()
    }

    /// Whether a course counts toward a track
    #[must_use]
    pub fn is_required(&self, course_id: &str, track: Track) -> bool {
        self.catalog
            .get(course_id)
            .is_some_and(|c| counts_toward(c, track))
    }

    /// Aggregate counters for the progress display
    #[must_use]
    pub fn calculate_progress(&self, state: &PlanningState) -> Progress {
        let track = state.selected_track;

        let completed_credits: u32 = state
            .completed_courses
            .iter()
            .map(|id| self.catalog.credits_of(id))
            .sum();
        let planned_credits: u32 = state
            .planned_courses()
            .map(|id| self.catalog.credits_of(id))
            .sum();

        let projects_completed = state
            .completed_courses
            .iter()
            .filter(|id| self.catalog.is_project(id))
            .count();
        let projects_planned = state
            .planned_courses()
            .filter(|id| self.catalog.is_project(id))
            .count();

        Progress {
            total_credits: completed_credits + planned_credits,
            required_credits: track.required_credits(),
            courses_completed: state.completed_courses.len(),
            total_courses: self.get_required_courses(track).len(),
            projects_completed: projects_completed + projects_planned,
            total_projects: track.required_projects(),
        }
    }

    /// Status of a course against a plan snapshot
    #[must_use]
    pub fn status_in(&self, course: &Course, state: &PlanningState) -> CourseStatus {
        get_course_status(course, &state.completed_set(), &state.planned_set())
    }
}

fn check_track(course: &Course, track: Track) -> Result<(), Rejection> {
    match (track, course.course_type) {
        (Track::Programming, CourseType::DataScience) if !course.optional => {
            Err(Rejection::NotInProgrammingTrack)
        }
        (Track::DataScienceBa | Track::DataScienceDl, CourseType::Programming) => {
            Err(Rejection::NotInDataScienceTrack)
        }
        _ => Ok(()),
    }
}

fn counts_toward(course: &Course, track: Track) -> bool {
    let core_data_science = course.course_type == CourseType::DataScience && !course.optional;
    match track {
        Track::Programming => course.course_type == CourseType::Programming,
        Track::DataScienceBa => core_data_science || BA_TRACK_CODES.contains(&course.code.as_str()),
        Track::DataScienceDl => core_data_science || DL_TRACK_CODES.contains(&course.code.as_str()),
        Track::Both => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(id: &str, course_type: CourseType) -> Course {
        Course::new(
            id.to_string(),
            format!("Course {id}"),
            id.to_uppercase(),
            4,
            course_type,
        )
    }

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_rejection_messages() {
        assert_eq!(Rejection::AlreadyInTerm.to_string(), "Already in this term");
        assert_eq!(
            Rejection::MissingPrerequisite {
                code: "BSCS2004".to_string()
            }
            .to_string(),
            "Requires BSCS2004 to be completed first"
        );
        assert_eq!(
            Rejection::MissingCorequisite {
                code: "BSCS2007".to_string()
            }
            .to_string(),
            "Requires BSCS2007 in same term or completed"
        );
        assert_eq!(
            Rejection::TheoryCapReached.to_string(),
            "Max 4 theory courses per term"
        );
    }

    #[test]
    fn test_decision_accessors() {
        let allowed = PlacementDecision::Allowed;
        assert!(allowed.can_add());
        assert!(allowed.reason().is_none());

        let rejected = PlacementDecision::Rejected(Rejection::OppeCapReached);
        assert!(!rejected.can_add());
        assert_eq!(rejected.reason().as_deref(), Some("Max 4 OPPE courses per term"));
    }

    #[test]
    fn test_duplicate_wins_over_everything() {
        let catalog = Catalog::default();
        let engine = EligibilityEngine::new(&catalog);
        let mut candidate = course("x", CourseType::DataScience);
        candidate.add_prerequisite("never");

        let decision = engine.can_add_course(
            &candidate,
            &ids(&["x"]),
            &HashSet::new(),
            Track::Programming,
        );
        assert_eq!(decision, PlacementDecision::Rejected(Rejection::AlreadyInTerm));
    }

    #[test]
    fn test_track_rules() {
        let catalog = Catalog::default();
        let engine = EligibilityEngine::new(&catalog);
        let none = HashSet::new();

        let ds = course("ds", CourseType::DataScience);
        let mut elective = course("ba", CourseType::DataScience);
        elective.optional = true;
        let prog = course("prog", CourseType::Programming);
        let shared = course("shared", CourseType::Both);

        assert_eq!(
            engine.can_add_course(&ds, &[], &none, Track::Programming).rejection(),
            Some(&Rejection::NotInProgrammingTrack)
        );
        assert!(engine.can_add_course(&elective, &[], &none, Track::Programming).can_add());
        assert_eq!(
            engine.can_add_course(&prog, &[], &none, Track::DataScienceDl).rejection(),
            Some(&Rejection::NotInDataScienceTrack)
        );
        assert!(engine.can_add_course(&shared, &[], &none, Track::DataScienceBa).can_add());
        assert!(engine.can_add_course(&ds, &[], &none, Track::Both).can_add());
        assert!(engine.can_add_course(&prog, &[], &none, Track::Both).can_add());
    }

    #[test]
    fn test_unknown_prerequisite_reports_raw_id() {
        let catalog = Catalog::default();
        let engine = EligibilityEngine::new(&catalog);
        let mut candidate = course("x", CourseType::Programming);
        candidate.add_prerequisite("ghost");

        let decision = engine.can_add_course(&candidate, &[], &HashSet::new(), Track::Both);
        assert_eq!(decision.reason().as_deref(), Some("Requires ghost to be completed first"));
    }

    #[test]
    fn test_unknown_corequisite_reports_raw_id() {
        let catalog = Catalog::default();
        let engine = EligibilityEngine::new(&catalog);
        let mut candidate = course("x", CourseType::Programming);
        candidate.add_corequisite("phantom");

        let decision = engine.can_add_course(&candidate, &[], &HashSet::new(), Track::Both);
        assert_eq!(
            decision.reason().as_deref(),
            Some("Requires phantom in same term or completed")
        );
    }

    #[test]
    fn test_prerequisite_in_same_term_is_accepted() {
        let catalog = Catalog::default();
        let engine = EligibilityEngine::new(&catalog);
        let mut candidate = course("b", CourseType::Programming);
        candidate.add_prerequisite("a");

        let decision = engine.can_add_course(&candidate, &ids(&["a"]), &HashSet::new(), Track::Both);
        assert!(decision.can_add());
    }

    #[test]
    fn test_unknown_ids_do_not_count_toward_caps() {
        let catalog = Catalog::default();
        let engine = EligibilityEngine::new(&catalog);
        let mut candidate = course("x", CourseType::Programming);
        candidate.has_oppe = true;

        let term = ids(&["g1", "g2", "g3", "g4", "g5"]);
        assert!(engine.can_add_course(&candidate, &term, &HashSet::new(), Track::Both).can_add());
    }

    #[test]
    fn test_status_order() {
        let mut b = course("b", CourseType::Programming);
        b.add_prerequisite("a");

        let completed = HashSet::from(["b"]);
        let planned = HashSet::from(["b"]);
        assert_eq!(get_course_status(&b, &completed, &planned), CourseStatus::Completed);
        assert_eq!(get_course_status(&b, &HashSet::new(), &planned), CourseStatus::InProgress);
        assert_eq!(
            get_course_status(&b, &HashSet::new(), &HashSet::new()),
            CourseStatus::Locked
        );
        assert_eq!(
            get_course_status(&b, &HashSet::new(), &HashSet::from(["a"])),
            CourseStatus::Available
        );
    }

    #[test]
    fn test_progress_percentage() {
        let progress = Progress {
            total_credits: 27,
            required_credits: 54,
            courses_completed: 0,
            total_courses: 18,
            projects_completed: 0,
            total_projects: 4,
        };
        assert!((progress.percentage() - 50.0).abs() < f64::EPSILON);
    }
}
