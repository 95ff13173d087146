//! Read-only board projections: the course pool and per-term columns
//!
//! These are what a front end draws. They are recomputed from a plan
//! snapshot every time and never stored.

use crate::core::catalog::Catalog;
use crate::core::eligibility::{get_course_status, CourseStatus, EligibilityEngine, Progress};
use crate::core::models::{Course, CourseType, PlanningState, Term};
use std::fmt;

/// Tabs of the course pool
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PoolFilter {
    /// Every pool course
    #[default]
    All,
    /// Programming courses only
    Programming,
    /// Data science courses only
    DataScience,
}

impl PoolFilter {
    /// Whether a course shows under this tab
    #[must_use]
    pub fn matches(self, course: &Course) -> bool {
        match self {
            Self::All => true,
            Self::Programming => course.course_type == CourseType::Programming,
            Self::DataScience => course.course_type == CourseType::DataScience,
        }
    }
}

impl fmt::Display for PoolFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "All"),
            Self::Programming => write!(f, "Programming"),
            Self::DataScience => write!(f, "Data Science"),
        }
    }
}

/// A pool course with its current status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolEntry<'a> {
    /// The course
    pub course: &'a Course,
    /// Its display status
    pub status: CourseStatus,
}

/// A term with its courses resolved and tallied
#[derive(Debug, Clone)]
pub struct TermColumn<'a> {
    /// The underlying term
    pub term: &'a Term,
    /// Courses found in the catalog, in term order
    pub courses: Vec<&'a Course>,
    /// Sum of credits
    pub total_credits: u32,
    /// Non-project course count
    pub theory_courses: usize,
    /// Course count with an OPPE
    pub oppe_courses: usize,
}

impl<'a> TermColumn<'a> {
    /// Resolve a term against the catalog; unknown ids are skipped
    #[must_use]
    pub fn build(catalog: &'a Catalog, term: &'a Term) -> Self {
        let courses: Vec<&Course> = term.courses.iter().filter_map(|id| catalog.get(id)).collect();
        let total_credits = courses.iter().map(|c| c.credits).sum();
        let theory_courses = courses.iter().filter(|c| c.is_theory()).count();
        let oppe_courses = courses.iter().filter(|c| c.has_oppe).count();

        Self {
            term,
            courses,
            total_credits,
            theory_courses,
            oppe_courses,
        }
    }

    /// Whether nothing is planned in this term
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

/// Required-for-track courses that are neither planned nor completed
///
/// # Arguments
/// * `catalog` - Course catalog
/// * `state` - Plan snapshot
/// * `filter` - Pool tab
#[must_use]
pub fn course_pool<'a>(
    catalog: &'a Catalog,
    state: &PlanningState,
    filter: PoolFilter,
) -> Vec<PoolEntry<'a>> {
    let engine = EligibilityEngine::new(catalog);
    let required = engine.get_required_courses(state.selected_track);
    let completed = state.completed_set();
    let planned = state.planned_set();

    catalog
        .courses()
        .iter()
        .filter(|c| required.contains(&c.id.as_str()))
        .filter(|c| !planned.contains(c.id.as_str()) && !completed.contains(c.id.as_str()))
        .filter(|c| filter.matches(c))
        .map(|course| PoolEntry {
            course,
            status: get_course_status(course, &completed, &planned),
        })
        .collect()
}

/// One column per term, in plan order
#[must_use]
pub fn term_columns<'a>(catalog: &'a Catalog, state: &'a PlanningState) -> Vec<TermColumn<'a>> {
    state
        .terms
        .iter()
        .map(|term| TermColumn::build(catalog, term))
        .collect()
}

/// Everything a board front end renders
#[derive(Debug, Clone)]
pub struct BoardView<'a> {
    /// Progress counters
    pub progress: Progress,
    /// Number of planned course entries across all terms
    pub planned_count: usize,
    /// Pool entries for the chosen tab
    pub pool: Vec<PoolEntry<'a>>,
    /// Term columns
    pub columns: Vec<TermColumn<'a>>,
}

impl<'a> BoardView<'a> {
    /// Derive the whole board from a snapshot
    #[must_use]
    pub fn build(catalog: &'a Catalog, state: &'a PlanningState, filter: PoolFilter) -> Self {
        Self {
            progress: EligibilityEngine::new(catalog).calculate_progress(state),
            planned_count: state.planned_courses().count(),
            pool: course_pool(catalog, state, filter),
            columns: term_columns(catalog, state),
        }
    }
}
