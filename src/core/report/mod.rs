//! Plan summary export
//!
//! Renders a finished plan as a self-contained document: the selected track,
//! credit totals and one card per term with every planned course.

pub mod formats;

use crate::core::board::{term_columns, TermColumn};
use crate::core::catalog::Catalog;
use crate::core::eligibility::{EligibilityEngine, Progress};
use crate::core::error::{PlannerError, Result};
use crate::core::models::{Course, CourseType, PlanningState};
use jiff::civil::Date;
use jiff::Zoned;
use std::fs;
use std::path::{Path, PathBuf};

pub use formats::{ExportFormat, HtmlExporter, MarkdownExporter};

/// Title printed at the top of every summary
pub const SUMMARY_TITLE: &str = "IITM BS Diploma Plan";

/// One planned course as shown in a summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseCard {
    /// Course name
    pub name: String,
    /// Course code
    pub code: String,
    /// Credits
    pub credits: u32,
    /// Has an OPPE
    pub has_oppe: bool,
    /// Has quizzes
    pub has_quiz: bool,
    /// Is a project
    pub is_project: bool,
    /// Free-text description
    pub description: String,
    /// Prerequisite codes
    pub prerequisites: Vec<String>,
    /// Corequisite codes
    pub corequisites: Vec<String>,
    /// Styling class: "project", "programming" or "data-science"
    pub kind: &'static str,
}

impl CourseCard {
    fn build(catalog: &Catalog, course: &Course) -> Self {
        let codes = |ids: &[String]| -> Vec<String> {
            ids.iter().map(|id| catalog.code_for(id).to_string()).collect()
        };
        let kind = if course.is_project {
            "project"
        } else if course.course_type == CourseType::Programming {
            "programming"
        } else {
            "data-science"
        };

        Self {
            name: course.name.clone(),
            code: course.code.clone(),
            credits: course.credits,
            has_oppe: course.has_oppe,
            has_quiz: course.has_quiz,
            is_project: course.is_project,
            description: course.description.clone(),
            prerequisites: codes(&course.prerequisites),
            corequisites: codes(&course.corequisites),
            kind,
        }
    }
}

/// One term as shown in a summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermCard {
    /// Term label
    pub name: String,
    /// Sum of credits
    pub credits: u32,
    /// Theory course count
    pub theory: usize,
    /// OPPE course count
    pub oppe: usize,
    /// Courses in term order
    pub courses: Vec<CourseCard>,
}

impl TermCard {
    fn build(catalog: &Catalog, column: &TermColumn) -> Self {
        Self {
            name: column.term.name.clone(),
            credits: column.total_credits,
            theory: column.theory_courses,
            oppe: column.oppe_courses,
            courses: column
                .courses
                .iter()
                .map(|c| CourseCard::build(catalog, c))
                .collect(),
        }
    }
}

/// Everything a summary needs, computed once
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Catalog the plan refers to
    pub catalog: &'a Catalog,
    /// Plan being exported
    pub state: &'a PlanningState,
    /// Progress counters
    pub progress: Progress,
    /// Date printed on the summary
    pub generated_on: Date,
}

impl<'a> ReportContext<'a> {
    /// Context dated today in the system time zone
    #[must_use]
    pub fn new(catalog: &'a Catalog, state: &'a PlanningState) -> Self {
        Self::with_date(catalog, state, Zoned::now().date())
    }

    /// Context with a fixed date
    #[must_use]
    pub fn with_date(catalog: &'a Catalog, state: &'a PlanningState, generated_on: Date) -> Self {
        Self {
            catalog,
            state,
            progress: EligibilityEngine::new(catalog).calculate_progress(state),
            generated_on,
        }
    }

    /// Long label of the selected track
    #[must_use]
    pub const fn track_label(&self) -> &'static str {
        self.state.selected_track.label()
    }

    /// Human-readable generation date (e.g., "October 17, 2026")
    #[must_use]
    pub fn display_date(&self) -> String {
        self.generated_on.strftime("%B %-d, %Y").to_string()
    }

    /// Number of course entries across all terms
    #[must_use]
    pub fn planned_count(&self) -> usize {
        self.state.planned_courses().count()
    }

    /// Per-term cards in plan order
    #[must_use]
    pub fn term_cards(&self) -> Vec<TermCard> {
        term_columns(self.catalog, self.state)
            .iter()
            .map(|column| TermCard::build(self.catalog, column))
            .collect()
    }

    /// Default output file name: `diploma-plan-YYYY-MM-DD.<ext>`
    #[must_use]
    pub fn default_file_name(&self, format: ExportFormat) -> String {
        format!(
            "diploma-plan-{}.{}",
            self.generated_on.strftime("%Y-%m-%d"),
            format.extension()
        )
    }

    /// Default output path inside `dir`
    #[must_use]
    pub fn default_path(&self, dir: &Path, format: ExportFormat) -> PathBuf {
        dir.join(self.default_file_name(format))
    }
}

/// Trait for summary exporters
pub trait ReportGenerator {
    /// Render the summary and write it to a file, creating parent directories
    ///
    /// # Errors
    /// Returns an error if rendering or writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<()> {
        let content = self.render(ctx)?;
        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| PlannerError::io(parent, e))?;
        }
        fs::write(output_path, content).map_err(|e| PlannerError::io(output_path, e))
    }

    /// Render the summary to a string
    ///
    /// # Errors
    /// Returns an error if rendering fails
    fn render(&self, ctx: &ReportContext) -> Result<String>;
}
