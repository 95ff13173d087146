//! Markdown summary exporter
//!
//! Renders plan summaries as Markdown that reads well on GitHub, GitLab and
//! in most editors.

use crate::core::error::Result;
use crate::core::report::{CourseCard, ReportContext, ReportGenerator, TermCard, SUMMARY_TITLE};
use std::fmt::Write;

/// Embedded Markdown summary template
const MARKDOWN_TEMPLATE: &str = include_str!("../../../../templates/summary.md");

/// Markdown summary exporter
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownExporter;

impl MarkdownExporter {
    /// Create a new Markdown exporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the summary using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let mut output = MARKDOWN_TEMPLATE.to_string();

        output = output.replace("{{title}}", SUMMARY_TITLE);
        output = output.replace("{{date}}", &ctx.display_date());
        output = output.replace("{{track_label}}", ctx.track_label());
        output = output.replace("{{total_credits}}", &ctx.progress.total_credits.to_string());
        output = output.replace(
            "{{required_credits}}",
            &ctx.progress.required_credits.to_string(),
        );
        output = output.replace("{{planned_count}}", &ctx.planned_count().to_string());

        let terms: String = ctx.term_cards().iter().map(Self::term_section).collect();
        output = output.replace("{{terms}}", &terms);

        output
    }

    /// One `##` section per term
    fn term_section(term: &TermCard) -> String {
        let mut section = String::new();

        let _ = writeln!(section, "## {}", term.name);
        section.push('\n');
        let _ = write!(section, "**{} cr** · {} courses", term.credits, term.theory);
        if term.oppe > 0 {
            let _ = write!(section, " · {} OPPE", term.oppe);
        }
        section.push_str("\n\n");

        if term.courses.is_empty() {
            section.push_str("_No courses planned_\n\n");
            return section;
        }

        for course in &term.courses {
            Self::course_entry(&mut section, course);
        }
        section.push('\n');
        section
    }

    fn course_entry(out: &mut String, course: &CourseCard) {
        let mut badges = vec![format!("`{}`", course.code), format!("{} cr", course.credits)];
        if course.has_oppe {
            badges.push("OPPE".to_string());
        }
        if course.has_quiz {
            badges.push("Quiz".to_string());
        }
        if course.is_project {
            badges.push("Project".to_string());
        }

        let _ = writeln!(out, "- **{}** ({})", course.name, badges.join(" · "));
        if !course.description.is_empty() {
            let _ = writeln!(out, "  - {}", course.description);
        }
        if !course.prerequisites.is_empty() {
            let _ = writeln!(out, "  - Prerequisites: {}", course.prerequisites.join(", "));
        }
        if !course.corequisites.is_empty() {
            let _ = writeln!(out, "  - Corequisites: {}", course.corequisites.join(", "));
        }
    }
}

impl ReportGenerator for MarkdownExporter {
    fn render(&self, ctx: &ReportContext) -> Result<String> {
        Ok(self.render_template(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Catalog;
    use crate::core::models::{PlanningState, Track};

    #[test]
    fn test_render_markdown_summary() {
        let catalog = Catalog::embedded();
        let mut state = PlanningState::default();
        state.selected_track = Track::DataScienceDl;
        state.terms[0].add_course("mlf".to_string());
        state.terms[1].add_course("mlt".to_string());
        state.terms[1].add_course("mlp".to_string());

        let ctx = ReportContext::with_date(&catalog, &state, jiff::civil::date(2026, 5, 20));
        let md = MarkdownExporter::new().render(&ctx).expect("render");

        assert!(md.starts_with("# IITM BS Diploma Plan"));
        assert!(md.contains("_Generated on May 20, 2026_"));
        assert!(md.contains("| Data Science Diploma (Deep Learning & AI Track) | 12 / 27 credits | 3 courses |"));
        assert!(md.contains("## Term 2"));
        assert!(md.contains("**8 cr** · 2 courses · 1 OPPE"));
        assert!(md.contains("- **Machine Learning Practice** (`BSCS2008` · 4 cr · OPPE)"));
        assert!(md.contains("  - Prerequisites: BSCS2004"));
        assert!(md.contains("  - Corequisites: BSCS2007"));
        assert!(md.contains("_No courses planned_"));
        assert!(!md.contains("{{"));
    }
}
