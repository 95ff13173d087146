//! HTML summary exporter
//!
//! Renders `templates/summary.html` through askama. Output is a single page
//! with inline CSS and no scripts; text is HTML-escaped by the template.

use crate::core::error::Result;
use crate::core::report::{ReportContext, ReportGenerator, TermCard, SUMMARY_TITLE};
use askama::Template;

/// Values bound into the HTML template
#[derive(Template)]
#[template(path = "summary.html")]
struct SummaryTemplate<'a> {
    title: &'a str,
    track_label: &'a str,
    date: String,
    total_credits: u32,
    required_credits: u32,
    planned_count: usize,
    terms: Vec<TermCard>,
}

/// HTML summary exporter
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlExporter;

impl HtmlExporter {
    /// Create a new HTML exporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ReportGenerator for HtmlExporter {
    fn render(&self, ctx: &ReportContext) -> Result<String> {
        let template = SummaryTemplate {
            title: SUMMARY_TITLE,
            track_label: ctx.track_label(),
            date: ctx.display_date(),
            total_credits: ctx.progress.total_credits,
            required_credits: ctx.progress.required_credits,
            planned_count: ctx.planned_count(),
            terms: ctx.term_cards(),
        };
        Ok(template.render()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Catalog;
    use crate::core::models::PlanningState;

    #[test]
    fn test_render_html_summary() {
        let catalog = Catalog::embedded();
        let mut state = PlanningState::default();
        state.terms[0].add_course("dbms".to_string());
        state.terms[0].add_course("mlf".to_string());

        let ctx = ReportContext::with_date(&catalog, &state, jiff::civil::date(2026, 1, 2));
        let html = HtmlExporter::new().render(&ctx).expect("render");

        assert!(html.contains("<title>IITM BS Diploma Plan</title>"));
        assert!(html.contains("Both Diplomas (Programming + Data Science)"));
        assert!(html.contains("January 2, 2026"));
        assert!(html.contains("8 / 54 credits"));
        assert!(html.contains("BSCS2001"));
        assert!(html.contains("1 OPPE"));
        assert!(html.contains("No courses planned"));
    }

    #[test]
    fn test_text_is_escaped() {
        let catalog = Catalog::embedded();
        let mut state = PlanningState::default();
        state.terms[0].name = "<b>Term</b>".to_string();

        let ctx = ReportContext::with_date(&catalog, &state, jiff::civil::date(2026, 1, 2));
        let html = HtmlExporter::new().render(&ctx).expect("render");

        assert!(!html.contains("<b>Term</b>"));
        assert!(html.contains("&lt;b&gt;Term"));
    }
}
