//! Integration tests for board views and summary export

use diploma_planner::core::board::{BoardView, PoolFilter};
use diploma_planner::core::models::{PlanningState, Track};
use diploma_planner::core::report::{ExportFormat, ReportContext, ReportGenerator};
use diploma_planner::core::report::{HtmlExporter, MarkdownExporter};
use diploma_planner::core::{Catalog, CourseStatus, Destination, PlanStore};
use std::fs;
use tempfile::TempDir;

fn planned_store(catalog: &Catalog) -> PlanStore<'_> {
    let mut store = PlanStore::new(catalog, PlanningState::default());
    store.set_track(Track::Programming).expect("track");
    store.mark_completed("mad1").expect("complete");
    for (course, term) in [("dbms", 1), ("pdsa", 1), ("mad1-project", 1), ("mad2", 2), ("mad2-project", 2)] {
        let decision = store.move_course(course, Destination::Term(term)).expect("move");
        assert!(decision.can_add(), "{course}: {:?}", decision.reason());
    }
    store
}

#[test]
fn board_view_reflects_the_plan() {
    let catalog = Catalog::embedded();
    let store = planned_store(&catalog);
    let view = BoardView::build(&catalog, store.state(), PoolFilter::All);

    assert_eq!(view.planned_count, 5);
    assert_eq!(view.progress.total_credits, 4 + 4 + 4 + 2 + 4 + 2);
    assert_eq!(view.progress.required_credits, 27);
    assert_eq!(view.progress.projects_completed, 2);

    let pool: Vec<&str> = view.pool.iter().map(|e| e.course.id.as_str()).collect();
    assert_eq!(pool, vec!["java", "sc"]);
    assert!(view.pool.iter().all(|e| e.status == CourseStatus::Available));

    assert_eq!(view.columns.len(), 4);
    assert_eq!(view.columns[0].total_credits, 10);
    assert_eq!(view.columns[0].theory_courses, 2);
    assert_eq!(view.columns[0].oppe_courses, 2);
    assert!(view.columns[2].is_empty());
}

#[test]
fn data_science_tab_is_empty_under_programming() {
    let catalog = Catalog::embedded();
    let store = planned_store(&catalog);
    let view = BoardView::build(&catalog, store.state(), PoolFilter::DataScience);
    assert!(view.pool.is_empty());
}

#[test]
fn exports_write_dated_files() {
    let catalog = Catalog::embedded();
    let store = planned_store(&catalog);
    let dir = TempDir::new().expect("Failed to create temp dir");
    let ctx = ReportContext::with_date(&catalog, store.state(), jiff::civil::date(2026, 10, 17));

    let html_path = ctx.default_path(&dir.path().join("exports"), ExportFormat::Html);
    assert!(html_path.ends_with("exports/diploma-plan-2026-10-17.html"));
    HtmlExporter::new().generate(&ctx, &html_path).expect("html");
    let html = fs::read_to_string(&html_path).expect("read html");
    assert!(html.contains("Programming Diploma"));
    assert!(html.contains("20 / 27 credits"));
    assert!(html.contains("5 courses"));
    assert!(html.contains("Modern Application Development II - Project"));

    let md_path = dir.path().join("plan.md");
    ExportFormat::Markdown.generate(&ctx, &md_path).expect("markdown");
    let md = fs::read_to_string(&md_path).expect("read md");
    assert_eq!(md, MarkdownExporter::new().render(&ctx).expect("render"));
    assert!(md.contains("## Term 1"));
    assert!(md.contains("**10 cr** · 2 courses · 2 OPPE"));
    assert!(md.contains("  - Prerequisites: BSCS2003P"));
}
