//! Export command handler

use diploma_planner::config::Config;
use diploma_planner::core::report::{ExportFormat, ReportContext};
use diploma_planner::core::{PlanStore, Result};
use logger::info;
use std::path::{Path, PathBuf};

/// Write a plan summary
///
/// Without `output` the file lands in the configured reports directory as
/// `diploma-plan-YYYY-MM-DD.<ext>`.
///
/// # Returns
/// Path of the written file
///
/// # Errors
/// Returns an error if rendering or writing fails
pub fn run(
    store: &PlanStore,
    format: ExportFormat,
    output: Option<&Path>,
    config: &Config,
) -> Result<PathBuf> {
    let ctx = ReportContext::new(store.catalog(), store.state());

    let output_path = output.map_or_else(
        || {
            let dir = if config.paths.reports_dir.is_empty() {
                Config::get_dplanner_dir().join("exports")
            } else {
                PathBuf::from(&config.paths.reports_dir)
            };
            ctx.default_path(&dir, format)
        },
        Path::to_path_buf,
    );

    info!("Rendering {format} summary to {}", output_path.display());
    format.generate(&ctx, &output_path)?;
    println!("✓ Summary exported: {}", output_path.display());
    Ok(output_path)
}
