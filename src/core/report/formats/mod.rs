//! Summary export formats
//!
//! Provides exporters for HTML and Markdown.

pub mod html;
pub mod markdown;

pub use html::HtmlExporter;
pub use markdown::MarkdownExporter;

use crate::core::report::{ReportContext, ReportGenerator};
use crate::core::error::Result;
use std::fmt;
use std::path::Path;

/// Supported export formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    /// Self-contained HTML page
    #[default]
    Html,
    /// Markdown document
    Markdown,
}

impl ExportFormat {
    /// Get the file extension for this format
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Markdown => "md",
        }
    }

    /// Render with the matching exporter
    ///
    /// # Errors
    /// Returns an error if rendering fails
    pub fn render(self, ctx: &ReportContext) -> Result<String> {
        match self {
            Self::Html => HtmlExporter::new().render(ctx),
            Self::Markdown => MarkdownExporter::new().render(ctx),
        }
    }

    /// Render with the matching exporter and write to `output_path`
    ///
    /// # Errors
    /// Returns an error if rendering or writing fails
    pub fn generate(self, ctx: &ReportContext, output_path: &Path) -> Result<()> {
        match self {
            Self::Html => HtmlExporter::new().generate(ctx, output_path),
            Self::Markdown => MarkdownExporter::new().generate(ctx, output_path),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Html => write!(f, "html"),
            Self::Markdown => write!(f, "markdown"),
        }
    }
}
