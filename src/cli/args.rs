//! CLI argument definitions for `dplanner`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use diploma_planner::config::ConfigOverrides;
use diploma_planner::core::board::PoolFilter;
use diploma_planner::core::models::Track;
use diploma_planner::core::report::ExportFormat;
use diploma_planner::core::Destination;
use logger::Level;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to lowercase
/// strings for config storage and to `logger::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

/// Diploma track argument
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum TrackArg {
    /// Diploma in Programming
    Programming,
    /// Diploma in Data Science, Business Analytics path
    #[value(alias = "ba")]
    DataScienceBa,
    /// Diploma in Data Science, Deep Learning path
    #[value(alias = "dl")]
    DataScienceDl,
    /// Both diplomas
    Both,
}

impl From<TrackArg> for Track {
    fn from(arg: TrackArg) -> Self {
        match arg {
            TrackArg::Programming => Self::Programming,
            TrackArg::DataScienceBa => Self::DataScienceBa,
            TrackArg::DataScienceDl => Self::DataScienceDl,
            TrackArg::Both => Self::Both,
        }
    }
}

/// Course pool tab
#[derive(Copy, Clone, Debug, Default, ValueEnum, PartialEq, Eq)]
pub enum FilterArg {
    /// All pool courses
    #[default]
    All,
    /// Programming courses only
    Programming,
    /// Data science courses only
    #[value(alias = "ds")]
    DataScience,
}

impl From<FilterArg> for PoolFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::All => Self::All,
            FilterArg::Programming => Self::Programming,
            FilterArg::DataScience => Self::DataScience,
        }
    }
}

/// Summary export format
#[derive(Copy, Clone, Debug, Default, ValueEnum, PartialEq, Eq)]
pub enum FormatArg {
    /// Self-contained HTML page
    #[default]
    Html,
    /// Markdown document
    #[value(alias = "markdown")]
    Md,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Html => Self::Html,
            FormatArg::Md => Self::Markdown,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `plan_file`, `reports_dir`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum TermSubcommand {
    /// Append an empty term.
    Add,
    /// Remove a term. Its courses return to the pool.
    Remove {
        /// Id of the term to remove
        #[arg(value_name = "TERM_ID")]
        term_id: u32,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the planning board.
    ///
    /// Prints progress, the course pool and every term with its load.
    Board {
        /// Course pool tab
        #[arg(short, long, value_enum, default_value_t = FilterArg::All)]
        filter: FilterArg,
    },
    /// Show a course's status and where it could be placed.
    Status {
        /// Course id or code (e.g., `mlp` or `BSCS2008`)
        #[arg(value_name = "COURSE")]
        course: String,
    },
    /// Move a course into a term, or back to the pool.
    ///
    /// The move is validated first; a rejected move changes nothing.
    Move {
        /// Course id or code
        #[arg(value_name = "COURSE")]
        course: String,
        /// Destination term id, or `pool`
        #[arg(value_name = "TERM_ID|pool")]
        destination: Destination,
    },
    /// Mark a course as completed outside the planner.
    Complete {
        /// Course id or code
        #[arg(value_name = "COURSE")]
        course: String,
    },
    /// Clear a course's completed mark.
    Uncomplete {
        /// Course id or code
        #[arg(value_name = "COURSE")]
        course: String,
    },
    /// Add or remove terms.
    Term {
        #[command(subcommand)]
        subcommand: TermSubcommand,
    },
    /// Show or change the selected track.
    Track {
        /// New track; omit to show the current one
        #[arg(value_enum)]
        track: Option<TrackArg>,
    },
    /// Discard the plan and start over (requires confirmation).
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Export a summary of the plan.
    Export {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = FormatArg::Html)]
        format: FormatArg,
        /// Output file path (optional; defaults to config `reports_dir`)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// List the courses in the catalog.
    Catalog,
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "dplanner",
    about = "Plan your IITM BS diploma term by term",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Use this plan file instead of the configured one
    #[arg(long, value_name = "PATH")]
    pub plan_file: Option<PathBuf>,

    /// Use this catalog file instead of the configured one
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config export directory
    #[arg(long = "config-reports-dir", value_name = "DIR")]
    pub config_reports_dir: Option<PathBuf>,

    /// Override config export directory (short form)
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

fn path_string(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Short-form flags (e.g., `--reports-dir`) take precedence over
    /// long-form flags (e.g., `--config-reports-dir`) when both are provided.
    ///
    /// # Returns
    /// A `ConfigOverrides` struct with values from CLI flags, where `None` means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string().to_lowercase()),
            file: self.config_log_file.as_deref().map(path_string),
            verbose: self.config_verbose,
            plan_file: self.plan_file.as_deref().map(path_string),
            reports_dir: self
                .reports_dir
                .as_deref()
                .or(self.config_reports_dir.as_deref())
                .map(path_string),
            catalog_file: self.catalog.as_deref().map(path_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_cli(command: Command) -> Cli {
        Cli {
            log_level: None,
            verbose: false,
            debug_flag: false,
            log_file: None,
            plan_file: None,
            catalog: None,
            config_level: None,
            config_log_file: None,
            config_verbose: None,
            config_reports_dir: None,
            reports_dir: None,
            command,
        }
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
        assert_eq!(LogLevelArg::Info.to_string(), "info");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_log_level_to_logger_level() {
        assert_eq!(Level::from(LogLevelArg::Error), Level::Error);
        assert_eq!(Level::from(LogLevelArg::Warn), Level::Warn);
        assert_eq!(Level::from(LogLevelArg::Info), Level::Info);
        assert_eq!(Level::from(LogLevelArg::Debug), Level::Debug);
    }

    #[test]
    fn test_value_enums_convert() {
        assert_eq!(Track::from(TrackArg::DataScienceDl), Track::DataScienceDl);
        assert_eq!(PoolFilter::from(FilterArg::DataScience), PoolFilter::DataScience);
        assert_eq!(ExportFormat::from(FormatArg::Md), ExportFormat::Markdown);
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let overrides = bare_cli(Command::Config { subcommand: None }).to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.plan_file.is_none());
        assert!(overrides.reports_dir.is_none());
        assert!(overrides.catalog_file.is_none());
    }

    #[test]
    fn test_to_config_overrides_with_values() {
        let mut cli = bare_cli(Command::Catalog);
        cli.config_level = Some(LogLevelArg::Debug);
        cli.config_log_file = Some(PathBuf::from("/tmp/test.log"));
        cli.config_verbose = Some(true);
        cli.plan_file = Some(PathBuf::from("/tmp/plan.json"));
        cli.catalog = Some(PathBuf::from("/tmp/catalog.toml"));
        cli.reports_dir = Some(PathBuf::from("/exports"));

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level, Some("debug".to_string()));
        assert_eq!(overrides.file, Some("/tmp/test.log".to_string()));
        assert_eq!(overrides.verbose, Some(true));
        assert_eq!(overrides.plan_file, Some("/tmp/plan.json".to_string()));
        assert_eq!(overrides.catalog_file, Some("/tmp/catalog.toml".to_string()));
        assert_eq!(overrides.reports_dir, Some("/exports".to_string()));
    }

    #[test]
    fn test_short_form_precedence_over_long_form() {
        let mut cli = bare_cli(Command::Catalog);
        cli.config_reports_dir = Some(PathBuf::from("/long/out"));
        cli.reports_dir = Some(PathBuf::from("/short/out"));
        assert_eq!(cli.to_config_overrides().reports_dir, Some("/short/out".to_string()));

        cli.reports_dir = None;
        assert_eq!(cli.to_config_overrides().reports_dir, Some("/long/out".to_string()));
    }

    #[test]
    fn test_parse_move_command() {
        let cli = Cli::try_parse_from(["dplanner", "move", "mlp", "pool"]).expect("parse");
        match cli.command {
            Command::Move {
                course,
                destination,
            } => {
                assert_eq!(course, "mlp");
                assert_eq!(destination, Destination::Pool);
            }
            other => panic!("unexpected command: {other:?}"),
        }

        let cli = Cli::try_parse_from(["dplanner", "track", "dl"]).expect("parse");
        assert!(matches!(
            cli.command,
            Command::Track {
                track: Some(TrackArg::DataScienceDl)
            }
        ));
    }
}
