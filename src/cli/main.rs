//! Command-line interface entry point for `dplanner`

mod args;
mod commands;

use args::{Cli, Command, TermSubcommand};
use clap::Parser;
use diploma_planner::config::Config;
use diploma_planner::core::{PlanStore, Result};
use logger::{enable_debug, enable_verbose, error, info, init_file_logging, set_level, Level};

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config; otherwise use config logging.level; fallback warn
    let effective_level = args
        .log_level
        .map(std::convert::Into::into)
        .or_else(|| config.logging.level.parse::<Level>().ok())
        .unwrap_or(Level::Warn);

    let mut level = effective_level;
    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // CLI flag wins, otherwise use config logging.file if set
    let config_log_path: Option<std::path::PathBuf> = if config.logging.file.is_empty() {
        None
    } else {
        Some(std::path::PathBuf::from(&config.logging.file))
    };

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    match run(args.command, &mut config, &defaults) {
        Ok(true) => {}
        Ok(false) => std::process::exit(2),
        Err(e) => {
            error!("{e}");
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    }
}

/// Dispatch a subcommand
///
/// # Returns
/// `false` when a requested move was rejected
fn run(command: Command, config: &mut Config, defaults: &Config) -> Result<bool> {
    let command = match command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, config, defaults);
            return Ok(true);
        }
        other => other,
    };

    let catalog = commands::load_catalog(config)?;
    if matches!(command, Command::Catalog) {
        commands::catalog::run(&catalog);
        return Ok(true);
    }

    let mut store = PlanStore::open(&catalog, commands::plan_path(config));
    match command {
        Command::Board { filter } => commands::board::run(&store, filter.into()),
        Command::Status { course } => commands::board::status(&store, &course)?,
        Command::Move {
            course,
            destination,
        } => return commands::plan::move_course(&mut store, &course, destination),
        Command::Complete { course } => commands::plan::complete(&mut store, &course)?,
        Command::Uncomplete { course } => commands::plan::uncomplete(&mut store, &course)?,
        Command::Term { subcommand } => match subcommand {
            TermSubcommand::Add => commands::plan::add_term(&mut store)?,
            TermSubcommand::Remove { term_id, yes } => {
                commands::plan::remove_term(&mut store, term_id, yes)?;
            }
        },
        Command::Track { track } => commands::plan::track(&mut store, track.map(Into::into))?,
        Command::Reset { yes } => commands::plan::reset(&mut store, yes)?,
        Command::Export { format, output } => {
            commands::export::run(&store, format.into(), output.as_deref(), config)?;
        }
        Command::Catalog | Command::Config { .. } => {}
    }
    Ok(true)
}
