//! Shared library for `dplanner`
//! Contains the planning engine, plan store, board views and exporters used by the CLI

pub mod config;
pub mod core;

pub use crate::core::get_version;
