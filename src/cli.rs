//! CLI argument definitions.
//!
//! This module contains the top-level CLI structure and shared flags.
//! Individual command definitions are in the `commands` module.

use clap::Parser;
use std::path::PathBuf;

use crate::commands::Command;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the connection settings file
    #[arg(short, long, default_value = ".film_search.json", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}
