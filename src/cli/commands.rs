use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tb", about = concat!("[x] taskboard v", env!("CARGO_PKG_VERSION"), " - a to-do list in your terminal"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding settings.json and config.toml
    #[arg(short = 'C', long = "config-dir", global = true)]
    pub config_dir: Option<PathBuf>,

    /// Append debug logs to this file
    #[arg(long = "log-file", global = true)]
    pub log_file: Option<PathBuf>,

    /// Read the saved theme but keep changes in memory (nothing is written)
    #[arg(long, global = true)]
    pub ephemeral: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show or toggle the persisted dark-mode preference
    Theme(ThemeCmd),
}

#[derive(clap::Args)]
pub struct ThemeCmd {
    #[command(subcommand)]
    pub action: Option<ThemeAction>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ThemeAction {
    /// Print the current mode (default)
    Show,
    /// Flip dark mode and save it
    Toggle,
}
