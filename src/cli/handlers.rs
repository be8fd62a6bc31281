use std::path::Path;

use serde::Serialize;

use crate::cli::commands::*;
use crate::io::config_io;
use crate::io::settings::{DARK_MODE_KEY, JsonFileStore, get_flag, open_store};
use crate::ops::board::TaskBoard;

/// JSON shape of `tb theme --json`
#[derive(Debug, Serialize)]
struct ThemeJson {
    dark_mode: bool,
    mode: &'static str,
}

fn mode_name(dark_mode: bool) -> &'static str {
    if dark_mode { "dark" } else { "light" }
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config_dir = config_io::config_dir(cli.config_dir.as_deref());

    match cli.command {
        None => crate::tui::run(&config_dir, cli.ephemeral),
        Some(Commands::Theme(cmd)) => cmd_theme(cmd, &config_dir, cli.ephemeral),
    }
}

fn cmd_theme(
    cmd: ThemeCmd,
    config_dir: &Path,
    ephemeral: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store(config_dir, ephemeral);
    let dark_mode = match cmd.action.unwrap_or(ThemeAction::Show) {
        ThemeAction::Show => get_flag(&*store, DARK_MODE_KEY),
        ThemeAction::Toggle => {
            let mut board = TaskBoard::load(&*store);
            let dark = board.toggle_dark_mode(&mut *store);
            // The board only logs failed writes; check the file really changed
            let saved = JsonFileStore::open(config_dir);
            if !ephemeral && get_flag(&saved, DARK_MODE_KEY) != dark {
                return Err(format!(
                    "could not save theme preference to {}",
                    saved.path().display()
                )
                .into());
            }
            dark
        }
    };

    if cmd.json {
        let out = ThemeJson {
            dark_mode,
            mode: mode_name(dark_mode),
        };
        println!("{}", serde_json::to_string(&out)?);
    } else {
        println!("{}", mode_name(dark_mode));
    }
    Ok(())
}
