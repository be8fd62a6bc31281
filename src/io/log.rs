use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

/// Install a tracing subscriber that appends to `path`.
///
/// The TUI owns stdout/stderr, so logs only go to a file. Without a log file
/// no subscriber is installed and `tracing` macros are no-ops.
pub fn init_file_logging(path: &Path) -> Result<(), std::io::Error> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let subscriber = tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    // A second call (e.g. from tests) keeps the first subscriber
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(())
}
