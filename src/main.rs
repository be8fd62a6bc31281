use clap::Parser;
use taskboard::cli::commands::Cli;
use taskboard::cli::handlers;
use taskboard::io::log::init_file_logging;

fn main() {
    let cli = Cli::parse();

    if let Some(ref path) = cli.log_file
        && let Err(e) = init_file_logging(path)
    {
        eprintln!("error: could not open log file {}: {}", path.display(), e);
        std::process::exit(1);
    }

    if let Err(e) = handlers::dispatch(cli) {
        tracing::error!(error = %e, "exiting with error");
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
