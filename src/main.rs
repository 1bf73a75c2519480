use clap::Parser;
use console::style;
use log::{info, warn};
use std::process::ExitCode;
use vfx::cli::Cli;
use vfx::init;
use vfx::launcher;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbosity = cli.verbosity();
    init::init(verbosity);

    match launcher::run(&cli) {
        Ok(status) => {
            info!("Program exited: {status:?}");
            status.exit_code()
        }
        Err(e) => {
            warn!("Program error: {e:#}");
            if verbosity.shows_progress() {
                eprintln!("{} {:#}", style("Error:").red().bold(), e);
            }
            ExitCode::FAILURE
        }
    }
}
