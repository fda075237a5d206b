use agentgate_core::logging;
use clap::Parser;

mod cli;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();

    // Initialize logging as early as possible; stderr if the log file is unusable.
    if let Err(err) = logging::init_logging(cli.log_file.as_deref()) {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable: {:#}", err);
    }

    if let Err(err) = cli.run() {
        eprintln!("agentgate error: {:#}", err);
        std::process::exit(1);
    }
}
