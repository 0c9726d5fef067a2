mod cli;
mod error;
mod films;
mod logging;
mod ui;

use clap::Parser;
use cli::Cli;
use std::process;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let args = films::FilmsArgs {
        endpoint: cli.endpoint,
        config_path: cli.config,
    };

    if let Err(err) = films::execute(args, cli.command) {
        ui::error_message(&err.user_message());
        process::exit(1);
    }
}
