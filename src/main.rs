mod calendar_cmd;
mod cli;
mod clock;
mod config;
mod convert;
mod logging;
mod next_cmd;
mod render;
mod source;
mod ticker;
mod watch_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Calendar(args) => calendar_cmd::run(args),
        Command::Next(args) => next_cmd::run(args),
        Command::Watch(args) => watch_cmd::run(args),
    }
}
