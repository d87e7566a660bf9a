mod bundle;
mod cli;
mod locations;
mod platform;
mod util;
mod verify;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        util::ui::error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Os) => cli::os::run(),
        Some(Commands::SearchPath { json }) => cli::search_path::run(json),
        Some(Commands::Resolve { json }) => cli::resolve::run(json),
        None => {
            // No command provided, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
            Ok(())
        }
    }
}
