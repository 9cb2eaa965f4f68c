//! Command-line toolkit for operations with bitcoin addresses.

mod commands;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "coinkit", about = "toolkit for operations with bitcoin addresses", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Encode and decode bitcoin addresses
    #[command(subcommand, visible_alias = "a")]
    Address(commands::AddressCommand),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Address(command) => commands::run_address(command),
    };

    if let Err(err) = result {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
