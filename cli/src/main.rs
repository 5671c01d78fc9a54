use std::process::exit;

use clap::{Parser, Subcommand};

mod commands;
mod logging;

use commands::{CheckCmd, MulCmd};

#[derive(Parser)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Multiply two hexadecimal numbers
    Mul(MulCmd),
    /// Cross-check random products against num-bigint
    Check(CheckCmd),
}

fn main() {
    if let Err(e) = logging::init() {
        eprintln!("Error initializing logging: {e:#}");
        exit(1);
    }

    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Mul(args) => args.run(),
        Commands::Check(args) => args.run(),
    };

    if let Err(e) = result {
        tracing::error!("{:#}", e);
        exit(1);
    }
}
