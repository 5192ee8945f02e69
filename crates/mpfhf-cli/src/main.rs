// crates/mpfhf-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "mpfhf-cli")]
#[command(about = "mpfhf forward hash and preimage search", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Hash a message bitstring into an (R, S) digest
    Hash(cmd::hash::HashArgs),

    /// Search for a message of a given length hashing to a target (R, S)
    Invert(cmd::invert::InvertArgs),

    /// Print every forward-machine transition for a message
    Trace(cmd::trace::TraceArgs),

    /// Hash, invert the digest, re-hash, and compare
    Roundtrip(cmd::roundtrip::RoundtripArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Hash(args) => cmd::hash::run(args),
        Commands::Invert(args) => cmd::invert::run(args),
        Commands::Trace(args) => cmd::trace::run(args),
        Commands::Roundtrip(args) => cmd::roundtrip::run(args),
    }
}
