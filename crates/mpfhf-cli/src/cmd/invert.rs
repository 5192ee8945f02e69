// crates/mpfhf-cli/src/cmd/invert.rs

use clap::Args;
use mpfhf_core::preimage;

#[derive(Args)]
pub struct InvertArgs {
    /// Target R bitstring
    #[arg(long)]
    pub r: String,

    /// Target S bitstring
    #[arg(long)]
    pub s: String,

    /// Length of the message to search for
    #[arg(long)]
    pub len: usize,
}

pub fn run(args: InvertArgs) -> anyhow::Result<()> {
    match preimage(&args.r, &args.s, args.len)? {
        Some(message) => {
            println!("{message}");
            Ok(())
        }
        None => anyhow::bail!(
            "no message of length {} hashes to r={} s={}",
            args.len,
            args.r,
            args.s
        ),
    }
}
