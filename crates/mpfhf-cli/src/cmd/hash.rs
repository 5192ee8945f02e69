// crates/mpfhf-cli/src/cmd/hash.rs

use clap::Args;
use mpfhf_core::mpfhf;

#[derive(Args)]
pub struct HashArgs {
    /// Message bitstring ('0'/'1')
    #[arg(long)]
    pub message: String,

    /// Size of the R register in bits
    #[arg(long, default_value_t = 8)]
    pub size: usize,
}

pub fn run(args: HashArgs) -> anyhow::Result<()> {
    let d = mpfhf(&args.message, args.size)?;
    println!("r = {}", d.r);
    println!("s = {}", d.s);
    Ok(())
}
