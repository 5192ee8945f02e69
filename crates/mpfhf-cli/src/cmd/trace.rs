// crates/mpfhf-cli/src/cmd/trace.rs

use clap::Args;
use mpfhf_core::Machine;

#[derive(Args)]
pub struct TraceArgs {
    /// Message bitstring ('0'/'1')
    #[arg(long)]
    pub message: String,

    /// Size of the R register in bits
    #[arg(long, default_value_t = 8)]
    pub size: usize,
}

pub fn run(args: TraceArgs) -> anyhow::Result<()> {
    let mut machine = Machine::new(&args.message, args.size)?;

    eprintln!("--- trace ---");
    eprintln!("message = {}", args.message);
    eprintln!("size    = {}", args.size);
    println!("{:>5} {:>3} {:>7}  {:<16} {}", "index", "bit", "kind", "r", "s");
    let mut evaluations = 0u64;
    while let Some(tick) = machine.step() {
        evaluations += 1;
        println!(
            "{:>5} {:>3} {:>7}  {:<16} {}",
            tick.index,
            tick.bit,
            tick.transition.to_string(),
            machine.r().render(),
            machine.s().render()
        );
    }
    eprintln!("evaluations = {evaluations}");

    Ok(())
}
