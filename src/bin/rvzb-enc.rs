use anyhow::{bail, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use rvzb_rs::{ExtSet, Outcome, Rewriter};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Encode one B-extension instruction as a .byte directive"
)]
struct Opts {
    /// Instruction text, e.g. "clz t0, t1"
    #[arg(value_name = "INSTR")]
    instr: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let opts = Opts::parse();
    match Rewriter::new(ExtSet::all()).rewrite_line(&opts.instr) {
        Outcome::Bytes(line) => println!("{line}"),
        Outcome::Passthrough => bail!("not a recognized bit-manipulation instruction: {}", opts.instr),
        Outcome::Fallback { mnemonic, error } => bail!("{mnemonic}: {error}"),
    }
    Ok(())
}
