use anyhow::Result;
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::io::Read;
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use rvzb_rs::{ExtSet, Outcome, Rewriter};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Rewrite RISC-V B-extension instructions as raw .byte directives",
    long_about = None
)]
struct Cli {
    /// Input assembly file (standard input if omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// Rewrite only these extension groups (default: all)
    #[arg(long = "ext", value_enum, value_delimiter = ',', num_args = 1..)]
    exts: Vec<ExtArg>,
    /// Write a JSON rewrite report to FILE
    #[arg(long, value_name = "FILE")]
    report: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ExtArg {
    Zba,
    Zbb,
    Zbc,
    Zbs,
}

impl From<ExtArg> for ExtSet {
    fn from(e: ExtArg) -> Self {
        match e {
            ExtArg::Zba => ExtSet::ZBA,
            ExtArg::Zbb => ExtSet::ZBB,
            ExtArg::Zbc => ExtSet::ZBC,
            ExtArg::Zbs => ExtSet::ZBS,
        }
    }
}

fn enabled_set(exts: &[ExtArg]) -> ExtSet {
    if exts.is_empty() {
        ExtSet::all()
    } else {
        exts.iter()
            .copied()
            .map(ExtSet::from)
            .fold(ExtSet::empty(), |acc, e| acc | e)
    }
}

#[derive(Debug, Clone, Serialize)]
struct FallbackOut {
    line: usize,
    mnemonic: String,
    reason: String,
}

#[derive(Debug, Serialize)]
struct Report {
    lines: usize,
    rewritten: usize,
    passthrough: usize,
    fallbacks: Vec<FallbackOut>,
}

fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout must stay a clean assembly stream.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let content = match &cli.input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let rw = Rewriter::new(enabled_set(&cli.exts));
    let mut report = Report {
        lines: 0,
        rewritten: 0,
        passthrough: 0,
        fallbacks: Vec::new(),
    };
    let mut out = String::new();
    for (idx, line) in content.lines().enumerate() {
        report.lines += 1;
        match rw.rewrite_line(line) {
            Outcome::Bytes(repl) => {
                report.rewritten += 1;
                out.push_str(&repl);
            }
            Outcome::Passthrough => {
                report.passthrough += 1;
                out.push_str(line);
            }
            Outcome::Fallback { mnemonic, error } => {
                warn!("line {}: {mnemonic} left as-is: {error}", idx + 1);
                report.passthrough += 1;
                report.fallbacks.push(FallbackOut {
                    line: idx + 1,
                    mnemonic: mnemonic.to_string(),
                    reason: error.to_string(),
                });
                out.push_str(line);
            }
        }
        out.push('\n');
    }
    print!("{out}");

    if let Some(path) = &cli.report {
        std::fs::write(path, serde_json::to_string_pretty(&report)?)?;
    }
    Ok(())
}
