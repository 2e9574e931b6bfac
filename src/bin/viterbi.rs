//! Command-line front-end for the convolutional codec.
//!
//! Reads a `<constraint> <polynomial>... <bits>` triple from the command
//! line or, when no positional arguments are given, from stdin (blank
//! lines and `#` comments are skipped), then prints the decoded or encoded
//! bit string.

use std::io::{self, BufRead};

use anyhow::{bail, Context, Result};
use clap::Parser;

use viterbi_codec::{CodeConfig, ViterbiCodec};

/// Encode or decode a binary sequence with a rate-1/n convolutional code.
#[derive(Parser, Debug)]
#[command(name = "viterbi")]
#[command(version, about, long_about = None)]
#[command(after_help = "Examples:\n  \
    viterbi 3 7 5 0011100001100111111000101100111011\n  \
    viterbi 7 91 117 121 111100101110001011110101111111001011100111\n  \
    viterbi --reverse-polynomials 3 3 5 111011011100101011\n  \
    viterbi --encode 3 7 5 010111001010001")]
struct Cli {
    /// Encode instead of decode
    #[arg(long)]
    encode: bool,

    /// Reverse polynomial bit order, e.g. 6 (=0b110) becomes 3 (=0b011).
    ///
    /// Supports the notation where bit significance is mirrored, as used
    /// by MATLAB.
    #[arg(long)]
    reverse_polynomials: bool,

    /// <constraint> <polynomial>... <bits>; read from stdin when omitted
    args: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let args = if cli.args.is_empty() {
        read_stdin_args()?
    } else {
        cli.args
    };
    if args.len() < 3 {
        bail!("expected <constraint> <polynomial>... <bits>, got {} arguments", args.len());
    }

    let constraint: usize = args[0]
        .parse()
        .with_context(|| format!("expected a constraint length, found {:?}", args[0]))?;

    let polynomials: Vec<u64> = args[1..args.len() - 1]
        .iter()
        .map(|arg| {
            arg.parse()
                .with_context(|| format!("expected a polynomial, found {:?}", arg))
        })
        .collect::<Result<_>>()?;

    let mut config = CodeConfig::new(constraint, polynomials);
    if cli.reverse_polynomials {
        config = config.reverse_polynomials();
    }
    let codec = ViterbiCodec::new(config)?;

    let bits = &args[args.len() - 1];
    let output = if cli.encode {
        codec.encode(bits)?
    } else {
        codec.decode(bits)?
    };
    println!("{output}");

    Ok(())
}

/// Collect whitespace-separated tokens from stdin, skipping blank lines and
/// lines starting with '#'.
fn read_stdin_args() -> Result<Vec<String>> {
    let mut args = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read stdin")?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        args.extend(line.split_whitespace().map(str::to_owned));
    }
    Ok(args)
}
