mod cli;
mod error;
mod output;
mod policy;
mod reader;
mod table;

use std::path::PathBuf;

use crate::error::Result;
use clap::Parser;
use miette::IntoDiagnostic;

/// Convert a vcf-to-tab genotype table into a multi-sample FASTA file.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Input tab file. Reads from standard input when omitted.
    input: Option<PathBuf>,

    /// Substitute letter(s) for missing ("./.") genotypes.
    #[arg(short, long, default_value = "-")]
    miss: String,

    /// Output heterozygous genotypes as IUPAC ambiguity codes.
    #[arg(short, long, conflicts_with = "homo")]
    iupac: bool,

    /// Output the first-listed allele of each heterozygous genotype.
    #[arg(short = 'j', long)]
    homo: bool,

    /// Write the FASTA to a file instead of standard output.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print unrecognized genotype tokens verbatim instead of failing.
    #[arg(long)]
    lenient: bool,
}

fn try_main() -> Result<()> {
    let args = Args::parse();
    let source = cli::build_input_source(&args);
    let policy = cli::build_policy(&args);
    cli::run(&source, &policy, args.output.as_deref(), args.lenient)
}

fn main() -> miette::Result<()> {
    try_main().into_diagnostic()
}
