use std::path::{Path, PathBuf};

use crate::Args;
use crate::error::Result;
use crate::output;
use crate::policy::{HetMode, Policy};
use crate::reader;
use crate::table::Table;

#[derive(Debug, Clone)]
pub enum InputSource {
    File(PathBuf),
    Stdin,
}

pub fn build_input_source(args: &Args) -> InputSource {
    match &args.input {
        Some(path) => InputSource::File(path.clone()),
        None => InputSource::Stdin,
    }
}

pub fn build_policy(args: &Args) -> Policy {
    // clap rejects --iupac together with --homo, so at most one is set here
    let het_mode = if args.iupac {
        HetMode::Iupac
    } else if args.homo {
        HetMode::FirstAllele
    } else {
        HetMode::ConservativeN
    };
    Policy::new(het_mode, &args.miss)
}

pub fn run(
    source: &InputSource,
    policy: &Policy,
    output_path: Option<&Path>,
    lenient: bool,
) -> Result<()> {
    let rows = match source {
        InputSource::File(path) => reader::read_table_file(path)?,
        InputSource::Stdin => reader::read_table_stdin()?,
    };
    let table = Table::from_rows(rows)?;
    let fasta = output::render_fasta(&table, policy, lenient)?;
    match output_path {
        Some(path) => output::write_fasta_file(&path, &fasta),
        None => output::write_fasta_stdout(&fasta),
    }
}
