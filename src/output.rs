use std::io::{self, Write};
use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};

use crate::error::{CustomError, Result};
use crate::policy::Policy;
use crate::table::Table;

/// Render every sample record into one buffer: `>` + label, then the
/// concatenated encoded tokens with no separators. Nothing is written
/// until every token has encoded, so a failing run emits no partial FASTA.
pub fn render_fasta(table: &Table, policy: &Policy, lenient: bool) -> Result<String> {
    let pb = ProgressBar::new(table.n_samples() as u64);
    pb.set_style(
        ProgressStyle::with_template("[{elapsed_precise}] {bar:30} {pos}/{len} samples").unwrap(),
    );

    let mut out = String::with_capacity(table.n_samples() * (table.n_sites() + 16));
    for sample in table.sample_columns() {
        out.push('>');
        out.push_str(sample.label);
        out.push('\n');
        for (site_idx, token) in sample.tokens.iter().enumerate() {
            match policy.encode(token) {
                Some(encoded) => out.push_str(encoded),
                // Lenient runs print unknown tokens verbatim instead of aborting
                None if lenient => out.push_str(token),
                None => {
                    return Err(CustomError::UnrecognizedGenotype {
                        token: token.to_string(),
                        sample: sample.label.to_string(),
                        line_num: Table::site_line(site_idx),
                    });
                }
            }
        }
        out.push('\n');
        pb.inc(1);
    }
    pb.abandon();
    Ok(out)
}

pub fn write_fasta_file(path: &impl AsRef<Path>, fasta: &str) -> Result<()> {
    std::fs::write(path.as_ref(), fasta).map_err(|source| CustomError::Write {
        source,
        path: path.as_ref().to_path_buf(),
    })
}

pub fn write_fasta_stdout(fasta: &str) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle
        .write_all(fasta.as_bytes())
        .map_err(|source| CustomError::WriteStdout { source })
}
