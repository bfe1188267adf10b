use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

pub struct Dataset {
    pub input: PathBuf,
    pub dir: PathBuf,
}

/// Write a tab file into a fresh per-test temp directory.
pub fn write_table(label: &str, contents: &str) -> io::Result<Dataset> {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    let dir = std::env::temp_dir().join("tab2fasta-tests").join(format!(
        "{}-{}-{}",
        std::process::id(),
        id,
        label
    ));
    fs::create_dir_all(&dir)?;

    let input = dir.join("calls.tab");
    fs::write(&input, contents)?;
    Ok(Dataset { input, dir })
}

// Three samples over four sites, covering homozygous, heterozygous (both
// orderings), and missing calls.
pub const TABLE: &str = "#CHROM\tPOS\tREF\tS1\tS2\tS3\n\
                         1\t.\t.\t.\t.\t.\n\
                         1\t.\t.\t.\t.\t.\n\
                         1\t100\tA\tA/A\tA/G\t./.\n\
                         1\t200\tC\tC/C\tC/A\tT/T\n\
                         1\t300\tG\tG/T\tG/G\tC/G\n\
                         1\t400\tT\tT/T\tT/C\tA/T\n";

pub const EXPECTED_CONSERVATIVE: &str = ">S1\nACNT\n>S2\nNNGN\n>S3\n-TNN\n";
pub const EXPECTED_IUPAC: &str = ">S1\nACKT\n>S2\nRMGY\n>S3\n-TSW\n";
pub const EXPECTED_HOMO: &str = ">S1\nACGT\n>S2\nACGT\n>S3\n-TCA\n";
