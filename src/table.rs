use crate::error::{CustomError, Result};

// vcf-to-tab layout: rows 0..3 are header/metadata (labels, then two
// reserved rows), columns 0..3 are per-site metadata (CHROM, POS, REF).
pub const META_ROWS: usize = 3;
pub const META_COLS: usize = 3;

/// A fully materialized, rectangular genotype table.
#[derive(Debug)]
pub struct Table {
    rows: Vec<Vec<String>>,
    width: usize,
}

/// Borrowed view of one sample: its label (row 0 of the column) and its
/// genotype tokens in site order.
pub struct SampleColumn<'a> {
    pub label: &'a str,
    pub tokens: Vec<&'a str>,
}

impl Table {
    /// Every row must have the length of row 0; the first row that does
    /// not is reported by its 1-based input line number.
    pub fn from_rows(rows: Vec<Vec<String>>) -> Result<Self> {
        let Some(first) = rows.first() else {
            return Err(CustomError::EmptyTable);
        };
        let width = first.len();
        for (row_idx, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(CustomError::RaggedRow {
                    line_num: row_idx + 1,
                    n_fields: row.len(),
                    expected: width,
                });
            }
        }
        Ok(Self { rows, width })
    }

    pub fn n_samples(&self) -> usize {
        self.width.saturating_sub(META_COLS)
    }

    pub fn n_sites(&self) -> usize {
        self.rows.len().saturating_sub(META_ROWS)
    }

    /// 1-based input line number of the site at `site_idx`.
    pub fn site_line(site_idx: usize) -> usize {
        META_ROWS + site_idx + 1
    }

    /// One view per sample column, in original column order. A table with
    /// no site rows yields empty token lists, not an error.
    pub fn sample_columns(&self) -> impl Iterator<Item = SampleColumn<'_>> {
        let sites = self.rows.get(META_ROWS..).unwrap_or_default();
        (META_COLS..self.width).map(move |col| SampleColumn {
            label: &self.rows[0][col],
            tokens: sites.iter().map(|row| row[col].as_str()).collect(),
        })
    }
}
