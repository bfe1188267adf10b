use thiserror::Error;

#[derive(Debug, Error)]
pub enum CustomError {
    #[error("could not read {path}")]
    CsvRead {
        #[source]
        source: csv::Error,
        path: std::path::PathBuf,
    },

    #[error("could not read standard input")]
    CsvReadStdin {
        #[source]
        source: csv::Error,
    },

    #[error("could not write to {path}")]
    Write {
        #[source]
        source: std::io::Error,
        path: std::path::PathBuf,
    },

    #[error("could not write to standard output")]
    WriteStdout {
        #[source]
        source: std::io::Error,
    },

    #[error("input table has no rows")]
    EmptyTable,

    #[error("expected {expected} fields (got {n_fields}) in line {line_num}")]
    RaggedRow {
        line_num: usize,
        n_fields: usize,
        expected: usize,
    },

    #[error("unrecognized genotype \"{token}\" for sample {sample} in line {line_num}")]
    UnrecognizedGenotype {
        token: String,
        sample: String,
        line_num: usize,
    },
}

pub type Result<T> = std::result::Result<T, CustomError>;
