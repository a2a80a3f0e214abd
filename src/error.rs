use thiserror::Error;

pub type TallyResult<T> = Result<T, TallyError>;

#[derive(Error, Debug)]
pub enum TallyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid spreadsheet: {0}")]
    FileFormat(String),

    #[error("Missing column '{column}' in sheet '{sheet}'")]
    MissingColumn { sheet: String, column: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Export error: {0}")]
    Export(String),
}
