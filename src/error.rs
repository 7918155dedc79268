use crate::types::FieldError;

/// Why reading an export stopped early. Everything read before the failure is kept.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("Could not read field at row {row}:\n\t{source}")]
    Field {
        row: usize,
        #[source]
        source: FieldError,
    },
    #[error("Bad encoding, convert to UTF-8:\n\t{0}")]
    Encoding(csv::Error),
    #[error("Could not read input:\n\t{0}")]
    Input(csv::Error),
}

impl From<csv::Error> for ReadError {
    fn from(err: csv::Error) -> Self {
        match err.kind() {
            csv::ErrorKind::Utf8 { .. } => Self::Encoding(err),
            _ => Self::Input(err),
        }
    }
}
