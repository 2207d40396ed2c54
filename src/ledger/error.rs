use crate::store::StoreError;

#[derive(Debug, thiserror::Error)]
pub(crate) enum LedgerError {
    #[error("invalid amount '{0}': enter a number greater than zero, up to one trillion")]
    InvalidAmount(String),
    #[error("invalid budget '{0}': enter a number from zero up to one trillion")]
    InvalidBudget(String),
    #[error("nothing to export: no transactions recorded")]
    EmptyExport,
    #[error("name must not be blank")]
    EmptyName,
    #[error(transparent)]
    Storage(#[from] StoreError),
    #[error("CSV encoding failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("export I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("chart rendering failed: {0}")]
    Image(#[from] image::ImageError),
}

impl LedgerError {
    /// Errors caused by what the user typed, as opposed to environment failures.
    pub(crate) fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidAmount(_) | Self::InvalidBudget(_) | Self::EmptyExport | Self::EmptyName
        )
    }
}
