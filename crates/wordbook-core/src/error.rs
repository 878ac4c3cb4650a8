#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Nothing stored yet")]
    NotFound,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt stored data: {0}")]
    Corrupt(String),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Locale document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Locale entry {0} must be an object of strings")]
    InvalidEntry(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum PhotoDecodeError {
    #[error("Captured image is empty")]
    Empty,

    #[error("Captured image is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
}
