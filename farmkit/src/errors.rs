use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FarmError {
    #[error("Unknown farm: {0}")]
    UnknownFarm(String),

    #[error("Unknown metric: {0}")]
    UnknownMetric(String),

    #[error("Unknown time range: {0}")]
    UnknownTimeRange(String),

    // The two image errors carry the exact text shown in the alert popup.
    #[error("Lütfen geçerli bir resim dosyası seçin (JPEG, PNG veya WebP)")]
    InvalidImageType(String),

    #[error("Resim dosyası boyutu 5MB'dan küçük olmalıdır")]
    ImageTooLarge { size: u64, max: u64 },

    #[error("Görüntü yüklenemedi. Lütfen tekrar deneyin. ({0})")]
    UploadFailed(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<std::io::Error> for FarmError {
    fn from(err: std::io::Error) -> Self {
        FarmError::IoError(err.to_string())
    }
}

impl From<anyhow::Error> for FarmError {
    fn from(err: anyhow::Error) -> Self {
        FarmError::Unknown(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FarmError>;
