#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown timezone {name}: {reason}")]
    UnknownTimezone { name: String, reason: String },
    #[error("hour {0} is outside 0..=23")]
    InvalidHour(u32),
    #[error("city index {index} out of range for selection of {len}")]
    CityIndexOutOfRange { index: usize, len: usize },
    #[error("stored value is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
