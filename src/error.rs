use std::num::ParseIntError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("invalid PORT value: {value}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("io error")]
    Io(#[from] std::io::Error),
}
