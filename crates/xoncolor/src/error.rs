use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("invalid brightness range: min {min} is greater than max {max}")]
    InvalidBrightnessRange { min: u8, max: u8 },
    #[error("invalid color: {0}")]
    InvalidColor(String),
}

pub type Result<T> = std::result::Result<T, ColorError>;

/// Unwraps the result of a sink that cannot fail.
pub(crate) fn infallible<T>(result: std::result::Result<T, std::convert::Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}
