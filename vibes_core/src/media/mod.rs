pub mod pinata;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PinError {
    #[error("pin request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Pinata upload failed: {status} {message}")]
    Status { status: u16, message: String },
    #[error("captured image is not a PNG data URL")]
    InvalidImage,
}
