//! Crate-level error type and `Result` alias.
//! Wraps I/O, codec and JSON failures from the surrounding glue; the cropping
//! core itself is total and never produces an error.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image codec error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Parameter file error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Dimension mismatch: image is {width}x{height}, reference is {ref_width}x{ref_height}")]
    DimensionMismatch {
        width: u32,
        height: u32,
        ref_width: u32,
        ref_height: u32,
    },

    #[error("Invalid parameter: {arg}={value}")]
    InvalidParams { arg: &'static str, value: String },
}
