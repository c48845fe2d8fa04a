//! This module defines the custom error type `Error` used throughout the crate,
//! as well as the error message constants attached to its variants.
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Application error: {0}")]
    Application(String),
    #[error("Image decode error: {0}")]
    ImageDecode(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Encoding error: {0}")]
    Encoding(String),
}

impl From<Error> for io::Error {
    fn from(error: Error) -> Self {
        io::Error::other(error.to_string())
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Error::Application(format!("{error}"))
    }
}

impl From<image::ImageError> for Error {
    fn from(error: image::ImageError) -> Self {
        Error::ImageDecode(format!("{ERROR_DECODING_IMAGE}: {error}"))
    }
}

/// Error message for issues related to opening or decoding an image.
pub const ERROR_DECODING_IMAGE: &str = "Error decoding image";
/// Error message for a cell dimension of zero.
pub const ERROR_CELL_SIZE: &str = "Cell width and height must be positive";
/// Error message for matrix data that does not match its dimensions.
pub const ERROR_MATRIX_SHAPE: &str = "Matrix data does not match its dimensions";
/// Error message for a grid element outside {0, 1}.
pub const ERROR_NON_BINARY: &str = "Grid element is not binary";
/// Error message for a run too long to map onto a character.
pub const ERROR_RUN_LENGTH: &str = "Run length has no character code";
/// Error message for an encoded string that does not decode to the expected grid.
pub const ERROR_DECODE: &str = "Encoded string does not match the grid";
