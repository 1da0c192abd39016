#![deny(missing_docs)]

//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// The three string variants map to the pipeline's fatal error kinds;
/// `String` itself defaults to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// Failure retrieving or parsing a schema document.
    #[from(ignore)]
    #[display("Retrieval Error: {_0}")]
    Retrieval(String),

    /// A referenced document could not be located while bundling.
    #[from(ignore)]
    #[display("Resolution Error: {_0}")]
    Resolution(String),

    /// The type generator rejected a construct or final emission failed.
    #[from(ignore)]
    #[display("Generation Error: {_0}")]
    Generation(String),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
