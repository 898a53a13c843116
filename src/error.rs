//! Error types for UI components
//!
//! Canvas and DOM interop are the only fallible paths in this crate; every
//! one of them returns [`UiResult`] instead of panicking.

use thiserror::Error;

/// Errors that can occur in UI components
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UiError {
    /// Canvas 2D context could not be acquired
    #[error("Canvas context error: {0}")]
    Context(String),
    /// A drawing operation received invalid geometry
    #[error("Invalid geometry: {0}")]
    Geometry(String),
    /// A drawing operation failed at the canvas API level
    #[error("Canvas draw error: {0}")]
    Draw(String),
}

/// Result type alias for UI operations
pub type UiResult<T> = std::result::Result<T, UiError>;
