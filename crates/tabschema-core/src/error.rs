use thiserror::Error;

/// Canonical result for core.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A required attribute (name, type, record sub-fields) is missing or
    /// structurally invalid at construction time.
    #[error("Invalid schema: {0}")]
    InvalidSchema(String),

    /// An incoming wire message lacks a required attribute or carries a tag
    /// this crate does not recognize.
    #[error("Malformed wire data: {0}")]
    MalformedWireData(String),
}
