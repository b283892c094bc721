//! Error handling for the demographics query library.
//!
//! The query surface itself never fails: missing keys default to zero and
//! malformed region codes yield empty results. The error type covers typed
//! construction, currently only [`StateCode::parse`](crate::models::StateCode::parse).

/// Specialized error type for demographic record operations
#[derive(Debug, thiserror::Error)]
pub enum DemographicsError {
    /// Region code that is not exactly two characters
    #[error("invalid region code {0:?}: expected a two-letter state abbreviation")]
    InvalidRegionCode(String),
}

/// Result type for demographics operations
pub type Result<T> = std::result::Result<T, DemographicsError>;
