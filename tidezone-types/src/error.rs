//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Error)]
pub enum TypesError {
    /// The chart CRS definition could not be parsed or is not supported.
    #[error("cannot resolve CRS '{definition}': {reason}")]
    UnresolvedCrs {
        /// Definition string as it was given.
        definition: String,
        /// Why it was rejected.
        reason: String,
    },
}

impl TypesError {
    pub(crate) fn unresolved(definition: &str, reason: impl Into<String>) -> Self {
        Self::UnresolvedCrs {
            definition: definition.to_string(),
            reason: reason.into(),
        }
    }
}
