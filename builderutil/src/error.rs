//! Default error type for option mutators.

use thiserror::Error;

/// Errors an option mutator can report while configuring a target.
///
/// This is the default `E` for [`Lister`](crate::Lister),
/// [`Mutator`](crate::Mutator) and [`Options`](crate::Options). The builder
/// never creates or wraps one itself: whatever a mutator returns is what the
/// caller of [`build`](crate::build) receives.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum OptionError {
    /// The option was given a value the target rejects.
    #[error("invalid option {option}: {reason}")]
    Invalid {
        /// Name of the offending option.
        option: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// A required option was never supplied.
    #[error("missing required option: {0}")]
    Missing(String),

    /// Catch-all.
    #[error("{0}")]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl OptionError {
    /// Shorthand for [`OptionError::Invalid`].
    pub fn invalid(option: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            option: option.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand for [`OptionError::Missing`].
    pub fn missing(option: impl Into<String>) -> Self {
        Self::Missing(option.into())
    }
}
