//! Error types for the BWB core library.

use thiserror::Error;

use crate::types::VariantId;

/// Top-level error type for all BWB operations.
#[derive(Error, Debug)]
pub enum BwbError {
    /// A rename was committed against a different item than the one that
    /// started the edit.
    #[error("Rename target mismatch: editing {expected}, committed on {actual}")]
    RenameTargetMismatch {
        /// Variant that started the edit.
        expected: VariantId,
        /// Variant the commit was attempted on (`<none>` for plain items).
        actual: String,
    },

    /// The level-up step finished without assigning a bond level.
    #[error("Bond level still unset after level-up of {variant}")]
    LevelUnset {
        /// Variant whose level was left unset.
        variant: VariantId,
    },

    /// Serialization or deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BwbError {
    /// Whether this error signals a broken internal invariant rather than bad
    /// input. Hook boundaries log these and leave the host's result intact.
    #[must_use]
    pub fn is_consistency_fault(&self) -> bool {
        matches!(
            self,
            Self::RenameTargetMismatch { .. } | Self::LevelUnset { .. }
        )
    }
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, BwbError>;
