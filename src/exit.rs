// src/exit.rs
//! Process exit codes for `graphdiscrim`.
//!
//! Provides a stable contract for batch scripts.

use crate::error::DiscrimError;
use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum DiscrimExit {
    /// Operation completed successfully.
    Success = 0,
    /// Generic error (I/O, serialization).
    Error = 1,
    /// Bad input: empty batch, malformed edge list, misaligned X/Y, bad config.
    InvalidInput = 2,
    /// The statistic is undefined for the given labels.
    InsufficientData = 3,
    /// Alignment or dimensionality fault. Indicates a bug, not bad data.
    InternalFault = 4,
}

impl DiscrimExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Maps an error chain to an exit code by its innermost [`DiscrimError`].
    #[must_use]
    pub fn from_error(err: &anyhow::Error) -> Self {
        err.chain()
            .find_map(|e| e.downcast_ref::<DiscrimError>())
            .map_or(Self::Error, Self::from)
    }
}

impl From<&DiscrimError> for DiscrimExit {
    fn from(err: &DiscrimError) -> Self {
        match err {
            DiscrimError::Configuration(_)
            | DiscrimError::Parse { .. }
            | DiscrimError::Validation(_)
            | DiscrimError::Regex(_) => Self::InvalidInput,
            DiscrimError::InsufficientData { .. } => Self::InsufficientData,
            DiscrimError::Alignment { .. } | DiscrimError::Dimensionality { .. } => {
                Self::InternalFault
            }
            DiscrimError::Io { .. } => Self::Error,
        }
    }
}

impl Termination for DiscrimExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
