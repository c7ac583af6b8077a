/*!
 * Foreign-Call Error Types
 * Host failures translated into the runtime's exception representation
 */

use crate::signals::SignalError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Foreign-call result
pub type ForeignResult<T> = Result<T, ForeignError>;

/// Foreign-call errors
///
/// Every host-call failure surfaces as one of these; wrappers have no
/// silent failure path.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ForeignError {
    /// Host call failed; carries the operation's symbolic name and errno
    #[error("{op} failed with host error {errno}")]
    Host { op: String, errno: i32 },

    /// Capability absent from this build configuration
    #[error("Operation not supported: {0}")]
    NotSupported(String),

    /// Argument rejected before reaching the host
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Error surfaced by the signal subsystem while bracketing the call
    #[error(transparent)]
    Signal(#[from] SignalError),
}

impl ForeignError {
    /// Translate a host failure code for an operation
    #[inline]
    pub fn host(op: impl Into<String>, errno: i32) -> Self {
        Self::Host {
            op: op.into(),
            errno,
        }
    }

    /// Create a not-supported error for an absent capability
    #[inline]
    pub fn not_supported(op: impl Into<String>) -> Self {
        Self::NotSupported(op.into())
    }

    /// Create an invalid argument error
    #[inline]
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
