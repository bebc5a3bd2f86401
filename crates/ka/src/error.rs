//! Error handling for key agreement operations

use core::fmt;

use primecurve_algorithms::Error as CurveError;
use primecurve_api::Error as ApiError;

/// Error type for key agreement operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Error bubbled up from the curve arithmetic layer
    Arithmetic(CurveError),

    /// Key generation failure
    KeyGeneration {
        /// Scheme that failed
        algorithm: &'static str,
        /// What went wrong
        details: &'static str,
    },

    /// Key material with the wrong byte width
    InvalidKeySize {
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Key material that fails validation
    InvalidKey {
        /// Which key was rejected
        key_type: &'static str,
        /// Why it was rejected
        reason: &'static str,
    },

    /// Shared secret computation failure
    Agreement {
        /// Scheme that failed
        algorithm: &'static str,
        /// What went wrong
        details: &'static str,
    },
}

/// Result type for key agreement operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Arithmetic(e) => write!(f, "Curve arithmetic error: {}", e),
            Error::KeyGeneration { algorithm, details } => {
                write!(f, "Key generation error for {}: {}", algorithm, details)
            }
            Error::InvalidKeySize { expected, actual } => {
                write!(
                    f,
                    "Invalid key size: expected {} bytes, got {}",
                    expected, actual
                )
            }
            Error::InvalidKey { key_type, reason } => {
                write!(f, "Invalid {} key: {}", key_type, reason)
            }
            Error::Agreement { algorithm, details } => {
                write!(f, "Agreement error for {}: {}", algorithm, details)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Arithmetic(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CurveError> for Error {
    fn from(err: CurveError) -> Self {
        Error::Arithmetic(err)
    }
}

#[cfg_attr(not(feature = "std"), allow(unused_variables))]
impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::Arithmetic(e) => e.into(),
            Error::KeyGeneration { algorithm, details } => ApiError::Other {
                context: algorithm,
                #[cfg(feature = "std")]
                message: format!("key generation failed: {}", details),
            },
            Error::InvalidKeySize { expected, actual } => ApiError::InvalidLength {
                context: "key agreement key",
                expected,
                actual,
            },
            Error::InvalidKey { key_type, reason } => ApiError::InvalidKey {
                context: key_type,
                #[cfg(feature = "std")]
                message: reason.to_string(),
            },
            Error::Agreement { algorithm, details } => ApiError::Other {
                context: algorithm,
                #[cfg(feature = "std")]
                message: format!("agreement failed: {}", details),
            },
        }
    }
}
