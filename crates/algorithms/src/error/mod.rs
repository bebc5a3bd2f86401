//! Error handling for the curve arithmetic layer

#[cfg(not(feature = "std"))]
use alloc::borrow::Cow;
#[cfg(feature = "std")]
use std::borrow::Cow;

use core::fmt;

use primecurve_api::Error as ApiError;

/// The error type for field, curve, point and encoding operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// A byte string or coordinate pair that does not describe a curve point
    Point {
        /// Reason the point was rejected
        reason: &'static str,
    },

    /// Fallback for other errors
    Other(&'static str),
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<R: Into<Cow<'static, str>>>(name: &'static str, reason: R) -> Self {
        Error::Parameter {
            name,
            reason: reason.into(),
        }
    }

    /// Shorthand to create a Point error
    pub fn point(reason: &'static str) -> Self {
        Error::Point { reason }
    }
}

/// Result type for curve arithmetic operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::Point { reason } => write!(f, "Invalid point: {}", reason),
            Error::Other(msg) => write!(f, "{}", msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => {
                #[cfg(not(feature = "std"))]
                let _ = &reason;
                ApiError::InvalidParameter {
                    context: name,
                    #[cfg(feature = "std")]
                    message: reason.into_owned(),
                }
            }
            Error::Length {
                context,
                expected,
                actual,
            } => ApiError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::Point { reason } => ApiError::InvalidPoint {
                context: reason,
                #[cfg(feature = "std")]
                message: String::new(),
            },
            Error::Other(msg) => ApiError::Other {
                context: msg,
                #[cfg(feature = "std")]
                message: String::new(),
            },
        }
    }
}

pub mod validate;
