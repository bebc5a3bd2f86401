//! Error types for the signature crate

use alloc::format;
use alloc::string::String;
use core::fmt;

/// Errors that can occur during signature operations
#[derive(Debug, Clone)]
pub enum Error {
    /// Invalid key size
    InvalidKeySize { expected: usize, actual: usize },

    /// Invalid signature size
    InvalidSignatureSize { expected: usize, actual: usize },

    /// Invalid parameter
    InvalidParameter(String),

    /// Invalid key
    InvalidKey(String),

    /// Key generation failed
    KeyGeneration {
        algorithm: &'static str,
        details: String,
    },

    /// Signature generation failed
    SignatureGeneration {
        algorithm: &'static str,
        details: String,
    },

    /// Verification could not run (malformed input rather than an
    /// invalid signature value)
    Verification {
        algorithm: &'static str,
        details: String,
    },

    /// Encoding error (DER, digest policy)
    Encoding(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidKeySize { expected, actual } => {
                write!(f, "Invalid key size: expected {}, got {}", expected, actual)
            }
            Error::InvalidSignatureSize { expected, actual } => {
                write!(
                    f,
                    "Invalid signature size: expected {}, got {}",
                    expected, actual
                )
            }
            Error::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            Error::InvalidKey(msg) => write!(f, "Invalid key: {}", msg),
            Error::KeyGeneration { algorithm, details } => {
                write!(f, "{} key generation failed: {}", algorithm, details)
            }
            Error::SignatureGeneration { algorithm, details } => {
                write!(f, "{} signature generation failed: {}", algorithm, details)
            }
            Error::Verification { algorithm, details } => {
                write!(f, "{} verification failed: {}", algorithm, details)
            }
            Error::Encoding(msg) => write!(f, "Encoding error: {}", msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

// Convert from the arithmetic layer's error
impl From<primecurve_algorithms::Error> for Error {
    fn from(err: primecurve_algorithms::Error) -> Self {
        use primecurve_algorithms::Error as AlgoError;

        match err {
            AlgoError::Parameter { name, reason } => {
                Error::InvalidParameter(format!("{}: {}", name, reason))
            }
            AlgoError::Length {
                context,
                expected,
                actual,
            } => Error::InvalidParameter(format!(
                "{}: expected {} bytes, got {}",
                context, expected, actual
            )),
            AlgoError::Point { reason } => Error::InvalidKey(format!("point: {}", reason)),
            AlgoError::Other(msg) => Error::InvalidParameter(String::from(msg)),
        }
    }
}

// Convert to api::Error
impl From<Error> for primecurve_api::Error {
    #[cfg_attr(not(feature = "std"), allow(unused_variables))]
    fn from(err: Error) -> Self {
        match err {
            Error::InvalidKeySize { expected, actual } => primecurve_api::Error::InvalidLength {
                context: "sign key",
                expected,
                actual,
            },
            Error::InvalidSignatureSize { expected, actual } => {
                primecurve_api::Error::InvalidLength {
                    context: "sign signature",
                    expected,
                    actual,
                }
            }
            Error::InvalidParameter(msg) => primecurve_api::Error::InvalidParameter {
                context: "sign",
                #[cfg(feature = "std")]
                message: msg,
            },
            Error::InvalidKey(msg) => primecurve_api::Error::InvalidKey {
                context: "sign",
                #[cfg(feature = "std")]
                message: msg,
            },
            Error::KeyGeneration { algorithm, details } => primecurve_api::Error::InvalidKey {
                context: algorithm,
                #[cfg(feature = "std")]
                message: details,
            },
            Error::SignatureGeneration { algorithm, details } => {
                primecurve_api::Error::InvalidSignature {
                    context: algorithm,
                    #[cfg(feature = "std")]
                    message: details,
                }
            }
            Error::Verification { algorithm, details } => {
                primecurve_api::Error::InvalidSignature {
                    context: algorithm,
                    #[cfg(feature = "std")]
                    message: details,
                }
            }
            Error::Encoding(msg) => primecurve_api::Error::SerializationError {
                context: "sign",
                #[cfg(feature = "std")]
                message: msg,
            },
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
