//! Error type definitions for elliptic curve operations

#[cfg(feature = "std")]
use std::string::String;

/// Primary error type for elliptic curve operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Point decoding or validation failure (not on the curve, bad
    /// prefix, coordinate out of field range)
    InvalidPoint {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Invalid key error
    InvalidKey {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Operation attempted on a key object that carries no material
    UninitializedKey {
        context: &'static str,
    },

    /// Invalid signature error
    InvalidSignature {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Invalid length error with context
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    InvalidParameter {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Serialization error (malformed DER, bad encodings)
    SerializationError {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Random generation error
    RandomGenerationError {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Other error
    Other {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },
}

/// Result type for elliptic curve operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Add context to an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidPoint { .. } => Self::InvalidPoint {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
            Self::InvalidKey { .. } => Self::InvalidKey {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
            Self::UninitializedKey { .. } => Self::UninitializedKey { context },
            Self::InvalidSignature { .. } => Self::InvalidSignature {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { .. } => Self::InvalidParameter {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
            Self::SerializationError { .. } => Self::SerializationError {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
            Self::RandomGenerationError { .. } => Self::RandomGenerationError {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
            Self::Other { .. } => Self::Other {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidPoint { context, .. } => {
                write!(f, "Invalid point: {}", context)
            }
            Self::InvalidKey { context, .. } => {
                write!(f, "Invalid key: {}", context)
            }
            Self::UninitializedKey { context } => {
                write!(f, "Uninitialized key: {}", context)
            }
            Self::InvalidSignature { context, .. } => {
                write!(f, "Invalid signature: {}", context)
            }
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{}: invalid length (expected {}, got {})",
                    context, expected, actual
                )
            }
            #[cfg(feature = "std")]
            Self::InvalidParameter { context, message } => {
                if message.is_empty() {
                    write!(f, "Invalid parameter: {}", context)
                } else {
                    write!(f, "{}: {}", context, message)
                }
            }
            #[cfg(not(feature = "std"))]
            Self::InvalidParameter { context } => {
                write!(f, "Invalid parameter: {}", context)
            }
            #[cfg(feature = "std")]
            Self::SerializationError { context, message } => {
                if message.is_empty() {
                    write!(f, "Serialization error: {}", context)
                } else {
                    write!(f, "Serialization error: {}: {}", context, message)
                }
            }
            #[cfg(not(feature = "std"))]
            Self::SerializationError { context } => {
                write!(f, "Serialization error: {}", context)
            }
            #[cfg(feature = "std")]
            Self::RandomGenerationError { context, message } => {
                if message.is_empty() {
                    write!(f, "Random generation error: {}", context)
                } else {
                    write!(f, "Random generation error: {}: {}", context, message)
                }
            }
            #[cfg(not(feature = "std"))]
            Self::RandomGenerationError { context } => {
                write!(f, "Random generation error: {}", context)
            }
            #[cfg(feature = "std")]
            Self::Other { context, message } => {
                write!(f, "{}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Self::Other { context } => {
                write!(f, "Error: {}", context)
            }
        }
    }
}
