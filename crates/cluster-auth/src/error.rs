//! Error types for cluster credential resolution
//!
//! Every failure names what went wrong: an input that was absent, an input
//! that was present but malformed, or a collaborator that rejected the
//! resolved configuration.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Why no credential strategy could be resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnresolvedReason {
    /// No config file and no API server host were given
    MissingHost,
    /// Host was given but neither a CA file nor CA data
    MissingCertificateAuthority,
    /// A client certificate was given without a matching key
    CertificateWithoutKey,
    /// Neither a service account token nor a client certificate was given
    MissingCredentials,
}

impl fmt::Display for UnresolvedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::MissingHost => "no config file and no API server host provided",
            Self::MissingCertificateAuthority => "no certificate authority file or data provided",
            Self::CertificateWithoutKey => "client certificate provided without a client key",
            Self::MissingCredentials => {
                "no service account token or client certificate provided"
            }
        };
        f.write_str(msg)
    }
}

/// Coarse classification of [`Error`], matching the resolution taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An input was present but malformed (bad base64 or not UTF-8)
    Decode,
    /// The config file branch failed to load its file
    ConfigLoad,
    /// No branch's preconditions were satisfied
    Unresolved,
    /// The resolved configuration could not be turned into a client
    Client,
}

/// Main error type for credential resolution
#[derive(Debug, Error)]
pub enum Error {
    /// A base64 encoded input could not be decoded
    #[error("failed to decode {field}: {source}")]
    Decode {
        /// Environment name of the offending input
        field: &'static str,
        /// The underlying decode error
        #[source]
        source: base64::DecodeError,
    },

    /// An input is set but its value is not valid UTF-8
    #[error("{field} is set but is not valid UTF-8")]
    InvalidInput {
        /// Environment name of the offending input
        field: &'static str,
    },

    /// Decoded service account token data is not a valid UTF-8 string
    #[error("decoded {field} is not valid UTF-8: {source}")]
    InvalidToken {
        /// Environment name of the offending input
        field: &'static str,
        /// The underlying conversion error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// The config file could not be read or parsed
    #[error("failed to load cluster config file {}: {message}", path.display())]
    ConfigLoad {
        /// Path that was given
        path: PathBuf,
        /// Description of what failed
        message: String,
    },

    /// No resolution branch could be satisfied from the inputs
    #[error("unable to determine cluster credentials: {reason}")]
    Unresolved {
        /// What was missing
        reason: UnresolvedReason,
    },

    /// The resolved configuration was rejected when building a client
    #[error("failed to create cluster client: {message}")]
    Client {
        /// Description of what failed
        message: String,
    },
}

impl Error {
    /// Create a config load error for the given path
    pub fn config_load(path: impl Into<PathBuf>, msg: impl Into<String>) -> Self {
        Self::ConfigLoad {
            path: path.into(),
            message: msg.into(),
        }
    }

    /// Create an unresolved credentials error
    pub fn unresolved(reason: UnresolvedReason) -> Self {
        Self::Unresolved { reason }
    }

    /// Create a client construction error
    pub fn client(msg: impl Into<String>) -> Self {
        Self::Client {
            message: msg.into(),
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Decode { .. } | Self::InvalidInput { .. } | Self::InvalidToken { .. } => {
                ErrorKind::Decode
            }
            Self::ConfigLoad { .. } => ErrorKind::ConfigLoad,
            Self::Unresolved { .. } => ErrorKind::Unresolved,
            Self::Client { .. } => ErrorKind::Client,
        }
    }

    /// Environment name of the malformed input, for decode errors
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Decode { field, .. }
            | Self::InvalidInput { field }
            | Self::InvalidToken { field, .. } => Some(*field),
            _ => None,
        }
    }
}
