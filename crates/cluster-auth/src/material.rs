//! Credential material sources
//!
//! Each kind of material (CA, token, client certificate, client key) can come
//! from a file path or from inline base64 data. The ordered source tables
//! below are the precedence rules. For the CA, token and key the first source
//! with a value wins and later sources are never looked at. The client
//! certificate takes every source that is set, so a file path and inline
//! data may both be carried and both are validated.

use std::path::PathBuf;

use base64::{engine::general_purpose::STANDARD, Engine};
use serde::Serialize;
use tracing::debug;

use crate::inputs::{EnvironmentInputs, InputField};
use crate::Error;

/// How an input's value is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// The value is a filesystem path, used as-is
    Path,
    /// The value is standard base64 and is decoded in memory
    Base64,
}

/// One place a piece of material may come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Source {
    /// Input holding the value
    pub field: InputField,
    /// How the value is interpreted
    pub encoding: Encoding,
}

impl Source {
    const fn path(field: InputField) -> Self {
        Self {
            field,
            encoding: Encoding::Path,
        }
    }

    const fn base64(field: InputField) -> Self {
        Self {
            field,
            encoding: Encoding::Base64,
        }
    }
}

/// Certificate authority sources, highest precedence first
pub const CA_SOURCES: [Source; 2] = [
    Source::path(InputField::CaFile),
    Source::base64(InputField::CaData),
];

/// Service account token sources, highest precedence first
pub const TOKEN_SOURCES: [Source; 2] = [
    Source::path(InputField::SaTokenFile),
    Source::base64(InputField::SaTokenData),
];

/// Client certificate sources; every source that is set is used
pub const CERT_SOURCES: [Source; 2] = [
    Source::path(InputField::CertFile),
    Source::base64(InputField::CertData),
];

/// Client key sources, highest precedence first
pub const KEY_SOURCES: [Source; 2] = [
    Source::path(InputField::KeyFile),
    Source::base64(InputField::KeyData),
];

/// Material taken from a single source
#[derive(Clone, PartialEq, Eq)]
pub enum Material {
    /// Path to a file holding the material
    File(PathBuf),
    /// Decoded bytes
    Inline(Vec<u8>),
}

impl Material {
    /// Kind of source this material came from
    pub fn origin(&self) -> Origin {
        match self {
            Self::File(_) => Origin::File,
            Self::Inline(_) => Origin::Inline,
        }
    }
}

// Inline material may be a key or token, never print it.
impl std::fmt::Debug for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => f.debug_tuple("File").field(path).finish(),
            Self::Inline(bytes) => write!(f, "Inline(<{} bytes>)", bytes.len()),
        }
    }
}

/// Where resolved material came from, without the material itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    /// Read from a file at connect time
    File,
    /// Decoded from inline data
    Inline,
}

/// Material together with the input it was taken from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    /// Input the material was taken from
    pub field: InputField,
    /// The material
    pub material: Material,
}

/// Decode a standard base64 input, naming the field on failure
pub fn decode(field: InputField, value: &str) -> Result<Vec<u8>, Error> {
    STANDARD.decode(value).map_err(|source| Error::Decode {
        field: field.env_var(),
        source,
    })
}

/// Take material from the first source in `sources` that has a value.
///
/// Returns `Ok(None)` when no source is set. A malformed base64 value is an
/// error and never falls through to the next source.
pub fn first_present(
    inputs: &EnvironmentInputs,
    sources: &[Source],
) -> Result<Option<Resolved>, Error> {
    for source in sources {
        if let Some(value) = inputs.value(source.field)? {
            return resolve(source, value).map(Some);
        }
    }
    Ok(None)
}

/// Take material from every source in `sources` that has a value.
///
/// Any malformed value is an error, even when another source is usable.
pub fn all_present(
    inputs: &EnvironmentInputs,
    sources: &[Source],
) -> Result<Vec<Resolved>, Error> {
    let mut resolved = Vec::new();
    for source in sources {
        if let Some(value) = inputs.value(source.field)? {
            resolved.push(resolve(source, value)?);
        }
    }
    Ok(resolved)
}

fn resolve(source: &Source, value: &str) -> Result<Resolved, Error> {
    let material = match source.encoding {
        Encoding::Path => Material::File(PathBuf::from(value)),
        Encoding::Base64 => Material::Inline(decode(source.field, value)?),
    };
    debug!(field = %source.field, origin = ?material.origin(), "Resolved material");

    Ok(Resolved {
        field: source.field,
        material,
    })
}
