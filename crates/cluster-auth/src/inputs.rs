//! Environment input snapshot
//!
//! Resolution never reads process environment directly. Callers capture a
//! [`EnvironmentInputs`] once and pass it in, so a single resolution sees a
//! coherent view of all ten inputs.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fmt;

use crate::Error;

/// One of the named inputs that drive credential resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum InputField {
    /// Path to a kubeconfig file
    ConfigFile,
    /// API server URL
    Host,
    /// Path to a PEM encoded CA bundle
    CaFile,
    /// Base64 encoded CA bundle
    CaData,
    /// Path to a service account token file
    SaTokenFile,
    /// Base64 encoded service account token
    SaTokenData,
    /// Path to a PEM encoded client certificate
    CertFile,
    /// Base64 encoded client certificate
    CertData,
    /// Path to a PEM encoded client key
    KeyFile,
    /// Base64 encoded client key
    KeyData,
}

impl InputField {
    /// Every input, in the order they are documented
    pub const ALL: [InputField; 10] = [
        Self::ConfigFile,
        Self::Host,
        Self::CaFile,
        Self::CaData,
        Self::SaTokenFile,
        Self::SaTokenData,
        Self::CertFile,
        Self::CertData,
        Self::KeyFile,
        Self::KeyData,
    ];

    /// Environment variable this input is read from
    pub const fn env_var(self) -> &'static str {
        match self {
            Self::ConfigFile => "K8S_CONFIG_FILE",
            Self::Host => "K8S_HOST",
            Self::CaFile => "K8S_CA_FILE",
            Self::CaData => "K8S_CA_DATA",
            Self::SaTokenFile => "K8S_SA_TOKEN_FILE",
            Self::SaTokenData => "K8S_SA_TOKEN_DATA",
            Self::CertFile => "K8S_CERT_FILE",
            Self::CertData => "K8S_CERT_DATA",
            Self::KeyFile => "K8S_KEY_FILE",
            Self::KeyData => "K8S_KEY_DATA",
        }
    }

    /// Whether the value is secret and must never be printed
    pub const fn is_secret(self) -> bool {
        matches!(self, Self::SaTokenData | Self::KeyData)
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.env_var())
    }
}

/// Immutable snapshot of the resolution inputs.
///
/// Empty strings are never stored: an empty value means the same thing as an
/// unset one. A value that is not valid UTF-8 is kept as present but
/// malformed, and reported when resolution consults it.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct EnvironmentInputs {
    // `None` marks a value that was set but is not valid UTF-8
    values: BTreeMap<InputField, Option<String>>,
}

impl EnvironmentInputs {
    /// Create an empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture all inputs from the process environment in one pass
    pub fn from_env() -> Self {
        Self::from_os_lookup(|name| std::env::var_os(name))
    }

    /// Capture all inputs through a lookup returning raw OS strings.
    ///
    /// Values that are not valid UTF-8 are recorded as malformed rather than
    /// dropped.
    pub fn from_os_lookup<F>(mut lookup: F) -> Self
    where
        F: FnMut(&str) -> Option<OsString>,
    {
        InputField::ALL
            .into_iter()
            .fold(Self::new(), |inputs, field| match lookup(field.env_var()) {
                Some(value) => inputs.with_os(field, value),
                None => inputs,
            })
    }

    /// Capture all inputs through a lookup keyed by environment variable name
    pub fn from_lookup<F>(mut lookup: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        InputField::ALL
            .into_iter()
            .fold(Self::new(), |inputs, field| match lookup(field.env_var()) {
                Some(value) => inputs.with(field, value),
                None => inputs,
            })
    }

    /// Return a snapshot with `field` set to `value`
    pub fn with(mut self, field: InputField, value: impl Into<String>) -> Self {
        let value = value.into();
        if value.is_empty() {
            self.values.remove(&field);
        } else {
            self.values.insert(field, Some(value));
        }
        self
    }

    /// Return a snapshot with `field` set to a raw OS string
    pub fn with_os(mut self, field: InputField, value: OsString) -> Self {
        if value.is_empty() {
            self.values.remove(&field);
            return self;
        }
        let value = value.into_string().ok();
        self.values.insert(field, value);
        self
    }

    /// Value of `field`, or `None` when unset, empty or not valid UTF-8
    pub fn get(&self, field: InputField) -> Option<&str> {
        self.values.get(&field).and_then(Option::as_deref)
    }

    /// Value of `field` for resolution.
    ///
    /// `Ok(None)` when unset or empty; an error when set but not valid UTF-8.
    pub fn value(&self, field: InputField) -> Result<Option<&str>, Error> {
        match self.values.get(&field) {
            None => Ok(None),
            Some(Some(value)) => Ok(Some(value)),
            Some(None) => Err(Error::InvalidInput {
                field: field.env_var(),
            }),
        }
    }

    /// Whether `field` holds a non-empty value
    pub fn is_set(&self, field: InputField) -> bool {
        self.values.contains_key(&field)
    }

    /// Fields that hold a value, in documentation order
    pub fn present(&self) -> impl Iterator<Item = InputField> + '_ {
        self.values.keys().copied()
    }
}

impl<S: Into<String>> FromIterator<(InputField, S)> for EnvironmentInputs {
    fn from_iter<I: IntoIterator<Item = (InputField, S)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |inputs, (field, value)| inputs.with(field, value))
    }
}

impl fmt::Debug for EnvironmentInputs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (field, value) in &self.values {
            match value {
                None => map.entry(&field.env_var(), &"<invalid utf-8>"),
                Some(_) if field.is_secret() => map.entry(&field.env_var(), &"<redacted>"),
                Some(value) => map.entry(&field.env_var(), value),
            };
        }
        map.finish()
    }
}
