//! Host based connection configuration
//!
//! [`ConnectionConfig`] holds the endpoint and the material picked during
//! resolution. It is built by one resolution call and handed off to client
//! construction as an in-memory kubeconfig.

use std::fmt;
use std::path::{Path, PathBuf};

use base64::{engine::general_purpose::STANDARD, Engine};
use kube::config::Kubeconfig;
use serde_json::{json, Map, Value};

use crate::material::{Material, Resolved};
use crate::Error;

/// Name used for the single cluster, user and context of a rendered kubeconfig
pub const CONTEXT_NAME: &str = "cluster-auth";

/// TLS material for the connection
#[derive(Clone, Default, PartialEq, Eq)]
pub struct TlsConfig {
    /// Path to the CA bundle
    pub ca_file: Option<PathBuf>,
    /// PEM encoded CA bundle
    pub ca_data: Option<Vec<u8>>,
    /// Path to the client certificate
    pub cert_file: Option<PathBuf>,
    /// PEM encoded client certificate
    pub cert_data: Option<Vec<u8>>,
    /// Path to the client key
    pub key_file: Option<PathBuf>,
    /// PEM encoded client key
    pub key_data: Option<Vec<u8>>,
}

impl TlsConfig {
    /// Whether any client certificate or key material is set
    pub fn has_client_identity(&self) -> bool {
        self.cert_file.is_some()
            || self.cert_data.is_some()
            || self.key_file.is_some()
            || self.key_data.is_some()
    }
}

impl fmt::Debug for TlsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TlsConfig")
            .field("ca_file", &self.ca_file)
            .field("ca_data", &self.ca_data.as_ref().map(Vec::len))
            .field("cert_file", &self.cert_file)
            .field("cert_data", &self.cert_data.as_ref().map(Vec::len))
            .field("key_file", &self.key_file)
            .field("key_data", &self.key_data.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Connection to a cluster API server resolved from host based inputs
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ConnectionConfig {
    /// API server URL
    pub host: String,
    /// TLS material
    pub tls: TlsConfig,
    /// Inline bearer token
    pub bearer_token: Option<String>,
    /// Path to a bearer token file
    pub bearer_token_file: Option<PathBuf>,
}

impl ConnectionConfig {
    /// Create a config for `host` with no material set
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..Default::default()
        }
    }

    pub(crate) fn set_certificate_authority(&mut self, resolved: Resolved) {
        match resolved.material {
            Material::File(path) => self.tls.ca_file = Some(path),
            Material::Inline(data) => self.tls.ca_data = Some(data),
        }
    }

    pub(crate) fn set_token(&mut self, resolved: Resolved) -> Result<(), Error> {
        match resolved.material {
            Material::File(path) => self.bearer_token_file = Some(path),
            Material::Inline(data) => {
                let token = String::from_utf8(data).map_err(|source| Error::InvalidToken {
                    field: resolved.field.env_var(),
                    source,
                })?;
                self.bearer_token = Some(token);
            }
        }
        Ok(())
    }

    pub(crate) fn set_client_certificate(&mut self, resolved: Resolved) {
        match resolved.material {
            Material::File(path) => self.tls.cert_file = Some(path),
            Material::Inline(data) => self.tls.cert_data = Some(data),
        }
    }

    pub(crate) fn set_client_key(&mut self, resolved: Resolved) {
        match resolved.material {
            Material::File(path) => self.tls.key_file = Some(path),
            Material::Inline(data) => self.tls.key_data = Some(data),
        }
    }

    /// Render as a kubeconfig with a single cluster, user and context.
    ///
    /// Inline material is re-encoded as base64, which is what kubeconfig
    /// `*-data` fields carry.
    pub fn to_kubeconfig(&self) -> Result<Kubeconfig, Error> {
        let mut cluster = Map::new();
        cluster.insert("server".into(), json!(self.host));
        insert_path(&mut cluster, "certificate-authority", &self.tls.ca_file);
        insert_data(&mut cluster, "certificate-authority-data", &self.tls.ca_data);

        let mut user = Map::new();
        insert_path(&mut user, "tokenFile", &self.bearer_token_file);
        if let Some(token) = &self.bearer_token {
            user.insert("token".into(), json!(token));
        }
        insert_path(&mut user, "client-certificate", &self.tls.cert_file);
        insert_data(&mut user, "client-certificate-data", &self.tls.cert_data);
        insert_path(&mut user, "client-key", &self.tls.key_file);
        insert_data(&mut user, "client-key-data", &self.tls.key_data);

        let value = json!({
            "apiVersion": "v1",
            "kind": "Config",
            "clusters": [{ "name": CONTEXT_NAME, "cluster": cluster }],
            "users": [{ "name": CONTEXT_NAME, "user": user }],
            "contexts": [{
                "name": CONTEXT_NAME,
                "context": { "cluster": CONTEXT_NAME, "user": CONTEXT_NAME }
            }],
            "current-context": CONTEXT_NAME,
        });

        serde_json::from_value(value)
            .map_err(|e| Error::client(format!("failed to assemble kubeconfig: {}", e)))
    }
}

fn insert_path(map: &mut Map<String, Value>, key: &str, path: &Option<PathBuf>) {
    if let Some(path) = path.as_deref().map(Path::to_string_lossy) {
        map.insert(key.into(), json!(path));
    }
}

fn insert_data(map: &mut Map<String, Value>, key: &str, data: &Option<Vec<u8>>) {
    if let Some(data) = data {
        map.insert(key.into(), json!(STANDARD.encode(data)));
    }
}

impl fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("host", &self.host)
            .field("tls", &self.tls)
            .field(
                "bearer_token",
                &self.bearer_token.as_ref().map(|_| "<redacted>"),
            )
            .field("bearer_token_file", &self.bearer_token_file)
            .finish()
    }
}
