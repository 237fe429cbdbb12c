//! Cluster credential resolution
//!
//! Decides how to authenticate to a Kubernetes API server from a snapshot of
//! `K8S_*` environment inputs and builds a `kube::Client` for it.
//!
//! - **Config file**: `K8S_CONFIG_FILE` names a kubeconfig; nothing else is
//!   consulted.
//! - **Host based**: `K8S_HOST` plus a CA (`K8S_CA_FILE` or `K8S_CA_DATA`)
//!   and one credential, a service account token (`K8S_SA_TOKEN_FILE` or
//!   `K8S_SA_TOKEN_DATA`) or else a client certificate and key
//!   (`K8S_CERT_*`, `K8S_KEY_*`).
//!
//! Inline `*_DATA` inputs are standard base64. A malformed value is always an
//! error, never a reason to try the next source.

pub mod connection;
pub mod error;
pub mod inputs;
pub mod kube_client;
pub mod material;
pub mod resolver;

pub use connection::{ConnectionConfig, TlsConfig};
pub use error::{Error, ErrorKind, UnresolvedReason};
pub use inputs::{EnvironmentInputs, InputField};
pub use kube_client::{ClientFactory, ConfigLoader, KubeClientFactory, KubeconfigFileLoader};
pub use resolver::{
    plan, AuthStrategy, CredentialResolver, Resolution, ResolutionSummary, Target,
};

/// Resolve credentials from the process environment and build a client
pub async fn client_from_env() -> Result<kube::Client, Error> {
    CredentialResolver::new()
        .resolve(&EnvironmentInputs::from_env())
        .await
}
