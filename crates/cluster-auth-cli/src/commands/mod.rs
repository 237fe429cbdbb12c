//! CLI commands

use clap::Args;
use cluster_auth::{EnvironmentInputs, InputField};

pub mod env;
pub mod resolve;

/// Credential inputs, each settable by flag or by its `K8S_*` variable.
///
/// Flags take precedence over the environment.
#[derive(Args, Debug, Default, Clone)]
pub struct CredentialArgs {
    /// Path to a kubeconfig file; when set, all other inputs are ignored
    #[arg(long, env = "K8S_CONFIG_FILE")]
    pub config_file: Option<String>,

    /// Kubernetes API server URL
    #[arg(long, env = "K8S_HOST")]
    pub host: Option<String>,

    /// Path to the CA bundle
    #[arg(long, env = "K8S_CA_FILE")]
    pub ca_file: Option<String>,

    /// Base64 encoded CA bundle
    #[arg(long, env = "K8S_CA_DATA", hide_env_values = true)]
    pub ca_data: Option<String>,

    /// Path to a service account token
    #[arg(long, env = "K8S_SA_TOKEN_FILE")]
    pub sa_token_file: Option<String>,

    /// Base64 encoded service account token
    #[arg(long, env = "K8S_SA_TOKEN_DATA", hide_env_values = true)]
    pub sa_token_data: Option<String>,

    /// Path to the client certificate
    #[arg(long, env = "K8S_CERT_FILE")]
    pub cert_file: Option<String>,

    /// Base64 encoded client certificate
    #[arg(long, env = "K8S_CERT_DATA", hide_env_values = true)]
    pub cert_data: Option<String>,

    /// Path to the client key
    #[arg(long, env = "K8S_KEY_FILE")]
    pub key_file: Option<String>,

    /// Base64 encoded client key
    #[arg(long, env = "K8S_KEY_DATA", hide_env_values = true)]
    pub key_data: Option<String>,
}

impl CredentialArgs {
    /// Snapshot the parsed arguments as resolution inputs
    pub fn inputs(&self) -> EnvironmentInputs {
        [
            (InputField::ConfigFile, &self.config_file),
            (InputField::Host, &self.host),
            (InputField::CaFile, &self.ca_file),
            (InputField::CaData, &self.ca_data),
            (InputField::SaTokenFile, &self.sa_token_file),
            (InputField::SaTokenData, &self.sa_token_data),
            (InputField::CertFile, &self.cert_file),
            (InputField::CertData, &self.cert_data),
            (InputField::KeyFile, &self.key_file),
            (InputField::KeyData, &self.key_data),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.clone().map(|v| (field, v)))
        .collect()
    }
}
