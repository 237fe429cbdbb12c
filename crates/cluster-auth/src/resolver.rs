//! Credential resolution
//!
//! Decides how to authenticate to the cluster API from an
//! [`EnvironmentInputs`] snapshot. Precedence is held in two ordered tables:
//!
//! 1. [`BRANCHES`]: a kubeconfig file wins over host based inputs.
//! 2. [`CREDENTIAL_STRATEGIES`]: within the host branch, a service account
//!    token wins over a client certificate.
//!
//! [`plan`] walks the tables and returns a [`Resolution`] without any I/O.
//! [`CredentialResolver`] then hands the resolution to its collaborators to
//! produce a client.

use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;

use kube::config::Kubeconfig;
use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::connection::ConnectionConfig;
use crate::inputs::{EnvironmentInputs, InputField};
use crate::kube_client::{ClientFactory, ConfigLoader, KubeClientFactory, KubeconfigFileLoader};
use crate::material::{self, Origin, CA_SOURCES, CERT_SOURCES, KEY_SOURCES, TOKEN_SOURCES};
use crate::{Error, UnresolvedReason};

// =============================================================================
// Decision tables
// =============================================================================

/// Top level resolution branches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    /// Load everything from a kubeconfig file
    ConfigFile,
    /// Build the connection from host, CA and credential inputs
    Host,
}

/// Branches in precedence order. The first one that applies decides the
/// outcome; a branch that applies and then fails is terminal.
pub const BRANCHES: [Branch; 2] = [Branch::ConfigFile, Branch::Host];

/// Credential used with a host based connection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialStrategy {
    /// Bearer token from a file or inline data
    ServiceAccountToken,
    /// Client certificate and key for mutual TLS
    ClientCertificate,
}

/// Credential strategies in precedence order
pub const CREDENTIAL_STRATEGIES: [CredentialStrategy; 2] = [
    CredentialStrategy::ServiceAccountToken,
    CredentialStrategy::ClientCertificate,
];

/// How the client authenticates to the cluster API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthStrategy {
    /// Kubeconfig file
    ConfigFile,
    /// Service account token
    ServiceAccountToken,
    /// Client certificate
    ClientCertificate,
}

impl From<CredentialStrategy> for AuthStrategy {
    fn from(strategy: CredentialStrategy) -> Self {
        match strategy {
            CredentialStrategy::ServiceAccountToken => Self::ServiceAccountToken,
            CredentialStrategy::ClientCertificate => Self::ClientCertificate,
        }
    }
}

impl fmt::Display for AuthStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ConfigFile => "config file",
            Self::ServiceAccountToken => "service account token",
            Self::ClientCertificate => "client certificate",
        })
    }
}

// =============================================================================
// Resolution
// =============================================================================

/// What to build a client from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Kubeconfig file at this path
    ConfigFile(PathBuf),
    /// Connection assembled from host based inputs
    Connection(ConnectionConfig),
}

/// Outcome of a successful [`plan`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Selected strategy
    pub strategy: AuthStrategy,
    /// What the client is built from
    pub target: Target,
    /// Inputs that were set but did not contribute to the resolution
    pub ignored: Vec<InputField>,
}

impl Resolution {
    /// Describe this resolution without exposing any material
    pub fn summary(&self) -> ResolutionSummary {
        let mut summary = ResolutionSummary {
            strategy: self.strategy,
            config_file: None,
            host: None,
            ca: None,
            token: None,
            certificate: None,
            key: None,
            ignored: self.ignored.iter().map(|f| f.env_var()).collect(),
        };
        match &self.target {
            Target::ConfigFile(path) => summary.config_file = Some(path.clone()),
            Target::Connection(config) => {
                let tls = &config.tls;
                summary.host = Some(config.host.clone());
                summary.ca = origin(tls.ca_file.is_some(), tls.ca_data.is_some());
                summary.token = origin(
                    config.bearer_token_file.is_some(),
                    config.bearer_token.is_some(),
                );
                summary.certificate = origin(tls.cert_file.is_some(), tls.cert_data.is_some());
                summary.key = origin(tls.key_file.is_some(), tls.key_data.is_some());
            }
        }
        summary
    }
}

// Inline data is reported when both are set, since kube-rs prefers it.
fn origin(file: bool, inline: bool) -> Option<Origin> {
    match (file, inline) {
        (_, true) => Some(Origin::Inline),
        (true, false) => Some(Origin::File),
        (false, false) => None,
    }
}

/// Secret free description of a [`Resolution`], for logs and CLI output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionSummary {
    /// Selected strategy
    pub strategy: AuthStrategy,
    /// Kubeconfig path, for the config file strategy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_file: Option<PathBuf>,
    /// API server URL, for host based strategies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// Where the CA came from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca: Option<Origin>,
    /// Where the service account token came from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<Origin>,
    /// Where the client certificate came from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate: Option<Origin>,
    /// Where the client key came from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<Origin>,
    /// Environment names of inputs that were set but not used
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ignored: Vec<&'static str>,
}

/// Decide how to authenticate from `inputs`.
///
/// Pure: decodes inline material but reads no files and contacts nothing.
pub fn plan(inputs: &EnvironmentInputs) -> Result<Resolution, Error> {
    for branch in BRANCHES {
        let mut used = BTreeSet::new();
        let Some((strategy, target)) = attempt_branch(branch, inputs, &mut used)? else {
            debug!(?branch, "Branch does not apply");
            continue;
        };

        let ignored: Vec<InputField> = inputs.present().filter(|f| !used.contains(f)).collect();
        if !ignored.is_empty() {
            let names: Vec<&str> = ignored.iter().map(|f| f.env_var()).collect();
            warn!(
                strategy = %strategy,
                ignored = ?names,
                "Ignoring cluster auth inputs that lost to a higher precedence source"
            );
        }

        return Ok(Resolution {
            strategy,
            target,
            ignored,
        });
    }

    Err(Error::unresolved(UnresolvedReason::MissingHost))
}

/// Try one branch. `Ok(None)` means it does not apply.
fn attempt_branch(
    branch: Branch,
    inputs: &EnvironmentInputs,
    used: &mut BTreeSet<InputField>,
) -> Result<Option<(AuthStrategy, Target)>, Error> {
    match branch {
        Branch::ConfigFile => Ok(inputs.value(InputField::ConfigFile)?.map(|path| {
            used.insert(InputField::ConfigFile);
            (AuthStrategy::ConfigFile, Target::ConfigFile(path.into()))
        })),
        Branch::Host => {
            let Some(host) = inputs.value(InputField::Host)? else {
                return Ok(None);
            };
            used.insert(InputField::Host);
            let mut config = ConnectionConfig::new(host);

            let ca = material::first_present(inputs, &CA_SOURCES)?
                .ok_or_else(|| Error::unresolved(UnresolvedReason::MissingCertificateAuthority))?;
            used.insert(ca.field);
            config.set_certificate_authority(ca);

            for strategy in CREDENTIAL_STRATEGIES {
                if apply_credential(strategy, inputs, &mut config, used)? {
                    return Ok(Some((strategy.into(), Target::Connection(config))));
                }
                debug!(?strategy, "Credential strategy has no inputs");
            }

            Err(Error::unresolved(UnresolvedReason::MissingCredentials))
        }
    }
}

/// Apply one credential strategy. `Ok(false)` means its inputs are absent.
fn apply_credential(
    strategy: CredentialStrategy,
    inputs: &EnvironmentInputs,
    config: &mut ConnectionConfig,
    used: &mut BTreeSet<InputField>,
) -> Result<bool, Error> {
    match strategy {
        CredentialStrategy::ServiceAccountToken => {
            let Some(token) = material::first_present(inputs, &TOKEN_SOURCES)? else {
                return Ok(false);
            };
            used.insert(token.field);
            config.set_token(token)?;
            Ok(true)
        }
        CredentialStrategy::ClientCertificate => {
            let certs = material::all_present(inputs, &CERT_SOURCES)?;
            if certs.is_empty() {
                return Ok(false);
            }
            let key = material::first_present(inputs, &KEY_SOURCES)?
                .ok_or_else(|| Error::unresolved(UnresolvedReason::CertificateWithoutKey))?;
            for cert in certs {
                used.insert(cert.field);
                config.set_client_certificate(cert);
            }
            used.insert(key.field);
            config.set_client_key(key);
            Ok(true)
        }
    }
}

// =============================================================================
// Resolver
// =============================================================================

/// Resolves credentials and builds a cluster client.
///
/// Stateless across calls: each call works only from the snapshot it is given.
pub struct CredentialResolver<L = KubeconfigFileLoader, F = KubeClientFactory> {
    loader: L,
    factory: F,
}

impl CredentialResolver {
    /// Resolver that reads kubeconfig files from disk and builds kube clients
    pub fn new() -> Self {
        Self::with_collaborators(KubeconfigFileLoader, KubeClientFactory::default())
    }
}

impl Default for CredentialResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl<L, F> CredentialResolver<L, F>
where
    L: ConfigLoader,
    F: ClientFactory,
{
    /// Resolver with custom collaborators
    pub fn with_collaborators(loader: L, factory: F) -> Self {
        Self { loader, factory }
    }

    /// Resolve credentials from `inputs` and build a client
    pub async fn resolve(&self, inputs: &EnvironmentInputs) -> Result<F::Client, Error> {
        let resolution = plan(inputs).inspect_err(|e| {
            error!(error = %e, "Failed to resolve cluster credentials");
        })?;
        self.connect(&resolution).await
    }

    /// Build a client for an already planned resolution
    pub async fn connect(&self, resolution: &Resolution) -> Result<F::Client, Error> {
        let kubeconfig = self.kubeconfig(resolution)?;
        info!(
            strategy = %resolution.strategy,
            "Authenticating to the cluster API through {}", resolution.strategy
        );
        self.factory.build(kubeconfig).await
    }

    fn kubeconfig(&self, resolution: &Resolution) -> Result<Kubeconfig, Error> {
        match &resolution.target {
            Target::ConfigFile(path) => self.loader.load(path).inspect_err(|e| {
                error!(path = %path.display(), error = %e, "Failed to load cluster config file");
            }),
            Target::Connection(config) => config.to_kubeconfig(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kube_client::{MockClientFactory, MockConfigLoader};
    use crate::ErrorKind;
    use std::path::Path;

    fn host_inputs() -> EnvironmentInputs {
        EnvironmentInputs::new()
            .with(InputField::Host, "https://10.0.0.1:6443")
            .with(InputField::CaFile, "/etc/k8s/ca.pem")
    }

    fn connection(resolution: &Resolution) -> &ConnectionConfig {
        match &resolution.target {
            Target::Connection(config) => config,
            Target::ConfigFile(path) => panic!("expected connection, got file {:?}", path),
        }
    }

    // =========================================================================
    // plan
    // =========================================================================

    #[test]
    fn config_file_ignores_everything_else() {
        let inputs = host_inputs()
            .with(InputField::ConfigFile, "/home/me/.kube/config")
            .with(InputField::CaData, "%%% not base64")
            .with(InputField::SaTokenData, "%%%");

        let resolution = plan(&inputs).unwrap();

        assert_eq!(resolution.strategy, AuthStrategy::ConfigFile);
        assert_eq!(
            resolution.target,
            Target::ConfigFile("/home/me/.kube/config".into())
        );
        assert_eq!(
            resolution.ignored,
            vec![
                InputField::Host,
                InputField::CaFile,
                InputField::CaData,
                InputField::SaTokenData
            ]
        );
    }

    #[test]
    fn missing_host_fails() {
        let inputs = EnvironmentInputs::new()
            .with(InputField::CaFile, "/etc/k8s/ca.pem")
            .with(InputField::SaTokenFile, "/var/run/token");

        let err = plan(&inputs).unwrap_err();
        assert!(matches!(
            err,
            Error::Unresolved {
                reason: UnresolvedReason::MissingHost
            }
        ));
    }

    #[test]
    fn missing_ca_fails() {
        let inputs = EnvironmentInputs::new()
            .with(InputField::Host, "https://api")
            .with(InputField::SaTokenFile, "/var/run/token");

        let err = plan(&inputs).unwrap_err();
        assert!(matches!(
            err,
            Error::Unresolved {
                reason: UnresolvedReason::MissingCertificateAuthority
            }
        ));
    }

    #[test]
    fn malformed_ca_data_is_decode_error() {
        let inputs = EnvironmentInputs::new()
            .with(InputField::Host, "https://api")
            .with(InputField::CaData, "not*base64")
            .with(InputField::SaTokenFile, "/var/run/token");

        let err = plan(&inputs).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
        assert_eq!(err.field(), Some("K8S_CA_DATA"));
    }

    #[test]
    fn token_file_selected() {
        let inputs = host_inputs().with(InputField::SaTokenFile, "/var/run/token");

        let resolution = plan(&inputs).unwrap();
        let config = connection(&resolution);

        assert_eq!(resolution.strategy, AuthStrategy::ServiceAccountToken);
        assert_eq!(config.host, "https://10.0.0.1:6443");
        assert_eq!(config.tls.ca_file.as_deref(), Some(Path::new("/etc/k8s/ca.pem")));
        assert_eq!(
            config.bearer_token_file.as_deref(),
            Some(Path::new("/var/run/token"))
        );
        assert!(config.bearer_token.is_none());
        assert!(resolution.ignored.is_empty());
    }

    #[test]
    fn token_wins_over_certificate() {
        // Malformed cert data proves the certificate inputs are never decoded
        let inputs = host_inputs()
            .with(InputField::SaTokenData, "dG9rZW4=")
            .with(InputField::CertData, "%%% not base64")
            .with(InputField::KeyFile, "/etc/k8s/client.key");

        let resolution = plan(&inputs).unwrap();
        let config = connection(&resolution);

        assert_eq!(resolution.strategy, AuthStrategy::ServiceAccountToken);
        assert_eq!(config.bearer_token.as_deref(), Some("token"));
        assert!(!config.tls.has_client_identity());
        assert_eq!(
            resolution.ignored,
            vec![InputField::CertData, InputField::KeyFile]
        );
    }

    #[test]
    fn malformed_token_data_does_not_fall_back_to_certificate() {
        let inputs = host_inputs()
            .with(InputField::SaTokenData, "@@@")
            .with(InputField::CertFile, "/etc/k8s/client.crt")
            .with(InputField::KeyFile, "/etc/k8s/client.key");

        let err = plan(&inputs).unwrap_err();
        assert_eq!(err.field(), Some("K8S_SA_TOKEN_DATA"));
    }

    #[test]
    fn certificate_selected_without_token() {
        let inputs = host_inputs()
            .with(InputField::CertFile, "/etc/k8s/client.crt")
            .with(InputField::KeyData, "a2V5");

        let resolution = plan(&inputs).unwrap();
        let config = connection(&resolution);

        assert_eq!(resolution.strategy, AuthStrategy::ClientCertificate);
        assert_eq!(
            config.tls.cert_file.as_deref(),
            Some(Path::new("/etc/k8s/client.crt"))
        );
        assert_eq!(config.tls.key_data.as_deref(), Some(&b"key"[..]));
        assert!(config.bearer_token.is_none() && config.bearer_token_file.is_none());
    }

    #[test]
    fn key_file_wins_over_key_data() {
        let inputs = host_inputs()
            .with(InputField::CertFile, "/etc/k8s/client.crt")
            .with(InputField::KeyFile, "/etc/k8s/client.key")
            .with(InputField::KeyData, "%%%");

        let resolution = plan(&inputs).unwrap();
        let config = connection(&resolution);

        assert_eq!(
            config.tls.key_file.as_deref(),
            Some(Path::new("/etc/k8s/client.key"))
        );
        assert!(config.tls.key_data.is_none());
        assert_eq!(resolution.ignored, vec![InputField::KeyData]);
    }

    #[test]
    fn certificate_file_with_malformed_data_fails() {
        let inputs = host_inputs()
            .with(InputField::CertFile, "/tls.crt")
            .with(InputField::CertData, "%%% not base64")
            .with(InputField::KeyFile, "/tls.key");

        let err = plan(&inputs).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
        assert_eq!(err.field(), Some("K8S_CERT_DATA"));
    }

    #[test]
    fn certificate_file_and_data_are_both_kept() {
        let inputs = host_inputs()
            .with(InputField::CertFile, "/tls.crt")
            .with(InputField::CertData, "Q0VSVA==")
            .with(InputField::KeyFile, "/tls.key");

        let resolution = plan(&inputs).unwrap();
        let config = connection(&resolution);

        assert_eq!(resolution.strategy, AuthStrategy::ClientCertificate);
        assert_eq!(config.tls.cert_file.as_deref(), Some(Path::new("/tls.crt")));
        assert_eq!(config.tls.cert_data.as_deref(), Some(&b"CERT"[..]));
        assert!(resolution.ignored.is_empty());
    }

    #[test]
    fn token_file_wins_over_token_data() {
        let inputs = host_inputs()
            .with(InputField::SaTokenFile, "/var/run/token")
            .with(InputField::SaTokenData, "@@@ not base64");

        let resolution = plan(&inputs).unwrap();
        let config = connection(&resolution);

        assert_eq!(resolution.strategy, AuthStrategy::ServiceAccountToken);
        assert_eq!(
            config.bearer_token_file.as_deref(),
            Some(Path::new("/var/run/token"))
        );
        assert!(config.bearer_token.is_none());
        assert_eq!(resolution.ignored, vec![InputField::SaTokenData]);
    }

    #[test]
    fn token_data_used_without_token_file() {
        let inputs = host_inputs().with(InputField::SaTokenData, "dG9rZW4=");

        let resolution = plan(&inputs).unwrap();
        let config = connection(&resolution);

        assert_eq!(config.bearer_token.as_deref(), Some("token"));
        assert!(config.bearer_token_file.is_none());
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_host_is_malformed_not_missing() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let inputs = EnvironmentInputs::new()
            .with_os(InputField::Host, OsString::from_vec(vec![0xff, 0xfe]))
            .with(InputField::CaFile, "/etc/k8s/ca.pem")
            .with(InputField::SaTokenFile, "/var/run/token");

        let err = plan(&inputs).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
        assert_eq!(err.field(), Some("K8S_HOST"));
    }

    #[test]
    fn certificate_without_key_fails() {
        let inputs = host_inputs().with(InputField::CertFile, "/etc/k8s/client.crt");

        let err = plan(&inputs).unwrap_err();
        assert!(matches!(
            err,
            Error::Unresolved {
                reason: UnresolvedReason::CertificateWithoutKey
            }
        ));
    }

    #[test]
    fn malformed_cert_data_fails() {
        let inputs = host_inputs()
            .with(InputField::CertData, "***")
            .with(InputField::KeyFile, "/etc/k8s/client.key");

        let err = plan(&inputs).unwrap_err();
        assert_eq!(err.field(), Some("K8S_CERT_DATA"));
    }

    #[test]
    fn malformed_key_data_fails() {
        let inputs = host_inputs()
            .with(InputField::CertFile, "/etc/k8s/client.crt")
            .with(InputField::KeyData, "***");

        let err = plan(&inputs).unwrap_err();
        assert_eq!(err.field(), Some("K8S_KEY_DATA"));
    }

    #[test]
    fn key_without_certificate_is_no_credential() {
        let inputs = host_inputs().with(InputField::KeyFile, "/etc/k8s/client.key");

        let err = plan(&inputs).unwrap_err();
        assert!(matches!(
            err,
            Error::Unresolved {
                reason: UnresolvedReason::MissingCredentials
            }
        ));
    }

    #[test]
    fn summary_has_no_material() {
        let inputs = host_inputs()
            .with(InputField::SaTokenData, "c3VwZXItc2VjcmV0")
            .with(InputField::CertFile, "/etc/k8s/client.crt");

        let summary = plan(&inputs).unwrap().summary();
        let json = serde_json::to_string(&summary).unwrap();

        assert!(!json.contains("super-secret"));
        assert!(!json.contains("c3VwZXItc2VjcmV0"));
        assert!(json.contains("\"strategy\":\"service-account-token\""));
        assert!(json.contains("K8S_CERT_FILE"));
        assert!(!json.contains("config_file"));
        assert_eq!(summary.ca, Some(Origin::File));
        assert_eq!(summary.token, Some(Origin::Inline));
        assert_eq!(summary.certificate, None);
        assert_eq!(summary.key, None);
        assert!(json.contains("\"ca\":\"file\""));
        assert!(json.contains("\"token\":\"inline\""));
    }

    #[test]
    fn summary_reports_certificate_origins() {
        let inputs = host_inputs()
            .with(InputField::CertData, "Q0VSVA==")
            .with(InputField::KeyFile, "/tls.key");

        let summary = plan(&inputs).unwrap().summary();

        assert_eq!(summary.strategy, AuthStrategy::ClientCertificate);
        assert_eq!(summary.certificate, Some(Origin::Inline));
        assert_eq!(summary.key, Some(Origin::File));
        assert_eq!(summary.token, None);
    }

    // =========================================================================
    // CredentialResolver
    // =========================================================================

    #[tokio::test]
    async fn resolve_config_file_uses_loader() {
        let mut loader = MockConfigLoader::new();
        loader
            .expect_load()
            .withf(|path| path == Path::new("/kube/config"))
            .times(1)
            .returning(|_| Ok(Kubeconfig::default()));

        let mut factory = MockClientFactory::new();
        factory
            .expect_build()
            .times(1)
            .returning(|_| Ok("file-client".to_string()));

        let resolver = CredentialResolver::with_collaborators(loader, factory);
        let inputs = host_inputs().with(InputField::ConfigFile, "/kube/config");

        let client = resolver.resolve(&inputs).await.unwrap();
        assert_eq!(client, "file-client");
    }

    #[tokio::test]
    async fn resolve_config_file_failure_does_not_fall_through() {
        let mut loader = MockConfigLoader::new();
        loader
            .expect_load()
            .returning(|path| Err(Error::config_load(path, "bad yaml")));

        let mut factory = MockClientFactory::new();
        factory.expect_build().times(0);

        let resolver = CredentialResolver::with_collaborators(loader, factory);
        let inputs = host_inputs()
            .with(InputField::ConfigFile, "/kube/config")
            .with(InputField::SaTokenFile, "/var/run/token");

        let err = resolver.resolve(&inputs).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigLoad);
    }

    #[tokio::test]
    async fn resolve_host_builds_from_connection() {
        let mut loader = MockConfigLoader::new();
        loader.expect_load().times(0);

        let mut factory = MockClientFactory::new();
        factory
            .expect_build()
            .withf(|kc| {
                let user = kc.auth_infos[0].auth_info.as_ref();
                user.and_then(|u| u.token_file.as_deref()) == Some("/var/run/token")
            })
            .times(1)
            .returning(|_| Ok("host-client".to_string()));

        let resolver = CredentialResolver::with_collaborators(loader, factory);
        let inputs = host_inputs().with(InputField::SaTokenFile, "/var/run/token");

        let client = resolver.resolve(&inputs).await.unwrap();
        assert_eq!(client, "host-client");
    }

    #[tokio::test]
    async fn resolve_unresolved_never_builds() {
        let mut loader = MockConfigLoader::new();
        loader.expect_load().times(0);
        let mut factory = MockClientFactory::new();
        factory.expect_build().times(0);

        let resolver = CredentialResolver::with_collaborators(loader, factory);
        let err = resolver
            .resolve(&EnvironmentInputs::new())
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Unresolved);
    }
}
