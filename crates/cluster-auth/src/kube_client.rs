//! Kubernetes client construction
//!
//! Trait seams for the two collaborators resolution hands off to: reading a
//! kubeconfig file, and turning a kubeconfig into a client. The default
//! implementations use kube-rs; tests substitute mocks.

use std::path::Path;
use std::time::Duration;

use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config};

use crate::Error;

/// Default connection timeout for kube clients
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
/// Default read timeout for kube clients
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(30);

/// Loads a kubeconfig from a file path
#[cfg_attr(test, mockall::automock)]
pub trait ConfigLoader: Send + Sync {
    /// Read and parse the kubeconfig at `path`
    fn load(&self, path: &Path) -> Result<Kubeconfig, Error>;
}

/// Builds a client handle from a kubeconfig
#[cfg_attr(test, mockall::automock(type Client = String;))]
#[async_trait::async_trait]
pub trait ClientFactory: Send + Sync {
    /// Handle returned to callers
    type Client: Send;

    /// Build a client using the kubeconfig's current context
    async fn build(&self, kubeconfig: Kubeconfig) -> Result<Self::Client, Error>;
}

/// Reads kubeconfig files from disk
#[derive(Clone, Copy, Debug, Default)]
pub struct KubeconfigFileLoader;

impl ConfigLoader for KubeconfigFileLoader {
    fn load(&self, path: &Path) -> Result<Kubeconfig, Error> {
        Kubeconfig::read_from(path).map_err(|e| Error::config_load(path, e.to_string()))
    }
}

/// Builds `kube::Client`s with connect and read timeouts applied
#[derive(Clone, Debug)]
pub struct KubeClientFactory {
    connect_timeout: Duration,
    read_timeout: Duration,
}

impl KubeClientFactory {
    /// Create a factory with custom timeouts
    pub fn with_timeouts(connect_timeout: Duration, read_timeout: Duration) -> Self {
        Self {
            connect_timeout,
            read_timeout,
        }
    }

    /// Resolve a kubeconfig into a `kube::Config` without building a client
    pub async fn config(&self, kubeconfig: Kubeconfig) -> Result<Config, Error> {
        let mut config = Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
            .await
            .map_err(|e| Error::client(format!("failed to load kubeconfig: {}", e)))?;
        config.connect_timeout = Some(self.connect_timeout);
        config.read_timeout = Some(self.read_timeout);
        Ok(config)
    }
}

impl Default for KubeClientFactory {
    fn default() -> Self {
        Self::with_timeouts(DEFAULT_CONNECT_TIMEOUT, DEFAULT_READ_TIMEOUT)
    }
}

#[async_trait::async_trait]
impl ClientFactory for KubeClientFactory {
    type Client = Client;

    async fn build(&self, kubeconfig: Kubeconfig) -> Result<Client, Error> {
        let config = self.config(kubeconfig).await?;
        Client::try_from(config).map_err(|e| Error::client(e.to_string()))
    }
}
