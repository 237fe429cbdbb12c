//! cluster-auth CLI library

pub mod commands;
pub mod error;

pub use error::{Error, Result};

use clap::{Parser, Subcommand};

/// Resolve Kubernetes cluster credentials from K8S_* inputs
#[derive(Parser, Debug)]
#[command(name = "cluster-auth")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve credentials and build a cluster client
    Resolve(commands::resolve::ResolveArgs),
    /// List the recognised K8S_* environment variables
    Env(commands::env::EnvArgs),
}

impl Cli {
    /// Run the CLI command
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Resolve(args) => commands::resolve::run(args).await,
            Commands::Env(args) => commands::env::run(args),
        }
    }
}
