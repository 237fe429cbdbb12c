//! Resolve command - show which credentials a cluster client would use
//!
//! Runs the full resolution over the given inputs and, unless `--dry-run` is
//! set, builds a kube client from the result. Output never includes tokens,
//! keys or certificate data.

use std::time::Duration;

use clap::Args;
use cluster_auth::material::Origin;
use cluster_auth::{
    plan, CredentialResolver, KubeClientFactory, KubeconfigFileLoader, ResolutionSummary,
};
use tracing::info;

use super::CredentialArgs;
use crate::Result;

/// Resolve command arguments
#[derive(Args, Debug)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub credentials: CredentialArgs,

    /// Print the resolution as JSON
    #[arg(long)]
    pub json: bool,

    /// Only decide the strategy, do not build a client
    #[arg(long)]
    pub dry_run: bool,

    /// Client connect timeout in seconds
    #[arg(long, default_value = "5")]
    pub connect_timeout: u64,

    /// Client read timeout in seconds
    #[arg(long, default_value = "30")]
    pub read_timeout: u64,
}

/// Run the resolve command
pub async fn run(args: ResolveArgs) -> Result<()> {
    let inputs = args.credentials.inputs();
    let resolution = plan(&inputs)?;

    if !args.dry_run {
        let factory = KubeClientFactory::with_timeouts(
            Duration::from_secs(args.connect_timeout),
            Duration::from_secs(args.read_timeout),
        );
        CredentialResolver::with_collaborators(KubeconfigFileLoader, factory)
            .connect(&resolution)
            .await?;
        info!(strategy = %resolution.strategy, "Cluster client created");
    }

    let summary = resolution.summary();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", render_text(&summary));
    }
    Ok(())
}

/// Render a summary as aligned `key: value` lines
fn render_text(summary: &ResolutionSummary) -> String {
    let mut lines = vec![format!("strategy: {}", summary.strategy)];
    if let Some(path) = &summary.config_file {
        lines.push(format!("config:   {}", path.display()));
    }
    if let Some(host) = &summary.host {
        lines.push(format!("host:     {}", host));
    }
    let origins = [
        ("ca", summary.ca),
        ("token", summary.token),
        ("cert", summary.certificate),
        ("key", summary.key),
    ];
    for (name, origin) in origins {
        if let Some(origin) = origin {
            lines.push(format!("{:<9} {}", format!("{}:", name), origin_label(origin)));
        }
    }
    if !summary.ignored.is_empty() {
        lines.push(format!("ignored:  {}", summary.ignored.join(", ")));
    }
    lines.iter().map(|line| format!("{}\n", line)).collect()
}

fn origin_label(origin: Origin) -> &'static str {
    match origin {
        Origin::File => "file",
        Origin::Inline => "inline",
    }
}
