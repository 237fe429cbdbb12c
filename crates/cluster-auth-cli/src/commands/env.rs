//! Env command - list the recognised K8S_* variables
//!
//! Shows whether each variable is set in the current environment. Values are
//! never printed.

use clap::Args;
use cluster_auth::{EnvironmentInputs, InputField};
use serde::Serialize;

use crate::Result;

/// Env command arguments
#[derive(Args, Debug)]
pub struct EnvArgs {
    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct EnvEntry {
    name: &'static str,
    set: bool,
}

fn entries(inputs: &EnvironmentInputs) -> Vec<EnvEntry> {
    InputField::ALL
        .into_iter()
        .map(|field| EnvEntry {
            name: field.env_var(),
            set: inputs.is_set(field),
        })
        .collect()
}

/// Run the env command
pub fn run(args: EnvArgs) -> Result<()> {
    let entries = entries(&EnvironmentInputs::from_env());
    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for entry in &entries {
            let state = if entry.set { "set" } else { "unset" };
            println!("{:<18} {}", entry.name, state);
        }
    }
    Ok(())
}
