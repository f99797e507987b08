//! Shared entry point for the generator executables.
//!
//! Each executable runs exactly one profile against the current working directory and
//! takes no arguments.

use std::env;

use anyhow::{Context, Result};
use tablegen_core::{GenerateReport, TableProfile, generate};
use tracing_subscriber::EnvFilter;

/// Installs the stderr logger. `RUST_LOG` overrides the default `info` level.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A second install (tests calling `run` repeatedly) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Generates `profile`'s header relative to the current directory.
pub fn run(profile: &TableProfile) -> Result<GenerateReport> {
    let root = env::current_dir().context("cannot determine the working directory")?;
    tracing::debug!(profile = profile.name, root = %root.display(), "starting run");
    generate(profile, &root)
        .with_context(|| format!("generating {} from {}", profile.output, profile.input))
}
