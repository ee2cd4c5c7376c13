use std::process::Command;

use tracing::debug;

use crate::error::{CredentialError, Result};

use super::ConfigEntries;

/// Load the merged git configuration (system, global, local) as git resolves it.
///
/// A missing `git` binary or a failing `git config` yields an empty snapshot,
/// so callers fall back to defaults.
pub fn load() -> ConfigEntries {
    match read_config_list() {
        Ok(entries) => {
            debug!("Loaded {} git config entries", entries.len());
            entries
        }
        Err(e) => {
            debug!("Git config unavailable, using defaults: {}", e);
            ConfigEntries::default()
        }
    }
}

fn read_config_list() -> Result<ConfigEntries> {
    let output = Command::new("git")
        .args(["config", "--null", "--list"])
        .output()
        .map_err(|e| CredentialError::GitConfig(format!("Failed to run `git config`: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(CredentialError::GitConfig(format!(
            "git config --list failed: {}",
            stderr.trim()
        )));
    }

    Ok(parse_null_list(&String::from_utf8_lossy(&output.stdout)))
}

/// Parse `git config --null --list` output: records are NUL-terminated and the
/// key is separated from its value by the first newline. A key with no newline
/// has no value.
pub fn parse_null_list(raw: &str) -> ConfigEntries {
    ConfigEntries::from_pairs(raw.split('\0').filter(|r| !r.is_empty()).map(|record| {
        match record.split_once('\n') {
            Some((key, value)) => (key, value),
            None => (record, ""),
        }
    }))
}

/// Run a `git` command with inherited stdio, as used by the setup command.
pub fn run_git(args: &[&str]) -> Result<()> {
    debug!("Running: git {}", args.join(" "));
    let status = Command::new("git")
        .args(args)
        .status()
        .map_err(|e| CredentialError::GitConfig(format!("Failed to run `git`: {}", e)))?;

    if !status.success() {
        return Err(CredentialError::GitConfig(format!(
            "`git {}` exited with {}",
            args.join(" "),
            status
        )));
    }
    Ok(())
}
