use tracing::debug;

use azcred::config::{git, Settings};
use azcred::error::Result;
use azcred::netrc;

use crate::cli::common;

pub fn run() -> Result<()> {
    let exe = common::executable_path()?;

    warn_netrc_conflicts(&Settings::load());

    println!("Configuring git credential helpers...");

    // The cache helper goes first so repeated requests don't reach the Azure CLI.
    git::run_git(&["config", "--global", "--replace-all", "credential.helper", "cache"])?;
    println!("✓ Added cache credential helper");

    let exe_str = exe.to_string_lossy().into_owned();
    git::run_git(&["config", "--global", "--add", "credential.helper", exe_str.as_str()])?;
    println!("✓ Added azure-cli credential helper: {}", exe.display());

    println!("\nGit credential configuration complete!");
    Ok(())
}

fn warn_netrc_conflicts(settings: &Settings) {
    let Some(path) = netrc::default_path() else {
        debug!("No home directory, skipping .netrc check");
        return;
    };

    let hosts = match netrc::conflicting_hosts(&path, settings.allowed_domains.as_slice()) {
        Ok(hosts) => hosts,
        Err(e) => {
            debug!("Failed to read {}: {}", path.display(), e);
            return;
        }
    };

    if hosts.is_empty() {
        return;
    }

    eprintln!("\nWARNING: Found entries in ~/.netrc that may conflict with this credential helper:");
    for host in &hosts {
        eprintln!("   - {}", host);
    }
    eprintln!("\nPlease remove these entries from ~/.netrc to avoid authentication conflicts.\n");
}
