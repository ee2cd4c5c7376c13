use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

use chrono::{Local, NaiveDateTime, TimeZone};
use secrecy::SecretString;
use serde::Deserialize;
use tracing::debug;
use zeroize::Zeroize;

use crate::error::{CredentialError, Result};

use super::{AccessToken, TokenBroker};

#[cfg(windows)]
const AZ_CANDIDATES: &[&str] = &["az.cmd", "az.exe", "az"];
#[cfg(not(windows))]
const AZ_CANDIDATES: &[&str] = &["az"];

/// Layout of `expiresOn` in `az account get-access-token` output (local time).
const EXPIRES_ON_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Token broker backed by the Azure CLI's cached login session.
#[derive(Debug, Clone)]
pub struct AzureCliBroker {
    program: PathBuf,
    tenant: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CliToken {
    access_token: SecretString,
    #[serde(default)]
    expires_on: Option<String>,
    #[serde(default, rename = "expires_on")]
    expires_on_unix: Option<i64>,
}

impl AzureCliBroker {
    /// Locate `az` on `PATH` and bind an optional tenant.
    pub fn new(tenant: Option<&str>) -> Result<Self> {
        let program = find_on_path(AZ_CANDIDATES).ok_or(CredentialError::BrokerNotFound)?;
        Self::with_program(program, tenant)
    }

    /// Use an explicit `az` executable.
    pub fn with_program(program: impl Into<PathBuf>, tenant: Option<&str>) -> Result<Self> {
        let tenant = match tenant.filter(|t| !t.is_empty()) {
            Some(t) if !is_valid_tenant(t) => {
                return Err(CredentialError::InvalidTenant(t.to_string()));
            }
            other => other.map(str::to_string),
        };

        Ok(Self {
            program: program.into(),
            tenant,
        })
    }

    pub fn tenant(&self) -> Option<&str> {
        self.tenant.as_deref()
    }

    fn command(&self, scope: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(["account", "get-access-token", "--output", "json", "--scope", scope]);
        if let Some(tenant) = &self.tenant {
            cmd.args(["--tenant", tenant.as_str()]);
        }
        cmd
    }
}

impl TokenBroker for AzureCliBroker {
    fn get_token(&self, scope: &str) -> Result<AccessToken> {
        let mut output = self.command(scope).output().map_err(|e| {
            CredentialError::Acquisition(format!("Failed to run `az account get-access-token`: {}", e))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            if stderr.contains("az login") {
                return Err(CredentialError::Acquisition(format!(
                    "Not logged in to Azure CLI. Run `az login` first. ({})",
                    stderr.trim()
                )));
            }
            return Err(CredentialError::Acquisition(format!(
                "az account get-access-token failed: {}",
                stderr.trim()
            )));
        }

        let parsed = parse_token_output(&output.stdout);
        output.stdout.zeroize();
        parsed
    }
}

/// Parse the JSON printed by `az account get-access-token`.
///
/// `expires_on` (Unix seconds) is preferred; older CLIs only print the local
/// `expiresOn` timestamp.
pub fn parse_token_output(stdout: &[u8]) -> Result<AccessToken> {
    let raw: CliToken = serde_json::from_slice(stdout)
        .map_err(|e| CredentialError::Acquisition(format!("Failed to parse az output: {}", e)))?;

    let expires_on = raw
        .expires_on_unix
        .or_else(|| raw.expires_on.as_deref().and_then(parse_local_expiry));
    debug!("Token acquired, expires at: {:?}", expires_on);

    Ok(AccessToken {
        token: raw.access_token,
        expires_on,
    })
}

fn parse_local_expiry(value: &str) -> Option<i64> {
    let naive = NaiveDateTime::parse_from_str(value, EXPIRES_ON_FORMAT).ok()?;
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.timestamp())
}

/// Tenant IDs are GUIDs or domain names.
fn is_valid_tenant(tenant: &str) -> bool {
    tenant
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
}

fn find_on_path(candidates: &[&str]) -> Option<PathBuf> {
    let path = env::var_os("PATH")?;
    env::split_paths(&path).find_map(|dir| {
        candidates
            .iter()
            .map(|name| dir.join(name))
            .find(|p| is_executable(p))
    })
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
