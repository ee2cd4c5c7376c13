use std::fs;
use std::path::PathBuf;

use azcred::error::{CredentialError, Result};

/// Absolute path of the running executable, with symlinks resolved.
pub fn executable_path() -> Result<PathBuf> {
    let exe = std::env::current_exe()
        .map_err(|e| CredentialError::Other(format!("Failed to get executable path: {}", e)))?;
    fs::canonicalize(&exe)
        .map_err(|e| CredentialError::Other(format!("Failed to resolve symlinks: {}", e)))
}
