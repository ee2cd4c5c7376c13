use azcred::error::{CredentialError, Result};

use crate::cli::common;

pub fn run() -> Result<()> {
    let exe = common::executable_path()?;
    let dir = exe
        .parent()
        .ok_or_else(|| CredentialError::Other(format!("No parent directory for {}", exe.display())))?;

    println!("export GOAUTH=\"git {}\"", dir.display());
    Ok(())
}
