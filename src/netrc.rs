use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::is_allowed;
use crate::error::Result;

pub fn default_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".netrc"))
}

/// Hosts in `machine` entries of a netrc file that fall under `domains`.
///
/// A missing file is not an error. Such entries would be offered to git before
/// this helper runs and shadow it.
pub fn conflicting_hosts<S: AsRef<str>>(path: &Path, domains: &[S]) -> Result<Vec<String>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No .netrc file found at {}", path.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };
    debug!("Checking .netrc at {}", path.display());

    let mut hosts = Vec::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        for pair in fields.windows(2) {
            if pair[0] == "machine" {
                let host = pair[1].to_lowercase();
                if is_allowed(&host, domains) {
                    debug!("Found matching host in .netrc: {}", host);
                    hosts.push(host);
                }
            }
        }
    }

    Ok(hosts)
}
