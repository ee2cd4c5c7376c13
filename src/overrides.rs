//! Per-host resource and tenant overrides.
//!
//! Overrides come from git config keys of the form
//! `azureCliCredentialHelper.<url-or-host>.resource` and
//! `azureCliCredentialHelper.<url-or-host>.tenant`. A key naming the full
//! `scheme://host` takes precedence over one naming the bare host.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::config::ConfigSource;

/// Git config namespace, lower-cased the way git reports section names.
pub const CONFIG_PREFIX: &str = "azureclicredentialhelper.";

const RESOURCE_SUFFIX: &str = ".resource";
const TENANT_SUFFIX: &str = ".tenant";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OverrideTable {
    pub resources: BTreeMap<String, String>,
    pub tenants: BTreeMap<String, String>,
}

impl OverrideTable {
    /// Scan every key under the namespace and classify it by suffix.
    pub fn load(source: &impl ConfigSource) -> Self {
        let mut table = Self::default();

        for key in source.keys_with_prefix(CONFIG_PREFIX) {
            let Some(rest) = strip_prefix_ignore_case(&key, CONFIG_PREFIX) else {
                continue;
            };

            let (target, url_part) = if let Some(url_part) = rest.strip_suffix(RESOURCE_SUFFIX) {
                (&mut table.resources, url_part)
            } else if let Some(url_part) = rest.strip_suffix(TENANT_SUFFIX) {
                (&mut table.tenants, url_part)
            } else {
                continue;
            };

            if url_part.is_empty() {
                continue;
            }

            match source.get(&key) {
                Some(value) if !value.is_empty() => {
                    debug!("Loaded override: {} -> {}", key, value);
                    target.insert(url_part.to_string(), value);
                }
                _ => {}
            }
        }

        table
    }

    /// Resource to request for `protocol://host`. Falls back to the URL itself
    /// with a trailing slash, which is the audience the broker expects.
    pub fn resolve_resource(&self, protocol: &str, host: &str) -> String {
        let url = base_url(protocol, host);
        lookup(&self.resources, &url, host)
            .map(str::to_string)
            .unwrap_or_else(|| format!("{}/", url))
    }

    /// Tenant to bind for `protocol://host`. Empty means the broker's active
    /// identity context.
    pub fn resolve_tenant(&self, protocol: &str, host: &str) -> String {
        let url = base_url(protocol, host);
        lookup(&self.tenants, &url, host)
            .map(str::to_string)
            .unwrap_or_default()
    }

    /// Whether an explicit resource override (full URL or bare host) exists.
    pub fn has_resource_override(&self, protocol: &str, host: &str) -> bool {
        lookup(&self.resources, &base_url(protocol, host), host).is_some()
    }
}

fn base_url(protocol: &str, host: &str) -> String {
    format!("{}://{}", protocol, host)
}

fn lookup<'a>(map: &'a BTreeMap<String, String>, url: &str, host: &str) -> Option<&'a str> {
    map.get(url).or_else(|| map.get(host)).map(String::as_str)
}

fn strip_prefix_ignore_case<'a>(key: &'a str, prefix: &str) -> Option<&'a str> {
    let head = key.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(&key[prefix.len()..])
    } else {
        None
    }
}
