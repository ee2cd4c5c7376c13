pub mod git;

use serde::Serialize;
use tracing::debug;

use crate::domain::AllowedDomains;
use crate::error::{CredentialError, Result};
use crate::overrides::{OverrideTable, CONFIG_PREFIX};

/// Multi-valued `azureCliCredentialHelper.allowedDomain` key.
pub const ALLOWED_DOMAIN_KEY: &str = "azureclicredentialhelper.alloweddomain";

/// Read access to a dotted key/value configuration store with multi-valued keys.
pub trait ConfigSource {
    /// All values for `key`, in the order the store reports them.
    fn get_all(&self, key: &str) -> Vec<String>;

    /// The effective (last) value for `key`.
    fn get(&self, key: &str) -> Option<String> {
        self.get_all(key).pop()
    }

    /// Distinct keys starting with `prefix` (ASCII case-insensitive), in first-seen order.
    fn keys_with_prefix(&self, prefix: &str) -> Vec<String>;
}

/// An in-memory snapshot of configuration entries, in file order.
#[derive(Debug, Clone, Default)]
pub struct ConfigEntries {
    entries: Vec<(String, String)>,
}

impl ConfigEntries {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ConfigSource for ConfigEntries {
    fn get_all(&self, key: &str) -> Vec<String> {
        self.entries
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
            .collect()
    }

    fn keys_with_prefix(&self, prefix: &str) -> Vec<String> {
        let mut keys: Vec<String> = Vec::new();
        for (key, _) in &self.entries {
            let matches = key
                .get(..prefix.len())
                .map(|head| head.eq_ignore_ascii_case(prefix))
                .unwrap_or(false);
            if matches && !keys.contains(key) {
                keys.push(key.clone());
            }
        }
        keys
    }
}

/// Immutable configuration snapshot, built once per process and passed
/// by reference to every component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub allowed_domains: AllowedDomains,
    pub overrides: OverrideTable,
}

impl Settings {
    pub fn from_source(source: &impl ConfigSource) -> Self {
        let configured = source.get_all(ALLOWED_DOMAIN_KEY);
        let allowed_domains = AllowedDomains::from_config(&configured);
        if configured.is_empty() {
            debug!("Using default allowed domains: {:?}", allowed_domains.as_slice());
        } else {
            debug!("Loaded allowed domains from config: {:?}", allowed_domains.as_slice());
        }

        let overrides = OverrideTable::load(source);
        debug!(
            "Loaded {} resource and {} tenant override(s) under '{}'",
            overrides.resources.len(),
            overrides.tenants.len(),
            CONFIG_PREFIX
        );

        Self {
            allowed_domains,
            overrides,
        }
    }

    /// Load from the user's git configuration.
    pub fn load() -> Self {
        Self::from_source(&git::load())
    }

    /// Render as TOML for `config show`.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CredentialError::Serialization(format!("Config serialize error: {}", e)))
    }
}
