use serde::Serialize;

/// Domains handled when git config does not list any.
pub const DEFAULT_ALLOWED_DOMAINS: &[&str] = &["visualstudio.com", "dev.azure.com"];

/// Ordered set of lower-cased domain suffixes that credentials may be issued for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AllowedDomains(Vec<String>);

impl AllowedDomains {
    /// Build from configured values. Entries are trimmed and lower-cased, blanks
    /// are dropped, and the default set is used when nothing remains.
    pub fn from_config<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let domains: Vec<String> = values
            .into_iter()
            .map(|v| v.as_ref().trim().to_lowercase())
            .filter(|v| !v.is_empty())
            .collect();

        if domains.is_empty() {
            Self::default()
        } else {
            Self(domains)
        }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Check whether `host` falls under any of the allowed domains.
    pub fn allows(&self, host: &str) -> bool {
        is_allowed(host, &self.0)
    }
}

impl Default for AllowedDomains {
    fn default() -> Self {
        Self(DEFAULT_ALLOWED_DOMAINS.iter().map(|d| d.to_string()).collect())
    }
}

/// A host is allowed when it equals a domain or ends with `"." + domain`,
/// compared case-insensitively.
pub fn is_allowed<S: AsRef<str>>(host: &str, domains: &[S]) -> bool {
    let host = host.to_lowercase();
    domains.iter().any(|domain| {
        let domain = domain.as_ref().to_lowercase();
        host == domain || host.ends_with(&format!(".{}", domain))
    })
}
