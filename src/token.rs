use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, info};

use crate::broker::TokenBroker;
use crate::error::Result;

/// Suffix the broker's token API expects on a resource to form a scope.
pub const DEFAULT_SCOPE_SUFFIX: &str = ".default";

/// A bearer credential ready to hand back to git.
#[derive(Debug)]
pub struct Credential {
    pub access_token: SecretString,
    /// Unix timestamp; `None` when the broker did not report one.
    pub expires_on: Option<i64>,
}

impl Credential {
    /// Whether there is a token to emit at all.
    pub fn is_present(&self) -> bool {
        !self.access_token.expose_secret().is_empty()
    }

    /// Expiry to advertise, only when known and positive.
    pub fn expiry(&self) -> Option<i64> {
        self.expires_on.filter(|e| *e > 0)
    }
}

/// Turn a resource (or realm) into a broker scope: exactly one trailing `/`
/// followed by `.default`.
pub fn normalize_scope(resource: &str) -> String {
    let mut scope = resource.to_string();
    if !scope.ends_with('/') {
        scope.push('/');
    }
    scope.push_str(DEFAULT_SCOPE_SUFFIX);
    scope
}

/// Wraps a broker with scope normalisation. Does not retry.
pub struct TokenAcquirer<B> {
    broker: B,
}

impl<B: TokenBroker> TokenAcquirer<B> {
    pub fn new(broker: B) -> Self {
        Self { broker }
    }

    pub fn acquire(&self, resource: &str) -> Result<Credential> {
        let scope = normalize_scope(resource);
        debug!("Requesting token for scope: {}", scope);

        let token = self.broker.get_token(&scope).map_err(|e| {
            info!("Failed to get token: {}", e);
            e
        })?;

        Ok(Credential {
            access_token: token.token,
            expires_on: token.expires_on,
        })
    }
}
