pub mod azure_cli;

use secrecy::SecretString;

use crate::error::Result;

pub use azure_cli::AzureCliBroker;

/// A token issued by the identity broker.
#[derive(Debug)]
pub struct AccessToken {
    pub token: SecretString,
    /// Absolute expiry as a Unix timestamp, when the broker reported one.
    pub expires_on: Option<i64>,
}

/// The identity broker capability: exchange a scope for a bearer token.
///
/// The tenant, if any, is bound when the broker is constructed.
pub trait TokenBroker {
    fn get_token(&self, scope: &str) -> Result<AccessToken>;
}

impl<B: TokenBroker + ?Sized> TokenBroker for &B {
    fn get_token(&self, scope: &str) -> Result<AccessToken> {
        (**self).get_token(scope)
    }
}
