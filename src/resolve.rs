//! Credential resolution for a single `get` request.
//!
//! The flow is: protocol gate, domain gate, override lookup, primary token
//! attempt, and, when no explicit resource override applies, one retry using
//! the `realm` advertised in the server's challenge. Every failure past the
//! gates ends in an empty response rather than an error, except failing to
//! construct the broker at all.

use std::io::Write;

use secrecy::ExposeSecret;
use tracing::{debug, info};

use crate::broker::TokenBroker;
use crate::config::Settings;
use crate::error::Result;
use crate::request::CredentialRequest;
use crate::token::{Credential, TokenAcquirer};

/// The only protocol credentials are issued for.
pub const SUPPORTED_PROTOCOL: &str = "https";

/// How a request was settled.
#[derive(Debug)]
pub enum Outcome {
    UnsupportedProtocol,
    HostNotAllowed,
    NoCredential,
    Issued(Credential),
}

impl Outcome {
    pub fn credential(&self) -> Option<&Credential> {
        match self {
            Outcome::Issued(cred) => Some(cred),
            _ => None,
        }
    }

    /// Write the helper response. Nothing is written unless a credential was issued.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        if let Some(cred) = self.credential() {
            out.write_all(format_response(cred).as_bytes())?;
            out.flush()?;
        }
        Ok(())
    }
}

/// Render the credential in git's helper response format.
pub fn format_response(cred: &Credential) -> String {
    let mut response = format!(
        "authtype=bearer\nusername=null\npassword={}\n",
        cred.access_token.expose_secret()
    );
    if let Some(expiry) = cred.expiry() {
        response.push_str(&format!("password_expiry_utc={}\n", expiry));
    }
    response
}

pub struct Resolver<'a> {
    settings: &'a Settings,
}

impl<'a> Resolver<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Resolve `request`. `connect` builds the broker, bound to the tenant
    /// override when one exists; it is only called once both gates pass.
    pub fn resolve<B, F>(&self, request: &CredentialRequest, connect: F) -> Result<Outcome>
    where
        B: TokenBroker,
        F: FnOnce(Option<&str>) -> Result<B>,
    {
        let protocol = request.protocol();
        let host = request.host();
        info!("Handling get request for {}://{}", protocol, host);

        if protocol != SUPPORTED_PROTOCOL {
            info!("Skipping non-HTTPS protocol: {}", protocol);
            return Ok(Outcome::UnsupportedProtocol);
        }

        if !self.settings.allowed_domains.allows(host) {
            info!("Host not in allowed domains: {}", host);
            return Ok(Outcome::HostNotAllowed);
        }

        let overrides = &self.settings.overrides;
        let tenant = overrides.resolve_tenant(protocol, host);
        let tenant = Some(tenant.as_str()).filter(|t| !t.is_empty());
        if let Some(t) = tenant {
            info!("Using tenant override: {}", t);
        }
        let acquirer = TokenAcquirer::new(connect(tenant)?);

        let resource = overrides.resolve_resource(protocol, host);
        info!("Using resource: {}", resource);
        let mut attempt = acquirer.acquire(&resource);

        // The realm retry reuses the tenant binding of the first attempt.
        if attempt.is_err() && !overrides.has_resource_override(protocol, host) {
            if let Some(realm) = request.realm() {
                info!("Retrying with realm from wwwauth: {}", realm);
                attempt = acquirer.acquire(realm);
            }
        }

        match attempt {
            Ok(cred) if cred.is_present() => {
                info!("Successfully obtained credential");
                Ok(Outcome::Issued(cred))
            }
            Ok(_) => {
                debug!("Broker returned an empty token");
                Ok(Outcome::NoCredential)
            }
            Err(e) => {
                debug!("No credential for {}://{}: {}", protocol, host, e);
                Ok(Outcome::NoCredential)
            }
        }
    }
}
