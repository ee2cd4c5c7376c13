//! azcred: resolve git HTTPS credential requests into Azure CLI bearer tokens.
//!
//! This library holds the resolution core used by the `git-credential-azure-cli`
//! binary: request parsing, the allowed-domain gate, per-host resource and
//! tenant overrides, token acquisition through the Azure CLI, and the
//! realm-fallback retry. The command surface is gated behind the `cli` feature
//! and is private to the binary.
//!
//! # Quick start
//!
//! ```no_run
//! use azcred::broker::AzureCliBroker;
//! use azcred::config::Settings;
//! use azcred::request::CredentialRequest;
//! use azcred::resolve::Resolver;
//!
//! let settings = Settings::load();
//! let request = CredentialRequest::parse("protocol=https\nhost=dev.azure.com\n".as_bytes())?;
//! let outcome = Resolver::new(&settings).resolve(&request, AzureCliBroker::new)?;
//! outcome.write_to(&mut std::io::stdout())?;
//! # Ok::<(), azcred::error::CredentialError>(())
//! ```

pub mod broker;
pub mod config;
pub mod domain;
pub mod error;
pub mod netrc;
pub mod overrides;
pub mod request;
pub mod resolve;
pub mod token;
