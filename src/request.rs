//! Parsing of the git credential helper request.
//!
//! Git writes `key=value` lines to the helper's stdin, terminated by a blank
//! line or end of input. `wwwauth[]` may repeat; each occurrence carries one
//! `WWW-Authenticate` header from the server's challenge.

use std::collections::HashMap;
use std::io::BufRead;
use std::sync::OnceLock;

use regex::Regex;
use tracing::trace;

use crate::error::Result;

/// Repeated-header key used by git for authentication challenges.
pub const CHALLENGE_KEY: &str = "wwwauth[]";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialRequest {
    attributes: HashMap<String, String>,
    challenges: Vec<String>,
}

impl CredentialRequest {
    /// Read a request from `reader`. Lines without `=` are skipped.
    /// Lines that are not valid UTF-8 are decoded lossily.
    pub fn parse<R: BufRead>(reader: R) -> Result<Self> {
        let mut request = Self::default();

        for raw in reader.split(b'\n') {
            let raw = raw?;
            let line = String::from_utf8_lossy(&raw);
            let line = line.trim();
            if line.is_empty() {
                break;
            }

            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            trace!("Parsed input: {}={}", key, value);

            if key == CHALLENGE_KEY {
                request.challenges.push(value.to_string());
            } else {
                request.attributes.insert(key.to_string(), value.to_string());
            }
        }

        Ok(request)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    pub fn protocol(&self) -> &str {
        self.get("protocol").unwrap_or_default()
    }

    pub fn host(&self) -> &str {
        self.get("host").unwrap_or_default()
    }

    /// Challenge header values, in input order.
    pub fn challenges(&self) -> &[String] {
        &self.challenges
    }

    /// The first `realm="..."` value found in the challenge headers.
    pub fn realm(&self) -> Option<&str> {
        extract_realm(&self.challenges)
    }
}

fn realm_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r#"realm="([^"]+)""#).expect("realm pattern is valid"))
}

/// Headers are searched in order and the first match wins.
pub fn extract_realm<S: AsRef<str>>(challenges: &[S]) -> Option<&str> {
    challenges.iter().find_map(|header| {
        realm_pattern()
            .captures(header.as_ref())
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    })
}
