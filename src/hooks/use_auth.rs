use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

/// Profile fields the shell cares about, a subset of Nostr kind-0 metadata.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nip05: Option<String>,
}

/// One signed-in account. The id doubles as the removal handle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Login {
    pub id: String,
    pub pubkey: String,
    pub metadata: ProfileMetadata,
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum LoginError {
    #[error("public key must be 64 hex characters, got {0}")]
    InvalidLength(usize),
    #[error("public key contains non-hex characters")]
    InvalidEncoding,
}

/// Validate a hex-encoded public key, normalising to lowercase. Key
/// generation and signing belong to an external signer.
pub fn parse_pubkey(input: &str) -> Result<String, LoginError> {
    let key = input.trim();
    if key.len() != 64 {
        return Err(LoginError::InvalidLength(key.len()));
    }
    if !key.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(LoginError::InvalidEncoding);
    }
    Ok(key.to_ascii_lowercase())
}

/// Session list shared through context. The first entry is the current user.
#[derive(Clone)]
pub struct Auth {
    logins: Signal<Vec<Login>>,
}

impl Auth {
    pub fn new() -> Self {
        Self {
            logins: Signal::new(Vec::new()),
        }
    }

    pub fn current_user(&self) -> Option<Login> {
        self.logins.read().first().cloned()
    }

    /// The most recent login becomes current. A same-id entry is replaced.
    pub fn add_login(&mut self, login: Login) {
        let mut logins = self.logins.write();
        logins.retain(|l| l.id != login.id);
        logins.insert(0, login);
    }

    /// Fire-and-forget removal by login id.
    pub fn remove_login(&mut self, id: &str) {
        self.logins.write().retain(|l| l.id != id);
    }
}

impl Default for Auth {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_auth() -> Auth {
    use_context::<Auth>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_pubkey_accepts_64_hex_chars() {
        let key = "A".repeat(64);
        assert_eq!(parse_pubkey(&key), Ok("a".repeat(64)));
    }

    #[test]
    fn parse_pubkey_trims_surrounding_whitespace() {
        let key = format!("  {}  ", "7e".repeat(32));
        assert_eq!(parse_pubkey(&key), Ok("7e".repeat(32)));
    }

    #[test]
    fn parse_pubkey_rejects_wrong_length() {
        assert_eq!(parse_pubkey("abc123"), Err(LoginError::InvalidLength(6)));
    }

    #[test]
    fn parse_pubkey_rejects_non_hex() {
        let key = "z".repeat(64);
        assert_eq!(parse_pubkey(&key), Err(LoginError::InvalidEncoding));
    }
}
