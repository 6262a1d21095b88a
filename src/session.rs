// src/session.rs
//
// Login gate in front of the scanner.
//
// Credentials live outside the binary in a CSV file:
//   # user,salt,sha256(salt || password) as lowercase hex
//   operador,2f9c,5e88489...
// Blank lines and lines starting with '#' are skipped.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::csv::{parse_rows, write_row};

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("Could not read credentials {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("Malformed credentials line {line}: expected user,salt,sha256")]
    Malformed { line: usize },
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LoginError {
    #[error("Username and password are required")]
    MissingInput,

    #[error("Invalid username or password")]
    InvalidCredentials,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct CredentialEntry {
    salt: String,
    digest: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CredentialTable {
    entries: HashMap<String, CredentialEntry>,
}

impl CredentialTable {
    pub fn load(path: &Path) -> Result<Self, CredentialError> {
        let text = fs::read_to_string(path)
            .map_err(|source| CredentialError::Io { path: path.to_path_buf(), source })?;
        let table = Self::parse(&text)?;
        logf!("Auth: Loaded {} credential(s) from {}", table.len(), path.display());
        Ok(table)
    }

    pub fn parse(text: &str) -> Result<Self, CredentialError> {
        let mut entries = HashMap::new();

        for (i, line) in text.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') { continue; }

            let cells = parse_rows(trimmed, ',').into_iter().next().unwrap_or_default();
            let [user, salt, digest] = cells.as_slice() else {
                return Err(CredentialError::Malformed { line: i + 1 });
            };
            let user = user.trim();
            let digest = digest.trim().to_ascii_lowercase();
            if user.is_empty() || digest.len() != 64 || !digest.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(CredentialError::Malformed { line: i + 1 });
            }

            entries.insert(s!(user), CredentialEntry { salt: s!(salt.trim()), digest });
        }

        Ok(Self { entries })
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Lowercase hex of sha256(salt || password).
    pub fn digest(salt: &str, password: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(salt.as_bytes());
        hasher.update(password.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// One credentials-file line (newline included) for `user`.
    pub fn entry_line(user: &str, salt: &str, password: &str) -> String {
        let row = vec![s!(user), s!(salt), Self::digest(salt, password)];
        let mut buf = Vec::new();
        let _ = write_row(&mut buf, &row, ',');
        String::from_utf8_lossy(&buf).into_owned()
    }

    pub fn insert(&mut self, user: &str, salt: &str, password: &str) {
        self.entries.insert(
            s!(user),
            CredentialEntry { salt: s!(salt), digest: Self::digest(salt, password) },
        );
    }

    pub fn verify(&self, user: &str, password: &str) -> bool {
        match self.entries.get(user) {
            Some(e) => Self::digest(&e.salt, password) == e.digest,
            None => false,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Unauthenticated,
    Authenticated { user: String },
}

/// Two states, two transitions. No expiry.
#[derive(Clone, Debug, Default)]
pub struct SessionGate {
    table: CredentialTable,
    state: SessionState,
}

impl SessionGate {
    pub fn new(table: CredentialTable) -> Self {
        Self { table, state: SessionState::Unauthenticated }
    }

    pub fn state(&self) -> &SessionState { &self.state }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, SessionState::Authenticated { .. })
    }

    pub fn user(&self) -> Option<&str> {
        match &self.state {
            SessionState::Authenticated { user } => Some(user),
            SessionState::Unauthenticated => None,
        }
    }

    pub fn has_credentials(&self) -> bool { !self.table.is_empty() }

    /// On any mismatch the gate ends up unauthenticated, whatever it was before.
    pub fn login(&mut self, user: &str, password: &str) -> Result<(), LoginError> {
        // Exact match: no trimming, so " ana" is not "ana".
        if user.trim().is_empty() || password.is_empty() {
            self.state = SessionState::Unauthenticated;
            return Err(LoginError::MissingInput);
        }
        if self.table.verify(user, password) {
            logf!("Auth: Login ok for {}", user);
            self.state = SessionState::Authenticated { user: s!(user) };
            Ok(())
        } else {
            logw!("Auth: Login rejected for {}", user);
            self.state = SessionState::Unauthenticated;
            Err(LoginError::InvalidCredentials)
        }
    }

    pub fn logout(&mut self) {
        if let Some(u) = self.user() {
            logf!("Auth: Logout {}", u);
        }
        self.state = SessionState::Unauthenticated;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_line_round_trips_through_parse() {
        let text = join!("# kiosk users\n\n", &CredentialTable::entry_line("ana", "s1", "pw"));
        let t = CredentialTable::parse(&text).unwrap();
        assert_eq!(t.len(), 1);
        assert!(t.verify("ana", "pw"));
        assert!(!t.verify("ana", "PW"));
        assert!(!t.verify("bob", "pw"));
    }

    #[test]
    fn malformed_lines_are_reported_with_number() {
        let err = CredentialTable::parse("# c\nana,salt\n").unwrap_err();
        assert!(matches!(err, CredentialError::Malformed { line: 2 }));

        let err = CredentialTable::parse("ana,salt,nothex").unwrap_err();
        assert!(matches!(err, CredentialError::Malformed { line: 1 }));
    }

    #[test]
    fn digest_is_sha256_hex() {
        // sha256("abc")
        assert_eq!(
            CredentialTable::digest("", "abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
