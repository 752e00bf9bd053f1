//! Admin password gate.
//!
//! The admin section is protected by a single configured password. The gate
//! stores a SHA-256 digest of the secret and compares digests at login, so
//! the comparison does not short-circuit on the first differing byte of the
//! submitted string and the plaintext never leaves the config struct.

use sha2::{Digest, Sha256};

/// Verifies submitted passwords against the configured admin secret.
#[derive(Clone)]
pub struct PasswordGate {
    digest: [u8; 32],
}

impl PasswordGate {
    /// Build a gate for the given secret.
    #[must_use]
    pub fn new(secret: &str) -> Self {
        Self {
            digest: Sha256::digest(secret.as_bytes()).into(),
        }
    }

    /// Check a submitted password.
    #[must_use]
    pub fn verify(&self, candidate: &str) -> bool {
        let candidate: [u8; 32] = Sha256::digest(candidate.as_bytes()).into();
        candidate == self.digest
    }
}

impl std::fmt::Debug for PasswordGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print the digest
        f.debug_struct("PasswordGate").finish_non_exhaustive()
    }
}
