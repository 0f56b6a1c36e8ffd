//! Static admin-token verifier.

use sha2::{Digest, Sha256};

use scribe_core::ports::AdminTokenVerifier;

/// Compares presented bearer tokens against one configured secret.
///
/// Both sides are hashed and the digests compared without early exit,
/// so verification time does not depend on how much of the token
/// matches.
pub struct StaticTokenVerifier {
    secret_digest: Option<[u8; 32]>,
}

impl StaticTokenVerifier {
    /// `None` (or an empty secret) produces a verifier that rejects
    /// everything, keeping the admin surface locked until a token is
    /// configured.
    pub fn new(secret: Option<&str>) -> Self {
        let secret_digest = secret
            .filter(|secret| !secret.is_empty())
            .map(|secret| Sha256::digest(secret.as_bytes()).into());
        Self { secret_digest }
    }
}

impl AdminTokenVerifier for StaticTokenVerifier {
    fn verify(&self, token: &str) -> bool {
        let Some(expected) = &self.secret_digest else {
            return false;
        };
        if token.is_empty() {
            return false;
        }

        let presented: [u8; 32] = Sha256::digest(token.as_bytes()).into();
        let mut diff = 0u8;
        for (a, b) in expected.iter().zip(presented.iter()) {
            diff |= a ^ b;
        }
        diff == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_the_configured_secret() {
        let verifier = StaticTokenVerifier::new(Some("s3cret"));
        assert!(verifier.verify("s3cret"));
    }

    #[test]
    fn rejects_a_wrong_or_empty_token() {
        let verifier = StaticTokenVerifier::new(Some("s3cret"));
        assert!(!verifier.verify("s3cret "));
        assert!(!verifier.verify("nope"));
        assert!(!verifier.verify(""));
    }

    #[test]
    fn rejects_everything_when_unconfigured() {
        let verifier = StaticTokenVerifier::new(None);
        assert!(!verifier.verify("anything"));

        let verifier = StaticTokenVerifier::new(Some(""));
        assert!(!verifier.verify(""));
    }
}
