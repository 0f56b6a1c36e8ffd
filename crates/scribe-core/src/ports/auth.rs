//! Admin authentication port.

/// Verifies a presented admin bearer token against the configured
/// secret.
///
/// Implementations must compare in constant time; an empty presented
/// token or an unconfigured secret never verifies.
pub trait AdminTokenVerifier: Send + Sync {
    fn verify(&self, token: &str) -> bool;
}
