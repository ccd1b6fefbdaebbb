//! Admin credential verification.
//!
//! The API has a single pre-shared admin credential; a request either
//! carries it or it doesn't. The service stores only a SHA-256 digest of the
//! configured token and compares digests, so verification never branches on
//! the raw token length.

use sha2::{Digest, Sha256};

use crate::error::AppError;

/// Verifies Bearer tokens against the configured admin credential.
pub struct AuthService {
    admin_token_digest: [u8; 32],
}

impl AuthService {
    /// Creates the service from the configured admin token.
    pub fn new(admin_token: &str) -> Self {
        Self {
            admin_token_digest: digest(admin_token),
        }
    }

    /// Checks a presented token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token does not match the
    /// configured credential.
    pub fn verify(&self, token: &str) -> Result<(), AppError> {
        if digest(token) != self.admin_token_digest {
            return Err(AppError::unauthorized("Invalid token provided."));
        }
        Ok(())
    }
}

fn digest(token: &str) -> [u8; 32] {
    Sha256::digest(token.as_bytes()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_accepts_configured_token() {
        let service = AuthService::new("admin-secret");
        assert!(service.verify("admin-secret").is_ok());
    }

    #[test]
    fn test_verify_rejects_wrong_token() {
        let service = AuthService::new("admin-secret");
        let err = service.verify("guess").unwrap_err();
        assert!(matches!(err, AppError::Unauthorized { .. }));
    }

    #[test]
    fn test_verify_rejects_empty_token() {
        let service = AuthService::new("admin-secret");
        assert!(service.verify("").is_err());
    }
}
