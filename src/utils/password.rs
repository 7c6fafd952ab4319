//! Argon2id password hashing for user credentials.

use argon2::{
    Argon2,
    password_hash::{PasswordHasher, PasswordVerifier, phc::PasswordHash},
};

use crate::error::{AppError, AppResult};

/// Hashes `senha` with a random salt, returning the PHC string stored in `users.senha`.
pub fn hash_password(senha: &str) -> AppResult<String> {
    Argon2::default()
        .hash_password(senha.as_bytes())
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal {
            source: anyhow::anyhow!("Failed to hash password: {}", e),
        })
}

/// Checks `senha` against a stored PHC string. A malformed stored hash is an
/// internal error, a mismatch is `Ok(false)`.
pub fn verify_password(senha: &str, stored_hash: &str) -> AppResult<bool> {
    let parsed = PasswordHash::new(stored_hash).map_err(|e| AppError::Internal {
        source: anyhow::anyhow!("Stored password hash is malformed: {}", e),
    })?;

    Ok(Argon2::default()
        .verify_password(senha.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_phc_string() {
        let hash = hash_password("senha-forte-123").unwrap();
        assert!(hash.starts_with("$argon2id$"));
    }

    #[test]
    fn test_verify() {
        let hash = hash_password("senha-forte-123").unwrap();

        assert!(verify_password("senha-forte-123", &hash).unwrap());
        assert!(!verify_password("outra-senha", &hash).unwrap());
    }

    #[test]
    fn test_salted() {
        let first = hash_password("senha-forte-123").unwrap();
        let second = hash_password("senha-forte-123").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_malformed_hash_is_internal_error() {
        let result = verify_password("senha", "plaintext");
        assert!(matches!(result, Err(AppError::Internal { .. })));
    }
}
