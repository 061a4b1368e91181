//! Generate and verify bcrypt password hashes for an `admin` user.
//!
//! The produced hash is intended to be copied into the `ADMIN_PASSWORD_HASH`
//! environment variable (or equivalent secret store) of the application that
//! performs the authentication, which verifies candidate passwords against it
//! with [`verify_password()`].

use secrecy::{ExposeSecret, SecretString};

pub mod options;

/// Minimum cost factor accepted by the bcrypt algorithm.
pub const MIN_COST: u32 = 4;
/// Maximum cost factor accepted by the bcrypt algorithm.
pub const MAX_COST: u32 = 31;

#[derive(Debug, thiserror::Error)]
pub enum HashPasswordError {
    #[error("Cost factor {0} is outside the valid bcrypt range {MIN_COST}..={MAX_COST}")]
    InvalidCost(u32),
    #[error("Unable to hash password")]
    Hash(#[source] bcrypt::BcryptError),
    #[error("Unable to verify password against hash")]
    Verify(#[source] bcrypt::BcryptError),
}

/// Hash `password` with a freshly generated random salt at the given `cost`.
///
/// Returns the 60 character bcrypt string (`$2b$<cost>$<salt><hash>`), which
/// embeds the algorithm version, cost and salt alongside the hash itself.
pub fn hash_password(password: &SecretString, cost: u32) -> Result<String, HashPasswordError> {
    if !(MIN_COST..=MAX_COST).contains(&cost) {
        return Err(HashPasswordError::InvalidCost(cost));
    }
    bcrypt::hash(password.expose_secret(), cost).map_err(HashPasswordError::Hash)
}

/// Check whether `password` matches a previously generated bcrypt `hash`.
/// Returns `true` if the password matches, `false` otherwise.
pub fn verify_password(password: &SecretString, hash: &str) -> Result<bool, HashPasswordError> {
    bcrypt::verify(password.expose_secret(), hash).map_err(HashPasswordError::Verify)
}

#[cfg(test)]
mod test {
    use secrecy::SecretString;

    use super::{hash_password, verify_password, HashPasswordError, MIN_COST};

    fn secret(password: &str) -> SecretString {
        SecretString::new(password.to_string())
    }

    #[test]
    fn fresh_salt_produces_distinct_hashes() {
        let password = secret("correct horse battery staple");
        // MIN_COST keeps the test fast, the salt behaviour is identical at
        // every cost.
        let first = hash_password(&password, MIN_COST).unwrap();
        let second = hash_password(&password, MIN_COST).unwrap();
        assert_ne!(first, second);
        assert!(verify_password(&password, &first).unwrap());
        assert!(verify_password(&password, &second).unwrap());
    }

    #[test]
    fn digest_has_expected_format_at_default_cost() {
        let hash = hash_password(&secret("correct horse battery staple"), bcrypt::DEFAULT_COST)
            .unwrap();
        assert!(hash.starts_with("$2b$12$"), "unexpected prefix: {hash}");
        assert_eq!(hash.len(), 60);
    }

    #[test]
    fn verify_rejects_mutated_password() {
        let password = secret("correct horse battery staple");
        let hash = hash_password(&password, MIN_COST).unwrap();
        let mutated = secret("Correct horse battery staple");
        assert!(!verify_password(&mutated, &hash).unwrap());
    }

    #[test]
    fn empty_password_still_hashes() {
        let password = secret("");
        let hash = hash_password(&password, MIN_COST).unwrap();
        assert_eq!(hash.len(), 60);
        assert!(verify_password(&password, &hash).unwrap());
    }

    #[test]
    fn cost_outside_valid_range_is_rejected() {
        let password = secret("password");
        assert!(matches!(
            hash_password(&password, 3),
            Err(HashPasswordError::InvalidCost(3))
        ));
        assert!(matches!(
            hash_password(&password, 32),
            Err(HashPasswordError::InvalidCost(32))
        ));
    }
}
