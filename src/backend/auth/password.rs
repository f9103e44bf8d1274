/**
 * Password Hashing
 *
 * One-way salted hashing with bcrypt. Each hash embeds its own random salt
 * and cost, so hashing the same password twice gives two different strings
 * and verification needs nothing but the stored value.
 *
 * # Security
 *
 * - Verification compares digests in constant time (bcrypt crate)
 * - A stored value that is not a bcrypt hash never verifies
 * - Neither plaintexts nor hashes are logged
 */

use crate::backend::error::AccountError;

/// One-way password hashing capability
pub trait PasswordHasher: Send + Sync {
    /// Hash `plaintext` with a fresh random salt
    fn hash(&self, plaintext: &str) -> Result<String, AccountError>;

    /// Check `plaintext` against a value produced by [`PasswordHasher::hash`]
    ///
    /// Fails closed: malformed `stored` values return `false`.
    fn verify(&self, plaintext: &str, stored: &str) -> bool;
}

/// bcrypt-backed [`PasswordHasher`]
#[derive(Debug, Clone, Copy)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    /// Create a hasher with the given work factor (bcrypt accepts 4-31)
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordHasher for BcryptHasher {
    fn hash(&self, plaintext: &str) -> Result<String, AccountError> {
        bcrypt::hash(plaintext, self.cost).map_err(|e| {
            tracing::error!("Failed to hash password: {:?}", e);
            AccountError::internal("password hashing failed")
        })
    }

    fn verify(&self, plaintext: &str, stored: &str) -> bool {
        match bcrypt::verify(plaintext, stored) {
            Ok(matched) => matched,
            Err(e) => {
                tracing::debug!("Stored password hash is not usable: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hasher() -> BcryptHasher {
        BcryptHasher::new(4)
    }

    #[test]
    fn test_hash_and_verify() {
        let hash = hasher().hash("Passw0rd").unwrap();
        assert_ne!(hash, "Passw0rd");
        assert!(hasher().verify("Passw0rd", &hash));
        assert!(!hasher().verify("passw0rd", &hash));
    }

    #[test]
    fn test_hashes_are_salted() {
        let first = hasher().hash("Passw0rd").unwrap();
        let second = hasher().hash("Passw0rd").unwrap();
        assert_ne!(first, second);
        assert!(hasher().verify("Passw0rd", &first));
        assert!(hasher().verify("Passw0rd", &second));
    }

    #[test]
    fn test_malformed_hash_fails_closed() {
        assert!(!hasher().verify("Passw0rd", ""));
        assert!(!hasher().verify("Passw0rd", "Passw0rd"));
        assert!(!hasher().verify("Passw0rd", "$argon2id$v=19$m=65536,t=3,p=4$c2FsdA$aGFzaA"));
    }

    #[test]
    fn test_invalid_cost_is_an_error() {
        assert!(BcryptHasher::new(1).hash("Passw0rd").is_err());
    }

    #[test]
    fn test_default_cost() {
        let hash = BcryptHasher::default().hash("Passw0rd").unwrap();
        assert!(hash.starts_with(&format!("$2b${:02}$", bcrypt::DEFAULT_COST)));
    }
}
