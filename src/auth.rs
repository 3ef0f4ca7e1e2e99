//! Password helpers for the `users` table.
use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use rand_core::OsRng;

/// Argon2 PHC string for `plain` with a fresh random salt. This is what the
/// `users.password` column stores.
pub fn hash_password(plain: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| anyhow::anyhow!("password hashing failed: {e}"))
}

/// `Ok(false)` on a wrong password; `Err` only when the stored hash is unreadable.
pub fn verify_password(stored: &str, plain: &str) -> anyhow::Result<bool> {
    let parsed = PasswordHash::new(stored)
        .map_err(|e| anyhow::anyhow!("stored password hash is malformed: {e}"))?;
    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify() {
        let hash = hash_password("123456").unwrap();
        assert_ne!(hash, "123456");
        assert!(verify_password(&hash, "123456").unwrap());
        assert!(!verify_password(&hash, "654321").unwrap());
    }

    #[test]
    fn salts_differ_between_hashes() {
        let a = hash_password("123456").unwrap();
        let b = hash_password("123456").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn garbage_hash_is_an_error() {
        assert!(verify_password("not-a-phc-string", "123456").is_err());
    }
}
