use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};

/// Hash a password with Argon2id and a fresh random salt.
pub fn hash(password: &str) -> Result<String, String> {
    let salt = SaltString::generate(&mut OsRng);
    let params =
        Params::new(19 * 1024, 2, 1, None).map_err(|e| format!("Invalid argon2 params: {e}"))?;
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| format!("Password hashing failed: {e}"))
}

/// Verify a candidate password against a stored PHC-format hash.
pub fn verify(password: &str, hash: &str) -> Result<bool, String> {
    let parsed = PasswordHash::new(hash).map_err(|e| format!("Stored hash is invalid: {e}"))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_round_trip() {
        let h = hash("abcdef").unwrap();
        assert!(h.starts_with("$argon2id$"));
        assert!(verify("abcdef", &h).unwrap());
        assert!(!verify("abcdeg", &h).unwrap());
    }

    #[test]
    fn hashes_are_salted() {
        let a = hash("abcdef").unwrap();
        let b = hash("abcdef").unwrap();
        assert_ne!(a, b);
    }
}
