//! Password hashing: one-way, salted, self-describing encoded strings.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};

use crate::config::HashCost;
use crate::error::{AppError, AppResult};

/// Hash-on-write, compare-on-read primitive.
pub trait PasswordEncoder: Send + Sync {
    /// Encode `password` with a fresh salt.
    fn hash(&self, password: &str) -> AppResult<String>;

    /// `Ok(false)` on mismatch; `Err` when `hash` is not a parseable encoded string.
    fn verify(&self, password: &str, hash: &str) -> AppResult<bool>;
}

/// Argon2id encoder producing PHC strings (`$argon2id$v=19$m=..,t=..,p=..$salt$digest`).
#[derive(Clone, Default)]
pub struct Argon2Encoder {
    argon2: Argon2<'static>,
}

impl Argon2Encoder {
    pub fn new(cost: HashCost) -> AppResult<Self> {
        let defaults = Params::default();
        let params = Params::new(
            cost.memory_kib.unwrap_or(defaults.m_cost()),
            cost.iterations.unwrap_or(defaults.t_cost()),
            cost.parallelism.unwrap_or(defaults.p_cost()),
            None,
        )
        .map_err(|e| AppError::Config(format!("argon2 params: {}", e)))?;
        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }
}

impl PasswordEncoder for Argon2Encoder {
    fn hash(&self, password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Hash(e.to_string()))?
            .to_string();
        Ok(hash)
    }

    fn verify(&self, password: &str, hash: &str) -> AppResult<bool> {
        let parsed =
            PasswordHash::new(hash).map_err(|e| AppError::Hash(format!("parse hash: {}", e)))?;
        Ok(self
            .argon2
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoder() -> Argon2Encoder {
        Argon2Encoder::new(HashCost {
            memory_kib: Some(1024),
            iterations: Some(1),
            parallelism: Some(1),
        })
        .unwrap()
    }

    #[test]
    fn hash_and_verify_password() {
        let enc = encoder();
        let hash = enc.hash("mypassword").unwrap();
        assert_ne!(hash, "mypassword");
        assert!(hash.starts_with("$argon2id$"));
        assert!(enc.verify("mypassword", &hash).unwrap());
        assert!(!enc.verify("wrong", &hash).unwrap());
    }

    #[test]
    fn same_password_gets_distinct_salts() {
        let enc = encoder();
        let a = enc.hash("secret1").unwrap();
        let b = enc.hash("secret1").unwrap();
        assert_ne!(a, b);
        assert!(enc.verify("secret1", &a).unwrap());
        assert!(enc.verify("secret1", &b).unwrap());
    }

    #[test]
    fn empty_password_is_hashed() {
        let enc = encoder();
        let hash = enc.hash("").unwrap();
        assert!(!hash.is_empty());
        assert!(enc.verify("", &hash).unwrap());
        assert!(!enc.verify(" ", &hash).unwrap());
    }

    #[test]
    fn verify_errors_on_malformed_hash() {
        let err = encoder().verify("anything", "not-a-valid-hash").unwrap_err();
        assert!(matches!(err, AppError::Hash(_)));
    }

    #[test]
    fn cost_parameters_are_encoded() {
        let hash = encoder().hash("pw").unwrap();
        assert!(hash.contains("m=1024,t=1,p=1"));
    }

    #[test]
    fn invalid_cost_is_a_config_error() {
        let err = Argon2Encoder::new(HashCost {
            memory_kib: Some(1),
            iterations: Some(1),
            parallelism: Some(1),
        })
        .err()
        .unwrap();
        assert!(matches!(err, AppError::Config(_)));
    }
}
