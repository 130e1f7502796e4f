//! Argon2id password hashing and verification.
//!
//! All password hashes use the Argon2id variant with a cryptographically
//! random salt generated via [`OsRng`]. The PHC string format is used for
//! storage so that algorithm parameters and salt are embedded in the hash
//! itself: the work factor can be retuned without invalidating stored
//! hashes, and verification never needs the original configuration.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};

/// Work-factor configuration for the Argon2id hasher.
#[derive(Debug, Clone)]
pub struct HashConfig {
    params: Params,
}

impl HashConfig {
    /// Load hashing configuration from environment variables.
    ///
    /// | Env Var             | Required | Default                 |
    /// |---------------------|----------|-------------------------|
    /// | `ARGON2_MEMORY_KIB` | no       | `19456` (19 MiB)        |
    /// | `ARGON2_ITERATIONS` | no       | `2`                     |
    ///
    /// # Panics
    ///
    /// Panics if either variable is not a valid integer or the combination
    /// is rejected by the Argon2 parameter rules.
    pub fn from_env() -> Self {
        let memory_kib: u32 = std::env::var("ARGON2_MEMORY_KIB")
            .unwrap_or_else(|_| Params::DEFAULT_M_COST.to_string())
            .parse()
            .expect("ARGON2_MEMORY_KIB must be a valid u32");

        let iterations: u32 = std::env::var("ARGON2_ITERATIONS")
            .unwrap_or_else(|_| Params::DEFAULT_T_COST.to_string())
            .parse()
            .expect("ARGON2_ITERATIONS must be a valid u32");

        Self::new(memory_kib, iterations)
    }

    /// Build a configuration from explicit work-factor values.
    ///
    /// # Panics
    ///
    /// Panics if the values are outside the ranges Argon2 accepts.
    pub fn new(memory_kib: u32, iterations: u32) -> Self {
        let params = Params::new(memory_kib, iterations, Params::DEFAULT_P_COST, None)
            .expect("Argon2 work-factor parameters out of range");
        Self { params }
    }

    fn hasher(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

impl Default for HashConfig {
    fn default() -> Self {
        Self {
            params: Params::default(),
        }
    }
}

/// Hash a plaintext password using Argon2id with a random salt.
///
/// Returns the PHC-formatted hash string (includes algorithm, params, salt,
/// and hash).
pub fn hash_password(
    password: &str,
    config: &HashConfig,
) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = config.hasher().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored PHC-formatted Argon2id hash.
///
/// Returns `Ok(true)` if the password matches, `Ok(false)` if it does not.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed_hash = PasswordHash::new(hash)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e),
    }
}
