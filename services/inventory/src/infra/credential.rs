use argon2::{
    Argon2,
    password_hash::{
        self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

use crate::domain::repository::CredentialHasher;
use crate::error::InventoryError;

/// Argon2id with a fresh random salt per hash, stored as a PHC string.
#[derive(Clone, Default)]
pub struct Argon2CredentialHasher;

impl CredentialHasher for Argon2CredentialHasher {
    fn hash(&self, raw: &str) -> Result<String, InventoryError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(raw.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| anyhow::anyhow!("hash password: {e}").into())
    }

    fn verify(&self, raw: &str, stored: &str) -> Result<bool, InventoryError> {
        let parsed =
            PasswordHash::new(stored).map_err(|e| anyhow::anyhow!("parse stored hash: {e}"))?;
        match Argon2::default().verify_password(raw.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(e) => Err(anyhow::anyhow!("verify password: {e}").into()),
        }
    }
}
