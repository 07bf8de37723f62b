//! Credential store — a capability interface over whatever holds user
//! credentials. The service never sees plaintext at rest: secrets are
//! SHA-256 hashed before storage or comparison.
//!
//! `AppState` holds an `Arc<dyn CredentialStore>`, so the in-memory
//! implementation can be swapped for an external backend without touching
//! the handlers.

pub mod handlers;

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("username '{0}' already exists")]
    UsernameTaken(String),
}

/// The credential capability: verify an (id, secret) pair, or register a
/// new one. Implementations must be safe to share across requests.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn verify(&self, username: &str, password: &str) -> bool;
    async fn register(&self, username: &str, password: &str) -> Result<(), AuthError>;
}

fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// In-memory credential store keyed by username, holding SHA-256 hex
/// digests. Suitable for demos and tests; production deployments should
/// implement `CredentialStore` over a real backend.
#[derive(Default)]
pub struct InMemoryCredentialStore {
    users: RwLock<HashMap<String, String>>,
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn verify(&self, username: &str, password: &str) -> bool {
        let users = self.users.read().expect("credential store lock poisoned");
        users
            .get(username)
            .is_some_and(|stored| *stored == hash_password(password))
    }

    async fn register(&self, username: &str, password: &str) -> Result<(), AuthError> {
        let mut users = self.users.write().expect("credential store lock poisoned");
        if users.contains_key(username) {
            return Err(AuthError::UsernameTaken(username.to_string()));
        }
        users.insert(username.to_string(), hash_password(password));
        Ok(())
    }
}
