//! Operator model and repository
//!
//! Operators are the authenticated users of the system. Passwords are stored
//! as Argon2 hashes and never serialized.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{MemStore, new_id};

/// Operator account
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operator {
    pub id: String,
    pub username: String,
    pub display_name: String,
    #[serde(skip_serializing)]
    pub hash_pass: String,
    pub is_active: bool,
}

impl Operator {
    /// Create an operator with a freshly hashed password
    pub fn with_password(
        username: &str,
        display_name: &str,
        password: &str,
    ) -> Result<Self, argon2::password_hash::Error> {
        Ok(Self {
            id: new_id(),
            username: username.to_string(),
            display_name: display_name.to_string(),
            hash_pass: Self::hash_password(password)?,
            is_active: true,
        })
    }

    /// Verify password using argon2
    pub fn verify_password(&self, password: &str) -> Result<bool, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHash, PasswordVerifier},
        };

        let parsed_hash = PasswordHash::new(&self.hash_pass)?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Hash password using argon2
    pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
        };

        let salt = SaltString::generate(&mut OsRng);
        Ok(Argon2::default()
            .hash_password(password.as_bytes(), &salt)?
            .to_string())
    }
}

/// Repository for operator accounts
#[derive(Clone)]
pub struct OperatorRepository {
    store: Arc<MemStore>,
}

impl OperatorRepository {
    pub fn new(store: Arc<MemStore>) -> Self {
        Self { store }
    }

    /// Insert an operator, replacing any existing account with the same id
    pub fn insert(&self, operator: Operator) {
        self.store.operators.insert(operator.id.clone(), operator);
    }

    /// Look up an operator by username
    pub fn find_by_username(&self, username: &str) -> Option<Operator> {
        self.store
            .operators
            .iter()
            .find(|entry| entry.username == username)
            .map(|entry| entry.clone())
    }

    /// Look up an operator by id
    pub fn find_by_id(&self, id: &str) -> Option<Operator> {
        self.store.operators.get(id).map(|entry| entry.clone())
    }
}
