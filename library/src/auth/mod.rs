//! Mock credential store over the key-value repository.
//!
//! This is demo authentication: passwords are stored in plain text and
//! nothing is validated server-side. It exists so the rest of the product
//! has a real session/identity boundary to talk to.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::QcError;
use crate::storage::{Storage, USERS_KEY, USER_KEY};

/// A registered account as stored in the credential list.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct StoredUser {
    pub id: String,
    pub email: String,
    pub password: String,
    pub name: String,
}

fn default_plan() -> String {
    "free".to_string()
}

/// The current session's identity document.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub credits: u32,
    #[serde(default = "default_plan")]
    pub plan: String,
}

impl User {
    fn from_stored(stored: &StoredUser) -> Self {
        Self {
            id: stored.id.clone(),
            email: stored.email.clone(),
            name: stored.name.clone(),
            credits: 0,
            plan: default_plan(),
        }
    }
}

pub struct AuthService {
    storage: Arc<dyn Storage>,
}

impl AuthService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Register a new account and open a session for it.
    pub fn register(&self, email: &str, password: &str, name: &str) -> Result<User, QcError> {
        let mut users = self.load_users()?;
        if users.iter().any(|u| u.email == email) {
            return Err(QcError::DuplicateAccount);
        }

        let stored = StoredUser {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
            password: password.to_string(),
            name: name.to_string(),
        };
        let user = User::from_stored(&stored);
        users.push(stored);
        self.storage.set(USERS_KEY, &serde_json::to_string(&users)?)?;
        self.open_session(&user)?;
        log::info!("Registered account for {}", email);
        Ok(user)
    }

    /// Log in against the stored credentials. Unknown email and wrong
    /// password report the same `AuthMismatch`, so the error does not leak
    /// which accounts exist.
    pub fn login(&self, email: &str, password: &str) -> Result<User, QcError> {
        let users = self.load_users()?;
        let found = users
            .iter()
            .find(|u| u.email == email && u.password == password)
            .ok_or(QcError::AuthMismatch)?;

        let user = User::from_stored(found);
        self.open_session(&user)?;
        log::info!("User {} logged in", email);
        Ok(user)
    }

    pub fn logout(&self) -> Result<(), QcError> {
        self.storage.remove(USER_KEY)
    }

    /// The session's identity, if a valid one is stored. A corrupt session
    /// document is discarded rather than surfaced.
    pub fn current_user(&self) -> Result<Option<User>, QcError> {
        let Some(json) = self.storage.get(USER_KEY)? else {
            return Ok(None);
        };
        match serde_json::from_str(&json) {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                log::warn!("Discarding unreadable session document: {}", e);
                self.storage.remove(USER_KEY)?;
                Ok(None)
            }
        }
    }

    /// Update the session's profile fields. Only the session document is
    /// rewritten; the credential list keeps its original name.
    pub fn update_profile(&self, name: &str, email: &str) -> Result<User, QcError> {
        let mut user = self
            .current_user()?
            .ok_or_else(|| QcError::Validation("No active session".to_string()))?;
        user.name = name.to_string();
        user.email = email.to_string();
        self.open_session(&user)?;
        Ok(user)
    }

    fn open_session(&self, user: &User) -> Result<(), QcError> {
        self.storage.set(USER_KEY, &serde_json::to_string(user)?)
    }

    fn load_users(&self) -> Result<Vec<StoredUser>, QcError> {
        match self.storage.get(USERS_KEY)? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }
}
