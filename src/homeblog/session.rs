//! Trivial login sessions.
//!
//! A session is an opaque id mapped to the [`User`] who logged in. The map is owned
//! by a [`SessionStore`] value handed to whatever serves requests; there is no
//! process-wide state. Sessions live for as long as the store does.

use crate::clock::{IdSource, RandomIds};
use crate::error::{BlogError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

const MIN_USERNAME_LEN: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub username: String,
}

/// Returns every problem with `user`, in field order. Empty means valid.
pub fn validate_user(user: &User) -> Vec<String> {
    let mut errors = Vec::new();
    if user.firstname.trim().is_empty() {
        errors.push("First name is required".to_string());
    }
    if user.lastname.trim().is_empty() {
        errors.push("Last name is required".to_string());
    }
    if !user.email.contains('@') {
        errors.push("Valid email is required".to_string());
    }
    if user.username.trim().is_empty() || user.username.chars().count() < MIN_USERNAME_LEN {
        errors.push("Username must be at least 3 characters".to_string());
    }
    errors
}

pub struct SessionStore<I: IdSource = RandomIds> {
    sessions: HashMap<String, User>,
    ids: I,
}

impl Default for SessionStore<RandomIds> {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore<RandomIds> {
    pub fn new() -> Self {
        Self::with_ids(RandomIds)
    }
}

impl<I: IdSource> SessionStore<I> {
    pub fn with_ids(ids: I) -> Self {
        Self {
            sessions: HashMap::new(),
            ids,
        }
    }

    pub fn create_session(&mut self, user: User) -> String {
        let id = self.ids.next_id();
        debug!(username = %user.username, "created session");
        self.sessions.insert(id.clone(), user);
        id
    }

    pub fn get_session(&self, id: &str) -> Option<&User> {
        self.sessions.get(id)
    }

    /// Validates `user` and opens a session for it.
    pub fn login(&mut self, user: User) -> Result<String> {
        let errors = validate_user(&user);
        if !errors.is_empty() {
            return Err(BlogError::Validation(errors));
        }
        Ok(self.create_session(user))
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
