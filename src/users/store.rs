//! In-memory user store.
//!
//! # Responsibilities
//! - Hold every user record in insertion order
//! - Enforce `(firstName, lastName)` uniqueness on create
//! - Assign ids on create and preserve them on update
//!
//! # Design Decisions
//! - Single `Mutex` over the whole collection; no lock held across `.await`
//! - Lookups are linear scans (the collection is small)
//! - Lookups by id return the first match, which matters only when
//!   sequential ids have collided after a delete

use std::sync::{Mutex, MutexGuard};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::users::model::{NewUser, User};

/// How the store picks the id of a newly created record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// `current size + 1`. Can hand out an id that is still in use after a delete.
    #[default]
    Sequential,
    /// Counter that only moves forward; an id is never handed out twice.
    Monotonic,
}

/// Errors returned by store mutations and lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("User not found")]
    NotFound,

    #[error("User with the same first and last name already exists")]
    Duplicate,
}

#[derive(Debug, Default)]
struct Inner {
    users: Vec<User>,
    next_id: u64,
}

/// Thread-safe, process-lifetime collection of users.
#[derive(Debug)]
pub struct UserStore {
    inner: Mutex<Inner>,
    strategy: IdStrategy,
}

impl UserStore {
    /// Create an empty store.
    pub fn new(strategy: IdStrategy) -> Self {
        Self {
            inner: Mutex::new(Inner {
                users: Vec::new(),
                next_id: 1,
            }),
            strategy,
        }
    }

    /// Create a store holding the fixture record.
    pub fn seeded(strategy: IdStrategy) -> Self {
        let store = Self::new(strategy);
        store.insert_raw(User::fixture());
        store
    }

    /// Insert a record with a caller-chosen id, bypassing validation.
    fn insert_raw(&self, user: User) {
        let mut inner = self.lock();
        if let Ok(id) = user.id.parse::<u64>() {
            inner.next_id = inner.next_id.max(id + 1);
        }
        inner.users.push(user);
    }

    /// The id assignment strategy in use.
    pub fn strategy(&self) -> IdStrategy {
        self.strategy
    }

    /// All records in insertion order.
    pub fn list_all(&self) -> Vec<User> {
        self.lock().users.clone()
    }

    pub fn len(&self) -> usize {
        self.lock().users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().users.is_empty()
    }

    /// Look up a record by id.
    pub fn get_by_id(&self, id: &str) -> Result<User, StoreError> {
        self.lock()
            .users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    /// Append a new record, rejecting duplicate `(firstName, lastName)` pairs.
    pub fn create(&self, new_user: NewUser) -> Result<User, StoreError> {
        let mut inner = self.lock();

        let duplicate = inner
            .users
            .iter()
            .any(|u| u.first_name == new_user.first_name && u.last_name == new_user.last_name);
        if duplicate {
            return Err(StoreError::Duplicate);
        }

        let id = match self.strategy {
            IdStrategy::Sequential => (inner.users.len() + 1) as u64,
            IdStrategy::Monotonic => inner.next_id,
        };
        inner.next_id = inner.next_id.max(id + 1);

        let user = User::from_new(id.to_string(), new_user);
        inner.users.push(user.clone());
        Ok(user)
    }

    /// Replace every field of an existing record except its id.
    pub fn update(&self, id: &str, new_user: NewUser) -> Result<User, StoreError> {
        let mut inner = self.lock();
        let slot = inner
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(StoreError::NotFound)?;

        *slot = User::from_new(id.to_string(), new_user);
        Ok(slot.clone())
    }

    /// Remove a record.
    pub fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut inner = self.lock();
        let index = inner
            .users
            .iter()
            .position(|u| u.id == id)
            .ok_or(StoreError::NotFound)?;

        inner.users.remove(index);
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // Every mutation is a single push/assign/remove, so a panicking
        // holder cannot leave the collection half-written.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::seeded(IdStrategy::default())
    }
}
