//! In-memory user record store.
//!
//! # Responsibilities
//! - Hold the ordered sequence of user records for the process lifetime
//! - Linear lookup, in-place replacement, and removal by id
//! - Serialize all access behind a single lock
//!
//! # Design Decisions
//! - One `Mutex` guards the whole sequence. The source material had no
//!   synchronization at all; handlers run concurrently here, so every
//!   operation takes the lock for its full duration.
//! - First match wins. Id uniqueness is not enforced on append, so a
//!   duplicate id always resolves to the earliest inserted record.
//! - O(n) scans, no index. Insertion order is the only iteration order.

use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use thiserror::Error;

/// A user record.
///
/// Missing fields in a JSON body deserialize to their zero values rather
/// than failing; callers that want stricter input must validate upstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub email: String,
}

/// Error type for store operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No record with the requested id exists.
    ///
    /// The display string is the wire-visible error envelope message.
    #[error("User Not Found")]
    NotFound,
}

/// Ordered, process-wide collection of user records.
///
/// Instantiated once at startup and shared with handlers via `Arc`, rather
/// than living in a global.
#[derive(Debug, Default)]
pub struct UserStore {
    users: Mutex<Vec<User>>,
}

impl UserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to the end of the sequence.
    ///
    /// No uniqueness or validation check is performed.
    pub fn append(&self, user: User) {
        self.users.lock().unwrap().push(user);
    }

    /// Find the first record with the given id.
    pub fn find_by_id(&self, id: u64) -> Result<User, StoreError> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    /// Overwrite the first record with the given id.
    ///
    /// The whole slot is replaced with `user`, including any zero-valued
    /// fields the caller's body omitted. The id inside `user` is written
    /// as-is and may differ from the id that was matched.
    pub fn replace_by_id(&self, id: u64, user: User) -> Result<(), StoreError> {
        let mut users = self.users.lock().unwrap();
        match users.iter_mut().find(|u| u.id == id) {
            Some(slot) => {
                *slot = user;
                Ok(())
            }
            None => Err(StoreError::NotFound),
        }
    }

    /// Remove the first record with the given id.
    ///
    /// Later elements shift forward; relative order is preserved.
    pub fn remove_by_id(&self, id: u64) -> Result<(), StoreError> {
        let mut users = self.users.lock().unwrap();
        match users.iter().position(|u| u.id == id) {
            Some(index) => {
                users.remove(index);
                Ok(())
            }
            None => Err(StoreError::NotFound),
        }
    }

    /// Snapshot of all records in insertion order.
    pub fn all(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    /// True when the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
