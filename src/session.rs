//! Session storage for todo lists
//!
//! A [`SessionStore`] hands out a snapshot of a session's lists and takes the
//! whole collection back after every mutation. There is no partial update.

use crate::todo::TodoLists;
use chrono::{DateTime, TimeDelta, Utc};
use std::collections::HashMap;
use std::fmt;
use std::sync::Mutex;
use thiserror::Error;
use tracing::{debug, info};

/// Default idle lifetime of a session, in days
pub const DEFAULT_MAX_AGE_DAYS: i64 = 31;

/// Errors that can occur while loading or saving a session.
#[derive(Error, Debug)]
pub enum SessionError {
    /// The session payload could not be written.
    #[error("Failed to encode session: {0}")]
    Encode(#[from] toml::ser::Error),

    /// The stored payload could not be read back.
    #[error("Failed to decode session: {0}")]
    Decode(#[from] toml::de::Error),

    /// A previous holder of the session lock panicked.
    #[error("Session store lock poisoned")]
    LockPoisoned,
}

/// Identifier of a session
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SessionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Supplies and persists the todo lists of a session
///
/// Callers must not interleave two load/save cycles on the same session;
/// the store only guarantees each call on its own is atomic.
pub trait SessionStore: Send + Sync {
    /// Current lists of `session`, empty when the session is unknown or expired
    fn load(&self, session: &SessionId) -> Result<TodoLists, SessionError>;

    /// Replace the lists of `session`
    fn save(&self, session: &SessionId, lists: &TodoLists) -> Result<(), SessionError>;
}

struct SessionRecord {
    payload: String,
    touched_at: DateTime<Utc>,
}

/// In-memory session store
///
/// Each session is kept as a TOML payload and decoded again on every load,
/// so callers always work on their own copy. Sessions idle for longer than
/// `max_age` are dropped the next time they are accessed.
pub struct MemorySessionStore {
    sessions: Mutex<HashMap<SessionId, SessionRecord>>,
    max_age: TimeDelta,
}

impl Default for MemorySessionStore {
    fn default() -> Self {
        Self::new(TimeDelta::days(DEFAULT_MAX_AGE_DAYS))
    }
}

impl MemorySessionStore {
    pub fn new(max_age: TimeDelta) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            max_age,
        }
    }

    /// Number of sessions currently held, expired or not
    pub fn len(&self) -> Result<usize, SessionError> {
        let sessions = self.sessions.lock().map_err(|_| SessionError::LockPoisoned)?;
        Ok(sessions.len())
    }

    pub fn is_empty(&self) -> Result<bool, SessionError> {
        Ok(self.len()? == 0)
    }

    /// Drop every session idle since before `now - max_age`
    ///
    /// # Returns
    /// Number of sessions removed
    pub fn purge_expired(&self, now: DateTime<Utc>) -> Result<usize, SessionError> {
        let mut sessions = self.sessions.lock().map_err(|_| SessionError::LockPoisoned)?;
        let before = sessions.len();
        sessions.retain(|_, record| !self.is_expired(record, now));
        let removed = before - sessions.len();
        if removed > 0 {
            info!(removed, "purged expired sessions");
        }
        Ok(removed)
    }

    fn is_expired(&self, record: &SessionRecord, now: DateTime<Utc>) -> bool {
        now - record.touched_at > self.max_age
    }

    pub(crate) fn load_at(
        &self,
        session: &SessionId,
        now: DateTime<Utc>,
    ) -> Result<TodoLists, SessionError> {
        let mut sessions = self.sessions.lock().map_err(|_| SessionError::LockPoisoned)?;

        let expired = sessions
            .get(session)
            .is_some_and(|record| self.is_expired(record, now));
        if expired {
            info!(%session, "session expired");
            sessions.remove(session);
        }

        match sessions.get_mut(session) {
            Some(record) => {
                record.touched_at = now;
                let lists: TodoLists = toml::from_str(&record.payload)?;
                debug!(%session, lists = lists.len(), "loaded session");
                Ok(lists)
            }
            None => {
                debug!(%session, "new session");
                Ok(TodoLists::new())
            }
        }
    }

    pub(crate) fn save_at(
        &self,
        session: &SessionId,
        lists: &TodoLists,
        now: DateTime<Utc>,
    ) -> Result<(), SessionError> {
        let payload = toml::to_string_pretty(lists)?;
        let mut sessions = self.sessions.lock().map_err(|_| SessionError::LockPoisoned)?;
        sessions.insert(
            session.clone(),
            SessionRecord {
                payload,
                touched_at: now,
            },
        );
        debug!(%session, lists = lists.len(), "saved session");
        Ok(())
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self, session: &SessionId) -> Result<TodoLists, SessionError> {
        self.load_at(session, Utc::now())
    }

    fn save(&self, session: &SessionId, lists: &TodoLists) -> Result<(), SessionError> {
        self.save_at(session, lists, Utc::now())
    }
}
