use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{Duration, Utc};

use crate::error::{Error, Result};
use crate::models::session::Session;

/// Token-keyed session storage. Any key-value backend can sit behind it.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn get(&self, token: &str) -> Result<Option<Session>>;
    async fn put(&self, token: &str, session: Session) -> Result<()>;
    async fn delete(&self, token: &str) -> Result<()>;
}

pub struct InMemorySessionStore {
    ttl: Duration,
    sessions: RwLock<HashMap<String, Session>>,
}

impl InMemorySessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    fn is_expired(&self, session: &Session) -> bool {
        session.created_at + self.ttl <= Utc::now()
    }
}

fn poisoned<T>(_: T) -> Error {
    Error::Internal("session store lock poisoned".to_string())
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, token: &str) -> Result<Option<Session>> {
        let expired = {
            let sessions = self.sessions.read().map_err(poisoned)?;
            match sessions.get(token) {
                None => return Ok(None),
                Some(s) if !self.is_expired(s) => return Ok(Some(s.clone())),
                Some(_) => true,
            }
        };
        if expired {
            self.sessions.write().map_err(poisoned)?.remove(token);
        }
        Ok(None)
    }

    /// Also drops every expired entry so abandoned tokens do not pile up.
    async fn put(&self, token: &str, session: Session) -> Result<()> {
        let mut sessions = self.sessions.write().map_err(poisoned)?;
        sessions.retain(|_, s| !self.is_expired(s));
        sessions.insert(token.to_string(), session);
        Ok(())
    }

    async fn delete(&self, token: &str) -> Result<()> {
        self.sessions.write().map_err(poisoned)?.remove(token);
        Ok(())
    }
}
