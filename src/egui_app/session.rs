//! Session context
//!
//! The "is logged in" flag persisted under `isLoggedIn`. A `Session` is
//! created once at launch with [`Session::init`], cloned into each screen
//! controller, and ended with [`Session::invalidate`] on logout. The cached
//! flag lets the UI thread check access without touching storage.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::egui_app::local_db::{LocalDatabase, Result};

/// Storage key of the session flag
pub const SESSION_KEY: &str = "isLoggedIn";

const LOGGED_IN_VALUE: &str = "true";

#[derive(Debug, Clone)]
pub struct Session {
    db: LocalDatabase,
    logged_in: Arc<AtomicBool>,
}

impl Session {
    /// Read the persisted flag and build the session context
    pub async fn init(db: LocalDatabase) -> Result<Self> {
        let session = Self {
            db,
            logged_in: Arc::new(AtomicBool::new(false)),
        };
        let logged_in = session.get_logged_in().await?;
        tracing::info!(logged_in, "Session initialized");
        Ok(session)
    }

    /// Re-read the flag from storage, refreshing the cached value
    pub async fn get_logged_in(&self) -> Result<bool> {
        let value = self.db.get_item(SESSION_KEY).await?;
        let logged_in = value.as_deref() == Some(LOGGED_IN_VALUE);
        self.logged_in.store(logged_in, Ordering::SeqCst);
        Ok(logged_in)
    }

    /// Persist the flag after a successful login
    pub async fn set_logged_in(&self) -> Result<()> {
        self.db.set_item(SESSION_KEY, LOGGED_IN_VALUE).await?;
        self.logged_in.store(true, Ordering::SeqCst);
        Ok(())
    }

    /// Remove the persisted flag
    pub async fn clear_logged_in(&self) -> Result<()> {
        self.db.remove_item(SESSION_KEY).await?;
        self.logged_in.store(false, Ordering::SeqCst);
        Ok(())
    }

    /// End the session at logout
    pub async fn invalidate(&self) -> Result<()> {
        self.clear_logged_in().await?;
        tracing::info!("Session invalidated");
        Ok(())
    }

    /// Cached flag, as of the last read or write through any clone
    pub fn is_logged_in(&self) -> bool {
        self.logged_in.load(Ordering::SeqCst)
    }
}
