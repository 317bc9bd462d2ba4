// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::{anyhow, Result};
use chrono::Duration;
use parking_lot::Mutex;

use deltazap_xmpp::ServerEndpoint;

use crate::domain::session::models::{SessionData, SessionStatus};
use crate::domain::shared::models::UserId;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_endpoint: ServerEndpoint,
    /// The number of messages per chat that are loaded from the local history on connect.
    pub history_limit: u32,
    pub max_notes_per_user: u32,
    /// Accounts that may manage support materials and internal links.
    pub admin_addresses: Vec<UserId>,
    /// Status posts older than this are not shown to contacts.
    pub status_window: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_endpoint: ServerEndpoint::new("localhost", 5222),
            history_limit: 50,
            max_notes_per_user: 200,
            admin_addresses: vec![],
            status_window: Duration::hours(24),
        }
    }
}

pub struct AppContext {
    pub config: AppConfig,
    /// The single mutable state of the session. Never hold the lock across an `.await`.
    pub session: Mutex<SessionData>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            session: Default::default(),
        }
    }
}

impl AppContext {
    /// Returns the account of the current session if it is connected.
    pub fn connected_account(&self) -> Result<UserId> {
        let session = self.session.lock();
        match (&session.status, &session.account) {
            (SessionStatus::Connected, Some(account)) => Ok(account.clone()),
            _ => Err(anyhow!(
                "Failed to read the user's address since the client is not connected."
            )),
        }
    }

    pub fn account(&self) -> Option<UserId> {
        self.session.lock().account.clone()
    }

    pub fn status(&self) -> SessionStatus {
        self.session.lock().status.clone()
    }

    pub fn is_admin(&self) -> bool {
        self.session.lock().is_admin
    }

    pub fn is_admin_address(&self, user_id: &UserId) -> bool {
        self.config.admin_addresses.contains(user_id)
    }

    pub fn is_current_generation(&self, generation: u64) -> bool {
        self.session.lock().generation == generation
    }
}
