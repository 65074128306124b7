//! Session holder: the signed-in identity and the theme preference.
//!
//! Both live in memory inside [`crate::state::AppState`]; this module mirrors
//! them to the local store and decodes login credentials.

pub mod credential;

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::constants::{STORAGE_KEY_DARK_MODE, STORAGE_KEY_SESSION};
use crate::logger::Logger;
use crate::storage::KeyValueStore;

pub use credential::{decode_identity, CredentialError};

/// The signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(rename = "name")]
    pub display_name: String,
    pub email: String,
}

/// What was found in the store at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestoredState {
    pub session: Option<Session>,
    pub dark_mode: bool,
}

/// Reads and writes the persisted session record and theme flag.
#[derive(Clone)]
pub struct SessionHolder {
    store: Arc<dyn KeyValueStore>,
    logger: Logger,
}

impl SessionHolder {
    pub fn new(store: Arc<dyn KeyValueStore>, logger: Logger) -> Self {
        Self { store, logger }
    }

    /// Load the persisted session and theme.
    ///
    /// Missing keys are a normal first run. Unreadable or corrupt entries are
    /// logged and treated as missing.
    pub async fn restore_session(&self) -> RestoredState {
        let session = match self.store.get(STORAGE_KEY_SESSION).await {
            Ok(Some(raw)) => match serde_json::from_str::<Session>(&raw) {
                Ok(session) => Some(session),
                Err(e) => {
                    self.logger
                        .error(format!("Session: Ignoring corrupt stored session: {}", e));
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                self.logger.error(format!("Session: Failed to read stored session: {}", e));
                None
            }
        };

        let dark_mode = match self.store.get(STORAGE_KEY_DARK_MODE).await {
            Ok(Some(raw)) => serde_json::from_str::<bool>(&raw).unwrap_or_else(|e| {
                self.logger
                    .error(format!("Session: Ignoring corrupt theme flag '{}': {}", raw, e));
                false
            }),
            Ok(None) => false,
            Err(e) => {
                self.logger.error(format!("Session: Failed to read theme flag: {}", e));
                false
            }
        };

        if let Some(session) = &session {
            self.logger
                .log(format!("Session: Restored session for {}", session.email));
        }

        RestoredState { session, dark_mode }
    }

    /// Decode the login credential and persist the resulting session.
    ///
    /// A credential that does not decode leaves everything untouched. A store
    /// failure is logged; the returned session is still valid for this run.
    pub async fn complete_login(&self, credential: &str) -> Result<Session, CredentialError> {
        let session = match decode_identity(credential) {
            Ok(session) => session,
            Err(e) => {
                self.logger.error(format!("Session: Rejected login credential: {}", e));
                return Err(e);
            }
        };

        match serde_json::to_string(&session) {
            Ok(raw) => {
                if let Err(e) = self.store.set(STORAGE_KEY_SESSION, &raw).await {
                    self.logger.error(format!("Session: Failed to persist session: {}", e));
                }
            }
            Err(e) => self.logger.error(format!("Session: Failed to encode session: {}", e)),
        }

        self.logger.log(format!("Session: Signed in as {}", session.email));
        Ok(session)
    }

    /// Forget the persisted session. The theme flag is kept.
    pub async fn logout(&self) {
        if let Err(e) = self.store.remove(STORAGE_KEY_SESSION).await {
            self.logger.error(format!("Session: Failed to remove stored session: {}", e));
        }
        self.logger.log("Session: Signed out".to_string());
    }

    /// Flip the theme and persist the new value, returning it.
    pub async fn toggle_theme(&self, current: bool) -> bool {
        let dark_mode = !current;
        if let Err(e) = self
            .store
            .set(STORAGE_KEY_DARK_MODE, if dark_mode { "true" } else { "false" })
            .await
        {
            self.logger.error(format!("Session: Failed to persist theme: {}", e));
        }
        dark_mode
    }
}
