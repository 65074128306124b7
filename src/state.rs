//! Application state and its reducer.
//!
//! [`AppState`] is never mutated in place. Every change is expressed as an
//! [`Update`] and applied with [`AppState::reduce`], which returns the next
//! state. Side effects (network, store) happen elsewhere and only report back
//! through updates.

use crate::session::{RestoredState, Session};
use crate::tasks::{Outcome, Snapshot};

/// A transient message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Error(String),
    Info(String),
}

/// Everything the UI renders from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub session: Option<Session>,
    pub snapshot: Snapshot,
    pub dark_mode: bool,
    pub notice: Option<Notice>,
}

/// A single state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Update {
    Restored(RestoredState),
    SignedIn(Session),
    SignedOut,
    ThemeSet(bool),
    /// A fetch result for `owner`; dropped unless `owner` is still signed in.
    SnapshotLoaded { owner: String, snapshot: Snapshot },
    Notify(Notice),
    DismissNotice,
}

impl Update {
    /// Translate a task store outcome for `owner` into an update, if it changes anything.
    pub fn from_outcome(owner: &str, outcome: Outcome) -> Option<Update> {
        match outcome {
            Outcome::Refreshed(snapshot) => Some(Update::SnapshotLoaded {
                owner: owner.to_string(),
                snapshot,
            }),
            Outcome::Rejected(rejection) => Some(Update::Notify(Notice::Error(rejection.to_string()))),
            Outcome::Unchanged => None,
        }
    }
}

impl AppState {
    /// Apply `update`, producing the next state.
    #[must_use]
    pub fn reduce(&self, update: Update) -> AppState {
        let mut next = self.clone();
        match update {
            Update::Restored(restored) => {
                next.session = restored.session;
                next.dark_mode = restored.dark_mode;
                next.snapshot = Snapshot::default();
            }
            Update::SignedIn(session) => {
                if self.owner() != Some(session.email.as_str()) {
                    next.snapshot = Snapshot::default();
                }
                next.session = Some(session);
            }
            Update::SignedOut => {
                next.session = None;
                next.snapshot = Snapshot::default();
            }
            Update::ThemeSet(dark_mode) => {
                next.dark_mode = dark_mode;
            }
            Update::SnapshotLoaded { owner, snapshot } => {
                if self.owner() == Some(owner.as_str()) {
                    next.snapshot = snapshot;
                }
            }
            Update::Notify(notice) => {
                next.notice = Some(notice);
            }
            Update::DismissNotice => {
                next.notice = None;
            }
        }
        next
    }

    /// Email of the signed-in user
    pub fn owner(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.email.as_str())
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }
}
