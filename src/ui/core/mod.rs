//! Core UI building blocks.
//!
//! - [`actions`] - everything a key press or background operation can ask for
//! - [`component`] - the trait every widget implements
//! - [`event_handler`] - non-blocking terminal input
//! - [`task_manager`] - spawns network work and reports back over a channel
//!
//! Components turn key events into [`Action`]s. The app component applies
//! them, spawning background work through the [`TaskManager`] when the network
//! is involved; results come back as [`Action::Apply`] and are reduced into
//! the application state on the next tick.

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod task_manager;

pub use actions::{Action, DialogType};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use task_manager::{TaskId, TaskManager};
