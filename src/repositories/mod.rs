//! Repository layer for database operations.
//!
//! Repositories keep entities as pure data models while providing reusable
//! database access methods.

pub mod preference;

pub use preference::PreferenceRepository;
