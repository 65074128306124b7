//! Utility modules for the taskdeck application.
//!
//! # Available Utilities
//!
//! - [`datetime`] - Deadline parsing, formatting and calendar comparisons

pub mod datetime;
