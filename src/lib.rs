//! taskdeck - a terminal client for a remote task service
//!
//! Signs in with a Google identity credential, lists the user's active and
//! completed tasks, and sends add, due-date, reorder, complete and delete
//! requests to the service, refetching after each one.
//!
//! # Modules
//!
//! * [`api`] - Task service interface and its HTTP implementation
//! * [`config`] - Application configuration management
//! * [`session`] - Signed-in identity, credential decoding, theme preference
//! * [`tasks`] - Task store client: validation and refetch-after-mutate
//! * [`state`] - Application state and its reducer
//! * [`storage`] - Local key-value store for the session and theme
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Date helpers

/// Task service interface, wire types and HTTP client
pub mod api;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// SeaORM entity models for database tables
pub mod entities;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Repository layer for database operations
pub mod repositories;

/// Session holder and credential decoding
pub mod session;

/// Immutable application state
pub mod state;

/// Local key-value persistence
pub mod storage;

/// Task store client
pub mod tasks;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date handling
pub mod utils;

// Re-export entity models for convenient access
pub use entities::preference;
