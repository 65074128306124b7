//! Constants used throughout the application
//!
//! This module centralizes storage keys, UI text, and other constant values
//! to improve maintainability and consistency.

// Remote service
/// Base endpoint of the task service when no configuration overrides it
pub const DEFAULT_API_BASE_URL: &str = "https://mern-todo-back-wdqp.onrender.com";

// Persistent store keys
/// Key holding the serialized session record
pub const STORAGE_KEY_SESSION: &str = "user";
/// Key holding the serialized theme flag
pub const STORAGE_KEY_DARK_MODE: &str = "darkMode";

// Environment
/// Environment variable that can carry an identity credential at startup
pub const ENV_ID_TOKEN: &str = "TASKDECK_ID_TOKEN";

// UI Section Headers
pub const HEADER_WELCOME_SIGNED_OUT: &str = "Welcome to Task Manager";
pub const HEADER_TASKS: &str = "Your Tasks";
pub const HEADER_COMPLETED: &str = "Completed Tasks";
pub const THEME_LABEL_DARK: &str = "🌙 Dark Mode";
pub const THEME_LABEL_LIGHT: &str = "☀️ Light Mode";

// Validation Messages
pub const REJECT_EMPTY_TITLE: &str = "Task title cannot be empty!";
pub const REJECT_MISSING_DEADLINE: &str = "Please choose a due date!";
pub const REJECT_DEADLINE_IN_PAST: &str = "Due date cannot be in the past!";
pub const ERROR_INVALID_DATE_INPUT: &str = "Invalid date, use YYYY-MM-DD";
pub const ERROR_LOGIN_FAILED: &str = "❌ Sign-in failed";

// Log Messages
pub const LOG_ERROR_FETCH_TASKS: &str = "❌ Error fetching tasks";
pub const LOG_ERROR_ADD_TASK: &str = "❌ Error adding task";
pub const LOG_ERROR_UPDATE_DEADLINE: &str = "❌ Error updating due date";
pub const LOG_ERROR_DELETE_TASK: &str = "❌ Error deleting task";
pub const LOG_ERROR_MOVE_TASK: &str = "❌ Error moving task";
pub const LOG_ERROR_COMPLETE_TASK: &str = "❌ Error completing task";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const SIGNED_OUT_HINT: &str = "Press 'l' to sign in with a Google ID token, 'q' to quit";
pub const DIALOG_TITLE_LOGS: &str = "🔍 Logs - Press 'Esc', 'G' or 'q' to close";
