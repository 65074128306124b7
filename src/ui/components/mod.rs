//! Reusable UI components

// Component architecture
pub mod completed_list_component;
pub mod dialog_component;
pub mod dialogs;
pub mod status_bar;
pub mod task_list_component;

// Component exports
pub use completed_list_component::CompletedListComponent;
pub use dialog_component::DialogComponent;
pub use status_bar::StatusBar;
pub use task_list_component::TaskListComponent;
