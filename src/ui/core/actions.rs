use chrono::NaiveDate;

use crate::api::Direction;
use crate::state::Update;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Navigation
    NextTask,
    PreviousTask,

    // Session operations
    Login(String),
    Logout,
    ToggleTheme,

    // Task operations
    AddTask {
        title: String,
        deadline: Option<NaiveDate>,
    },
    UpdateDeadline {
        task_id: String,
        deadline: NaiveDate,
    },
    DeleteTask(String),
    MoveTask {
        task_id: String,
        direction: Direction,
    },
    CompleteTask(String),
    Refresh,

    // Results reported back by background operations
    Apply(Update),

    // UI operations
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogType {
    Login,
    TaskCreation,
    DeadlineEdit {
        task_id: String,
        title: String,
        current: NaiveDate,
    },
    DeleteConfirmation {
        task_id: String,
        title: String,
    },
    Help,
    Logs,
}
