pub mod common;
pub mod input;
pub mod system_dialogs;
pub mod task_dialogs;

pub use input::InputField;
pub use task_dialogs::TaskField;
