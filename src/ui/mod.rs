//! Terminal user interface.
//!
//! A single full-screen view: header, active tasks, completed tasks and a
//! status bar, with modal dialogs on top. See [`core`] for the component and
//! action plumbing.

pub mod app_component;
pub mod components;
pub mod core;
pub mod layout;
pub mod renderer;
pub mod theme;

pub use app_component::AppComponent;
pub use layout::LayoutManager;
pub use renderer::run_app;
pub use theme::Palette;
