//! GUI panels and application state.

pub mod app;
pub mod components;
pub mod dashboard;
pub mod landing;
pub mod placeholder_panel;
pub mod settings_panel;
pub mod sidebar;
pub mod supplier_panel;

pub use app::App;
