//! UI components for the single-page board.
//!
//! Stateful components ([`DraftFormComponent`], [`TaskListComponent`],
//! [`DialogComponent`]) implement [`crate::ui::core::Component`]; the header,
//! filter bar and status bar are stateless renderers.

pub mod dialog_component;
pub mod dialogs;
pub mod draft_form_component;
pub mod filter_bar;
pub mod header;
pub mod status_bar;
pub mod task_list_component;

pub use dialog_component::DialogComponent;
pub use draft_form_component::DraftFormComponent;
pub use filter_bar::FilterBar;
pub use header::Header;
pub use status_bar::StatusBar;
pub use task_list_component::{EditBuffer, TaskListComponent};
