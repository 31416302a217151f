//! Core UI functionality for Task Master.
//!
//! This module contains the fundamental building blocks for the user interface:
//! event polling, the action vocabulary components use to request changes, and
//! the component abstraction itself.
//!
//! # Architecture
//!
//! 1. **Components** implement the [`Component`] trait for consistent rendering
//! 2. **Actions** describe what a key press asks for
//! 3. **Events** are produced by the [`EventHandler`]
//!
//! Components never touch the task board directly. They return actions that
//! the app component turns into board calls.

pub mod actions;
pub mod component;
pub mod event_handler;

// Re-export core types for easier access from other modules
pub use actions::{Action, DialogType, DraftField, Focus};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
