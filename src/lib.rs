//! Task Master - A single-page task list manager for the terminal
//!
//! This library provides the task board (tasks, draft entry, filters and
//! theme), its persistence in a local SQLite database, calendar link export,
//! and an interactive UI built with Ratatui.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`board`] - Task list state and all mutations
//! * [`calendar`] - Calendar "create event" links for tasks
//! * [`config`] - Application configuration management
//! * [`storage`] - Local database and data persistence
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Utility functions and helpers

/// Task board: tasks, draft entry, filters and theme
pub mod board;

/// Calendar link export for tasks with a due date
pub mod calendar;

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

/// Local storage layer for the task list and theme
pub mod storage;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date/time handling
pub mod utils;

pub use board::{Priority, Task, TaskBoard, TaskId};
