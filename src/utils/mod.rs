//! Utility modules for the Task Master application.
//!
//! This module contains common helpers used throughout the application.
//!
//! # Available Utilities
//!
//! - [`datetime`] - Date parsing, formatting and human-readable display

pub mod datetime;
