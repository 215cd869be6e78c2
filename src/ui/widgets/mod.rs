//! UI widgets for reusable components.

pub mod arrow_button;

pub use arrow_button::{ArrowButton, ARROW_TARGET_SIZE};
