//! Input handling module for keyboard support.
//!
//! Pointer and assistive-technology activation arrive through egui widgets;
//! this module maps keyboard shortcuts onto the same navigation actions.

pub mod keyboard;

// Re-export types
pub use keyboard::{KeyAction, KeyboardHandler, KeyboardShortcut};
