//! Function selection state machine.
//!
//! Holds the fixed catalog of selectable functions and the cyclic
//! controller that walks through it.

pub mod catalog;
pub mod controller;

use thiserror::Error;

pub use catalog::{FunctionCatalog, DEFAULT_FUNCTIONS};
pub use controller::{Direction, SelectionChange, SelectionController};

/// Errors raised while building a function catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigatorError {
    #[error("function catalog must contain at least one entry")]
    EmptyCatalog,

    #[error("function catalog entry {index} is blank")]
    BlankEntry { index: usize },

    #[error("function catalog entry '{name}' appears more than once")]
    DuplicateEntry { name: String },
}
