//! AccessNav - Accessible Function Selector
//!
//! A single-screen egui application that shows one of a fixed set of
//! assistive functions in large text and cycles through them with two large
//! arrow controls, announcing each change to screen readers.

pub mod accessibility;
pub mod input;
pub mod navigator;
pub mod storage;
pub mod ui;

// Re-export commonly used types
pub use accessibility::{Announcement, DefaultScreenReaderSupport, ScreenReaderSupport};
pub use navigator::{Direction, FunctionCatalog, NavigatorError, SelectionController};
pub use storage::config::AppConfig;
pub use ui::NavigatorScreen;
