//! UI module for egui-based user interface.

pub mod screens;
pub mod widgets;

pub use screens::NavigatorScreen;
