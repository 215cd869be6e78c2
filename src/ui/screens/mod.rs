//! UI screens for the application.

pub mod navigator;

pub use navigator::NavigatorScreen;
