//! Accessibility support for the navigator screen.
//!
//! This module provides:
//! - Polite announcement queueing for screen readers
//! - Live region and accessible label metadata for widgets
//! - Announcement sinks (tracing log, optional text-to-speech)

pub mod announcer;
pub mod screen_reader;

use thiserror::Error;

// Re-export primary types
pub use announcer::{build_sink, AnnouncementSink, AnnouncerKind, LogSink};
#[cfg(feature = "speech")]
pub use announcer::SpeechSink;
pub use screen_reader::{
    AccessibleLabel, AccessibleRole, Announcement, DefaultScreenReaderSupport, LiveRegion,
    ScreenReaderSupport,
};

/// Errors that can occur while delivering announcements
#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("TTS initialization failed: {0}")]
    InitFailed(String),

    #[error("Speech failed: {0}")]
    SpeakFailed(String),

    #[error("Speech support not compiled in (enable the `speech` feature)")]
    Unsupported,
}
