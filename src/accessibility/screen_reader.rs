//! Screen reader support.
//!
//! Provides accessible labels, the label's live region, and an announcement
//! queue that the app drains into an
//! [`AnnouncementSink`](super::AnnouncementSink) once per frame.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::navigator::SelectionChange;

/// Trait for providing screen reader support.
pub trait ScreenReaderSupport {
    /// Queue a polite announcement (waits behind speech in progress).
    fn announce(&self, message: &str);

    /// Check if screen reader support is enabled.
    fn is_enabled(&self) -> bool;

    /// Enable or disable screen reader support.
    fn set_enabled(&mut self, enabled: bool);
}

/// A polite message destined for the assistive-technology channel.
///
/// Polite announcements queue behind speech already in progress instead of
/// interrupting it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub text: String,
}

impl Announcement {
    pub fn polite(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Accessible label for a widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessibleLabel {
    /// The accessible name (read by screen reader)
    pub name: String,
    /// Role hint
    pub role: AccessibleRole,
}

impl AccessibleLabel {
    /// Create a new accessible label with a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: AccessibleRole::Generic,
        }
    }

    /// Set the role.
    pub fn with_role(mut self, role: AccessibleRole) -> Self {
        self.role = role;
        self
    }

    /// Create a button label.
    pub fn button(name: impl Into<String>) -> Self {
        Self::new(name).with_role(AccessibleRole::Button)
    }

    /// Create a live region label.
    pub fn live_region(name: impl Into<String>) -> Self {
        Self::new(name).with_role(AccessibleRole::LiveRegion)
    }
}

/// Accessible role hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessibleRole {
    /// Generic widget
    #[default]
    Generic,
    /// Button (activatable)
    Button,
    /// Polite live region (auto-announced updates)
    LiveRegion,
}

/// Polite live region holding the label text.
#[derive(Debug, Clone)]
pub struct LiveRegion {
    content: String,
}

impl LiveRegion {
    /// Create a live region with initial content.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Replace the content. Returns whether the text differs.
    pub fn set_content(&mut self, content: impl Into<String>) -> bool {
        let new_content = content.into();
        if self.content == new_content {
            return false;
        }
        self.content = new_content;
        true
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Default queue-backed screen reader support.
///
/// Single-threaded: the queue lives behind `RefCell` and is owned by the
/// UI thread.
pub struct DefaultScreenReaderSupport {
    enabled: bool,
    queue: RefCell<VecDeque<Announcement>>,
}

impl Default for DefaultScreenReaderSupport {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultScreenReaderSupport {
    /// Create an enabled instance with an empty queue.
    pub fn new() -> Self {
        Self {
            enabled: true,
            queue: RefCell::new(VecDeque::new()),
        }
    }

    /// Announce a selection change.
    pub fn announce_selection(&self, change: &SelectionChange) {
        self.announce(&change.value);
    }

    /// Take all pending announcements in the order they were queued.
    pub fn drain(&self) -> Vec<Announcement> {
        self.queue.borrow_mut().drain(..).collect()
    }

    /// Check if there are pending announcements.
    pub fn has_pending(&self) -> bool {
        self.pending_count() > 0
    }

    pub fn pending_count(&self) -> usize {
        self.queue.borrow().len()
    }
}

impl ScreenReaderSupport for DefaultScreenReaderSupport {
    fn announce(&self, message: &str) {
        if self.enabled {
            self.queue
                .borrow_mut()
                .push_back(Announcement::polite(message));
            tracing::debug!("Screen reader announce: {}", message);
        }
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.queue.borrow_mut().clear();
        }
        tracing::info!(
            "Screen reader support {}",
            if enabled { "enabled" } else { "disabled" }
        );
    }
}
