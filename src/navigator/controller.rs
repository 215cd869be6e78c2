//! Cyclic selection over a [`FunctionCatalog`].
//!
//! Every transition emits exactly one [`SelectionChange`], both as the return
//! value and to each subscriber channel, so the presentation layer can
//! re-render and announce without diffing state.

use crossbeam::channel::{Receiver, Sender};

use super::FunctionCatalog;
use crate::accessibility::Announcement;

/// Navigation direction through the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Next entry, wrapping from last to first
    Forward,
    /// Previous entry, wrapping from first to last
    Backward,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Forward => write!(f, "next"),
            Direction::Backward => write!(f, "previous"),
        }
    }
}

/// A single state change produced by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChange {
    /// New selected index
    pub index: usize,
    /// New display value
    pub value: String,
    /// Transition that produced this change
    pub direction: Direction,
}

impl SelectionChange {
    /// Polite announcement carrying the new value.
    pub fn announcement(&self) -> Announcement {
        Announcement::polite(&self.value)
    }
}

/// Owns the catalog and the selected index.
#[derive(Debug)]
pub struct SelectionController {
    catalog: FunctionCatalog,
    index: usize,
    subscribers: Vec<Sender<SelectionChange>>,
}

impl SelectionController {
    /// Create a controller selecting the first catalog entry.
    pub fn new(catalog: FunctionCatalog) -> Self {
        Self {
            catalog,
            index: 0,
            subscribers: Vec::new(),
        }
    }

    /// Currently selected display name.
    pub fn current(&self) -> &str {
        &self.catalog[self.index]
    }

    /// Currently selected index.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    pub fn catalog(&self) -> &FunctionCatalog {
        &self.catalog
    }

    /// Advance to the next entry, wrapping to the first.
    pub fn next(&mut self) -> SelectionChange {
        self.index = (self.index + 1) % self.len();
        self.emit(Direction::Forward)
    }

    /// Step back to the previous entry, wrapping to the last.
    pub fn previous(&mut self) -> SelectionChange {
        let len = self.len();
        self.index = (self.index + len - 1) % len;
        self.emit(Direction::Backward)
    }

    /// Move one step in `direction`.
    pub fn step(&mut self, direction: Direction) -> SelectionChange {
        match direction {
            Direction::Forward => self.next(),
            Direction::Backward => self.previous(),
        }
    }

    /// Receive every future [`SelectionChange`].
    pub fn subscribe(&mut self) -> Receiver<SelectionChange> {
        let (tx, rx) = crossbeam::channel::unbounded();
        self.subscribers.push(tx);
        rx
    }

    fn emit(&mut self, direction: Direction) -> SelectionChange {
        let change = SelectionChange {
            index: self.index,
            value: self.current().to_string(),
            direction,
        };

        tracing::debug!(
            "Selection moved {} to {} ({}/{})",
            direction,
            change.value,
            change.index + 1,
            self.len()
        );

        // Receivers that were dropped are pruned here.
        self.subscribers.retain(|tx| tx.send(change.clone()).is_ok());

        change
    }
}
