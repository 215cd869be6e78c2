//! Keyboard input handling and shortcuts.
//!
//! Provides shortcut registration and per-frame key polling.

use egui::{Context, Key, Modifiers};
use std::collections::HashMap;

use crate::navigator::Direction;

/// A keyboard shortcut definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyboardShortcut {
    /// The primary key
    pub key: Key,
    /// Required modifiers
    pub modifiers: Modifiers,
}

impl KeyboardShortcut {
    /// Create a new shortcut with just a key.
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    /// Create a shortcut with Ctrl modifier.
    pub fn ctrl(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::CTRL,
        }
    }

    /// Check if this shortcut matches the given input.
    pub fn matches(&self, key: Key, modifiers: Modifiers) -> bool {
        self.key == key && self.modifiers == modifiers
    }

    /// Get a display string for the shortcut.
    pub fn display(&self) -> String {
        let mut parts = Vec::new();

        if self.modifiers.ctrl {
            parts.push("Ctrl");
        }
        if self.modifiers.alt {
            parts.push("Alt");
        }
        if self.modifiers.shift {
            parts.push("Shift");
        }

        parts.push(key_name(self.key));

        parts.join("+")
    }
}

/// Actions that can be triggered by keyboard shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Select the previous function
    Previous,
    /// Select the next function
    Next,
    /// Announce the current function again
    RepeatCurrent,
}

impl KeyAction {
    /// Every action, in display order.
    pub const ALL: [KeyAction; 3] = [
        KeyAction::Previous,
        KeyAction::Next,
        KeyAction::RepeatCurrent,
    ];

    /// Get the default shortcut for this action.
    pub fn default_shortcut(&self) -> KeyboardShortcut {
        match self {
            KeyAction::Previous => KeyboardShortcut::new(Key::ArrowLeft),
            KeyAction::Next => KeyboardShortcut::new(Key::ArrowRight),
            KeyAction::RepeatCurrent => KeyboardShortcut::ctrl(Key::R),
        }
    }

    /// Get the description for this action.
    pub fn description(&self) -> &'static str {
        match self {
            KeyAction::Previous => "Navigate to previous function",
            KeyAction::Next => "Navigate to next function",
            KeyAction::RepeatCurrent => "Announce current function",
        }
    }

    /// Navigation direction, for actions that move the selection.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            KeyAction::Previous => Some(Direction::Backward),
            KeyAction::Next => Some(Direction::Forward),
            KeyAction::RepeatCurrent => None,
        }
    }
}

/// Keyboard input handler.
pub struct KeyboardHandler {
    /// Registered shortcuts
    shortcuts: HashMap<KeyboardShortcut, KeyAction>,
    /// Whether keyboard navigation is enabled
    enabled: bool,
}

impl Default for KeyboardHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyboardHandler {
    /// Create a new keyboard handler with default shortcuts.
    pub fn new() -> Self {
        let mut handler = Self {
            shortcuts: HashMap::new(),
            enabled: true,
        };
        for action in KeyAction::ALL {
            handler.register(action.default_shortcut(), action);
        }
        handler
    }

    /// Register a shortcut for an action.
    pub fn register(&mut self, shortcut: KeyboardShortcut, action: KeyAction) {
        self.shortcuts.insert(shortcut, action);
    }

    /// Unregister a shortcut.
    pub fn unregister(&mut self, shortcut: &KeyboardShortcut) {
        self.shortcuts.remove(shortcut);
    }

    /// Get the action for a key press.
    pub fn get_action(&self, key: Key, modifiers: Modifiers) -> Option<KeyAction> {
        if !self.enabled {
            return None;
        }

        self.shortcuts
            .iter()
            .find(|(shortcut, _)| shortcut.matches(key, modifiers))
            .map(|(_, action)| *action)
    }

    /// Consume this frame's key presses and return the triggered actions.
    ///
    /// Actions are returned in press order; each press yields one action.
    pub fn poll(&self, ctx: &Context) -> Vec<KeyAction> {
        if !self.enabled {
            return Vec::new();
        }

        ctx.input_mut(|input| {
            let mut actions = Vec::new();
            input.events.retain(|event| match event {
                egui::Event::Key {
                    key,
                    pressed: true,
                    modifiers,
                    ..
                } => match self.get_action(*key, *modifiers) {
                    Some(action) => {
                        actions.push(action);
                        false
                    }
                    None => true,
                },
                _ => true,
            });
            actions
        })
    }

    /// Enable or disable keyboard handling.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Check if keyboard handling is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Get the shortcut for an action.
    pub fn shortcut_for(&self, action: KeyAction) -> Option<&KeyboardShortcut> {
        self.shortcuts
            .iter()
            .find(|(_, &a)| a == action)
            .map(|(s, _)| s)
    }
}

/// Get a display name for a key.
fn key_name(key: Key) -> &'static str {
    match key {
        Key::ArrowLeft => "←",
        Key::ArrowRight => "→",
        Key::Space => "Space",
        Key::Enter => "Enter",
        _ => key.name(),
    }
}
