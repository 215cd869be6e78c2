//! Unit tests for keyboard shortcut polling.

use accessnav::input::{KeyAction, KeyboardHandler, KeyboardShortcut};
use egui::{Event, Key, Modifiers, RawInput};

fn key_press(key: Key, modifiers: Modifiers) -> Event {
    Event::Key {
        key,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers,
    }
}

fn poll_with(handler: &KeyboardHandler, events: Vec<Event>) -> Vec<KeyAction> {
    let ctx = egui::Context::default();
    let input = RawInput {
        events,
        ..Default::default()
    };
    let mut actions = Vec::new();
    let _ = ctx.run(input, |ctx| {
        actions = handler.poll(ctx);
    });
    actions
}

#[test]
fn test_poll_maps_arrows_in_order() {
    let handler = KeyboardHandler::new();
    let actions = poll_with(
        &handler,
        vec![
            key_press(Key::ArrowRight, Modifiers::NONE),
            key_press(Key::ArrowRight, Modifiers::NONE),
            key_press(Key::ArrowLeft, Modifiers::NONE),
        ],
    );
    assert_eq!(actions, [KeyAction::Next, KeyAction::Next, KeyAction::Previous]);
}

#[test]
fn test_poll_ignores_unmapped_and_released_keys() {
    let handler = KeyboardHandler::new();
    let released = Event::Key {
        key: Key::ArrowRight,
        physical_key: None,
        pressed: false,
        repeat: false,
        modifiers: Modifiers::NONE,
    };
    let actions = poll_with(&handler, vec![key_press(Key::Q, Modifiers::NONE), released]);
    assert!(actions.is_empty());
}

#[test]
fn test_poll_disabled_returns_nothing() {
    let mut handler = KeyboardHandler::new();
    handler.set_enabled(false);
    let actions = poll_with(&handler, vec![key_press(Key::ArrowRight, Modifiers::NONE)]);
    assert!(actions.is_empty());
}

#[test]
fn test_custom_shortcut() {
    let mut handler = KeyboardHandler::new();
    handler.unregister(&KeyAction::Next.default_shortcut());
    handler.register(KeyboardShortcut::new(Key::N), KeyAction::Next);

    assert_eq!(handler.get_action(Key::ArrowRight, Modifiers::NONE), None);
    assert_eq!(handler.get_action(Key::N, Modifiers::NONE), Some(KeyAction::Next));
    assert_eq!(
        handler.shortcut_for(KeyAction::Next),
        Some(&KeyboardShortcut::new(Key::N))
    );
}
