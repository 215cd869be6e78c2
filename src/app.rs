//! Main application state and egui integration.
//!
//! Wires keyboard and pointer activations into the navigator screen and
//! drains queued announcements into the configured sink once per frame.

use eframe::egui;

use accessnav::accessibility::{build_sink, AnnouncementSink, DefaultScreenReaderSupport};
use accessnav::input::{KeyAction, KeyboardHandler};
use accessnav::navigator::{Direction, FunctionCatalog};
use accessnav::storage::config::AppConfig;
use accessnav::ui::NavigatorScreen;

/// Main application state.
pub struct AccessNavApp {
    /// The only screen
    screen: NavigatorScreen,
    /// Announcement queue
    screen_reader: DefaultScreenReaderSupport,
    /// Destination for drained announcements
    sink: Box<dyn AnnouncementSink>,
    /// Arrow-key shortcuts
    keyboard: KeyboardHandler,
}

impl AccessNavApp {
    /// Create a new application instance.
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        catalog: FunctionCatalog,
        config: &AppConfig,
    ) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        let settings = &config.accessibility;
        let sink = build_sink(settings.announcer, settings.speech_rate, settings.speech_volume);
        tracing::info!(
            "Announcements via {} ({} sink)",
            settings.announcer,
            sink.name()
        );

        let mut keyboard = KeyboardHandler::new();
        keyboard.set_enabled(settings.keyboard_navigation);
        if keyboard.is_enabled() {
            for action in KeyAction::ALL {
                if let Some(shortcut) = keyboard.shortcut_for(action) {
                    tracing::debug!("{}: {}", shortcut.display(), action.description());
                }
            }
        }

        let screen = NavigatorScreen::new(catalog);
        tracing::info!(
            "Navigator ready with {} functions, starting at '{}'",
            screen.controller().len(),
            screen.controller().current()
        );

        Self {
            screen,
            screen_reader: DefaultScreenReaderSupport::new(),
            sink,
            keyboard,
        }
    }

    /// Apply a keyboard action.
    fn handle_key_action(&mut self, action: KeyAction) {
        match action.direction() {
            Some(direction) => self.navigate(direction),
            None => self.screen.repeat_current(&self.screen_reader),
        }
    }

    fn navigate(&mut self, direction: Direction) {
        self.screen.navigate(direction, &self.screen_reader);
    }

    /// Deliver queued announcements. Sink failures never touch selection state.
    fn flush_announcements(&mut self) {
        for announcement in self.screen_reader.drain() {
            if let Err(e) = self.sink.deliver(&announcement) {
                tracing::warn!("Failed to deliver announcement '{}': {}", announcement.text, e);
            }
        }
    }
}

impl eframe::App for AccessNavApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for action in self.keyboard.poll(ctx) {
            self.handle_key_action(action);
        }

        let mut activated = None;
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(egui::Color32::BLACK))
            .show(ctx, |ui| {
                activated = self.screen.show(ui);
            });

        if let Some(direction) = activated {
            self.navigate(direction);
            // Re-render the label with the new value right away.
            ctx.request_repaint();
        }

        self.flush_announcements();
    }
}
