//! Function navigator screen.
//!
//! A large label naming the selected function at the top and two arrow
//! controls at the bottom. The label is an AccessKit polite live region, and
//! every transition also queues one polite announcement.

use egui::{vec2, Align, Color32, Frame, Layout, RichText, Ui};

use crate::accessibility::{
    AccessibleLabel, DefaultScreenReaderSupport, LiveRegion, ScreenReaderSupport,
};
use crate::navigator::{Direction, FunctionCatalog, SelectionChange, SelectionController};
use crate::ui::widgets::{ArrowButton, ARROW_TARGET_SIZE};

/// Font size of the selected function label.
pub const LABEL_FONT_SIZE: f32 = 40.0;

const BACKGROUND: Color32 = Color32::BLACK;
const FOREGROUND: Color32 = Color32::WHITE;
const LABEL_TOP_MARGIN: f32 = 132.0;
const LABEL_SIDE_MARGIN: f32 = 32.0;
/// Gap between the arrow row and the bottom edge.
pub const ARROW_BOTTOM_MARGIN: f32 = 50.0;

/// Navigator screen state.
pub struct NavigatorScreen {
    controller: SelectionController,
    label_region: LiveRegion,
}

impl NavigatorScreen {
    /// Create the screen with the first catalog entry selected.
    pub fn new(catalog: FunctionCatalog) -> Self {
        let controller = SelectionController::new(catalog);
        let label_region = LiveRegion::new(controller.current());
        Self {
            controller,
            label_region,
        }
    }

    pub fn controller(&self) -> &SelectionController {
        &self.controller
    }

    /// Text currently shown in the label.
    pub fn label_text(&self) -> &str {
        self.label_region.content()
    }

    /// Apply one activation: move the selection, update the label and queue
    /// exactly one polite announcement.
    pub fn navigate(
        &mut self,
        direction: Direction,
        reader: &DefaultScreenReaderSupport,
    ) -> SelectionChange {
        let change = self.controller.step(direction);
        self.label_region.set_content(change.value.as_str());
        reader.announce_selection(&change);
        change
    }

    /// Queue the current value again without changing state.
    pub fn repeat_current(&self, reader: &impl ScreenReaderSupport) {
        reader.announce(self.controller.current());
    }

    /// Render the screen and return the activated direction, if any.
    pub fn show(&self, ui: &mut Ui) -> Option<Direction> {
        let mut activated = None;

        Frame::NONE.fill(BACKGROUND).show(ui, |ui| {
            ui.set_min_size(ui.available_size());

            ui.vertical_centered(|ui| {
                ui.add_space(LABEL_TOP_MARGIN);
                self.show_label(ui);
            });

            ui.with_layout(Layout::bottom_up(Align::Center), |ui| {
                ui.add_space(ARROW_BOTTOM_MARGIN);

                // The row must be as tall as the targets so they sit above the margin.
                let row = vec2(ui.available_width(), ARROW_TARGET_SIZE);
                ui.allocate_ui_with_layout(row, Layout::left_to_right(Align::Center), |ui| {
                    // Equal gaps before, between and after the two targets.
                    let gap = ((ui.available_width() - ARROW_TARGET_SIZE * 2.0) / 3.0).max(0.0);
                    ui.spacing_mut().item_spacing.x = 0.0;

                    ui.add_space(gap);
                    if ui.add(ArrowButton::new(Direction::Backward)).clicked() {
                        activated = Some(Direction::Backward);
                    }
                    ui.add_space(gap);
                    if ui.add(ArrowButton::new(Direction::Forward)).clicked() {
                        activated = Some(Direction::Forward);
                    }
                });
            });
        });

        activated
    }

    fn show_label(&self, ui: &mut Ui) {
        let text = RichText::new(self.label_region.content())
            .size(LABEL_FONT_SIZE)
            .strong()
            .color(FOREGROUND);

        let width = (ui.available_width() - LABEL_SIDE_MARGIN * 2.0).max(0.0);
        let response = ui.add_sized(
            [width, LABEL_FONT_SIZE * 2.5],
            egui::Label::new(text).wrap(),
        );

        let label = AccessibleLabel::live_region(self.label_region.content());
        ui.ctx().accesskit_node_builder(response.id, |node| {
            node.set_label(label.name.as_str());
            node.set_live(egui::accesskit::Live::Polite);
        });
    }
}
