//! Large arrow activation target for selection navigation.
//!
//! Draws no pressed or hover feedback; only keyboard focus gets a ring.
//! The accessible name is the navigation description, not the arrow glyph.

use egui::{
    Color32, EventFilter, Id, Response, Sense, Stroke, StrokeKind, Ui, Vec2, Widget, WidgetInfo,
    WidgetType,
};

use crate::accessibility::{AccessibleLabel, AccessibleRole};
use crate::navigator::Direction;

/// Side length of the square touch target.
pub const ARROW_TARGET_SIZE: f32 = 150.0;

/// Appearance of an arrow button.
#[derive(Debug, Clone)]
struct ArrowButtonStyle {
    /// Square target size
    size: f32,
    /// Arrow stroke color
    color: Color32,
    /// Arrow stroke width
    stroke_width: f32,
    /// Keyboard focus ring color
    focus_color: Color32,
}

impl Default for ArrowButtonStyle {
    fn default() -> Self {
        Self {
            size: ARROW_TARGET_SIZE,
            color: Color32::WHITE,
            stroke_width: 12.0,
            focus_color: Color32::from_rgb(0, 200, 255),
        }
    }
}

/// Arrow button pointing in a navigation direction.
pub struct ArrowButton {
    direction: Direction,
    label: AccessibleLabel,
    style: ArrowButtonStyle,
}

impl ArrowButton {
    /// Create an arrow button for `direction` with its default description.
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            label: AccessibleLabel::button(description(direction)),
            style: ArrowButtonStyle::default(),
        }
    }

    /// Stable widget id of the button for `direction`.
    pub fn id(direction: Direction) -> Id {
        Id::new("accessnav_arrow_button").with(direction)
    }

    /// Accessible metadata exposed to screen readers.
    pub fn label(&self) -> &AccessibleLabel {
        &self.label
    }
}

/// Screen reader description for the control moving in `direction`.
pub fn description(direction: Direction) -> &'static str {
    match direction {
        Direction::Backward => "Navigate to previous function",
        Direction::Forward => "Navigate to next function",
    }
}

impl Widget for ArrowButton {
    fn ui(self, ui: &mut Ui) -> Response {
        let Self {
            direction,
            label,
            style,
        } = self;

        let (rect, _) = ui.allocate_exact_size(Vec2::splat(style.size), Sense::hover());
        let response = ui.interact(rect, Self::id(direction), Sense::click());

        // Left/Right select functions, so they must not also move focus away.
        ui.memory_mut(|memory| {
            memory.set_focus_lock_filter(
                response.id,
                EventFilter {
                    tab: false,
                    horizontal_arrows: true,
                    vertical_arrows: false,
                    escape: false,
                },
            )
        });

        let widget_type = match label.role {
            AccessibleRole::Button => WidgetType::Button,
            _ => WidgetType::Other,
        };
        let enabled = ui.is_enabled();
        response.widget_info(|| WidgetInfo::labeled(widget_type, enabled, &label.name));

        if ui.is_rect_visible(rect) {
            let stroke = Stroke::new(style.stroke_width, style.color);
            let half = rect.width() * 0.3;
            let vector = match direction {
                Direction::Backward => Vec2::new(-2.0 * half, 0.0),
                Direction::Forward => Vec2::new(2.0 * half, 0.0),
            };
            ui.painter().arrow(rect.center() - vector / 2.0, vector, stroke);

            if response.has_focus() {
                ui.painter().rect_stroke(
                    rect.shrink(2.0),
                    8.0,
                    Stroke::new(3.0, style.focus_color),
                    StrokeKind::Inside,
                );
            }
        }

        response
    }
}
