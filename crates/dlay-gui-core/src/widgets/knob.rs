//! Rotary knob bound to a parameter descriptor.
//!
//! - Vertical drag adjusts the value in normalized space, so the log-scaled
//!   time knob feels even across its range
//! - Shift for fine control
//! - Double-click resets to the descriptor default
//! - Scale ticks from the descriptor, label above, value text below
//! - Hover tooltip with the formatted value (hidden while a button is held)
//!
//! Stepped parameters (the sync ratio) snap on every frame. The unsnapped
//! drag position lives in egui temp memory so slow drags still reach the
//! next step.

use crate::theme::{ControlColors, Theme};
use dlay_core::ParamDescriptor;
use egui::{Align2, Color32, Pos2, Response, Sense, Stroke, Ui, Widget, pos2, vec2};
use std::f32::consts::PI;

/// Arc start: bottom-left, 135°.
const START_ANGLE: f32 = PI * 0.75;
/// Arc end: bottom-right, 405°.
const END_ANGLE: f32 = PI * 2.25;

/// Normalized change per pixel dragged.
const SENSITIVITY: f32 = 0.005;
/// Knob diameter in logical pixels before theme scaling.
const DIAMETER: f32 = 64.0;

/// Sensitivity multiplier with Shift held.
const FINE_FACTOR: f32 = 0.1;

/// Rotary knob for one delay parameter.
pub struct Knob<'a> {
    value: &'a mut f32,
    desc: ParamDescriptor,
    theme: &'a Theme,
    colors: Option<ControlColors>,
    label: Option<&'a str>,
}

impl<'a> Knob<'a> {
    /// Create a knob editing `value` (plain units) within `desc`'s range.
    pub fn new(value: &'a mut f32, desc: ParamDescriptor, theme: &'a Theme) -> Self {
        Self {
            value,
            desc,
            theme,
            colors: None,
            label: None,
        }
    }

    /// Active/hovered fill colours. Defaults to the theme's idle colour.
    pub fn colors(mut self, colors: ControlColors) -> Self {
        self.colors = Some(colors);
        self
    }

    /// Override the label (defaults to the descriptor's short name).
    pub fn label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }
}

/// Move a normalized position by a vertical drag (up increases).
pub(crate) fn drag_normalized(start: f32, delta_y: f32, fine: bool) -> f32 {
    let sensitivity = if fine {
        SENSITIVITY * FINE_FACTOR
    } else {
        SENSITIVITY
    };
    (start - delta_y * sensitivity).clamp(0.0, 1.0)
}

/// Angle of the pointer for a normalized position.
pub(crate) fn value_angle(normalized: f32) -> f32 {
    START_ANGLE + normalized.clamp(0.0, 1.0) * (END_ANGLE - START_ANGLE)
}

impl Widget for Knob<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let scale = self.theme.scale;
        let diameter = DIAMETER * scale;
        let font = self.theme.body_font();
        let line = font.size * 1.25;
        let size = vec2(diameter.max(font.size * 5.0), diameter + 2.0 * line);
        let (rect, mut response) = ui.allocate_exact_size(size, Sense::click_and_drag());

        let center = pos2(rect.center().x, rect.top() + line + diameter / 2.0);
        let radius = diameter / 2.0 - 4.0 * scale;

        let mut changed = false;

        if response.double_clicked() {
            *self.value = self.desc.default;
            ui.data_mut(|d| d.remove_temp::<f32>(response.id));
            changed = true;
        } else if response.dragged() {
            let fine = ui.input(|i| i.modifiers.shift);
            let start = if response.drag_started() {
                self.desc.normalize(*self.value)
            } else {
                ui.data(|d| d.get_temp::<f32>(response.id))
                    .unwrap_or_else(|| self.desc.normalize(*self.value))
            };
            let normalized = drag_normalized(start, response.drag_delta().y, fine);
            ui.data_mut(|d| d.insert_temp(response.id, normalized));

            let new_value = self.desc.denormalize(normalized);
            if new_value != *self.value {
                *self.value = new_value;
                changed = true;
            }
        }
        if response.drag_stopped() {
            ui.data_mut(|d| d.remove_temp::<f32>(response.id));
        }

        let is_active = response.dragged();
        let fill = match self.colors {
            Some(c) if is_active => c.active,
            Some(c) if response.hovered() => c.hovered,
            Some(c) => c.active.gamma_multiply(0.85),
            None => self.theme.knob_idle,
        };

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            let normalized = self.desc.normalize(*self.value);
            let angle = value_angle(normalized);

            draw_ticks(
                painter,
                center,
                radius,
                self.desc.ticks,
                self.theme.text_secondary,
                scale,
            );

            let arc_radius = radius - 4.0 * scale;
            let arc_width = 5.0 * scale;
            draw_arc(
                painter,
                center,
                arc_radius,
                START_ANGLE,
                END_ANGLE,
                self.theme.knob_track,
                arc_width,
            );
            if normalized > 0.001 {
                draw_arc(painter, center, arc_radius, START_ANGLE, angle, fill, arc_width);
            }

            painter.circle_filled(center, radius - 10.0 * scale, self.theme.knob_body);
            let pointer_len = radius - 14.0 * scale;
            let tip = pos2(
                center.x + angle.cos() * pointer_len,
                center.y + angle.sin() * pointer_len,
            );
            painter.line_segment([center, tip], Stroke::new(3.0 * scale, fill));

            painter.text(
                pos2(rect.center().x, rect.top()),
                Align2::CENTER_TOP,
                self.label.unwrap_or(self.desc.short_name),
                font.clone(),
                self.theme.text_primary,
            );
            painter.text(
                pos2(rect.center().x, rect.bottom()),
                Align2::CENTER_BOTTOM,
                self.desc.format_value(*self.value),
                font,
                self.theme.text_secondary,
            );
        }

        if changed {
            response.mark_changed();
        }

        let pointer_down = ui.input(|i| i.pointer.any_down());
        if response.hovered() && !pointer_down {
            let text = format!("{}: {}", self.desc.name, self.desc.format_value(*self.value));
            response = response.on_hover_text(text);
        }

        response
    }
}

/// Evenly spaced scale ticks just outside the arc.
fn draw_ticks(
    painter: &egui::Painter,
    center: Pos2,
    radius: f32,
    ticks: u8,
    color: Color32,
    scale: f32,
) {
    if ticks < 2 {
        return;
    }
    let last = f32::from(ticks - 1);
    for i in 0..ticks {
        let angle = value_angle(f32::from(i) / last);
        let (sin, cos) = angle.sin_cos();
        let inner = radius + 1.0 * scale;
        let outer = radius + 4.0 * scale;
        painter.line_segment(
            [
                pos2(center.x + cos * inner, center.y + sin * inner),
                pos2(center.x + cos * outer, center.y + sin * outer),
            ],
            Stroke::new(1.0, color),
        );
    }
}

/// Draw an arc using line segments.
fn draw_arc(
    painter: &egui::Painter,
    center: Pos2,
    radius: f32,
    start_angle: f32,
    end_angle: f32,
    color: Color32,
    stroke_width: f32,
) {
    let segments = 32;
    let sweep = end_angle - start_angle;

    let points: Vec<Pos2> = (0..=segments)
        .map(|i| {
            let angle = start_angle + (i as f32 / segments as f32) * sweep;
            pos2(center.x + angle.cos() * radius, center.y + angle.sin() * radius)
        })
        .collect();

    for pair in points.windows(2) {
        painter.line_segment([pair[0], pair[1]], Stroke::new(stroke_width, color));
    }
}
