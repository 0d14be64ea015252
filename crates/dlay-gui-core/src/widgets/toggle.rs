//! Tempo-sync toggle.

use crate::theme::{ControlColors, Theme};
use egui::{Align2, Response, Sense, Stroke, Ui, Widget, pos2, vec2};

/// Indicator diameter in logical pixels before theme scaling.
const INDICATOR: f32 = 20.0;

/// A round on/off switch with a label to its right.
///
/// Clicking flips the bound flag and marks the response changed, so the
/// caller can push a complete edit transaction.
pub struct SyncToggle<'a> {
    on: &'a mut bool,
    label: &'a str,
    theme: &'a Theme,
    colors: Option<ControlColors>,
}

impl<'a> SyncToggle<'a> {
    /// Create a toggle editing `on`.
    pub fn new(on: &'a mut bool, label: &'a str, theme: &'a Theme) -> Self {
        Self {
            on,
            label,
            theme,
            colors: None,
        }
    }

    /// Fill colours for the lit indicator.
    pub fn colors(mut self, colors: ControlColors) -> Self {
        self.colors = Some(colors);
        self
    }
}

impl Widget for SyncToggle<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let scale = self.theme.scale;
        let indicator = INDICATOR * scale;
        let font = self.theme.body_font();
        let label_width = ui.fonts(|f| {
            self.label
                .chars()
                .map(|c| f.glyph_width(&font, c))
                .sum::<f32>()
        });
        let size = vec2(indicator + 8.0 * scale + label_width, indicator.max(font.size) + 4.0);

        let (rect, mut response) = ui.allocate_exact_size(size, Sense::click());

        if response.clicked() {
            *self.on = !*self.on;
            tracing::debug!(on = *self.on, "sync toggled");
            response.mark_changed();
        }

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();

            let center = pos2(rect.left() + indicator / 2.0 + 2.0, rect.center().y);
            let radius = indicator / 2.0 - 2.0;

            painter.circle_stroke(center, radius, Stroke::new(2.0, self.theme.knob_track));

            let lit = match self.colors {
                Some(c) if response.hovered() => c.hovered,
                Some(c) => c.active,
                None => self.theme.knob_idle,
            };
            if *self.on {
                painter.circle_filled(center, radius - 3.0 * scale, lit);
            }

            if response.hovered() {
                painter.circle_stroke(
                    center,
                    radius + 2.0,
                    Stroke::new(1.0, lit.gamma_multiply(0.5)),
                );
            }

            let text_color = if *self.on {
                self.theme.text_primary
            } else {
                self.theme.text_secondary
            };
            painter.text(
                pos2(rect.left() + indicator + 8.0 * scale, rect.center().y),
                Align2::LEFT_CENTER,
                self.label,
                font,
                text_color,
            );
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_renders_headless_without_change() {
        let ctx = egui::Context::default();
        let theme = Theme::default();
        let mut on = false;
        let mut changed = true;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                changed = ui.add(SyncToggle::new(&mut on, "Sync", &theme)).changed();
            });
        });
        assert!(!changed);
        assert!(!on);
    }
}
