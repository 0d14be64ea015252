//! Visual styling for the DLAY editor.
//!
//! Besides the static window theme, the knob colours react to the feedback
//! setting: the more feedback, the brighter the controls glow. The mapping
//! goes through a single "intensity" scalar:
//!
//! ```text
//! intensity = (feedback - 20) / 5        // -4 at 0%, 0 at 20%, 16 at 100%
//! bright(c) = HSV(c) with V += intensity * 0.02, clamped
//! ```
//!
//! The mix knob additionally blends from the time colour toward yellow as
//! the mix setting rises.

use egui::ecolor::Hsva;
use egui::{Color32, FontFamily, FontId, Rgba, Stroke, Style, TextStyle, Visuals};

/// Base palette. `*_BR` are the hovered variants.
pub mod palette {
    use egui::Color32;

    /// Cross knob.
    pub const RED: Color32 = Color32::from_rgb(200, 60, 70);
    /// Cross knob, hovered.
    pub const RED_BR: Color32 = Color32::from_rgb(235, 95, 100);
    /// Time knob.
    pub const GREEN: Color32 = Color32::from_rgb(70, 170, 110);
    /// Time knob, hovered.
    pub const GREEN_BR: Color32 = Color32::from_rgb(105, 210, 145);
    /// Feedback knob.
    pub const BLUE: Color32 = Color32::from_rgb(60, 120, 200);
    /// Feedback knob, hovered.
    pub const BLUE_BR: Color32 = Color32::from_rgb(100, 160, 235);
    /// Mix knob target at 100% wet.
    pub const YELLOW: Color32 = Color32::from_rgb(210, 180, 60);
    /// Mix knob target at 100% wet, hovered.
    pub const YELLOW_BR: Color32 = Color32::from_rgb(240, 215, 95);
}

/// Hue of the window chrome (a deep magenta-red).
const CHROME_HUE: f32 = 3.31 / 3.6;
/// HSV value step per unit of intensity.
const BRIGHT_STEP: f32 = 0.02;

/// Body font size in logical pixels before host scaling.
pub const BODY_FONT_SIZE: f32 = 16.0;
/// Title font size in logical pixels before host scaling.
pub const TITLE_FONT_SIZE: f32 = 21.0;

/// Colour intensity for a feedback value (0–100%).
///
/// ```rust
/// use dlay_gui_core::theme::intensity;
///
/// assert_eq!(intensity(20.0), 0.0);
/// assert_eq!(intensity(25.0), 1.0);
/// assert_eq!(intensity(100.0), 16.0);
/// ```
pub fn intensity(feedback: f32) -> f32 {
    (feedback - 20.0) / 5.0
}

/// Brighten (positive intensity) or darken (negative) a colour in HSV space.
pub fn color_bright(color: Color32, intensity: f32) -> Color32 {
    let mut hsva = Hsva::from(color);
    hsva.v = (hsva.v + intensity * BRIGHT_STEP).clamp(0.0, 1.0);
    Color32::from(hsva)
}

/// Blend `from` toward `to` by `mix` percent, then apply [`color_bright`].
pub fn color_mix(from: Color32, to: Color32, intensity: f32, mix: f32) -> Color32 {
    let t = (mix / 100.0).clamp(0.0, 1.0);
    let blended = Rgba::from(from) * (1.0 - t) + Rgba::from(to) * t;
    color_bright(Color32::from(blended), intensity)
}

/// Active (dragging) and hovered colours for one control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlColors {
    /// Fill while the control is being dragged.
    pub active: Color32,
    /// Fill while the pointer is over the control.
    pub hovered: Color32,
}

/// Per-control colours for one frame, derived from feedback and mix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntensityPalette {
    /// Time knob (both ms and ratio modes).
    pub time: ControlColors,
    /// Feedback knob.
    pub feedback: ControlColors,
    /// Cross knob.
    pub cross: ControlColors,
    /// Mix knob.
    pub mix: ControlColors,
}

impl IntensityPalette {
    /// Compute the palette for the current feedback and mix values.
    pub fn new(feedback: f32, mix: f32) -> Self {
        let intense = intensity(feedback);
        let time = ControlColors {
            active: color_bright(palette::GREEN, intense),
            hovered: color_bright(palette::GREEN_BR, intense),
        };
        Self {
            time,
            feedback: ControlColors {
                active: color_bright(palette::BLUE, intense),
                hovered: color_bright(palette::BLUE_BR, intense),
            },
            cross: ControlColors {
                active: color_bright(palette::RED, intense),
                hovered: color_bright(palette::RED_BR, intense),
            },
            mix: ControlColors {
                active: color_mix(time.active, palette::YELLOW, intense, mix),
                hovered: color_mix(time.hovered, palette::YELLOW_BR, intense, mix),
            },
        }
    }
}

/// Theme colours and fonts for the editor window.
pub struct Theme {
    /// Main window background.
    pub background: Color32,
    /// Title bar background.
    pub title_bg: Color32,
    /// Primary text colour.
    pub text_primary: Color32,
    /// Secondary text colour (values, hints).
    pub text_secondary: Color32,
    /// Knob track behind the value arc.
    pub knob_track: Color32,
    /// Knob body.
    pub knob_body: Color32,
    /// Knob fill when idle.
    pub knob_idle: Color32,
    /// Host UI scale factor.
    pub scale: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self::with_scale(1.0)
    }
}

impl Theme {
    /// Theme for the given host scale factor.
    pub fn with_scale(scale: f32) -> Self {
        Self {
            background: Color32::from(Hsva::new(CHROME_HUE, 0.64, 0.10, 1.0)),
            title_bg: Color32::from(Hsva::new(CHROME_HUE, 0.64, 0.40, 1.0)),
            text_primary: Color32::from_rgb(230, 225, 228),
            text_secondary: Color32::from_rgb(160, 150, 155),
            knob_track: Color32::from_rgb(50, 40, 46),
            knob_body: Color32::from_rgb(62, 50, 58),
            knob_idle: Color32::from_rgb(120, 110, 116),
            scale: if scale.is_finite() && scale > 0.0 { scale } else { 1.0 },
        }
    }

    /// Body font (knob labels and values).
    pub fn body_font(&self) -> FontId {
        FontId::new(BODY_FONT_SIZE * self.scale, FontFamily::Monospace)
    }

    /// Title bar font.
    pub fn title_font(&self) -> FontId {
        FontId::new(TITLE_FONT_SIZE * self.scale, FontFamily::Monospace)
    }

    /// Apply the theme to an egui context.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();

        // Dark visuals as base
        let mut visuals = Visuals::dark();

        visuals.window_fill = self.background;
        visuals.panel_fill = self.background;
        visuals.extreme_bg_color = self.background;

        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_secondary);
        visuals.widgets.inactive.bg_fill = self.knob_body;
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, self.text_primary);
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.5, self.text_primary);
        visuals.widgets.active.fg_stroke = Stroke::new(2.0, self.text_primary);

        visuals.override_text_color = Some(self.text_primary);

        style.visuals = visuals;

        // Two font sizes: body for widgets, heading for the title bar.
        style.text_styles.insert(TextStyle::Body, self.body_font());
        style.text_styles.insert(TextStyle::Button, self.body_font());
        style.text_styles.insert(TextStyle::Monospace, self.body_font());
        style.text_styles.insert(TextStyle::Heading, self.title_font());
        style.text_styles.insert(
            TextStyle::Small,
            FontId::new(BODY_FONT_SIZE * 0.75 * self.scale, FontFamily::Monospace),
        );

        style.spacing.item_spacing = egui::vec2(8.0 * self.scale, 6.0 * self.scale);
        style.spacing.window_margin = egui::Margin::same(0);

        ctx.set_style(style);
    }
}
