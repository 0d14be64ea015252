//! The delay editor: title bar plus one row of controls.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ WSTD DLAY                                    │  title_bg
//! ├──────────────────────────────────────────────┤
//! │  (Time)  (Feedback)  (Cross)  (Mix)   o Sync │  background
//! └──────────────────────────────────────────────┘
//! ```
//!
//! The Time knob edits milliseconds while sync is off and the sync ratio
//! while it is on. Knob colours come from an [`IntensityPalette`] rebuilt
//! every frame from the current feedback and mix values.

use crate::gesture::{Gesture, gesture_wrap};
use crate::param_bridge::{ParamBridge, ParamIndex};
use crate::shadow::ParamShadow;
use crate::theme::{ControlColors, IntensityPalette, Theme};
use crate::widgets::{Knob, SyncToggle};
use dlay_core::DelayParam;
use egui::{
    CentralPanel, Context, Frame, Margin, Response, RichText, TextStyle, TopBottomPanel, Ui,
};

/// Editor width in logical pixels at scale 1.
pub const DEFAULT_WIDTH: u32 = 520;
/// Editor height in logical pixels at scale 1.
pub const DEFAULT_HEIGHT: u32 = 260;

/// Title shown in the header bar.
const TITLE: &str = "WSTD DLAY";

/// Host-agnostic delay editor.
///
/// Owns the parameter shadow and the theme. The host calls
/// [`parameter_changed`](Self::parameter_changed) for every value it changes
/// and [`show`](Self::show) once per frame.
pub struct DelayEditor {
    shadow: ParamShadow,
    theme: Theme,
    ctx: Option<Context>,
    /// Parameter the Time knob is dragging, if a drag is open.
    open_time_edit: Option<DelayParam>,
}

impl DelayEditor {
    /// Create an editor at the given host scale factor.
    pub fn new(scale: f32) -> Self {
        Self {
            shadow: ParamShadow::new(),
            theme: Theme::with_scale(scale),
            ctx: None,
            open_time_edit: None,
        }
    }

    /// Install the theme on `ctx` and remember it for repaint requests.
    pub fn setup(&mut self, ctx: &Context) {
        self.theme.apply(ctx);
        self.ctx = Some(ctx.clone());
    }

    /// Change the host scale factor and re-apply the theme.
    pub fn set_scale(&mut self, scale: f32) {
        self.theme = Theme::with_scale(scale);
        if let Some(ctx) = &self.ctx {
            self.theme.apply(ctx);
        }
    }

    /// Window size in logical pixels for the current scale.
    pub fn size(&self) -> egui::Vec2 {
        egui::vec2(DEFAULT_WIDTH as f32, DEFAULT_HEIGHT as f32) * self.theme.scale
    }

    /// Host notification: parameter `index` now holds `value`.
    ///
    /// Updates the shadow and requests a repaint. Returns `false` (and
    /// changes nothing) for an unknown index.
    pub fn parameter_changed(&mut self, index: u32, value: f32) -> bool {
        if !self.shadow.parameter_changed(index, value) {
            tracing::debug!(index, value, "ignoring change for unknown parameter");
            return false;
        }
        if let Some(ctx) = &self.ctx {
            ctx.request_repaint();
        }
        true
    }

    /// Current shadow state.
    pub fn shadow(&self) -> &ParamShadow {
        &self.shadow
    }

    /// Mutable shadow state, for hosts that bulk-load values.
    pub fn shadow_mut(&mut self) -> &mut ParamShadow {
        &mut self.shadow
    }

    /// Current theme.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Draw the whole editor for one frame.
    pub fn show(&mut self, ctx: &Context, bridge: &dyn ParamBridge) {
        let scale = self.theme.scale;
        let title_frame = Frame::new()
            .fill(self.theme.title_bg)
            .inner_margin(Margin::symmetric(margin(12.0, scale), margin(6.0, scale)));
        let body_frame = Frame::new()
            .fill(self.theme.background)
            .inner_margin(Margin::same(margin(16.0, scale)));
        let title_color = self.theme.text_primary;

        TopBottomPanel::top("dlay_title")
            .frame(title_frame)
            .show(ctx, |ui| {
                ui.label(
                    RichText::new(TITLE)
                        .text_style(TextStyle::Heading)
                        .color(title_color),
                );
            });

        CentralPanel::default()
            .frame(body_frame)
            .show(ctx, |ui| {
                self.controls_ui(ui, bridge);
            });
    }

    /// Draw the control row into an existing `Ui`.
    ///
    /// Returns the response of every control, e.g. for hosts that place
    /// tooltips or overlays.
    pub fn controls_ui(&mut self, ui: &mut Ui, bridge: &dyn ParamBridge) -> ControlResponses {
        let palette = IntensityPalette::new(self.shadow.feedback, self.shadow.mix);
        let spacing = 12.0 * self.theme.scale;
        let theme = &self.theme;
        let shadow = &mut self.shadow;
        let open_time_edit = &mut self.open_time_edit;

        ui.horizontal(|ui| {
            let time = time_knob(ui, shadow, theme, bridge, palette.time, open_time_edit);
            ui.add_space(spacing);
            let feedback = param_knob(ui, shadow, theme, bridge, DelayParam::Feedback, "Feedback", palette.feedback);
            ui.add_space(spacing);
            let cross = param_knob(ui, shadow, theme, bridge, DelayParam::Cross, "Cross", palette.cross);
            ui.add_space(spacing);
            let mix = param_knob(ui, shadow, theme, bridge, DelayParam::Mix, "Mix", palette.mix);
            ui.add_space(spacing);

            let sync = ui
                .vertical(|ui| {
                    ui.add_space(spacing * 2.0);
                    sync_toggle(ui, shadow, theme, bridge, palette.time)
                })
                .inner;

            ControlResponses {
                time,
                feedback,
                cross,
                mix,
                sync,
            }
        })
        .inner
    }
}

/// Responses of the editor's controls for one frame.
pub struct ControlResponses {
    /// Time knob (milliseconds or sync ratio).
    pub time: Response,
    /// Feedback knob.
    pub feedback: Response,
    /// Cross knob.
    pub cross: Response,
    /// Mix knob.
    pub mix: Response,
    /// Sync toggle.
    pub sync: Response,
}

impl Default for DelayEditor {
    fn default() -> Self {
        Self::new(1.0)
    }
}

fn margin(px: f32, scale: f32) -> i8 {
    (px * scale).round().clamp(0.0, f32::from(i8::MAX)) as i8
}

/// One knob bound to a shadow parameter, emitting edit transactions.
fn param_knob(
    ui: &mut Ui,
    shadow: &mut ParamShadow,
    theme: &Theme,
    bridge: &dyn ParamBridge,
    param: DelayParam,
    label: &str,
    colors: ControlColors,
) -> Response {
    let mut value = shadow.get(param);
    let response = ui.add(
        Knob::new(&mut value, param.descriptor(), theme)
            .label(label)
            .colors(colors),
    );
    if response.changed() {
        shadow.set(param, value);
    }
    gesture_wrap(&response, bridge, param, value);
    response
}

/// The Time knob, editing `Time` or `SyncRatio` depending on sync.
///
/// Each mode gets its own widget id, so a sync change mid-drag does not hand
/// the drag (or its accumulator) to the other parameter. The parameter with
/// an open drag is latched in `open_edit`. A mode change closes it and ends
/// the pointer drag, so the rest of the gesture edits nothing.
fn time_knob(
    ui: &mut Ui,
    shadow: &mut ParamShadow,
    theme: &Theme,
    bridge: &dyn ParamBridge,
    colors: ControlColors,
    open_edit: &mut Option<DelayParam>,
) -> Response {
    let param = shadow.time_param();
    if let Some(stale) = open_edit.take_if(|open| *open != param) {
        tracing::debug!(param = ?stale, "time mode changed mid-drag, closing edit");
        bridge.edit_parameter(ParamIndex::from(stale), false);
        ui.ctx().stop_dragging();
    }

    let response = ui
        .push_id(param, |ui| param_knob(ui, shadow, theme, bridge, param, "Time", colors))
        .inner;
    if response.drag_started() {
        *open_edit = Some(param);
    }
    if response.drag_stopped() {
        *open_edit = None;
    }
    response
}

/// The sync toggle. Clicks are complete transactions; double-click is just
/// two clicks.
fn sync_toggle(
    ui: &mut Ui,
    shadow: &mut ParamShadow,
    theme: &Theme,
    bridge: &dyn ParamBridge,
    colors: ControlColors,
) -> Response {
    let mut on = shadow.sync;
    let response = ui.add(SyncToggle::new(&mut on, "Sync", theme).colors(colors));
    if response.changed() {
        shadow.sync = on;
    }
    let gesture = Gesture {
        double_clicked: false,
        ..Gesture::from_response(&response)
    };
    if !gesture.is_idle() {
        gesture.emit(bridge, DelayParam::Sync, if on { 1.0 } else { 0.0 });
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::param_bridge::testing::{Call, RecordingBridge};
    use egui::{Event, PointerButton, Pos2, RawInput, Rect, pos2, vec2};

    fn input(events: Vec<Event>) -> RawInput {
        RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, vec2(800.0, 600.0))),
            events,
            ..RawInput::default()
        }
    }

    #[test]
    fn idle_frame_sends_nothing() {
        let ctx = Context::default();
        let bridge = RecordingBridge::default();
        let mut editor = DelayEditor::default();
        editor.setup(&ctx);
        for _ in 0..3 {
            let _ = ctx.run(input(vec![]), |ctx| editor.show(ctx, &bridge));
        }
        assert!(bridge.calls().is_empty());
        assert_eq!(*editor.shadow(), ParamShadow::new());
    }

    #[test]
    fn parameter_changed_updates_shadow() {
        let mut editor = DelayEditor::default();
        assert!(editor.parameter_changed(0, 70.0));
        assert!(editor.parameter_changed(4, 1.0));
        assert!(editor.parameter_changed(5, 2.0));
        assert!(!editor.parameter_changed(42, 1.0));
        assert_eq!(editor.shadow().cross, 70.0);
        assert_eq!(editor.shadow().time_param(), DelayParam::SyncRatio);
        assert_eq!(editor.shadow().sync_ratio.label(), "1/4x");
    }

    #[test]
    fn scale_sets_window_size() {
        let editor = DelayEditor::new(1.5);
        assert_eq!(editor.size(), vec2(780.0, 390.0));
        assert_eq!(margin(16.0, 1000.0), i8::MAX);
    }

    /// Control rects from the last frame, in row order.
    #[derive(Clone, Copy)]
    struct Rects {
        time: Rect,
        feedback: Rect,
        sync: Rect,
    }

    /// Headless frames of `controls_ui` with a clock, for pointer gestures.
    struct Pointer {
        ctx: Context,
        time: f64,
    }

    impl Pointer {
        fn new() -> Self {
            Self {
                ctx: Context::default(),
                time: 0.0,
            }
        }

        fn frame(
            &mut self,
            editor: &mut DelayEditor,
            bridge: &RecordingBridge,
            events: Vec<Event>,
        ) -> Rects {
            self.time += 0.05;
            let raw = RawInput {
                time: Some(self.time),
                ..input(events)
            };
            let mut rects = None;
            let _ = self.ctx.run(raw, |ctx| {
                CentralPanel::default().show(ctx, |ui| {
                    let r = editor.controls_ui(ui, bridge);
                    rects = Some(Rects {
                        time: r.time.rect,
                        feedback: r.feedback.rect,
                        sync: r.sync.rect,
                    });
                });
            });
            rects.unwrap()
        }

        fn press(
            &mut self,
            editor: &mut DelayEditor,
            bridge: &RecordingBridge,
            pos: Pos2,
            pressed: bool,
        ) {
            let button = Event::PointerButton {
                pos,
                button: PointerButton::Primary,
                pressed,
                modifiers: Default::default(),
            };
            self.frame(editor, bridge, vec![Event::PointerMoved(pos), button]);
        }

        fn click(&mut self, editor: &mut DelayEditor, bridge: &RecordingBridge, pos: Pos2) {
            self.press(editor, bridge, pos, true);
            self.press(editor, bridge, pos, false);
        }

        fn move_to(&mut self, editor: &mut DelayEditor, bridge: &RecordingBridge, pos: Pos2) {
            self.frame(editor, bridge, vec![Event::PointerMoved(pos)]);
        }
    }

    fn count(calls: &[Call], f: impl Fn(&Call) -> bool) -> usize {
        calls.iter().filter(|c| f(c)).count()
    }

    #[test]
    fn dragging_a_knob_is_one_transaction() {
        let bridge = RecordingBridge::default();
        let mut editor = DelayEditor::default();
        let mut pointer = Pointer::new();

        let start = pointer.frame(&mut editor, &bridge, vec![]).feedback.center();
        pointer.press(&mut editor, &bridge, start, true);
        pointer.move_to(&mut editor, &bridge, pos2(start.x, start.y - 20.0));
        let further = pos2(start.x, start.y - 40.0);
        pointer.move_to(&mut editor, &bridge, further);
        pointer.press(&mut editor, &bridge, further, false);

        let calls = bridge.calls();
        assert_eq!(calls.first(), Some(&Call::Begin(1)), "{calls:?}");
        assert_eq!(calls.last(), Some(&Call::End(1)), "{calls:?}");
        assert!(calls.iter().any(|c| matches!(c, Call::Set(1, _))));
        assert_eq!(count(&calls, |c| matches!(c, Call::Begin(_))), 1);
        assert!(editor.shadow().feedback > 25.0);
    }

    #[test]
    fn sync_change_mid_drag_closes_the_time_edit() {
        let bridge = RecordingBridge::default();
        let mut editor = DelayEditor::default();
        let mut pointer = Pointer::new();

        let start = pointer.frame(&mut editor, &bridge, vec![]).time.center();
        pointer.press(&mut editor, &bridge, start, true);
        pointer.move_to(&mut editor, &bridge, pos2(start.x, start.y - 20.0));
        pointer.move_to(&mut editor, &bridge, pos2(start.x, start.y - 40.0));

        // Host automation turns sync on while the knob is held.
        assert!(editor.parameter_changed(DelayParam::Sync.index(), 1.0));
        pointer.move_to(&mut editor, &bridge, pos2(start.x, start.y - 60.0));
        let end = pos2(start.x, start.y - 80.0);
        pointer.move_to(&mut editor, &bridge, end);
        pointer.press(&mut editor, &bridge, end, false);

        let calls = bridge.calls();
        assert_eq!(calls.first(), Some(&Call::Begin(3)), "{calls:?}");
        assert_eq!(calls.last(), Some(&Call::End(3)), "{calls:?}");
        assert_eq!(count(&calls, |c| matches!(c, Call::End(_))), 1, "{calls:?}");
        assert!(
            !calls.iter().any(|c| matches!(c, Call::Begin(5) | Call::Set(5, _) | Call::End(5))),
            "{calls:?}"
        );
        assert_eq!(editor.shadow().sync_ratio, ParamShadow::new().sync_ratio);
        assert_eq!(editor.open_time_edit, None);
    }

    #[test]
    fn sync_toggled_back_mid_drag_does_not_resume_the_edit() {
        let bridge = RecordingBridge::default();
        let mut editor = DelayEditor::default();
        let mut pointer = Pointer::new();

        let start = pointer.frame(&mut editor, &bridge, vec![]).time.center();
        pointer.press(&mut editor, &bridge, start, true);
        pointer.move_to(&mut editor, &bridge, pos2(start.x, start.y - 20.0));
        pointer.move_to(&mut editor, &bridge, pos2(start.x, start.y - 40.0));

        editor.parameter_changed(DelayParam::Sync.index(), 1.0);
        pointer.move_to(&mut editor, &bridge, pos2(start.x, start.y - 50.0));
        editor.parameter_changed(DelayParam::Sync.index(), 0.0);
        let time_after_close = editor.shadow().time;
        let end = pos2(start.x, start.y - 80.0);
        pointer.move_to(&mut editor, &bridge, end);
        pointer.press(&mut editor, &bridge, end, false);

        let calls = bridge.calls();
        assert_eq!(calls.last(), Some(&Call::End(3)), "{calls:?}");
        assert_eq!(count(&calls, |c| matches!(c, Call::Begin(_))), 1, "{calls:?}");
        assert_eq!(count(&calls, |c| matches!(c, Call::End(_))), 1, "{calls:?}");
        assert_eq!(editor.shadow().time, time_after_close);
    }

    #[test]
    fn clicking_sync_is_one_transaction() {
        let bridge = RecordingBridge::default();
        let mut editor = DelayEditor::default();
        let mut pointer = Pointer::new();

        let toggle = pointer.frame(&mut editor, &bridge, vec![]).sync.center();
        pointer.click(&mut editor, &bridge, toggle);

        assert_eq!(
            bridge.calls(),
            vec![Call::Begin(4), Call::Set(4, 1.0), Call::End(4)]
        );
        assert_eq!(editor.shadow().time_param(), DelayParam::SyncRatio);
        let expected = ParamShadow {
            sync: true,
            ..ParamShadow::new()
        };
        assert_eq!(*editor.shadow(), expected);
    }

    #[test]
    fn double_clicking_a_knob_resets_it() {
        let bridge = RecordingBridge::default();
        let mut editor = DelayEditor::default();
        let mut pointer = Pointer::new();
        assert!(editor.parameter_changed(DelayParam::Feedback.index(), 70.0));

        let knob = pointer.frame(&mut editor, &bridge, vec![]).feedback.center();
        pointer.click(&mut editor, &bridge, knob);
        pointer.click(&mut editor, &bridge, knob);

        assert_eq!(
            bridge.calls(),
            vec![Call::Begin(1), Call::Set(1, 25.0), Call::End(1)]
        );
        assert_eq!(*editor.shadow(), ParamShadow::new());
    }
}
