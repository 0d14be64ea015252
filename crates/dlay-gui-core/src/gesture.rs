//! Edit-transaction protocol for widget interactions.
//!
//! Every control maps its egui [`Response`] to a [`Gesture`] and hands it to
//! [`Gesture::emit`], which produces the host calls:
//!
//! - Double-click: `begin → set(default) → end`
//! - Drag: `begin` on drag start, `set(value)` on each change, `end` on drag stop
//! - Click (toggles): `begin → set(value) → end`
//!
//! Each transaction is opened and closed on the parameter that was actually
//! edited, so one control's release never closes another control's edit.

use crate::param_bridge::{ParamBridge, ParamIndex};
use dlay_core::DelayParam;
use egui::Response;

/// What happened to a control during one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Gesture {
    /// The control was double-clicked (reset to default).
    pub double_clicked: bool,
    /// A drag began this frame.
    pub drag_started: bool,
    /// The control's value changed this frame.
    pub changed: bool,
    /// A drag ended this frame.
    pub drag_stopped: bool,
    /// The control was clicked without dragging (toggles).
    pub clicked: bool,
}

impl Gesture {
    /// Read the gesture from a widget response.
    pub fn from_response(response: &Response) -> Self {
        Self {
            double_clicked: response.double_clicked(),
            drag_started: response.drag_started(),
            changed: response.changed(),
            drag_stopped: response.drag_stopped(),
            clicked: response.clicked(),
        }
    }

    /// Whether the gesture produces any host calls.
    pub fn is_idle(&self) -> bool {
        !(self.double_clicked || self.drag_started || self.changed || self.drag_stopped)
    }

    /// Send the host calls for this gesture.
    ///
    /// `value` is the control's plain value after this frame's interaction.
    pub fn emit(self, bridge: &dyn ParamBridge, param: DelayParam, value: f32) {
        let index = ParamIndex::from(param);
        if self.double_clicked {
            let default = param.descriptor().default;
            tracing::debug!(param = ?param, default, "reset to default");
            bridge.edit_parameter(index, true);
            bridge.set_parameter_value(index, default);
            bridge.edit_parameter(index, false);
            return;
        }

        if self.drag_started {
            tracing::debug!(param = ?param, "edit begin");
            bridge.edit_parameter(index, true);
        }
        if self.changed {
            if self.clicked && !self.drag_started {
                // Click-style change (toggle): a complete transaction.
                bridge.edit_parameter(index, true);
                bridge.set_parameter_value(index, value);
                bridge.edit_parameter(index, false);
            } else {
                bridge.set_parameter_value(index, value);
            }
        }
        if self.drag_stopped {
            tracing::debug!(param = ?param, value, "edit end");
            bridge.edit_parameter(index, false);
        }
    }
}

/// Apply the edit protocol to a widget response.
///
/// Convenience wrapper over [`Gesture::from_response`] and [`Gesture::emit`].
pub fn gesture_wrap(response: &Response, bridge: &dyn ParamBridge, param: DelayParam, value: f32) {
    let gesture = Gesture::from_response(response);
    if !gesture.is_idle() {
        gesture.emit(bridge, param, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::param_bridge::testing::{Call, RecordingBridge};

    #[test]
    fn double_click_resets_every_param_to_default() {
        let expected = [
            (DelayParam::Cross, 20.0),
            (DelayParam::Feedback, 25.0),
            (DelayParam::Mix, 50.0),
            (DelayParam::Time, 500.0),
            (DelayParam::SyncRatio, 6.0),
        ];
        for (param, default) in expected {
            let bridge = RecordingBridge::default();
            let gesture = Gesture {
                double_clicked: true,
                changed: true,
                ..Gesture::default()
            };
            gesture.emit(&bridge, param, 77.0);
            let i = param.index();
            assert_eq!(
                bridge.calls(),
                vec![Call::Begin(i), Call::Set(i, default), Call::End(i)],
                "{param:?}"
            );
        }
    }

    #[test]
    fn drag_streams_values_inside_one_transaction() {
        let bridge = RecordingBridge::default();
        let p = DelayParam::Feedback;

        Gesture {
            drag_started: true,
            changed: true,
            ..Gesture::default()
        }
        .emit(&bridge, p, 30.0);
        Gesture {
            changed: true,
            ..Gesture::default()
        }
        .emit(&bridge, p, 35.0);
        Gesture {
            drag_stopped: true,
            ..Gesture::default()
        }
        .emit(&bridge, p, 35.0);

        assert_eq!(
            bridge.calls(),
            vec![Call::Begin(1), Call::Set(1, 30.0), Call::Set(1, 35.0), Call::End(1)]
        );
    }

    #[test]
    fn click_change_is_a_complete_transaction() {
        let bridge = RecordingBridge::default();
        Gesture {
            clicked: true,
            changed: true,
            ..Gesture::default()
        }
        .emit(&bridge, DelayParam::Sync, 1.0);
        assert_eq!(
            bridge.calls(),
            vec![Call::Begin(4), Call::Set(4, 1.0), Call::End(4)]
        );
    }

    #[test]
    fn drag_stop_closes_only_its_own_param() {
        let bridge = RecordingBridge::default();
        Gesture {
            drag_stopped: true,
            ..Gesture::default()
        }
        .emit(&bridge, DelayParam::Mix, 60.0);
        assert_eq!(bridge.calls(), vec![Call::End(2)]);
    }

    #[test]
    fn idle_gesture_emits_nothing() {
        assert!(Gesture::default().is_idle());
        let bridge = RecordingBridge::default();
        Gesture::default().emit(&bridge, DelayParam::Time, 500.0);
        assert!(bridge.calls().is_empty());
    }
}
