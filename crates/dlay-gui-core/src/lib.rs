//! Editor components for the DLAY stereo delay.
//!
//! This crate provides the egui editor that mirrors the delay's parameters
//! as knobs and a toggle, the [`ParamBridge`] trait that carries user edits
//! back to the host's parameter store, and the feedback-driven colour
//! palette. It is host-agnostic: the standalone app (`dlay-gui`) and any
//! plugin wrapper drive the same [`DelayEditor`].
//!
//! # Modules
//!
//! - [`param_bridge`]: Host parameter store interface with edit transactions
//! - [`shadow`]: Local copies of the host's parameter values
//! - [`gesture`]: Maps widget interaction to edit transactions
//! - [`theme`]: Window styling, fonts, and the intensity palette
//! - [`widgets`]: Rotary knob and sync toggle
//! - [`editor`]: The per-frame editor layout

pub mod editor;
pub mod gesture;
pub mod param_bridge;
pub mod shadow;
pub mod theme;
pub mod widgets;

pub use editor::{ControlResponses, DEFAULT_HEIGHT, DEFAULT_WIDTH, DelayEditor};
pub use param_bridge::{ParamBridge, ParamIndex};
pub use shadow::ParamShadow;
pub use theme::{ControlColors, IntensityPalette, Theme};
pub use widgets::{Knob, SyncToggle};
