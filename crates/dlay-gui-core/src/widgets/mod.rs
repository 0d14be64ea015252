//! Custom widgets for the delay editor.

mod knob;
mod toggle;

pub use knob::Knob;
pub use toggle::SyncToggle;
