//! DLAY standalone - the delay editor in its own window.
//!
//! Without a plugin host, this crate supplies the host side itself: a
//! [`HostParamStore`] that receives the editor's edit transactions, a
//! preset menu, and an eframe app that forwards store changes back into the
//! editor.

pub mod app;
pub mod host_store;
pub mod preset_manager;

pub use app::{AppConfig, DlayApp, window_size};
pub use host_store::{EditEvent, HostParamStore};
pub use preset_manager::{PresetEntry, PresetManager, PresetSource};
