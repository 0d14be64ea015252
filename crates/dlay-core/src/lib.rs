//! DLAY Core - parameter model for the DLAY stereo delay editor
//!
//! This crate holds everything about the delay's parameters that does not
//! depend on a GUI toolkit: the descriptor table the editor and host agree
//! on, the tempo-sync ratio enumeration, and the conversions between them.
//!
//! # Parameters
//!
//! | Index | [`DelayParam`]          | Range        | Default |
//! |-------|-------------------------|--------------|---------|
//! | 0     | [`DelayParam::Cross`]     | 0–100 %      | 20 %    |
//! | 1     | [`DelayParam::Feedback`]  | 0–100 %      | 25 %    |
//! | 2     | [`DelayParam::Mix`]       | 0–100 %      | 50 %    |
//! | 3     | [`DelayParam::Time`]      | 50–5000 ms   | 500 ms  |
//! | 4     | [`DelayParam::Sync`]      | off / on     | off     |
//! | 5     | [`DelayParam::SyncRatio`] | 1/6x – 6x    | 1x      |
//!
//! # Sync ratios
//!
//! - [`SyncRatio`] - index into the 13-entry ratio table
//! - [`TimeMode`] - free-running vs. tempo-synced display of the time control
//!
//! # no_std Support
//!
//! Disable the default `std` feature to use the parameter table on targets
//! without an allocator-backed `std`:
//!
//! ```toml
//! [dependencies]
//! dlay-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Example
//!
//! ```rust
//! use dlay_core::{DelayParam, SyncRatio};
//!
//! let time = DelayParam::Time.descriptor();
//! assert_eq!(time.default, 500.0);
//!
//! let ratio = SyncRatio::from_value(DelayParam::SyncRatio.descriptor().default);
//! assert_eq!(ratio.label(), "1x");
//! assert!((ratio.to_ms(120.0) - 500.0).abs() < 0.01);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod param_info;
pub mod params;
pub mod sync;

pub use param_info::{ParamDescriptor, ParamFlags, ParamId, ParamScale, ParamUnit};
pub use params::{DelayParam, PARAM_COUNT};
pub use sync::{SYNC_RATIO_COUNT, SYNC_RATIO_LABELS, SyncRatio, TimeMode};
