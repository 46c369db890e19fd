//! screenwatch-core — frames, frame comparison, and the baseline monitor.
//!
//! ```text
//! capture ──► Frame ──► Monitor::observe ──► Comparison ──► similarity %
//!                          │
//!                          └── baseline (previous Frame)
//! ```

pub mod compare;
pub mod config;
pub mod errors;
pub mod frame;
pub mod monitor;
pub mod types;

pub use compare::{compare_frames, Comparison};
pub use config::MonitorConfig;
pub use errors::{CaptureError, ScreenWatchError};
pub use frame::Frame;
pub use monitor::Monitor;
pub use types::*;
