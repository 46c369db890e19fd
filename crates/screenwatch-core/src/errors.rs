use thiserror::Error;

use crate::types::Resolution;

#[derive(Error, Debug)]
pub enum ScreenWatchError {
    #[error("Configuration invalid: {reason}")]
    ConfigurationInvalid { reason: String },
}

#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("No monitor available to capture")]
    NoMonitor,

    #[error("Monitor enumeration failed: {reason}")]
    EnumerationFailed { reason: String },

    #[error("Screen capture failed: {reason}")]
    CaptureFailed { reason: String },

    #[error("Captured an empty {0} image")]
    EmptyFrame(Resolution),

    #[error("Capture task aborted: {reason}")]
    TaskAborted { reason: String },
}
