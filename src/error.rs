//! Errors for the surfaces around the simulation
//!
//! The simulation itself never fails; degenerate numbers are replaced with
//! fallbacks inside `sim`. These cover frame scheduling, settings and JSON.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// `start` was called while a frame registration is outstanding
    #[error("frame loop is already running")]
    AlreadyRunning,

    /// The host refused to schedule a frame
    #[error("frame host error: {0}")]
    Host(String),

    #[error("failed to read settings: {0}")]
    SettingsIo(#[from] std::io::Error),

    /// Settings or snapshot (de)serialization
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
