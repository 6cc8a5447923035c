use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("settings I/O failed at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("settings serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("settings store lock poisoned")]
    Poisoned,
}

/// Rejections of the parental-control PIN protocol. The gate state is left
/// untouched whenever one of these is returned.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum GateError {
    #[error("PIN must be exactly 4 digits")]
    InvalidPinFormat,

    #[error("PINs did not match; rating unchanged")]
    PinMismatch,

    #[error("incorrect PIN; state unchanged")]
    IncorrectPin,

    #[error("no parental PIN set; raise the rating beyond the cap once to create one")]
    PinNotSet,

    #[error("cancelled; state unchanged")]
    Cancelled,
}
