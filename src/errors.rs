// SPDX-License-Identifier: MPL-2.0

//! Error types for the camera shell

use std::fmt;

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Main application error type
#[derive(Debug, Clone)]
pub enum AppError {
    /// Camera provider reported a failed acquisition
    Camera(AcquisitionFailed),
    /// Key-value storage errors
    Storage(StorageError),
    /// Configuration errors
    Config(String),
    /// Generic error with message
    Other(String),
}

/// The single failure surfaced by the camera capability contract.
///
/// Cancellation, permission denial and missing hardware are not told apart;
/// the message is whatever the host bridge reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcquisitionFailed {
    pub reason: String,
}

impl AcquisitionFailed {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Errors reported by a host bridge
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    /// User dismissed the picker or camera UI
    Cancelled,
    /// Host refused access to the camera or library
    PermissionDenied,
    /// Nothing to capture or select
    Unavailable(String),
    /// Filesystem failure on the host side
    Io(String),
    /// Anything else the host reports
    Other(String),
}

/// Key-value storage errors
#[derive(Debug, Clone)]
pub enum StorageError {
    /// Reading or writing the backing file failed
    Io(String),
    /// Stored data could not be (de)serialized
    Serialization(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Camera(e) => write!(f, "Camera error: {}", e),
            AppError::Storage(e) => write!(f, "Storage error: {}", e),
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
            AppError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for AcquisitionFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Acquisition failed: {}", self.reason)
    }
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BridgeError::Cancelled => write!(f, "Cancelled by user"),
            BridgeError::PermissionDenied => write!(f, "Permission denied"),
            BridgeError::Unavailable(msg) => write!(f, "Unavailable: {}", msg),
            BridgeError::Io(msg) => write!(f, "I/O error: {}", msg),
            BridgeError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Io(msg) => write!(f, "I/O failure: {}", msg),
            StorageError::Serialization(msg) => write!(f, "Serialization failure: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}
impl std::error::Error for AcquisitionFailed {}
impl std::error::Error for BridgeError {}
impl std::error::Error for StorageError {}

// Conversions from sub-errors to AppError
impl From<AcquisitionFailed> for AppError {
    fn from(err: AcquisitionFailed) -> Self {
        AppError::Camera(err)
    }
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        AppError::Storage(err)
    }
}

// Bridge errors surface unchanged in meaning, only the message survives
impl From<BridgeError> for AcquisitionFailed {
    fn from(err: BridgeError) -> Self {
        AcquisitionFailed::new(err.to_string())
    }
}

impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Other(msg)
    }
}

impl From<&str> for AppError {
    fn from(msg: &str) -> Self {
        AppError::Other(msg.to_string())
    }
}

impl From<std::io::Error> for BridgeError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::PermissionDenied => BridgeError::PermissionDenied,
            _ => BridgeError::Io(err.to_string()),
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serialization(err.to_string())
    }
}
