// SPDX-License-Identifier: MPL-2.0

//! Camera Shell - device capabilities behind substitutable providers
//!
//! The crate exposes a camera capability whose implementation is chosen once
//! at startup: a host-backed camera inside a device shell, or a deterministic
//! stand-in when the pages are served to a plain browser. A small key-value
//! store keeps a profile record.
//!
//! # Architecture
//!
//! - [`backends`]: Camera capability contract, stand-in and host-backed providers
//! - [`app`]: Consumers of the capabilities (camera and profile pages)
//! - [`storage`]: Key-value storage collaborator
//! - [`config`]: User configuration handling
//!
//! # Example
//!
//! ```no_run
//! # async fn demo() -> Result<(), camera_shell::errors::AppError> {
//! use camera_shell::app::CameraPage;
//! use camera_shell::backends::camera::{HostEnvironment, bind_provider};
//! use camera_shell::config::Config;
//!
//! let config = Config::load()?;
//! let camera = bind_provider(&HostEnvironment::detect(&config), &config);
//! let mut page = CameraPage::new(camera);
//! page.take_picture().await?;
//! println!("{}", page.image().unwrap_or_default());
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod backends;
pub mod config;
pub mod constants;
pub mod errors;
pub mod storage;

// Re-export commonly used types
pub use backends::camera::{CameraOptions, CameraProvider, ImageResult, ProviderKind};
pub use config::Config;
pub use errors::{AcquisitionFailed, AppError, AppResult};
