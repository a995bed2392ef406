// SPDX-License-Identifier: MPL-2.0

//! Camera capability abstraction
//!
//! Consumers talk to a single [`CameraProvider`] chosen once at startup.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────┐
//! │  Consumers (pages)  │
//! └──────────┬──────────┘
//!            │  Arc<dyn CameraProvider>
//!            ▼
//! ┌─────────────────────┐
//! │  ProviderSelector   │  ← origin probe, evaluated once
//! └──────────┬──────────┘
//!            │
//!      ┌─────┴──────┐
//!      ▼            ▼
//! ┌─────────┐  ┌──────────┐
//! │ StandIn │  │  Native  │──► HostBridge (opaque host call)
//! └─────────┘  └──────────┘
//! ```
//!
//! Only one acquisition may be in flight per provider. This is not
//! enforced; a second concurrent call behaves however the host does.

pub mod directory_bridge;
pub mod native;
pub mod selector;
pub mod stand_in;
pub mod types;

pub use directory_bridge::DirectoryBridge;
pub use native::{HostBridge, NativeCamera};
pub use selector::{HostEnvironment, bind_provider};
pub use stand_in::StandInCamera;
pub use types::*;

use async_trait::async_trait;

/// Contract shared by every camera implementation
///
/// Each call completes exactly once, with a value or with
/// [`AcquisitionFailed`](crate::errors::AcquisitionFailed). Callers that need a
/// deadline race the returned future against a timer themselves.
#[async_trait]
pub trait CameraProvider: Send + Sync {
    /// Take a picture or pick one from the library
    ///
    /// Returns base64 data for [`DestinationType::DataUrl`] and a URI otherwise.
    /// Video selections are always returned as a URI.
    async fn acquire_image(&self, options: &CameraOptions) -> AcquireResult<ImageResult>;

    /// Remove intermediate files left by camera captures returned as file URIs
    ///
    /// Succeeds when there is nothing to remove.
    async fn cleanup(&self) -> AcquireResult<()>;

    /// Which implementation this is
    fn kind(&self) -> ProviderKind;
}
