// SPDX-License-Identifier: GPL-3.0-only

//! Fixed-response camera for hosts without a camera bridge
//!
//! Every acquisition returns the same embedded JPEG as base64, whatever the
//! options say, and nothing ever fails. Code that only handles the success
//! path keeps working in a browser; failure paths are simply never exercised.

use super::CameraProvider;
use super::types::{AcquireResult, CameraOptions, EncodingType, ImageResult, ProviderKind};
use crate::constants::STAND_IN_PHOTO_BASE64;
use async_trait::async_trait;
use tracing::debug;

/// Deterministic stand-in camera
#[derive(Debug, Clone, Copy, Default)]
pub struct StandInCamera;

impl StandInCamera {
    pub fn new() -> Self {
        Self
    }

    /// The payload every acquisition resolves with
    pub fn payload() -> &'static str {
        STAND_IN_PHOTO_BASE64
    }
}

#[async_trait]
impl CameraProvider for StandInCamera {
    async fn acquire_image(&self, options: &CameraOptions) -> AcquireResult<ImageResult> {
        // Options are ignored on purpose
        debug!(source = %options.source_type, "Stand-in camera returning fixed photo");
        Ok(ImageResult::Base64 {
            data: Self::payload().to_string(),
            encoding: EncodingType::Jpeg,
        })
    }

    async fn cleanup(&self) -> AcquireResult<()> {
        Ok(())
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::StandIn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::camera::types::{DestinationType, PictureSourceType};

    #[tokio::test]
    async fn test_cleanup_before_any_acquisition() {
        let camera = StandInCamera::new();
        assert!(camera.cleanup().await.is_ok());
        assert!(camera.cleanup().await.is_ok());
    }

    #[tokio::test]
    async fn test_options_do_not_change_result() {
        let camera = StandInCamera::new();
        let png_library = CameraOptions {
            source_type: PictureSourceType::PhotoLibrary,
            encoding_type: EncodingType::Png,
            destination_type: DestinationType::NativeUri,
            quality: 0,
            ..Default::default()
        };

        let first = camera.acquire_image(&CameraOptions::default()).await.unwrap();
        let second = camera.acquire_image(&png_library).await.unwrap();

        assert_eq!(first, second);
        assert!(!second.is_uri());
        // Labelled by what the payload is, not by what was asked for
        assert!(second.display_source().starts_with("data:image/jpeg;base64,"));
    }

    #[test]
    fn test_kind() {
        assert_eq!(StandInCamera.kind(), ProviderKind::StandIn);
    }
}
