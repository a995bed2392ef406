// SPDX-License-Identifier: GPL-3.0-only

//! Camera page: takes a picture through the injected provider

use crate::backends::camera::{
    AcquireResult, CameraOptions, CameraProvider, DestinationType, EncodingType, ImageResult,
    MediaType,
};
use crate::constants::CAMERA_PAGE_QUALITY;
use std::sync::Arc;
use tracing::{info, warn};

/// Consumer of the camera capability
///
/// Holds the provider it was given at construction and the last picture it
/// rendered.
pub struct CameraPage {
    camera: Arc<dyn CameraProvider>,
    options: CameraOptions,
    image: Option<String>,
}

impl CameraPage {
    pub fn new(camera: Arc<dyn CameraProvider>) -> Self {
        Self::with_options(camera, Self::default_options())
    }

    pub fn with_options(camera: Arc<dyn CameraProvider>, options: CameraOptions) -> Self {
        Self {
            camera,
            options,
            image: None,
        }
    }

    /// Full-quality JPEG returned inline
    pub fn default_options() -> CameraOptions {
        CameraOptions {
            quality: CAMERA_PAGE_QUALITY,
            destination_type: DestinationType::DataUrl,
            encoding_type: EncodingType::Jpeg,
            media_type: MediaType::Picture,
            ..Default::default()
        }
    }

    /// Last rendered image source (data URL or URI)
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// Acquire a picture and keep its renderable source
    ///
    /// Failures are handed back untouched and leave the previous image in place.
    pub async fn take_picture(&mut self) -> AcquireResult<ImageResult> {
        let result = self
            .camera
            .acquire_image(&self.options)
            .await
            .inspect_err(|e| {
                warn!(error = %e, provider = %self.camera.kind(), "Picture not taken");
            })?;

        let source = result.display_source();
        info!(
            provider = %self.camera.kind(),
            by_reference = result.is_uri(),
            len = source.len(),
            "Picture taken"
        );
        self.image = Some(source);
        Ok(result)
    }

    /// Let the provider drop intermediate files
    pub async fn release(&self) -> AcquireResult<()> {
        self.camera.cleanup().await
    }
}
