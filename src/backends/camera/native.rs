// SPDX-License-Identifier: GPL-3.0-only

//! Host-backed camera provider
//!
//! The actual capture or library selection happens behind a [`HostBridge`],
//! which is opaque to this module. Only the bridge knows what was picked, so
//! it decides between an inline payload and a file reference. The provider
//! passes that answer through and remembers intermediate files so
//! [`CameraProvider::cleanup`] can remove them later.

use super::CameraProvider;
use super::types::{AcquireResult, CameraOptions, ImageResult, ProviderKind};
use crate::errors::{AcquisitionFailed, BridgeError};
use async_trait::async_trait;
use std::sync::{Mutex, PoisonError};
use tracing::{debug, info, warn};

/// Call surface into the host platform
///
/// `get_picture` may show host UI and write temporary files. It answers with
/// [`ImageResult::Base64`] only for still pictures requested as
/// [`DataUrl`](super::types::DestinationType::DataUrl); videos always come
/// back as [`ImageResult::Uri`].
#[async_trait]
pub trait HostBridge: Send + Sync {
    async fn get_picture(&self, options: &CameraOptions) -> Result<ImageResult, BridgeError>;

    /// Delete an intermediate file previously returned by `get_picture`
    async fn remove_file(&self, uri: &str) -> Result<(), BridgeError>;

    /// Bridge name for logging
    fn name(&self) -> &'static str;
}

/// Camera provider that forwards to a host bridge
pub struct NativeCamera {
    bridge: Box<dyn HostBridge>,
    /// URIs of capture files waiting for cleanup
    pending: Mutex<Vec<String>>,
}

impl NativeCamera {
    pub fn new(bridge: Box<dyn HostBridge>) -> Self {
        info!(bridge = bridge.name(), "Creating native camera provider");
        Self {
            bridge,
            pending: Mutex::new(Vec::new()),
        }
    }

    /// Number of intermediate files a `cleanup` call would remove
    pub fn pending_cleanup(&self) -> usize {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

#[async_trait]
impl CameraProvider for NativeCamera {
    async fn acquire_image(&self, options: &CameraOptions) -> AcquireResult<ImageResult> {
        debug!(
            source = %options.source_type,
            destination = ?options.destination_type,
            media = ?options.media_type,
            "Requesting picture from host"
        );

        let result = self.bridge.get_picture(options).await.map_err(|e| {
            warn!(error = %e, bridge = self.bridge.name(), "Host bridge rejected acquisition");
            AcquisitionFailed::from(e)
        })?;

        match &result {
            ImageResult::Uri(uri) if options.leaves_intermediate_file() => {
                self.pending
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .push(uri.clone());
            }
            _ => {}
        }

        Ok(result)
    }

    async fn cleanup(&self) -> AcquireResult<()> {
        let pending = std::mem::take(
            &mut *self
                .pending
                .lock()
                .unwrap_or_else(PoisonError::into_inner),
        );
        if pending.is_empty() {
            return Ok(());
        }

        info!(count = pending.len(), "Removing intermediate capture files");

        let mut failed = Vec::new();
        let mut first_error = None;
        for uri in pending {
            if let Err(e) = self.bridge.remove_file(&uri).await {
                warn!(uri = %uri, error = %e, "Failed to remove intermediate file");
                first_error.get_or_insert(e);
                failed.push(uri);
            }
        }

        match first_error {
            None => Ok(()),
            Some(e) => {
                // Keep what could not be removed so a later cleanup retries it
                self.pending
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .extend(failed);
                Err(e.into())
            }
        }
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::Native
    }
}

impl std::fmt::Debug for NativeCamera {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeCamera")
            .field("bridge", &self.bridge.name())
            .field("pending", &self.pending_cleanup())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::camera::types::{
        DestinationType, EncodingType, MediaType, PictureSourceType,
    };
    use std::sync::Arc;

    /// Bridge that answers from a script and records removals
    #[derive(Default)]
    struct ScriptedBridge {
        answer: Option<Result<ImageResult, BridgeError>>,
        fail_removal: bool,
        removed: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl HostBridge for ScriptedBridge {
        async fn get_picture(&self, _options: &CameraOptions) -> Result<ImageResult, BridgeError> {
            self.answer
                .clone()
                .unwrap_or_else(|| Ok(ImageResult::Uri("file:///tmp/capture.jpg".to_string())))
        }

        async fn remove_file(&self, uri: &str) -> Result<(), BridgeError> {
            if self.fail_removal {
                return Err(BridgeError::Io("busy".into()));
            }
            self.removed.lock().unwrap().push(uri.to_string());
            Ok(())
        }

        fn name(&self) -> &'static str {
            "scripted"
        }
    }

    #[tokio::test]
    async fn test_camera_file_uri_is_cleaned_up() {
        let removed = Arc::new(Mutex::new(Vec::new()));
        let camera = NativeCamera::new(Box::new(ScriptedBridge {
            removed: removed.clone(),
            ..Default::default()
        }));

        let result = camera.acquire_image(&CameraOptions::default()).await.unwrap();
        assert_eq!(result, ImageResult::Uri("file:///tmp/capture.jpg".into()));
        assert_eq!(camera.pending_cleanup(), 1);

        camera.cleanup().await.unwrap();
        assert_eq!(camera.pending_cleanup(), 0);
        assert_eq!(*removed.lock().unwrap(), vec!["file:///tmp/capture.jpg"]);

        // Nothing left, still succeeds
        camera.cleanup().await.unwrap();
        assert_eq!(removed.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_library_selection_not_tracked() {
        let camera = NativeCamera::new(Box::new(ScriptedBridge::default()));
        let options = CameraOptions {
            source_type: PictureSourceType::PhotoLibrary,
            ..Default::default()
        };

        camera.acquire_image(&options).await.unwrap();
        assert_eq!(camera.pending_cleanup(), 0);
    }

    #[tokio::test]
    async fn test_data_url_returns_payload() {
        let camera = NativeCamera::new(Box::new(ScriptedBridge {
            answer: Some(Ok(ImageResult::Base64 {
                data: "/9j/AAAA".into(),
                encoding: EncodingType::Jpeg,
            })),
            ..Default::default()
        }));
        let options = CameraOptions {
            destination_type: DestinationType::DataUrl,
            ..Default::default()
        };

        let result = camera.acquire_image(&options).await.unwrap();
        assert_eq!(result.as_str(), "/9j/AAAA");
        assert!(!result.is_uri());
        assert_eq!(camera.pending_cleanup(), 0);
    }

    #[tokio::test]
    async fn test_bridge_decides_reference_for_any_media() {
        // The options allow inline data, but the host picked a video
        let camera = NativeCamera::new(Box::new(ScriptedBridge {
            answer: Some(Ok(ImageResult::Uri("file:///videos/clip.mp4".into()))),
            ..Default::default()
        }));
        let options = CameraOptions {
            source_type: PictureSourceType::PhotoLibrary,
            media_type: MediaType::AllMedia,
            destination_type: DestinationType::DataUrl,
            ..Default::default()
        };

        let result = camera.acquire_image(&options).await.unwrap();
        assert_eq!(result, ImageResult::Uri("file:///videos/clip.mp4".into()));
        assert_eq!(camera.pending_cleanup(), 0);
    }

    #[tokio::test]
    async fn test_bridge_failure_surfaces() {
        let camera = NativeCamera::new(Box::new(ScriptedBridge {
            answer: Some(Err(BridgeError::Cancelled)),
            ..Default::default()
        }));

        let err = camera
            .acquire_image(&CameraOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err.reason, "Cancelled by user");
        assert_eq!(camera.pending_cleanup(), 0);
    }

    #[tokio::test]
    async fn test_failed_removal_stays_pending() {
        let camera = NativeCamera::new(Box::new(ScriptedBridge {
            fail_removal: true,
            ..Default::default()
        }));

        camera.acquire_image(&CameraOptions::default()).await.unwrap();
        assert!(camera.cleanup().await.is_err());
        assert_eq!(camera.pending_cleanup(), 1);
    }
}
