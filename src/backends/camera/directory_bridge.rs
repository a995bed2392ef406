// SPDX-License-Identifier: GPL-3.0-only

//! Filesystem-backed host bridge
//!
//! Emulates a device host on a desktop: the host's camera drops fresh
//! captures into `capture_dir`, and the photo library and saved album are
//! plain directories. Camera captures returned by file URI are copied into
//! `temp_dir` first; those copies are the intermediate files that cleanup
//! removes. Pictures requested as data URLs are read inline, but a picked
//! video is always returned by reference.

use super::native::HostBridge;
use super::types::{
    CameraOptions, DestinationType, EncodingType, ImageResult, MediaType, PictureSourceType,
};
use crate::config::Config;
use crate::constants::{
    FILE_URI_SCHEME, JPEG_EXTENSIONS, NATIVE_URI_SCHEME, PNG_EXTENSIONS, VIDEO_EXTENSIONS,
};
use crate::errors::BridgeError;
use async_trait::async_trait;
use base64::Engine;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info};

/// Media classes a directory entry can belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MediaClass {
    Jpeg,
    Png,
    Video,
}

impl MediaClass {
    fn of(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_string_lossy().to_lowercase();
        if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
            return Some(MediaClass::Video);
        }
        match image::ImageFormat::from_extension(&ext)? {
            image::ImageFormat::Jpeg if JPEG_EXTENSIONS.contains(&ext.as_str()) => {
                Some(MediaClass::Jpeg)
            }
            image::ImageFormat::Png if PNG_EXTENSIONS.contains(&ext.as_str()) => {
                Some(MediaClass::Png)
            }
            _ => None,
        }
    }

    /// Encoding of a still picture, `None` for videos
    fn still_encoding(self) -> Option<EncodingType> {
        match self {
            MediaClass::Jpeg => Some(EncodingType::Jpeg),
            MediaClass::Png => Some(EncodingType::Png),
            MediaClass::Video => None,
        }
    }
}

/// Host bridge serving pictures from local directories
#[derive(Debug, Clone)]
pub struct DirectoryBridge {
    capture_dir: PathBuf,
    library_dir: PathBuf,
    album_dir: PathBuf,
    temp_dir: PathBuf,
}

impl DirectoryBridge {
    pub fn new(
        capture_dir: PathBuf,
        library_dir: PathBuf,
        album_dir: PathBuf,
        temp_dir: PathBuf,
    ) -> Self {
        Self {
            capture_dir,
            library_dir,
            album_dir,
            temp_dir,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.capture_dir.clone(),
            config.photo_library_dir.clone(),
            config.album_dir.clone(),
            config.temp_dir.clone(),
        )
    }

    fn source_dir(&self, source: PictureSourceType) -> &Path {
        match source {
            PictureSourceType::Camera => &self.capture_dir,
            PictureSourceType::PhotoLibrary => &self.library_dir,
            PictureSourceType::SavedPhotoAlbum => &self.album_dir,
        }
    }

    /// Media classes acceptable for a request
    fn accepted(options: &CameraOptions) -> Vec<MediaClass> {
        let still = match options.encoding_type {
            EncodingType::Jpeg => MediaClass::Jpeg,
            EncodingType::Png => MediaClass::Png,
        };
        if options.source_type == PictureSourceType::Camera {
            return vec![still];
        }
        match options.media_type {
            MediaType::Picture => vec![MediaClass::Jpeg, MediaClass::Png],
            MediaType::Video => vec![MediaClass::Video],
            MediaType::AllMedia => vec![MediaClass::Jpeg, MediaClass::Png, MediaClass::Video],
        }
    }

    /// Copy a capture into the temp directory under a fresh name
    async fn stage_capture(&self, source: &Path) -> Result<PathBuf, BridgeError> {
        tokio::fs::create_dir_all(&self.temp_dir).await?;
        let ext = source
            .extension()
            .map(|e| e.to_string_lossy().to_string())
            .unwrap_or_else(|| EncodingType::Jpeg.extension().to_string());
        let staged = self
            .temp_dir
            .join(format!("{}.{}", uuid::Uuid::new_v4(), ext));
        tokio::fs::copy(source, &staged).await?;
        debug!(path = %staged.display(), "Staged intermediate capture file");
        Ok(staged)
    }

    /// Keep a copy of a capture in the saved album
    async fn save_to_album(
        &self,
        source: &Path,
        encoding: EncodingType,
    ) -> Result<(), BridgeError> {
        tokio::fs::create_dir_all(&self.album_dir).await?;
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let target = self
            .album_dir
            .join(format!("IMG_{}.{}", timestamp, encoding.extension()));
        tokio::fs::copy(source, &target).await?;
        info!(path = %target.display(), "Capture saved to album");
        Ok(())
    }

    fn file_path_of(uri: &str) -> Option<PathBuf> {
        uri.strip_prefix(FILE_URI_SCHEME).map(PathBuf::from)
    }

    /// True for paths that lexically stay inside the temp directory
    fn is_staged(&self, path: &Path) -> bool {
        path.starts_with(&self.temp_dir)
            && !path.components().any(|c| matches!(c, Component::ParentDir))
    }
}

/// Newest file in `dir` whose media class is accepted
///
/// Scans with blocking std::fs on the blocking pool. An unreadable directory
/// counts as empty.
async fn find_newest(
    dir: PathBuf,
    accepted: Vec<MediaClass>,
) -> Result<Option<PathBuf>, BridgeError> {
    tokio::task::spawn_blocking(move || {
        let mut files: Vec<(std::time::SystemTime, PathBuf)> = std::fs::read_dir(&dir)
            .ok()?
            .flatten()
            .filter_map(|entry| {
                let path = entry.path();
                let class = MediaClass::of(&path)?;
                if !accepted.contains(&class) {
                    return None;
                }
                let modified = entry.metadata().ok()?.modified().ok()?;
                Some((modified, path))
            })
            .collect();

        files.sort_by_key(|(modified, _)| std::cmp::Reverse(*modified));
        files.into_iter().next().map(|(_, path)| path)
    })
    .await
    .map_err(|e| BridgeError::Other(format!("media scan failed: {}", e)))
}

#[async_trait]
impl HostBridge for DirectoryBridge {
    async fn get_picture(&self, options: &CameraOptions) -> Result<ImageResult, BridgeError> {
        let dir = self.source_dir(options.source_type).to_path_buf();
        let found = find_newest(dir.clone(), Self::accepted(options))
            .await?
            .ok_or_else(|| {
                BridgeError::Unavailable(format!(
                    "no matching media in {} ({})",
                    dir.display(),
                    options.source_type
                ))
            })?;

        debug!(path = %found.display(), "Selected media file");

        let is_camera = options.source_type == PictureSourceType::Camera;
        if is_camera && options.save_to_photo_album {
            self.save_to_album(&found, options.encoding_type).await?;
        }

        let still = MediaClass::of(&found).and_then(MediaClass::still_encoding);
        if let (DestinationType::DataUrl, Some(encoding)) = (options.destination_type, still) {
            let bytes = tokio::fs::read(&found).await?;
            return Ok(ImageResult::Base64 {
                data: base64::engine::general_purpose::STANDARD.encode(bytes),
                encoding,
            });
        }

        let path = if options.leaves_intermediate_file() {
            self.stage_capture(&found).await?
        } else {
            found
        };

        let scheme = match options.destination_type {
            DestinationType::NativeUri => NATIVE_URI_SCHEME,
            _ => FILE_URI_SCHEME,
        };
        Ok(ImageResult::Uri(format!("{}{}", scheme, path.display())))
    }

    async fn remove_file(&self, uri: &str) -> Result<(), BridgeError> {
        let path = Self::file_path_of(uri)
            .ok_or_else(|| BridgeError::Other(format!("not a file URI: {}", uri)))?;

        // Only staged copies are ours to delete
        if !self.is_staged(&path) {
            return Err(BridgeError::PermissionDenied);
        }

        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn name(&self) -> &'static str {
        "directory"
    }
}
