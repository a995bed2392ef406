// SPDX-License-Identifier: GPL-3.0-only
// Shared types for the camera capability abstraction

//! Request options and results shared by every camera provider
//!
//! Enumerations serialize under the host's option names so a whole
//! [`CameraOptions`] can be handed to a host bridge unchanged. Values are not
//! validated beyond what the types enforce: an out-of-range `quality` is
//! undefined host behaviour.

use crate::constants::DEFAULT_QUALITY;
use crate::errors::AcquisitionFailed;
use serde::{Deserialize, Serialize};

/// Result type for provider operations
pub type AcquireResult<T> = Result<T, AcquisitionFailed>;

/// Format of the value returned by an acquisition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DestinationType {
    /// Base64-encoded image data
    DataUrl,
    /// URI of a file on the device
    #[default]
    FileUri,
    /// Host-native URI (assets-library:// or content:// style)
    NativeUri,
}

/// Where the picture comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PictureSourceType {
    PhotoLibrary,
    #[default]
    Camera,
    SavedPhotoAlbum,
}

/// Encoding of the returned image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EncodingType {
    #[default]
    Jpeg,
    Png,
}

/// Kind of media a library selection may return
///
/// Only meaningful for [`PictureSourceType::PhotoLibrary`] and
/// [`PictureSourceType::SavedPhotoAlbum`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaType {
    /// Still pictures only, returned in the requested destination format
    #[default]
    Picture,
    /// Videos only, always returned as a file reference
    Video,
    /// Any media
    AllMedia,
}

/// Which camera to open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CameraDirection {
    #[default]
    Back,
    Front,
}

/// Arrow direction of a popover picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PopoverArrowDirection {
    Up,
    Down,
    Left,
    Right,
    #[default]
    Any,
}

impl EncodingType {
    /// MIME type of images in this encoding
    pub fn mime_type(&self) -> &'static str {
        match self {
            EncodingType::Jpeg => "image/jpeg",
            EncodingType::Png => "image/png",
        }
    }

    /// Preferred file extension
    pub fn extension(&self) -> &'static str {
        match self {
            EncodingType::Jpeg => "jpg",
            EncodingType::Png => "png",
        }
    }

    /// `data:` URL prefix for base64 payloads in this encoding
    pub fn data_url_prefix(&self) -> String {
        format!("data:{};base64,", self.mime_type())
    }
}

impl std::fmt::Display for PictureSourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PictureSourceType::PhotoLibrary => write!(f, "photo library"),
            PictureSourceType::Camera => write!(f, "camera"),
            PictureSourceType::SavedPhotoAlbum => write!(f, "saved photo album"),
        }
    }
}

/// Scale target in pixels; aspect ratio is kept by the host
///
/// Width and height travel together so one can never be set without the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetSize {
    pub width: u32,
    pub height: u32,
}

impl TargetSize {
    /// Returns `None` if either side is zero
    pub fn new(width: u32, height: u32) -> Option<Self> {
        (width > 0 && height > 0).then_some(Self { width, height })
    }
}

/// Anchor rectangle for popover pickers (tablet-style library UI)
///
/// Ignored by hosts without popover selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopoverOptions {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub arrow_dir: PopoverArrowDirection,
}

/// Options for a single image acquisition
///
/// Built fresh for every request and dropped after use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CameraOptions {
    /// Picture quality, 0-100
    pub quality: u8,
    pub destination_type: DestinationType,
    pub source_type: PictureSourceType,
    /// Allow simple editing before selection
    pub allow_edit: bool,
    pub encoding_type: EncodingType,
    pub target_size: Option<TargetSize>,
    pub media_type: MediaType,
    /// Rotate to compensate for device orientation during capture
    pub correct_orientation: bool,
    /// Also store the capture in the device's photo album
    pub save_to_photo_album: bool,
    pub camera_direction: CameraDirection,
    pub popover: Option<PopoverOptions>,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            quality: DEFAULT_QUALITY,
            destination_type: DestinationType::default(),
            source_type: PictureSourceType::default(),
            allow_edit: false,
            encoding_type: EncodingType::default(),
            target_size: None,
            media_type: MediaType::default(),
            correct_orientation: false,
            save_to_photo_album: false,
            camera_direction: CameraDirection::default(),
            popover: None,
        }
    }
}

impl CameraOptions {
    /// True when a capture leaves an intermediate file that `cleanup` must remove
    pub fn leaves_intermediate_file(&self) -> bool {
        self.source_type == PictureSourceType::Camera
            && self.destination_type == DestinationType::FileUri
    }
}

/// Value returned by a successful acquisition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageResult {
    /// Base64-encoded image bytes, no `data:` prefix
    Base64 { data: String, encoding: EncodingType },
    /// Opaque URI of the picture on the device
    Uri(String),
}

impl ImageResult {
    /// The raw payload string
    pub fn as_str(&self) -> &str {
        match self {
            ImageResult::Base64 { data, .. } | ImageResult::Uri(data) => data,
        }
    }

    pub fn is_uri(&self) -> bool {
        matches!(self, ImageResult::Uri(_))
    }

    /// Renderable source: a data URL for payloads, the URI otherwise
    pub fn display_source(&self) -> String {
        match self {
            ImageResult::Base64 { data, encoding } => {
                format!("{}{}", encoding.data_url_prefix(), data)
            }
            ImageResult::Uri(uri) => uri.clone(),
        }
    }
}

/// Which provider implementation is bound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    /// Deterministic fixed-response camera
    StandIn,
    /// Host-backed camera
    Native,
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderKind::StandIn => write!(f, "stand-in"),
            ProviderKind::Native => write!(f, "native"),
        }
    }
}
