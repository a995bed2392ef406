// SPDX-License-Identifier: GPL-3.0-only

//! Application-wide constants

/// Application identifier used for config and data directories
pub const APP_ID: &str = "camera-shell";

/// Default JPEG/PNG quality requested from the host (0-100)
pub const DEFAULT_QUALITY: u8 = 50;

/// Quality the camera page asks for
pub const CAMERA_PAGE_QUALITY: u8 = 100;

/// Environment variable carrying the shell's origin URL
pub const ORIGIN_ENV_VAR: &str = "CAMERA_SHELL_ORIGIN";

/// Origin assumed when neither the environment nor the config provides one.
/// A packaged shell loads its pages from disk, so this selects the native provider.
pub const DEFAULT_ORIGIN: &str = "file:///";

/// Scheme prefix that marks a browser-served origin (matches both http and https)
pub const BROWSER_ORIGIN_PREFIX: &str = "http";

/// Storage key the profile record lives under
pub const PROFILE_STORAGE_KEY: &str = "personne";

/// Base64 form of the JPEG start-of-image marker (FF D8 FF)
pub const JPEG_BASE64_MAGIC: &str = "/9j/";

/// Fixed photo returned by the stand-in camera: a small baseline JPEG, base64 encoded
pub const STAND_IN_PHOTO_BASE64: &str = include_str!("../resources/stand_in_photo.b64");

/// File extensions treated as still images by the directory bridge
pub const JPEG_EXTENSIONS: [&str; 2] = ["jpg", "jpeg"];
pub const PNG_EXTENSIONS: [&str; 1] = ["png"];

/// File extensions treated as videos by the directory bridge
pub const VIDEO_EXTENSIONS: [&str; 4] = ["mp4", "webm", "mkv", "mov"];

/// URI scheme for file references
pub const FILE_URI_SCHEME: &str = "file://";

/// URI scheme for host-native references (content:// style)
pub const NATIVE_URI_SCHEME: &str = "native://";

/// Application information utilities
pub mod app_info {
    use std::path::Path;

    /// Get the application version from build-time environment
    pub fn version() -> &'static str {
        env!("GIT_VERSION")
    }

    /// Check if the application is running inside a Flatpak sandbox
    pub fn is_flatpak() -> bool {
        Path::new("/.flatpak-info").exists()
    }

    /// Get the runtime environment string (e.g., "Flatpak" or "Native")
    pub fn runtime_environment() -> &'static str {
        if is_flatpak() { "Flatpak" } else { "Native" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stand_in_photo_has_jpeg_magic() {
        assert!(STAND_IN_PHOTO_BASE64.starts_with(JPEG_BASE64_MAGIC));
        assert!(!STAND_IN_PHOTO_BASE64.contains('\n'));
    }

    #[test]
    fn test_browser_prefix_covers_https() {
        assert!("https://localhost:8100".starts_with(BROWSER_ORIGIN_PREFIX));
        assert!(!DEFAULT_ORIGIN.starts_with(BROWSER_ORIGIN_PREFIX));
    }
}
