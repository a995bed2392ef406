// SPDX-License-Identifier: GPL-3.0-only

//! CLI commands
//!
//! This module provides command-line functionality for:
//! - Taking pictures through the bound camera provider
//! - Reporting which provider the environment selects
//! - Reading and writing the stored profile

use crate::PhotoArgs;
use base64::Engine;
use camera_shell::app::{CameraPage, Person, ProfilePage};
use camera_shell::backends::camera::{
    CameraOptions, HostEnvironment, ImageResult, bind_provider,
};
use camera_shell::config::Config;
use camera_shell::constants::{FILE_URI_SCHEME, app_info};
use camera_shell::errors::{AppError, AppResult};
use camera_shell::storage::JsonFileStore;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// Options from the optional JSON file with command-line overrides applied
fn build_options(args: &PhotoArgs) -> AppResult<CameraOptions> {
    let mut options = match &args.options {
        Some(path) => {
            let contents = std::fs::read_to_string(path)
                .map_err(|e| AppError::Config(format!("cannot read {}: {}", path.display(), e)))?;
            serde_json::from_str(&contents)
                .map_err(|e| AppError::Config(format!("invalid {}: {}", path.display(), e)))?
        }
        None => CameraPage::default_options(),
    };

    if let Some(quality) = args.quality {
        options.quality = quality;
    }
    if let Some(source) = args.source {
        options.source_type = source.into();
    }
    if let Some(destination) = args.destination {
        options.destination_type = destination.into();
    }
    if let Some(encoding) = args.encoding {
        options.encoding_type = encoding.into();
    }
    if let Some(media) = args.media {
        options.media_type = media.into();
    }
    if args.save_to_album {
        options.save_to_photo_album = true;
    }

    Ok(options)
}

/// Take a picture and print or save it
pub async fn take_photo(
    config: &Config,
    args: PhotoArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = build_options(&args)?;
    let camera = bind_provider(&HostEnvironment::detect(config), config);
    let mut page = CameraPage::with_options(camera, options);

    let result = match args.timeout {
        Some(secs) => tokio::time::timeout(Duration::from_secs(secs), page.take_picture())
            .await
            .map_err(|_| format!("No picture after {} seconds", secs))??,
        None => page.take_picture().await?,
    };

    match &args.output {
        Some(output) => {
            write_picture(&result, output).await?;
            println!("Saved: {}", output.display());
        }
        None => println!("{}", page.image().unwrap_or_default()),
    }

    if args.cleanup {
        page.release().await?;
    }

    Ok(())
}

/// Decode inline payloads, copy referenced files
async fn write_picture(result: &ImageResult, output: &Path) -> AppResult<()> {
    match result {
        ImageResult::Base64 { data, .. } => {
            let bytes = base64::engine::general_purpose::STANDARD
                .decode(data)
                .map_err(|e| AppError::Other(format!("invalid picture payload: {}", e)))?;
            tokio::fs::write(output, bytes).await.map_err(|e| {
                AppError::Other(format!("cannot write {}: {}", output.display(), e))
            })?;
        }
        ImageResult::Uri(uri) => {
            let source = uri
                .strip_prefix(FILE_URI_SCHEME)
                .ok_or_else(|| AppError::Other(format!("cannot copy from {}", uri)))?;
            tokio::fs::copy(source, output)
                .await
                .map_err(|e| AppError::Other(format!("cannot copy {}: {}", uri, e)))?;
        }
    }
    Ok(())
}

/// Print the probed environment
pub fn show_environment(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let env = HostEnvironment::detect(config);

    println!("Version:  {}", app_info::version());
    println!("Runtime:  {}", app_info::runtime_environment());
    println!("Origin:   {}", env.origin);
    println!("Provider: {}", env.provider_kind());

    Ok(())
}

fn profile_page(config: &Config) -> ProfilePage {
    ProfilePage::new(Arc::new(JsonFileStore::new(config.storage_path.clone())))
}

/// Print the stored profile
pub async fn show_profile(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut page = profile_page(config);
    let person = page.load().await?;

    if *person == Person::default() {
        println!("No profile stored.");
    } else {
        println!("{}", person.display_name());
    }

    Ok(())
}

/// Replace the stored profile
pub async fn set_profile(
    config: &Config,
    first_name: String,
    last_name: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut page = profile_page(config);
    page.person = Person::new(first_name, last_name);
    page.save().await?;

    println!("Saved profile: {}", page.person.display_name());
    Ok(())
}
