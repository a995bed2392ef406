// SPDX-License-Identifier: MPL-2.0

//! Integration tests for the stand-in camera

use base64::Engine;
use camera_shell::backends::camera::{
    CameraDirection, CameraOptions, CameraProvider, DestinationType, EncodingType, ImageResult,
    MediaType, PictureSourceType, PopoverArrowDirection, PopoverOptions, StandInCamera,
    TargetSize,
};
use camera_shell::constants::JPEG_BASE64_MAGIC;
use std::time::Duration;

fn option_variants() -> Vec<CameraOptions> {
    let mut variants = vec![CameraOptions::default()];
    for source in [
        PictureSourceType::PhotoLibrary,
        PictureSourceType::Camera,
        PictureSourceType::SavedPhotoAlbum,
    ] {
        for destination in [
            DestinationType::DataUrl,
            DestinationType::FileUri,
            DestinationType::NativeUri,
        ] {
            variants.push(CameraOptions {
                source_type: source,
                destination_type: destination,
                media_type: MediaType::Video,
                encoding_type: EncodingType::Png,
                camera_direction: CameraDirection::Front,
                ..Default::default()
            });
        }
    }
    variants.push(CameraOptions {
        quality: 255,
        allow_edit: true,
        correct_orientation: true,
        save_to_photo_album: true,
        target_size: TargetSize::new(1, 1),
        popover: Some(PopoverOptions {
            x: -10,
            y: 0,
            width: 0,
            height: 0,
            arrow_dir: PopoverArrowDirection::Left,
        }),
        ..Default::default()
    });
    variants
}

#[tokio::test]
async fn test_same_payload_for_every_option() {
    let camera = StandInCamera::new();
    let expected = ImageResult::Base64 {
        data: StandInCamera::payload().to_string(),
        encoding: EncodingType::Jpeg,
    };

    for options in option_variants() {
        let result = camera.acquire_image(&options).await;
        assert_eq!(result.as_ref(), Ok(&expected), "options: {:?}", options);
    }
}

#[tokio::test]
async fn test_out_of_range_quality_still_succeeds() {
    // The stand-in never checks values the host would reject
    for quality in [101, 200, u8::MAX] {
        let options = CameraOptions {
            quality,
            target_size: TargetSize::new(u32::MAX, 1),
            ..Default::default()
        };
        assert!(StandInCamera::new().acquire_image(&options).await.is_ok());
    }
}

#[tokio::test]
async fn test_data_url_jpeg_full_quality_scenario() {
    let options = CameraOptions {
        destination_type: DestinationType::DataUrl,
        encoding_type: EncodingType::Jpeg,
        quality: 100,
        ..Default::default()
    };

    let result = StandInCamera::new().acquire_image(&options).await.unwrap();
    assert!(result.as_str().starts_with(JPEG_BASE64_MAGIC));
}

#[tokio::test]
async fn test_sequential_calls_are_byte_identical() {
    let camera = StandInCamera::new();
    let first = camera
        .acquire_image(&CameraOptions {
            quality: 10,
            ..Default::default()
        })
        .await
        .unwrap();
    let second = camera
        .acquire_image(&CameraOptions {
            source_type: PictureSourceType::PhotoLibrary,
            encoding_type: EncodingType::Png,
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(first.as_str().as_bytes(), second.as_str().as_bytes());
}

#[test]
fn test_payload_is_a_decodable_jpeg() {
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(StandInCamera::payload())
        .expect("payload should be valid base64");

    assert_eq!(&bytes[..3], &[0xFF, 0xD8, 0xFF]);
    assert_eq!(image::guess_format(&bytes).unwrap(), image::ImageFormat::Jpeg);

    let decoded = image::load_from_memory(&bytes).expect("payload should decode");
    assert!(decoded.width() > 0 && decoded.height() > 0);
}

#[tokio::test]
async fn test_cleanup_needs_no_prior_acquisition() {
    let camera = StandInCamera::new();
    assert!(camera.cleanup().await.is_ok());
}

#[tokio::test]
async fn test_cleanup_stays_immediate() {
    let camera = StandInCamera::new();
    for _ in 0..100 {
        camera.acquire_image(&CameraOptions::default()).await.unwrap();
    }

    let cleaned = tokio::time::timeout(Duration::from_millis(100), camera.cleanup()).await;
    assert!(matches!(cleaned, Ok(Ok(()))));
}
