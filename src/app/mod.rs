// SPDX-License-Identifier: MPL-2.0

//! Consumers of the device capabilities
//!
//! - `camera_page`: takes a picture through the bound camera provider
//! - `profile_page`: loads and saves a person record in local storage
//!
//! Both receive their collaborators at construction; nothing is looked up
//! globally.

mod camera_page;
mod profile_page;

pub use camera_page::CameraPage;
pub use profile_page::{Person, ProfilePage};
