// SPDX-License-Identifier: MPL-2.0

//! Backend abstraction layer for device capabilities
//!
//! # Modules
//!
//! - [`camera`]: Camera capability contract, its stand-in and host-backed
//!   implementations, and the startup provider selection

pub mod camera;
