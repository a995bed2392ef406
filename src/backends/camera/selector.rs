// SPDX-License-Identifier: GPL-3.0-only

//! One-time choice between the stand-in and the host-backed camera
//!
//! The shell probes a single signal at startup: the origin its pages are
//! served from. An `http`/`https` origin means a plain browser with no host
//! bridge, so the stand-in is bound. Anything else binds the native provider.
//!
//! A host shell that reports an HTTP-like origin silently gets the stand-in.

use super::types::ProviderKind;
use super::{CameraProvider, DirectoryBridge, NativeCamera, StandInCamera};
use crate::config::Config;
use crate::constants::{BROWSER_ORIGIN_PREFIX, DEFAULT_ORIGIN, ORIGIN_ENV_VAR};
use std::sync::Arc;
use tracing::info;

/// Startup environment signal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostEnvironment {
    pub origin: String,
}

impl HostEnvironment {
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
        }
    }

    /// Probe the process environment, then the config, then the default origin
    pub fn detect(config: &Config) -> Self {
        let origin = std::env::var(ORIGIN_ENV_VAR)
            .ok()
            .filter(|origin| !origin.is_empty())
            .or_else(|| config.origin.clone())
            .unwrap_or_else(|| DEFAULT_ORIGIN.to_string());
        Self::new(origin)
    }

    /// Pages served over HTTP(S) run in a plain browser
    pub fn is_browser(&self) -> bool {
        self.origin.starts_with(BROWSER_ORIGIN_PREFIX)
    }

    /// Provider kind this environment gets
    pub fn provider_kind(&self) -> ProviderKind {
        if self.is_browser() {
            ProviderKind::StandIn
        } else {
            ProviderKind::Native
        }
    }
}

/// Build the process-wide camera provider
///
/// Call once at startup and pass the result to every consumer.
pub fn bind_provider(env: &HostEnvironment, config: &Config) -> Arc<dyn CameraProvider> {
    let kind = env.provider_kind();
    info!(origin = %env.origin, provider = %kind, "Binding camera provider");

    match kind {
        ProviderKind::StandIn => Arc::new(StandInCamera::new()),
        ProviderKind::Native => Arc::new(NativeCamera::new(Box::new(
            DirectoryBridge::from_config(config),
        ))),
    }
}
