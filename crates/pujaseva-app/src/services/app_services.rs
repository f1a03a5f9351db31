// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Central service layer: loads configuration, prepares the messaging link
// and holds the platform bridge for the Dioxus UI.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use pujaseva_bridge::{PlatformBridge, platform_bridge};
use pujaseva_core::config::{load_config, persist_config};
use pujaseva_core::error::Result;
use pujaseva_core::{AppConfig, MessagingLink};
use tracing::{info, warn};

use super::data_dir;

/// Shared application services accessible from all Dioxus components via
/// `use_context::<AppServices>()`.
///
/// Cheap to clone so it can be moved into event handler closures.
#[derive(Clone)]
pub struct AppServices {
    config: AppConfig,
    link: MessagingLink,
    bridge: Arc<dyn PlatformBridge>,
    data_dir: PathBuf,
}

impl AppServices {
    /// Initialise all services.  Call once at app startup.
    pub fn init() -> Result<Self> {
        let dir = data_dir::data_dir();
        info!(path = %dir.display(), "initialising app services");
        Self::init_in(&dir, Arc::from(platform_bridge()))
    }

    /// Initialise against an explicit data directory and bridge.
    ///
    /// Writes a default config file on first launch so it can be edited.
    pub fn init_in(dir: &Path, bridge: Arc<dyn PlatformBridge>) -> Result<Self> {
        let config = match load_config(dir) {
            Some(config) => config,
            None => {
                let config = AppConfig::default();
                if !dir.join(pujaseva_core::config::CONFIG_FILE).exists() {
                    persist_config(dir, &config)?;
                    info!(path = %dir.display(), "wrote default config");
                }
                config
            }
        };
        let link = MessagingLink::from_config(&config)?;

        info!(
            platform = bridge.platform_name(),
            link = link.base(),
            "app services initialised"
        );

        Ok(Self {
            config,
            link,
            bridge,
            data_dir: dir.to_path_buf(),
        })
    }

    /// Defaults only, no disk access. Used when `init` fails.
    pub fn fallback() -> Self {
        warn!("using default configuration");
        Self {
            config: AppConfig::default(),
            link: MessagingLink::default(),
            bridge: Arc::from(platform_bridge()),
            data_dir: PathBuf::new(),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn link(&self) -> &MessagingLink {
        &self.link
    }

    pub fn bridge(&self) -> &dyn PlatformBridge {
        self.bridge.as_ref()
    }

    /// Path to the data directory (empty for the fallback services).
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
