// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{PujasevaError, Result};

/// File name of the persisted config inside the data directory.
pub const CONFIG_FILE: &str = "config.json";

/// Persistent application settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Host of the messaging deep-link service (e.g. `wa.me`).
    pub messaging_host: String,
    /// Fixed recipient the booking messages are addressed to.
    pub recipient_id: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            messaging_host: "wa.me".into(),
            recipient_id: "919731671105".into(),
        }
    }
}

impl AppConfig {
    /// `https://<host>/<recipient>` without a query string.
    pub fn base_link(&self) -> String {
        format!("https://{}/{}", self.messaging_host, self.recipient_id)
    }

    /// Reject configs that cannot produce a usable deep-link.
    pub fn validate(&self) -> Result<()> {
        if self.messaging_host.trim().is_empty() {
            return Err(PujasevaError::Config("messaging_host is empty".into()));
        }
        if self.recipient_id.trim().is_empty() {
            return Err(PujasevaError::Config("recipient_id is empty".into()));
        }
        if self.recipient_id.contains(['/', '?', '#']) {
            return Err(PujasevaError::Config(format!(
                "recipient_id {:?} must be a single path segment",
                self.recipient_id
            )));
        }
        let parsed = url::Url::parse(&self.base_link())
            .map_err(|e| PujasevaError::Config(format!("messaging_host: {e}")))?;
        if parsed.host_str() != Some(self.messaging_host.to_ascii_lowercase().as_str()) {
            return Err(PujasevaError::Config(format!(
                "messaging_host {:?} is not a plain host name",
                self.messaging_host
            )));
        }
        Ok(())
    }
}

/// Read the config from `data_dir`, returning `None` if absent or unreadable.
///
/// A config that parses but fails validation is also ignored so the app
/// falls back to working defaults.
pub fn load_config(data_dir: &Path) -> Option<AppConfig> {
    let path = data_dir.join(CONFIG_FILE);
    let data = std::fs::read_to_string(&path).ok()?;
    let config: AppConfig = match serde_json::from_str(&data) {
        Ok(c) => c,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "config file is not valid JSON");
            return None;
        }
    };
    match config.validate() {
        Ok(()) => Some(config),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring invalid config");
            None
        }
    }
}

/// Write `config` as pretty JSON into `data_dir`.
pub fn persist_config(data_dir: &Path, config: &AppConfig) -> Result<()> {
    let path = data_dir.join(CONFIG_FILE);
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(&path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_whatsapp() {
        let config = AppConfig::default();
        assert_eq!(config.base_link(), "https://wa.me/919731671105");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_recipient_is_rejected() {
        let config = AppConfig {
            recipient_id: "  ".into(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(PujasevaError::Config(_))));
    }

    #[test]
    fn recipient_with_path_separator_is_rejected() {
        let config = AppConfig {
            recipient_id: "91/extra".into(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn bad_host_is_rejected() {
        let config = AppConfig {
            messaging_host: "not a host".into(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn persist_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            messaging_host: "api.whatsapp.com".into(),
            recipient_id: "15550001111".into(),
        };
        persist_config(dir.path(), &config).unwrap();
        assert_eq!(load_config(dir.path()), Some(config));
    }

    #[test]
    fn missing_file_loads_nothing() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_config(dir.path()), None);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), r#"{"recipient_id":"4400"}"#).unwrap();
        let config = load_config(dir.path()).unwrap();
        assert_eq!(config.recipient_id, "4400");
        assert_eq!(config.messaging_host, "wa.me");
    }

    #[test]
    fn garbage_file_loads_nothing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "{ nope").unwrap();
        assert_eq!(load_config(dir.path()), None);
    }
}
