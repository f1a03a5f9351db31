// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Desktop bridge: the default browser opens deep-links, rfd shows alerts.

use pujaseva_core::error::{PujasevaError, Result};
use rfd::{MessageButtons, MessageDialog, MessageLevel};

use crate::traits::*;

/// Title of every alert window.
const ALERT_TITLE: &str = "Pujaseva";

pub struct DesktopBridge;

impl PlatformBridge for DesktopBridge {
    fn platform_name(&self) -> &str {
        "Desktop"
    }
}

impl NativeBrowser for DesktopBridge {
    fn open_url(&self, url: &str) -> Result<()> {
        open::that_detached(url)
            .map_err(|e| PujasevaError::Bridge(format!("could not open link: {e}")))
    }
}

impl NativeAlert for DesktopBridge {
    fn alert(&self, message: &str) -> Result<()> {
        let _ = MessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title(ALERT_TITLE)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
        Ok(())
    }
}
