// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Bridge that records what it was asked to do instead of doing it.

use std::sync::Mutex;

use pujaseva_core::Effect;
use pujaseva_core::error::Result;

use crate::traits::*;

/// Records opened links and alerts, in order, as `Effect`s.
#[derive(Debug, Default)]
pub struct RecordingBridge {
    performed: Mutex<Vec<Effect>>,
}

impl RecordingBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything performed so far.
    pub fn performed(&self) -> Vec<Effect> {
        self.performed
            .lock()
            .map(|p| p.clone())
            .unwrap_or_default()
    }

    fn push(&self, effect: Effect) {
        if let Ok(mut performed) = self.performed.lock() {
            performed.push(effect);
        }
    }
}

impl PlatformBridge for RecordingBridge {
    fn platform_name(&self) -> &str {
        "Recording"
    }
}

impl NativeBrowser for RecordingBridge {
    fn open_url(&self, url: &str) -> Result<()> {
        self.push(Effect::OpenUrl(url.to_owned()));
        Ok(())
    }
}

impl NativeAlert for RecordingBridge {
    fn alert(&self, message: &str) -> Result<()> {
        self.push(Effect::Alert(message.to_owned()));
        Ok(())
    }
}
