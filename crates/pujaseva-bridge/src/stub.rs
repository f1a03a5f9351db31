// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stub bridge for targets without a desktop browser or dialog API.
//
// Every method returns `PlatformUnavailable`.

use pujaseva_core::error::{PujasevaError, Result};

use crate::traits::*;

/// No-op bridge returned on unsupported platforms.
pub struct StubBridge;

impl PlatformBridge for StubBridge {
    fn platform_name(&self) -> &str {
        "Unsupported (stub)"
    }
}

impl NativeBrowser for StubBridge {
    fn open_url(&self, _url: &str) -> Result<()> {
        tracing::warn!("NativeBrowser::open_url called on stub bridge");
        Err(PujasevaError::PlatformUnavailable)
    }
}

impl NativeAlert for StubBridge {
    fn alert(&self, _message: &str) -> Result<()> {
        tracing::warn!("NativeAlert::alert called on stub bridge");
        Err(PujasevaError::PlatformUnavailable)
    }
}
