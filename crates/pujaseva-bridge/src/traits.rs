// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-agnostic trait definitions for native capabilities.

use pujaseva_core::error::Result;

/// Unified bridge that groups all native capabilities the page needs.
pub trait PlatformBridge: NativeBrowser + NativeAlert + Send + Sync {
    /// Human-readable platform name (e.g. "Desktop").
    fn platform_name(&self) -> &str;
}

/// Hand URLs to the system browser or the app registered for them.
pub trait NativeBrowser {
    /// Open `url` in a new browsing context without blocking the UI.
    fn open_url(&self, url: &str) -> Result<()>;
}

/// Blocking, modal notifications.
pub trait NativeAlert {
    /// Show `message` and wait for the user to dismiss it.
    fn alert(&self, message: &str) -> Result<()>;
}
