// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pujaseva: native platform bridge.
//
// The core crate decides *what* should happen after an event (open a link,
// show an alert); the bridge carries it out on the host platform.

use pujaseva_core::Effect;
use tracing::{error, info};

#[cfg(any(test, feature = "testing"))]
pub mod recording;
pub mod stub;
pub mod traits;

#[cfg(not(any(target_os = "ios", target_os = "android", target_arch = "wasm32")))]
pub mod desktop;

pub use traits::{NativeAlert, NativeBrowser, PlatformBridge};

/// The bridge implementation for the target platform.
pub fn platform_bridge() -> Box<dyn PlatformBridge> {
    #[cfg(not(any(target_os = "ios", target_os = "android", target_arch = "wasm32")))]
    {
        Box::new(desktop::DesktopBridge)
    }
    #[cfg(any(target_os = "ios", target_os = "android", target_arch = "wasm32"))]
    {
        Box::new(stub::StubBridge)
    }
}

/// Carry out `effects` in order, logging any the platform refuses.
///
/// Returns how many succeeded.
pub fn apply_effects(bridge: &dyn PlatformBridge, effects: Vec<Effect>) -> usize {
    let mut applied = 0;
    for effect in effects {
        let result = match &effect {
            Effect::OpenUrl(url) => {
                info!(platform = bridge.platform_name(), "opening messaging link");
                bridge.open_url(url)
            }
            Effect::Alert(message) => bridge.alert(message),
        };
        match result {
            Ok(()) => applied += 1,
            Err(e) => error!(error = %e, ?effect, "platform could not perform effect"),
        }
    }
    applied
}
