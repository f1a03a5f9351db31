// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Global application state: the page's `UiState` behind a Dioxus signal.

use dioxus::prelude::*;

use pujaseva_bridge::apply_effects;
use pujaseva_core::{Key, PageLayout, UiEvent, UiState, build_catalog};

use crate::services::app_services::AppServices;

/// Page state at launch: every region present, catalog already rendered.
pub fn initial_state(svc: &AppServices) -> UiState {
    UiState::new(build_catalog(), svc.link().clone(), PageLayout::full())
}

/// Apply `event` to the shared state, then perform its effects.
///
/// The write guard is released before effects run, since an alert blocks
/// until dismissed.
pub fn dispatch(mut state: Signal<UiState>, svc: &AppServices, event: UiEvent) {
    let effects = state.write().dispatch(event);
    perform(svc, effects);
}

/// Carry out `effects` on the platform bridge. Returns how many succeeded.
fn perform(svc: &AppServices, effects: Vec<pujaseva_core::Effect>) -> usize {
    if effects.is_empty() {
        return 0;
    }
    apply_effects(svc.bridge(), effects)
}

/// Map a DOM key name (`KeyboardEvent.key`) to the keys the page handles.
pub fn page_key(name: &str) -> Key {
    match name {
        "Escape" | "Esc" => Key::Escape,
        other => Key::Other(other.to_owned()),
    }
}
