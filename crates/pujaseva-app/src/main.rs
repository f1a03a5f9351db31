// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pujaseva: puja service catalog with WhatsApp booking
//
// Entry point. Initialises logging, app services and page state, and
// launches the Dioxus UI.

mod pages;
mod services;
mod state;

use dioxus::prelude::*;

use pages::home::Home;
use services::app_services::AppServices;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Pujaseva starting");

    dioxus::launch(app);
}

/// Root component.
fn app() -> Element {
    let svc = use_hook(|| match AppServices::init() {
        Ok(s) => {
            tracing::info!(
                data_dir = %s.data_dir().display(),
                recipient = %s.config().recipient_id,
                "app services ready"
            );
            s
        }
        Err(e) => {
            tracing::error!(error = %e, "configuration failed; using defaults");
            AppServices::fallback()
        }
    });

    // Provide services and page state as context for all components
    use_context_provider(|| svc.clone());
    use_context_provider(|| Signal::new(state::initial_state(&svc)));

    rsx! {
        Home {}
    }
}
