// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pujaseva: service catalog, rendering, modal and booking-request logic,
// independent of any live UI toolkit.

pub mod catalog;
pub mod config;
pub mod deeplink;
pub mod error;
pub mod escape;
pub mod event;
pub mod human_errors;
pub mod modal;
pub mod request;
pub mod types;
pub mod view;

pub use catalog::{Catalog, build_catalog};
pub use config::AppConfig;
pub use deeplink::MessagingLink;
pub use error::PujasevaError;
pub use event::{Effect, Key, PageLayout, UiEvent, UiState};
pub use types::*;
