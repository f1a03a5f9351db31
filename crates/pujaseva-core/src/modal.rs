// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Service detail modal: a two-state machine (Closed / Open).

use tracing::{debug, warn};

use crate::deeplink::MessagingLink;
use crate::types::{ServiceRecord, ServiceSelect};

/// Everything the open modal shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalContent {
    pub title: String,
    pub description: String,
    pub image_ref: String,
    /// Quick-contact deep-link for this service.
    pub contact_link: String,
}

/// Visibility and content of the modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open(ModalContent),
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    pub fn content(&self) -> Option<&ModalContent> {
        match self {
            Self::Open(c) => Some(c),
            Self::Closed => None,
        }
    }

    /// CSS `display` value of the modal root.
    pub fn display(&self) -> &'static str {
        if self.is_open() { "flex" } else { "none" }
    }

    /// Value of the root's `aria-hidden` attribute.
    pub fn aria_hidden(&self) -> &'static str {
        if self.is_open() { "false" } else { "true" }
    }
}

/// What dismissed the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTrigger {
    CloseButton,
    Backdrop,
    EscapeKey,
}

/// Open the modal on `record`, replacing any previous content.
///
/// When a selection control exists and offers the record's title, it is
/// selected as a side effect.
pub fn open_modal(
    modal: Option<&mut ModalState>,
    record: &ServiceRecord,
    select: Option<&mut ServiceSelect>,
    link: &MessagingLink,
) {
    let Some(modal) = modal else {
        warn!(title = %record.title, "modal element missing; cannot show service details");
        return;
    };

    if let Some(select) = select
        && !select.select_matching(&record.title)
    {
        debug!(title = %record.title, "no matching service option");
    }

    *modal = ModalState::Open(ModalContent {
        title: record.title.clone(),
        description: record.description.clone(),
        image_ref: record.image_ref.clone(),
        contact_link: link.quick_contact(&record.title),
    });
}

/// Hide the modal. Closing a closed modal is a no-op.
pub fn close_modal(modal: Option<&mut ModalState>, trigger: CloseTrigger) {
    let Some(modal) = modal else {
        warn!(?trigger, "modal element missing; nothing to close");
        return;
    };

    // Escape only counts while the modal is showing.
    if trigger == CloseTrigger::EscapeKey && !modal.is_open() {
        return;
    }
    if modal.is_open() {
        debug!(?trigger, "modal closed");
    }
    *modal = ModalState::Closed;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str) -> ServiceRecord {
        ServiceRecord::new(title, format!("{title} description"), format!("images/{title}.jpg"))
    }

    #[test]
    fn starts_closed() {
        let modal = ModalState::default();
        assert!(!modal.is_open());
        assert_eq!(modal.display(), "none");
        assert_eq!(modal.aria_hidden(), "true");
    }

    #[test]
    fn open_populates_every_field() {
        let mut modal = ModalState::default();
        open_modal(Some(&mut modal), &record("Vivah Sanskar"), None, &MessagingLink::default());

        let content = modal.content().unwrap();
        assert_eq!(content.title, "Vivah Sanskar");
        assert_eq!(content.description, "Vivah Sanskar description");
        assert_eq!(content.image_ref, "images/Vivah Sanskar.jpg");
        assert!(content.contact_link.contains("book: Vivah%20Sanskar%0A"));
        assert_eq!(modal.display(), "flex");
        assert_eq!(modal.aria_hidden(), "false");
    }

    #[test]
    fn second_open_overwrites_first() {
        let mut modal = ModalState::default();
        let link = MessagingLink::default();
        open_modal(Some(&mut modal), &record("Graha Shanti"), None, &link);
        open_modal(Some(&mut modal), &ServiceRecord::new("Rudrabhishek", "", ""), None, &link);

        let content = modal.content().unwrap();
        assert_eq!(content.title, "Rudrabhishek");
        assert_eq!(content.description, "");
        assert_eq!(content.image_ref, "");
        assert!(!content.contact_link.contains("Graha"));
    }

    #[test]
    fn open_selects_matching_service() {
        let mut modal = ModalState::default();
        let mut select = ServiceSelect::from_titles("Select", ["Griha Pravesh", "Rudrabhishek"]);
        open_modal(
            Some(&mut modal),
            &record("Rudrabhishek"),
            Some(&mut select),
            &MessagingLink::default(),
        );
        assert_eq!(select.value, "Rudrabhishek");
    }

    #[test]
    fn every_trigger_closes() {
        for trigger in [CloseTrigger::CloseButton, CloseTrigger::Backdrop, CloseTrigger::EscapeKey] {
            let mut modal = ModalState::default();
            open_modal(Some(&mut modal), &record("Graha Shanti"), None, &MessagingLink::default());
            close_modal(Some(&mut modal), trigger);
            assert_eq!(modal, ModalState::Closed, "{trigger:?} should close");
            assert_eq!(modal.aria_hidden(), "true");
        }
    }

    #[test]
    fn repeated_close_is_noop() {
        let mut modal = ModalState::default();
        close_modal(Some(&mut modal), CloseTrigger::CloseButton);
        close_modal(Some(&mut modal), CloseTrigger::EscapeKey);
        assert_eq!(modal, ModalState::Closed);
    }

    #[test]
    fn missing_modal_is_not_fatal() {
        open_modal(None, &record("Graha Shanti"), None, &MessagingLink::default());
        close_modal(None, CloseTrigger::Backdrop);
    }
}
