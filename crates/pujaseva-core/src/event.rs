// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Page state and typed event dispatch.
//
// `UiState` is the whole page: which regions exist, what the grid shows,
// whether the modal is open, and what the visitor has typed. UI events are
// applied with `dispatch`, which mutates the state and returns the effects
// (open a link, show an alert) for the platform layer to carry out.

use tracing::{info, warn};

use crate::catalog::Catalog;
use crate::deeplink::MessagingLink;
use crate::error::PujasevaError;
use crate::human_errors::humanize_error;
use crate::modal::{self, CloseTrigger, ModalState};
use crate::request::BookingRequest;
use crate::types::{FormField, RequestForm, ServiceSelect};
use crate::view::{self, Grid};

/// Placeholder text of the empty service option.
pub const SELECT_PLACEHOLDER: &str = "Select a service";

/// Keyboard keys the page reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Escape,
    Other(String),
}

/// Discrete user interactions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// A card in the grid, by position.
    CardClicked { index: usize },
    CloseClicked,
    /// A click that landed on the modal backdrop itself.
    BackdropClicked,
    /// A click inside the modal's content box.
    ContentClicked,
    /// The modal's quick-contact link.
    ContactClicked,
    KeyDown(Key),
    FieldChanged(FormField, String),
    ServiceSelected(String),
    Submit,
}

/// Work the platform must do after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Open `url` in a new browsing context.
    OpenUrl(String),
    /// Show a blocking alert.
    Alert(String),
}

/// Which optional regions the page has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    pub grid: bool,
    pub modal: bool,
    pub service_select: bool,
    pub request_form: bool,
}

impl PageLayout {
    /// Every region present.
    pub fn full() -> Self {
        Self {
            grid: true,
            modal: true,
            service_select: true,
            request_form: true,
        }
    }
}

impl Default for PageLayout {
    fn default() -> Self {
        Self::full()
    }
}

/// The page's state. Each optional region is `None` when absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    catalog: Catalog,
    link: MessagingLink,
    pub grid: Option<Grid>,
    pub modal: Option<ModalState>,
    pub service_select: Option<ServiceSelect>,
    pub form: Option<RequestForm>,
}

impl UiState {
    /// Build the page for `layout` and paint the catalog into the grid.
    pub fn new(catalog: Catalog, link: MessagingLink, layout: PageLayout) -> Self {
        let service_select = layout
            .service_select
            .then(|| ServiceSelect::from_titles(SELECT_PLACEHOLDER, catalog.titles()));

        let mut state = Self {
            grid: layout.grid.then(Grid::new),
            modal: layout.modal.then(ModalState::default),
            service_select,
            form: layout.request_form.then(RequestForm::default),
            catalog,
            link,
        };
        view::render(&state.catalog, state.grid.as_mut());
        state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn link(&self) -> &MessagingLink {
        &self.link
    }

    pub fn modal_is_open(&self) -> bool {
        self.modal.as_ref().is_some_and(ModalState::is_open)
    }

    /// Current form input, with the service taken from the selection control
    /// when the page has one.
    pub fn form_input(&self) -> Option<RequestForm> {
        let mut form = self.form.clone()?;
        if let Some(select) = &self.service_select {
            form.service = select.value.clone();
        }
        Some(form)
    }

    /// Apply one event and return the resulting effects.
    pub fn dispatch(&mut self, event: UiEvent) -> Vec<Effect> {
        match event {
            UiEvent::CardClicked { index } => self.on_card_clicked(index),
            UiEvent::CloseClicked => self.on_close(CloseTrigger::CloseButton),
            UiEvent::BackdropClicked => self.on_close(CloseTrigger::Backdrop),
            UiEvent::ContentClicked => Vec::new(),
            UiEvent::ContactClicked => self.on_contact_clicked(),
            UiEvent::KeyDown(key) => self.on_key_down(&key),
            UiEvent::FieldChanged(field, value) => self.on_field_changed(field, value),
            UiEvent::ServiceSelected(value) => self.on_service_selected(value),
            UiEvent::Submit => self.on_submit(),
        }
    }

    fn on_card_clicked(&mut self, index: usize) -> Vec<Effect> {
        // A click that matches no card does nothing.
        let Some(record) = self.grid.as_ref().and_then(|g| g.card(index)).cloned() else {
            return Vec::new();
        };
        modal::open_modal(
            self.modal.as_mut(),
            &record,
            self.service_select.as_mut(),
            &self.link,
        );
        Vec::new()
    }

    fn on_close(&mut self, trigger: CloseTrigger) -> Vec<Effect> {
        modal::close_modal(self.modal.as_mut(), trigger);
        Vec::new()
    }

    fn on_contact_clicked(&self) -> Vec<Effect> {
        match self.modal.as_ref().and_then(ModalState::content) {
            Some(content) => vec![Effect::OpenUrl(content.contact_link.clone())],
            None => Vec::new(),
        }
    }

    fn on_key_down(&mut self, key: &Key) -> Vec<Effect> {
        if *key == Key::Escape && self.modal_is_open() {
            modal::close_modal(self.modal.as_mut(), CloseTrigger::EscapeKey);
        }
        Vec::new()
    }

    fn on_field_changed(&mut self, field: FormField, value: String) -> Vec<Effect> {
        if field == FormField::Service && self.service_select.is_some() {
            return self.on_service_selected(value);
        }
        match self.form.as_mut() {
            Some(form) => form.set(field, value),
            None => warn!(field = field.as_str(), "request form missing; input ignored"),
        }
        Vec::new()
    }

    fn on_service_selected(&mut self, value: String) -> Vec<Effect> {
        match self.service_select.as_mut() {
            // The placeholder option has an empty value, so clearing matches too.
            Some(select) => {
                if !select.select_matching(&value) {
                    warn!(service = %value, "selected service is not an option");
                }
            }
            None => {
                if let Some(form) = self.form.as_mut() {
                    form.service = value;
                }
            }
        }
        Vec::new()
    }

    fn on_submit(&mut self) -> Vec<Effect> {
        let Some(form) = self.form_input() else {
            warn!("{}", PujasevaError::MissingElement("request form"));
            return Vec::new();
        };
        match BookingRequest::from_form(&form) {
            Ok(request) => {
                info!(service = %request.service, "booking request composed");
                vec![Effect::OpenUrl(request.link(&self.link))]
            }
            Err(e) => {
                let human = humanize_error(&e);
                if human.is_user_facing() {
                    vec![Effect::Alert(human.message)]
                } else {
                    warn!(error = %e, "request not sent");
                    Vec::new()
                }
            }
        }
    }
}
