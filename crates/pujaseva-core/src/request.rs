// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Booking request form: validation and message composition.

use crate::deeplink::MessagingLink;
use crate::error::{PujasevaError, Result};
use crate::types::{FormField, RequestForm};

/// Shown in place of empty details.
pub const NO_DETAILS: &str = "-";

/// Required fields, in the order they are checked.
const REQUIRED: [FormField; 3] = [FormField::Name, FormField::Phone, FormField::Service];

/// A request whose required fields are all present, trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    pub name: String,
    pub phone: String,
    pub service: String,
    /// `None` when the visitor left details empty.
    pub details: Option<String>,
}

impl BookingRequest {
    /// Trim every field and check that name, phone and service are filled.
    pub fn from_form(form: &RequestForm) -> Result<Self> {
        let missing: Vec<&'static str> = REQUIRED
            .iter()
            .filter(|f| form.field(**f).trim().is_empty())
            .map(FormField::as_str)
            .collect();
        if !missing.is_empty() {
            return Err(PujasevaError::MissingFields(missing));
        }

        let details = form.details.trim();
        Ok(Self {
            name: form.name.trim().to_owned(),
            phone: form.phone.trim().to_owned(),
            service: form.service.trim().to_owned(),
            details: (!details.is_empty()).then(|| details.to_owned()),
        })
    }

    /// The multi-line message sent to the recipient.
    pub fn message(&self) -> String {
        [
            "New Puja Request:".to_owned(),
            format!("Name: {}", self.name),
            format!("Phone: {}", self.phone),
            format!("Service: {}", self.service),
            format!("Details: {}", self.details.as_deref().unwrap_or(NO_DETAILS)),
        ]
        .join("\n")
    }

    /// Deep-link that opens the messaging app with this request pre-filled.
    pub fn link(&self, link: &MessagingLink) -> String {
        link.with_message(&self.message())
    }
}

/// Validate `form` and build the outbound link for it.
pub fn submit_request(form: &RequestForm, link: &MessagingLink) -> Result<String> {
    let request = BookingRequest::from_form(form)?;
    Ok(request.link(link))
}
