// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for Pujaseva.

use serde::{Deserialize, Serialize};

/// One service offering shown as a card.
///
/// Immutable once built; the title is its only identity and doubles as the
/// lookup key into the service selection control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRecord {
    pub title: String,
    pub description: String,
    /// Relative path to a static image asset. Not checked for existence.
    pub image_ref: String,
}

impl ServiceRecord {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        image_ref: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            image_ref: image_ref.into(),
        }
    }
}

/// Fields of the booking request form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Phone,
    Service,
    Details,
}

impl FormField {
    /// The `name` attribute of the matching input.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Service => "service",
            Self::Details => "details",
        }
    }
}

/// Raw, untrimmed input of the booking request form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestForm {
    pub name: String,
    pub phone: String,
    pub service: String,
    pub details: String,
}

impl RequestForm {
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Phone => &self.phone,
            FormField::Service => &self.service,
            FormField::Details => &self.details,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Phone => self.phone = value,
            FormField::Service => self.service = value,
            FormField::Details => self.details = value,
        }
    }
}

/// One `<option>` of the service selection control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub text: String,
}

/// The service selection control: its options and the chosen value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceSelect {
    pub options: Vec<SelectOption>,
    pub value: String,
}

impl ServiceSelect {
    /// A control with a blank placeholder followed by one option per title.
    pub fn from_titles<'a>(placeholder: &str, titles: impl IntoIterator<Item = &'a str>) -> Self {
        let mut options = vec![SelectOption {
            value: String::new(),
            text: placeholder.to_owned(),
        }];
        options.extend(titles.into_iter().map(|t| SelectOption {
            value: t.to_owned(),
            text: t.to_owned(),
        }));
        Self {
            options,
            value: String::new(),
        }
    }

    /// Select the option whose value or visible text equals `title`.
    ///
    /// Returns `false` and leaves the selection untouched when nothing matches.
    pub fn select_matching(&mut self, title: &str) -> bool {
        let exists = self
            .options
            .iter()
            .any(|opt| opt.value == title || opt.text == title);
        if exists {
            self.value = title.to_owned();
        }
        exists
    }
}
