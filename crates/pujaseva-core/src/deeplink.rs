// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Messaging deep-links.
//
// Links have the shape `https://<host>/<recipient>?text=<encoded message>`.
// Two templates exist: the modal's quick-contact link, which pre-fills an
// empty booking skeleton for one service, and the request form's full
// booking message.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::config::AppConfig;
use crate::error::{PujasevaError, Result};

/// Characters left unescaped in a URI component: `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode `text` for use as a single URI component.
pub fn encode_component(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}

/// Builds deep-links to the fixed recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessagingLink {
    base: String,
}

impl MessagingLink {
    /// Validate `config` and capture its base link.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| PujasevaError::InvalidLink(e.to_string()))?;
        Ok(Self {
            base: config.base_link(),
        })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Link carrying `encoded_text` verbatim as the `text` query value.
    fn with_encoded_text(&self, encoded_text: &str) -> String {
        format!("{}?text={encoded_text}", self.base)
    }

    /// The modal's "contact about this service" link.
    ///
    /// Only the title is encoded; the surrounding skeleton is already in
    /// URL form.
    pub fn quick_contact(&self, title: &str) -> String {
        let text = format!(
            "Hello Panditji,%0A%0AI would like to book: {}%0A%0AName:%20%0APhone:%20%0ADate/Details:%20",
            encode_component(title)
        );
        self.with_encoded_text(&text)
    }

    /// Link carrying a free-form `message`, fully encoded.
    pub fn with_message(&self, message: &str) -> String {
        self.with_encoded_text(&encode_component(message))
    }
}

impl Default for MessagingLink {
    fn default() -> Self {
        Self {
            base: AppConfig::default().base_link(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_like_encode_uri_component() {
        assert_eq!(encode_component("Griha Pravesh"), "Griha%20Pravesh");
        assert_eq!(encode_component("a&b=c/d?e#f"), "a%26b%3Dc%2Fd%3Fe%23f");
        assert_eq!(encode_component("-_.!~*'()"), "-_.!~*'()");
        assert_eq!(encode_component("line\nbreak"), "line%0Abreak");
        assert_eq!(encode_component("पूजा"), "%E0%A4%AA%E0%A5%82%E0%A4%9C%E0%A4%BE");
    }

    #[test]
    fn quick_contact_keeps_template_verbatim() {
        let link = MessagingLink::default().quick_contact("Graha Shanti");
        assert_eq!(
            link,
            "https://wa.me/919731671105?text=Hello Panditji,%0A%0AI would like to book: \
             Graha%20Shanti%0A%0AName:%20%0APhone:%20%0ADate/Details:%20"
        );
    }

    #[test]
    fn quick_contact_encodes_hostile_title() {
        let link = MessagingLink::default().quick_contact("A&text=evil");
        assert!(link.contains("book: A%26text%3Devil%0A"));
    }

    #[test]
    fn message_link_is_fully_encoded() {
        let link = MessagingLink::default().with_message("Name: Asha\nPhone: 1");
        assert_eq!(
            link,
            "https://wa.me/919731671105?text=Name%3A%20Asha%0APhone%3A%201"
        );
    }

    #[test]
    fn custom_recipient_from_config() {
        let config = AppConfig {
            messaging_host: "wa.me".into(),
            recipient_id: "15550001111".into(),
        };
        let link = MessagingLink::from_config(&config).unwrap();
        assert_eq!(link.base(), "https://wa.me/15550001111");
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = AppConfig {
            recipient_id: String::new(),
            ..Default::default()
        };
        assert!(matches!(
            MessagingLink::from_config(&config),
            Err(PujasevaError::InvalidLink(_))
        ));
    }
}
