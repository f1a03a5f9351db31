// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Presentation of errors to whoever needs to see them.
//
// A missing required field is the only failure a visitor ever sees; it is
// shown as a blocking alert. Everything else is a developer diagnostic and
// only reaches the log.

use crate::error::PujasevaError;

/// Alert text shown when name, phone or service is left empty.
pub const MISSING_FIELDS_ALERT: &str = "Please fill name, phone and service.";

/// Who an error is meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Shown to the visitor as a blocking alert. They can fix it and retry.
    UserFacing,
    /// Logged as a warning; the page carries on without the affected part.
    Diagnostic,
}

/// An error message paired with how it should be surfaced.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Text for the alert dialog or the log line.
    pub message: String,
    /// Drives alert-vs-log in the UI shell.
    pub severity: Severity,
}

impl HumanError {
    pub fn is_user_facing(&self) -> bool {
        self.severity == Severity::UserFacing
    }
}

/// Convert a `PujasevaError` into its presentation.
pub fn humanize_error(err: &PujasevaError) -> HumanError {
    match err {
        PujasevaError::MissingFields(_) => HumanError {
            message: MISSING_FIELDS_ALERT.into(),
            severity: Severity::UserFacing,
        },

        PujasevaError::MissingElement(what) => HumanError {
            message: format!("{what} not found on the page; the related section is disabled"),
            severity: Severity::Diagnostic,
        },

        PujasevaError::PlatformUnavailable => HumanError {
            message: "this platform cannot open links or show dialogs".into(),
            severity: Severity::Diagnostic,
        },

        other => HumanError {
            message: other.to_string(),
            severity: Severity::Diagnostic,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_is_user_facing() {
        let human = humanize_error(&PujasevaError::MissingFields(vec!["name"]));
        assert_eq!(human.severity, Severity::UserFacing);
        assert_eq!(human.message, "Please fill name, phone and service.");
        assert!(human.is_user_facing());
    }

    #[test]
    fn missing_element_is_diagnostic() {
        let human = humanize_error(&PujasevaError::MissingElement("modal"));
        assert_eq!(human.severity, Severity::Diagnostic);
        assert!(human.message.starts_with("modal"));
    }

    #[test]
    fn config_errors_stay_in_the_log() {
        let human = humanize_error(&PujasevaError::Config("empty recipient".into()));
        assert!(!human.is_user_facing());
        assert!(human.message.contains("empty recipient"));
    }
}
