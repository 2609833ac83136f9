//! User-visible messages and their severity.

use crate::error::AnalyzerError;
use serde::Serialize;

/// How prominently a [`Notice`] is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    /// CSS class used by the page template.
    pub fn css_class(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// A message shown above the analysis result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

impl From<&AnalyzerError> for Notice {
    fn from(err: &AnalyzerError) -> Self {
        Self {
            severity: err.severity(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notice_from_error_keeps_severity() {
        let n = Notice::from(&AnalyzerError::NoTextExtracted);
        assert_eq!(n.severity, Severity::Warning);
        assert!(n.message.starts_with("No text extracted"));

        let n = Notice::from(&AnalyzerError::missing_api_key());
        assert_eq!(n.severity, Severity::Error);
    }

    #[test]
    fn css_classes() {
        assert_eq!(Severity::Info.css_class(), "info");
        assert_eq!(Severity::Warning.css_class(), "warning");
        assert_eq!(Severity::Error.css_class(), "error");
    }
}
