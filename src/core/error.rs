use thiserror::Error;

/// Message carried by every [`InvoiceError::Invalid`].
pub const INVALID_INVOICE: &str = "Invoice is invalid";

/// Errors that can occur while building or rendering an invoice.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InvoiceError {
    /// The invoice amounts are inconsistent; nothing was rendered.
    #[error("{message}: {}", join_errors(.errors))]
    Invalid {
        message: String,
        errors: Vec<ValidationError>,
    },

    /// The requested document version is not supported.
    #[error("unsupported document version: {0}")]
    UnsupportedVersion(u8),

    /// Builder encountered invalid or missing configuration.
    #[error("builder error: {0}")]
    Builder(String),

    /// XML writer failure.
    #[error("XML error: {0}")]
    Xml(String),
}

impl InvoiceError {
    /// Wrap a list of violations as an invalid-invoice error.
    pub fn invalid(errors: Vec<ValidationError>) -> Self {
        Self::Invalid {
            message: INVALID_INVOICE.to_string(),
            errors,
        }
    }

    /// Violations carried by this error; empty for other kinds.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::Invalid { errors, .. } => errors,
            _ => &[],
        }
    }
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// A single violated rule with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Name of the checked field (e.g. "grand_total_amount").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
    /// Rule identifier if applicable (e.g. "GRAND-TOTAL").
    pub rule: Option<String>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(rule) = &self.rule {
            write!(f, "[{}] {}: {}", rule, self.field, self.message)
        } else {
            write!(f, "{}: {}", self.field, self.message)
        }
    }
}

impl ValidationError {
    /// Create a validation error without a rule ID.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: None,
        }
    }

    /// Create a validation error with a rule ID.
    pub fn with_rule(
        field: impl Into<String>,
        message: impl Into<String>,
        rule: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: Some(rule.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_error_lists_violations() {
        let err = InvoiceError::invalid(vec![ValidationError::with_rule(
            "grand_total_amount",
            "deviates",
            "GRAND-TOTAL",
        )]);
        assert_eq!(
            err.to_string(),
            "Invoice is invalid: [GRAND-TOTAL] grand_total_amount: deviates"
        );
        assert_eq!(err.validation_errors().len(), 1);
    }

    #[test]
    fn other_errors_carry_no_violations() {
        let err = InvoiceError::UnsupportedVersion(3);
        assert_eq!(err.to_string(), "unsupported document version: 3");
        assert!(err.validation_errors().is_empty());
    }
}
