use std::fmt;

use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// One concrete problem found in an onboarding payload: where it is, what is
/// wrong, and the constraint parameters a client can use to fix it.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Violation {
    /// Dotted path into the payload (e.g. `timeFrequency.minutesPerSession`),
    /// or `(root)` for payload-level problems.
    pub path: String,
    pub message: String,
    /// Constraint parameters (allowed values, bounds, expected type).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<serde_json::Value>,
}

impl Violation {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            params: None,
        }
    }

    pub fn with_params(mut self, params: serde_json::Value) -> Self {
        self.params = Some(params);
        self
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "• {} {}", self.path, self.message)?;
        if let Some(params) = &self.params {
            write!(f, " {}", params)?;
        }
        Ok(())
    }
}

fn bullet_lines(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Why an onboarding payload was rejected.
///
/// `Schema` carries every shape/type/enum mismatch found in one pass.
/// `Boundary` is the hand-coded age-range rule, which runs only after the
/// shape check passes and is reported on its own.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Onboarding payload failed validation:\n{}", bullet_lines(.0))]
    Schema(Vec<Violation>),
    #[error("Onboarding payload failed validation:\n{0}")]
    Boundary(Violation),
}

impl ValidationError {
    pub fn violations(&self) -> Vec<&Violation> {
        match self {
            ValidationError::Schema(violations) => violations.iter().collect(),
            ValidationError::Boundary(violation) => vec![violation],
        }
    }
}

/// Structured error response shared by the API and CLI surfaces.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiError {
    /// Machine-readable error code (e.g. "validation_failed", "upstream_error")
    pub error: String,
    /// Human-readable description of what went wrong
    pub message: String,
    /// Which field caused the error (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// The value that was received (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received: Option<serde_json::Value>,
    /// Request ID for tracing and debugging
    pub request_id: String,
    /// Hint about what the correct usage looks like
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docs_hint: Option<String>,
}

/// Error codes used across the API
pub mod codes {
    pub const VALIDATION_FAILED: &str = "validation_failed";
    pub const NOT_FOUND: &str = "not_found";
    pub const UPSTREAM_ERROR: &str = "upstream_error";
    pub const INTERNAL_ERROR: &str = "internal_error";
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{ValidationError, Violation};

    #[test]
    fn schema_error_lists_every_violation() {
        let err = ValidationError::Schema(vec![
            Violation::new("userProfile", "is required"),
            Violation::new("goals.primary", "must be one of the allowed values")
                .with_params(json!({"allowedValues": ["strength", "endurance"]})),
        ]);

        let rendered = err.to_string();
        assert!(rendered.starts_with("Onboarding payload failed validation:\n"));
        assert!(rendered.contains("• userProfile is required"));
        assert!(rendered.contains("• goals.primary must be one of the allowed values"));
        assert!(rendered.contains("allowedValues"));
    }

    #[test]
    fn boundary_error_renders_single_line() {
        let err = ValidationError::Boundary(Violation::new(
            "userProfile.age",
            "must be >= 13 and <= 100",
        ));
        assert_eq!(
            err.to_string(),
            "Onboarding payload failed validation:\n• userProfile.age must be >= 13 and <= 100"
        );
        assert_eq!(err.violations().len(), 1);
    }
}
