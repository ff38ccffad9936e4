use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A backend failure reduced to text the UI can show.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// The main error message
    pub message: String,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorResponse {
    /// Creates a new error response with just a message.
    ///
    /// # Arguments
    /// * `message` - The error message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new error response with message and details.
    ///
    /// # Arguments
    /// * `message` - The error message
    /// * `details` - Additional error details
    pub fn with_details(message: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Build an error response from a raw response body.
    ///
    /// JSON bodies are flattened with [`describe_error_body`]; anything else
    /// is used verbatim, and an empty body yields `fallback`.
    pub fn from_body(body: &str, fallback: impl Into<String>) -> Self {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            return Self::new(fallback);
        }
        match serde_json::from_str::<Value>(trimmed) {
            Ok(value) => describe_error_body(&value).map_or_else(|| Self::new(fallback), Self::new),
            Err(_) => Self::new(trimmed),
        }
    }
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.details {
            Some(details) => write!(f, "{}: {}", self.message, details),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for ErrorResponse {}

fn join_messages(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Array(items) => items
            .iter()
            .map(join_messages)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn field_label(field: &str) -> String {
    let mut chars = field.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let rest: String = chars.collect();
    format!("{}{}", first.to_uppercase(), rest.replacen('_', " ", 1))
}

/// Flatten a DRF error body into one line.
///
/// Checks `detail`, `message`, `error` and `non_field_errors` in that order;
/// otherwise renders every field as `Field name: msg1, msg2` joined with
/// ` | `. Returns `None` when nothing printable is present.
#[must_use]
pub fn describe_error_body(body: &Value) -> Option<String> {
    match body {
        Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
        Value::Object(fields) => {
            for key in ["detail", "message", "error", "non_field_errors"] {
                if let Some(value) = fields.get(key) {
                    let text = join_messages(value);
                    if !text.is_empty() {
                        return Some(text);
                    }
                }
            }
            let parts: Vec<String> = fields
                .iter()
                .map(|(field, messages)| {
                    format!("{}: {}", field_label(field), join_messages(messages))
                })
                .collect();
            (!parts.is_empty()).then(|| parts.join(" | "))
        }
        Value::Array(items) if !items.is_empty() => Some(join_messages(body)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test_case(json!({"detail": "Not found."}), "Not found." ; "detail wins")]
    #[test_case(json!({"message": "No upvote to remove"}), "No upvote to remove" ; "message")]
    #[test_case(json!({"error": "comment_id is required", "status": 400}), "comment_id is required" ; "error key")]
    #[test_case(
        json!({"non_field_errors": ["Unable to log in.", "Try again."]}),
        "Unable to log in., Try again." ;
        "non field errors joined"
    )]
    #[test_case(
        json!({"email": ["user with this email already exists."]}),
        "Email: user with this email already exists." ;
        "single field"
    )]
    #[test_case(
        json!({"first_name": ["Too long."], "password": ["Too short.", "Too common."]}),
        "First name: Too long. | Password: Too short., Too common." ;
        "several fields"
    )]
    #[test_case(json!("Server exploded"), "Server exploded" ; "plain string")]
    fn flattens_error_bodies(body: Value, expected: &str) {
        assert_eq!(describe_error_body(&body).as_deref(), Some(expected));
    }

    #[test]
    fn field_errors_keep_backend_order() {
        let body: Value =
            serde_json::from_str(r#"{"password":["Too short."],"email":["Taken."]}"#).unwrap();
        assert_eq!(
            describe_error_body(&body).as_deref(),
            Some("Password: Too short. | Email: Taken.")
        );
    }

    #[test]
    fn empty_bodies_yield_nothing() {
        assert_eq!(describe_error_body(&json!({})), None);
        assert_eq!(describe_error_body(&json!(null)), None);
        assert_eq!(describe_error_body(&json!("  ")), None);
    }

    #[test]
    fn only_first_underscore_becomes_space() {
        assert_eq!(field_label("organization_name_x"), "Organization name_x");
    }

    #[test]
    fn from_body_handles_text_json_and_empty() {
        assert_eq!(
            ErrorResponse::from_body(r#"{"detail":"Denied"}"#, "fallback").message,
            "Denied"
        );
        assert_eq!(
            ErrorResponse::from_body("<h1>Bad Gateway</h1>", "fallback").message,
            "<h1>Bad Gateway</h1>"
        );
        assert_eq!(ErrorResponse::from_body("", "fallback").message, "fallback");
        assert_eq!(ErrorResponse::from_body("{}", "fallback").message, "fallback");
    }

    #[test]
    fn display_includes_details() {
        let error = ErrorResponse::with_details("Main error", "Additional info");
        assert_eq!(error.to_string(), "Main error: Additional info");
        assert_eq!(ErrorResponse::new("Simple error").to_string(), "Simple error");
    }
}
