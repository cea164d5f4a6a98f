//! Article payload validation
//!
//! Length and presence rules are declared with `validator`; the status enum
//! check runs afterwards so every failing field is reported in one pass.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::{Validate, ValidationErrors};

use crate::db::models::{ArticleStatus, NewArticle};
use crate::errors::{AppError, Result};

/// Field order used when reporting failures
const FIELDS: [&str; 4] = ["title", "content", "category", "status"];

const STATUS_MESSAGE: &str = "Status must choose between publish, draft, or trash";

/// A single rejected field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Candidate article as received on the wire.
///
/// Every key is optional so that a missing key is reported as a
/// "required" failure instead of a body parse error. Values that are not
/// JSON strings are kept out of the text fields and reported per field.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(from = "RawPayload")]
pub struct ArticlePayload {
    #[validate(
        required(message = "Title is required"),
        length(min = 20, message = "Title at least 20 characters")
    )]
    pub title: Option<String>,

    #[validate(
        required(message = "Content is required"),
        length(min = 200, message = "Content at least 200 characters")
    )]
    pub content: Option<String>,

    #[validate(
        required(message = "Category is required"),
        length(min = 3, message = "Category at least 3 characters")
    )]
    pub category: Option<String>,

    #[validate(required(message = "Status is required"))]
    pub status: Option<String>,

    /// Fields whose JSON value was present but not a string
    non_text: Vec<&'static str>,
}

#[derive(Deserialize)]
struct RawPayload {
    title: Option<Value>,
    content: Option<Value>,
    category: Option<Value>,
    status: Option<Value>,
}

impl From<RawPayload> for ArticlePayload {
    fn from(raw: RawPayload) -> Self {
        let mut non_text = Vec::new();
        let mut text = |field: &'static str, value: Option<Value>| match value {
            Some(Value::String(s)) => Some(s),
            None => None,
            Some(_) => {
                non_text.push(field);
                None
            }
        };

        let title = text("title", raw.title);
        let content = text("content", raw.content);
        let category = text("category", raw.category);
        let status = text("status", raw.status);

        Self {
            title,
            content,
            category,
            status,
            non_text,
        }
    }
}

impl ArticlePayload {
    /// Run every rule and collect all failures in field order.
    pub fn check(&self) -> std::result::Result<(), Vec<FieldError>> {
        let declared = self.validate().err();
        let mut errors = Vec::new();

        for field in FIELDS {
            if self.non_text.contains(&field) {
                errors.push(FieldError::new(field, format!("{} must be a string", label(field))));
                continue;
            }
            if let Some(ref declared) = declared {
                errors.extend(messages_for(declared, field));
            }
            if field == "status" {
                if let Some(ref status) = self.status {
                    if status.parse::<ArticleStatus>().is_err() {
                        errors.push(FieldError::new("status", STATUS_MESSAGE));
                    }
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate and convert into the typed field set used by the repository.
    pub fn into_new_article(self) -> Result<NewArticle> {
        self.check().map_err(|errors| AppError::Validation { errors })?;

        match (self.title, self.content, self.category, self.status) {
            (Some(title), Some(content), Some(category), Some(status)) => Ok(NewArticle {
                title,
                content,
                category,
                status: status.parse().map_err(|message| AppError::Internal { message })?,
            }),
            _ => Err(AppError::Internal {
                message: "validated payload is missing a field".to_string(),
            }),
        }
    }
}

fn label(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn messages_for(errors: &ValidationErrors, field: &str) -> Vec<FieldError> {
    errors
        .field_errors()
        .get(field)
        .map(|list| {
            list.iter()
                .map(|error| {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{field} is invalid"));
                    FieldError::new(field, message)
                })
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_payload() -> ArticlePayload {
        ArticlePayload {
            title: Some("A title that is long enough".to_string()),
            content: Some("x".repeat(210)),
            category: Some("tech".to_string()),
            status: Some("publish".to_string()),
            ..ArticlePayload::default()
        }
    }

    fn fields(errors: &[FieldError]) -> Vec<&str> {
        errors.iter().map(|e| e.field.as_str()).collect()
    }

    #[test]
    fn test_valid_payload_passes() {
        let article = valid_payload().into_new_article().unwrap();
        assert_eq!(article.status, ArticleStatus::Publish);
        assert_eq!(article.category, "tech");
    }

    #[test]
    fn test_short_title_is_rejected() {
        let mut payload = valid_payload();
        payload.title = Some("too short".to_string());

        let errors = payload.check().unwrap_err();
        assert_eq!(errors, vec![FieldError::new("title", "Title at least 20 characters")]);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let mut payload = valid_payload();
        // 20 characters, 40 bytes
        payload.title = Some("é".repeat(20));
        assert!(payload.check().is_ok());

        payload.title = Some("é".repeat(19));
        assert!(payload.check().is_err());
    }

    #[test]
    fn test_missing_fields_report_required_only() {
        let errors = ArticlePayload::default().check().unwrap_err();
        let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Title is required",
                "Content is required",
                "Category is required",
                "Status is required",
            ]
        );
    }

    #[test]
    fn test_all_failures_are_collected_in_field_order() {
        let payload = ArticlePayload {
            title: Some("short".to_string()),
            content: Some("short".to_string()),
            category: Some("ab".to_string()),
            status: Some("Publish".to_string()),
            ..ArticlePayload::default()
        };
        let errors = payload.check().unwrap_err();
        assert_eq!(fields(&errors), vec!["title", "content", "category", "status"]);
        assert_eq!(errors[3].message, STATUS_MESSAGE);
    }

    #[test]
    fn test_boundary_lengths_are_accepted() {
        let payload = ArticlePayload {
            title: Some("t".repeat(20)),
            content: Some("c".repeat(200)),
            category: Some("abc".to_string()),
            status: Some("draft".to_string()),
            ..ArticlePayload::default()
        };
        assert!(payload.check().is_ok());
    }

    #[test]
    fn test_payload_deserializes_with_missing_keys() {
        let payload: ArticlePayload =
            serde_json::from_str(r#"{"title": "A title that is long enough"}"#).unwrap();
        let errors = payload.into_new_article().unwrap_err();
        match errors {
            AppError::Validation { errors } => {
                assert_eq!(fields(&errors), vec!["content", "category", "status"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_non_string_values_are_field_errors() {
        let payload: ArticlePayload = serde_json::from_str(
            r#"{"title": 12345, "content": null, "category": "ab", "status": ["draft"]}"#,
        )
        .unwrap();

        let errors = payload.check().unwrap_err();
        assert_eq!(
            errors,
            vec![
                FieldError::new("title", "Title must be a string"),
                FieldError::new("content", "Content is required"),
                FieldError::new("category", "Category at least 3 characters"),
                FieldError::new("status", "Status must be a string"),
            ]
        );
    }
}
