use std::fmt;

use actix_multipart::MultipartError;
use actix_web::{
    error::{JsonPayloadError, PayloadError, QueryPayloadError, ResponseError},
    http::{header::ContentType, StatusCode},
    HttpResponse
};
use derive_more::Display;
use serde::Serialize;
use validator::ValidationErrors;

#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Local, field-level rejection. Never reaches the network.
    ValidationError(Vec<FieldError>),
    NotFound(String),
    BadRequest(String),
    Conflict(String),
    /// A read against the row or object store failed.
    FetchError(String),
    /// The row insert (or update/delete) failed; nothing was persisted.
    WriteError(String),
    /// The row was inserted as `id` but its asset upload failed afterwards.
    /// The row is left without an image.
    UploadError { id: String, message: String },
    InternalError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ValidationError(errors) => {
                let messages = errors.iter()
                    .map(|e| format!("{}:{}", e.field, e.message))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "validation error: {}", messages)
            }
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::FetchError(msg) => write!(f, "Fetch failed: {}", msg),
            AppError::WriteError(msg) => write!(f, "Write failed: {}", msg),
            AppError::UploadError { id, message } => {
                write!(f, "Asset upload failed for row {}: {}", id, message)
            }
            AppError::InternalError(msg) => write!(f, "Internal server error: {}", msg)
        }
    }
}

impl std::error::Error for AppError {}

impl AppError {
    pub fn validation(field: &str, message: &str) -> Self {
        AppError::ValidationError(vec![FieldError {
            field: field.to_string(),
            message: message.to_string(),
        }])
    }

    /// The single string shown to a visitor. Validation errors keep their first field
    /// message; anything that came from the network collapses to `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            AppError::ValidationError(errors) => errors
                .first()
                .map(|e| e.message.clone())
                .unwrap_or_else(|| "Invalid input".to_string()),
            AppError::Conflict(msg) | AppError::BadRequest(msg) => msg.clone(),
            _ => fallback.to_string(),
        }
    }

    pub fn is_orphaned_row(&self) -> bool {
        matches!(self, AppError::UploadError { .. })
    }

    /// Response body text. Backend failures get a fixed message; the detail stays in
    /// `Display` for the logs.
    fn public_message(&self) -> String {
        match self {
            AppError::FetchError(_) => "Failed to load content from the backend".to_string(),
            AppError::WriteError(_) => "Failed to save changes to the backend".to_string(),
            AppError::UploadError { .. } => "Saved, but the image upload failed".to_string(),
            AppError::InternalError(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::ValidationError(errors) => {
                serde_json::json!({
                    "error": "Validation failed",
                    "details": errors
                })
            }
            AppError::UploadError { id, .. } => {
                serde_json::json!({
                    "error": self.public_message(),
                    "id": id
                })
            }
            _ => {
                serde_json::json!({"error": self.public_message()})
            }
        };
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::FetchError(_) => StatusCode::BAD_GATEWAY,
            AppError::WriteError(_) => StatusCode::BAD_GATEWAY,
            AppError::UploadError { .. } => StatusCode::BAD_GATEWAY,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut field_errors: Vec<FieldError> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(|e| FieldError {
                    field: field.to_string(),
                    message: e
                        .message
                        .as_ref()
                        .map(|s| s.to_string())
                        .unwrap_or_else(|| "Invalid value".to_string()),
                })
            })
            .collect();

        // field_errors() is backed by a map; keep the output deterministic
        field_errors.sort_by(|a, b| a.field.cmp(&b.field));

        AppError::ValidationError(field_errors)
    }
}

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        match err {
            MultipartError::ContentTypeIncompatible => {
                AppError::BadRequest("Content type incompatible".to_string())
            }
            MultipartError::Payload(PayloadError::Overflow) => {
                AppError::BadRequest("Uploaded content exceeds the size limit".to_string())
            }
            _ => AppError::BadRequest(err.to_string()),
        }
    }
}

impl From<JsonPayloadError> for AppError {
    fn from(err: JsonPayloadError) -> Self {
        AppError::BadRequest(format!("JSON payload error: {}", err))
    }
}

impl From<QueryPayloadError> for AppError {
    fn from(err: QueryPayloadError) -> Self {
        AppError::BadRequest(format!("Query error: {}", err))
    }
}

/// Failures raised by the row/object store clients before they are tagged as a
/// fetch, write or upload failure by the gateway.
#[derive(Debug, Display, Clone, PartialEq)]
pub enum GatewayError {
    #[display("Request failed: {_0}")]
    Transport(String),

    #[display("Backend responded with {status}: {body}")]
    Status { status: u16, body: String },

    #[display("Unexpected response body: {_0}")]
    Decode(String),

    #[display("Backend returned no id for the inserted row")]
    MissingId,
}

impl std::error::Error for GatewayError {}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            GatewayError::Decode(err.to_string())
        } else {
            GatewayError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        GatewayError::Decode(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}
