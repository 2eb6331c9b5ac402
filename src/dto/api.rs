use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Caption appended to every failure envelope.
pub const SUPPORT_CAPTION: &str =
    "If the issue persists, please contact kujira.help@outlook.com";

/// Fallback message for errors with no recognized translation.
pub const UNKNOWN_ERROR: &str = "There was an unknown error.";

/// Failure envelope returned by every endpoint on error.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
    pub caption: String,
}

impl ErrorDto {
    /// Builds a failure envelope with the fixed support caption.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            caption: SUPPORT_CAPTION.to_string(),
        }
    }
}

/// Success envelope wrapping every non-error response.
///
/// Absent fields are omitted from the serialized JSON entirely rather than
/// being sent as `null`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ResponseDto<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<T>,
}

impl<T> ResponseDto<T> {
    /// Builds an envelope with a message and a payload.
    pub fn with_response(body: impl Into<String>, response: T) -> Self {
        Self {
            body: Some(body.into()),
            caption: None,
            response: Some(response),
        }
    }

    /// Builds an envelope carrying only a payload.
    pub fn response_only(response: T) -> Self {
        Self {
            body: None,
            caption: None,
            response: Some(response),
        }
    }
}

/// Success-shaped envelope carrying only a message, no payload.
pub type TextResponseDto = ResponseDto<()>;

impl TextResponseDto {
    /// Builds a message-only envelope.
    pub fn text(body: impl Into<String>) -> Self {
        Self {
            body: Some(body.into()),
            caption: None,
            response: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omits_absent_envelope_fields() {
        let envelope = TextResponseDto::text("Fetched entries!");

        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(json, serde_json::json!({ "body": "Fetched entries!" }));
    }

    #[test]
    fn error_envelope_always_carries_support_caption() {
        let envelope = ErrorDto::new("Record not found");

        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(json["error"], "Record not found");
        assert_eq!(json["caption"], SUPPORT_CAPTION);
    }
}
