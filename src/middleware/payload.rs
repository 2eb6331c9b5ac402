//! Payload-key validation middleware.
//!
//! Every mutating route declares the top-level JSON body keys it expects; this
//! middleware compares those declarations against the keys actually submitted
//! and short-circuits with a 400 before the controller runs when any are
//! missing. Only key presence is checked — types and formats are left to the
//! controller's deserialization.

use axum::{
    body::{to_bytes, Body, Bytes},
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::dto::api::TextResponseDto;

/// Upper bound when buffering a request body for key inspection.
const PAYLOAD_BUFFER_LIMIT: usize = 2 * 1024 * 1024;

/// Top-level JSON body keys a route expects from the client.
///
/// Both lists are validated identically: a declared "optional" field that is
/// absent still fails the request with a 400, it is merely reported from its
/// own list after all required fields are present.
// TODO: confirm with product whether declared optional fields should really
// hard-fail when absent, or be skippable like the name suggests.
#[derive(Debug, Clone, Copy)]
pub struct ExpectedPayload {
    pub required: &'static [&'static str],
    pub optional: &'static [&'static str],
}

impl ExpectedPayload {
    /// Declares required fields only.
    pub const fn required(required: &'static [&'static str]) -> Self {
        Self {
            required,
            optional: &[],
        }
    }

    /// Declares required and optional fields.
    pub const fn with_optional(
        required: &'static [&'static str],
        optional: &'static [&'static str],
    ) -> Self {
        Self { required, optional }
    }
}

/// Validates the request body's top-level keys against the route's declared
/// field lists.
///
/// Missing required fields short-circuit with a 400 listing exactly the
/// missing names, joined by comma; otherwise missing optional fields produce
/// the same response shape from their own list. When nothing is missing the
/// buffered body is replayed into the inner handler untouched. A body that is
/// not a JSON object counts as having no keys at all.
pub async fn validate_client_payload(
    expected: ExpectedPayload,
    request: Request,
    next: Next,
) -> Response {
    let (parts, body) = request.into_parts();

    let bytes = match to_bytes(body, PAYLOAD_BUFFER_LIMIT).await {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::error!("Failed to buffer request payload: {err}");
            return (
                StatusCode::BAD_REQUEST,
                Json(TextResponseDto::text("Failed to read request payload.")),
            )
                .into_response();
        }
    };

    let client_data = client_data_keys(&bytes);

    let missing_required = missing_client_data(&client_data, expected.required);
    let missing_optional = missing_client_data(&client_data, expected.optional);

    if !missing_required.is_empty() {
        return missing_data_response(&missing_required);
    }

    if !missing_optional.is_empty() {
        return missing_data_response(&missing_optional);
    }

    next.run(Request::from_parts(parts, Body::from(bytes))).await
}

/// Collects the top-level keys of the submitted JSON object.
fn client_data_keys(bytes: &Bytes) -> Vec<String> {
    serde_json::from_slice::<serde_json::Map<String, serde_json::Value>>(bytes)
        .map(|object| object.keys().cloned().collect())
        .unwrap_or_default()
}

/// Returns the declared fields absent from the submitted keys.
fn missing_client_data(
    client_data: &[String],
    expected_data: &'static [&'static str],
) -> Vec<&'static str> {
    expected_data
        .iter()
        .copied()
        .filter(|field| !client_data.iter().any(|key| key == field))
        .collect()
}

fn missing_data_response(missing: &[&str]) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(TextResponseDto::text(format!(
            "Missing Data: {}.",
            missing.join(", ")
        ))),
    )
        .into_response()
}
