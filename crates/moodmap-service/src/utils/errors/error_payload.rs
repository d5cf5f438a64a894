use serde::Serialize;
use utoipa::ToSchema;

/// JSON body of every error response
#[derive(Debug, Serialize, ToSchema)]
#[schema(example = json!({"message": "Bad request: unknown mood: brunch", "code": 400, "type": "BAD_REQUEST"}))]
pub struct ErrorPayload {
    pub message: String,
    /// Mirrors the HTTP status
    pub code: u16,
    /// Stable identifier such as `BAD_REQUEST` or `NOT_FOUND`
    pub r#type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}
