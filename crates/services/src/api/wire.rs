use interview_core::model::SessionId;
use serde::Serialize;
use serde_json::Value;

/// Body of `POST /api/interview/answer`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SubmitAnswerRequest {
    pub session_id: SessionId,
    pub question: String,
    pub answer: String,
}

/// Body of `POST /api/interview/next`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NextQuestionRequest {
    pub session_id: SessionId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_score: Option<u32>,
}

/// Pull a human-readable message out of an error body.
///
/// Handles `{"detail": "..."}`, FastAPI's validation shape
/// `{"detail": [{"msg": "..."}]}` and `{"error": "..."}`.
#[must_use]
pub fn error_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let detail = match value.get("detail") {
        Some(Value::String(text)) => Some(text.clone()),
        Some(Value::Array(items)) => items
            .iter()
            .find_map(|item| item.get("msg").and_then(Value::as_str))
            .map(str::to_string),
        _ => None,
    };
    detail
        .or_else(|| value.get("error").and_then(Value::as_str).map(str::to_string))
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}
