use serde::{Deserialize, Serialize};

use crate::model::SessionId;

/// A single interview question as generated by the remote service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "question")]
    pub text: String,
    #[serde(default)]
    pub context: String,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub expected_topics: Vec<String>,
    pub time_limit_seconds: u32,
}

/// Question response body: the question plus the session it belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuedQuestion {
    pub session_id: SessionId,
    #[serde(flatten)]
    pub question: Question,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_question_parses_flat_body() {
        let body = r#"{
            "session_id": "abc-123",
            "question": "Explain hash maps.",
            "context": "Think about collisions.",
            "difficulty": "medium",
            "expected_topics": ["hashing", "collisions", "load factor"],
            "time_limit_seconds": 180
        }"#;
        let issued: IssuedQuestion = serde_json::from_str(body).unwrap();
        assert_eq!(issued.session_id.as_str(), "abc-123");
        assert_eq!(issued.question.text, "Explain hash maps.");
        assert_eq!(
            issued.question.expected_topics,
            vec!["hashing", "collisions", "load factor"]
        );
        assert_eq!(issued.question.time_limit_seconds, 180);
    }
}
