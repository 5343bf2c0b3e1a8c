use serde::{Deserialize, Serialize};

use crate::models::domain::QuizQuestion;

/// Envelope for `/generate-quiz`. Failures are reported in the body, not the
/// HTTP status: every reply is 200 with either `questions` or `error` set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizResponse {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub questions: Option<Vec<QuizQuestion>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl QuizResponse {
    pub fn ok(questions: Vec<QuizQuestion>) -> Self {
        Self {
            success: true,
            questions: Some(questions),
            error: None,
        }
    }

    pub fn error(err: impl std::fmt::Display) -> Self {
        Self {
            success: false,
            questions: None,
            error: Some(err.to_string()),
        }
    }
}

/// Envelope for `/analyze`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub ai_feedback: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_envelope_omits_error_field() {
        let response = QuizResponse::ok(vec![]);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["success"], true);
        assert!(json.get("error").is_none());
        assert_eq!(json["questions"], serde_json::json!([]));
    }

    #[test]
    fn test_error_envelope_omits_questions_field() {
        let response = QuizResponse::error("Upstream error: timed out");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["success"], false);
        assert!(json.get("questions").is_none());
        assert_eq!(json["error"], "Upstream error: timed out");
    }
}
