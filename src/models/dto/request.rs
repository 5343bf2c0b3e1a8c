use serde::Deserialize;
use validator::Validate;

fn default_num_questions() -> u32 {
    5
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct QuizRequest {
    #[validate(length(min = 1, message = "topic must not be empty"))]
    pub topic: String,

    #[serde(default = "default_num_questions")]
    #[validate(range(min = 1, message = "num_questions must be positive"))]
    pub num_questions: u32,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AnalyzeRequest {
    #[validate(length(min = 1, message = "user_id must not be empty"))]
    pub user_id: String,

    /// Opaque action records; only the count is used.
    #[serde(default)]
    pub actions: Vec<serde_json::Value>,
}
