use serde::{Deserialize, Serialize};

/// One multiple-choice question as emitted by the completion provider.
///
/// `choices` is expected to hold 4 options and `correct_index` to index into
/// it, but neither is enforced here; elements that fail to deserialize at all
/// are dropped by the response extractor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub choices: Vec<String>,
    pub correct_index: usize,
}
