use once_cell::sync::Lazy;
use regex::Regex;

use crate::{errors::AppResult, models::domain::QuizQuestion};

// Greedy: the span runs from the first '[' to the last ']' in the text, even
// when several arrays are present. Matches the upstream prompt contract.
static BRACKET_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\[.*\]").expect("BRACKET_SPAN is a valid regex pattern"));

/// Pulls the bracketed JSON array out of a provider's free-text reply and
/// decodes it into quiz questions.
///
/// No bracket span at all degrades to an empty list; a span that is not valid
/// JSON is a `DecodeError`. Array elements missing the expected fields are
/// dropped with a warning rather than failing the whole reply.
pub fn extract_questions(text: &str) -> AppResult<Vec<QuizQuestion>> {
    let span = match BRACKET_SPAN.find(text) {
        Some(span) => span.as_str(),
        None => return Ok(Vec::new()),
    };

    let items: Vec<serde_json::Value> = serde_json::from_str(span)?;

    let questions = items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<QuizQuestion>(item) {
            Ok(question) => Some(question),
            Err(err) => {
                log::warn!("Dropping malformed quiz question: {}", err);
                None
            }
        })
        .collect();

    Ok(questions)
}
