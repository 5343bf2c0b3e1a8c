/// Expected response shape shown to the completion provider. The extractor
/// pulls the bracketed array back out of whatever prose surrounds it.
pub const QUIZ_RESPONSE_FORMAT: &str = r#"[
  {
    "question": "...",
    "choices": ["...", "...", "...", "..."],
    "correct_index": 0
  },
  ...
]"#;

pub fn quiz_prompt(topic: &str, num_questions: u32) -> String {
    format!(
        "Generate {} multiple-choice questions on '{}' for DeFi beginners.\nFormat:\n{}",
        num_questions, topic, QUIZ_RESPONSE_FORMAT
    )
}
