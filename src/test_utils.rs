#[cfg(test)]
pub mod fixtures {
    use crate::models::domain::QuizQuestion;

    /// A quiz question with all expected fields present.
    pub fn sample_question() -> QuizQuestion {
        QuizQuestion {
            question: "What does AMM stand for?".to_string(),
            choices: vec![
                "Automated Market Maker".to_string(),
                "Asset Management Module".to_string(),
                "Aggregated Money Market".to_string(),
                "Autonomous Mining Machine".to_string(),
            ],
            correct_index: 1,
        }
    }

    /// A provider reply with conversational prose around a one-question array.
    pub fn completion_with_one_question() -> String {
        let array = serde_json::to_string(&vec![sample_question()])
            .expect("fixture question serializes");
        format!("Here is your quiz:\n{}\nGood luck!", array)
    }
}
