/// Static reply used when an analyze request cannot be processed.
pub const FEEDBACK_UNAVAILABLE: &str =
    "AI analysis temporarily unavailable. Keep up the great work!";

/// Maps a completed-quest count to one of four fixed encouragement tiers.
pub fn progress_feedback(completed_quests: usize) -> String {
    match completed_quests {
        0 => "Welcome to DeFiQuest! Start your learning journey by completing your first quest."
            .to_string(),
        1..=2 => format!(
            "Great start! You've completed {} quest(s). Keep building your DeFi knowledge foundation.",
            completed_quests
        ),
        3..=4 => format!(
            "Excellent progress! With {} quests completed, you're becoming a DeFi enthusiast. Consider exploring advanced topics.",
            completed_quests
        ),
        _ => format!(
            "Outstanding achievement! You've mastered {} quests. You're well on your way to becoming a DeFi expert!",
            completed_quests
        ),
    }
}
