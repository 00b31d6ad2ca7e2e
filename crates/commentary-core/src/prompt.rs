//! Prompt construction for position commentary
//!
//! Pure string building; missing fields degrade to a placeholder instead of
//! failing, so the same record shape works for every phase of a game.

use crate::analysis::PositionAnalysis;

const PLACEHOLDER: &str = "N/A";

/// Build the instruction sent to the LLM for one position.
///
/// Deterministic: the same record always yields the same prompt.
pub fn build_commentary_prompt(position: &PositionAnalysis) -> String {
    let move_number = position
        .move_number
        .map_or_else(|| PLACEHOLDER.to_string(), |n| n.to_string());
    let turn = if position.is_white_move { "White" } else { "Black" };
    let played_move = position.played_move.as_deref().unwrap_or(PLACEHOLDER);
    let engine_best_move = position.engine_best_move.as_deref().unwrap_or(PLACEHOLDER);
    let evaluation = position.evaluation_text.as_deref().unwrap_or(PLACEHOLDER);

    format!(
        "You are a chess commentator analyzing a game. Provide natural, engaging commentary.\n\
         \n\
         Position Details:\n\
         - Move Number: {move_number}\n\
         - Turn: {turn}\n\
         - Move Played: {played_move}\n\
         - Engine Best Move: {engine_best_move}\n\
         - Evaluation: {evaluation}\n\
         \n\
         Write 2-3 sentences of natural chess commentary explaining this position and move quality."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_record() -> PositionAnalysis {
        PositionAnalysis {
            ply_number: Some(1),
            move_number: Some(1),
            is_white_move: true,
            played_move: Some("e4".to_string()),
            engine_best_move: Some("e4".to_string()),
            evaluation_text: Some("+0.3".to_string()),
        }
    }

    #[test]
    fn test_prompt_contains_all_fields() {
        let prompt = build_commentary_prompt(&full_record());
        assert!(prompt.starts_with("You are a chess commentator"));
        assert!(prompt.contains("- Move Number: 1"));
        assert!(prompt.contains("- Turn: White"));
        assert!(prompt.contains("- Move Played: e4"));
        assert!(prompt.contains("- Engine Best Move: e4"));
        assert!(prompt.contains("- Evaluation: +0.3"));
        assert!(prompt.ends_with("move quality."));
    }

    #[test]
    fn test_black_to_move() {
        let record = PositionAnalysis {
            is_white_move: false,
            ..full_record()
        };
        let prompt = build_commentary_prompt(&record);
        assert!(prompt.contains("- Turn: Black"));
    }

    #[test]
    fn test_missing_fields_use_placeholder() {
        let record: PositionAnalysis = serde_json::from_str(r#"{"plyNumber": 3}"#).unwrap();
        let prompt = build_commentary_prompt(&record);
        assert!(prompt.contains("- Move Number: N/A"));
        assert!(prompt.contains("- Move Played: N/A"));
        assert!(prompt.contains("- Engine Best Move: N/A"));
        assert!(prompt.contains("- Evaluation: N/A"));
        // Absent boolean renders as Black, same as the wire default
        assert!(prompt.contains("- Turn: Black"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let record = full_record();
        assert_eq!(
            build_commentary_prompt(&record),
            build_commentary_prompt(&record)
        );
    }

    #[test]
    fn test_prompt_requests_short_commentary() {
        let prompt = build_commentary_prompt(&full_record());
        assert!(prompt.contains("2-3 sentences"));
    }
}
