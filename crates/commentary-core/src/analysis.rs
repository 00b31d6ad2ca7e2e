//! Wire records — engine analysis in, generated commentary out
//!
//! Field names follow the JSON the game backend already sends
//! (`plyNumber`, `moveNumber`, ...), so everything is camelCase on the wire.

use serde::{Deserialize, Serialize};

/// Commentary text emitted in place of a failed generation
pub const FAILURE_COMMENTARY: &str = "Commentary generation failed for this position.";

/// One analyzed position as reported by the engine.
///
/// Every field is optional on the wire; absent identity fields are echoed
/// back as null rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionAnalysis {
    #[serde(default)]
    pub ply_number: Option<u32>,
    #[serde(default)]
    pub move_number: Option<u32>,
    #[serde(default)]
    pub is_white_move: bool,
    #[serde(default)]
    pub played_move: Option<String>,
    #[serde(default)]
    pub engine_best_move: Option<String>,
    #[serde(default)]
    pub evaluation_text: Option<String>,
}

impl PositionAnalysis {
    /// Ply 0 is the starting position; it gets no commentary.
    ///
    /// A record with no ply number at all is still commentated.
    pub fn is_starting_position(&self) -> bool {
        self.ply_number == Some(0)
    }
}

/// Commentary for one position, keyed by the source record's identity fields.
///
/// Exactly one of `provider`/`error` is present on the wire: `provider` when
/// generation succeeded, `error` when it failed and `commentary` holds
/// [`FAILURE_COMMENTARY`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionCommentary {
    pub ply_number: Option<u32>,
    pub move_number: Option<u32>,
    pub commentary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PositionCommentary {
    /// Successful generation for `source`
    pub fn generated(
        source: &PositionAnalysis,
        commentary: impl Into<String>,
        provider: impl Into<String>,
    ) -> Self {
        Self {
            ply_number: source.ply_number,
            move_number: source.move_number,
            commentary: commentary.into(),
            provider: Some(provider.into()),
            error: None,
        }
    }

    /// Failed generation for `source`; carries the fixed failure text
    pub fn failed(source: &PositionAnalysis, error: impl Into<String>) -> Self {
        Self {
            ply_number: source.ply_number,
            move_number: source.move_number,
            commentary: FAILURE_COMMENTARY.to_string(),
            provider: None,
            error: Some(error.into()),
        }
    }
}
