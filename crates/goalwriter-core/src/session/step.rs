//! Screen identifiers for the questionnaire flow.

use serde::{Deserialize, Serialize};

/// Identifies which screen of the questionnaire is active.
///
/// Steps advance strictly forward: `Intro` → `ReasonDetail` → `Timing`.
/// The flow has no terminal transition; only a reset returns to `Intro`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step {
    /// Free-text goal entry.
    #[default]
    Intro,
    /// Reason selection plus the reason-specific detail field.
    ReasonDetail,
    /// Timeframe selection and summary display.
    Timing,
}
