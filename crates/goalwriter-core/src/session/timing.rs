//! Change-timing timeframes.

use serde::{Deserialize, Serialize};

/// The timeframe in which the user wants to change jobs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeTiming {
    /// "Immediately" (the default selection)
    #[default]
    Immediately,
    /// "Within 3 months"
    Within3Months,
    /// "Within 6 months"
    Within6Months,
    /// "Unsure"
    Unsure,
}

impl ChangeTiming {
    /// All selectable timeframes, in presentation order.
    pub const ALL: [ChangeTiming; 4] = [
        ChangeTiming::Immediately,
        ChangeTiming::Within3Months,
        ChangeTiming::Within6Months,
        ChangeTiming::Unsure,
    ];

    /// The label shown on the selection screen.
    pub fn label(&self) -> &'static str {
        match self {
            ChangeTiming::Immediately => "Immediately",
            ChangeTiming::Within3Months => "Within 3 months",
            ChangeTiming::Within6Months => "Within 6 months",
            ChangeTiming::Unsure => "Unsure",
        }
    }

    /// Looks up a timeframe by its exact display label.
    pub fn from_label(label: &str) -> Option<ChangeTiming> {
        Self::ALL.iter().copied().find(|t| t.label() == label)
    }

    /// The closing clause of the final summary.
    ///
    /// "Immediately" is phrased specially; every other timeframe uses its
    /// label verbatim.
    pub fn summary_clause(&self) -> String {
        match self {
            ChangeTiming::Immediately => "You want to change your job immediately.".to_string(),
            other => format!("You want to change your job by {}.", other.label()),
        }
    }
}
