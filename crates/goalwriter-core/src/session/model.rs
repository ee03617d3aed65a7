//! Session domain model.
//!
//! This module contains the core Session entity that represents one
//! user's questionnaire run in the application's domain layer.

use super::reason::{Reason, ReasonDetail};
use super::step::Step;
use super::timing::ChangeTiming;
use serde::{Deserialize, Serialize};

/// The in-memory record holding the current step and all user-provided
/// answers for one interaction.
///
/// A session contains:
/// - The currently active screen (`step`)
/// - The selected job-change reason
/// - The reason-specific answer, tagged by the reason it belongs to
/// - The selected change timeframe
/// - The composed final statement
///
/// Only the detail payload matching the selected reason can exist;
/// (re-)entering the reason screen discards it. There is no persistence
/// across process restarts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// The currently active screen.
    pub step: Step,
    /// The selected job-change reason.
    pub reason: Reason,
    /// The reason-specific answer, once submitted.
    #[serde(default)]
    pub detail: Option<ReasonDetail>,
    /// The selected timeframe, once submitted.
    #[serde(default)]
    pub change_timing: Option<ChangeTiming>,
    /// The composed summary; recomposed on each timing submission.
    #[serde(default)]
    pub final_statement: Option<String>,
}

impl Session {
    /// Creates a session with default values, active on the intro screen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards every answer and returns to the intro screen.
    ///
    /// Equivalent to destroying and recreating the session.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
