//! Job-change reason categories and their detail payloads.

use serde::{Deserialize, Serialize};

/// The user-selected motivation category for the job change.
///
/// Display labels are exposed for rendering only; control flow always
/// branches on the variant, never on the label text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reason {
    /// "Seeking better salary"
    #[default]
    BetterSalary,
    /// "Looking for more growth opportunities"
    GrowthOpportunities,
    /// "Wanting a better work-life balance"
    WorkLifeBalance,
    /// "Relocation for personal reasons"
    Relocation,
    /// "Other"
    Other,
}

impl Reason {
    /// All selectable reasons, in presentation order.
    pub const ALL: [Reason; 5] = [
        Reason::BetterSalary,
        Reason::GrowthOpportunities,
        Reason::WorkLifeBalance,
        Reason::Relocation,
        Reason::Other,
    ];

    /// The label shown on the selection screen.
    pub fn label(&self) -> &'static str {
        match self {
            Reason::BetterSalary => "Seeking better salary",
            Reason::GrowthOpportunities => "Looking for more growth opportunities",
            Reason::WorkLifeBalance => "Wanting a better work-life balance",
            Reason::Relocation => "Relocation for personal reasons",
            Reason::Other => "Other",
        }
    }

    /// Looks up a reason by its exact display label.
    pub fn from_label(label: &str) -> Option<Reason> {
        Self::ALL.iter().copied().find(|r| r.label() == label)
    }

    /// The heading shown above the detail field, if this reason has one.
    ///
    /// "Wanting a better work-life balance" captures no detail and has
    /// no heading.
    pub fn detail_heading(&self) -> Option<&'static str> {
        match self {
            Reason::BetterSalary => Some("How much salary are you looking for?"),
            Reason::GrowthOpportunities => Some("What role are you looking for?"),
            Reason::WorkLifeBalance => None,
            Reason::Relocation => Some("Which location do you want to relocate to?"),
            Reason::Other => Some("Please state your reason:"),
        }
    }

    /// The label of the free-text field on the detail screen.
    pub fn detail_field_label(&self) -> Option<&'static str> {
        match self {
            Reason::BetterSalary => Some("Enter the expected salary hike (%):"),
            Reason::GrowthOpportunities => Some("Enter the desired role:"),
            Reason::WorkLifeBalance => None,
            Reason::Relocation => Some("Enter the location:"),
            Reason::Other => Some("Enter the reason:"),
        }
    }

    /// Whether this reason captures a free-text detail at all.
    pub fn has_detail(&self) -> bool {
        self.detail_heading().is_some()
    }

    /// Wraps free text in the payload matching this reason.
    ///
    /// Returns `None` for a reason without a detail screen.
    pub fn detail(&self, text: impl Into<String>) -> Option<ReasonDetail> {
        match self {
            Reason::BetterSalary => Some(ReasonDetail::SalaryHike(text.into())),
            Reason::GrowthOpportunities => Some(ReasonDetail::DesiredRole(text.into())),
            Reason::WorkLifeBalance => None,
            Reason::Relocation => Some(ReasonDetail::RelocationLocation(text.into())),
            Reason::Other => Some(ReasonDetail::OtherReason(text.into())),
        }
    }
}

/// The reason-specific answer, tagged by the reason it belongs to.
///
/// Exactly one payload exists at a time; re-selecting a reason discards
/// the previous one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReasonDetail {
    /// Expected salary hike, in percent.
    SalaryHike(String),
    /// The role the user wants to grow into.
    DesiredRole(String),
    /// The target relocation location.
    RelocationLocation(String),
    /// Free-form reason text.
    OtherReason(String),
}

impl ReasonDetail {
    /// The confirmation echoed right after the detail is submitted.
    ///
    /// Empty answers are accepted silently and produce a degenerate
    /// message; presence is the only check this flow performs.
    pub fn confirmation(&self) -> String {
        match self {
            ReasonDetail::SalaryHike(v) => {
                format!("Got it! You're looking for a salary hike of: {v}%.")
            }
            ReasonDetail::DesiredRole(v) => {
                format!("Great choice! You're looking for a role in: {v}.")
            }
            ReasonDetail::RelocationLocation(v) => {
                format!("Got it! You're considering relocating to: {v}.")
            }
            ReasonDetail::OtherReason(v) => {
                format!("Thanks for sharing! Your reason for wanting to change is: {v}.")
            }
        }
    }

    /// The clause this answer contributes to the final summary.
    ///
    /// Returns `None` when the answer text is empty; the summary then
    /// carries no reason clause.
    pub fn summary_clause(&self) -> Option<String> {
        match self {
            ReasonDetail::SalaryHike(v) if !v.is_empty() => {
                Some(format!(" because of a salary hike of {v}%."))
            }
            ReasonDetail::DesiredRole(v) if !v.is_empty() => {
                Some(format!(" to pursue a role in {v}."))
            }
            ReasonDetail::RelocationLocation(v) if !v.is_empty() => {
                Some(format!(" to relocate to {v}."))
            }
            ReasonDetail::OtherReason(v) if !v.is_empty() => Some(format!(" because: {v}.")),
            _ => None,
        }
    }
}
