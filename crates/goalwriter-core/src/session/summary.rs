//! Final statement composition.

use super::reason::ReasonDetail;
use super::timing::ChangeTiming;

/// Composes the summary statement from the recorded answers.
///
/// The statement opens with a fixed base, appends the reason clause when a
/// detail was captured with non-empty text, and always closes with the
/// timing clause.
pub fn compose_final_statement(detail: Option<&ReasonDetail>, timing: ChangeTiming) -> String {
    let mut statement = String::from("I want to change my job");

    if let Some(clause) = detail.and_then(ReasonDetail::summary_clause) {
        statement.push_str(&clause);
    }

    statement.push(' ');
    statement.push_str(&timing.summary_clause());
    statement
}
