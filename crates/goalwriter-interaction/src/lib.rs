//! Conversation state machine for the goal questionnaire.
//!
//! `InteractionManager` owns the session record and advances it screen by
//! screen: free-text goal entry, reason selection with a reason-specific
//! detail field, then timing selection and the composed summary. The goal
//! statement is sent to a generative backend once per submission;
//! advancement is gated on the raw input, never on the model output.

pub mod agent;
pub mod config;
pub mod gemini_api_agent;

pub use agent::{AgentError, GenerativeAgent};
pub use gemini_api_agent::GeminiApiAgent;

use goalwriter_core::error::Result;
use goalwriter_core::session::{
    ChangeTiming, Reason, Session, Step, compose_final_statement,
};
use tracing::{debug, info};

/// The exact phrase a goal statement must contain to enter the flow.
///
/// Matching is case-sensitive and performed on the raw user input.
pub const GOAL_PHRASE: &str = "I want to change my job";

/// Result of handling one user submission.
///
/// Screens themselves are rendered from session state after each
/// submission; these variants carry only the transient output of the
/// submission that produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionResult {
    /// No state change occurred.
    NoOp,
    /// A message to display to the user.
    NewMessage(String),
    /// The goal statement was reviewed by the model.
    ///
    /// `accepted` tells whether the flow advanced to reason selection.
    GoalReviewed {
        model_response: String,
        accepted: bool,
    },
    /// The final statement was composed and stored.
    Summary(String),
}

/// Manages user interaction for a single questionnaire session.
///
/// Handlers take `&mut self`; the session has one writer (the active UI
/// loop) and no shared mutation across sessions.
pub struct InteractionManager<A: GenerativeAgent> {
    /// Session ID for this manager instance
    session_id: String,
    /// Session creation timestamp (ISO 8601 format)
    created_at: String,
    /// The mutable questionnaire record
    session: Session,
    /// Text-generation backend used to interpret the goal statement
    agent: A,
}

impl<A: GenerativeAgent> InteractionManager<A> {
    /// Creates a new session with default answers, active on the intro
    /// screen.
    pub fn new_session(session_id: String, agent: A) -> Self {
        Self {
            session_id,
            created_at: chrono::Utc::now().to_rfc3339(),
            session: Session::new(),
            agent,
        }
    }

    /// Returns the session ID.
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Returns the session creation timestamp.
    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    /// Returns the current session state.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Submits the free-text goal statement.
    ///
    /// The statement is always sent to the generative agent first; if the
    /// call fails the submission fails and the session is unchanged, so
    /// the user can resubmit. On success, the flow advances to reason
    /// selection only when the raw input contains [`GOAL_PHRASE`]; the
    /// model output is returned for display but never consulted for
    /// branching.
    pub async fn submit_goal(&mut self, input: &str) -> Result<InteractionResult> {
        if self.session.step != Step::Intro {
            return Ok(InteractionResult::NoOp);
        }

        let model_response = self.agent.generate(input).await?;

        let accepted = input.contains(GOAL_PHRASE);
        if accepted {
            self.session.step = Step::ReasonDetail;
            self.session.reason = Reason::default();
            self.session.detail = None;
            info!(session_id = %self.session_id, "goal accepted, entering reason selection");
        } else {
            debug!(session_id = %self.session_id, "goal statement did not match, staying on intro");
        }

        Ok(InteractionResult::GoalReviewed {
            model_response,
            accepted,
        })
    }

    /// Selects the job-change reason.
    ///
    /// Re-selecting always discards any previously captured detail. A
    /// reason without a detail screen advances straight to timing.
    pub fn select_reason(&mut self, reason: Reason) -> InteractionResult {
        if self.session.step != Step::ReasonDetail {
            return InteractionResult::NoOp;
        }

        self.session.reason = reason;
        self.session.detail = None;

        if !reason.has_detail() {
            self.session.step = Step::Timing;
            debug!(session_id = %self.session_id, reason = reason.label(),
                "reason has no detail screen, advancing to timing");
        }

        InteractionResult::NoOp
    }

    /// Submits the reason-specific free-text answer.
    ///
    /// Empty answers are accepted silently (presence checks only). Records
    /// the payload matching the current reason, advances to the timing
    /// screen, and echoes the branch-specific confirmation.
    pub fn submit_detail(&mut self, text: &str) -> InteractionResult {
        if self.session.step != Step::ReasonDetail {
            return InteractionResult::NoOp;
        }

        let Some(detail) = self.session.reason.detail(text) else {
            // No detail screen for this reason; nothing to record.
            self.session.step = Step::Timing;
            return InteractionResult::NoOp;
        };

        let confirmation = detail.confirmation();
        self.session.detail = Some(detail);
        self.session.step = Step::Timing;
        debug!(session_id = %self.session_id, "detail recorded, entering timing selection");

        InteractionResult::NewMessage(confirmation)
    }

    /// Submits the change timeframe and composes the final statement.
    ///
    /// The session stays on the timing screen afterwards; resubmitting
    /// recomposes the statement.
    pub fn submit_timing(&mut self, timing: ChangeTiming) -> InteractionResult {
        if self.session.step != Step::Timing {
            return InteractionResult::NoOp;
        }

        self.session.change_timing = Some(timing);
        let statement = compose_final_statement(self.session.detail.as_ref(), timing);
        self.session.final_statement = Some(statement.clone());
        info!(session_id = %self.session_id, timing = timing.label(), "final statement composed");

        InteractionResult::Summary(statement)
    }

    /// Clears the entire session back to defaults, from any step.
    pub fn reset(&mut self) {
        self.session.reset();
        info!(session_id = %self.session_id, "session reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use goalwriter_core::session::ReasonDetail;

    /// Mock agent returning a canned completion.
    struct CannedAgent;

    #[async_trait::async_trait]
    impl GenerativeAgent for CannedAgent {
        async fn generate(&self, _input: &str) -> std::result::Result<String, AgentError> {
            Ok("That sounds like a solid plan.".to_string())
        }
    }

    /// Mock agent that always fails.
    struct FailingAgent;

    #[async_trait::async_trait]
    impl GenerativeAgent for FailingAgent {
        async fn generate(&self, _input: &str) -> std::result::Result<String, AgentError> {
            Err(AgentError::ProcessError {
                status_code: Some(503),
                message: "service unavailable".to_string(),
            })
        }
    }

    fn manager() -> InteractionManager<CannedAgent> {
        InteractionManager::new_session("test-session".to_string(), CannedAgent)
    }

    async fn accepted_manager() -> InteractionManager<CannedAgent> {
        let mut m = manager();
        m.submit_goal("I want to change my job for a better life")
            .await
            .unwrap();
        m
    }

    #[tokio::test]
    async fn test_goal_without_phrase_does_not_advance() {
        let mut m = manager();

        let result = m.submit_goal("I want a vacation").await.unwrap();

        match result {
            InteractionResult::GoalReviewed { accepted, .. } => assert!(!accepted),
            other => panic!("Expected GoalReviewed, got {other:?}"),
        }
        assert_eq!(m.session().step, Step::Intro);
    }

    #[tokio::test]
    async fn test_goal_phrase_is_case_sensitive() {
        let mut m = manager();

        m.submit_goal("i want to change my job").await.unwrap();

        assert_eq!(m.session().step, Step::Intro);
    }

    #[tokio::test]
    async fn test_goal_with_phrase_enters_reason_selection() {
        let m = accepted_manager().await;

        assert_eq!(m.session().step, Step::ReasonDetail);
        // Default selection is the first option.
        assert_eq!(m.session().reason, Reason::BetterSalary);
        assert_eq!(m.session().detail, None);
    }

    #[tokio::test]
    async fn test_failed_agent_call_leaves_session_unchanged() {
        let mut m = InteractionManager::new_session("test-session".to_string(), FailingAgent);

        let err = m
            .submit_goal("I want to change my job")
            .await
            .unwrap_err();

        assert!(err.is_agent());
        assert_eq!(m.session(), &Session::default());
    }

    #[tokio::test]
    async fn test_reselecting_reason_discards_detail() {
        let mut m = accepted_manager().await;

        m.select_reason(Reason::Relocation);
        m.submit_detail("Austin");
        assert!(m.session().detail.is_some());

        // Back through the flow after a reset: the detail must not leak.
        m.reset();
        m.submit_goal("I want to change my job").await.unwrap();
        assert_eq!(m.session().detail, None);
    }

    #[tokio::test]
    async fn test_salary_confirmation_and_summary() {
        let mut m = accepted_manager().await;

        m.select_reason(Reason::BetterSalary);
        let result = m.submit_detail("15");
        assert_eq!(
            result,
            InteractionResult::NewMessage(
                "Got it! You're looking for a salary hike of: 15%.".to_string()
            )
        );

        let result = m.submit_timing(ChangeTiming::Immediately);
        match result {
            InteractionResult::Summary(statement) => {
                assert!(statement.contains("because of a salary hike of 15%."));
            }
            other => panic!("Expected Summary, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_relocation_flow_exact_final_statement() {
        let mut m = accepted_manager().await;

        m.select_reason(Reason::Relocation);
        m.submit_detail("Austin");
        let result = m.submit_timing(ChangeTiming::Within3Months);

        assert_eq!(
            result,
            InteractionResult::Summary(
                "I want to change my job to relocate to Austin. \
                 You want to change your job by Within 3 months."
                    .to_string()
            )
        );
        assert_eq!(
            m.session().final_statement.as_deref(),
            Some(
                "I want to change my job to relocate to Austin. \
                 You want to change your job by Within 3 months."
            )
        );
        // No terminal transition: the timing screen stays active.
        assert_eq!(m.session().step, Step::Timing);
    }

    #[tokio::test]
    async fn test_immediately_clause_regardless_of_reason() {
        for reason in [Reason::GrowthOpportunities, Reason::Other] {
            let mut m = accepted_manager().await;
            m.select_reason(reason);
            m.submit_detail("something");
            let result = m.submit_timing(ChangeTiming::Immediately);

            match result {
                InteractionResult::Summary(statement) => {
                    assert!(
                        statement.ends_with("You want to change your job immediately."),
                        "unexpected statement: {statement}"
                    );
                }
                other => panic!("Expected Summary, got {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn test_work_life_balance_skips_detail_screen() {
        let mut m = accepted_manager().await;

        m.select_reason(Reason::WorkLifeBalance);

        assert_eq!(m.session().step, Step::Timing);
        assert_eq!(m.session().detail, None);

        let result = m.submit_timing(ChangeTiming::Unsure);
        assert_eq!(
            result,
            InteractionResult::Summary(
                "I want to change my job You want to change your job by Unsure.".to_string()
            )
        );
    }

    #[tokio::test]
    async fn test_empty_detail_is_accepted_silently() {
        let mut m = accepted_manager().await;

        let result = m.submit_detail("");
        assert_eq!(
            result,
            InteractionResult::NewMessage(
                "Got it! You're looking for a salary hike of: %.".to_string()
            )
        );

        let result = m.submit_timing(ChangeTiming::Immediately);
        assert_eq!(
            result,
            InteractionResult::Summary(
                "I want to change my job You want to change your job immediately.".to_string()
            )
        );
    }

    #[tokio::test]
    async fn test_timing_resubmission_recomposes_statement() {
        let mut m = accepted_manager().await;
        m.submit_detail("20");

        m.submit_timing(ChangeTiming::Immediately);
        let result = m.submit_timing(ChangeTiming::Within6Months);

        assert_eq!(
            result,
            InteractionResult::Summary(
                "I want to change my job because of a salary hike of 20%. \
                 You want to change your job by Within 6 months."
                    .to_string()
            )
        );
        assert_eq!(m.session().change_timing, Some(ChangeTiming::Within6Months));
    }

    #[tokio::test]
    async fn test_out_of_step_submissions_are_noops() {
        let mut m = manager();

        assert_eq!(m.select_reason(Reason::Other), InteractionResult::NoOp);
        assert_eq!(m.submit_detail("text"), InteractionResult::NoOp);
        assert_eq!(
            m.submit_timing(ChangeTiming::Unsure),
            InteractionResult::NoOp
        );
        assert_eq!(m.session(), &Session::default());

        // A second goal submission after acceptance is also a no-op.
        let mut m = accepted_manager().await;
        let result = m.submit_goal("I want to change my job").await.unwrap();
        assert_eq!(result, InteractionResult::NoOp);
    }

    #[tokio::test]
    async fn test_reset_from_every_step() {
        // From intro.
        let mut m = manager();
        m.reset();
        assert_eq!(m.session(), &Session::default());

        // From reason selection.
        let mut m = accepted_manager().await;
        m.reset();
        assert_eq!(m.session(), &Session::default());

        // From timing, with every field populated.
        let mut m = accepted_manager().await;
        m.select_reason(Reason::Relocation);
        m.submit_detail("Austin");
        m.submit_timing(ChangeTiming::Within3Months);
        m.reset();
        assert_eq!(m.session(), &Session::default());
        assert_eq!(m.session().step, Step::Intro);
    }

    #[tokio::test]
    async fn test_detail_payload_is_tagged_by_reason() {
        let mut m = accepted_manager().await;

        m.select_reason(Reason::GrowthOpportunities);
        m.submit_detail("staff engineer");

        assert_eq!(
            m.session().detail,
            Some(ReasonDetail::DesiredRole("staff engineer".to_string()))
        );
    }
}
