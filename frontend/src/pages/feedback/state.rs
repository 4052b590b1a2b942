//! State for the feedback page: the session gate status, the draft, and
//! the submission state machine.
//!
//! Everything here is pure so the transition rules can be exercised by
//! the unit tests at the bottom of the file; the side effects (directory
//! writes, navigation, notifications) live in `update.rs`.

use common::model::feedback::{
    ExperienceLevel, FeedbackRecord, FeedbackSubmission, RatingCategory, TextField,
};
use common::model::identity::Identity;

use crate::firebase::auth::{AuthStatus, AuthSubscription};

/// Lifecycle of one submit attempt. `Submitting` is the mutual-exclusion
/// flag: while it holds, no second write can be started. `Submitted` is
/// terminal for the draft; only the log-out reset leaves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    Editing,
    Submitting,
    Submitted,
}

/// Outcome of a user-initiated submit trigger.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitDecision {
    /// No authenticated identity; navigate to sign-in, attempt no write.
    NotAuthenticated,
    /// An attempt is already in flight (or the draft is consumed); the
    /// trigger is ignored.
    InFlight,
    /// The name/email precondition failed; stay in `Editing`.
    MissingRequired,
    /// The attempt was accepted: the phase is now `Submitting` and exactly
    /// one write of this payload must be issued.
    Proceed(Box<FeedbackSubmission>),
}

pub struct FeedbackPage {
    pub status: AuthStatus,
    pub phase: SubmitPhase,
    pub draft: FeedbackRecord,
    /// One-shot seeding guard: a duplicate signed-in notification must not
    /// clobber fields the user has already edited.
    pub seeded: bool,
    /// Owned session-gate subscription; `None` once the page has detached
    /// it (log-out) or in unit tests.
    pub auth: Option<AuthSubscription>,
}

impl FeedbackPage {
    pub fn new() -> Self {
        Self {
            status: AuthStatus::Pending,
            phase: SubmitPhase::Editing,
            draft: FeedbackRecord::default(),
            seeded: false,
            auth: None,
        }
    }

    /// Applies an auth-state notification. The first signed-in identity
    /// seeds the contact fields; later notifications only refresh the
    /// session subject.
    pub fn observe_identity(&mut self, identity: Option<Identity>) {
        match identity {
            Some(identity) => {
                if !self.seeded {
                    self.draft.seed_identity(&identity);
                    self.seeded = true;
                }
                self.status = AuthStatus::Authenticated(identity);
            }
            None => self.status = AuthStatus::Unauthenticated,
        }
    }

    /// Single-key draft update; a no-op once the draft leaves `Editing`.
    pub fn apply_field(&mut self, field: TextField, value: String) -> bool {
        if self.phase != SubmitPhase::Editing {
            return false;
        }
        self.draft.set_field(field, value);
        true
    }

    pub fn apply_experience(&mut self, level: Option<ExperienceLevel>) -> bool {
        if self.phase != SubmitPhase::Editing {
            return false;
        }
        self.draft.set_experience(level);
        true
    }

    pub fn apply_rating(&mut self, category: RatingCategory, stars: u8) -> bool {
        if self.phase != SubmitPhase::Editing {
            return false;
        }
        self.draft.set_rating(category, stars);
        true
    }

    /// Gates and starts a submit attempt. On `Proceed` the phase has
    /// already moved to `Submitting`, so a second trigger before
    /// resolution reads `InFlight`.
    pub fn begin_submit(&mut self) -> SubmitDecision {
        if self.phase != SubmitPhase::Editing {
            return SubmitDecision::InFlight;
        }
        let identity = match &self.status {
            AuthStatus::Authenticated(identity) => identity.clone(),
            _ => return SubmitDecision::NotAuthenticated,
        };
        if !self.draft.required_fields_present() {
            return SubmitDecision::MissingRequired;
        }

        self.phase = SubmitPhase::Submitting;
        SubmitDecision::Proceed(Box::new(FeedbackSubmission::new(
            self.draft.clone(),
            &identity,
        )))
    }

    /// The in-flight write was accepted; the draft is consumed.
    pub fn submit_succeeded(&mut self) {
        if self.phase == SubmitPhase::Submitting {
            self.phase = SubmitPhase::Submitted;
        }
    }

    /// The in-flight write was rejected; the draft is preserved unchanged
    /// and the user may retry.
    pub fn submit_failed(&mut self) {
        if self.phase == SubmitPhase::Submitting {
            self.phase = SubmitPhase::Editing;
        }
    }

    /// Log-out reset: fresh empty draft, ready for a new session.
    pub fn reset_after_sign_out(&mut self) {
        self.status = AuthStatus::Unauthenticated;
        self.phase = SubmitPhase::Editing;
        self.draft = FeedbackRecord::default();
        self.seeded = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::feedback::Ratings;

    fn ada() -> Identity {
        Identity {
            uid: "uid-1".to_string(),
            display_name: Some("Ada Lovelace".to_string()),
            email: Some("ada@x.io".to_string()),
            photo_url: None,
            email_verified: true,
        }
    }

    fn signed_in_page() -> FeedbackPage {
        let mut page = FeedbackPage::new();
        page.observe_identity(Some(ada()));
        page
    }

    #[test]
    fn first_notification_seeds_the_contact_fields() {
        let page = signed_in_page();
        assert_eq!(page.draft.name, "Ada Lovelace");
        assert_eq!(page.draft.email, "ada@x.io");
        assert_eq!(page.draft.ratings, Ratings::default());
    }

    #[test]
    fn duplicate_notifications_do_not_clobber_user_edits() {
        let mut page = signed_in_page();
        page.apply_field(TextField::Name, "Augusta Ada King".to_string());
        page.observe_identity(Some(ada()));
        assert_eq!(page.draft.name, "Augusta Ada King");
    }

    #[test]
    fn unauthenticated_submit_is_rejected_without_a_write() {
        let mut page = FeedbackPage::new();
        page.draft.set_field(TextField::Name, "Ada Lovelace".to_string());
        page.draft.set_field(TextField::Email, "ada@x.io".to_string());
        page.observe_identity(None);

        assert_eq!(page.begin_submit(), SubmitDecision::NotAuthenticated);
        assert_eq!(page.phase, SubmitPhase::Editing);
    }

    #[test]
    fn missing_name_keeps_the_controller_editing() {
        let mut page = signed_in_page();
        page.apply_field(TextField::Name, String::new());
        page.apply_rating(RatingCategory::ContentQuality, 5);
        page.apply_rating(RatingCategory::OverallExperience, 4);

        assert_eq!(page.begin_submit(), SubmitDecision::MissingRequired);
        assert_eq!(page.phase, SubmitPhase::Editing);
    }

    #[test]
    fn second_trigger_while_in_flight_is_ignored() {
        let mut page = signed_in_page();
        assert!(matches!(page.begin_submit(), SubmitDecision::Proceed(_)));
        assert_eq!(page.begin_submit(), SubmitDecision::InFlight);
        assert_eq!(page.phase, SubmitPhase::Submitting);
    }

    #[test]
    fn accepted_submission_uses_the_signed_in_identity() {
        let mut page = signed_in_page();
        match page.begin_submit() {
            SubmitDecision::Proceed(submission) => {
                assert_eq!(submission.user_id, "uid-1");
                assert_eq!(submission.user_display_name.as_deref(), Some("Ada Lovelace"));
            }
            other => panic!("expected Proceed, got {other:?}"),
        }
    }

    #[test]
    fn failed_write_preserves_the_draft_exactly() {
        let mut page = signed_in_page();
        page.apply_field(TextField::Company, "Analytical Engines Ltd".to_string());
        page.apply_rating(RatingCategory::TechnicalDepth, 4);
        let before = page.draft.clone();

        assert!(matches!(page.begin_submit(), SubmitDecision::Proceed(_)));
        page.submit_failed();

        assert_eq!(page.phase, SubmitPhase::Editing);
        assert_eq!(page.draft, before);
        assert!(matches!(page.begin_submit(), SubmitDecision::Proceed(_)));
    }

    #[test]
    fn successful_submit_freezes_the_draft() {
        let mut page = signed_in_page();
        assert!(matches!(page.begin_submit(), SubmitDecision::Proceed(_)));
        page.submit_succeeded();
        let frozen = page.draft.clone();

        assert_eq!(page.phase, SubmitPhase::Submitted);
        assert!(!page.apply_field(TextField::Name, "Someone Else".to_string()));
        assert!(!page.apply_rating(RatingCategory::Engagement, 1));
        assert!(!page.apply_experience(Some(ExperienceLevel::FivePlusYears)));
        assert_eq!(page.draft, frozen);
    }

    #[test]
    fn log_out_reset_returns_a_fresh_draft() {
        let mut page = signed_in_page();
        assert!(matches!(page.begin_submit(), SubmitDecision::Proceed(_)));
        page.submit_succeeded();

        page.reset_after_sign_out();
        assert_eq!(page.phase, SubmitPhase::Editing);
        assert_eq!(page.draft, FeedbackRecord::default());
        assert!(!page.seeded);
        assert_eq!(page.status, AuthStatus::Unauthenticated);
    }
}
