use std::rc::Rc;

use log::{info, warn};
use yew::prelude::*;

use super::request::{ReferralField, ReferralRequest};
use super::transport::TransportError;
use super::validation::{self, FieldErrors};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    fn sent() -> Self {
        Self {
            title: "Referral Sent Successfully!".to_string(),
            description: "We'll notify you once your friend enrolls.".to_string(),
            severity: Severity::Success,
        }
    }

    fn failed(err: &TransportError) -> Self {
        Self {
            title: "Error".to_string(),
            description: err.user_message(),
            severity: Severity::Error,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// A request is already in flight; nothing happens.
    AlreadySubmitting,
    Blocked(FieldErrors),
    Ready(ReferralRequest),
}

/// State of one referral form: the request being edited, its inline errors,
/// and whether a submission is in flight.
#[derive(Clone, Debug, PartialEq)]
pub struct ReferralSubmission {
    request: ReferralRequest,
    errors: FieldErrors,
    phase: Phase,
    /// Bumped for every request that is cleared for sending.
    ticket: u64,
    /// Last outcome notification, tagged with a sequence number so a view can show it once.
    notice: Option<(u64, Notification)>,
}

impl Default for ReferralSubmission {
    fn default() -> Self {
        Self::new()
    }
}

impl ReferralSubmission {
    pub fn new() -> Self {
        Self {
            request: ReferralRequest::default(),
            errors: FieldErrors::default(),
            phase: Phase::Idle,
            ticket: 0,
            notice: None,
        }
    }

    pub fn request(&self) -> &ReferralRequest {
        &self.request
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    pub fn ticket(&self) -> u64 {
        self.ticket
    }

    pub fn notice(&self) -> Option<&(u64, Notification)> {
        self.notice.as_ref()
    }

    /// The request handed out with the current ticket, while it is in flight.
    pub fn in_flight(&self) -> Option<&ReferralRequest> {
        self.is_submitting().then_some(&self.request)
    }

    pub fn edit(&mut self, field: ReferralField, value: String) {
        if self.is_submitting() {
            return;
        }
        self.request.set(field, value);
        if self.errors.contains(field) {
            self.revalidate(field);
        }
    }

    pub fn blur(&mut self, field: ReferralField) {
        if self.is_submitting() {
            return;
        }
        if self.errors.contains(field) || !self.request.get(field).is_empty() {
            self.revalidate(field);
        }
    }

    fn revalidate(&mut self, field: ReferralField) {
        let outcome = validation::validate_field(field, self.request.get(field));
        self.errors.record(field, outcome);
    }

    pub fn submit(&mut self) -> SubmitAttempt {
        if self.is_submitting() {
            return SubmitAttempt::AlreadySubmitting;
        }
        match validation::validate(&self.request) {
            Ok(()) => {
                self.errors.clear();
                self.phase = Phase::Submitting;
                self.ticket += 1;
                info!("Submitting referral #{} for course {}", self.ticket, self.request.course);
                SubmitAttempt::Ready(self.request.clone())
            }
            Err(errors) => {
                warn!(
                    "Referral blocked, {} invalid field(s): {:?}",
                    errors.len(),
                    errors.fields().collect::<Vec<_>>()
                );
                self.errors = errors.clone();
                SubmitAttempt::Blocked(errors)
            }
        }
    }

    /// Ends the in-flight submission. Clears the form on success, keeps every
    /// typed value on failure.
    pub fn complete(&mut self, result: Result<(), TransportError>) -> Notification {
        self.phase = Phase::Idle;
        let notification = match &result {
            Ok(()) => {
                self.request = ReferralRequest::default();
                self.errors.clear();
                Notification::sent()
            }
            Err(err) => {
                warn!("Referral failed: {}", err);
                Notification::failed(err)
            }
        };
        let seq = self.notice.as_ref().map_or(1, |(seq, _)| seq + 1);
        self.notice = Some((seq, notification.clone()));
        notification
    }
}

pub enum FormAction {
    Edit(ReferralField, String),
    Blur(ReferralField),
    Submit,
    Completed { ticket: u64, result: Result<(), TransportError> },
}

impl Reducible for ReferralSubmission {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::Edit(field, value) => next.edit(field, value),
            FormAction::Blur(field) => next.blur(field),
            FormAction::Submit => {
                if let SubmitAttempt::AlreadySubmitting = next.submit() {
                    return self;
                }
            }
            FormAction::Completed { ticket, result } => {
                // A stale completion can't end a newer submission.
                if ticket != next.ticket || !next.is_submitting() {
                    return self;
                }
                next.complete(result);
            }
        }
        next.into()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;

    use super::*;
    use crate::referral::transport::ReferralTransport;
    use crate::referral::validation::ValidationError;

    fn fill(form: &mut ReferralSubmission, referrer_email: &str) {
        form.edit(ReferralField::ReferrerName, "Jo".to_string());
        form.edit(ReferralField::ReferrerEmail, referrer_email.to_string());
        form.edit(ReferralField::FriendName, "Al".to_string());
        form.edit(ReferralField::FriendEmail, "al@x.com".to_string());
        form.edit(ReferralField::Course, "data-science".to_string());
        form.edit(ReferralField::Message, String::new());
    }

    /// Records every request and answers with a fixed result.
    struct RecordingTransport {
        sent: RefCell<Vec<ReferralRequest>>,
        reply: Result<(), TransportError>,
    }

    impl RecordingTransport {
        fn replying(reply: Result<(), TransportError>) -> Self {
            Self { sent: RefCell::new(Vec::new()), reply }
        }
    }

    impl ReferralTransport for RecordingTransport {
        async fn submit(&self, request: &ReferralRequest) -> Result<(), TransportError> {
            self.sent.borrow_mut().push(request.clone());
            self.reply.clone()
        }
    }

    /// Mirrors what the form component does on confirm.
    async fn confirm<T: ReferralTransport>(
        form: &mut ReferralSubmission,
        transport: &T,
    ) -> Option<Notification> {
        match form.submit() {
            SubmitAttempt::Ready(request) => {
                let result = transport.submit(&request).await;
                Some(form.complete(result))
            }
            _ => None,
        }
    }

    #[test]
    fn starts_idle_and_empty() {
        let form = ReferralSubmission::new();
        assert!(!form.is_submitting());
        assert_eq!(form.request(), &ReferralRequest::default());
        assert!(form.errors().is_empty());
        assert!(form.notice().is_none());
    }

    #[test]
    fn success_resets_to_the_initial_state() {
        let mut form = ReferralSubmission::new();
        fill(&mut form, "jo@x.com");
        let transport = RecordingTransport::replying(Ok(()));

        let notification = block_on(confirm(&mut form, &transport)).unwrap();

        assert_eq!(notification.severity, Severity::Success);
        assert_eq!(notification.title, "Referral Sent Successfully!");
        assert_eq!(form.request(), ReferralSubmission::new().request());
        assert!(form.errors().is_empty());
        assert!(!form.is_submitting());

        let sent = transport.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].course, "data-science");
        assert_eq!(sent[0].referrer_email, "jo@x.com");
    }

    #[test]
    fn server_error_keeps_fields_and_shows_server_text() {
        let mut form = ReferralSubmission::new();
        fill(&mut form, "jo@x.com");
        let before = form.request().clone();
        let transport = RecordingTransport::replying(Err(TransportError::Rejected {
            status: 400,
            message: Some("Email already referred".to_string()),
        }));

        let notification = block_on(confirm(&mut form, &transport)).unwrap();

        assert_eq!(notification.severity, Severity::Error);
        assert_eq!(notification.description, "Email already referred");
        assert_eq!(form.request(), &before);
        assert!(!form.is_submitting());
    }

    #[test]
    fn network_failure_keeps_fields_and_uses_fallback_text() {
        let mut form = ReferralSubmission::new();
        fill(&mut form, "jo@x.com");
        form.edit(ReferralField::Message, "Check this out".to_string());
        let before = form.request().clone();
        let transport =
            RecordingTransport::replying(Err(TransportError::Request("Failed to fetch".to_string())));

        let notification = block_on(confirm(&mut form, &transport)).unwrap();

        assert_eq!(notification.description, "Something went wrong. Please try again.");
        assert_eq!(form.request(), &before);

        // Retry with the same input succeeds once the backend recovers.
        let recovered = RecordingTransport::replying(Ok(()));
        let retry = block_on(confirm(&mut form, &recovered)).unwrap();
        assert_eq!(retry.severity, Severity::Success);
        assert_eq!(recovered.sent.borrow()[0], before);
    }

    #[test]
    fn invalid_email_blocks_without_a_request() {
        let mut form = ReferralSubmission::new();
        fill(&mut form, "bademail");
        let transport = RecordingTransport::replying(Ok(()));

        assert!(block_on(confirm(&mut form, &transport)).is_none());

        assert!(transport.sent.borrow().is_empty());
        assert_eq!(
            form.errors().get(ReferralField::ReferrerEmail),
            Some(&ValidationError::InvalidEmail)
        );
        assert_eq!(form.errors().len(), 1);
        assert!(!form.is_submitting());
        assert_eq!(form.ticket(), 0);
    }

    #[test]
    fn empty_course_blocks_submission() {
        let mut form = ReferralSubmission::new();
        fill(&mut form, "jo@x.com");
        form.edit(ReferralField::Course, String::new());
        match form.submit() {
            SubmitAttempt::Blocked(errors) => {
                assert_eq!(errors.fields().collect::<Vec<_>>(), vec![ReferralField::Course]);
            }
            other => panic!("expected Blocked, got {:?}", other),
        }
    }

    #[test]
    fn double_submit_while_in_flight_sends_once() {
        let mut form = ReferralSubmission::new();
        fill(&mut form, "jo@x.com");
        let transport = RecordingTransport::replying(Ok(()));

        let first = form.submit();
        // Second confirmation lands before the first response.
        assert!(block_on(confirm(&mut form, &transport)).is_none());

        let request = match first {
            SubmitAttempt::Ready(request) => request,
            other => panic!("expected Ready, got {:?}", other),
        };
        let result = block_on(transport.submit(&request));
        form.complete(result);

        assert_eq!(transport.sent.borrow().len(), 1);
        assert_eq!(form.ticket(), 1);
        assert!(!form.is_submitting());
    }

    #[test]
    fn edits_are_ignored_while_submitting() {
        let mut form = ReferralSubmission::new();
        fill(&mut form, "jo@x.com");
        assert!(matches!(form.submit(), SubmitAttempt::Ready(_)));
        form.edit(ReferralField::FriendName, "Bob".to_string());
        assert_eq!(form.request().friend_name, "Al");
        assert_eq!(form.in_flight().map(|r| r.friend_name.as_str()), Some("Al"));
    }

    #[test]
    fn reducer_ignores_second_submit_and_stale_completion() {
        let mut seed = ReferralSubmission::new();
        fill(&mut seed, "jo@x.com");
        let state = Rc::new(seed);

        let state = state.reduce(FormAction::Submit);
        assert!(state.is_submitting());
        assert_eq!(state.ticket(), 1);

        let again = state.clone().reduce(FormAction::Submit);
        assert!(Rc::ptr_eq(&state, &again));

        let stale = again.reduce(FormAction::Completed { ticket: 0, result: Ok(()) });
        assert!(stale.is_submitting());

        let done = stale.reduce(FormAction::Completed { ticket: 1, result: Ok(()) });
        assert!(!done.is_submitting());
        assert_eq!(done.request(), &ReferralRequest::default());
        assert_eq!(done.notice().map(|(seq, n)| (*seq, n.severity)), Some((1, Severity::Success)));
    }

    #[test]
    fn notices_are_numbered_in_order() {
        let mut form = ReferralSubmission::new();
        fill(&mut form, "jo@x.com");
        form.submit();
        form.complete(Err(TransportError::Request("offline".to_string())));
        form.submit();
        form.complete(Ok(()));
        assert_eq!(form.notice().map(|(seq, _)| *seq), Some(2));
    }

    #[test]
    fn blur_validates_touched_fields_and_edit_clears_fixed_errors() {
        let mut form = ReferralSubmission::new();

        form.blur(ReferralField::FriendEmail);
        assert!(form.errors().is_empty(), "untouched empty field stays quiet");

        form.edit(ReferralField::FriendEmail, "al@".to_string());
        form.blur(ReferralField::FriendEmail);
        assert!(form.errors().contains(ReferralField::FriendEmail));

        form.edit(ReferralField::FriendEmail, "al@x.com".to_string());
        assert!(!form.errors().contains(ReferralField::FriendEmail));
    }

    #[test]
    fn hiding_the_form_mid_flight_still_reports_the_outcome() {
        // The form has no cancel state: closing the dialog leaves the request running.
        let mut seed = ReferralSubmission::new();
        fill(&mut seed, "jo@x.com");
        let before = seed.request().clone();
        let state = Rc::new(seed).reduce(FormAction::Submit);
        let ticket = state.ticket();

        let state = state.reduce(FormAction::Completed {
            ticket,
            result: Err(TransportError::Request("offline".to_string())),
        });

        assert_eq!(state.request(), &before);
        assert!(!state.is_submitting());
        assert_eq!(
            state.notice().map(|(_, n)| n.severity),
            Some(Severity::Error)
        );
    }
}
