//! Auth form controller: owns the draft values, per-field errors and the
//! submission lifecycle for one mounted form.
//!
//! Flow Overview: `begin_submit` validates against the schema of the current
//! mode and hands out typed credentials with a ticket; the caller awaits a
//! `Submitter`; `complete` applies the outcome only if the ticket still
//! matches. Mode changes and resets bump the generation, so a completion that
//! arrives after the form moved on is dropped instead of applied.

use super::{
    mode::{AuthMode, Field},
    schema::{Credentials, FieldErrors, FormValues, Schema, select_schema},
};
use crate::{app_lib::AppError, features::notify::Notice};
use std::future::Future;
use tracing::{debug, info, warn};

/// Lifecycle of the submit action. `Failed` accepts a new submit (retry).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Failed(String),
}

/// Identifies one submission so its completion can be matched to the form
/// state it was issued from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmissionTicket {
    generation: u64,
    mode: AuthMode,
}

/// A submit that passed validation and is waiting for the submitter.
#[derive(Debug)]
pub struct PendingSubmission {
    pub ticket: SubmissionTicket,
    pub credentials: Credentials,
}

/// Why a submit attempt did not start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitRejected {
    /// A submission is already in flight.
    InFlight,
    /// Field validation failed; errors are now on the controller.
    Invalid,
    /// The form was unmounted before the submit could start.
    Detached,
}

/// What the view must do once a submission finished.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Completion {
    pub notice: Notice,
    pub redirect: Option<&'static str>,
}

/// Performs the actual submission for validated credentials.
pub trait Submitter {
    fn submit(&self, credentials: Credentials) -> impl Future<Output = Result<(), AppError>>;
}

/// Notification and navigation collaborators applied on completion.
pub trait SubmissionEffects {
    fn notify(&self, notice: Notice);
    fn navigate(&self, path: &str);
}

/// Shared handle to a controller. Returns `None` once the form is gone.
pub trait FormStore {
    fn with_form<R>(&self, update: impl FnOnce(&mut AuthFormController) -> R) -> Option<R>;
}

#[derive(Clone, Debug)]
pub struct AuthFormController {
    mode: AuthMode,
    schema: &'static Schema,
    values: FormValues,
    errors: FieldErrors,
    touched: Vec<Field>,
    attempted: bool,
    state: SubmissionState,
    generation: u64,
}

impl AuthFormController {
    pub fn new(mode: AuthMode) -> Self {
        Self {
            mode,
            schema: select_schema(mode),
            values: FormValues::default(),
            errors: FieldErrors::default(),
            touched: Vec::new(),
            attempted: false,
            state: SubmissionState::Idle,
            generation: 0,
        }
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(field)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    /// Message of the last failed submission, shown inline under the form.
    pub fn failure(&self) -> Option<&str> {
        match &self.state {
            SubmissionState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Switches the form to `mode`. Values, errors and any in-flight
    /// submission are discarded in the same step. Returns whether the mode
    /// actually changed.
    pub fn set_mode(&mut self, mode: AuthMode) -> bool {
        if mode == self.mode {
            return false;
        }
        debug!(from = %self.mode, to = %mode, "auth form mode changed");
        self.mode = mode;
        self.schema = select_schema(mode);
        self.reset();
        true
    }

    /// Clears all input and errors and forgets any in-flight submission.
    pub fn reset(&mut self) {
        self.values = FormValues::default();
        self.errors.clear();
        self.touched.clear();
        self.attempted = false;
        self.state = SubmissionState::Idle;
        self.generation += 1;
    }

    /// Stores a field value. Once the field was touched or a submit was
    /// attempted, the field is re-validated so its error clears as soon as
    /// the value satisfies the schema.
    pub fn set_field(&mut self, field: Field, value: String) {
        self.values.set(field, value);
        if matches!(self.state, SubmissionState::Failed(_)) {
            self.state = SubmissionState::Idle;
        }
        if self.attempted || self.touched.contains(&field) {
            self.validate_field(field);
        }
    }

    /// Marks a field as visited (blur) and validates it.
    pub fn touch(&mut self, field: Field) {
        if !self.touched.contains(&field) {
            self.touched.push(field);
        }
        self.validate_field(field);
    }

    fn validate_field(&mut self, field: Field) {
        let result = self.schema.validate_field(field, self.values.get(field));
        self.errors.set(field, result);
    }

    /// Validates the whole form and, if valid, enters `Submitting`.
    ///
    /// # Errors
    ///
    /// `InFlight` while a submission is running, `Invalid` when any field
    /// fails validation. Neither changes the submission state.
    pub fn begin_submit(&mut self) -> Result<PendingSubmission, SubmitRejected> {
        if self.is_submitting() {
            debug!(mode = %self.mode, "submit ignored while another is in flight");
            return Err(SubmitRejected::InFlight);
        }
        self.attempted = true;

        match self.schema.validate(&self.values) {
            Ok(credentials) => {
                self.errors.clear();
                self.state = SubmissionState::Submitting;
                info!(mode = %self.mode, "auth form submitted");
                Ok(PendingSubmission {
                    ticket: SubmissionTicket {
                        generation: self.generation,
                        mode: self.mode,
                    },
                    credentials,
                })
            }
            Err(errors) => {
                debug!(mode = %self.mode, errors = errors.len(), "auth form has invalid fields");
                self.errors = errors;
                Err(SubmitRejected::Invalid)
            }
        }
    }

    /// Applies a submission outcome. Returns `None` for stale tickets, whose
    /// result must not touch this form.
    pub fn complete(
        &mut self,
        ticket: SubmissionTicket,
        outcome: Result<(), AppError>,
    ) -> Option<Completion> {
        if ticket.generation != self.generation || !self.is_submitting() {
            debug!(
                mode = %ticket.mode,
                current = %self.mode,
                "discarding stale submission result"
            );
            return None;
        }

        match outcome {
            Ok(()) => {
                self.state = SubmissionState::Idle;
                info!(mode = %self.mode, "auth form submission succeeded");
                Some(Completion {
                    notice: success_notice(self.mode),
                    redirect: self.mode.success_redirect(),
                })
            }
            Err(err) => {
                warn!(mode = %self.mode, error = %err, "auth form submission failed");
                let message = err.user_message();
                self.state = SubmissionState::Failed(message.clone());
                Some(Completion {
                    notice: Notice::error(failure_title(self.mode), message),
                    redirect: None,
                })
            }
        }
    }
}

fn success_notice(mode: AuthMode) -> Notice {
    match mode {
        AuthMode::Login => Notice::success("Success!", "You've been logged in successfully."),
        AuthMode::SignUp => Notice::success("Success!", "Your account has been created."),
        AuthMode::ForgotPassword => Notice::success(
            "Check your email",
            "A password reset link has been sent to your email address.",
        ),
    }
}

fn failure_title(mode: AuthMode) -> &'static str {
    match mode {
        AuthMode::Login => "Login failed",
        AuthMode::SignUp => "Sign up failed",
        AuthMode::ForgotPassword => "Could not send reset link",
    }
}

/// Runs one submit end to end: validate, await the submitter, apply the
/// outcome, then notify and navigate. The form is only borrowed between
/// awaits, so the view stays responsive and may switch modes meanwhile.
///
/// # Errors
///
/// Returns why the submit did not start. A started submission whose result
/// was discarded still returns `Ok(())`.
pub async fn submit_form<F, S, E>(form: &F, submitter: &S, effects: &E) -> Result<(), SubmitRejected>
where
    F: FormStore,
    S: Submitter,
    E: SubmissionEffects,
{
    let pending = form
        .with_form(AuthFormController::begin_submit)
        .ok_or(SubmitRejected::Detached)??;

    let outcome = submitter.submit(pending.credentials).await;

    let Some(completion) = form
        .with_form(|controller| controller.complete(pending.ticket, outcome))
        .flatten()
    else {
        return Ok(());
    };

    effects.notify(completion.notice);
    if let Some(path) = completion.redirect {
        effects.navigate(path);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::notify::NoticeKind;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    impl FormStore for RefCell<AuthFormController> {
        fn with_form<R>(&self, update: impl FnOnce(&mut AuthFormController) -> R) -> Option<R> {
            Some(update(&mut self.borrow_mut()))
        }
    }

    /// Stand-in for an unmounted form.
    struct Gone;

    impl FormStore for Gone {
        fn with_form<R>(&self, _update: impl FnOnce(&mut AuthFormController) -> R) -> Option<R> {
            None
        }
    }

    #[derive(Default)]
    struct Recorded {
        notices: RefCell<Vec<Notice>>,
        navigations: RefCell<Vec<String>>,
    }

    impl SubmissionEffects for Recorded {
        fn notify(&self, notice: Notice) {
            self.notices.borrow_mut().push(notice);
        }

        fn navigate(&self, path: &str) {
            self.navigations.borrow_mut().push(path.to_string());
        }
    }

    /// Records every call and the controller state seen while submitting.
    struct FakeSubmitter {
        form: Rc<RefCell<AuthFormController>>,
        calls: Cell<usize>,
        seen: RefCell<Vec<SubmissionState>>,
        outcome: Result<(), AppError>,
        switch_to: Option<AuthMode>,
    }

    impl FakeSubmitter {
        fn new(form: &Rc<RefCell<AuthFormController>>) -> Self {
            Self {
                form: Rc::clone(form),
                calls: Cell::new(0),
                seen: RefCell::new(Vec::new()),
                outcome: Ok(()),
                switch_to: None,
            }
        }
    }

    impl Submitter for FakeSubmitter {
        async fn submit(&self, _credentials: Credentials) -> Result<(), AppError> {
            self.calls.set(self.calls.get() + 1);
            self.seen.borrow_mut().push(self.form.borrow().state().clone());
            tokio::task::yield_now().await;
            if let Some(mode) = self.switch_to {
                self.form.borrow_mut().set_mode(mode);
            }
            self.outcome.clone()
        }
    }

    fn fill(controller: &mut AuthFormController, name: &str, email: &str, password: &str) {
        controller.set_field(Field::Name, name.to_string());
        controller.set_field(Field::Email, email.to_string());
        controller.set_field(Field::Password, password.to_string());
    }

    fn valid_login() -> AuthFormController {
        let mut controller = AuthFormController::new(AuthMode::Login);
        fill(&mut controller, "", "user@example.com", "secret1");
        controller
    }

    #[test]
    fn new_controller_is_idle_and_empty() {
        let controller = AuthFormController::new(AuthMode::SignUp);

        assert_eq!(controller.state(), &SubmissionState::Idle);
        assert_eq!(controller.mode(), AuthMode::SignUp);
        for field in Field::ALL {
            assert_eq!(controller.value(field), "");
        }
        assert!(controller.errors().is_empty());
    }

    #[test]
    fn mode_change_clears_values_and_errors() {
        let mut controller = AuthFormController::new(AuthMode::Login);
        fill(&mut controller, "", "not-an-email", "123");
        assert_eq!(controller.begin_submit().unwrap_err(), SubmitRejected::Invalid);
        assert!(!controller.errors().is_empty());

        assert!(controller.set_mode(AuthMode::SignUp));

        assert_eq!(controller.mode(), AuthMode::SignUp);
        for field in Field::ALL {
            assert_eq!(controller.value(field), "");
        }
        assert!(controller.errors().is_empty());
        assert_eq!(controller.state(), &SubmissionState::Idle);
    }

    #[test]
    fn setting_the_same_mode_keeps_input() {
        let mut controller = valid_login();

        assert!(!controller.set_mode(AuthMode::Login));
        assert_eq!(controller.value(Field::Email), "user@example.com");
    }

    #[test]
    fn invalid_email_blocks_submit_without_state_change() {
        for mode in AuthMode::ALL {
            let mut controller = AuthFormController::new(mode);
            fill(&mut controller, "Alice", "not-an-email", "secret1");

            assert_eq!(controller.begin_submit().unwrap_err(), SubmitRejected::Invalid);
            assert_eq!(controller.error(Field::Email), Some("Invalid email address."));
            assert_eq!(controller.state(), &SubmissionState::Idle);
        }
    }

    #[test]
    fn one_character_name_blocks_signup() {
        let mut controller = AuthFormController::new(AuthMode::SignUp);
        fill(&mut controller, "A", "user@example.com", "secret1");

        assert_eq!(controller.begin_submit().unwrap_err(), SubmitRejected::Invalid);
        assert_eq!(
            controller.error(Field::Name),
            Some("Name must be at least 2 characters.")
        );
        assert_eq!(controller.state(), &SubmissionState::Idle);
    }

    #[test]
    fn valid_login_cycles_through_submitting() {
        let mut controller = valid_login();

        let pending = controller.begin_submit().expect("valid login");
        assert_eq!(controller.state(), &SubmissionState::Submitting);
        assert_eq!(
            pending.credentials,
            Credentials::Login {
                email: "user@example.com".to_string(),
                password: "secret1".to_string(),
            }
        );

        let completion = controller
            .complete(pending.ticket, Ok(()))
            .expect("current ticket");
        assert_eq!(controller.state(), &SubmissionState::Idle);
        assert_eq!(completion.redirect, Some("/dashboard"));
        assert_eq!(completion.notice.kind, NoticeKind::Success);
        assert_eq!(completion.notice.message, "You've been logged in successfully.");
    }

    #[test]
    fn second_submit_is_rejected_while_in_flight() {
        let mut controller = valid_login();
        controller.begin_submit().expect("first submit");

        assert_eq!(controller.begin_submit().unwrap_err(), SubmitRejected::InFlight);
        assert!(controller.is_submitting());
    }

    #[test]
    fn forgot_password_success_does_not_redirect() {
        let mut controller = AuthFormController::new(AuthMode::ForgotPassword);
        controller.set_field(Field::Email, "user@example.com".to_string());

        let pending = controller.begin_submit().expect("valid email");
        let completion = controller.complete(pending.ticket, Ok(())).expect("current");

        assert_eq!(completion.redirect, None);
        assert_eq!(completion.notice.title, "Check your email");
    }

    #[test]
    fn completion_after_mode_change_is_discarded() {
        let mut controller = valid_login();
        let pending = controller.begin_submit().expect("valid login");

        controller.set_mode(AuthMode::ForgotPassword);

        assert_eq!(controller.complete(pending.ticket, Ok(())), None);
        assert_eq!(controller.state(), &SubmissionState::Idle);
        assert_eq!(controller.mode(), AuthMode::ForgotPassword);
    }

    #[test]
    fn completion_after_reset_is_discarded() {
        let mut controller = valid_login();
        let pending = controller.begin_submit().expect("valid login");

        controller.reset();

        assert_eq!(controller.complete(pending.ticket, Ok(())), None);
    }

    #[test]
    fn failure_enters_failed_and_allows_retry() {
        let mut controller = valid_login();
        let pending = controller.begin_submit().expect("valid login");

        let completion = controller
            .complete(
                pending.ticket,
                Err(AppError::Http {
                    status: 401,
                    message: "Invalid credentials".to_string(),
                }),
            )
            .expect("current ticket");

        assert_eq!(completion.redirect, None);
        assert_eq!(completion.notice.kind, NoticeKind::Error);
        assert_eq!(controller.failure(), Some("Invalid credentials"));

        let retry = controller.begin_submit();
        assert!(retry.is_ok());
        assert!(controller.is_submitting());
    }

    #[test]
    fn editing_clears_failure_message() {
        let mut controller = valid_login();
        let pending = controller.begin_submit().expect("valid login");
        controller.complete(pending.ticket, Err(AppError::Network("offline".to_string())));
        assert!(controller.failure().is_some());

        controller.set_field(Field::Password, "secret2".to_string());

        assert_eq!(controller.state(), &SubmissionState::Idle);
    }

    #[test]
    fn untouched_fields_are_not_validated_while_typing() {
        let mut controller = AuthFormController::new(AuthMode::Login);
        controller.set_field(Field::Email, "us".to_string());

        assert_eq!(controller.error(Field::Email), None);
    }

    #[test]
    fn touched_field_validates_live() {
        let mut controller = AuthFormController::new(AuthMode::Login);
        controller.set_field(Field::Email, "user@".to_string());
        controller.touch(Field::Email);
        assert_eq!(controller.error(Field::Email), Some("Invalid email address."));

        controller.set_field(Field::Email, "user@example.com".to_string());

        assert_eq!(controller.error(Field::Email), None);
    }

    #[test]
    fn errors_clear_once_field_becomes_valid_after_submit() {
        let mut controller = AuthFormController::new(AuthMode::SignUp);
        fill(&mut controller, "A", "user@example.com", "secret1");
        controller.begin_submit().unwrap_err();

        controller.set_field(Field::Name, "Al".to_string());

        assert!(controller.errors().is_empty());
        assert!(controller.begin_submit().is_ok());
    }

    #[tokio::test]
    async fn submit_form_login_notifies_then_navigates() {
        let form = Rc::new(RefCell::new(valid_login()));
        let submitter = FakeSubmitter::new(&form);
        let effects = Recorded::default();

        submit_form(form.as_ref(), &submitter, &effects)
            .await
            .expect("submit starts");

        assert_eq!(submitter.calls.get(), 1);
        assert_eq!(*submitter.seen.borrow(), vec![SubmissionState::Submitting]);
        assert_eq!(form.borrow().state(), &SubmissionState::Idle);
        assert_eq!(*effects.navigations.borrow(), vec!["/dashboard".to_string()]);
        let notices = effects.notices.borrow();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].title, "Success!");
    }

    #[tokio::test]
    async fn submit_form_forgot_password_never_navigates() {
        let form = Rc::new(RefCell::new(AuthFormController::new(AuthMode::ForgotPassword)));
        form.borrow_mut()
            .set_field(Field::Email, "user@example.com".to_string());
        let submitter = FakeSubmitter::new(&form);
        let effects = Recorded::default();

        submit_form(form.as_ref(), &submitter, &effects)
            .await
            .expect("submit starts");

        assert_eq!(form.borrow().state(), &SubmissionState::Idle);
        assert!(effects.navigations.borrow().is_empty());
        assert_eq!(effects.notices.borrow()[0].title, "Check your email");
    }

    #[tokio::test]
    async fn concurrent_submit_calls_the_submitter_once() {
        let form = Rc::new(RefCell::new(valid_login()));
        let submitter = FakeSubmitter::new(&form);
        let effects = Recorded::default();

        let (first, second) = tokio::join!(
            submit_form(form.as_ref(), &submitter, &effects),
            submit_form(form.as_ref(), &submitter, &effects),
        );

        assert_eq!(first, Ok(()));
        assert_eq!(second, Err(SubmitRejected::InFlight));
        assert_eq!(submitter.calls.get(), 1);
        assert_eq!(effects.navigations.borrow().len(), 1);
    }

    #[tokio::test]
    async fn invalid_form_never_reaches_submitter() {
        let form = Rc::new(RefCell::new(AuthFormController::new(AuthMode::Login)));
        form.borrow_mut()
            .set_field(Field::Email, "not-an-email".to_string());
        let submitter = FakeSubmitter::new(&form);
        let effects = Recorded::default();

        let result = submit_form(form.as_ref(), &submitter, &effects).await;

        assert_eq!(result, Err(SubmitRejected::Invalid));
        assert_eq!(submitter.calls.get(), 0);
        assert!(effects.notices.borrow().is_empty());
    }

    #[tokio::test]
    async fn mode_switch_mid_flight_drops_the_result() {
        let form = Rc::new(RefCell::new(valid_login()));
        let mut submitter = FakeSubmitter::new(&form);
        submitter.switch_to = Some(AuthMode::SignUp);
        let effects = Recorded::default();

        submit_form(form.as_ref(), &submitter, &effects)
            .await
            .expect("submit starts");

        assert!(effects.notices.borrow().is_empty());
        assert!(effects.navigations.borrow().is_empty());
        assert_eq!(form.borrow().mode(), AuthMode::SignUp);
        assert_eq!(form.borrow().state(), &SubmissionState::Idle);
    }

    #[tokio::test]
    async fn failed_submission_notifies_without_navigation() {
        let form = Rc::new(RefCell::new(valid_login()));
        let mut submitter = FakeSubmitter::new(&form);
        submitter.outcome = Err(AppError::Timeout("Request timed out.".to_string()));
        let effects = Recorded::default();

        submit_form(form.as_ref(), &submitter, &effects)
            .await
            .expect("submit starts");

        assert!(effects.navigations.borrow().is_empty());
        assert_eq!(effects.notices.borrow()[0].kind, NoticeKind::Error);
        assert_eq!(
            form.borrow().failure(),
            Some("Timeout: Request timed out.")
        );
    }

    #[tokio::test]
    async fn detached_form_rejects_submit() {
        let form = Rc::new(RefCell::new(valid_login()));
        let submitter = FakeSubmitter::new(&form);
        let effects = Recorded::default();

        let result = submit_form(&Gone, &submitter, &effects).await;

        assert_eq!(result, Err(SubmitRejected::Detached));
        assert_eq!(submitter.calls.get(), 0);
    }
}
