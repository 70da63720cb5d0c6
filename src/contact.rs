use std::{sync::Arc, time::Duration};

use leptos::prelude::*;

use crate::relay::{Relay, RelayError, TemplateParams};

pub const RECIPIENT_NAME: &str = "Nilaksh Aggarwal";
pub const STATUS_DISPLAY: Duration = Duration::from_millis(5000);
pub const SUCCESS_MESSAGE: &str = "Thank you for your message! I'll get back to you soon.";
pub const FAILURE_MESSAGE: &str =
    "Sorry, there was an error sending your message. Please try again or contact me directly.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

/// Raw contents of the contact form.
///
/// Values are forwarded exactly as typed: no trimming and no email syntax
/// check. Required-field presence is left to the inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FormState {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.email.is_empty()
            && self.subject.is_empty()
            && self.message.is_empty()
    }

    pub fn template_params(&self, to_name: &str) -> TemplateParams {
        TemplateParams {
            from_name: self.name.clone(),
            from_email: self.email.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
            to_name: to_name.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Pending,
    Success,
    Failure,
}

impl SubmissionStatus {
    pub fn is_settled(self) -> bool {
        matches!(self, Self::Success | Self::Failure)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Delivered,
    Failed,
    /// A submission was already pending; nothing was sent.
    Ignored,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactState {
    pub form: FormState,
    status: SubmissionStatus,
    message: String,
}

impl ContactState {
    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_pending(&self) -> bool {
        self.status == SubmissionStatus::Pending
    }

    /// Moves to Pending and returns the payload to send, or `None` when a
    /// submission is already in flight.
    pub fn begin(&mut self, to_name: &str) -> Option<TemplateParams> {
        if self.is_pending() {
            return None;
        }
        self.status = SubmissionStatus::Pending;
        self.message.clear();
        Some(self.form.template_params(to_name))
    }

    pub fn settle(&mut self, delivered: bool) -> SubmissionOutcome {
        if delivered {
            self.status = SubmissionStatus::Success;
            self.message = SUCCESS_MESSAGE.to_string();
            self.form = FormState::default();
            SubmissionOutcome::Delivered
        } else {
            self.status = SubmissionStatus::Failure;
            self.message = FAILURE_MESSAGE.to_string();
            SubmissionOutcome::Failed
        }
    }

    /// Clears a settled status. A newer Pending submission is left alone.
    pub fn expire(&mut self) {
        if self.status.is_settled() {
            self.status = SubmissionStatus::Idle;
            self.message.clear();
        }
    }
}

/// Runs deferred work after a delay.
pub trait Scheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce() + 'static>);
}

/// Owns the contact form state and drives one submission at a time through
/// the relay.
pub struct ContactController<R, S> {
    relay: Arc<R>,
    scheduler: Arc<S>,
    recipient: &'static str,
    state: ArcRwSignal<ContactState>,
}

impl<R, S> Clone for ContactController<R, S> {
    fn clone(&self) -> Self {
        Self {
            relay: Arc::clone(&self.relay),
            scheduler: Arc::clone(&self.scheduler),
            recipient: self.recipient,
            state: self.state.clone(),
        }
    }
}

impl<R, S> ContactController<R, S>
where
    R: Relay,
    S: Scheduler,
{
    pub fn new(relay: R, scheduler: S) -> Self {
        Self {
            relay: Arc::new(relay),
            scheduler: Arc::new(scheduler),
            recipient: RECIPIENT_NAME,
            state: ArcRwSignal::new(ContactState::default()),
        }
    }

    pub fn relay(&self) -> &R {
        &self.relay
    }

    pub fn state(&self) -> ArcRwSignal<ContactState> {
        self.state.clone()
    }

    pub fn snapshot(&self) -> ContactState {
        self.state.get_untracked()
    }

    pub fn set_field(&self, field: Field, value: String) {
        self.state.update(|s| s.form.set(field, value));
    }

    pub async fn submit(&self) -> SubmissionOutcome {
        let params = match self.state.try_update(|s| s.begin(self.recipient)).flatten() {
            Some(params) => params,
            None => {
                log::debug!("contact submission already pending; ignoring");
                return SubmissionOutcome::Ignored;
            }
        };

        let delivered = match self.relay.send(&params).await {
            Ok(res) if res.is_accepted() => true,
            Ok(res) => {
                let err = RelayError::Status {
                    status: res.status,
                    text: res.text,
                };
                log::error!("EmailJS error: {err}");
                false
            }
            Err(err) => {
                log::error!("EmailJS error: {err}");
                false
            }
        };

        let outcome = self
            .state
            .try_update(|s| s.settle(delivered))
            .unwrap_or(SubmissionOutcome::Failed);
        log::info!("contact submission finished: {outcome:?}");

        let state = self.state.clone();
        self.scheduler.schedule(
            STATUS_DISPLAY,
            Box::new(move || state.update(ContactState::expire)),
        );
        outcome
    }
}

#[cfg(test)]
mod tests {
    use std::{
        cell::{Cell, RefCell},
        rc::Rc,
    };

    use http::StatusCode;
    use tokio::sync::Notify;

    use super::*;
    use crate::relay::RelayResponse;

    enum Reply {
        Status(StatusCode),
        NetworkError,
    }

    struct MockRelay {
        reply: Reply,
        sent: RefCell<Vec<TemplateParams>>,
    }

    impl MockRelay {
        fn new(reply: Reply) -> Self {
            Self {
                reply,
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    impl Relay for MockRelay {
        async fn send(&self, params: &TemplateParams) -> Result<RelayResponse, RelayError> {
            self.sent.borrow_mut().push(params.clone());
            match self.reply {
                Reply::Status(status) => Ok(RelayResponse {
                    status,
                    text: String::new(),
                }),
                Reply::NetworkError => Err(RelayError::Transport("connection reset".to_string())),
            }
        }
    }

    struct GatedRelay {
        calls: Cell<usize>,
        gate: Notify,
    }

    impl Relay for GatedRelay {
        async fn send(&self, _params: &TemplateParams) -> Result<RelayResponse, RelayError> {
            self.calls.set(self.calls.get() + 1);
            self.gate.notified().await;
            Ok(RelayResponse::ok())
        }
    }

    type Task = Box<dyn FnOnce() + 'static>;

    #[derive(Default)]
    struct Clock {
        now: Duration,
        tasks: Vec<(Duration, Task)>,
    }

    /// Simulated clock: tasks fire only when `advance` passes their deadline.
    #[derive(Clone, Default)]
    struct ManualScheduler(Rc<RefCell<Clock>>);

    impl ManualScheduler {
        fn pending(&self) -> usize {
            self.0.borrow().tasks.len()
        }

        fn advance(&self, by: Duration) {
            let due = {
                let mut clock = self.0.borrow_mut();
                clock.now += by;
                let now = clock.now;
                let (due, rest): (Vec<_>, Vec<_>) =
                    clock.tasks.drain(..).partition(|(at, _)| *at <= now);
                clock.tasks = rest;
                due
            };
            for (_, task) in due {
                task();
            }
        }
    }

    impl Scheduler for ManualScheduler {
        fn schedule(&self, delay: Duration, task: Task) {
            let mut clock = self.0.borrow_mut();
            let at = clock.now + delay;
            clock.tasks.push((at, task));
        }
    }

    fn fill(controller: &ContactController<impl Relay, impl Scheduler>) {
        controller.set_field(Field::Name, "Jane".to_string());
        controller.set_field(Field::Email, "jane@x.com".to_string());
        controller.set_field(Field::Subject, "Hi".to_string());
        controller.set_field(Field::Message, "Hello".to_string());
    }

    fn jane() -> FormState {
        FormState {
            name: "Jane".to_string(),
            email: "jane@x.com".to_string(),
            subject: "Hi".to_string(),
            message: "Hello".to_string(),
        }
    }

    #[test]
    fn test_state_transitions() {
        let mut state = ContactState {
            form: jane(),
            ..Default::default()
        };
        assert_eq!(state.status(), SubmissionStatus::Idle);
        assert!(state.message().is_empty());

        let params = state.begin(RECIPIENT_NAME).expect("idle state should begin");
        assert_eq!(params.from_name, "Jane");
        assert_eq!(params.to_name, RECIPIENT_NAME);
        assert!(state.is_pending());
        assert!(state.message().is_empty());

        // trigger is disabled while pending
        assert!(state.begin(RECIPIENT_NAME).is_none());

        assert_eq!(state.settle(false), SubmissionOutcome::Failed);
        assert_eq!(state.status(), SubmissionStatus::Failure);
        assert_eq!(state.message(), FAILURE_MESSAGE);
        assert_eq!(state.form, jane());

        // resubmitting from a settled status goes straight back to pending
        assert!(state.begin(RECIPIENT_NAME).is_some());
        assert_eq!(state.settle(true), SubmissionOutcome::Delivered);
        assert_eq!(state.status(), SubmissionStatus::Success);
        assert_eq!(state.message(), SUCCESS_MESSAGE);
        assert!(state.form.is_empty());

        state.expire();
        assert_eq!(state.status(), SubmissionStatus::Idle);
        assert!(state.message().is_empty());
    }

    #[test]
    fn test_expire_leaves_pending_alone() {
        let mut state = ContactState::default();
        state.begin(RECIPIENT_NAME);
        state.expire();
        assert!(state.is_pending());

        let mut idle = ContactState::default();
        idle.expire();
        assert_eq!(idle, ContactState::default());
    }

    #[test]
    fn test_params_forwarded_verbatim() {
        let form = FormState {
            name: "  Jane ".to_string(),
            email: "not-an-email".to_string(),
            subject: "Hi\n".to_string(),
            message: " Hello ".to_string(),
        };
        let params = form.template_params(RECIPIENT_NAME);
        assert_eq!(params.from_name, "  Jane ");
        assert_eq!(params.from_email, "not-an-email");
        assert_eq!(params.subject, "Hi\n");
        assert_eq!(params.message, " Hello ");
    }

    #[test]
    fn test_form_field_access() {
        let mut form = FormState::default();
        assert!(form.is_empty());
        form.set(Field::Subject, "Hi".to_string());
        assert_eq!(form.get(Field::Subject), "Hi");
        assert_eq!(form.get(Field::Name), "");
        assert!(!form.is_empty());
    }

    #[tokio::test]
    async fn test_submit_success() {
        let scheduler = ManualScheduler::default();
        let controller =
            ContactController::new(MockRelay::new(Reply::Status(StatusCode::OK)), scheduler.clone());
        fill(&controller);

        let outcome = controller.submit().await;
        assert_eq!(outcome, SubmissionOutcome::Delivered);

        let state = controller.snapshot();
        assert_eq!(state.status(), SubmissionStatus::Success);
        assert_eq!(
            state.message(),
            "Thank you for your message! I'll get back to you soon."
        );
        assert!(state.form.is_empty());

        let sent = controller.relay().sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0], jane().template_params("Nilaksh Aggarwal"));
        assert_eq!(scheduler.pending(), 1);
    }

    #[tokio::test]
    async fn test_submit_network_error() {
        let scheduler = ManualScheduler::default();
        let controller =
            ContactController::new(MockRelay::new(Reply::NetworkError), scheduler.clone());
        fill(&controller);

        let outcome = controller.submit().await;
        assert_eq!(outcome, SubmissionOutcome::Failed);

        let state = controller.snapshot();
        assert_eq!(state.status(), SubmissionStatus::Failure);
        assert_eq!(
            state.message(),
            "Sorry, there was an error sending your message. Please try again or contact me directly."
        );
        assert_eq!(state.form, jane());
        assert_eq!(controller.relay().sent.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_submit_rejected_status_is_failure() {
        let controller = ContactController::new(
            MockRelay::new(Reply::Status(StatusCode::BAD_REQUEST)),
            ManualScheduler::default(),
        );
        fill(&controller);

        assert_eq!(controller.submit().await, SubmissionOutcome::Failed);
        let state = controller.snapshot();
        assert_eq!(state.status(), SubmissionStatus::Failure);
        assert_eq!(state.message(), FAILURE_MESSAGE);
        assert_eq!(state.form, jane());
    }

    #[tokio::test]
    async fn test_status_clears_after_display_window() {
        for reply in [Reply::Status(StatusCode::OK), Reply::NetworkError] {
            let scheduler = ManualScheduler::default();
            let controller = ContactController::new(MockRelay::new(reply), scheduler.clone());
            fill(&controller);
            controller.submit().await;
            assert!(controller.snapshot().status().is_settled());

            scheduler.advance(Duration::from_millis(4999));
            assert!(controller.snapshot().status().is_settled());
            assert!(!controller.snapshot().message().is_empty());

            scheduler.advance(Duration::from_millis(1));
            let state = controller.snapshot();
            assert_eq!(state.status(), SubmissionStatus::Idle);
            assert!(state.message().is_empty());
            assert_eq!(scheduler.pending(), 0);
        }
    }

    #[tokio::test]
    async fn test_resubmit_while_pending_is_ignored() {
        let controller = ContactController::new(
            GatedRelay {
                calls: Cell::new(0),
                gate: Notify::new(),
            },
            ManualScheduler::default(),
        );
        fill(&controller);

        let first = controller.submit();
        let second = async {
            assert!(controller.snapshot().is_pending());
            let outcome = controller.submit().await;
            controller.relay().gate.notify_one();
            outcome
        };
        let (first, second) = tokio::join!(first, second);

        assert_eq!(first, SubmissionOutcome::Delivered);
        assert_eq!(second, SubmissionOutcome::Ignored);
        assert_eq!(controller.relay().calls.get(), 1);
        assert_eq!(controller.snapshot().status(), SubmissionStatus::Success);
    }
}
