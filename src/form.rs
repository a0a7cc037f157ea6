//! Form Submission
//!
//! Wraps a form submit: disable the submit control, clear stale field errors,
//! send the form as JSON, then annotate fields and toast the outcome. Errors
//! are always handed back to the caller after they are shown.

use std::collections::HashSet;

use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::client::{ApiClient, CallOptions, Method, Transport};
use crate::error::{ApiError, Error, FieldDetail, Result};
use crate::messages::Messages;
use crate::notify::{Notify, Severity};

/// The form being submitted, as seen by the submit flow
pub trait FormView {
    /// Current `(name, value)` entries in document order
    fn entries(&self) -> Vec<(String, String)>;

    /// No-op when the form has no submit control.
    fn set_submit_enabled(&self, enabled: bool);

    /// Removes every field marker and inline message. Safe to call when there are none.
    fn clear_field_errors(&self);

    /// Marks the control named `field` and shows `message` next to it.
    /// Returns `false` when no control has that name.
    fn mark_field_error(&self, field: &str, message: &str) -> bool;
}

/// Flat JSON object of the form's entries; a repeated name keeps its last value.
pub fn form_payload<F: FormView + ?Sized>(form: &F) -> Value {
    let mut payload = Map::new();
    for (name, value) in form.entries() {
        payload.insert(name, Value::String(value));
    }
    Value::Object(payload)
}

/// Annotates one control per distinct field name. Returns how many were marked.
pub fn apply_field_errors<F: FormView + ?Sized>(form: &F, details: &[FieldDetail], messages: &Messages) -> usize {
    let mut seen = HashSet::new();
    let mut marked = 0;
    for detail in details {
        if detail.field.is_empty() || !seen.insert(detail.field.as_str()) {
            continue;
        }
        let message = if detail.message.is_empty() {
            messages.invalid_field()
        } else {
            detail.message.as_str()
        };
        if form.mark_field_error(&detail.field, message) {
            marked += 1;
        } else {
            debug!("no control named '{}' for field error", detail.field);
        }
    }
    marked
}

/// Keeps the submit control disabled while a submission is in flight.
struct SubmitGuard<'a, F: FormView + ?Sized> {
    form: &'a F,
}

impl<'a, F: FormView + ?Sized> SubmitGuard<'a, F> {
    fn engage(form: &'a F) -> Self {
        form.set_submit_enabled(false);
        form.clear_field_errors();
        Self { form }
    }
}

impl<F: FormView + ?Sized> Drop for SubmitGuard<'_, F> {
    fn drop(&mut self) {
        self.form.set_submit_enabled(true);
    }
}

#[derive(Debug, Clone)]
pub struct FormSubmitter<T, N> {
    client: ApiClient<T>,
    notifier: N,
}

impl<T: Transport, N: Notify> FormSubmitter<T, N> {
    pub fn new(client: ApiClient<T>, notifier: N) -> Self {
        Self { client, notifier }
    }

    pub fn client(&self) -> &ApiClient<T> {
        &self.client
    }

    /// Submits `form` to `endpoint` (usually `Method::Post`) and returns the response body.
    ///
    /// The submit control is disabled only for the duration of the call. It is
    /// advisory UI state and does not prevent a second submission.
    pub async fn submit<F: FormView + ?Sized>(&self, form: &F, endpoint: &str, method: Method) -> Result<Value> {
        self.run(form, endpoint, method, Ok).await
    }

    /// Like `submit`, decoding the response into `R`.
    pub async fn submit_as<F, R>(&self, form: &F, endpoint: &str, method: Method) -> Result<R>
    where
        F: FormView + ?Sized,
        R: DeserializeOwned,
    {
        self.run(form, endpoint, method, |value| Ok(serde_json::from_value(value)?))
            .await
    }

    async fn run<F, R>(
        &self,
        form: &F,
        endpoint: &str,
        method: Method,
        decode: impl FnOnce(Value) -> Result<R>,
    ) -> Result<R>
    where
        F: FormView + ?Sized,
    {
        let _guard = SubmitGuard::engage(form);
        let payload = form_payload(form);

        let outcome = match self.client.call(endpoint, CallOptions::new(method).json(payload)).await {
            Ok(value) => decode(value),
            Err(err) => Err(Error::Api(err)),
        };

        match outcome {
            Ok(value) => {
                self.notifier.notify(self.client.messages().saved(), Severity::Success);
                Ok(value)
            }
            Err(err) => {
                self.present_error(Some(form), &err);
                Err(err)
            }
        }
    }

    /// Shows exactly one toast for `err`, plus field annotations when a form is given.
    pub fn present_error<F: FormView + ?Sized>(&self, form: Option<&F>, err: &Error) {
        let messages = self.client.messages();
        match err {
            Error::Api(api) => {
                if let Some(form) = form {
                    apply_field_errors(form, &api.details, &messages);
                }
                self.notifier.notify(&api.message, Severity::Error);
                log_request_id(api);
            }
            Error::Unexpected(reason) => {
                warn!("unexpected failure: {}", reason);
                self.notifier.notify(messages.unexpected_error(), Severity::Error);
            }
        }
    }
}

fn log_request_id(err: &ApiError) {
    if let Some(request_id) = &err.request_id {
        warn!("RequestId: {}", request_id);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::client::tests::{client, MockTransport};
    use crate::notify::tests::RecordingNotifier;
    use serde_json::json;
    use std::cell::RefCell;

    /// In-memory form: named controls, an optional submit button, inline errors.
    #[derive(Default)]
    pub(crate) struct FakeForm {
        pub controls: Vec<(String, String)>,
        pub has_submit: bool,
        pub submit_history: RefCell<Vec<bool>>,
        pub errors: RefCell<Vec<(String, String)>>,
    }

    impl FakeForm {
        pub fn new(controls: &[(&str, &str)]) -> Self {
            Self {
                controls: controls.iter().map(|(n, v)| (n.to_string(), v.to_string())).collect(),
                has_submit: true,
                ..Default::default()
            }
        }

        pub fn submit_enabled(&self) -> bool {
            self.submit_history.borrow().last().copied().unwrap_or(true)
        }
    }

    impl FormView for FakeForm {
        fn entries(&self) -> Vec<(String, String)> {
            self.controls.clone()
        }

        fn set_submit_enabled(&self, enabled: bool) {
            if self.has_submit {
                self.submit_history.borrow_mut().push(enabled);
            }
        }

        fn clear_field_errors(&self) {
            self.errors.borrow_mut().clear();
        }

        fn mark_field_error(&self, field: &str, message: &str) -> bool {
            if !self.controls.iter().any(|(name, _)| name == field) {
                return false;
            }
            self.errors.borrow_mut().push((field.to_string(), message.to_string()));
            true
        }
    }

    fn submitter(transport: &MockTransport) -> FormSubmitter<MockTransport, RecordingNotifier> {
        FormSubmitter::new(client(transport), RecordingNotifier::default())
    }

    #[tokio::test]
    async fn test_validation_failure_annotates_and_toasts_once() {
        let transport = MockTransport::default();
        transport.reply(
            422,
            json!({"error": {"code": "X", "message": "M", "details": [{"field": "name", "message": "required"}]}}),
        );
        let submitter = submitter(&transport);
        let form = FakeForm::new(&[("name", ""), ("color", "#667eea")]);

        let err = submitter.submit(&form, "/v1/tag/", Method::Post).await.unwrap_err();

        assert_eq!(err.as_api().map(|e| e.code.as_str()), Some("X"));
        assert_eq!(*submitter.notifier.shown.borrow(), vec![("M".to_string(), Severity::Error)]);
        assert_eq!(*form.errors.borrow(), vec![("name".to_string(), "required".to_string())]);
        assert_eq!(*form.submit_history.borrow(), vec![false, true]);
        assert!(form.submit_enabled());
    }

    #[tokio::test]
    async fn test_success_posts_payload_and_toasts() {
        let transport = MockTransport::default();
        transport.reply(201, json!({"id": 3, "name": "home"}));
        let submitter = submitter(&transport);
        let form = FakeForm::new(&[("name", "draft"), ("color", "#000000"), ("name", "home")]);

        let value = submitter.submit(&form, "/v1/tag/", Method::Post).await.unwrap();

        assert_eq!(value, json!({"id": 3, "name": "home"}));
        let request = transport.last_request();
        assert_eq!(request.method, Method::Post);
        let body: Value = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({"name": "home", "color": "#000000"}));
        assert_eq!(*submitter.notifier.shown.borrow(), vec![("Saved.".to_string(), Severity::Success)]);
        assert!(form.submit_enabled());
    }

    #[tokio::test]
    async fn test_previous_annotations_cleared_on_next_attempt() {
        let transport = MockTransport::default();
        transport.reply(422, json!({"error": {"message": "M", "details": [{"field": "name", "message": "required"}]}}));
        transport.reply(200, json!({"id": 1}));
        let submitter = submitter(&transport);
        let form = FakeForm::new(&[("name", "")]);

        assert!(submitter.submit(&form, "/v1/tag/", Method::Post).await.is_err());
        assert_eq!(form.errors.borrow().len(), 1);

        submitter.submit(&form, "/v1/tag/", Method::Post).await.unwrap();
        assert!(form.errors.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_and_repeated_fields() {
        let transport = MockTransport::default();
        transport.reply(
            422,
            json!({"error": {"message": "M", "details": [
                {"field": "content", "message": "too long"},
                {"field": "content", "message": "also bad"},
                {"field": "nope", "message": "ignored"},
                {"field": null, "message": "no field"},
                {"field": "deadline"}
            ]}}),
        );
        let submitter = submitter(&transport);
        let form = FakeForm::new(&[("content", "x"), ("deadline", "soon")]);

        submitter.submit(&form, "/v1/todo/", Method::Post).await.unwrap_err();

        assert_eq!(
            *form.errors.borrow(),
            vec![
                ("content".to_string(), "too long".to_string()),
                ("deadline".to_string(), "This value is invalid.".to_string()),
            ]
        );
        assert_eq!(submitter.notifier.shown.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_network_failure_toasts_and_returns_error() {
        let transport = MockTransport::default();
        transport.fail();
        let submitter = submitter(&transport);
        let mut form = FakeForm::new(&[("content", "milk")]);
        form.has_submit = false;

        let err = submitter.submit(&form, "/v1/todo/", Method::Post).await.unwrap_err();

        assert_eq!(err.as_api().map(|e| e.status), Some(0));
        assert_eq!(
            *submitter.notifier.shown.borrow(),
            vec![("Unable to reach the server.".to_string(), Severity::Error)]
        );
        assert!(form.errors.borrow().is_empty());
        assert!(form.submit_history.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_undecodable_response_is_unexpected() {
        #[derive(Debug, serde::Deserialize)]
        struct Created {
            #[allow(dead_code)]
            id: u32,
        }

        let transport = MockTransport::default();
        transport.reply(200, json!({"unexpected": true}));
        let submitter = submitter(&transport);
        let form = FakeForm::new(&[("content", "milk")]);

        let err = submitter
            .submit_as::<_, Created>(&form, "/v1/todo/", Method::Post)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Unexpected(_)));
        assert_eq!(
            *submitter.notifier.shown.borrow(),
            vec![("An unexpected error occurred.".to_string(), Severity::Error)]
        );
        assert!(form.submit_enabled());
    }

    #[test]
    fn test_clear_field_errors_is_idempotent() {
        let form = FakeForm::new(&[("name", "")]);
        apply_field_errors(&form, &[FieldDetail::new("name", "required")], &Messages::default());
        form.clear_field_errors();
        form.clear_field_errors();
        assert!(form.errors.borrow().is_empty());
    }
}
