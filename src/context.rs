//! UI Toolkit Context
//!
//! Everything page scripts need, bundled into one explicit value instead of
//! globals: `call`, `submit`, `notify` and `confirm`.

use log::info;
use serde_json::Value;

use crate::client::{ApiClient, CallOptions, Method, Transport};
use crate::confirm::{ConfirmDialog, ConfirmOptions, ModalHost};
use crate::error::{ApiError, Error, Result};
use crate::form::{FormSubmitter, FormView};
use crate::messages::Messages;
use crate::notify::{Notify, Severity};

pub struct Toolkit<T, N, H> {
    submitter: FormSubmitter<T, N>,
    dialog: ConfirmDialog<H>,
    notifier: N,
}

impl<T, N, H> Toolkit<T, N, H>
where
    T: Transport,
    N: Notify + Clone,
    H: ModalHost,
{
    pub fn new(client: ApiClient<T>, notifier: N, dialog: ConfirmDialog<H>) -> Self {
        Self {
            submitter: FormSubmitter::new(client, notifier.clone()),
            dialog,
            notifier,
        }
    }

    pub fn client(&self) -> &ApiClient<T> {
        self.submitter.client()
    }

    pub fn messages(&self) -> Messages {
        self.client().messages()
    }

    pub async fn call(&self, path: &str, options: CallOptions) -> std::result::Result<Value, ApiError> {
        self.client().call(path, options).await
    }

    pub async fn submit<F: FormView + ?Sized>(&self, form: &F, endpoint: &str, method: Method) -> Result<Value> {
        self.submitter.submit(form, endpoint, method).await
    }

    pub fn notify(&self, message: &str, severity: Severity) {
        self.notifier.notify(message, severity);
    }

    pub async fn confirm(&self, message: &str, options: ConfirmOptions) -> bool {
        self.dialog.confirm(message, options).await
    }

    /// One error toast for a failure that did not come from a form.
    pub fn present_error(&self, err: &Error) {
        self.submitter.present_error::<dyn FormView>(None, err);
    }

    /// Confirm, then DELETE `path`. Returns `Ok(false)` when the user backs out.
    pub async fn confirm_delete(&self, prompt: &str, path: &str) -> Result<bool> {
        if !self.confirm(prompt, ConfirmOptions::default()).await {
            return Ok(false);
        }
        match self.call(path, CallOptions::new(Method::Delete)).await {
            Ok(_) => {
                info!("deleted {}", path);
                self.notify(self.messages().deleted(), Severity::Success);
                Ok(true)
            }
            Err(err) => {
                let err = Error::Api(err);
                self.present_error(&err);
                Err(err)
            }
        }
    }
}
