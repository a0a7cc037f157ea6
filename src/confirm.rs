//! Confirmation Dialog
//!
//! Async yes/no gate in front of destructive operations.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use log::debug;

use crate::messages::Messages;

/// Overrides for the dialog's texts; `None` uses the locale default
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfirmOptions {
    pub confirm_text: Option<String>,
    pub cancel_text: Option<String>,
    pub title: Option<String>,
}

/// Fully resolved dialog content for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmRequest {
    pub message: String,
    pub confirm_text: String,
    pub cancel_text: String,
    pub title: String,
}

impl ConfirmRequest {
    pub fn new(message: &str, options: ConfirmOptions, messages: &Messages) -> Self {
        Self {
            message: message.to_string(),
            confirm_text: options
                .confirm_text
                .unwrap_or_else(|| messages.confirm_delete().to_string()),
            cancel_text: options.cancel_text.unwrap_or_else(|| messages.cancel().to_string()),
            title: options.title.unwrap_or_else(|| messages.confirm_title().to_string()),
        }
    }
}

/// User input routed from the open dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogEvent {
    ConfirmClicked,
    CancelClicked,
    /// A click anywhere on the overlay; `on_backdrop` is true outside the dialog body
    OverlayClicked { on_backdrop: bool },
    /// `KeyboardEvent.key`
    KeyPressed(String),
}

impl DialogEvent {
    /// The answer this event settles the dialog with, if any.
    pub fn outcome(&self) -> Option<bool> {
        match self {
            DialogEvent::ConfirmClicked => Some(true),
            DialogEvent::CancelClicked => Some(false),
            DialogEvent::OverlayClicked { on_backdrop: true } => Some(false),
            DialogEvent::OverlayClicked { on_backdrop: false } => None,
            DialogEvent::KeyPressed(key) => match key.as_str() {
                "Escape" => Some(false),
                "Enter" => Some(true),
                _ => None,
            },
        }
    }
}

/// The modal UI backing `ConfirmDialog`
pub trait ModalHost {
    /// Listener registrations owned while the dialog is open
    type Binding;

    /// Populates and shows the modal, routing input to `on_event`.
    /// Returns `None` when the page has no modal markup.
    fn open(&self, request: &ConfirmRequest, on_event: Rc<dyn Fn(DialogEvent)>) -> Option<Self::Binding>;

    /// Detaches every listener in `binding` and hides the modal.
    fn close(&self, binding: Self::Binding);

    /// Blocking fallback when no modal is available
    fn prompt(&self, message: &str) -> bool;
}

#[derive(Debug, Clone)]
pub struct ConfirmDialog<H> {
    host: H,
    messages: Messages,
}

impl<H: ModalHost> ConfirmDialog<H> {
    pub fn new(host: H, messages: Messages) -> Self {
        Self { host, messages }
    }

    /// Resolves once: `true` on confirm or Enter, `false` on cancel, Escape
    /// or a backdrop click. The modal is closed before this returns.
    pub async fn confirm(&self, message: &str, options: ConfirmOptions) -> bool {
        let request = ConfirmRequest::new(message, options, &self.messages);

        let (tx, rx) = oneshot::channel();
        let pending = Rc::new(RefCell::new(Some(tx)));
        let on_event: Rc<dyn Fn(DialogEvent)> = Rc::new(move |event: DialogEvent| {
            let Some(answer) = event.outcome() else {
                return;
            };
            // Only the first settling event gets the sender.
            if let Some(tx) = pending.borrow_mut().take() {
                let _ = tx.send(answer);
            }
        });

        let Some(binding) = self.host.open(&request, on_event) else {
            debug!("confirm modal not found, falling back to prompt");
            return self.host.prompt(message);
        };
        let open = OpenModal {
            host: &self.host,
            binding: Some(binding),
        };

        let answer = rx.await.unwrap_or(false);
        drop(open);
        debug!("confirm '{}' -> {}", request.message, answer);
        answer
    }
}

/// Closes the modal when dropped, including when the `confirm` future is
/// dropped before it settles.
struct OpenModal<'a, H: ModalHost> {
    host: &'a H,
    binding: Option<H::Binding>,
}

impl<H: ModalHost> Drop for OpenModal<'_, H> {
    fn drop(&mut self) {
        if let Some(binding) = self.binding.take() {
            self.host.close(binding);
        }
    }
}
