//! Confirm Modal Component
//!
//! Markup for the shared confirmation dialog. Behavior is bound separately by
//! `web::DomModalHost`, which looks the elements up by the ids below.

use leptos::prelude::*;

/// Stable element ids shared with the modal host
pub mod ids {
    pub const MODAL: &str = "confirm-modal";
    pub const TITLE: &str = "confirm-modal-title";
    pub const MESSAGE: &str = "confirm-modal-message";
    pub const CONFIRM: &str = "confirm-modal-confirm";
    pub const CANCEL: &str = "confirm-modal-cancel";
}

/// Hidden confirmation dialog
///
/// The overlay (`#confirm-modal`) is the backdrop: clicks landing on it
/// directly, outside `.modal-content`, cancel the dialog.
#[component]
pub fn ConfirmModal() -> impl IntoView {
    view! {
        <div id={ids::MODAL} class="modal confirm-modal" style="display: none;">
            <div class="modal-content" role="dialog" aria-modal="true">
                <h3 id={ids::TITLE} class="modal-title"></h3>
                <p id={ids::MESSAGE} class="modal-message"></p>
                <div class="modal-actions">
                    <button type="button" id={ids::CANCEL} class="cancel-btn"></button>
                    <button type="button" id={ids::CONFIRM} class="confirm-btn danger"></button>
                </div>
            </div>
        </div>
    }
}
