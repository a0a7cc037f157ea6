//! Browser Bindings
//!
//! DOM-backed implementations of the core traits and the wasm entry point.

mod form;
mod logger;
mod modal;
mod toast;

use std::rc::Rc;
use std::time::Duration;

use futures::future::LocalBoxFuture;
use leptos::mount::mount_to_body;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

use crate::client::{ApiClient, ReqwestTransport};
use crate::components::{ids, ConfirmModal};
use crate::config::ClientConfig;
use crate::confirm::ConfirmDialog;
use crate::connectivity;
use crate::context::Toolkit;
use crate::notify::Notifier;
use crate::runtime::Scheduler;

pub use form::DomForm;
pub use modal::{DomModalHost, ModalBinding};
pub use toast::BodyToastLayer;

/// Id of the inline `<script type="application/json">` holding `ClientConfig`
pub const CONFIG_ELEMENT_ID: &str = "todo-ui-config";

pub type WebNotifier = Notifier<BodyToastLayer, WasmScheduler>;
pub type WebToolkit = Toolkit<ReqwestTransport, WebNotifier, DomModalHost>;

/// Browser event loop scheduler
#[derive(Debug, Clone, Copy, Default)]
pub struct WasmScheduler;

impl Scheduler for WasmScheduler {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        wasm_bindgen_futures::spawn_local(task);
    }

    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        Box::pin(gloo_timers::future::sleep(duration))
    }
}

/// Reads the page config. The error, if any, is returned for logging once a logger exists.
pub fn load_config(window: &Window, document: &Document) -> (ClientConfig, Option<String>) {
    let raw = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content());
    let (mut config, problem) = match raw {
        Some(raw) => match ClientConfig::from_json(&raw) {
            Ok(config) => (config, None),
            Err(err) => (ClientConfig::default(), Some(err.to_string())),
        },
        None => (ClientConfig::default(), None),
    };
    if config.base_url.is_none() {
        config.base_url = window.location().origin().ok();
    }
    (config, problem)
}

pub fn notifier(document: Document, config: &ClientConfig) -> WebNotifier {
    Notifier::new(Rc::new(BodyToastLayer::new(document)), WasmScheduler, config.notify)
}

/// Builds the toolkit page scripts use for `call`/`submit`/`notify`/`confirm`.
pub fn toolkit(config: &ClientConfig) -> Option<WebToolkit> {
    let window = web_sys::window()?;
    let document = window.document()?;
    let client = ApiClient::new(ReqwestTransport::default(), config);
    let dialog = ConfirmDialog::new(DomModalHost::new(window), config.messages());
    Some(Toolkit::new(client, notifier(document, config), dialog))
}

/// Toasts on `offline`/`online` for the lifetime of the page.
pub fn watch_connectivity(window: &Window, notifier: WebNotifier, config: &ClientConfig) {
    let messages = config.messages();
    for (event, online) in [("offline", false), ("online", true)] {
        let notifier = notifier.clone();
        let listener = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
            connectivity::announce(&notifier, &messages, online);
        });
        let _ = window.add_event_listener_with_callback(event, listener.as_ref().unchecked_ref());
        listener.forget();
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let (config, problem) = load_config(&window, &document);
    logger::init(config.log_level_filter());
    if let Some(problem) = problem {
        warn!("ignoring malformed #{}: {}", CONFIG_ELEMENT_ID, problem);
    }

    // Pages may ship their own modal markup; otherwise provide it.
    if document.get_element_by_id(ids::MODAL).is_none() {
        mount_to_body(ConfirmModal);
    }

    watch_connectivity(&window, notifier(document, &config), &config);
}
