//! DOM Modal Host
//!
//! Binds `ConfirmDialog` to the `#confirm-modal` markup.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, KeyboardEvent, MouseEvent, Window};

use crate::components::ids;
use crate::confirm::{ConfirmRequest, DialogEvent, ModalHost};

#[derive(Clone)]
pub struct DomModalHost {
    window: Window,
}

impl DomModalHost {
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    fn document(&self) -> Option<Document> {
        self.window.document()
    }
}

/// Listeners registered for one open dialog
pub struct ModalBinding {
    modal: HtmlElement,
    confirm: Element,
    cancel: Element,
    on_confirm: Closure<dyn FnMut(Event)>,
    on_cancel: Closure<dyn FnMut(Event)>,
    on_backdrop: Closure<dyn FnMut(MouseEvent)>,
    on_key: Closure<dyn FnMut(KeyboardEvent)>,
}

impl ModalHost for DomModalHost {
    type Binding = ModalBinding;

    fn open(&self, request: &ConfirmRequest, on_event: Rc<dyn Fn(DialogEvent)>) -> Option<ModalBinding> {
        let document = self.document()?;
        let modal = document.get_element_by_id(ids::MODAL)?.dyn_into::<HtmlElement>().ok()?;
        let title = document.get_element_by_id(ids::TITLE)?;
        let message = document.get_element_by_id(ids::MESSAGE)?;
        let confirm = document.get_element_by_id(ids::CONFIRM)?;
        let cancel = document.get_element_by_id(ids::CANCEL)?;

        title.set_text_content(Some(&request.title));
        message.set_text_content(Some(&request.message));
        confirm.set_text_content(Some(&request.confirm_text));
        cancel.set_text_content(Some(&request.cancel_text));
        let _ = modal.style().set_property("display", "flex");

        let emit = on_event.clone();
        let on_confirm = Closure::<dyn FnMut(Event)>::new(move |_: Event| emit(DialogEvent::ConfirmClicked));

        let emit = on_event.clone();
        let on_cancel = Closure::<dyn FnMut(Event)>::new(move |_: Event| emit(DialogEvent::CancelClicked));

        let emit = on_event.clone();
        let overlay: JsValue = modal.clone().into();
        let on_backdrop = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
            let on_backdrop = ev.target().map(|target| JsValue::from(target) == overlay).unwrap_or(false);
            emit(DialogEvent::OverlayClicked { on_backdrop });
        });

        let emit = on_event;
        let on_key = Closure::<dyn FnMut(KeyboardEvent)>::new(move |ev: KeyboardEvent| {
            emit(DialogEvent::KeyPressed(ev.key()));
        });

        let _ = confirm.add_event_listener_with_callback("click", on_confirm.as_ref().unchecked_ref());
        let _ = cancel.add_event_listener_with_callback("click", on_cancel.as_ref().unchecked_ref());
        let _ = modal.add_event_listener_with_callback("click", on_backdrop.as_ref().unchecked_ref());
        let _ = self
            .window
            .add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref());

        Some(ModalBinding {
            modal,
            confirm,
            cancel,
            on_confirm,
            on_cancel,
            on_backdrop,
            on_key,
        })
    }

    fn close(&self, binding: ModalBinding) {
        let ModalBinding {
            modal,
            confirm,
            cancel,
            on_confirm,
            on_cancel,
            on_backdrop,
            on_key,
        } = binding;

        let _ = modal.style().set_property("display", "none");
        let _ = confirm.remove_event_listener_with_callback("click", on_confirm.as_ref().unchecked_ref());
        let _ = cancel.remove_event_listener_with_callback("click", on_cancel.as_ref().unchecked_ref());
        let _ = modal.remove_event_listener_with_callback("click", on_backdrop.as_ref().unchecked_ref());
        let _ = self
            .window
            .remove_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref());
    }

    fn prompt(&self, message: &str) -> bool {
        self.window.confirm_with_message(message).unwrap_or(false)
    }
}
