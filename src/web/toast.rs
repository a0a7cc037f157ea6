//! Body Toast Layer
//!
//! Toasts are `div.notification` elements appended to `<body>`; the `show`
//! class drives the entry/exit transition.

use web_sys::{Document, Element};

use crate::notify::{Severity, ToastLayer};

#[derive(Clone)]
pub struct BodyToastLayer {
    document: Document,
}

impl BodyToastLayer {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl ToastLayer for BodyToastLayer {
    /// `None` when the element could not be created or attached
    type Handle = Option<Element>;

    fn mount(&self, message: &str, severity: Severity) -> Option<Element> {
        let body = self.document.body()?;
        let toast = self.document.create_element("div").ok()?;
        toast.set_class_name(&format!("notification notification-{}", severity.as_str()));
        toast.set_text_content(Some(message));
        body.append_child(&toast).ok()?;
        Some(toast)
    }

    fn set_visible(&self, toast: &Option<Element>, visible: bool) {
        if let Some(toast) = toast {
            let _ = toast.class_list().toggle_with_force("show", visible);
        }
    }

    fn unmount(&self, toast: Option<Element>) {
        if let Some(toast) = toast {
            toast.remove();
        }
    }
}
