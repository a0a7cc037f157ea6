//! DOM Form
//!
//! `FormView` over an `HtmlFormElement`.

use wasm_bindgen::JsCast;
use web_sys::{Element, FormData, HtmlElement, HtmlFormElement};

use crate::form::FormView;

const SUBMIT_SELECTOR: &str = "button[type=submit], input[type=submit]";
const FIELD_ERROR_CLASS: &str = "field-error";
const ERROR_CLASS: &str = "error";

#[derive(Clone)]
pub struct DomForm {
    form: HtmlFormElement,
}

impl DomForm {
    pub fn new(form: HtmlFormElement) -> Self {
        Self { form }
    }

    /// Looks the form up by element id.
    pub fn by_id(id: &str) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let form = document.get_element_by_id(id)?.dyn_into::<HtmlFormElement>().ok()?;
        Some(Self::new(form))
    }

    fn select_all(&self, selector: &str) -> Vec<Element> {
        let Ok(nodes) = self.form.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    // Compare attributes instead of building a selector so names need no escaping.
    fn control(&self, name: &str) -> Option<Element> {
        self.select_all("[name]")
            .into_iter()
            .find(|el| el.get_attribute("name").as_deref() == Some(name))
    }
}

impl FormView for DomForm {
    fn entries(&self) -> Vec<(String, String)> {
        let Ok(data) = FormData::new_with_form(&self.form) else {
            return Vec::new();
        };
        let Ok(Some(iter)) = js_sys::try_iter(&data) else {
            return Vec::new();
        };
        iter.flatten()
            .filter_map(|entry| {
                let pair = js_sys::Array::from(&entry);
                // File inputs yield Blobs; only text values are sent.
                Some((pair.get(0).as_string()?, pair.get(1).as_string()?))
            })
            .collect()
    }

    fn set_submit_enabled(&self, enabled: bool) {
        if let Ok(Some(button)) = self.form.query_selector(SUBMIT_SELECTOR) {
            let _ = if enabled {
                button.remove_attribute("disabled")
            } else {
                button.set_attribute("disabled", "")
            };
        }
    }

    fn clear_field_errors(&self) {
        for hint in self.select_all(&format!(".{}", FIELD_ERROR_CLASS)) {
            hint.remove();
        }
        for control in self.select_all(&format!(".{}", ERROR_CLASS)) {
            let _ = control.class_list().remove_1(ERROR_CLASS);
        }
    }

    fn mark_field_error(&self, field: &str, message: &str) -> bool {
        let Some(control) = self.control(field) else {
            return false;
        };
        let _ = control.class_list().add_1(ERROR_CLASS);

        let Some(document) = control.owner_document() else {
            return true;
        };
        let Ok(hint) = document.create_element("div") else {
            return true;
        };
        hint.set_class_name(FIELD_ERROR_CLASS);
        hint.set_text_content(Some(message));
        if let Some(hint) = hint.dyn_ref::<HtmlElement>() {
            let style = hint.style();
            let _ = style.set_property("color", "#dc2626");
            let _ = style.set_property("font-size", "12px");
            let _ = style.set_property("margin-top", "4px");
        }
        let _ = control.insert_adjacent_element("afterend", &hint);
        true
    }
}
