//! DOM-side implementations (wasm only)

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element};

use super::{ModalRequest, hud_text};

fn document() -> Document {
    web_sys::window().expect("no window").document().expect("no document")
}

/// Push the score/lives readout to the text display element
pub fn update_hud(score: u32, lives: u32) {
    if let Some(el) = document().get_element_by_id("scoreDisplay") {
        el.set_text_content(Some(&hud_text(score, lives)));
    }
}

/// Show a modal and deliver the confirmed outcome to `on_result`.
/// The overlay blocks the play surface until a button is pressed.
pub fn show_modal(
    request: &ModalRequest,
    on_result: impl FnOnce(bool) + 'static,
) -> Result<(), JsValue> {
    let document = document();

    let overlay = document.create_element("div")?;
    overlay.set_class_name("modal-overlay");

    let panel = document.create_element("div")?;
    panel.set_class_name("modal");

    let title = document.create_element("h2")?;
    title.set_text_content(Some(&format!("{} {}", request.icon.glyph(), request.title)));
    panel.append_child(&title)?;

    let body = document.create_element("p")?;
    body.set_text_content(Some(&request.body));
    panel.append_child(&body)?;

    let buttons = document.create_element("div")?;
    buttons.set_class_name("modal-buttons");

    // Both buttons share the continuation; whichever fires first wins
    let continuation: Rc<RefCell<Option<Box<dyn FnOnce(bool)>>>> =
        Rc::new(RefCell::new(Some(Box::new(on_result))));

    add_modal_button(
        &document,
        &buttons,
        &overlay,
        &request.confirm_label,
        continuation.clone(),
        true,
    )?;
    if let Some(cancel_label) = &request.cancel_label {
        add_modal_button(
            &document,
            &buttons,
            &overlay,
            cancel_label,
            continuation,
            false,
        )?;
    }

    panel.append_child(&buttons)?;
    overlay.append_child(&panel)?;
    document
        .body()
        .expect("no body")
        .append_child(&overlay)?;
    Ok(())
}

fn add_modal_button(
    document: &Document,
    buttons: &Element,
    overlay: &Element,
    label: &str,
    continuation: Rc<RefCell<Option<Box<dyn FnOnce(bool)>>>>,
    confirmed: bool,
) -> Result<(), JsValue> {
    let button = document.create_element("button")?;
    button.set_text_content(Some(label));

    let overlay = overlay.clone();
    let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
        overlay.remove();
        if let Some(callback) = continuation.borrow_mut().take() {
            callback(confirmed);
        }
    });
    button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();

    buttons.append_child(&button)?;
    Ok(())
}
