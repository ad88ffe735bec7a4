use crate::core::Surface;
use crate::frame::{SharedField, SharedSurface};
use crate::input::{key_action, KeyAction};
use crate::overlay;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    field: &SharedField,
    surface: &SharedSurface,
) {
    let Some(action) = key_action(&ev.key()) else {
        return;
    };
    match action {
        KeyAction::Rebuild => {
            field.borrow_mut().reinitialize();
            log::info!("[keys] rebuilt shard pool");
        }
        KeyAction::SwitchPalette => {
            let bg = {
                let mut f = field.borrow_mut();
                f.toggle_palette();
                f.background()
            };
            surface.borrow_mut().clear(bg);
        }
        KeyAction::ToggleInfo => {
            if let Some(doc) = crate::dom::window_document() {
                overlay::toggle(&doc);
            }
        }
    }
}

pub fn wire_global_keydown(field: SharedField, surface: SharedSurface) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &field, &surface);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
