use crate::constants::{
    INFO_BOX_ID, INFO_COLLAPSED_CLASS, INFO_ICON_COLLAPSED, INFO_ICON_EXPANDED,
    INFO_TOGGLE_ICON_ID,
};
use web_sys as web;

#[inline]
pub fn is_collapsed(document: &web::Document) -> bool {
    document
        .get_element_by_id(INFO_BOX_ID)
        .map(|el| el.class_list().contains(INFO_COLLAPSED_CLASS))
        .unwrap_or(false)
}

/// Collapse or expand the interaction box and keep its icon in step.
pub fn toggle(document: &web::Document) {
    let Some(el) = document.get_element_by_id(INFO_BOX_ID) else {
        return;
    };
    _ = el.class_list().toggle(INFO_COLLAPSED_CLASS);
    let icon_text = if is_collapsed(document) {
        INFO_ICON_COLLAPSED
    } else {
        INFO_ICON_EXPANDED
    };
    if let Some(icon) = document.get_element_by_id(INFO_TOGGLE_ICON_ID) {
        icon.set_text_content(Some(icon_text));
    }
}

/// Clicks on the box toggle it; the field's own pointer handler ignores them.
pub fn wire_info_box(document: &web::Document) {
    let doc = document.clone();
    crate::dom::add_click_listener(document, INFO_BOX_ID, move || toggle(&doc));
}
