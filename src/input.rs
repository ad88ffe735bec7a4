use glam::Vec2;
use web_sys as web;

/// Last known pointer position in canvas pixels.
#[derive(Default, Clone, Copy)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
}

impl MouseState {
    #[inline]
    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Keyboard shortcuts understood by the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Rebuild,
    SwitchPalette,
    ToggleInfo,
}

#[inline]
pub fn key_action(key: &str) -> Option<KeyAction> {
    match key {
        "r" | "R" => Some(KeyAction::Rebuild),
        "c" | "C" => Some(KeyAction::SwitchPalette),
        "i" | "I" => Some(KeyAction::ToggleInfo),
        _ => None,
    }
}

/// Map a CSS-pixel offset inside a rect of `css_size` onto a backing store of
/// `backing_size`.
#[inline]
pub fn css_to_backing(offset: Vec2, css_size: Vec2, backing_size: Vec2) -> Vec2 {
    if css_size.x <= 0.0 || css_size.y <= 0.0 {
        return offset;
    }
    offset / css_size * backing_size
}

#[inline]
pub fn pointer_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let offset = Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    );
    css_to_backing(
        offset,
        Vec2::new(rect.width() as f32, rect.height() as f32),
        Vec2::new(canvas.width() as f32, canvas.height() as f32),
    )
}
