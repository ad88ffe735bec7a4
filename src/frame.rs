use crate::camera::CameraFeed;
use crate::core::FieldController;
use crate::input;
use crate::pip;
use crate::render::CanvasSurface;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedField = Rc<RefCell<FieldController>>;
pub type SharedSurface = Rc<RefCell<CanvasSurface>>;
pub type SharedCamera = Rc<RefCell<Option<CameraFeed>>>;

/// Milliseconds since `epoch`, the burst clock handed to the field.
#[inline]
pub fn now_ms(epoch: Instant) -> f64 {
    epoch.elapsed().as_secs_f64() * 1000.0
}

pub struct FrameContext {
    pub field: Option<SharedField>,
    pub surface: SharedSurface,
    pub mouse: Rc<RefCell<input::MouseState>>,
    pub camera: SharedCamera,
    pub epoch: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = now_ms(self.epoch);
        {
            let mut surface = self.surface.borrow_mut();
            match &self.field {
                Some(field) => {
                    let pointer = self.mouse.borrow().pos();
                    field.borrow_mut().tick(pointer, now, &mut *surface);
                }
                None => surface.draw_fallback(),
            }
        }
        self.draw_camera();
    }

    fn draw_camera(&self) {
        let camera = self.camera.borrow();
        let Some(feed) = camera.as_ref().filter(|c| c.has_frame()) else {
            return;
        };
        let surface = self.surface.borrow();
        let (w, h) = feed.native_size();
        if let Some(rect) = pip::pip_rect(surface.size().y, w, h) {
            surface.draw_video(feed.video(), rect);
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
