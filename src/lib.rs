#![cfg(target_arch = "wasm32")]
use crate::core::{FieldConfig, FieldController};
use crate::frame::{SharedCamera, SharedField, SharedSurface};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod camera;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod pip;
mod render;

fn wire_canvas_resize(
    canvas: &web::HtmlCanvasElement,
    field: Option<SharedField>,
    surface: SharedSurface,
) {
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        let size = dom::sync_canvas_to_window(&canvas_resize);
        if let Some(field) = &field {
            if let Err(e) = field
                .borrow_mut()
                .on_resize(size, &mut *surface.borrow_mut())
            {
                log::error!("resize rejected: {}", e);
            }
        }
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn open_camera(document: web::Document, camera: SharedCamera) {
    spawn_local(async move {
        match camera::CameraFeed::open(&document).await {
            Ok(feed) => {
                log::info!("camera stream started");
                *camera.borrow_mut() = Some(feed);
            }
            Err(e) => log::warn!("camera unavailable: {:?}", e),
        }
    });
}

fn build_field(viewport: glam::Vec2) -> Option<SharedField> {
    let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
    match FieldController::new(viewport, FieldConfig::with_seed(seed)) {
        Ok(field) => {
            log::info!(
                "field ready: {} shards, seed {}",
                field.shards().len(),
                seed
            );
            Some(Rc::new(RefCell::new(field)))
        }
        Err(e) => {
            log::error!("field init error: {}", e);
            None
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("shard-field starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let viewport = dom::sync_canvas_to_window(&canvas);
    let surface: SharedSurface = Rc::new(RefCell::new(render::CanvasSurface::new(canvas.clone())?));
    let field = build_field(viewport);
    let epoch = Instant::now();

    wire_canvas_resize(&canvas, field.clone(), surface.clone());
    overlay::wire_info_box(&document);

    let mouse_state = Rc::new(RefCell::new(input::MouseState::default()));
    if let Some(field) = &field {
        events::wire_input_handlers(events::InputWiring {
            canvas: canvas.clone(),
            field: field.clone(),
            surface: surface.clone(),
            mouse_state: mouse_state.clone(),
            epoch,
        });
        events::wire_global_keydown(field.clone(), surface.clone());
    }

    let camera: SharedCamera = Rc::new(RefCell::new(None));
    open_camera(document.clone(), camera.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        field,
        surface,
        mouse: mouse_state,
        camera,
        epoch,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
