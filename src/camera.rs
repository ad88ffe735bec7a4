use crate::constants::{CAPTURE_HEIGHT, CAPTURE_WIDTH};
use anyhow::anyhow;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

// HTMLMediaElement.HAVE_CURRENT_DATA
const HAVE_CURRENT_DATA: u16 = 2;

/// Live webcam stream playing into a detached `<video>` element.
pub struct CameraFeed {
    video: web::HtmlVideoElement,
}

impl CameraFeed {
    /// Ask for the user's camera and start playback. Fails when the browser
    /// has no media devices or the user declines.
    pub async fn open(document: &web::Document) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow!("no window"))?;
        let devices = window
            .navigator()
            .media_devices()
            .map_err(|e| anyhow!("media devices unavailable: {:?}", e))?;

        let video_constraints = js_sys::Object::new();
        js_sys::Reflect::set(
            &video_constraints,
            &JsValue::from_str("width"),
            &JsValue::from(CAPTURE_WIDTH),
        )
        .map_err(|e| anyhow!("{:?}", e))?;
        js_sys::Reflect::set(
            &video_constraints,
            &JsValue::from_str("height"),
            &JsValue::from(CAPTURE_HEIGHT),
        )
        .map_err(|e| anyhow!("{:?}", e))?;
        let constraints = web::MediaStreamConstraints::new();
        constraints.set_video(&video_constraints);

        let promise = devices
            .get_user_media_with_constraints(&constraints)
            .map_err(|e| anyhow!("getUserMedia: {:?}", e))?;
        let stream: web::MediaStream = JsFuture::from(promise)
            .await
            .map_err(|e| anyhow!("camera denied: {:?}", e))?
            .dyn_into()
            .map_err(|e| anyhow!("not a MediaStream: {:?}", e))?;

        let video: web::HtmlVideoElement = document
            .create_element("video")
            .map_err(|e| anyhow!("{:?}", e))?
            .dyn_into()
            .map_err(|e| anyhow!("{:?}", e))?;
        video.set_muted(true);
        video.set_autoplay(true);
        _ = video.set_attribute("playsinline", "");
        video.set_src_object(Some(&stream));
        if let Ok(p) = video.play() {
            _ = JsFuture::from(p).await;
        }
        Ok(Self { video })
    }

    /// True once the stream has delivered a frame with known dimensions.
    pub fn has_frame(&self) -> bool {
        self.video.ready_state() >= HAVE_CURRENT_DATA
            && self.video.video_width() > 0
            && self.video.video_height() > 0
    }

    pub fn native_size(&self) -> (u32, u32) {
        (self.video.video_width(), self.video.video_height())
    }

    pub fn video(&self) -> &web::HtmlVideoElement {
        &self.video
    }
}
