use crate::constants::{FALLBACK_BACKGROUND, FALLBACK_FONT, FALLBACK_MESSAGE, FALLBACK_TEXT_COLOR};
use crate::core::{Hsba, Surface};
use crate::pip::PipRect;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// 2D canvas implementation of the field's drawing surface.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2D context not available"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { canvas, ctx })
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }

    fn fill_all(&self, css: &str) {
        _ = self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        self.ctx.set_fill_style_str(css);
        let size = self.size();
        self.ctx.fill_rect(0.0, 0.0, size.x as f64, size.y as f64);
    }

    /// Visible stand-in frame for when the field could not be created.
    pub fn draw_fallback(&self) {
        self.fill_all(FALLBACK_BACKGROUND);
        let size = self.size();
        self.ctx.set_fill_style_str(FALLBACK_TEXT_COLOR);
        self.ctx.set_font(FALLBACK_FONT);
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        _ = self.ctx.fill_text(
            FALLBACK_MESSAGE,
            size.x as f64 * 0.5,
            size.y as f64 * 0.5,
        );
    }

    /// Blit the current video frame into `rect`, in untransformed canvas space.
    pub fn draw_video(&self, video: &web::HtmlVideoElement, rect: PipRect) {
        _ = self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        if let Err(e) = self.ctx.draw_image_with_html_video_element_and_dw_and_dh(
            video,
            rect.x as f64,
            rect.y as f64,
            rect.width as f64,
            rect.height as f64,
        ) {
            log::warn!("camera blit failed: {:?}", e);
        }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, color: Hsba) {
        self.fill_all(&color.to_css());
    }

    fn fill_polygon(&mut self, center: Vec2, rotation: f32, vertices: &[Vec2], color: Hsba) {
        let Some((first, rest)) = vertices.split_first() else {
            return;
        };
        let ctx = &self.ctx;
        ctx.save();
        _ = ctx.translate(center.x as f64, center.y as f64);
        _ = ctx.rotate(rotation as f64);
        ctx.set_fill_style_str(&color.to_css());
        ctx.begin_path();
        ctx.move_to(first.x as f64, first.y as f64);
        for v in rest {
            ctx.line_to(v.x as f64, v.y as f64);
        }
        ctx.close_path();
        ctx.fill();
        ctx.restore();
    }
}
