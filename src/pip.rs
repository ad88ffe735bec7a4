use crate::constants::{PIP_MARGIN, PIP_WIDTH};

/// Screen rectangle in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PipRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Bottom-left picture-in-picture box for a video of the given native size.
///
/// Fixed width, height from the video's aspect ratio. `None` until the video
/// reports real dimensions.
pub fn pip_rect(canvas_height: f32, video_width: u32, video_height: u32) -> Option<PipRect> {
    if video_width == 0 || video_height == 0 {
        return None;
    }
    let height = video_height as f32 / video_width as f32 * PIP_WIDTH;
    Some(PipRect {
        x: PIP_MARGIN,
        y: canvas_height - height - PIP_MARGIN,
        width: PIP_WIDTH,
        height,
    })
}
