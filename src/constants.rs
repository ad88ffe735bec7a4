// Page and overlay tuning for the browser host.
// The simulation's own tuning lives in `core::constants`.

// DOM ids
pub const CANVAS_ID: &str = "app-canvas";
pub const INFO_BOX_ID: &str = "interaction-instructions";
pub const INFO_TOGGLE_ICON_ID: &str = "toggle-icon";
pub const INFO_COLLAPSED_CLASS: &str = "collapsed";
pub const INFO_ICON_COLLAPSED: &str = "+";
pub const INFO_ICON_EXPANDED: &str = "\u{2212}"; // minus sign

// Camera capture request
pub const CAPTURE_WIDTH: u32 = 320;
pub const CAPTURE_HEIGHT: u32 = 240;

// Picture-in-picture box (canvas pixels)
pub const PIP_WIDTH: f32 = 230.0; // matches the info box width
pub const PIP_MARGIN: f32 = 20.0;

// Fallback frame when the field is unavailable
pub const FALLBACK_MESSAGE: &str = "Error: shard field not loaded";
pub const FALLBACK_FONT: &str = "24px system-ui, sans-serif";
pub const FALLBACK_TEXT_COLOR: &str = "#ff0000";
pub const FALLBACK_BACKGROUND: &str = "#000000";
