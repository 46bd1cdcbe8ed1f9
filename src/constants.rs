// Canvas rendering and DOM constants for the web frontend

// DOM element ids
pub const CANVAS_ID: &str = "app-canvas";
pub const LOCK_HINT_ID: &str = "lock-hint";

// Colors (CSS strings)
pub const BACKGROUND: &str = "#05050a";
pub const EDGE_STROKE: &str = "rgba(200, 200, 220, 0.55)";

// Line width of cube edges in device pixels
pub const EDGE_WIDTH_PX: f64 = 1.5;

// On-screen radius of a scale-1.0 marker seen from the default camera distance
pub const MARKER_RADIUS_PX: f32 = 48.0;
