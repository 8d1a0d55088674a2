/// Schematic constants.
/// Lengths are SVG user units (px) unless noted otherwise.
pub const MM2PX: f64 = 3.5;
/// Largest bushing radius that still fits the viewport.
pub const MAX_BUSH_R: f64 = 80.0;
/// Smallest bit radius drawn for a nonzero bit.
pub const MIN_BIT_R: f64 = 4.0;
/// Shared center of both circles.
pub const CENTER: (f64, f64) = (120.0, 100.0);
/// Schematic viewport size.
pub const VIEW_W: f64 = 240.0;
pub const VIEW_H: f64 = 200.0;
/// Vertical position of the dimension line.
pub const DIM_Y: f64 = 100.0;
/// Half length of the dimension tick marks.
pub const DIM_TICK_HALF: f64 = 6.0;

pub const ACCENT_COLOR: &str = "var(--accent)";
pub const ERROR_COLOR: &str = "#ef4444";
pub const UNIT_SUFFIX: &str = " mm";
