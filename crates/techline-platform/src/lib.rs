//! Platform abstraction traits so `techline-core` stays renderer-agnostic.

use glam::Vec2;
use serde::{Deserialize, Serialize};

mod recording;
pub use recording::{DrawCommand, RecordingSurface};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Straight (non-premultiplied) 8-bit RGBA colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque")]
    pub a: u8,
}

const fn opaque() -> u8 {
    255
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Scales the current alpha by `factor`, clamped to `[0, 1]`.
    pub fn faded(self, factor: f32) -> Self {
        let a = (self.a as f32 * factor.clamp(0.0, 1.0)).round() as u8;
        self.with_alpha(a)
    }

    pub fn is_transparent(self) -> bool {
        self.a == 0
    }
}

/// Write-only 2D drawing target. Coordinates are logical canvas pixels,
/// y pointing down; the implementor maps them to its device space.
pub trait Surface {
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Rgba);
    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);
    fn fill_polygon(&mut self, points: &[Vec2], color: Rgba);
    fn stroke_polygon(&mut self, points: &[Vec2], width: f32, color: Rgba);
    /// Draws `text` centred on `anchor` at the given pixel size.
    fn text(&mut self, anchor: Vec2, text: &str, size: f32, color: Rgba);

    /// Axis-aligned rectangle helpers expressed as polygons.
    fn fill_rect(&mut self, min: Vec2, size: Vec2, color: Rgba) {
        self.fill_polygon(&rect_corners(min, size), color);
    }

    fn stroke_rect(&mut self, min: Vec2, size: Vec2, width: f32, color: Rgba) {
        self.stroke_polygon(&rect_corners(min, size), width, color);
    }
}

fn rect_corners(min: Vec2, size: Vec2) -> [Vec2; 4] {
    [
        min,
        Vec2::new(min.x + size.x, min.y),
        min + size,
        Vec2::new(min.x, min.y + size.y),
    ]
}

/// Discrete signals the host event loop delivers between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlSignal {
    Terminate,
    Restart,
}
