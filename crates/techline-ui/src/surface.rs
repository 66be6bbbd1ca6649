use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Shape, Stroke};
use glam::Vec2;
use techline_core::config::Canvas;
use techline_platform::{Rgba, Surface};

/// Uniform scale + offset that letterboxes the logical canvas into a screen rect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasTransform {
    origin: Pos2,
    scale: f32,
}

impl CanvasTransform {
    pub fn fit(canvas: &Canvas, rect: Rect) -> Self {
        let scale = (rect.width() / canvas.width)
            .min(rect.height() / canvas.height)
            .max(f32::EPSILON);
        let used = egui::vec2(canvas.width * scale, canvas.height * scale);
        Self {
            origin: rect.center() - used / 2.0,
            scale,
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn to_screen(&self, point: Vec2) -> Pos2 {
        Pos2::new(
            self.origin.x + point.x * self.scale,
            self.origin.y + point.y * self.scale,
        )
    }

    fn length(&self, value: f32) -> f32 {
        value * self.scale
    }
}

fn color(rgba: Rgba) -> Color32 {
    Color32::from_rgba_unmultiplied(rgba.r, rgba.g, rgba.b, rgba.a)
}

/// [`Surface`] backed by an egui painter.
pub struct EguiSurface<'a> {
    painter: &'a Painter,
    transform: CanvasTransform,
}

impl<'a> EguiSurface<'a> {
    pub fn new(painter: &'a Painter, transform: CanvasTransform) -> Self {
        Self { painter, transform }
    }

    fn points(&self, points: &[Vec2]) -> Vec<Pos2> {
        points.iter().map(|p| self.transform.to_screen(*p)).collect()
    }

    fn stroke(&self, width: f32, rgba: Rgba) -> Stroke {
        Stroke::new(self.transform.length(width), color(rgba))
    }
}

impl Surface for EguiSurface<'_> {
    fn fill_circle(&mut self, center: Vec2, radius: f32, rgba: Rgba) {
        if rgba.is_transparent() {
            return;
        }
        self.painter.circle_filled(
            self.transform.to_screen(center),
            self.transform.length(radius),
            color(rgba),
        );
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, rgba: Rgba) {
        if rgba.is_transparent() {
            return;
        }
        self.painter.circle_stroke(
            self.transform.to_screen(center),
            self.transform.length(radius),
            self.stroke(width, rgba),
        );
    }

    fn line(&mut self, from: Vec2, to: Vec2, width: f32, rgba: Rgba) {
        if rgba.is_transparent() {
            return;
        }
        self.painter.line_segment(
            [self.transform.to_screen(from), self.transform.to_screen(to)],
            self.stroke(width, rgba),
        );
    }

    fn fill_polygon(&mut self, points: &[Vec2], rgba: Rgba) {
        if rgba.is_transparent() || points.len() < 3 {
            return;
        }
        self.painter.add(Shape::convex_polygon(
            self.points(points),
            color(rgba),
            Stroke::NONE,
        ));
    }

    fn stroke_polygon(&mut self, points: &[Vec2], width: f32, rgba: Rgba) {
        if rgba.is_transparent() || points.len() < 2 {
            return;
        }
        self.painter
            .add(Shape::closed_line(self.points(points), self.stroke(width, rgba)));
    }

    fn text(&mut self, anchor: Vec2, text: &str, size: f32, rgba: Rgba) {
        if rgba.is_transparent() {
            return;
        }
        self.painter.text(
            self.transform.to_screen(anchor),
            Align2::CENTER_CENTER,
            text,
            FontId::proportional(self.transform.length(size)),
            color(rgba),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_letterboxes_wide_rect() {
        let canvas = Canvas {
            width: 1280.0,
            height: 720.0,
        };
        let rect = Rect::from_min_size(Pos2::ZERO, egui::vec2(2560.0, 720.0));
        let transform = CanvasTransform::fit(&canvas, rect);
        assert_eq!(transform.scale(), 1.0);
        assert_eq!(transform.to_screen(Vec2::ZERO), Pos2::new(640.0, 0.0));
        assert_eq!(
            transform.to_screen(Vec2::new(1280.0, 720.0)),
            Pos2::new(1920.0, 720.0)
        );
    }

    #[test]
    fn fit_scales_down_small_rect() {
        let canvas = Canvas::default();
        let rect = Rect::from_min_size(Pos2::new(10.0, 10.0), egui::vec2(640.0, 360.0));
        let transform = CanvasTransform::fit(&canvas, rect);
        assert_eq!(transform.scale(), 0.5);
        assert_eq!(
            transform.to_screen(Vec2::new(640.0, 360.0)),
            Pos2::new(330.0, 190.0)
        );
    }

    #[test]
    fn colors_are_unmultiplied() {
        let c = color(Rgba::rgb(255, 215, 0));
        assert_eq!(c, Color32::from_rgb(255, 215, 0));
    }
}
