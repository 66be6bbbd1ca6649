use glam::Vec2;

use crate::{Rgba, Surface};

/// One primitive issued to a [`Surface`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillCircle { center: Vec2, radius: f32, color: Rgba },
    StrokeCircle { center: Vec2, radius: f32, width: f32, color: Rgba },
    Line { from: Vec2, to: Vec2, width: f32, color: Rgba },
    FillPolygon { points: Vec<Vec2>, color: Rgba },
    StrokePolygon { points: Vec<Vec2>, width: f32, color: Rgba },
    Text { anchor: Vec2, text: String, size: f32, color: Rgba },
}

/// In-memory surface that keeps every command in issue order.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Every text string drawn so far, in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().any(|text| text == needle)
    }
}

impl Surface for RecordingSurface {
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.commands.push(DrawCommand::FillCircle { center, radius, color });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Rgba) {
        self.commands.push(DrawCommand::StrokeCircle { center, radius, width, color });
    }

    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.commands.push(DrawCommand::Line { from, to, width, color });
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Rgba) {
        self.commands.push(DrawCommand::FillPolygon {
            points: points.to_vec(),
            color,
        });
    }

    fn stroke_polygon(&mut self, points: &[Vec2], width: f32, color: Rgba) {
        self.commands.push(DrawCommand::StrokePolygon {
            points: points.to_vec(),
            width,
            color,
        });
    }

    fn text(&mut self, anchor: Vec2, text: &str, size: f32, color: Rgba) {
        self.commands.push(DrawCommand::Text {
            anchor,
            text: text.to_owned(),
            size,
            color,
        });
    }
}
