//! Hand-drawn milestone icons.
//!
//! Each [`Icon`] maps to exactly one drawing routine through
//! [`Icon::painter`], so an icon that exists is always drawable.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use techline_platform::{Rgba, Surface};

use crate::config::Palette;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Paper,
    Printing,
    Gunpowder,
    Compass,
    Steam,
    Engine,
    Computer,
    NeuralNetwork,
}

/// Colours an icon routine may use besides its main stroke colour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconInks {
    pub stroke: Rgba,
    pub needle: Rgba,
    pub code: Rgba,
    pub accent: Rgba,
}

impl IconInks {
    pub fn new(stroke: Rgba, palette: &Palette) -> Self {
        Self {
            stroke,
            needle: palette.red,
            code: palette.green,
            accent: palette.azure,
        }
    }
}

pub type IconPainter = fn(&mut dyn Surface, Vec2, f32, &IconInks);

impl Icon {
    pub const ALL: [Icon; 8] = [
        Icon::Paper,
        Icon::Printing,
        Icon::Gunpowder,
        Icon::Compass,
        Icon::Steam,
        Icon::Engine,
        Icon::Computer,
        Icon::NeuralNetwork,
    ];

    pub fn painter(self) -> IconPainter {
        match self {
            Icon::Paper => draw_paper,
            Icon::Printing => draw_printing,
            Icon::Gunpowder => draw_gunpowder,
            Icon::Compass => draw_compass,
            Icon::Steam => draw_steam,
            Icon::Engine => draw_engine,
            Icon::Computer => draw_computer,
            Icon::NeuralNetwork => draw_neural_network,
        }
    }

    /// Draws the icon centred on `center`, `size` pixels across.
    pub fn draw(self, surface: &mut dyn Surface, center: Vec2, size: f32, inks: &IconInks) {
        (self.painter())(surface, center, size, inks);
    }
}

/// `size / divisor` truncated to whole pixels.
fn part(size: f32, divisor: f32) -> f32 {
    (size / divisor).floor()
}

fn draw_paper(surface: &mut dyn Surface, c: Vec2, size: f32, inks: &IconInks) {
    let half = part(size, 2.0);
    surface.stroke_rect(
        Vec2::new(c.x - half, c.y - half),
        Vec2::new(size, size * 1.4),
        2.0,
        inks.stroke,
    );
    let corner = part(size, 4.0);
    let fold = [
        Vec2::new(c.x + half, c.y - half),
        Vec2::new(c.x + half - corner, c.y - half),
        Vec2::new(c.x + half, c.y - half + corner),
    ];
    surface.stroke_polygon(&fold, 2.0, inks.stroke);
    let third = part(size, 3.0);
    for i in 0..3 {
        let y = c.y - corner + i as f32 * corner;
        surface.line(
            Vec2::new(c.x - third, y),
            Vec2::new(c.x + third, y),
            1.0,
            inks.stroke,
        );
    }
}

fn draw_printing(surface: &mut dyn Surface, c: Vec2, size: f32, inks: &IconInks) {
    let half = part(size, 2.0);
    surface.stroke_rect(
        Vec2::new(c.x - half, c.y - half),
        Vec2::splat(size),
        2.0,
        inks.stroke,
    );
    // 2x2 block of movable type
    let inner = part(size, 3.0);
    for i in 0..2 {
        for j in 0..2 {
            let min = Vec2::new(
                c.x - inner + i as f32 * inner,
                c.y - inner + j as f32 * inner,
            );
            surface.fill_rect(min, Vec2::splat(inner - 5.0), inks.stroke);
        }
    }
}

fn draw_gunpowder(surface: &mut dyn Surface, c: Vec2, size: f32, inks: &IconInks) {
    let inner = part(size, 3.0);
    let outer = part(size, 1.5);
    for step in 0..12 {
        let degrees = step * 30;
        let radius = if degrees % 60 == 0 { outer } else { inner };
        let angle = (degrees as f32).to_radians();
        let tip = c + radius * Vec2::new(angle.cos(), angle.sin());
        surface.line(c, tip, 2.0, inks.stroke);
    }
    surface.fill_circle(c, part(size, 6.0), inks.stroke);
}

fn draw_compass(surface: &mut dyn Surface, c: Vec2, size: f32, inks: &IconInks) {
    let half = part(size, 2.0);
    surface.stroke_circle(c, half, 2.0, inks.stroke);
    let needle = half - 5.0;
    let waist = part(size, 8.0);
    let north = [
        Vec2::new(c.x, c.y - needle),
        Vec2::new(c.x - waist, c.y),
        Vec2::new(c.x, c.y - waist),
        Vec2::new(c.x + waist, c.y),
    ];
    surface.fill_polygon(&north, inks.needle);
    let south = [
        Vec2::new(c.x, c.y + needle),
        Vec2::new(c.x - waist, c.y),
        Vec2::new(c.x, c.y + waist),
        Vec2::new(c.x + waist, c.y),
    ];
    surface.fill_polygon(&south, inks.stroke);
    surface.fill_circle(c, 3.0, inks.stroke);
}

fn draw_steam(surface: &mut dyn Surface, c: Vec2, size: f32, inks: &IconInks) {
    let half = part(size, 2.0);
    let quarter = part(size, 4.0);
    let sixth = part(size, 6.0);
    // boiler and chimney
    surface.stroke_rect(
        Vec2::new(c.x - part(size, 3.0), c.y - quarter),
        Vec2::new(part(size, 1.5), half),
        2.0,
        inks.stroke,
    );
    surface.stroke_rect(
        Vec2::new(c.x - sixth, c.y - half),
        Vec2::new(sixth, quarter),
        2.0,
        inks.stroke,
    );
    for i in 0..3 {
        let puff = Vec2::new(
            c.x - part(size, 12.0) + (i % 2) as f32 * 5.0,
            c.y - half - i as f32 * 10.0,
        );
        surface.stroke_circle(puff, 5.0, 1.0, inks.accent);
    }
    let wheel_y = c.y + quarter;
    surface.stroke_circle(Vec2::new(c.x - quarter, wheel_y), sixth, 2.0, inks.stroke);
    surface.stroke_circle(Vec2::new(c.x + quarter, wheel_y), sixth, 2.0, inks.stroke);
}

fn draw_engine(surface: &mut dyn Surface, c: Vec2, size: f32, inks: &IconInks) {
    let quarter = part(size, 4.0);
    surface.stroke_rect(
        Vec2::new(c.x - quarter, c.y - part(size, 2.0)),
        Vec2::new(part(size, 2.0), size),
        2.0,
        inks.stroke,
    );
    let piston_y = c.y - quarter;
    surface.fill_rect(
        Vec2::new(c.x - part(size, 5.0), piston_y),
        Vec2::new(part(size, 2.5), quarter),
        inks.stroke,
    );
    let crank = Vec2::new(c.x, c.y + part(size, 3.0));
    surface.line(
        Vec2::new(c.x, piston_y + part(size, 8.0)),
        crank,
        3.0,
        inks.stroke,
    );
    surface.stroke_circle(crank, part(size, 8.0), 2.0, inks.stroke);
}

fn draw_computer(surface: &mut dyn Surface, c: Vec2, size: f32, inks: &IconInks) {
    let half = part(size, 2.0);
    let third = part(size, 3.0);
    let sixth = part(size, 6.0);
    surface.stroke_rect(
        Vec2::new(c.x - half, c.y - half),
        Vec2::new(size, part(size, 1.5)),
        2.0,
        inks.stroke,
    );
    surface.stroke_rect(
        Vec2::new(c.x - half + 5.0, c.y - half + 5.0),
        Vec2::new(size - 10.0, half),
        1.0,
        inks.stroke,
    );
    // stand
    surface.fill_rect(
        Vec2::new(c.x - sixth, c.y + sixth),
        Vec2::new(third, part(size, 8.0)),
        inks.stroke,
    );
    surface.fill_rect(
        Vec2::new(c.x - part(size, 4.0), c.y + part(size, 4.0)),
        Vec2::new(half, part(size, 10.0)),
        inks.stroke,
    );
    for i in 0..3 {
        let y = c.y - third + i as f32 * 10.0;
        surface.line(
            Vec2::new(c.x - third, y),
            Vec2::new(c.x - sixth, y),
            1.0,
            inks.code,
        );
        surface.line(
            Vec2::new(c.x - part(size, 8.0), y),
            Vec2::new(c.x + sixth, y),
            1.0,
            inks.accent,
        );
    }
}

fn draw_neural_network(surface: &mut dyn Surface, c: Vec2, size: f32, inks: &IconInks) {
    const LAYERS: [usize; 3] = [3, 4, 3];
    let third = part(size, 3.0);
    let layers: Vec<Vec<Vec2>> = LAYERS
        .iter()
        .enumerate()
        .map(|(layer, &count)| {
            let x = c.x - third + layer as f32 * third;
            (0..count)
                .map(|n| {
                    let y = c.y - third + n as f32 * (size * 0.7) / (count - 1) as f32;
                    Vec2::new(x, y)
                })
                .collect()
        })
        .collect();
    for node in layers.iter().flatten() {
        surface.fill_circle(*node, 4.0, inks.stroke);
    }
    for pair in layers.windows(2) {
        for from in &pair[0] {
            for to in &pair[1] {
                surface.line(*from, *to, 1.0, inks.accent);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use techline_platform::{DrawCommand, RecordingSurface};

    use super::*;

    fn inks() -> IconInks {
        IconInks::new(Rgba::rgb(255, 215, 0), &Palette::default())
    }

    #[test]
    fn every_icon_draws_something() {
        for icon in Icon::ALL {
            let mut surface = RecordingSurface::new();
            icon.draw(&mut surface, Vec2::new(100.0, 100.0), 60.0, &inks());
            assert!(!surface.commands().is_empty(), "{icon:?} drew nothing");
        }
    }

    #[test]
    fn compass_needle_uses_needle_ink() {
        let mut surface = RecordingSurface::new();
        Icon::Compass.draw(&mut surface, Vec2::ZERO, 60.0, &inks());
        let red = Palette::default().red;
        assert!(surface
            .commands()
            .iter()
            .any(|c| matches!(c, DrawCommand::FillPolygon { color, .. } if *color == red)));
    }

    #[test]
    fn gunpowder_alternates_long_and_short_spokes() {
        let mut surface = RecordingSurface::new();
        Icon::Gunpowder.draw(&mut surface, Vec2::ZERO, 60.0, &inks());
        let lengths: Vec<f32> = surface
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Line { from, to, .. } => Some(from.distance(*to)),
                _ => None,
            })
            .collect();
        assert_eq!(lengths.len(), 12);
        assert!((lengths[0] - 40.0).abs() < 1e-3);
        assert!((lengths[1] - 20.0).abs() < 1e-3);
    }

    #[test]
    fn neural_network_links_adjacent_layers() {
        let mut surface = RecordingSurface::new();
        Icon::NeuralNetwork.draw(&mut surface, Vec2::ZERO, 60.0, &inks());
        let nodes = surface
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillCircle { .. }))
            .count();
        let links = surface
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count();
        assert_eq!(nodes, 10);
        assert_eq!(links, 3 * 4 + 4 * 3);
    }

    #[test]
    fn icon_names_deserialize_in_snake_case() {
        #[derive(Deserialize)]
        struct Holder {
            icon: Icon,
        }
        let holder: Holder = toml::from_str("icon = \"neural_network\"").unwrap();
        assert_eq!(holder.icon, Icon::NeuralNetwork);
    }
}
