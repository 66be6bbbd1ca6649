//! The render pass. Reads engine state, writes primitives; never mutates.

use std::f32::consts::TAU;

use glam::Vec2;
use techline_platform::{Rgba, Surface};

use crate::config::Palette;
use crate::engine::TimelineEngine;
use crate::flow::FlowTrail;
use crate::icon::IconInks;
use crate::node::MilestoneNode;
use crate::particle::Tint;

/// Disc radius of a classic marker.
const MARKER_RADIUS: f32 = 20.0;
/// Edge length of an illustrated icon.
const ICON_SIZE: f32 = 60.0;
const GLOW_RINGS: usize = 5;
const GLOW_RING_SPACING: f32 = 5.0;
const AXIS_MARGIN: f32 = 50.0;
const AXIS_DOT_SPACING: usize = 50;
const FLOW_HEAD_RADIUS: f32 = 3.0;
/// Widths of the overlaid strands joining two lit milestones.
const CONNECTION_WIDTHS: [f32; 5] = [3.0, 3.0, 2.0, 2.0, 1.0];
/// Overlay opacity beyond which the orbiting sparks appear.
const SPARK_THRESHOLD: f32 = 200.0;
const SPARK_ORBIT: f32 = 200.0;
const SPARK_SWELL: f32 = 50.0;

fn tint_color(tint: Tint, palette: &Palette) -> Rgba {
    match tint {
        Tint::Gold => palette.gold,
        Tint::Azure => palette.azure,
    }
}

fn alpha(value: f32) -> u8 {
    value.clamp(0.0, 255.0) as u8
}

/// One closing-overlay spark in polar form around the canvas centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spark {
    pub angle: f32,
    pub radius: f32,
}

impl Spark {
    pub fn position(&self, center: Vec2) -> Vec2 {
        self.toward(center, self.angle)
    }

    /// Point at `angle` on this spark's own circle.
    pub fn toward(&self, center: Vec2, angle: f32) -> Vec2 {
        center + self.radius * Vec2::new(angle.cos(), angle.sin())
    }
}

/// Closing-overlay sparks at `tick`: evenly spaced on a slowly rotating ring
/// whose per-spark radius breathes over time.
pub fn spark_ring(tick: u64, count: usize) -> Vec<Spark> {
    let t = tick as f32;
    (0..count)
        .map(|i| Spark {
            angle: i as f32 / count as f32 * TAU + t * 0.01,
            radius: SPARK_ORBIT + SPARK_SWELL * (t * 0.02 + i as f32).sin(),
        })
        .collect()
}

impl TimelineEngine {
    /// Draws the full frame, back to front.
    pub fn draw(&self, surface: &mut dyn Surface) {
        let palette = &self.config().theme.palette;
        let canvas = self.config().canvas;
        surface.fill_rect(
            Vec2::ZERO,
            Vec2::new(canvas.width, canvas.height),
            palette.background,
        );
        for dot in self.background() {
            surface.fill_circle(dot.pos, dot.radius, palette.azure);
        }
        self.draw_axis(surface);
        self.draw_connections(surface);
        for flow in self.flows() {
            self.draw_flow(surface, flow);
        }
        for node in self.nodes() {
            self.draw_node(surface, node);
        }
        self.draw_title(surface);
        self.draw_ending(surface);
    }

    fn draw_axis(&self, surface: &mut dyn Surface) {
        let config = self.config();
        let palette = &config.theme.palette;
        let y = config.canvas.axis_y();
        surface.line(
            Vec2::new(AXIS_MARGIN, y),
            Vec2::new(config.canvas.width - AXIS_MARGIN, y),
            2.0,
            palette.gold,
        );
        let t = self.current_tick() as f32;
        for x in (0..config.canvas.width as usize).step_by(AXIS_DOT_SPACING) {
            let x = x as f32;
            let wave = y + 5.0 * (t * 0.01 + x * 0.01).sin();
            surface.fill_circle(Vec2::new(x, wave.floor()), 1.0, palette.azure);
        }
    }

    fn draw_connections(&self, surface: &mut dyn Surface) {
        let palette = &self.config().theme.palette;
        for pair in self.nodes().windows(2) {
            if !(pair[0].is_active() && pair[1].is_active()) {
                continue;
            }
            for (strand, width) in CONNECTION_WIDTHS.iter().enumerate() {
                let base = if strand % 2 == 0 {
                    palette.azure
                } else {
                    palette.gold
                };
                let fade = 1.0 - strand as f32 * 0.2;
                surface.line(
                    pair[0].position(),
                    pair[1].position(),
                    *width,
                    base.faded(fade),
                );
            }
        }
    }

    fn draw_flow(&self, surface: &mut dyn Surface, flow: &FlowTrail) {
        if flow.progress <= 0.0 {
            return;
        }
        let config = self.config();
        let color = tint_color(flow.tint, &config.theme.palette);
        surface.fill_circle(flow.head(), FLOW_HEAD_RADIUS, color);
        for sample in flow.trail(config.flows.trail_samples, config.flows.trail_spacing) {
            surface.fill_circle(sample.pos, sample.radius, color);
        }
    }

    fn draw_node(&self, surface: &mut dyn Surface, node: &MilestoneNode) {
        let config = self.config();
        let palette = &config.theme.palette;
        let illustrated = config.variant.draws_icons();
        let center = node.position();
        let base = if illustrated {
            ICON_SIZE / 2.0
        } else {
            MARKER_RADIUS
        };

        if node.is_active() {
            let glow = node.glow_radius(base, config.pulse.amplitude);
            for ring in 0..GLOW_RINGS {
                let color = if ring % 2 == 0 {
                    palette.gold
                } else {
                    palette.azure
                };
                let fade = 1.0 - ring as f32 / GLOW_RINGS as f32;
                let radius = (glow + ring as f32 * GLOW_RING_SPACING).floor();
                surface.stroke_circle(center, radius, 1.0, color.faded(fade));
            }
        }

        let ink = if node.is_active() {
            palette.gold
        } else {
            palette.dark_gold
        };
        match node.milestone().icon.filter(|_| illustrated) {
            Some(icon) => {
                surface.fill_circle(center, base, palette.background.with_alpha(200));
                icon.draw(surface, center, ICON_SIZE, &IconInks::new(ink, palette));
            }
            None => {
                surface.fill_circle(center, base, ink);
                surface.stroke_circle(center, base, 2.0, palette.white);
            }
        }

        for particle in node.particles() {
            let radius = particle.radius();
            if radius > 0.0 {
                surface.fill_circle(particle.pos, radius, tint_color(particle.tint, palette));
            }
        }

        if node.is_active() {
            let typography = &config.theme.typography;
            let reach = if illustrated { ICON_SIZE } else { MARKER_RADIUS };
            let milestone = node.milestone();
            surface.text(
                Vec2::new(center.x, center.y - reach - 20.0),
                milestone.name,
                typography.body,
                palette.white,
            );
            surface.text(
                Vec2::new(center.x, center.y + reach + 20.0),
                milestone.year,
                typography.body,
                palette.gold,
            );
            surface.text(
                Vec2::new(center.x, center.y + reach + 40.0),
                milestone.era,
                typography.small,
                palette.azure,
            );
        }
    }

    fn draw_title(&self, surface: &mut dyn Surface) {
        let theme = &self.config().theme;
        let x = (self.config().canvas.width / 2.0).floor();
        surface.text(
            Vec2::new(x, 50.0),
            &theme.captions.title,
            theme.typography.title,
            theme.palette.gold,
        );
        surface.text(
            Vec2::new(x, 100.0),
            &theme.captions.subtitle,
            theme.typography.subtitle,
            theme.palette.white,
        );
    }

    fn draw_ending(&self, surface: &mut dyn Surface) {
        let opacity = self.overlay_alpha();
        if opacity <= 0.0 {
            return;
        }
        let config = self.config();
        let theme = &config.theme;
        let palette = &theme.palette;
        let center = config.canvas.center();

        surface.fill_rect(
            Vec2::ZERO,
            Vec2::new(config.canvas.width, config.canvas.height),
            Rgba::BLACK.with_alpha(alpha(opacity * 0.8)),
        );

        let text_alpha = alpha(opacity);
        surface.text(
            Vec2::new(center.x, center.y - 50.0),
            &theme.captions.ending_headline,
            theme.typography.title,
            palette.gold.with_alpha(text_alpha),
        );
        for (line, text) in theme.captions.ending_lines.iter().enumerate() {
            surface.text(
                Vec2::new(center.x, center.y + 20.0 + 40.0 * line as f32),
                text,
                theme.typography.body,
                palette.white.with_alpha(text_alpha),
            );
        }

        if opacity <= SPARK_THRESHOLD {
            return;
        }
        let spark_alpha = alpha((opacity - SPARK_THRESHOLD) * 2.0);
        let sparks = spark_ring(self.current_tick(), config.ending.spark_count);
        let count = sparks.len();
        for (i, spark) in sparks.iter().enumerate() {
            let position = spark.position(center);
            surface.fill_circle(position, 3.0, palette.gold.with_alpha(spark_alpha));
            if i % 3 == 0 {
                // chord on this spark's circle, toward where spark i + 3 sits
                surface.line(
                    position,
                    spark.toward(center, sparks[(i + 3) % count].angle),
                    1.0,
                    palette.azure.with_alpha(spark_alpha / 2),
                );
            }
        }
    }
}
