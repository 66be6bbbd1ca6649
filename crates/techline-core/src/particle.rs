use glam::Vec2;
use rand::Rng;

use crate::config::{BackgroundConfig, Canvas, ParticleConfig};

/// Two-tone colour choice shared by particles and flow trails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    Gold,
    Azure,
}

impl Tint {
    pub fn random(rng: &mut impl Rng) -> Self {
        if rng.gen_bool(0.5) {
            Tint::Gold
        } else {
            Tint::Azure
        }
    }
}

/// A burst particle: drifts outward, slows down, and shrinks until its
/// lifetime runs out.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub life: u32,
    pub initial_life: u32,
    pub drag: f32,
    pub tint: Tint,
}

impl Particle {
    pub fn spawn(origin: Vec2, config: &ParticleConfig, rng: &mut impl Rng) -> Self {
        let reach = config.max_speed;
        let vel = Vec2::new(rng.gen_range(-reach..=reach), rng.gen_range(-reach..=reach));
        Self {
            pos: origin,
            vel,
            life: config.lifetime,
            initial_life: config.lifetime,
            drag: config.drag,
            tint: Tint::random(rng),
        }
    }

    pub fn update(&mut self) {
        self.pos += self.vel;
        self.life = self.life.saturating_sub(1);
        self.vel *= self.drag;
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0
    }

    /// Render radius, shrinking linearly from 3px to nothing over the lifetime.
    pub fn radius(&self) -> f32 {
        if self.initial_life == 0 {
            return 0.0;
        }
        (3.0 * self.life as f32 / self.initial_life as f32).floor()
    }
}

/// Decorative dot drifting rightward across the whole canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundParticle {
    pub pos: Vec2,
    pub speed: f32,
    pub radius: f32,
}

impl BackgroundParticle {
    pub fn scatter(canvas: &Canvas, config: &BackgroundConfig, rng: &mut impl Rng) -> Self {
        Self {
            pos: Vec2::new(
                rng.gen_range(0.0..=canvas.width).floor(),
                rng.gen_range(0.0..=canvas.height).floor(),
            ),
            speed: rng.gen_range(config.min_speed..=config.max_speed),
            radius: rng.gen_range(config.min_radius..=config.max_radius) as f32,
        }
    }

    /// Moves right; past the right edge it re-enters at x = 0 on a new row.
    pub fn update(&mut self, canvas: &Canvas, rng: &mut impl Rng) {
        self.pos.x += self.speed;
        if self.pos.x > canvas.width {
            self.pos.x = 0.0;
            self.pos.y = rng.gen_range(0.0..=canvas.height).floor();
        }
    }
}
