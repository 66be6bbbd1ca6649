use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use crate::config::ParticleConfig;
use crate::milestone::Milestone;
use crate::particle::Particle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeState {
    #[default]
    Dormant,
    Active,
}

/// A milestone on the canvas plus its glow and burst particles.
#[derive(Debug, Clone)]
pub struct MilestoneNode {
    milestone: Milestone,
    position: Vec2,
    state: NodeState,
    pulse_phase: f32,
    particles: Vec<Particle>,
}

impl MilestoneNode {
    pub fn new(milestone: Milestone, axis_y: f32) -> Self {
        Self {
            position: Vec2::new(milestone.x, axis_y),
            milestone,
            state: NodeState::Dormant,
            pulse_phase: 0.0,
            particles: Vec::new(),
        }
    }

    pub fn milestone(&self) -> &Milestone {
        &self.milestone
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn state(&self) -> NodeState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == NodeState::Active
    }

    pub fn pulse_phase(&self) -> f32 {
        self.pulse_phase
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Lights the node and releases a burst of `burst` particles.
    ///
    /// Returns `false` without side effects if the node was already active.
    pub fn activate(&mut self, burst: usize, config: &ParticleConfig, rng: &mut impl Rng) -> bool {
        if self.is_active() {
            return false;
        }
        self.state = NodeState::Active;
        let origin = self.position;
        self.particles
            .extend((0..burst).map(|_| Particle::spawn(origin, config, rng)));
        true
    }

    pub fn update(&mut self, pulse_step: f32) {
        if self.is_active() {
            self.pulse_phase = (self.pulse_phase + pulse_step) % TAU;
        }
        self.particles.retain_mut(|particle| {
            particle.update();
            particle.is_alive()
        });
    }

    /// Radius of the innermost glow ring for the current pulse phase.
    pub fn glow_radius(&self, base: f32, amplitude: f32) -> f32 {
        base + amplitude * self.pulse_phase.sin()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn node() -> MilestoneNode {
        MilestoneNode::new(Milestone::catalog()[0], 360.0)
    }

    #[test]
    fn starts_dormant_at_axis() {
        let node = node();
        assert_eq!(node.state(), NodeState::Dormant);
        assert_eq!(node.position(), Vec2::new(100.0, 360.0));
        assert!(node.particles().is_empty());
    }

    #[test]
    fn activation_bursts_once() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut node = node();
        let config = ParticleConfig::default();
        assert!(node.activate(20, &config, &mut rng));
        assert!(node.is_active());
        assert_eq!(node.particles().len(), 20);
        assert!(!node.activate(20, &config, &mut rng));
        assert_eq!(node.particles().len(), 20);
    }

    #[test]
    fn dormant_node_does_not_pulse() {
        let mut node = node();
        node.update(0.1);
        assert_eq!(node.pulse_phase(), 0.0);
    }

    #[test]
    fn pulse_wraps_modulo_tau() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut node = node();
        node.activate(0, &ParticleConfig::default(), &mut rng);
        for _ in 0..200 {
            node.update(0.1);
            assert!((0.0..TAU).contains(&node.pulse_phase()));
        }
    }

    #[test]
    fn particles_expire_after_lifetime() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut node = node();
        let config = ParticleConfig {
            lifetime: 3,
            ..ParticleConfig::default()
        };
        node.activate(10, &config, &mut rng);
        node.update(0.1);
        node.update(0.1);
        assert_eq!(node.particles().len(), 10);
        assert!(node.particles().iter().all(|p| p.life == 1));
        node.update(0.1);
        assert!(node.particles().is_empty());
        assert!(node.is_active());
    }

    #[test]
    fn glow_follows_sine_of_phase() {
        let node = node();
        assert_eq!(node.glow_radius(20.0, 10.0), 20.0);
    }
}
