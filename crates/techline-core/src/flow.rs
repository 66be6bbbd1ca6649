use glam::Vec2;
use rand::Rng;

use crate::config::FlowConfig;
use crate::particle::Tint;

/// A pulse travelling from one active milestone to the next, forever.
///
/// Only `progress` changes over time; the trail behind the lead point is
/// derived from it at render time.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowTrail {
    pub start: Vec2,
    pub end: Vec2,
    pub progress: f32,
    pub speed: f32,
    pub tint: Tint,
}

/// One sample of a trail, ready to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailSample {
    pub pos: Vec2,
    pub radius: f32,
}

impl FlowTrail {
    pub fn new(start: Vec2, end: Vec2, config: &FlowConfig, rng: &mut impl Rng) -> Self {
        Self {
            start,
            end,
            progress: 0.0,
            speed: rng.gen_range(config.min_speed..=config.max_speed),
            tint: Tint::random(rng),
        }
    }

    pub fn update(&mut self) {
        self.progress += self.speed;
        if self.progress >= 1.0 {
            self.progress = 0.0;
        }
    }

    pub fn point_at(&self, progress: f32) -> Vec2 {
        self.start.lerp(self.end, progress)
    }

    pub fn head(&self) -> Vec2 {
        self.point_at(self.progress)
    }

    /// Trail samples behind the head, newest first. Samples that would fall
    /// before the start of the segment, or shrink to nothing, are skipped.
    pub fn trail(&self, samples: usize, spacing: f32) -> impl Iterator<Item = TrailSample> + '_ {
        (0..samples).filter_map(move |i| {
            let progress = self.progress - i as f32 * spacing;
            let radius = (2.0 * (1.0 - i as f32 / samples as f32)).floor();
            (progress > 0.0 && radius > 0.0).then(|| TrailSample {
                pos: self.point_at(progress),
                radius,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn flow(progress: f32, speed: f32) -> FlowTrail {
        FlowTrail {
            start: Vec2::new(100.0, 360.0),
            end: Vec2::new(200.0, 360.0),
            progress,
            speed,
            tint: Tint::Azure,
        }
    }

    #[test]
    fn speed_is_drawn_from_configured_range() {
        let mut rng = StdRng::seed_from_u64(11);
        let config = FlowConfig::default();
        for _ in 0..100 {
            let trail = FlowTrail::new(Vec2::ZERO, Vec2::X, &config, &mut rng);
            assert!((0.01..=0.03).contains(&trail.speed));
            assert_eq!(trail.progress, 0.0);
        }
    }

    #[test]
    fn overflow_wraps_to_zero() {
        let mut trail = flow(0.99, 0.02);
        trail.update();
        assert_eq!(trail.progress, 0.0);
    }

    #[test]
    fn progress_stays_in_unit_interval() {
        let mut trail = flow(0.0, 0.025);
        for _ in 0..1000 {
            trail.update();
            assert!((0.0..1.0).contains(&trail.progress));
        }
    }

    #[test]
    fn head_interpolates_endpoints() {
        let trail = flow(0.25, 0.01);
        assert_eq!(trail.head(), Vec2::new(125.0, 360.0));
    }

    #[test]
    fn trail_shrinks_and_skips_samples_before_start() {
        let trail = flow(0.12, 0.01);
        let samples: Vec<_> = trail.trail(5, 0.05).collect();
        // offsets 0, 0.05, 0.10 are ahead of the start; 0.15+ are not
        assert_eq!(samples.len(), 3);
        assert_eq!(samples[0].radius, 2.0);
        assert_eq!(samples[1].radius, 1.0);
        assert!(samples[2].pos.x < samples[1].pos.x);
    }

    #[test]
    fn fresh_trail_has_no_samples() {
        assert_eq!(flow(0.0, 0.01).trail(5, 0.05).count(), 0);
    }
}
