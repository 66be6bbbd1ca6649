//! The activation scheduler: advances time, lights milestones in order,
//! links each newly lit milestone to its predecessor with flow trails, and
//! runs the closing sequence once every milestone is lit.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::config::{ConfigError, EngineConfig};
use crate::flow::FlowTrail;
use crate::milestone::Milestone;
use crate::node::MilestoneNode;
use crate::particle::BackgroundParticle;

/// Where the animation is in its one-way sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    /// Milestones are still being lit.
    Running,
    /// Every milestone is lit; counting down before the closing overlay.
    Concluding { remaining: u32 },
    /// The sequence is over. `overlay_alpha` ramps up to the configured cap
    /// when the variant has a closing overlay and stays at zero otherwise.
    Finished { overlay_alpha: f32 },
}

pub struct TimelineEngine {
    config: EngineConfig,
    milestones: Vec<Milestone>,
    nodes: Vec<MilestoneNode>,
    flows: Vec<FlowTrail>,
    background: Vec<BackgroundParticle>,
    tick: u64,
    next_index: usize,
    phase: Phase,
    rng: StdRng,
}

impl TimelineEngine {
    /// Builds an engine over the compiled-in milestone catalogue.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        Self::with_milestones(config, Milestone::catalog().to_vec())
    }

    pub fn with_milestones(
        config: EngineConfig,
        milestones: Vec<Milestone>,
    ) -> Result<Self, ConfigError> {
        config.validate(&milestones)?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let engine = Self::assemble(config, milestones, rng);
        info!(
            variant = ?engine.config.variant,
            milestones = engine.nodes.len(),
            interval = engine.config.activation_interval,
            "timeline engine ready"
        );
        Ok(engine)
    }

    fn assemble(config: EngineConfig, milestones: Vec<Milestone>, mut rng: StdRng) -> Self {
        let axis_y = config.canvas.axis_y();
        let nodes = milestones
            .iter()
            .map(|milestone| MilestoneNode::new(*milestone, axis_y))
            .collect();
        let background = (0..config.background.count)
            .map(|_| BackgroundParticle::scatter(&config.canvas, &config.background, &mut rng))
            .collect();
        Self {
            config,
            milestones,
            nodes,
            flows: Vec::new(),
            background,
            tick: 0,
            next_index: 0,
            phase: Phase::Running,
            rng,
        }
    }

    /// Discards every node, flow and background particle and starts over
    /// from tick 0. The random stream carries on, so the new generation
    /// scatters differently.
    pub fn reset(&mut self) {
        let config = self.config.clone();
        let milestones = std::mem::take(&mut self.milestones);
        let rng = StdRng::from_rng(&mut self.rng).unwrap_or_else(|_| StdRng::from_entropy());
        *self = Self::assemble(config, milestones, rng);
        info!("timeline restarted");
    }

    /// Advances the animation by one tick.
    pub fn tick(&mut self) {
        self.tick += 1;
        self.activate_due();
        self.advance_phase();

        let pulse_step = self.config.pulse.step;
        for node in &mut self.nodes {
            node.update(pulse_step);
        }
        for flow in &mut self.flows {
            flow.update();
        }
        let canvas = self.config.canvas;
        for dot in &mut self.background {
            dot.update(&canvas, &mut self.rng);
        }
    }

    fn activate_due(&mut self) {
        if self.tick % self.config.activation_interval != 0 || self.next_index >= self.nodes.len()
        {
            return;
        }
        let index = self.next_index;
        let burst = self.config.burst_size();
        self.nodes[index].activate(burst, &self.config.particles, &mut self.rng);
        info!(
            tick = self.tick,
            index,
            milestone = self.nodes[index].milestone().name,
            "milestone activated"
        );

        if index > 0 {
            let start = self.nodes[index - 1].position();
            let end = self.nodes[index].position();
            for _ in 0..self.config.flows.per_transition {
                self.flows
                    .push(FlowTrail::new(start, end, &self.config.flows, &mut self.rng));
            }
            debug!(
                from = index - 1,
                to = index,
                count = self.config.flows.per_transition,
                "flow trails spawned"
            );
        }

        self.next_index += 1;
        if self.next_index == self.nodes.len() {
            self.phase = if self.config.variant.has_ending() {
                Phase::Concluding {
                    remaining: self.config.ending.delay_ticks,
                }
            } else {
                Phase::Finished { overlay_alpha: 0.0 }
            };
            info!(tick = self.tick, phase = ?self.phase, "all milestones lit");
        }
    }

    fn advance_phase(&mut self) {
        let ending = &self.config.ending;
        match self.phase {
            Phase::Running => {}
            Phase::Concluding { remaining } => {
                let remaining = remaining.saturating_sub(1);
                self.phase = if remaining == 0 {
                    info!(tick = self.tick, "closing overlay fading in");
                    Phase::Finished {
                        overlay_alpha: ending.fade_step.min(ending.max_alpha),
                    }
                } else {
                    Phase::Concluding { remaining }
                };
            }
            Phase::Finished { overlay_alpha } => {
                if self.config.variant.has_ending() && overlay_alpha < ending.max_alpha {
                    self.phase = Phase::Finished {
                        overlay_alpha: (overlay_alpha + ending.fade_step).min(ending.max_alpha),
                    };
                }
            }
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    pub fn next_index(&self) -> usize {
        self.next_index
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn nodes(&self) -> &[MilestoneNode] {
        &self.nodes
    }

    pub fn flows(&self) -> &[FlowTrail] {
        &self.flows
    }

    pub fn background(&self) -> &[BackgroundParticle] {
        &self.background
    }

    pub fn is_complete(&self) -> bool {
        self.next_index == self.nodes.len()
    }

    /// Opacity of the closing overlay, zero until it starts fading in.
    pub fn overlay_alpha(&self) -> f32 {
        match self.phase {
            Phase::Finished { overlay_alpha } if self.config.variant.has_ending() => overlay_alpha,
            _ => 0.0,
        }
    }
}
