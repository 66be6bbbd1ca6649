//! Techline core engine: platform-agnostic logic for milestones, particles,
//! flow trails and the activation schedule.

pub mod clock;
pub mod config;
pub mod engine;
pub mod flow;
pub mod icon;
pub mod milestone;
pub mod node;
pub mod particle;
pub mod render;

pub use clock::FrameClock;
pub use config::{ConfigError, EngineConfig, Variant};
pub use engine::{Phase, TimelineEngine};
pub use flow::FlowTrail;
pub use icon::Icon;
pub use milestone::Milestone;
pub use node::{MilestoneNode, NodeState};
pub use particle::{BackgroundParticle, Particle, Tint};
