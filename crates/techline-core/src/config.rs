//! Engine configuration: every tunable the animation reads, gathered in one
//! serde-friendly tree so a session can be described by a TOML file.

use std::path::Path;

use serde::{Deserialize, Serialize};
use techline_platform::Rgba;

use crate::milestone::Milestone;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {reason}")]
    Invalid { reason: String },

    #[error("milestone `{name}` has no icon but the illustrated variant needs one")]
    MissingIcon { name: String },
}

impl ConfigError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::Invalid {
            reason: reason.into(),
        }
    }
}

/// Which presentation the engine drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Plain disc markers, no closing overlay.
    #[default]
    Classic,
    /// Per-milestone icons, bigger bursts and the closing overlay.
    Illustrated,
}

impl Variant {
    pub fn default_burst(self) -> usize {
        match self {
            Variant::Classic => 20,
            Variant::Illustrated => 30,
        }
    }

    pub fn draws_icons(self) -> bool {
        matches!(self, Variant::Illustrated)
    }

    pub fn has_ending(self) -> bool {
        matches!(self, Variant::Illustrated)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Canvas {
    pub width: f32,
    pub height: f32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

impl Canvas {
    /// Vertical position of the timeline axis.
    pub fn axis_y(&self) -> f32 {
        (self.height / 2.0).floor()
    }

    pub fn center(&self) -> glam::Vec2 {
        glam::Vec2::new((self.width / 2.0).floor(), self.axis_y())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    /// Burst size on activation; `None` picks the variant's default.
    pub burst: Option<usize>,
    pub lifetime: u32,
    /// Each velocity axis is drawn from `[-max_speed, max_speed]`.
    pub max_speed: f32,
    pub drag: f32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            burst: None,
            lifetime: 100,
            max_speed: 2.0,
            drag: 0.98,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    pub per_transition: usize,
    pub min_speed: f32,
    pub max_speed: f32,
    pub trail_samples: usize,
    pub trail_spacing: f32,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            per_transition: 3,
            min_speed: 0.01,
            max_speed: 0.03,
            trail_samples: 5,
            trail_spacing: 0.05,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PulseConfig {
    /// Phase advance per tick, in radians.
    pub step: f32,
    /// Glow radius swing in pixels.
    pub amplitude: f32,
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self {
            step: 0.1,
            amplitude: 10.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
    pub count: usize,
    pub min_speed: f32,
    pub max_speed: f32,
    pub min_radius: u32,
    pub max_radius: u32,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            count: 50,
            min_speed: 0.1,
            max_speed: 0.5,
            min_radius: 1,
            max_radius: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndingConfig {
    /// Ticks between the last activation and the overlay starting to fade in.
    pub delay_ticks: u32,
    pub fade_step: f32,
    pub max_alpha: f32,
    pub spark_count: usize,
}

impl Default for EndingConfig {
    fn default() -> Self {
        Self {
            delay_ticks: 180,
            fade_step: 3.0,
            max_alpha: 255.0,
            spark_count: 20,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: Rgba,
    pub gold: Rgba,
    pub dark_gold: Rgba,
    pub azure: Rgba,
    pub white: Rgba,
    pub red: Rgba,
    pub green: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgba::rgb(0, 20, 60),
            gold: Rgba::rgb(255, 215, 0),
            dark_gold: Rgba::rgb(184, 134, 11),
            azure: Rgba::rgb(100, 149, 237),
            white: Rgba::WHITE,
            red: Rgba::rgb(255, 100, 100),
            green: Rgba::rgb(100, 255, 100),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Typography {
    pub title: f32,
    pub subtitle: f32,
    pub body: f32,
    pub small: f32,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            title: 48.0,
            subtitle: 32.0,
            body: 24.0,
            small: 16.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Captions {
    pub title: String,
    pub subtitle: String,
    pub ending_headline: String,
    pub ending_lines: Vec<String>,
}

impl Default for Captions {
    fn default() -> Self {
        Self {
            title: "The Road of Human Innovation".into(),
            subtitle: "From the Four Great Inventions to Artificial Intelligence".into(),
            ending_headline: "To every innovation that refused to be ordinary".into(),
            ending_lines: vec![
                "Every leap of civilisation, from antiquity to today,".into(),
                "began with someone bold enough to break new ground".into(),
            ],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub palette: Palette,
    pub typography: Typography,
    pub captions: Captions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub variant: Variant,
    pub canvas: Canvas,
    /// Ticks between consecutive activations.
    pub activation_interval: u64,
    pub frame_rate: u32,
    pub particles: ParticleConfig,
    pub flows: FlowConfig,
    pub pulse: PulseConfig,
    pub background: BackgroundConfig,
    pub ending: EndingConfig,
    pub theme: Theme,
    /// Fixed RNG seed; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::classic()
    }
}

impl EngineConfig {
    pub fn classic() -> Self {
        Self {
            variant: Variant::Classic,
            canvas: Canvas::default(),
            activation_interval: 120,
            frame_rate: 60,
            particles: ParticleConfig::default(),
            flows: FlowConfig::default(),
            pulse: PulseConfig::default(),
            background: BackgroundConfig::default(),
            ending: EndingConfig::default(),
            theme: Theme::default(),
            seed: None,
        }
    }

    pub fn illustrated() -> Self {
        Self {
            variant: Variant::Illustrated,
            ..Self::classic()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(text)?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn burst_size(&self) -> usize {
        self.particles
            .burst
            .unwrap_or_else(|| self.variant.default_burst())
    }

    /// Checks numeric ranges and that the milestones suit the variant.
    pub fn validate(&self, milestones: &[Milestone]) -> Result<(), ConfigError> {
        if milestones.is_empty() {
            return Err(ConfigError::invalid("milestone catalogue is empty"));
        }
        if self.activation_interval == 0 {
            return Err(ConfigError::invalid("activation_interval must be at least 1"));
        }
        if self.frame_rate == 0 {
            return Err(ConfigError::invalid("frame_rate must be at least 1"));
        }
        let canvas_ok = [self.canvas.width, self.canvas.height]
            .iter()
            .all(|side| side.is_finite() && *side > 0.0);
        if !canvas_ok {
            return Err(ConfigError::invalid(
                "canvas dimensions must be positive and finite",
            ));
        }
        if self.particles.lifetime == 0 {
            return Err(ConfigError::invalid("particles.lifetime must be at least 1"));
        }
        if self.flows.per_transition == 0 {
            return Err(ConfigError::invalid("flows.per_transition must be at least 1"));
        }
        check_non_negative("particles.max_speed", self.particles.max_speed)?;
        check_non_negative("particles.drag", self.particles.drag)?;
        check_non_negative("pulse.step", self.pulse.step)?;
        check_non_negative("pulse.amplitude", self.pulse.amplitude)?;
        check_non_negative("flows.trail_spacing", self.flows.trail_spacing)?;
        check_non_negative("ending.fade_step", self.ending.fade_step)?;
        check_non_negative("ending.max_alpha", self.ending.max_alpha)?;
        check_range("flows speed", self.flows.min_speed, self.flows.max_speed)?;
        check_range(
            "background speed",
            self.background.min_speed,
            self.background.max_speed,
        )?;
        if self.background.min_radius > self.background.max_radius {
            return Err(ConfigError::invalid(
                "background.min_radius exceeds background.max_radius",
            ));
        }
        if self.variant.draws_icons() {
            if let Some(bare) = milestones.iter().find(|m| m.icon.is_none()) {
                return Err(ConfigError::MissingIcon {
                    name: bare.name.to_owned(),
                });
            }
        }
        Ok(())
    }
}

fn check_non_negative(label: &str, value: f32) -> Result<(), ConfigError> {
    if !(value.is_finite() && value >= 0.0) {
        return Err(ConfigError::invalid(format!(
            "{label} must be finite and non-negative, got {value}"
        )));
    }
    Ok(())
}

fn check_range(label: &str, min: f32, max: f32) -> Result<(), ConfigError> {
    if !(min.is_finite() && max.is_finite() && min > 0.0 && min <= max) {
        return Err(ConfigError::invalid(format!(
            "{label} range [{min}, {max}] must be positive and ordered"
        )));
    }
    Ok(())
}
