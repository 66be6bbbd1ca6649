//! eframe host for the timeline: owns the window, paces ticks, maps keys to
//! control signals and paints each frame through [`EguiSurface`].

use std::path::PathBuf;
use std::time::Instant;

use techline_core::{FrameClock, TimelineEngine};
use techline_platform::{ControlSignal, Result};
use tracing::info;

mod fonts;
mod surface;

pub use fonts::install_display_font;
pub use surface::{CanvasTransform, EguiSurface};

#[derive(Debug, Clone)]
pub struct UiOptions {
    pub window_title: String,
    /// Preferred display font; egui's bundled font is used if it can't be read.
    pub font_path: Option<PathBuf>,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            window_title: "Techline".into(),
            font_path: None,
        }
    }
}

/// Opens the window and runs the animation until the user quits.
pub fn run(engine: TimelineEngine, options: UiOptions) -> Result<()> {
    let canvas = engine.config().canvas;
    let title = options.window_title.clone();
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title.clone())
            .with_inner_size([canvas.width, canvas.height]),
        ..Default::default()
    };
    eframe::run_native(
        &title,
        native_options,
        Box::new(move |creation_context| {
            install_display_font(&creation_context.egui_ctx, options.font_path.as_deref());
            Ok(Box::new(TimelineApp::new(engine)))
        }),
    )
    .map_err(|e| e.to_string())?;
    Ok(())
}

pub struct TimelineApp {
    engine: TimelineEngine,
    clock: FrameClock,
    last_frame: Instant,
}

impl TimelineApp {
    pub fn new(engine: TimelineEngine) -> Self {
        Self {
            clock: FrameClock::new(engine.config().frame_rate),
            engine,
            last_frame: Instant::now(),
        }
    }

    /// Applies a host signal between ticks. Returns `false` once the
    /// animation should stop.
    pub fn apply(&mut self, signal: ControlSignal) -> bool {
        match signal {
            ControlSignal::Terminate => {
                info!("UI: terminate requested");
                false
            }
            ControlSignal::Restart => {
                self.engine.reset();
                self.clock.reset();
                true
            }
        }
    }

    pub fn engine(&self) -> &TimelineEngine {
        &self.engine
    }
}

fn read_signal(input: &egui::InputState) -> Option<ControlSignal> {
    if input.key_pressed(egui::Key::Escape) || input.viewport().close_requested() {
        Some(ControlSignal::Terminate)
    } else if input.key_pressed(egui::Key::Space) {
        Some(ControlSignal::Restart)
    } else {
        None
    }
}

impl eframe::App for TimelineApp {
    fn update(&mut self, context: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(signal) = context.input(read_signal) {
            if !self.apply(signal) {
                context.send_viewport_cmd(egui::ViewportCommand::Close);
                return;
            }
        }

        let now = Instant::now();
        let due = self.clock.advance(now - self.last_frame);
        self.last_frame = now;
        for _ in 0..due {
            self.engine.tick();
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(context, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::hover());
                let transform = CanvasTransform::fit(&self.engine.config().canvas, response.rect);
                let mut surface = EguiSurface::new(&painter, transform);
                self.engine.draw(&mut surface);
            });

        context.request_repaint_after(self.clock.until_next());
    }
}

#[cfg(test)]
mod tests {
    use techline_core::EngineConfig;

    use super::*;

    fn app() -> TimelineApp {
        let engine = TimelineEngine::new(EngineConfig::classic().with_seed(1)).unwrap();
        TimelineApp::new(engine)
    }

    #[test]
    fn restart_rebuilds_engine() {
        let mut app = app();
        for _ in 0..300 {
            app.engine.tick();
        }
        assert!(app.apply(ControlSignal::Restart));
        assert_eq!(app.engine().current_tick(), 0);
        assert_eq!(app.engine().next_index(), 0);
    }

    #[test]
    fn terminate_stops() {
        assert!(!app().apply(ControlSignal::Terminate));
    }
}
