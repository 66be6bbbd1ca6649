use techline_core::{EngineConfig, TimelineEngine};
use techline_platform::{DrawCommand, RecordingSurface};

fn seeded(config: EngineConfig) -> TimelineEngine {
    TimelineEngine::new(config.with_seed(77)).expect("valid config")
}

fn frame(engine: &TimelineEngine) -> RecordingSurface {
    let mut surface = RecordingSurface::new();
    engine.draw(&mut surface);
    surface
}

#[test]
fn frame_starts_with_background_fill() {
    let engine = seeded(EngineConfig::classic());
    let surface = frame(&engine);
    let background = engine.config().theme.palette.background;
    match &surface.commands()[0] {
        DrawCommand::FillPolygon { color, points } => {
            assert_eq!(*color, background);
            assert_eq!(points.len(), 4);
        }
        other => panic!("expected background fill, got {other:?}"),
    }
}

#[test]
fn dormant_nodes_have_no_labels() {
    let engine = seeded(EngineConfig::classic());
    let surface = frame(&engine);
    assert!(surface.contains_text(&engine.config().theme.captions.title));
    assert!(!surface.contains_text("Papermaking"));
    assert_eq!(surface.texts().count(), 2);
}

#[test]
fn active_node_shows_name_year_and_era() {
    let mut engine = seeded(EngineConfig::classic());
    for _ in 0..120 {
        engine.tick();
    }
    let surface = frame(&engine);
    assert!(surface.contains_text("Papermaking"));
    assert!(surface.contains_text("105"));
    assert!(surface.contains_text("Four Great Inventions of China"));
    assert!(!surface.contains_text("Printing"));
}

#[test]
fn connections_drawn_between_lit_neighbours() {
    let mut engine = seeded(EngineConfig::classic());
    for _ in 0..240 {
        engine.tick();
    }
    let a = engine.nodes()[0].position();
    let b = engine.nodes()[1].position();
    let strands = frame(&engine)
        .commands()
        .iter()
        .filter(|c| matches!(c, DrawCommand::Line { from, to, .. } if *from == a && *to == b))
        .count();
    assert_eq!(strands, 5);
}

#[test]
fn overlay_only_after_conclusion() {
    let mut engine = seeded(EngineConfig::illustrated());
    let headline = engine.config().theme.captions.ending_headline.clone();
    for _ in 0..1000 {
        engine.tick();
    }
    assert!(!frame(&engine).contains_text(&headline));

    for _ in 0..200 {
        engine.tick();
    }
    let surface = frame(&engine);
    assert!(surface.contains_text(&headline));
    let veil = surface.commands().iter().rev().find_map(|c| match c {
        DrawCommand::FillPolygon { color, .. } if color.r == 0 && color.g == 0 && color.b == 0 => {
            Some(*color)
        }
        _ => None,
    });
    assert!(veil.is_some_and(|c| c.a > 0 && c.a < 255));
}

#[test]
fn sparks_appear_once_overlay_is_bright() {
    let mut engine = seeded(EngineConfig::illustrated());
    // overlay begins at tick 1139 and gains 3 per tick; past 200 after ~67 ticks
    for _ in 0..1139 + 80 {
        engine.tick();
    }
    assert!(engine.overlay_alpha() > 200.0);
    let gold = engine.config().theme.palette.gold;
    let sparks = frame(&engine)
        .commands()
        .iter()
        .filter(|c| {
            matches!(c, DrawCommand::FillCircle { radius, color, .. }
                if *radius == 3.0 && color.r == gold.r && color.g == gold.g && color.a < 255)
        })
        .count();
    assert_eq!(sparks, 20);
}

#[test]
fn classic_never_draws_overlay() {
    let mut engine = seeded(EngineConfig::classic());
    for _ in 0..2000 {
        engine.tick();
    }
    let headline = &engine.config().theme.captions.ending_headline;
    assert!(!frame(&engine).contains_text(headline));
}

#[test]
fn illustrated_draws_icon_backdrop() {
    let engine = seeded(EngineConfig::illustrated());
    let backdrop = engine.config().theme.palette.background.with_alpha(200);
    let discs = frame(&engine)
        .commands()
        .iter()
        .filter(|c| matches!(c, DrawCommand::FillCircle { color, radius, .. } if *color == backdrop && *radius == 30.0))
        .count();
    assert_eq!(discs, 8);
}

#[test]
fn spark_links_stay_on_their_own_circle() {
    let mut engine = seeded(EngineConfig::illustrated());
    for _ in 0..1139 + 80 {
        engine.tick();
    }
    let center = engine.config().canvas.center();
    let azure = engine.config().theme.palette.azure;
    let links: Vec<_> = frame(&engine)
        .take()
        .into_iter()
        .filter_map(|c| match c {
            DrawCommand::Line { from, to, width, color }
                if width == 1.0
                    && from.y != to.y
                    && color.a < 255
                    && color.r == azure.r
                    && color.b == azure.b =>
            {
                Some((from, to))
            }
            _ => None,
        })
        .collect();
    assert_eq!(links.len(), 7);
    for (from, to) in links {
        assert!((from.distance(center) - to.distance(center)).abs() < 1e-2);
    }
}
