use crate::icon::Icon;

/// A fixed entry on the timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Milestone {
    pub name: &'static str,
    pub year: &'static str,
    pub era: &'static str,
    /// Horizontal canvas position of the marker.
    pub x: f32,
    pub icon: Option<Icon>,
}

impl Milestone {
    pub const fn new(name: &'static str, year: &'static str, era: &'static str, x: f32) -> Self {
        Self {
            name,
            year,
            era,
            x,
            icon: None,
        }
    }

    pub const fn with_icon(self, icon: Icon) -> Self {
        Self {
            icon: Some(icon),
            ..self
        }
    }

    /// The eight milestones the animation walks through, in activation order.
    pub fn catalog() -> &'static [Milestone] {
        &CATALOG
    }
}

const FOUR_INVENTIONS: &str = "Four Great Inventions of China";

static CATALOG: [Milestone; 8] = [
    Milestone::new("Papermaking", "105", FOUR_INVENTIONS, 100.0).with_icon(Icon::Paper),
    Milestone::new("Printing", "1041", FOUR_INVENTIONS, 200.0).with_icon(Icon::Printing),
    Milestone::new("Gunpowder", "9th c.", FOUR_INVENTIONS, 300.0).with_icon(Icon::Gunpowder),
    Milestone::new("Compass", "11th c.", FOUR_INVENTIONS, 400.0).with_icon(Icon::Compass),
    Milestone::new("Steam Engine", "1769", "Industrial Revolution", 550.0).with_icon(Icon::Steam),
    Milestone::new(
        "Internal Combustion Engine",
        "1876",
        "Second Industrial Revolution",
        700.0,
    )
    .with_icon(Icon::Engine),
    Milestone::new("Computer", "1946", "Information Age", 850.0).with_icon(Icon::Computer),
    Milestone::new("Artificial Intelligence", "2020s", "Intelligence Age", 1000.0)
        .with_icon(Icon::NeuralNetwork),
];
