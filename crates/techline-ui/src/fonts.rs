use std::path::Path;
use std::sync::Arc;

use egui::{FontData, FontDefinitions, FontFamily};
use tracing::{info, warn};

const DISPLAY_FONT: &str = "techline-display";

/// sfnt version tags: TrueType, CFF OpenType, legacy Apple TrueType, collection.
const SFNT_TAGS: [[u8; 4]; 4] = [*b"\x00\x01\x00\x00", *b"OTTO", *b"true", *b"ttcf"];

/// Installs the font at `path` ahead of egui's bundled fonts.
///
/// A missing or unreadable file is not fatal: the bundled font stays in use.
/// So is a file that doesn't start with an sfnt header, since egui only parses
/// font data lazily and would panic mid-frame. The header check does not
/// catch a truncated or corrupt table directory.
/// Returns whether the display font was installed.
pub fn install_display_font(ctx: &egui::Context, path: Option<&Path>) -> bool {
    let Some(path) = path else {
        return false;
    };
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!(
                "display font {} unavailable ({err}); using default font",
                path.display()
            );
            return false;
        }
    };
    if !looks_like_font(&bytes) {
        warn!(
            "display font {} is not a TrueType/OpenType file; using default font",
            path.display()
        );
        return false;
    }
    ctx.set_fonts(with_display_font(bytes));
    info!("display font loaded from {}", path.display());
    true
}

fn looks_like_font(bytes: &[u8]) -> bool {
    bytes
        .get(..4)
        .is_some_and(|tag| SFNT_TAGS.iter().any(|known| known == tag))
}

fn with_display_font(bytes: Vec<u8>) -> FontDefinitions {
    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert(DISPLAY_FONT.to_owned(), Arc::new(FontData::from_owned(bytes)));
    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .insert(0, DISPLAY_FONT.to_owned());
    }
    fonts
}
