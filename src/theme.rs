use std::fs;
use std::path::PathBuf;

use egui::{Color32, CornerRadius, Visuals};
use serde::Deserialize;
use thiserror::Error;

/// Looked up next to the executable first, then in the working directory.
const THEME_FILE: &str = "assets/theme.toml";

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("could not read theme file: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse theme file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Monochrome widget styling, mapped onto the toolkit's visuals.
#[derive(Debug, Deserialize)]
pub struct Theme {
    palette: Palette,
    widgets: WidgetStyle,
}

#[derive(Debug, Deserialize)]
struct Palette {
    window_fill: [u8; 3],
    panel_fill: [u8; 3],
    text: [u8; 3],
    selection: [u8; 3],
}

#[derive(Debug, Deserialize)]
struct WidgetStyle {
    corner_radius: u8,
}

impl Theme {
    pub fn load() -> Result<Self, ThemeError> {
        let content = match Self::exe_dir_path().and_then(|p| fs::read_to_string(p).ok()) {
            Some(content) => content,
            None => fs::read_to_string(THEME_FILE)?,
        };
        Ok(toml::from_str(&content)?)
    }

    fn exe_dir_path() -> Option<PathBuf> {
        let exe = std::env::current_exe().ok()?;
        Some(exe.parent()?.join(THEME_FILE))
    }

    pub fn visuals(&self) -> Visuals {
        let mut visuals = Visuals::light();
        visuals.window_fill = rgb(self.palette.window_fill);
        visuals.panel_fill = rgb(self.palette.panel_fill);
        visuals.override_text_color = Some(rgb(self.palette.text));
        visuals.selection.bg_fill = rgb(self.palette.selection);

        let radius = CornerRadius::same(self.widgets.corner_radius);
        visuals.widgets.noninteractive.corner_radius = radius;
        visuals.widgets.inactive.corner_radius = radius;
        visuals.widgets.hovered.corner_radius = radius;
        visuals.widgets.active.corner_radius = radius;
        visuals.widgets.open.corner_radius = radius;

        visuals
    }
}

fn rgb([r, g, b]: [u8; 3]) -> Color32 {
    Color32::from_rgb(r, g, b)
}

/// Applies the bundled theme if it loads; default styling otherwise. A
/// missing or malformed file is not surfaced to the user.
pub fn apply(ctx: &egui::Context) {
    match Theme::load() {
        Ok(theme) => ctx.set_visuals(theme.visuals()),
        Err(err) => log::debug!("theme not applied, using default styling: {err}"),
    }
}
