//! Colours for the workout grid and the error dialog.

use egui::{Color32, Visuals};

use crate::storage::config::Theme;

/// The handful of colours the app draws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Window and panel fill
    pub surface: Color32,
    /// Striped grid rows and inactive widgets
    pub raised: Color32,
    pub text: Color32,
    /// Captions such as the exercise count
    pub muted: Color32,
    /// Week headings and active widgets
    pub accent: Color32,
    pub error: Color32,
}

const DARK: Palette = Palette {
    surface: Color32::from_rgb(24, 26, 30),
    raised: Color32::from_rgb(38, 41, 47),
    text: Color32::from_rgb(232, 234, 237),
    muted: Color32::from_rgb(150, 154, 162),
    accent: Color32::from_rgb(242, 153, 74),
    error: Color32::from_rgb(235, 87, 87),
};

const LIGHT: Palette = Palette {
    surface: Color32::from_rgb(252, 251, 249),
    raised: Color32::from_rgb(240, 238, 234),
    text: Color32::from_rgb(36, 38, 42),
    muted: Color32::from_rgb(110, 112, 118),
    accent: Color32::from_rgb(196, 98, 16),
    error: Color32::from_rgb(192, 40, 40),
};

pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Dark => DARK,
        Theme::Light => LIGHT,
    }
}

/// egui visuals for a theme: the stock dark or light set, recoloured.
pub fn visuals(theme: Theme) -> Visuals {
    let colors = palette(theme);
    let mut visuals = match theme {
        Theme::Dark => Visuals::dark(),
        Theme::Light => Visuals::light(),
    };

    visuals.window_fill = colors.surface;
    visuals.panel_fill = colors.surface;
    visuals.faint_bg_color = colors.raised;
    visuals.widgets.inactive.bg_fill = colors.raised;
    visuals.widgets.active.bg_fill = colors.accent;
    visuals.selection.bg_fill = colors.accent.linear_multiply(0.35);
    visuals.selection.stroke.color = colors.accent;
    visuals.override_text_color = Some(colors.text);

    visuals
}

pub fn error_color(theme: Theme) -> Color32 {
    palette(theme).error
}

pub fn accent_color(theme: Theme) -> Color32 {
    palette(theme).accent
}

pub fn secondary_text_color(theme: Theme) -> Color32 {
    palette(theme).muted
}
