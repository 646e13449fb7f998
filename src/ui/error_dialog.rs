//! Modal error dialog for failed file operations.

use egui::{Color32, RichText, Vec2};

use crate::storage::config::Theme;
use crate::storage::{LoadError, LoadReporter};
use crate::ui::theme;

/// A message waiting to be acknowledged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogMessage {
    pub title: String,
    pub message: String,
}

/// Holds at most one error until the user dismisses it.
#[derive(Debug, Clone, Default)]
pub struct ErrorDialog {
    pending: Option<DialogMessage>,
}

impl ErrorDialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an error, replacing any unacknowledged one.
    pub fn show_error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.pending = Some(DialogMessage {
            title: title.into(),
            message: message.into(),
        });
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    pub fn message(&self) -> Option<&DialogMessage> {
        self.pending.as_ref()
    }

    pub fn dismiss(&mut self) {
        self.pending = None;
    }

    /// Render the dialog if an error is pending.
    pub fn show(&mut self, ctx: &egui::Context, theme: Theme) {
        let Some(pending) = self.pending.clone() else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new(pending.title.as_str())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_size(Vec2::new(360.0, 120.0));

                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("⚠")
                            .size(24.0)
                            .color(theme::error_color(theme)),
                    );
                    ui.label(RichText::new(&pending.message).color(theme::error_color(theme)));
                });

                ui.add_space(12.0);

                ui.vertical_centered(|ui| {
                    if ui
                        .button(RichText::new("OK").color(Color32::WHITE))
                        .clicked()
                    {
                        dismissed = true;
                    }
                });
            });

        if dismissed || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.dismiss();
        }
    }
}

impl LoadReporter for ErrorDialog {
    fn report(&mut self, error: &LoadError) {
        let title = match error {
            LoadError::InvalidPath => "No File Selected",
            LoadError::Io(_) => "Could Not Read File",
            LoadError::Deserialize(_) => "Invalid Workout File",
        };
        self.show_error(title, error.to_string());
    }
}
