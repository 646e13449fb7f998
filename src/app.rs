//! Main application state and egui integration.
//!
//! The shell owns the workout log and routes the New/Open/Save/Save As/Close
//! commands to it.

use std::path::{Path, PathBuf};

use eframe::egui;

use ironweek::storage::config::{self, AppConfig, Theme};
use ironweek::storage::FileFormat;
use ironweek::ui::theme;
use ironweek::ui::{ErrorDialog, WorkoutView};
use ironweek::workouts::WorkoutLog;
use ironweek::ExerciseLabels;

/// Main application state.
pub struct IronWeekApp {
    /// Displayed workouts
    log: WorkoutLog,
    /// Application configuration
    config: AppConfig,
    /// Workout grid renderer
    view: WorkoutView,
    /// Pending error, if any
    error_dialog: ErrorDialog,
    /// File the log was loaded from or last saved to
    current_file: Option<PathBuf>,
    /// Whether the log changed since it was loaded or saved
    modified: bool,
    /// Status bar text
    status: String,
}

impl IronWeekApp {
    /// Create a new application instance.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = config::load_config().unwrap_or_else(|e| {
            tracing::warn!("Failed to load config, using defaults: {}", e);
            AppConfig::default()
        });

        cc.egui_ctx.set_visuals(theme::visuals(config.ui.theme));
        cc.egui_ctx.set_zoom_factor(config.ui.font_scale);

        let mut app = Self {
            log: WorkoutLog::new(),
            config,
            view: WorkoutView::new(ExerciseLabels::english()),
            error_dialog: ErrorDialog::new(),
            current_file: None,
            modified: false,
            status: "Showing the built-in week".to_string(),
        };

        if let Some(path) = app.config.startup_file().map(Path::to_path_buf) {
            app.open_path(Some(path));
        }
        app.mark_clean();

        app
    }

    /// Replace the log with the built-in week.
    fn new_log(&mut self) {
        self.log.load_default();
        self.current_file = None;
        self.status = "Showing the built-in week".to_string();
        self.mark_clean();
    }

    /// Ask for a file and load it.
    fn open(&mut self) {
        let path = rfd::FileDialog::new()
            .add_filter(
                "Workout log",
                &[FileFormat::Binary.extension(), FileFormat::Json.extension()],
            )
            .add_filter("All files", &["*"])
            .pick_file();
        self.open_path(path);
    }

    fn open_path(&mut self, path: Option<PathBuf>) {
        if path.is_none() {
            return;
        }

        if self.log.load_from_file(path.as_deref(), &mut self.error_dialog) {
            self.status = format!("Loaded {} workouts", self.log.len());
            if let Some(path) = path {
                self.remember_file(path);
            }
        } else {
            self.current_file = None;
            self.status = "Load failed".to_string();
        }
        self.mark_clean();
    }

    /// Save to the current file, or ask for one.
    fn save(&mut self) {
        match self.current_file.clone() {
            Some(path) => self.save_to(path),
            None => self.save_as(),
        }
    }

    /// Ask for a file and save to it.
    fn save_as(&mut self) {
        let path = rfd::FileDialog::new()
            .add_filter("Workout log", &[FileFormat::Binary.extension()])
            .add_filter("Workout log (JSON)", &[FileFormat::Json.extension()])
            .set_file_name(format!("workouts.{}", FileFormat::Binary.extension()))
            .save_file();

        if let Some(path) = path {
            self.save_to(path);
        }
    }

    fn save_to(&mut self, path: PathBuf) {
        match self.log.save_to_file(&path) {
            Ok(()) => {
                self.status = format!("Saved to {}", path.display());
                self.remember_file(path);
                self.mark_clean();
            }
            Err(e) => {
                tracing::error!("Failed to save {}: {}", path.display(), e);
                self.error_dialog.show_error("Could Not Save", e.to_string());
            }
        }
    }

    /// Track `path` as the current file and persist it as the last file used.
    fn remember_file(&mut self, path: PathBuf) {
        self.config.last_file = Some(path.clone());
        self.current_file = Some(path);
        self.persist_config();
    }

    fn persist_config(&self) {
        if let Err(e) = config::save_config(&self.config) {
            tracing::warn!("Failed to save config: {}", e);
        }
    }

    fn mark_clean(&mut self) {
        self.log.poll_changes();
        self.modified = false;
    }

    fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.config.ui.theme = match self.config.ui.theme {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        };
        ctx.set_visuals(theme::visuals(self.config.ui.theme));
        self.persist_config();
    }

    fn title(&self) -> String {
        let name = self
            .current_file
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Untitled".to_string());
        if self.modified {
            format!("{} •", name)
        } else {
            name
        }
    }
}

impl eframe::App for IronWeekApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Keyboard shortcuts
        if ctx.input_mut(|i| i.consume_key(egui::Modifiers::COMMAND, egui::Key::O)) {
            self.open();
        }
        if ctx.input_mut(|i| i.consume_key(egui::Modifiers::COMMAND, egui::Key::S)) {
            self.save();
        }

        // Command bar
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("New").clicked() {
                    self.new_log();
                }
                if ui.button("Open…").clicked() {
                    self.open();
                }
                if ui.button("Save").clicked() {
                    self.save();
                }
                if ui.button("Save As…").clicked() {
                    self.save_as();
                }
                if ui.button("Close").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let theme_label = match self.config.ui.theme {
                        Theme::Dark => "Light mode",
                        Theme::Light => "Dark mode",
                    };
                    if ui.button(theme_label).clicked() {
                        self.toggle_theme(ctx);
                    }

                    ui.label(self.title());
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(&self.status);
        });

        let theme = self.config.ui.theme;
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.view.show(ui, &mut self.log, theme);
            });
        });

        let changes = self.log.poll_changes();
        if !changes.is_empty() {
            tracing::debug!("{} pending changes", changes.len());
            self.modified = true;
        }

        self.error_dialog.show(ctx, theme);
    }
}
