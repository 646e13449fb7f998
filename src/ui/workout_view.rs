//! Editable view of every workout in the log.

use chrono::{Days, NaiveDate};
use egui::{DragValue, RichText, Ui};

use crate::i18n::ExerciseLabels;
use crate::storage::config::Theme;
use crate::ui::theme;
use crate::workouts::{Exercise, ExerciseType, Workout, WorkoutLog};

/// Reps given to a freshly added set when the exercise has none yet.
const DEFAULT_REPS: i32 = 8;

/// Renders the log as one editable grid per workout week.
#[derive(Debug, Clone)]
pub struct WorkoutView {
    labels: ExerciseLabels,
}

impl WorkoutView {
    pub fn new(labels: ExerciseLabels) -> Self {
        Self { labels }
    }

    /// Render the log. Edits go through the entity setters, so they reach
    /// [`WorkoutLog::poll_changes`].
    pub fn show(&self, ui: &mut Ui, log: &mut WorkoutLog, theme: Theme) {
        if log.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.label(
                    RichText::new("No workouts loaded")
                        .size(18.0)
                        .color(theme::secondary_text_color(theme)),
                );
                ui.label("Use Open to load a workout file, or New for a fresh week.");
            });
            return;
        }

        for index in 0..log.len() {
            if let Some(workout) = log.workout_mut(index) {
                ui.push_id(("workout", index), |ui| {
                    self.show_workout(ui, index, workout, theme);
                });
                ui.add_space(16.0);
            }
        }
    }

    fn show_workout(&self, ui: &mut Ui, index: usize, workout: &mut Workout, theme: Theme) {
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(format!(
                    "Week of {} to {}",
                    format_date(workout.start_date()),
                    format_date(workout.end_date())
                ))
                .size(18.0)
                .strong()
                .color(theme::accent_color(theme)),
            );

            if ui.small_button("◀").on_hover_text("Previous week").clicked() {
                shift_week(workout, false);
            }
            if ui.small_button("▶").on_hover_text("Next week").clicked() {
                shift_week(workout, true);
            }
        });

        ui.horizontal(|ui| {
            ui.label("Body weight (lb):");
            let mut body_weight = workout.body_weight();
            if ui
                .add(
                    DragValue::new(&mut body_weight)
                        .speed(0.1)
                        .range(0.0..=1000.0)
                        .max_decimals(1),
                )
                .changed()
            {
                workout.set_body_weight(body_weight);
            }

            ui.label(
                RichText::new(format!("{} exercises", workout.num_exercises()))
                    .color(theme::secondary_text_color(theme)),
            );
        });

        ui.add_space(8.0);

        let mut remove_index = None;
        egui::Grid::new(("exercise_grid", index))
            .striped(true)
            .num_columns(5)
            .spacing([16.0, 6.0])
            .show(ui, |ui| {
                ui.label(RichText::new("Exercise").strong());
                ui.label(RichText::new("Weight (lb)").strong());
                ui.label(RichText::new("Sets").strong());
                ui.label(RichText::new("Reps").strong());
                ui.label("");
                ui.end_row();

                for exercise_index in 0..workout.num_exercises() {
                    let Some(exercise) = workout.exercise_mut(exercise_index) else {
                        continue;
                    };
                    self.show_exercise_row(ui, (index, exercise_index), exercise);

                    if ui.small_button("✖").on_hover_text("Remove exercise").clicked() {
                        remove_index = Some(exercise_index);
                    }
                    ui.end_row();
                }
            });

        if let Some(exercise_index) = remove_index {
            workout.remove_exercise(exercise_index);
        }

        if ui.button("+ Exercise").clicked() {
            workout.push_exercise(Exercise::new(ExerciseType::default(), 0, Vec::new()));
        }
    }

    fn show_exercise_row(&self, ui: &mut Ui, id: (usize, usize), exercise: &mut Exercise) {
        let mut exercise_type = exercise.exercise_type();
        egui::ComboBox::from_id_salt(("exercise_type", id))
            .selected_text(self.labels.label(exercise_type))
            .width(200.0)
            .show_ui(ui, |ui| {
                for candidate in ExerciseType::all() {
                    ui.selectable_value(&mut exercise_type, *candidate, self.labels.label(*candidate));
                }
            });
        exercise.set_exercise_type(exercise_type);

        let mut weight = exercise.weight();
        if ui.add(DragValue::new(&mut weight).range(0..=500)).changed() {
            exercise.set_weight(weight);
        }

        ui.label(exercise.sets().to_string());

        ui.horizontal(|ui| {
            for set in 0..exercise.sets() {
                let Some(mut reps) = exercise.reps().get(set).copied() else {
                    continue;
                };
                if ui.add(DragValue::new(&mut reps).range(0..=200)).changed() {
                    exercise.set_rep(set, reps);
                }
            }

            if ui.small_button("+").on_hover_text("Add a set").clicked() {
                let reps = exercise.reps().as_slice().last().copied().unwrap_or(DEFAULT_REPS);
                exercise.push_rep(reps);
            }
            if exercise.sets() > 0
                && ui.small_button("−").on_hover_text("Remove last set").clicked()
            {
                exercise.remove_rep(exercise.sets() - 1);
            }
        });
    }
}

impl Default for WorkoutView {
    fn default() -> Self {
        Self::new(ExerciseLabels::english())
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Move both ends of the week by seven days. Returns `false` at the calendar limits.
fn shift_week(workout: &mut Workout, forward: bool) -> bool {
    let week = Days::new(7);
    let shifted = if forward {
        workout
            .start_date()
            .checked_add_days(week)
            .zip(workout.end_date().checked_add_days(week))
    } else {
        workout
            .start_date()
            .checked_sub_days(week)
            .zip(workout.end_date().checked_sub_days(week))
    };

    match shifted {
        Some((start, end)) => {
            workout.set_start_date(start);
            workout.set_end_date(end);
            true
        }
        None => false,
    }
}
