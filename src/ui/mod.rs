//! UI module for egui-based user interface.

pub mod error_dialog;
pub mod theme;
pub mod workout_view;

pub use error_dialog::ErrorDialog;
pub use workout_view::WorkoutView;
