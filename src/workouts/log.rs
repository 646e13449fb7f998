//! The workout log: the displayed sequence of workouts.

use std::path::Path;

use chrono::NaiveDate;

use super::exercise::Exercise;
use super::observable::{CollectionChange, ObservableVec, Subscription};
use super::types::{ExerciseType, Property};
use super::workout::Workout;
use crate::storage::file::{self, LoadReporter};
use crate::storage::SaveError;

/// Something the presentation layer should redisplay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogEvent {
    /// The held sequence itself changed
    Collection(CollectionChange),
    /// A property of the workout at `index` changed
    Workout { index: usize, property: Property },
    /// A property of one exercise of the workout at `workout` changed
    Exercise {
        workout: usize,
        exercise: usize,
        property: Property,
    },
}

/// Ordered sequence of workouts, the single source of truth for the display.
///
/// Every held workout has its property stream watched by the log; a
/// workout leaving the log is detached and its watch closed first.
#[derive(Debug)]
pub struct WorkoutLog {
    workouts: ObservableVec<Workout>,
    /// Watch on the held sequence
    display_watch: Subscription<CollectionChange>,
    /// Watch on each held workout, index-aligned with `workouts`
    workout_watches: Vec<Subscription<Property>>,
}

impl WorkoutLog {
    /// Create a log holding the built-in default week.
    pub fn new() -> Self {
        let mut log = Self::empty();
        log.load_default();
        log
    }

    /// Create a log holding nothing.
    pub fn empty() -> Self {
        let mut workouts = ObservableVec::new();
        let display_watch = workouts.subscribe();
        Self {
            workouts,
            display_watch,
            workout_watches: Vec::new(),
        }
    }

    pub fn workouts(&self) -> &[Workout] {
        self.workouts.as_slice()
    }

    pub fn get(&self, index: usize) -> Option<&Workout> {
        self.workouts.get(index)
    }

    pub fn workout_mut(&mut self, index: usize) -> Option<&mut Workout> {
        self.workouts.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }

    /// Append a workout and start watching it.
    pub fn push(&mut self, mut workout: Workout) {
        self.workout_watches.push(workout.subscribe());
        self.workouts.push(workout);
    }

    /// Detach every held workout, close its watch, and empty the log.
    ///
    /// The discarded workouts are handed back. Safe to call when empty.
    pub fn clear(&mut self) -> Vec<Workout> {
        for (workout, watch) in self
            .workouts
            .iter_mut()
            .zip(self.workout_watches.drain(..))
        {
            workout.detach();
            workout.unsubscribe(watch.id());
        }

        let discarded = self.workouts.clear();
        tracing::debug!("Cleared {} workouts from the log", discarded.len());
        discarded
    }

    /// Replace the contents with the built-in default week.
    pub fn load_default(&mut self) {
        self.clear();
        self.push(default_workout());
        tracing::info!("Loaded default workout");
    }

    /// Replace the contents with the workouts stored at `path`.
    ///
    /// With no path (or an empty one) nothing happens and `false` is
    /// returned. Otherwise the log is cleared whatever the outcome; faults
    /// go to `reporter` and leave the log empty. Returns `true` only if the
    /// whole file was read and decoded.
    pub fn load_from_file<R>(&mut self, path: Option<&Path>, reporter: &mut R) -> bool
    where
        R: LoadReporter + ?Sized,
    {
        let path = match path {
            Some(path) if !path.as_os_str().is_empty() => path,
            _ => {
                tracing::debug!("No workout file selected");
                return false;
            }
        };

        tracing::info!("Loading workout file {}", path.display());

        let (loaded, workouts) = match file::read_workouts(path) {
            Ok(workouts) => (true, workouts),
            Err(e) => {
                tracing::error!("Failed to load {}: {}", path.display(), e);
                reporter.report(&e);
                (false, Vec::new())
            }
        };

        self.clear();
        for workout in workouts {
            self.push(workout);
        }

        if loaded {
            tracing::info!("Loaded {} workouts", self.len());
        }
        loaded
    }

    /// Write every held workout to `path`.
    pub fn save_to_file(&self, path: &Path) -> Result<(), SaveError> {
        file::write_workouts(path, self.workouts.as_slice())?;
        tracing::info!("Saved {} workouts to {}", self.len(), path.display());
        Ok(())
    }

    /// Drain pending changes for redisplay, down to individual exercises.
    pub fn poll_changes(&self) -> Vec<LogEvent> {
        let mut events: Vec<LogEvent> = self
            .display_watch
            .drain()
            .into_iter()
            .map(LogEvent::Collection)
            .collect();

        for (index, (workout, watch)) in self
            .workouts
            .iter()
            .zip(&self.workout_watches)
            .enumerate()
        {
            events.extend(
                watch
                    .drain()
                    .into_iter()
                    .map(|property| LogEvent::Workout { index, property }),
            );
            events.extend(workout.exercise_changes().into_iter().map(|change| {
                LogEvent::Exercise {
                    workout: index,
                    exercise: change.index,
                    property: change.property,
                }
            }));
        }

        events
    }
}

impl Default for WorkoutLog {
    fn default() -> Self {
        Self::new()
    }
}

/// The built-in week shown before any file is opened: one exercise per
/// type, each at 15 lb for sets of 8, 8 and 10.
pub fn default_workout() -> Workout {
    let exercises = ExerciseType::all()
        .iter()
        .map(|exercise_type| Exercise::new(*exercise_type, 15, vec![8, 8, 10]))
        .collect();

    Workout::new(
        113.9,
        NaiveDate::from_ymd_opt(2015, 1, 2).unwrap_or_default(),
        NaiveDate::from_ymd_opt(2015, 1, 8).unwrap_or_default(),
        exercises,
    )
}
