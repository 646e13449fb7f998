//! One recorded training week.

use chrono::NaiveDate;

use super::exercise::Exercise;
use super::observable::{CollectionChange, EventBus, ObservableVec, Subscription, SubscriptionId};
use super::types::Property;

/// A property change on the exercise at `index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExerciseChange {
    pub index: usize,
    pub property: Property,
}

/// One week's training: body weight, the date range, and the exercises performed.
///
/// A workout exclusively owns its exercises and watches each one's property
/// stream. The exercise count is never stored:
/// [`num_exercises`](Self::num_exercises) is the live sequence length.
#[derive(Debug)]
pub struct Workout {
    /// Body weight in pounds at the end of the week
    body_weight: f64,
    start_date: NaiveDate,
    end_date: NaiveDate,
    exercises: ObservableVec<Exercise>,
    /// Structural change hook on `exercises`; `None` once detached
    exercises_hook: Option<Subscription<CollectionChange>>,
    /// Watch on each owned exercise, index-aligned with `exercises`
    exercise_watches: Vec<Subscription<Property>>,
    events: EventBus<Property>,
}

impl Workout {
    /// Create a workout from its field values, wiring the exercises hook last.
    pub fn new(
        body_weight: f64,
        start_date: NaiveDate,
        end_date: NaiveDate,
        exercises: Vec<Exercise>,
    ) -> Self {
        let mut workout = Self {
            body_weight,
            start_date,
            end_date,
            exercises: ObservableVec::from(exercises),
            exercises_hook: None,
            exercise_watches: Vec::new(),
            events: EventBus::new(),
        };
        workout.watch_exercises();
        workout.hook_exercises();
        workout
    }

    /// Body weight in pounds.
    pub fn body_weight(&self) -> f64 {
        self.body_weight
    }

    /// Set the body weight. Non-finite values are ignored.
    pub fn set_body_weight(&mut self, body_weight: f64) {
        if !body_weight.is_finite() {
            tracing::warn!("Ignoring non-finite body weight {}", body_weight);
            return;
        }
        if self.body_weight.to_bits() != body_weight.to_bits() {
            self.body_weight = body_weight;
            self.events.emit(Property::BodyWeight);
        }
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn set_start_date(&mut self, start_date: NaiveDate) {
        if self.start_date != start_date {
            self.start_date = start_date;
            self.events.emit(Property::StartDate);
        }
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn set_end_date(&mut self, end_date: NaiveDate) {
        if self.end_date != end_date {
            self.end_date = end_date;
            self.events.emit(Property::EndDate);
        }
    }

    pub fn exercises(&self) -> &ObservableVec<Exercise> {
        &self.exercises
    }

    pub fn exercise(&self, index: usize) -> Option<&Exercise> {
        self.exercises.get(index)
    }

    /// Mutable access to one exercise. Edits go through the exercise's own
    /// setters and show up in [`exercise_changes`](Self::exercise_changes).
    pub fn exercise_mut(&mut self, index: usize) -> Option<&mut Exercise> {
        self.exercises.get_mut(index)
    }

    /// Replace the exercise sequence, handing the old one back.
    ///
    /// The hook and the per-exercise watches are removed from the old
    /// sequence before the new one is installed, watched and hooked. Both
    /// count and sequence notifications fire even if the count is unchanged.
    pub fn set_exercises(
        &mut self,
        exercises: impl Into<ObservableVec<Exercise>>,
    ) -> ObservableVec<Exercise> {
        self.unhook_exercises();
        self.unwatch_exercises();
        let old = std::mem::replace(&mut self.exercises, exercises.into());
        self.watch_exercises();
        self.hook_exercises();

        self.events.emit(Property::NumExercises);
        self.events.emit(Property::Exercises);
        old
    }

    /// Number of exercises in the week.
    pub fn num_exercises(&self) -> usize {
        self.exercises.len()
    }

    pub fn push_exercise(&mut self, mut exercise: Exercise) {
        self.exercise_watches.push(exercise.subscribe());
        self.exercises.push(exercise);
        self.relay_exercises_changes();
    }

    /// Insert an exercise at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > num_exercises()`.
    pub fn insert_exercise(&mut self, index: usize, mut exercise: Exercise) {
        let watch = exercise.subscribe();
        self.exercises.insert(index, exercise);
        self.exercise_watches.insert(index, watch);
        self.relay_exercises_changes();
    }

    /// Remove the exercise at `index`, closing its watch.
    pub fn remove_exercise(&mut self, index: usize) -> Option<Exercise> {
        let mut removed = self.exercises.remove(index)?;
        let watch = self.exercise_watches.remove(index);
        removed.unsubscribe(watch.id());
        self.relay_exercises_changes();
        Some(removed)
    }

    /// Swap the exercise at `index` for another, returning the old one
    /// with its watch closed. Out of range is a no-op.
    pub fn replace_exercise(&mut self, index: usize, mut exercise: Exercise) -> Option<Exercise> {
        if index >= self.exercises.len() {
            return None;
        }
        let watch = exercise.subscribe();
        let mut old = self.exercises.replace(index, exercise)?;
        let old_watch = std::mem::replace(&mut self.exercise_watches[index], watch);
        old.unsubscribe(old_watch.id());
        self.relay_exercises_changes();
        Some(old)
    }

    /// Clear every exercise, then close the watches and empty the sequence.
    pub fn clear(&mut self) {
        for exercise in self.exercises.iter_mut() {
            exercise.clear();
        }
        self.unwatch_exercises();
        self.exercises.clear();
        self.relay_exercises_changes();
    }

    /// Detach every exercise, close the watches, then release the exercises
    /// hook and empty the sequence. Children go first.
    pub fn detach(&mut self) {
        for exercise in self.exercises.iter_mut() {
            exercise.detach();
        }
        self.unwatch_exercises();
        self.unhook_exercises();
        self.exercises.clear();
    }

    /// Whether the exercises hook is wired.
    pub fn is_attached(&self) -> bool {
        self.exercises_hook
            .as_ref()
            .is_some_and(|hook| self.exercises.is_subscribed(hook.id()))
    }

    /// Drain pending property changes of the owned exercises.
    pub fn exercise_changes(&self) -> Vec<ExerciseChange> {
        self.exercise_watches
            .iter()
            .enumerate()
            .flat_map(|(index, watch)| {
                watch
                    .drain()
                    .into_iter()
                    .map(move |property| ExerciseChange { index, property })
            })
            .collect()
    }

    /// Subscribe to property change notifications.
    pub fn subscribe(&mut self) -> Subscription<Property> {
        self.events.subscribe()
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    /// Number of open property change subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.events.subscriber_count()
    }

    fn hook_exercises(&mut self) {
        self.exercises_hook = Some(self.exercises.subscribe());
    }

    fn unhook_exercises(&mut self) {
        if let Some(hook) = self.exercises_hook.take() {
            self.exercises.unsubscribe(hook.id());
        }
    }

    fn watch_exercises(&mut self) {
        self.exercise_watches = self
            .exercises
            .iter_mut()
            .map(|exercise| exercise.subscribe())
            .collect();
    }

    fn unwatch_exercises(&mut self) {
        for (exercise, watch) in self
            .exercises
            .iter_mut()
            .zip(self.exercise_watches.drain(..))
        {
            exercise.unsubscribe(watch.id());
        }
    }

    fn relay_exercises_changes(&mut self) {
        let changes = match &self.exercises_hook {
            Some(hook) => hook.drain(),
            None => return,
        };

        for change in changes {
            if change.changes_count() {
                self.events.emit(Property::NumExercises);
            }
            self.events.emit(Property::Exercises);
        }
    }
}

impl Default for Workout {
    fn default() -> Self {
        Self::new(0.0, NaiveDate::default(), NaiveDate::default(), Vec::new())
    }
}

impl PartialEq for Workout {
    fn eq(&self, other: &Self) -> bool {
        self.body_weight == other.body_weight
            && self.start_date == other.start_date
            && self.end_date == other.end_date
            && self.exercises.as_slice() == other.exercises.as_slice()
    }
}
