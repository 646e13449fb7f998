//! A single exercise: one movement at a fixed weight, with one rep count per set.

use super::observable::{CollectionChange, EventBus, ObservableVec, Subscription, SubscriptionId};
use super::types::{ExerciseType, Property};

/// One movement performed across a number of sets at a fixed weight.
///
/// The set count is never stored: [`sets`](Self::sets) is always the live
/// length of the reps sequence.
#[derive(Debug)]
pub struct Exercise {
    exercise_type: ExerciseType,
    /// Weight in pounds
    weight: i32,
    reps: ObservableVec<i32>,
    /// Structural change hook on `reps`; `None` once detached
    reps_hook: Option<Subscription<CollectionChange>>,
    events: EventBus<Property>,
}

impl Exercise {
    /// Create an exercise from its field values.
    ///
    /// The reps hook is wired after the sequence is populated, so
    /// construction publishes nothing.
    pub fn new(exercise_type: ExerciseType, weight: i32, reps: Vec<i32>) -> Self {
        let mut exercise = Self {
            exercise_type,
            weight,
            reps: ObservableVec::from(reps),
            reps_hook: None,
            events: EventBus::new(),
        };
        exercise.hook_reps();
        exercise
    }

    pub fn exercise_type(&self) -> ExerciseType {
        self.exercise_type
    }

    pub fn set_exercise_type(&mut self, exercise_type: ExerciseType) {
        if self.exercise_type != exercise_type {
            self.exercise_type = exercise_type;
            self.events.emit(Property::ExerciseType);
        }
    }

    /// Weight in pounds.
    pub fn weight(&self) -> i32 {
        self.weight
    }

    pub fn set_weight(&mut self, weight: i32) {
        if self.weight != weight {
            self.weight = weight;
            self.events.emit(Property::Weight);
        }
    }

    /// Rep count per performed set.
    pub fn reps(&self) -> &ObservableVec<i32> {
        &self.reps
    }

    /// Replace the reps sequence.
    ///
    /// The hook is removed from the old sequence before the new one is
    /// installed and hooked. The old sequence is handed back.
    pub fn set_reps(&mut self, reps: impl Into<ObservableVec<i32>>) -> ObservableVec<i32> {
        self.unhook_reps();
        let old = std::mem::replace(&mut self.reps, reps.into());
        self.hook_reps();

        self.events.emit(Property::Reps);
        old
    }

    /// Number of sets performed.
    pub fn sets(&self) -> usize {
        self.reps.len()
    }

    /// Record another set.
    pub fn push_rep(&mut self, reps: i32) {
        self.reps.push(reps);
        self.relay_reps_changes();
    }

    /// Insert a set at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > sets()`.
    pub fn insert_rep(&mut self, index: usize, reps: i32) {
        self.reps.insert(index, reps);
        self.relay_reps_changes();
    }

    /// Remove the set at `index`.
    pub fn remove_rep(&mut self, index: usize) -> Option<i32> {
        let removed = self.reps.remove(index);
        self.relay_reps_changes();
        removed
    }

    /// Change the rep count of the set at `index`, returning the old count.
    pub fn set_rep(&mut self, index: usize, reps: i32) -> Option<i32> {
        if self.reps.get(index) == Some(&reps) {
            return Some(reps);
        }
        let old = self.reps.replace(index, reps);
        self.relay_reps_changes();
        old
    }

    /// Empty the reps sequence.
    pub fn clear(&mut self) {
        self.reps.clear();
        self.relay_reps_changes();
    }

    /// Release the reps hook and empty the sequence. Safe to call repeatedly.
    pub fn detach(&mut self) {
        self.unhook_reps();
        self.clear();
    }

    /// Whether the reps hook is wired.
    pub fn is_attached(&self) -> bool {
        self.reps_hook
            .as_ref()
            .is_some_and(|hook| self.reps.is_subscribed(hook.id()))
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

    fn hook_reps(&mut self) {
        self.reps_hook = Some(self.reps.subscribe());
    }

    fn unhook_reps(&mut self) {
        if let Some(hook) = self.reps_hook.take() {
            self.reps.unsubscribe(hook.id());
        }
    }

    fn relay_reps_changes(&mut self) {
        let changes = match &self.reps_hook {
            Some(hook) => hook.drain(),
            None => return,
        };

        for change in changes {
            self.events.emit(Property::Reps);
            if change.changes_count() {
                self.events.emit(Property::Sets);
            }
        }
    }
}

impl Default for Exercise {
    fn default() -> Self {
        Self::new(ExerciseType::default(), 0, Vec::new())
    }
}

impl PartialEq for Exercise {
    fn eq(&self, other: &Self) -> bool {
        self.exercise_type == other.exercise_type
            && self.weight == other.weight
            && self.reps.as_slice() == other.reps.as_slice()
    }
}
