//! Workout log data model with change notification.

pub mod exercise;
pub mod log;
pub mod observable;
pub mod types;
pub mod workout;

pub use exercise::Exercise;
pub use log::{default_workout, LogEvent, WorkoutLog};
pub use observable::{CollectionChange, EventBus, ObservableVec, Subscription, SubscriptionId};
pub use types::{ExerciseType, Property};
pub use workout::{ExerciseChange, Workout};
