//! Unit tests for change notification on the workout model.

use chrono::NaiveDate;
use ironweek::workouts::{
    default_workout, CollectionChange, Exercise, ExerciseType, LogEvent, Property, Workout,
    WorkoutLog,
};

#[test]
fn test_same_value_is_silent_new_value_notifies_once() {
    let mut workout = default_workout();
    let exercise = workout.exercise_mut(0).expect("default week has exercises");
    let sub = exercise.subscribe();

    exercise.set_weight(15);
    assert!(sub.drain().is_empty());

    exercise.set_weight(17);
    assert_eq!(sub.drain(), vec![Property::Weight]);

    exercise.set_weight(17);
    assert!(sub.drain().is_empty());
}

#[test]
fn test_sets_tracks_reps_through_every_edit() {
    let mut exercise = Exercise::new(ExerciseType::Squat, 30, vec![10]);
    assert_eq!(exercise.sets(), exercise.reps().len());

    exercise.push_rep(10);
    exercise.insert_rep(0, 12);
    assert_eq!(exercise.sets(), 3);

    exercise.remove_rep(1);
    assert_eq!(exercise.sets(), 2);

    exercise.set_reps(vec![5, 5, 5, 5]);
    assert_eq!(exercise.sets(), 4);

    exercise.clear();
    assert_eq!(exercise.sets(), 0);
    assert_eq!(exercise.sets(), exercise.reps().len());
}

#[test]
fn test_num_exercises_tracks_exercises_through_every_edit() {
    let mut workout = Workout::new(
        140.0,
        NaiveDate::from_ymd_opt(2015, 3, 1).unwrap(),
        NaiveDate::from_ymd_opt(2015, 3, 7).unwrap(),
        Vec::new(),
    );
    assert_eq!(workout.num_exercises(), 0);

    workout.push_exercise(Exercise::default());
    workout.insert_exercise(0, Exercise::new(ExerciseType::Crunch, 0, vec![30]));
    assert_eq!(workout.num_exercises(), 2);

    workout.remove_exercise(1);
    assert_eq!(workout.num_exercises(), 1);
    assert_eq!(
        workout.exercise(0).map(|e| e.exercise_type()),
        Some(ExerciseType::Crunch)
    );

    workout.clear();
    assert_eq!(workout.num_exercises(), 0);
    assert_eq!(workout.num_exercises(), workout.exercises().len());
}

#[test]
fn test_reset_notifies_derived_count_for_reps_and_exercises() {
    let mut workout = default_workout();
    let workout_sub = workout.subscribe();
    let exercise_sub = workout.exercise_mut(3).unwrap().subscribe();

    workout.clear();

    assert_eq!(exercise_sub.drain(), vec![Property::Reps, Property::Sets]);
    assert_eq!(
        workout_sub.drain(),
        vec![Property::NumExercises, Property::Exercises]
    );
}

#[test]
fn test_set_exercises_rewires_detached_workout() {
    let mut log = WorkoutLog::new();
    let mut workout = log.clear().remove(0);
    let sub = workout.subscribe();

    workout.push_exercise(Exercise::new(ExerciseType::Lunge, 10, vec![10]));
    assert!(sub.drain().is_empty());

    workout.set_exercises(Vec::<Exercise>::new());
    workout.push_exercise(Exercise::default());

    assert!(workout.is_attached());
    assert_eq!(
        sub.drain(),
        vec![
            Property::NumExercises,
            Property::Exercises,
            Property::NumExercises,
            Property::Exercises,
        ]
    );
}

#[test]
fn test_detached_workout_is_silent_on_structural_edits() {
    let mut log = WorkoutLog::new();
    let mut workout = log.clear().remove(0);
    let sub = workout.subscribe();

    workout.push_exercise(Exercise::default());
    workout.remove_exercise(0);
    workout.clear();

    assert!(sub.drain().is_empty());
    assert!(!workout.is_attached());
    assert_eq!(log.poll_changes().last(), Some(&LogEvent::Collection(CollectionChange::Reset)));
}

#[test]
fn test_log_sees_edits_of_every_held_workout() {
    let mut log = WorkoutLog::empty();
    log.push(default_workout());
    log.push(default_workout());
    log.poll_changes();

    log.workout_mut(1).unwrap().push_exercise(Exercise::default());

    assert_eq!(
        log.poll_changes(),
        vec![
            LogEvent::Workout {
                index: 1,
                property: Property::NumExercises,
            },
            LogEvent::Workout {
                index: 1,
                property: Property::Exercises,
            },
        ]
    );
}

#[test]
fn test_log_sees_exercise_edits_down_to_reps() {
    let mut log = WorkoutLog::empty();
    log.push(default_workout());
    log.push(default_workout());
    log.poll_changes();

    let workout = log.workout_mut(1).unwrap();
    let curl = workout.exercise_mut(3).unwrap();
    curl.set_exercise_type(ExerciseType::Squat);
    curl.set_rep(0, 9);
    let mut removed = workout.remove_exercise(0).unwrap();
    removed.set_weight(40);

    assert_eq!(
        log.poll_changes(),
        vec![
            LogEvent::Workout {
                index: 1,
                property: Property::NumExercises,
            },
            LogEvent::Workout {
                index: 1,
                property: Property::Exercises,
            },
            // the edited exercise has moved up one slot by the time of the poll
            LogEvent::Exercise {
                workout: 1,
                exercise: 2,
                property: Property::ExerciseType,
            },
            LogEvent::Exercise {
                workout: 1,
                exercise: 2,
                property: Property::Reps,
            },
        ]
    );
}
