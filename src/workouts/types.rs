//! Exercise identities and observable property names.

/// One of the fixed dumbbell/bodyweight movements tracked in a workout week.
///
/// The declaration order is the persisted ordinal and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExerciseType {
    #[default]
    DumbbellChestPress,
    DumbbellPullover,
    DumbbellShoulderPress,
    DumbbellBicepCurl,
    TricepsKickback,
    WristCurl,
    ReverseWristCurl,
    Crunch,
    Squat,
    Lunge,
}

impl ExerciseType {
    /// Number of exercise types.
    pub const COUNT: usize = 10;

    /// Get all exercise types in ordinal order.
    pub fn all() -> &'static [ExerciseType] {
        &[
            ExerciseType::DumbbellChestPress,
            ExerciseType::DumbbellPullover,
            ExerciseType::DumbbellShoulderPress,
            ExerciseType::DumbbellBicepCurl,
            ExerciseType::TricepsKickback,
            ExerciseType::WristCurl,
            ExerciseType::ReverseWristCurl,
            ExerciseType::Crunch,
            ExerciseType::Squat,
            ExerciseType::Lunge,
        ]
    }

    /// Persisted ordinal (0-9).
    pub fn ordinal(&self) -> i32 {
        *self as i32
    }

    /// Look up a type by its persisted ordinal.
    pub fn from_ordinal(ordinal: i32) -> Option<Self> {
        usize::try_from(ordinal)
            .ok()
            .and_then(|index| Self::all().get(index).copied())
    }

    /// Stable symbolic name.
    pub fn name(&self) -> &'static str {
        match self {
            ExerciseType::DumbbellChestPress => "DumbbellChestPress",
            ExerciseType::DumbbellPullover => "DumbbellPullover",
            ExerciseType::DumbbellShoulderPress => "DumbbellShoulderPress",
            ExerciseType::DumbbellBicepCurl => "DumbbellBicepCurl",
            ExerciseType::TricepsKickback => "TricepsKickback",
            ExerciseType::WristCurl => "WristCurl",
            ExerciseType::ReverseWristCurl => "ReverseWristCurl",
            ExerciseType::Crunch => "Crunch",
            ExerciseType::Squat => "Squat",
            ExerciseType::Lunge => "Lunge",
        }
    }

    /// Key of the human readable label in a label table.
    pub fn description_key(&self) -> String {
        format!("{}.Description", self.name())
    }
}

impl std::fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Observable property of an [`Exercise`](super::Exercise) or
/// [`Workout`](super::Workout).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    ExerciseType,
    Weight,
    Reps,
    /// Derived from the reps length
    Sets,
    BodyWeight,
    StartDate,
    EndDate,
    /// Derived from the exercises length
    NumExercises,
    Exercises,
}

impl Property {
    /// Canonical property name.
    pub fn name(&self) -> &'static str {
        match self {
            Property::ExerciseType => "ExerciseType",
            Property::Weight => "Weight",
            Property::Reps => "Reps",
            Property::Sets => "Sets",
            Property::BodyWeight => "BodyWeight",
            Property::StartDate => "StartDate",
            Property::EndDate => "EndDate",
            Property::NumExercises => "NumExercises",
            Property::Exercises => "Exercises",
        }
    }

    /// Field key used in persisted records.
    pub fn key(&self) -> String {
        self.name().to_lowercase()
    }

    /// Key of the `index`-th child of a sequence property (`reps_0`, `exercises_3`).
    pub fn indexed_key(&self, index: usize) -> String {
        format!("{}_{}", self.key(), index)
    }
}

impl std::fmt::Display for Property {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
