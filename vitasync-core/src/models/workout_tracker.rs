use super::workout::Workout;

/// Append-only history of workout sessions, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkoutTracker {
    workouts: Vec<Workout>,
}

impl WorkoutTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a workout. History is kept in insertion order, not sorted by date.
    pub fn add_workout(&mut self, workout: Workout) {
        self.workouts.push(workout);
    }

    pub fn workouts(&self) -> Vec<Workout> {
        self.workouts.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }
}
