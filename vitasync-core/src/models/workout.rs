use chrono::NaiveDate;
use std::fmt;

use super::exercise::Exercise;

/// A workout session on a specific date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workout {
    date: NaiveDate,
    exercises: Vec<Exercise>,
}

impl Workout {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            exercises: Vec::new(),
        }
    }

    pub fn add_exercise(&mut self, exercise: Exercise) {
        self.exercises.push(exercise);
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Snapshot of the exercises in insertion order.
    pub fn exercises(&self) -> Vec<Exercise> {
        self.exercises.clone()
    }
}

impl fmt::Display for Workout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Date: {}", self.date)?;
        for exercise in &self.exercises {
            writeln!(f, "  Exercise: {}", exercise.name())?;
            for (i, set) in exercise.sets().iter().enumerate() {
                writeln!(f, "    Set {}: {}", i + 1, set)?;
            }
        }
        Ok(())
    }
}
