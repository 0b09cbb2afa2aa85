use std::fmt;

use crate::error::ModelError;

/// A single set of an exercise, tracking completed reps against a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseSet {
    target_reps: i32,
    completed_reps: i32,
}

impl ExerciseSet {
    pub fn new(target_reps: i32) -> Result<Self, ModelError> {
        if target_reps <= 0 {
            return Err(ModelError::NonPositiveTargetReps(target_reps));
        }
        Ok(Self {
            target_reps,
            completed_reps: 0,
        })
    }

    /// Marks one rep as done. Saturates at the target.
    pub fn check_off_rep(&mut self) {
        if self.completed_reps < self.target_reps {
            self.completed_reps += 1;
        }
    }

    pub fn target_reps(&self) -> i32 {
        self.target_reps
    }

    pub fn completed_reps(&self) -> i32 {
        self.completed_reps
    }

    pub fn is_completed(&self) -> bool {
        self.completed_reps == self.target_reps
    }
}

impl fmt::Display for ExerciseSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} reps completed",
            self.completed_reps, self.target_reps
        )
    }
}
