use crate::error::ModelError;

use super::exercise_set::ExerciseSet;

/// A named exercise made up of one or more sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    name: String,
    sets: Vec<ExerciseSet>,
}

impl Exercise {
    pub fn new(name: impl Into<String>) -> Result<Self, ModelError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ModelError::EmptyName("Exercise"));
        }
        Ok(Self {
            name,
            sets: Vec::new(),
        })
    }

    pub fn add_set(&mut self, set: ExerciseSet) {
        self.sets.push(set);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Snapshot of the sets in insertion order.
    pub fn sets(&self) -> Vec<ExerciseSet> {
        self.sets.clone()
    }
}
