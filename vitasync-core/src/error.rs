//! Validation errors raised by model constructors.

use thiserror::Error;

/// A constructor received a value that violates the entity's invariants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("{0} name cannot be empty")]
    EmptyName(&'static str),

    #[error("Target reps must be greater than 0, got {0}")]
    NonPositiveTargetReps(i32),

    #[error("Macronutrients cannot be negative")]
    NegativeMacronutrient,

    #[error("Ingredients cannot be absent")]
    MissingIngredients,

    #[error("Instructions cannot be absent")]
    MissingInstructions,
}
