//! VitaSync Core Library
//!
//! Workout, meal plan and recipe models plus the JSON document they are
//! persisted to.

pub mod error;
pub mod models;
pub mod persistence;

pub use error::ModelError;
pub use models::{
    Exercise, ExerciseSet, MacroTotals, Meal, MealPlan, Recipe, RecipeLibrary, VitaSyncData,
    Workout, WorkoutTracker,
};
pub use persistence::{read_document, write_document, DocumentError, DocumentStore};
