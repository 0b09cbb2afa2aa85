mod exercise;
mod exercise_set;
mod meal;
mod meal_plan;
mod recipe;
mod recipe_library;
mod vita_sync_data;
mod workout;
mod workout_tracker;

pub use exercise::Exercise;
pub use exercise_set::ExerciseSet;
pub use meal::Meal;
pub use meal_plan::{MacroTotals, MealPlan};
pub use recipe::Recipe;
pub use recipe_library::RecipeLibrary;
pub use vita_sync_data::VitaSyncData;
pub use workout::Workout;
pub use workout_tracker::WorkoutTracker;
