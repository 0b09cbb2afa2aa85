use super::meal_plan::MealPlan;
use super::recipe_library::RecipeLibrary;
use super::workout_tracker::WorkoutTracker;

/// The whole persisted state: workouts, meals and recipes under one name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VitaSyncData {
    name: String,
    workout_tracker: WorkoutTracker,
    meal_plan: MealPlan,
    recipe_library: RecipeLibrary,
}

impl VitaSyncData {
    pub const DEFAULT_NAME: &'static str = "My VitaSync Data";

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            workout_tracker: WorkoutTracker::new(),
            meal_plan: MealPlan::new(),
            recipe_library: RecipeLibrary::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn workout_tracker(&self) -> &WorkoutTracker {
        &self.workout_tracker
    }

    pub fn workout_tracker_mut(&mut self) -> &mut WorkoutTracker {
        &mut self.workout_tracker
    }

    pub fn meal_plan(&self) -> &MealPlan {
        &self.meal_plan
    }

    pub fn meal_plan_mut(&mut self) -> &mut MealPlan {
        &mut self.meal_plan
    }

    pub fn recipe_library(&self) -> &RecipeLibrary {
        &self.recipe_library
    }

    pub fn recipe_library_mut(&mut self) -> &mut RecipeLibrary {
        &mut self.recipe_library
    }
}

impl Default for VitaSyncData {
    fn default() -> Self {
        Self::new(Self::DEFAULT_NAME)
    }
}
