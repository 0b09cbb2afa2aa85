//! Conversion between [`VitaSyncData`] and its JSON text.
//!
//! Reading never assigns model fields directly. It replays the same
//! constructors and appends a caller would use, so every invariant is
//! checked again on load.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;

use super::error::DocumentError;
use crate::models::{Exercise, ExerciseSet, Meal, Recipe, VitaSyncData, Workout};

const INDENT: &[u8] = b"    ";

#[derive(Debug, Serialize, Deserialize)]
struct DocumentRecord {
    name: String,
    workouts: Vec<WorkoutRecord>,
    meals: Vec<MealRecord>,
    recipes: Vec<RecipeRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct WorkoutRecord {
    date: String,
    exercises: Vec<ExerciseRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ExerciseRecord {
    name: String,
    sets: Vec<SetRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SetRecord {
    target_reps: i32,
    completed_reps: i32,
}

#[derive(Debug, Serialize, Deserialize)]
struct MealRecord {
    name: String,
    protein: i32,
    carbs: i32,
    fat: i32,
}

#[derive(Debug, Serialize, Deserialize)]
struct RecipeRecord {
    name: String,
    instructions: String,
    ingredients: Vec<String>,
}

/// Serializes the aggregate to a pretty-printed JSON document.
pub fn write_document(data: &VitaSyncData) -> Result<String, DocumentError> {
    let record = DocumentRecord::from(data);

    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    record
        .serialize(&mut serializer)
        .map_err(DocumentError::Encode)?;

    String::from_utf8(buf).map_err(DocumentError::NotUtf8)
}

/// Parses a JSON document and rebuilds the aggregate it describes.
pub fn read_document(text: &str) -> Result<VitaSyncData, DocumentError> {
    let record: DocumentRecord = serde_json::from_str(text).map_err(DocumentError::Parse)?;
    record.into_data()
}

impl From<&VitaSyncData> for DocumentRecord {
    fn from(data: &VitaSyncData) -> Self {
        Self {
            name: data.name().to_string(),
            workouts: data
                .workout_tracker()
                .workouts()
                .iter()
                .map(WorkoutRecord::from)
                .collect(),
            meals: data.meal_plan().meals().iter().map(MealRecord::from).collect(),
            recipes: data
                .recipe_library()
                .all_recipes()
                .iter()
                .map(RecipeRecord::from)
                .collect(),
        }
    }
}

impl From<&Workout> for WorkoutRecord {
    fn from(workout: &Workout) -> Self {
        Self {
            date: workout.date().to_string(),
            exercises: workout.exercises().iter().map(ExerciseRecord::from).collect(),
        }
    }
}

impl From<&Exercise> for ExerciseRecord {
    fn from(exercise: &Exercise) -> Self {
        Self {
            name: exercise.name().to_string(),
            sets: exercise.sets().iter().map(SetRecord::from).collect(),
        }
    }
}

impl From<&ExerciseSet> for SetRecord {
    fn from(set: &ExerciseSet) -> Self {
        Self {
            target_reps: set.target_reps(),
            completed_reps: set.completed_reps(),
        }
    }
}

impl From<&Meal> for MealRecord {
    fn from(meal: &Meal) -> Self {
        Self {
            name: meal.name().to_string(),
            protein: meal.protein(),
            carbs: meal.carbs(),
            fat: meal.fat(),
        }
    }
}

impl From<&Recipe> for RecipeRecord {
    fn from(recipe: &Recipe) -> Self {
        Self {
            name: recipe.name().to_string(),
            instructions: recipe.instructions().to_string(),
            ingredients: recipe.ingredients(),
        }
    }
}

impl DocumentRecord {
    fn into_data(self) -> Result<VitaSyncData, DocumentError> {
        let mut data = VitaSyncData::new(self.name);

        for workout in self.workouts {
            data.workout_tracker_mut().add_workout(workout.into_workout()?);
        }
        for meal in self.meals {
            data.meal_plan_mut()
                .add_meal(Meal::new(meal.name, meal.protein, meal.carbs, meal.fat)?);
        }
        for recipe in self.recipes {
            data.recipe_library_mut().add_recipe(Recipe::new(
                recipe.name,
                recipe.ingredients,
                recipe.instructions,
            )?);
        }

        Ok(data)
    }
}

impl WorkoutRecord {
    fn into_workout(self) -> Result<Workout, DocumentError> {
        let date = self
            .date
            .parse::<NaiveDate>()
            .map_err(|e| DocumentError::InvalidDate(self.date.clone(), e))?;

        let mut workout = Workout::new(date);
        for exercise in self.exercises {
            workout.add_exercise(exercise.into_exercise()?);
        }
        Ok(workout)
    }
}

impl ExerciseRecord {
    fn into_exercise(self) -> Result<Exercise, DocumentError> {
        let mut exercise = Exercise::new(self.name)?;
        for set in self.sets {
            exercise.add_set(set.into_set()?);
        }
        Ok(exercise)
    }
}

impl SetRecord {
    /// Restores progress by checking off reps one at a time, so a stored
    /// count above the target lands on the target.
    fn into_set(self) -> Result<ExerciseSet, DocumentError> {
        let mut set = ExerciseSet::new(self.target_reps)?;
        let replays = self.completed_reps.clamp(0, self.target_reps);
        for _ in 0..replays {
            set.check_off_rep();
        }
        Ok(set)
    }
}
