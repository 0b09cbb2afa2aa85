use clap::ValueEnum;
use serde_json::Value;

use vitasync_core::{write_document, VitaSyncData};

mod config_cmd;
mod data;
mod meal;
mod recipe;
mod workout;

pub use config_cmd::ConfigCommand;
pub use data::{ExportCommand, ImportCommand};
pub use meal::MealCommand;
pub use recipe::RecipeCommand;
pub use workout::WorkoutCommand;

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// One top-level array (`workouts`, `meals` or `recipes`) of the data
/// document, in the same shape it is persisted in.
fn document_section(data: &VitaSyncData, key: &str) -> Result<Value, Box<dyn std::error::Error>> {
    let mut document: Value = serde_json::from_str(&write_document(data)?)?;
    document
        .get_mut(key)
        .map(Value::take)
        .ok_or_else(|| format!("Document has no '{}' section", key).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use vitasync_core::{Recipe, Workout};

    #[test]
    fn test_document_section_workouts() {
        let mut data = VitaSyncData::default();
        data.workout_tracker_mut()
            .add_workout(Workout::new(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()));

        let workouts = document_section(&data, "workouts").unwrap();
        let workouts = workouts.as_array().unwrap();
        assert_eq!(workouts.len(), 1);
        assert_eq!(workouts[0]["date"], "2025-01-01");
        assert!(workouts[0]["exercises"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_document_section_recipes() {
        let mut data = VitaSyncData::default();
        data.recipe_library_mut()
            .add_recipe(Recipe::new("Toast", vec!["bread".into()], "Toast it.").unwrap());

        let recipes = document_section(&data, "recipes").unwrap();
        assert_eq!(recipes[0]["name"], "Toast");
        assert_eq!(recipes[0]["ingredients"][0], "bread");
        assert_eq!(recipes[0]["instructions"], "Toast it.");
    }

    #[test]
    fn test_document_section_unknown_key() {
        let err = document_section(&VitaSyncData::default(), "dishes").unwrap_err();
        assert!(err.to_string().contains("dishes"));
    }
}
