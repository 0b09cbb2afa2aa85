use std::fmt;

use crate::error::ModelError;

/// A meal with its macronutrients in grams. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meal {
    name: String,
    protein: i32,
    carbs: i32,
    fat: i32,
}

impl Meal {
    pub fn new(
        name: impl Into<String>,
        protein: i32,
        carbs: i32,
        fat: i32,
    ) -> Result<Self, ModelError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ModelError::EmptyName("Meal"));
        }
        if protein < 0 || carbs < 0 || fat < 0 {
            return Err(ModelError::NegativeMacronutrient);
        }
        Ok(Self {
            name,
            protein,
            carbs,
            fat,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn protein(&self) -> i32 {
        self.protein
    }

    pub fn carbs(&self) -> i32 {
        self.carbs
    }

    pub fn fat(&self) -> i32 {
        self.fat
    }
}

impl fmt::Display for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}g protein, {}g carbs, {}g fat",
            self.name, self.protein, self.carbs, self.fat
        )
    }
}
