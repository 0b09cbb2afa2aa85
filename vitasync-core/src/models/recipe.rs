use std::fmt;

use crate::error::ModelError;

/// A named recipe with an ingredient list and free-form instructions.
///
/// Both the ingredient list and the instructions may be empty; only the
/// name is required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    name: String,
    ingredients: Vec<String>,
    instructions: String,
}

impl Recipe {
    pub fn new(
        name: impl Into<String>,
        ingredients: Vec<String>,
        instructions: impl Into<String>,
    ) -> Result<Self, ModelError> {
        Self::from_parts(name, Some(ingredients), Some(instructions.into()))
    }

    /// Builds a recipe from parts that may be missing, rejecting any gap.
    pub fn from_parts(
        name: impl Into<String>,
        ingredients: Option<Vec<String>>,
        instructions: Option<String>,
    ) -> Result<Self, ModelError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ModelError::EmptyName("Recipe"));
        }
        let ingredients = ingredients.ok_or(ModelError::MissingIngredients)?;
        let instructions = instructions.ok_or(ModelError::MissingInstructions)?;
        Ok(Self {
            name,
            ingredients,
            instructions,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ingredients(&self) -> Vec<String> {
        self.ingredients.clone()
    }

    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    pub fn has_ingredient(&self, ingredient: &str) -> bool {
        self.ingredients.iter().any(|i| i == ingredient)
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "{}", "=".repeat(self.name.len()))?;

        if !self.ingredients.is_empty() {
            writeln!(f, "\nIngredients:")?;
            for ingredient in &self.ingredients {
                writeln!(f, "  - {}", ingredient)?;
            }
        }

        if !self.instructions.is_empty() {
            writeln!(f, "\nInstructions:\n{}", self.instructions)?;
        }

        Ok(())
    }
}
