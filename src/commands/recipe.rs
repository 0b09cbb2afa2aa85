use clap::{Args, Subcommand};
use std::io::{self, Write};

use vitasync_core::{DocumentStore, Recipe, VitaSyncData};

use super::{document_section, OutputFormat};
use crate::config::Config;

#[derive(Args)]
pub struct RecipeCommand {
    #[command(subcommand)]
    pub command: RecipeSubcommand,
}

#[derive(Subcommand)]
pub enum RecipeSubcommand {
    /// Add a new recipe
    Add {
        /// Name of the recipe
        name: String,

        /// Comma-separated ingredients
        #[arg(long, default_value = "")]
        ingredients: String,

        /// Preparation instructions
        #[arg(long, default_value = "")]
        instructions: String,
    },

    /// List recipes
    List {
        /// Only recipes containing this exact ingredient
        #[arg(long)]
        ingredient: Option<String>,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show a recipe's details
    Show {
        /// Recipe name (case-insensitive)
        name: String,
    },

    /// Replace a recipe's ingredients and instructions
    Edit {
        /// Recipe name (case-insensitive)
        name: String,

        /// New comma-separated ingredients
        #[arg(long)]
        ingredients: String,

        /// New preparation instructions
        #[arg(long)]
        instructions: String,
    },

    /// Delete a recipe
    Delete {
        /// Recipe name (case-insensitive)
        name: String,

        /// Skip confirmation prompt
        #[arg(long, short)]
        force: bool,
    },
}

impl RecipeCommand {
    pub fn run(
        &self,
        store: &DocumentStore,
        config: &Config,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut data = store.load_or_create(&config.profile_name.value)?;

        match &self.command {
            RecipeSubcommand::Add {
                name,
                ingredients,
                instructions,
            } => {
                let recipe = Recipe::new(
                    name.trim(),
                    parse_ingredients(ingredients),
                    instructions.as_str(),
                )?;
                if !data.recipe_library_mut().add_recipe(recipe) {
                    return Err("Failed to add recipe.".into());
                }
                store.save(&data)?;
                tracing::info!("Added recipe '{}'", name.trim());

                println!("Recipe added successfully.");
                Ok(())
            }

            RecipeSubcommand::List { ingredient, format } => {
                let library = data.recipe_library();
                let recipes = match ingredient {
                    Some(ingredient) => library.filter_recipes_by_ingredient(ingredient),
                    None => library.all_recipes(),
                };

                if let OutputFormat::Json = format {
                    let listed = recipes_section(data.name(), recipes)?;
                    println!("{}", serde_json::to_string_pretty(&listed)?);
                    return Ok(());
                }

                if recipes.is_empty() {
                    println!("No recipes found");
                    return Ok(());
                }

                println!("{:<30}  INGREDIENTS", "NAME");
                println!("{}", "-".repeat(80));
                for recipe in &recipes {
                    let name = if recipe.name().chars().count() > 30 {
                        format!("{}...", recipe.name().chars().take(27).collect::<String>())
                    } else {
                        recipe.name().to_string()
                    };
                    println!("{:<30}  {}", name, recipe.ingredients().join(", "));
                }
                println!("\nTotal: {} recipe(s)", recipes.len());
                Ok(())
            }

            RecipeSubcommand::Show { name } => match data.recipe_library().get_recipe_by_name(name)
            {
                Some(recipe) => {
                    println!("{}", recipe);
                    Ok(())
                }
                None => Err(format!("Recipe not found: {}", name).into()),
            },

            RecipeSubcommand::Edit {
                name,
                ingredients,
                instructions,
            } => {
                let edited = data.recipe_library_mut().edit_recipe(
                    name,
                    Some(parse_ingredients(ingredients)),
                    Some(instructions.clone()),
                );
                if !edited {
                    return Err(format!(
                        "Failed to update recipe '{}'. Check that it exists and the inputs are valid.",
                        name
                    )
                    .into());
                }
                store.save(&data)?;
                tracing::info!("Edited recipe '{}'", name);

                println!("Recipe updated successfully.");
                Ok(())
            }

            RecipeSubcommand::Delete { name, force } => {
                let recipe = data
                    .recipe_library()
                    .get_recipe_by_name(name)
                    .ok_or_else(|| format!("Recipe not found: {}", name))?;

                // Confirm deletion unless --force is used
                if !force {
                    print!("Delete recipe '{}'? [y/N] ", recipe.name());
                    io::stdout().flush()?;

                    let mut input = String::new();
                    io::stdin().read_line(&mut input)?;

                    if !input.trim().eq_ignore_ascii_case("y") {
                        println!("Deletion cancelled.");
                        return Ok(());
                    }
                }

                delete_by_name(&mut data, name)?;
                store.save(&data)?;
                tracing::info!("Deleted recipe '{}'", recipe.name());

                println!("Deleted recipe: {}", recipe.name());
                Ok(())
            }
        }
    }
}

fn delete_by_name(data: &mut VitaSyncData, name: &str) -> Result<(), Box<dyn std::error::Error>> {
    if !data.recipe_library_mut().delete_recipe(name) {
        return Err(format!("Recipe not found: {}", name).into());
    }
    Ok(())
}

/// Renders `recipes` the way the data document stores them.
fn recipes_section(
    name: &str,
    recipes: Vec<Recipe>,
) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
    let mut listed = VitaSyncData::new(name);
    for recipe in recipes {
        listed.recipe_library_mut().add_recipe(recipe);
    }
    document_section(&listed, "recipes")
}

/// Splits a comma-separated ingredient line, dropping blank entries.
fn parse_ingredients(line: &str) -> Vec<String> {
    line.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
