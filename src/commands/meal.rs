use clap::{Args, Subcommand};

use vitasync_core::{DocumentStore, Meal};

use crate::config::Config;

#[derive(Args)]
pub struct MealCommand {
    #[command(subcommand)]
    pub command: MealSubcommand,
}

#[derive(Subcommand)]
pub enum MealSubcommand {
    /// Add a meal to the meal plan
    Add {
        /// Name of the meal
        name: String,

        /// Protein in grams
        #[arg(long, default_value_t = 0)]
        protein: i32,

        /// Carbohydrates in grams
        #[arg(long, default_value_t = 0)]
        carbs: i32,

        /// Fat in grams
        #[arg(long, default_value_t = 0)]
        fat: i32,
    },

    /// List meals in the plan
    List,

    /// Show total macronutrients for the plan
    Macros,
}

impl MealCommand {
    pub fn run(
        &self,
        store: &DocumentStore,
        config: &Config,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut data = store.load_or_create(&config.profile_name.value)?;

        match &self.command {
            MealSubcommand::Add {
                name,
                protein,
                carbs,
                fat,
            } => {
                let meal = Meal::new(name.trim(), *protein, *carbs, *fat)?;
                tracing::debug!("Adding meal '{}'", meal.name());
                data.meal_plan_mut().add_meal(meal);
                store.save(&data)?;

                println!("Meal added to plan.");
                Ok(())
            }
            MealSubcommand::List => {
                let meals = data.meal_plan().meals();
                if meals.is_empty() {
                    println!("No meals found");
                    return Ok(());
                }
                for meal in &meals {
                    println!("{}", meal);
                }
                println!("\nTotal: {} meal(s)", meals.len());
                Ok(())
            }
            MealSubcommand::Macros => {
                println!("Daily Macronutrients");
                println!("====================\n");
                print!("{}", data.meal_plan().totals());
                Ok(())
            }
        }
    }
}
