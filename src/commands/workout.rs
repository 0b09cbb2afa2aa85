use chrono::NaiveDate;
use clap::{Args, Subcommand};

use vitasync_core::{DocumentStore, Exercise, ExerciseSet, VitaSyncData, Workout};

use super::{document_section, OutputFormat};
use crate::config::Config;

#[derive(Args)]
pub struct WorkoutCommand {
    #[command(subcommand)]
    pub command: WorkoutSubcommand,
}

#[derive(Subcommand)]
pub enum WorkoutSubcommand {
    /// Log a workout session
    Log {
        /// Date of the session (YYYY-MM-DD)
        #[arg(long, short)]
        date: String,

        /// Exercise as NAME:REPS[,REPS...], one rep count per set (can be repeated)
        #[arg(long = "exercise", short = 'e', value_name = "EXERCISE")]
        exercises: Vec<String>,
    },

    /// Show every logged workout, oldest first
    History {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

impl WorkoutCommand {
    pub fn run(
        &self,
        store: &DocumentStore,
        config: &Config,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut data = store.load_or_create(&config.profile_name.value)?;

        match &self.command {
            WorkoutSubcommand::Log { date, exercises } => {
                let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
                    .map_err(|_| format!("Invalid date '{}'. Please use YYYY-MM-DD.", date))?;

                let mut workout = Workout::new(date);
                for entry in exercises {
                    workout.add_exercise(parse_exercise(entry)?);
                }

                tracing::debug!(
                    "Logging workout on {} with {} exercise(s)",
                    date,
                    exercises.len()
                );
                data.workout_tracker_mut().add_workout(workout);
                store.save(&data)?;

                println!("Workout logged successfully.");
                Ok(())
            }
            WorkoutSubcommand::History { format } => {
                match format {
                    OutputFormat::Json => {
                        let workouts = document_section(&data, "workouts")?;
                        println!("{}", serde_json::to_string_pretty(&workouts)?);
                    }
                    OutputFormat::Text => print_history(&data),
                }
                Ok(())
            }
        }
    }
}

fn print_history(data: &VitaSyncData) {
    println!("Workout History");
    println!("===============\n");

    let workouts = data.workout_tracker().workouts();
    if workouts.is_empty() {
        println!("No workouts logged yet.");
        return;
    }
    for workout in &workouts {
        print!("{}", workout);
    }
}

/// Parses `NAME:REPS[,REPS...]` into an exercise whose sets are all
/// checked off.
fn parse_exercise(entry: &str) -> Result<Exercise, Box<dyn std::error::Error>> {
    let (name, reps) = entry
        .rsplit_once(':')
        .ok_or_else(|| format!("Invalid exercise '{}'. Expected NAME:REPS[,REPS...]", entry))?;

    let mut exercise = Exercise::new(name.trim())?;
    for rep in reps.split(',').map(str::trim).filter(|r| !r.is_empty()) {
        let target: i32 = rep
            .parse()
            .map_err(|_| format!("Invalid rep count '{}' for {}", rep, name.trim()))?;
        let mut set = ExerciseSet::new(target)?;
        while !set.is_completed() {
            set.check_off_rep();
        }
        exercise.add_set(set);
    }
    Ok(exercise)
}
