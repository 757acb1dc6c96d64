use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::models::Gender;

/// Nutrition case studies with energy-needs and macro-balance calculators.
#[derive(Parser, Debug)]
#[command(name = "case_study")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to a case-study dataset JSON file (defaults to the bundled case studies).
    #[arg(short, long, global = true)]
    pub profiles: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Override the consultation questions link.
    #[arg(long, global = true)]
    pub survey_url: Option<String>,

    /// Override the instruction video link.
    #[arg(long, global = true)]
    pub video_url: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Browse the case studies and run the calculators from a menu.
    Interactive,

    /// List the available case studies.
    List,

    /// Show a case study, or the instructions for "intro".
    Show {
        /// Case-study id.
        id: String,
    },

    /// Calculate BMR and TDEE (Mifflin-St Jeor).
    Energy {
        /// Seed the inputs from this case study.
        #[arg(long)]
        profile: Option<String>,

        /// Weight in kg.
        #[arg(long)]
        weight: Option<String>,

        /// Height in cm.
        #[arg(long)]
        height: Option<String>,

        /// Age in years.
        #[arg(long)]
        age: Option<String>,

        /// male or female.
        #[arg(long)]
        gender: Option<Gender>,

        /// Activity tier (sedentary, light, moderate, very, extra) or a positive factor.
        #[arg(long)]
        activity: Option<String>,
    },

    /// Split target calories into carbohydrate, protein and fat.
    Macros {
        /// Target daily calories.
        #[arg(long)]
        calories: Option<String>,

        /// Carbohydrate percentage.
        #[arg(long)]
        carbs: Option<String>,

        /// Protein percentage.
        #[arg(long)]
        protein: Option<String>,

        /// Fat percentage.
        #[arg(long)]
        fat: Option<String>,
    },

    /// Print the nutrition report prompt for a case study.
    Prompt {
        /// Case-study id.
        id: String,
    },

    /// Print the consultation questions and instruction video links.
    Links,
}

impl Default for Command {
    fn default() -> Self {
        Command::Interactive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_interactive() {
        let cli = Cli::try_parse_from(["case_study"]).unwrap();
        assert!(matches!(cli.command.unwrap_or_default(), Command::Interactive));
    }

    #[test]
    fn test_energy_args() {
        let cli = Cli::try_parse_from([
            "case_study",
            "energy",
            "--profile",
            "rafael",
            "--gender",
            "female",
            "--activity",
            "moderate",
        ])
        .unwrap();

        match cli.command {
            Some(Command::Energy {
                profile,
                gender,
                activity,
                weight,
                ..
            }) => {
                assert_eq!(profile.as_deref(), Some("rafael"));
                assert_eq!(gender, Some(Gender::Female));
                assert_eq!(activity.as_deref(), Some("moderate"));
                assert_eq!(weight, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_profiles_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["case_study", "list", "--profiles", "data.json"]).unwrap();
        assert_eq!(cli.profiles, Some(PathBuf::from("data.json")));
    }

    #[test]
    fn test_rejects_unknown_gender() {
        assert!(Cli::try_parse_from(["case_study", "energy", "--gender", "x"]).is_err());
    }
}
