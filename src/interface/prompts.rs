use dialoguer::{Confirm, Input, Select};

use crate::calculator::constants::INTRO_ID;
use crate::error::Result;
use crate::models::{ActivityLevel, CalculatorInput, Gender, MacroInput};
use crate::state::{CaseStudyRegistry, ShellState, View};

/// Top-level navigation choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavChoice {
    Select(String),
    Quit,
}

/// Actions offered on a case-study page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileAction {
    EnergyCalculator,
    MacroCalculator,
    WatchInstructions,
    AnswerQuestions,
    ReportPrompt,
    Back,
}

impl ProfileAction {
    const ALL: [ProfileAction; 6] = [
        ProfileAction::EnergyCalculator,
        ProfileAction::MacroCalculator,
        ProfileAction::WatchInstructions,
        ProfileAction::AnswerQuestions,
        ProfileAction::ReportPrompt,
        ProfileAction::Back,
    ];

    fn label(self) -> &'static str {
        match self {
            ProfileAction::EnergyCalculator => {
                "Calculate Energy Needs (Mifflin-St Jeor & Activity Multiplier)"
            }
            ProfileAction::MacroCalculator => {
                "Calculate Macro Balance (CHO, Protein & Fat splits)"
            }
            ProfileAction::WatchInstructions => "Watch Instructions",
            ProfileAction::AnswerQuestions => "Answer Consultation Questions",
            ProfileAction::ReportPrompt => "Show Nutrition Report Prompt",
            ProfileAction::Back => "Back",
        }
    }
}

/// Prompt for the page to show: the instructions or a case study.
pub fn prompt_navigation(registry: &CaseStudyRegistry, state: &ShellState) -> Result<NavChoice> {
    let mut ids = vec![INTRO_ID.to_string()];
    let mut options = vec!["Instructions".to_string()];
    for profile in registry.profiles() {
        ids.push(profile.id.clone());
        options.push(profile.name.clone());
    }
    options.push("Quit".to_string());

    let current = match state.view() {
        View::Intro => 0,
        View::CaseStudy(id) => ids.iter().position(|i| i == id).unwrap_or(0),
    };

    let selection = Select::new()
        .with_prompt("Choose a page")
        .items(&options)
        .default(current)
        .interact()?;

    Ok(match ids.get(selection) {
        Some(id) => NavChoice::Select(id.clone()),
        None => NavChoice::Quit,
    })
}

/// Prompt for an action on the current case study.
pub fn prompt_profile_action() -> Result<ProfileAction> {
    let options: Vec<&str> = ProfileAction::ALL.iter().map(|a| a.label()).collect();

    let selection = Select::new()
        .with_prompt("What would you like to do?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(ProfileAction::ALL
        .get(selection)
        .copied()
        .unwrap_or(ProfileAction::Back))
}

/// Prompt for a free-text field, pre-filled with its current value.
fn prompt_text(prompt: &str, current: &str) -> Result<String> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?;
    Ok(input)
}

/// Prompt for gender.
pub fn prompt_gender(current: Gender) -> Result<Gender> {
    let options = [Gender::Female, Gender::Male];
    let labels: Vec<&str> = options.iter().map(|g| g.label()).collect();
    let default = options.iter().position(|g| *g == current).unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Gender")
        .items(&labels)
        .default(default)
        .interact()?;

    Ok(options.get(selection).copied().unwrap_or(current))
}

/// Prompt for an activity tier and return its factor.
///
/// A custom factor that matches no tier is kept if the user picks it.
pub fn prompt_activity_factor(current: f64) -> Result<f64> {
    let mut options: Vec<String> = ActivityLevel::ALL
        .iter()
        .map(|l| l.label().to_string())
        .collect();
    if ActivityLevel::from_factor(current).is_none() {
        options.push(format!("Keep custom factor {}", current));
    }

    let default = ActivityLevel::from_factor(current)
        .and_then(|level| ActivityLevel::ALL.iter().position(|l| *l == level))
        .unwrap_or(options.len() - 1);

    let selection = Select::new()
        .with_prompt("Activity Level")
        .items(&options)
        .default(default)
        .interact()?;

    Ok(ActivityLevel::ALL
        .get(selection)
        .map(|level| level.factor())
        .unwrap_or(current))
}

/// Fill in the energy calculator form.
pub fn prompt_energy_input(input: &mut CalculatorInput) -> Result<()> {
    input.gender = prompt_gender(input.gender)?;
    input.age = prompt_text("Age (years)", &input.age)?;
    input.weight = prompt_text("Weight (kg)", &input.weight)?;
    input.height = prompt_text("Height (cm)", &input.height)?;
    input.activity_factor = prompt_activity_factor(input.activity_factor)?;
    Ok(())
}

/// Fill in the macro calculator form.
pub fn prompt_macro_input(input: &mut MacroInput) -> Result<()> {
    input.target_calories = prompt_text("Target Daily Calories (TDEE)", &input.target_calories)?;
    input.carb_pct = prompt_text("Carbs %", &input.carb_pct)?;
    input.protein_pct = prompt_text("Protein %", &input.protein_pct)?;
    input.fat_pct = prompt_text("Fat %", &input.fat_pct)?;
    Ok(())
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
