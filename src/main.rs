use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use case_study_calc_rs::calculator::constants::INTRO_ID;
use case_study_calc_rs::calculator::parse_activity_factor;
use case_study_calc_rs::cli::{Cli, Command};
use case_study_calc_rs::config::ShellConfig;
use case_study_calc_rs::content::build_report_prompt;
use case_study_calc_rs::error::{CaseStudyError, Result};
use case_study_calc_rs::interface::{
    display_energy_input, display_energy_result, display_intro, display_links,
    display_macro_table, display_profile, display_profile_list, display_report_prompt,
    display_title, display_video, prompt_energy_input, prompt_macro_input, prompt_navigation,
    prompt_profile_action, prompt_yes_no, NavChoice, ProfileAction,
};
use case_study_calc_rs::models::{CaseStudyProfile, Gender, MacroInput};
use case_study_calc_rs::state::{
    load_registry, CaseStudyRegistry, EnergyOverlay, MacroOverlay, Overlay, ShellState,
};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let command = cli.command.unwrap_or_default();
    let config = ShellConfig::default().with_links(cli.survey_url, cli.video_url);
    let registry = load_registry(cli.profiles.as_deref())?;

    match command {
        Command::Interactive => cmd_interactive(&registry, &config),
        Command::List => {
            display_profile_list(&registry);
            Ok(())
        }
        Command::Show { id } => cmd_show(&registry, &config, &id),
        Command::Energy {
            profile,
            weight,
            height,
            age,
            gender,
            activity,
        } => cmd_energy(
            &registry,
            profile.as_deref(),
            EnergyOverrides {
                weight,
                height,
                age,
                gender,
                activity,
            },
        ),
        Command::Macros {
            calories,
            carbs,
            protein,
            fat,
        } => cmd_macros(&config, calories, carbs, protein, fat),
        Command::Prompt { id } => {
            let profile = registry.get_profile(&id)?;
            display_report_prompt(&build_report_prompt(profile));
            Ok(())
        }
        Command::Links => {
            display_links(&config);
            Ok(())
        }
    }
}

/// Logs go to stderr; RUST_LOG wins over --verbose.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Show a case study; unknown ids fall back to the instructions.
fn cmd_show(registry: &CaseStudyRegistry, config: &ShellConfig, id: &str) -> Result<()> {
    let mut state = ShellState::new();
    state.select(registry, id);

    display_title(config);
    match state.active_profile(registry) {
        Some(profile) => display_profile(profile),
        None => {
            if id != INTRO_ID {
                println!("No case study named '{}'.", id);
                if let Some(suggestion) = registry.suggest(id) {
                    println!("Did you mean '{}' ({})?", suggestion.id, suggestion.name);
                }
            }
            display_intro(config);
        }
    }
    Ok(())
}

/// Command-line values that replace the seeded energy inputs.
struct EnergyOverrides {
    weight: Option<String>,
    height: Option<String>,
    age: Option<String>,
    gender: Option<Gender>,
    activity: Option<String>,
}

/// Run the energy calculator once.
fn cmd_energy(
    registry: &CaseStudyRegistry,
    profile_id: Option<&str>,
    overrides: EnergyOverrides,
) -> Result<()> {
    let profile = profile_id.map(|id| registry.get_profile(id)).transpose()?;
    let mut overlay = EnergyOverlay::open(profile);

    let input = overlay.input_mut();
    if let Some(weight) = overrides.weight {
        input.weight = weight;
    }
    if let Some(height) = overrides.height {
        input.height = height;
    }
    if let Some(age) = overrides.age {
        input.age = age;
    }
    if let Some(gender) = overrides.gender {
        input.gender = gender;
    }
    if let Some(activity) = overrides.activity {
        input.activity_factor = parse_activity_factor(&activity).ok_or_else(|| {
            CaseStudyError::InvalidInput(format!(
                "activity must be a tier name or a positive number, got '{}'",
                activity
            ))
        })?;
    }

    display_energy_input(overlay.input());
    if overlay.calculate().is_err() {
        println!();
        println!("Enter numeric weight, height and age to calculate.");
    }
    display_energy_result(overlay.result());
    Ok(())
}

/// Run the macro calculator once.
fn cmd_macros(
    config: &ShellConfig,
    calories: Option<String>,
    carbs: Option<String>,
    protein: Option<String>,
    fat: Option<String>,
) -> Result<()> {
    let defaults = &config.macro_defaults;
    let input = MacroInput {
        target_calories: calories.unwrap_or_else(|| defaults.target_calories.clone()),
        carb_pct: carbs.unwrap_or_else(|| defaults.carb_pct.clone()),
        protein_pct: protein.unwrap_or_else(|| defaults.protein_pct.clone()),
        fat_pct: fat.unwrap_or_else(|| defaults.fat_pct.clone()),
    };

    let overlay = MacroOverlay::open(&input);
    display_macro_table(overlay.input(), &overlay.result());
    Ok(())
}

/// Menu-driven browsing of the instructions and case studies.
fn cmd_interactive(registry: &CaseStudyRegistry, config: &ShellConfig) -> Result<()> {
    let mut state = ShellState::new();
    info!(profiles = registry.len(), "starting interactive session");

    display_title(config);
    display_intro(config);

    loop {
        match prompt_navigation(registry, &state)? {
            NavChoice::Quit => break,
            NavChoice::Select(id) => {
                state.select(registry, &id);
            }
        }

        match state.active_profile(registry) {
            None => display_intro(config),
            Some(profile) => {
                display_profile(profile);
                run_profile_page(&mut state, profile, config)?;
            }
        }
    }

    Ok(())
}

/// Action loop for one case-study page.
fn run_profile_page(
    state: &mut ShellState,
    profile: &CaseStudyProfile,
    config: &ShellConfig,
) -> Result<()> {
    loop {
        match prompt_profile_action()? {
            ProfileAction::EnergyCalculator => {
                run_overlay(state, Overlay::Energy, profile, config)?;
            }
            ProfileAction::MacroCalculator => {
                run_overlay(state, Overlay::Macro, profile, config)?;
            }
            ProfileAction::WatchInstructions => {
                run_overlay(state, Overlay::Video, profile, config)?;
            }
            ProfileAction::AnswerQuestions => {
                println!();
                println!("Answer Consultation Questions: {}", config.survey_url);
                println!();
            }
            ProfileAction::ReportPrompt => {
                display_report_prompt(&build_report_prompt(profile));
            }
            ProfileAction::Back => break,
        }
    }
    Ok(())
}

/// Open `overlay` on the shell, run whichever overlay it holds, then close it.
fn run_overlay(
    state: &mut ShellState,
    overlay: Overlay,
    profile: &CaseStudyProfile,
    config: &ShellConfig,
) -> Result<()> {
    if !state.open(overlay) {
        debug!(?overlay, "no case study selected, overlay not opened");
        return Ok(());
    }

    match state.overlay() {
        Some(Overlay::Energy) => run_energy_overlay(profile)?,
        Some(Overlay::Macro) => run_macro_overlay(config)?,
        Some(Overlay::Video) => display_video(config),
        None => {}
    }

    state.close();
    Ok(())
}

fn run_energy_overlay(profile: &CaseStudyProfile) -> Result<()> {
    let mut overlay = EnergyOverlay::open(Some(profile));

    loop {
        display_energy_input(overlay.input());
        prompt_energy_input(overlay.input_mut())?;

        if let Err(e) = overlay.calculate() {
            debug!(error = %e, "keeping previous energy result");
        }
        display_energy_result(overlay.result());

        if !prompt_yes_no("Calculate again?", false)? {
            break;
        }
    }
    Ok(())
}

fn run_macro_overlay(config: &ShellConfig) -> Result<()> {
    let mut overlay = MacroOverlay::open(&config.macro_defaults);

    loop {
        display_macro_table(overlay.input(), &overlay.result());
        if !prompt_yes_no("Change the inputs?", true)? {
            break;
        }
        prompt_macro_input(overlay.input_mut())?;
    }
    Ok(())
}
