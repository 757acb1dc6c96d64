use crate::calculator::{Macronutrient, parse_decimal_or_zero};
use crate::config::ShellConfig;
use crate::content::{
    ACTION_REQUIRED, INTRO_HEADING, INTRO_PARAGRAPHS, PREREQUISITES, PREREQUISITES_HEADING,
    REPORT_STEPS, SECTIONS,
};
use crate::models::{
    ActivityLevel, CalculatorInput, CaseStudyProfile, EnergyResult, MacroAmount, MacroInput,
    MacroResult, ProfileDetail,
};
use crate::state::CaseStudyRegistry;

/// Display the page title.
pub fn display_title(config: &ShellConfig) {
    println!();
    println!("=== {} ===", config.title);
}

/// Display the learner instructions page.
pub fn display_intro(config: &ShellConfig) {
    println!();
    println!("--- {} ---", INTRO_HEADING);
    println!();

    for paragraph in INTRO_PARAGRAPHS {
        println!("{}", paragraph);
        println!();
    }

    println!("{}", PREREQUISITES_HEADING);
    for (i, item) in PREREQUISITES.iter().enumerate() {
        println!("  {}. {}", i + 1, item);
    }
    println!();

    for (title, text) in SECTIONS {
        println!("{}: {}", title, text);
    }
    for step in REPORT_STEPS {
        println!("  - {}", step);
    }

    println!();
    println!("Action required: {}", ACTION_REQUIRED);
    println!("Consultation questions: {}", config.survey_url);
    println!();
}

/// Display the case-study ids and names.
pub fn display_profile_list(registry: &CaseStudyRegistry) {
    if registry.is_empty() {
        println!("Case studies: (none)");
        return;
    }

    println!();
    println!("=== Case Studies ({} profiles) ===", registry.len());
    println!();

    let width = registry.ids().iter().map(|id| id.len()).max().unwrap_or(8);
    for profile in registry.profiles() {
        println!("  {:<width$}  {}", profile.id, profile.name, width = width);
    }

    println!();
}

/// Display every section of a case-study page.
pub fn display_profile(profile: &CaseStudyProfile) {
    println!();
    println!("=== {} ===", profile.name);
    if !profile.image_url.is_empty() {
        println!("Photo: {}", profile.image_url);
    }
    display_details(&profile.profile_details);

    display_list("Background", &profile.background);

    println!();
    println!("--- Dietary Habits & Lifestyle ---");
    display_list("Current Eating Patterns", &profile.lifestyle.eating_patterns);
    display_list("Lifestyle Factors", &profile.lifestyle.lifestyle_factors);
    display_list("Challenges", &profile.lifestyle.challenges);

    println!();
    println!("--- Health & Wellness ---");
    display_details(&profile.health_stats.stats);
    if !profile.health_stats.main_goal.is_empty() {
        println!();
        println!("Main Goal: {}", profile.health_stats.main_goal);
    }

    if !profile.food_diary.days.is_empty() {
        println!();
        println!("--- Food Diary ---");
        for day in &profile.food_diary.days {
            println!();
            println!("{}", day.day);
            for meal in &day.meals {
                let time = meal.time.as_deref().unwrap_or("-");
                let items = if meal.items.is_empty() {
                    "-".to_string()
                } else {
                    meal.items.join(", ")
                };
                match &meal.drinks {
                    Some(drinks) => {
                        println!("  {:<16} {:<8} {} | {}", meal.meal, time, items, drinks)
                    }
                    None => println!("  {:<16} {:<8} {}", meal.meal, time, items),
                }
            }
        }
    }

    println!();
}

fn display_details(details: &[ProfileDetail]) {
    let width = details.iter().map(|d| d.label.len()).max().unwrap_or(0);
    for detail in details {
        println!("  {:<width$}  {}", detail.label, detail.value, width = width);
    }
}

fn display_list(title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!();
    println!("{}:", title);
    for item in items {
        println!("  - {}", item);
    }
}

/// Display the energy calculator's current form values.
pub fn display_energy_input(input: &CalculatorInput) {
    let activity = ActivityLevel::from_factor(input.activity_factor)
        .map(|level| level.label().to_string())
        .unwrap_or_else(|| format!("Custom factor {}", input.activity_factor));

    println!();
    println!("--- Energy Needs Calculator ---");
    println!("  Gender:         {}", input.gender);
    println!("  Age (years):    {}", input.age);
    println!("  Weight (kg):    {}", input.weight);
    println!("  Height (cm):    {}", input.height);
    println!("  Activity Level: {}", activity);
}

/// Display the last energy result, if there is one.
pub fn display_energy_result(result: Option<&EnergyResult>) {
    let Some(result) = result else {
        return;
    };

    println!();
    println!("  BMR (Mifflin-St Jeor): {} kcal", result.bmr);
    println!("  TDEE (Maintenance):    {} kcal", result.tdee);
    println!();
}

/// Display the macronutrient allocation table.
pub fn display_macro_table(input: &MacroInput, result: &MacroResult) {
    let marker = if result.is_valid {
        "✓".to_string()
    } else {
        "(Must equal 100%)".to_string()
    };

    println!();
    println!("--- Macronutrient Balance Calculator ---");
    println!(
        "Target Daily Calories (TDEE): {} kcal",
        parse_decimal_or_zero(&input.target_calories)
    );
    println!("Total: {}% {}", result.total_pct, marker);
    println!();
    println!(
        "  {:<24} {:>8} {:>9} {:>7}",
        "Macronutrient", "%", "Calories", "Grams"
    );

    let rows = [
        (Macronutrient::Carbohydrate, &input.carb_pct, result.carbs),
        (Macronutrient::Protein, &input.protein_pct, result.protein),
        (Macronutrient::Fat, &input.fat_pct, result.fat),
    ];
    for (nutrient, pct, amount) in rows {
        display_macro_row(nutrient, parse_decimal_or_zero(pct), amount);
    }

    println!(
        "  {:<24} {:>8} {:>9} {:>7}",
        "TOTAL",
        format!("{}%", result.total_pct),
        result.total_calories,
        "-"
    );
    println!();
}

fn display_macro_row(nutrient: Macronutrient, pct: f64, amount: MacroAmount) {
    let name = format!("{} ({}kcal/g)", nutrient.label(), nutrient.kcal_per_gram());
    println!(
        "  {:<24} {:>8} {:>9} {:>7}",
        name,
        format!("{}%", pct),
        amount.calories,
        format!("{}g", amount.grams)
    );
}

/// Display the outbound links.
pub fn display_links(config: &ShellConfig) {
    println!();
    println!("Answer Consultation Questions: {}", config.survey_url);
    println!("Watch Instructions:            {}", config.video_url);
    println!();
}

/// Display the instruction-video overlay.
pub fn display_video(config: &ShellConfig) {
    println!();
    println!("--- {} ---", config.video_title);
    println!("Open in a browser: {}", config.video_url);
    println!();
}

/// Display the report prompt ready for copying.
pub fn display_report_prompt(prompt: &str) {
    println!();
    println!("--- Nutrition Report Prompt (copy everything below) ---");
    println!();
    println!("{}", prompt);
}
