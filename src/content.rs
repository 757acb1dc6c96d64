//! Static learner instructions and the per-profile report prompt.

use crate::models::{CaseStudyProfile, ProfileDetail};

pub const INTRO_HEADING: &str = "Learner Activity Instructions";

pub const INTRO_PARAGRAPHS: &[&str] = &[
    "The purpose of this case study is to demonstrate your competency in carrying out a \
     nutrition consultation, analyzing a client's dietary habits, and providing \
     recommendations aligned with evidence-based healthy eating practices.",
    "You are required to carry out a nutrition consultation using one of four pre-written \
     case study clients.",
];

pub const PREREQUISITES_HEADING: &str =
    "To complete this case study assessment, you will need to have completed the following:";

pub const PREREQUISITES: &[&str] = &[
    "EdApp nutrition consultation section",
    "Reviewed the character profiles and profile food diary",
];

/// Assessment sections as (title, description).
pub const SECTIONS: &[(&str, &str)] = &[
    ("Section 1", "Complete your name and email address."),
    ("Section 2", "Answer the nutrition consultation questions."),
    (
        "Section 3",
        "Calculate your client's total daily energy needs by using the Mifflin-St Jeor \
         calculation and the macronutrient balance calculation from each case study.",
    ),
    (
        "Section 4",
        "Create a summary report that you could send to the client.",
    ),
];

pub const REPORT_STEPS: &[&str] = &[
    "Copy the prompt shown with each case study.",
    "Paste the prompt into Gemini, ChatGPT or Sider.",
    "Copy the report and paste the text into the assessment response.",
    "Watch the instruction video for more on using the prompt to create a report.",
];

pub const ACTION_REQUIRED: &str = "To answer the consultation questions, choose \
     \"Answer Consultation Questions\" on a case study and complete the form.";

/// Build the text prompt a learner pastes into an assistant to draft the
/// client summary report.
pub fn build_report_prompt(profile: &CaseStudyProfile) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Act as a qualified nutrition coach. Write a friendly, plain-language summary \
         report for my client {} based on the consultation notes below. Include: an \
         overview of current eating habits, three strengths, three areas to improve, \
         practical food swaps that suit their lifestyle, and a short action plan \
         towards their main goal.\n",
        profile.name
    ));

    push_section(&mut out, "Client profile", &detail_lines(&profile.profile_details));
    push_section(&mut out, "Health & wellness", &detail_lines(&profile.health_stats.stats));

    if !profile.health_stats.main_goal.is_empty() {
        out.push_str(&format!("\nMain goal: {}\n", profile.health_stats.main_goal));
    }

    push_section(&mut out, "Background", &profile.background);
    push_section(&mut out, "Current eating patterns", &profile.lifestyle.eating_patterns);
    push_section(&mut out, "Lifestyle factors", &profile.lifestyle.lifestyle_factors);
    push_section(&mut out, "Challenges", &profile.lifestyle.challenges);

    let diary: Vec<String> = profile
        .food_diary
        .days
        .iter()
        .flat_map(|day| {
            day.meals.iter().map(move |meal| {
                let mut line = format!("{} {}", day.day, meal.meal);
                if let Some(time) = &meal.time {
                    line.push_str(&format!(" ({})", time));
                }
                line.push_str(": ");
                line.push_str(&if meal.items.is_empty() {
                    "nothing".to_string()
                } else {
                    meal.items.join(", ")
                });
                if let Some(drinks) = &meal.drinks {
                    line.push_str(&format!("; drinks: {}", drinks));
                }
                line
            })
        })
        .collect();
    push_section(&mut out, "Food diary", &diary);

    out
}

fn detail_lines(details: &[ProfileDetail]) -> Vec<String> {
    details
        .iter()
        .map(|d| format!("{}: {}", d.label, d.value))
        .collect()
}

fn push_section(out: &mut String, title: &str, lines: &[String]) {
    if lines.is_empty() {
        return;
    }
    out.push_str(&format!("\n{}:\n", title));
    for line in lines {
        out.push_str(&format!("- {}\n", line));
    }
}
