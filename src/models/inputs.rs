use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::calculator::constants::*;
use crate::calculator::parse::strip_to_numeric;
use crate::models::CaseStudyProfile;

/// Gender term of the Mifflin-St Jeor equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    #[default]
    Female,
}

impl Gender {
    /// Constant added to the weight/height/age base.
    pub fn offset(self) -> f64 {
        match self {
            Gender::Male => MSJ_MALE_OFFSET,
            Gender::Female => MSJ_FEMALE_OFFSET,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            other => Err(format!("unknown gender '{}' (expected male or female)", other)),
        }
    }
}

/// Named activity tiers offered by the energy calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
    ExtraActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
        ActivityLevel::ExtraActive,
    ];

    /// TDEE multiplier for this tier.
    pub fn factor(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => ACTIVITY_SEDENTARY,
            ActivityLevel::LightlyActive => ACTIVITY_LIGHTLY_ACTIVE,
            ActivityLevel::ModeratelyActive => ACTIVITY_MODERATELY_ACTIVE,
            ActivityLevel::VeryActive => ACTIVITY_VERY_ACTIVE,
            ActivityLevel::ExtraActive => ACTIVITY_EXTRA_ACTIVE,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary (little or no exercise)",
            ActivityLevel::LightlyActive => "Lightly active (light exercise 1-3 days/week)",
            ActivityLevel::ModeratelyActive => {
                "Moderately active (moderate exercise 3-5 days/week)"
            }
            ActivityLevel::VeryActive => "Very active (hard exercise 6-7 days/week)",
            ActivityLevel::ExtraActive => "Extra active (very hard exercise & physical job)",
        }
    }

    /// Tier whose multiplier is exactly `factor`, if any.
    pub fn from_factor(factor: f64) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.factor() == factor)
    }
}

/// Form state of the energy calculator.
///
/// Measurements stay as typed text until a calculation is requested.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorInput {
    pub weight: String,
    pub height: String,
    pub age: String,
    pub gender: Gender,
    pub activity_factor: f64,
}

impl Default for CalculatorInput {
    fn default() -> Self {
        Self {
            weight: String::new(),
            height: String::new(),
            age: String::new(),
            gender: Gender::default(),
            activity_factor: DEFAULT_ACTIVITY_FACTOR,
        }
    }
}

impl CalculatorInput {
    /// Seed the form from a profile's stored measurements.
    ///
    /// Unit text is stripped ("88 kg" becomes "88"); missing values stay empty.
    pub fn seeded_from(profile: &CaseStudyProfile) -> Self {
        let seed = |value: Option<&str>| value.map(strip_to_numeric).unwrap_or_default();

        Self {
            weight: seed(profile.current_weight()),
            height: seed(profile.height()),
            age: seed(profile.age()),
            gender: profile.gender(),
            ..Self::default()
        }
    }
}

/// Form state of the macronutrient calculator, kept as typed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacroInput {
    pub target_calories: String,
    pub carb_pct: String,
    pub protein_pct: String,
    pub fat_pct: String,
}

impl Default for MacroInput {
    fn default() -> Self {
        Self {
            target_calories: DEFAULT_TARGET_CALORIES.to_string(),
            carb_pct: DEFAULT_CARB_PCT.to_string(),
            protein_pct: DEFAULT_PROTEIN_PCT.to_string(),
            fat_pct: DEFAULT_FAT_PCT.to_string(),
        }
    }
}
