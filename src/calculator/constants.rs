use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::ActivityLevel;

// ─────────────────────────────────────────────────────────────────────────────
// Mifflin-St Jeor (1990)
// ─────────────────────────────────────────────────────────────────────────────

/// kcal per kilogram of body weight.
pub const MSJ_WEIGHT_COEF: f64 = 10.0;

/// kcal per centimetre of height.
pub const MSJ_HEIGHT_COEF: f64 = 6.25;

/// kcal subtracted per year of age.
pub const MSJ_AGE_COEF: f64 = 5.0;

pub const MSJ_MALE_OFFSET: f64 = 5.0;
pub const MSJ_FEMALE_OFFSET: f64 = -161.0;

// ─────────────────────────────────────────────────────────────────────────────
// Activity multipliers
// ─────────────────────────────────────────────────────────────────────────────

pub const ACTIVITY_SEDENTARY: f64 = 1.2;
pub const ACTIVITY_LIGHTLY_ACTIVE: f64 = 1.375;
pub const ACTIVITY_MODERATELY_ACTIVE: f64 = 1.55;
pub const ACTIVITY_VERY_ACTIVE: f64 = 1.725;
pub const ACTIVITY_EXTRA_ACTIVE: f64 = 1.9;

/// Factor selected when the energy calculator opens.
pub const DEFAULT_ACTIVITY_FACTOR: f64 = ACTIVITY_SEDENTARY;

// ─────────────────────────────────────────────────────────────────────────────
// Macronutrients
// ─────────────────────────────────────────────────────────────────────────────

pub const CARB_KCAL_PER_GRAM: f64 = 4.0;
pub const PROTEIN_KCAL_PER_GRAM: f64 = 4.0;
pub const FAT_KCAL_PER_GRAM: f64 = 9.0;

/// Percentages must sum to exactly this value.
pub const VALID_PCT_TOTAL: f64 = 100.0;

pub const DEFAULT_TARGET_CALORIES: &str = "2000";
pub const DEFAULT_CARB_PCT: &str = "50";
pub const DEFAULT_PROTEIN_PCT: &str = "20";
pub const DEFAULT_FAT_PCT: &str = "30";

// ─────────────────────────────────────────────────────────────────────────────
// Case-study data
// ─────────────────────────────────────────────────────────────────────────────

/// Sentinel id of the instructions page.
pub const INTRO_ID: &str = "intro";

pub const AGE_LABEL: &str = "Age";
pub const HEIGHT_LABEL: &str = "Height";
pub const CURRENT_WEIGHT_LABEL: &str = "Current Weight";

/// Profiles treated as male when the dataset carries no explicit gender.
pub const LEGACY_MALE_PROFILE_IDS: &[&str] = &["rafael", "yusuf"];

/// Minimum Jaro-Winkler similarity for a "did you mean" suggestion.
pub const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Accepted command-line names for the activity tiers.
pub static ACTIVITY_ALIASES: LazyLock<HashMap<&'static str, ActivityLevel>> =
    LazyLock::new(|| {
        let mut m = HashMap::new();
        m.insert("sedentary", ActivityLevel::Sedentary);
        m.insert("light", ActivityLevel::LightlyActive);
        m.insert("lightly-active", ActivityLevel::LightlyActive);
        m.insert("moderate", ActivityLevel::ModeratelyActive);
        m.insert("moderately-active", ActivityLevel::ModeratelyActive);
        m.insert("very", ActivityLevel::VeryActive);
        m.insert("very-active", ActivityLevel::VeryActive);
        m.insert("extra", ActivityLevel::ExtraActive);
        m.insert("extra-active", ActivityLevel::ExtraActive);
        m
    });
