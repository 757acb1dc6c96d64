use serde::Serialize;

/// Output of the energy calculator, in whole kcal per day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EnergyResult {
    /// Basal metabolic rate (Mifflin-St Jeor).
    pub bmr: i64,

    /// Maintenance energy: BMR scaled by the activity factor.
    pub tdee: i64,
}

/// Calories and grams allocated to one macronutrient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MacroAmount {
    pub calories: i64,
    pub grams: i64,
}

/// Output of the macronutrient split calculator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MacroResult {
    pub carbs: MacroAmount,
    pub protein: MacroAmount,
    pub fat: MacroAmount,

    /// Raw sum of the three percentages as entered.
    pub total_pct: f64,

    /// Whether `total_pct` is exactly 100.
    pub is_valid: bool,

    /// Sum of the per-macro calories, for cross-checking against the target.
    pub total_calories: i64,
}
