use crate::calculator::constants::*;
use crate::calculator::parse::parse_decimal_or_zero;
use crate::models::{MacroAmount, MacroInput, MacroResult};

/// Energy-yielding macronutrients and their kcal per gram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Macronutrient {
    Carbohydrate,
    Protein,
    Fat,
}

impl Macronutrient {
    pub fn kcal_per_gram(self) -> f64 {
        match self {
            Macronutrient::Carbohydrate => CARB_KCAL_PER_GRAM,
            Macronutrient::Protein => PROTEIN_KCAL_PER_GRAM,
            Macronutrient::Fat => FAT_KCAL_PER_GRAM,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Macronutrient::Carbohydrate => "Carbohydrate",
            Macronutrient::Protein => "Protein",
            Macronutrient::Fat => "Fat",
        }
    }
}

/// Calories and grams for `pct` percent of `target_calories`.
///
/// Grams are derived from the already-rounded calories.
pub fn allocate(target_calories: f64, pct: f64, nutrient: Macronutrient) -> MacroAmount {
    let calories = (target_calories * (pct / 100.0)).round() as i64;
    let grams = (calories as f64 / nutrient.kcal_per_gram()).round() as i64;
    MacroAmount { calories, grams }
}

/// Split `target_calories` across carbohydrate, protein and fat.
///
/// Always produces a result; amounts beyond `i64` saturate. `is_valid` requires the raw percentages to sum
/// to exactly 100; no tolerance is applied.
pub fn compute_macro_split(
    target_calories: f64,
    carb_pct: f64,
    protein_pct: f64,
    fat_pct: f64,
) -> MacroResult {
    let carbs = allocate(target_calories, carb_pct, Macronutrient::Carbohydrate);
    let protein = allocate(target_calories, protein_pct, Macronutrient::Protein);
    let fat = allocate(target_calories, fat_pct, Macronutrient::Fat);

    let total_pct = carb_pct + protein_pct + fat_pct;

    MacroResult {
        carbs,
        protein,
        fat,
        total_pct,
        is_valid: total_pct == VALID_PCT_TOTAL,
        total_calories: carbs
            .calories
            .saturating_add(protein.calories)
            .saturating_add(fat.calories),
    }
}

/// Run the macro calculator on the form's text fields; unparsable fields count as 0.
pub fn compute_macro_input(input: &MacroInput) -> MacroResult {
    compute_macro_split(
        parse_decimal_or_zero(&input.target_calories),
        parse_decimal_or_zero(&input.carb_pct),
        parse_decimal_or_zero(&input.protein_pct),
        parse_decimal_or_zero(&input.fat_pct),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocate_fat_rounds_grams() {
        let fat = allocate(2000.0, 30.0, Macronutrient::Fat);
        assert_eq!(fat, MacroAmount { calories: 600, grams: 67 });
    }

    #[test]
    fn test_default_split() {
        let result = compute_macro_split(2000.0, 50.0, 20.0, 30.0);
        assert!(result.is_valid);
        assert_eq!(result.total_pct, 100.0);
        assert_eq!(result.carbs, MacroAmount { calories: 1000, grams: 250 });
        assert_eq!(result.protein, MacroAmount { calories: 400, grams: 100 });
        assert_eq!(result.fat, MacroAmount { calories: 600, grams: 67 });
        assert_eq!(result.total_calories, 2000);
    }

    #[test]
    fn test_invalid_total_still_allocates() {
        let result = compute_macro_split(2000.0, 40.0, 20.0, 30.0);
        assert!(!result.is_valid);
        assert_eq!(result.total_pct, 90.0);
        assert_eq!(result.carbs, MacroAmount { calories: 800, grams: 200 });
        assert_eq!(result.total_calories, 1800);
    }

    #[test]
    fn test_strict_equality() {
        let result = compute_macro_split(2000.0, 49.999, 20.0, 30.0);
        assert!(!result.is_valid);
    }

    #[test]
    fn test_unparsable_fields_default_to_zero() {
        let input = MacroInput {
            target_calories: "2400".to_string(),
            carb_pct: "".to_string(),
            protein_pct: "abc".to_string(),
            fat_pct: "25".to_string(),
        };
        let result = compute_macro_input(&input);
        assert_eq!(result.total_pct, 25.0);
        assert!(!result.is_valid);
        assert_eq!(result.carbs, MacroAmount::default());
        assert_eq!(result.protein, MacroAmount::default());
        assert_eq!(result.fat, MacroAmount { calories: 600, grams: 67 });
    }

    #[test]
    fn test_unparsable_target_defaults_to_zero() {
        let input = MacroInput {
            target_calories: "lots".to_string(),
            ..MacroInput::default()
        };
        let result = compute_macro_input(&input);
        assert!(result.is_valid);
        assert_eq!(result.total_calories, 0);
    }

    #[test]
    fn test_huge_target_saturates() {
        for target in ["1e19", "1e300"] {
            let input = MacroInput {
                target_calories: target.to_string(),
                ..MacroInput::default()
            };
            let result = compute_macro_input(&input);
            assert!(result.is_valid);
            assert!(result.carbs.calories > 0);
            assert_eq!(result.total_calories, i64::MAX);
        }
    }

    #[test]
    fn test_huge_negative_target_saturates() {
        let result = compute_macro_split(-1e300, 50.0, 20.0, 30.0);
        assert_eq!(result.total_calories, i64::MIN);
    }

    #[test]
    fn test_negative_percentages() {
        let result = compute_macro_split(2000.0, -10.0, 60.0, 50.0);
        assert!(result.is_valid);
        assert_eq!(result.carbs, MacroAmount { calories: -200, grams: -50 });
        assert_eq!(result.protein, MacroAmount { calories: 1200, grams: 300 });
        assert_eq!(result.fat, MacroAmount { calories: 1000, grams: 111 });
        assert_eq!(result.total_calories, 2000);
    }

    #[test]
    fn test_zero_target() {
        let result = compute_macro_split(0.0, 50.0, 20.0, 30.0);
        assert!(result.is_valid);
        assert_eq!(result.carbs, MacroAmount::default());
        assert_eq!(result.protein, MacroAmount::default());
        assert_eq!(result.fat, MacroAmount::default());
        assert_eq!(result.total_calories, 0);
    }
}
