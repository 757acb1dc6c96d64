use crate::calculator::constants::*;
use crate::calculator::parse::parse_decimal;
use crate::error::{CalculationUnavailable, EnergyField};
use crate::models::{CalculatorInput, EnergyResult, Gender};

/// Weight, height and age terms of the Mifflin-St Jeor equation.
pub fn mifflin_st_jeor_base(weight_kg: f64, height_cm: f64, age_years: f64) -> f64 {
    MSJ_WEIGHT_COEF * weight_kg + MSJ_HEIGHT_COEF * height_cm - MSJ_AGE_COEF * age_years
}

/// Basal metabolic rate rounded to whole kcal, saturating at the `i64` bounds.
///
/// Formula: 10w + 6.25h - 5a + 5 (male) or - 161 (female).
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age_years: f64, gender: Gender) -> i64 {
    (mifflin_st_jeor_base(weight_kg, height_cm, age_years) + gender.offset()).round() as i64
}

/// Total daily energy expenditure from the rounded BMR.
pub fn calculate_tdee(bmr: i64, activity_factor: f64) -> i64 {
    (bmr as f64 * activity_factor).round() as i64
}

/// Run the energy calculator on the form's text fields.
///
/// Fails with the first of weight, height, age that is not a finite number.
pub fn compute_energy(input: &CalculatorInput) -> Result<EnergyResult, CalculationUnavailable> {
    let weight = parse_field(&input.weight, EnergyField::Weight)?;
    let height = parse_field(&input.height, EnergyField::Height)?;
    let age = parse_field(&input.age, EnergyField::Age)?;

    let bmr = calculate_bmr(weight, height, age, input.gender);
    let tdee = calculate_tdee(bmr, input.activity_factor);

    Ok(EnergyResult { bmr, tdee })
}

/// Resolve an activity argument: a tier name or any positive number.
pub fn parse_activity_factor(text: &str) -> Option<f64> {
    let key = text.trim().to_lowercase();
    if let Some(level) = ACTIVITY_ALIASES.get(key.as_str()) {
        return Some(level.factor());
    }
    parse_decimal(&key).filter(|f| *f > 0.0)
}

fn parse_field(text: &str, field: EnergyField) -> Result<f64, CalculationUnavailable> {
    parse_decimal(text).ok_or(CalculationUnavailable { field })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::assert_float_absolute_eq;

    fn input(
        weight: &str,
        height: &str,
        age: &str,
        gender: Gender,
        factor: f64,
    ) -> CalculatorInput {
        CalculatorInput {
            weight: weight.to_string(),
            height: height.to_string(),
            age: age.to_string(),
            gender,
            activity_factor: factor,
        }
    }

    #[test]
    fn test_base() {
        assert_float_absolute_eq!(mifflin_st_jeor_base(70.0, 170.0, 30.0), 1612.5, 1e-9);
    }

    #[test]
    fn test_bmr_female_rounds_half_up() {
        // 1612.5 - 161 = 1451.5
        assert_eq!(calculate_bmr(70.0, 170.0, 30.0, Gender::Female), 1452);
    }

    #[test]
    fn test_bmr_male() {
        assert_eq!(calculate_bmr(80.0, 180.0, 25.0, Gender::Male), 1805);
    }

    #[test]
    fn test_tdee_uses_rounded_bmr() {
        // 1452 * 1.55 = 2250.6
        assert_eq!(calculate_tdee(1452, 1.55), 2251);
        assert_eq!(calculate_tdee(1805, 1.2), 2166);
    }

    #[test]
    fn test_compute_energy() {
        let result = compute_energy(&input("70", "170", "30", Gender::Female, 1.55)).unwrap();
        assert_eq!(result, EnergyResult { bmr: 1452, tdee: 2251 });
    }

    #[test]
    fn test_compute_energy_accepts_any_positive_factor() {
        let result = compute_energy(&input("80", "180", "25", Gender::Male, 1.0)).unwrap();
        assert_eq!(result.tdee, result.bmr);

        let result = compute_energy(&input("80", "180", "25", Gender::Male, 2.5)).unwrap();
        assert_eq!(result.tdee, 4513); // 1805 * 2.5 = 4512.5
    }

    #[test]
    fn test_compute_energy_unavailable() {
        let err = compute_energy(&input("", "170", "30", Gender::Female, 1.2)).unwrap_err();
        assert_eq!(err.field, EnergyField::Weight);

        let err = compute_energy(&input("70", "tall", "30", Gender::Female, 1.2)).unwrap_err();
        assert_eq!(err.field, EnergyField::Height);

        let err = compute_energy(&input("70", "170", "", Gender::Male, 1.2)).unwrap_err();
        assert_eq!(err.field, EnergyField::Age);
    }

    #[test]
    fn test_parse_activity_factor() {
        assert_eq!(parse_activity_factor("moderate"), Some(1.55));
        assert_eq!(parse_activity_factor("Very-Active"), Some(1.725));
        assert_eq!(parse_activity_factor("1.3"), Some(1.3));
        assert_eq!(parse_activity_factor("0"), None);
        assert_eq!(parse_activity_factor("-1.2"), None);
        assert_eq!(parse_activity_factor("lazy"), None);
    }

    #[test]
    fn test_extreme_measurements_saturate() {
        let result = compute_energy(&input("1e300", "170", "30", Gender::Female, 1.2)).unwrap();
        assert_eq!(result, EnergyResult { bmr: i64::MAX, tdee: i64::MAX });

        let result = compute_energy(&input("-1e300", "170", "30", Gender::Male, 1.55)).unwrap();
        assert_eq!(result, EnergyResult { bmr: i64::MIN, tdee: i64::MIN });
    }
}
