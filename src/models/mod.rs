pub mod inputs;
pub mod profile;
pub mod results;

pub use inputs::{ActivityLevel, CalculatorInput, Gender, MacroInput};
pub use profile::{
    CaseStudyProfile, DiaryDay, DiaryMeal, FoodDiary, HealthStats, Lifestyle, ProfileDetail,
};
pub use results::{EnergyResult, MacroAmount, MacroResult};
