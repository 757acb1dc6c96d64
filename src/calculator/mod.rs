pub mod constants;
pub mod energy;
pub mod macro_split;
pub mod parse;

pub use constants::*;
pub use energy::{
    calculate_bmr, calculate_tdee, compute_energy, mifflin_st_jeor_base, parse_activity_factor,
};
pub use macro_split::{allocate, compute_macro_input, compute_macro_split, Macronutrient};
pub use parse::{parse_decimal, parse_decimal_or_zero, strip_to_numeric};
