pub mod calculator;
pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod interface;
pub mod models;
pub mod state;

pub use config::ShellConfig;
pub use error::{CalculationUnavailable, CaseStudyError, Result};
pub use models::{CaseStudyProfile, EnergyResult, MacroResult};
