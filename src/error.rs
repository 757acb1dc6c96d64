use thiserror::Error;

#[derive(Debug, Error)]
pub enum CaseStudyError {
    #[error("Case study not found: {0}")]
    ProfileNotFound(String),

    #[error("Duplicate case study id: {0}")]
    DuplicateProfile(String),

    #[error("Case study id '{0}' is reserved for the instructions page")]
    ReservedProfileId(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, CaseStudyError>;

/// Energy-calculator field that can fail to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnergyField {
    Weight,
    Height,
    Age,
}

impl std::fmt::Display for EnergyField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EnergyField::Weight => "weight",
            EnergyField::Height => "height",
            EnergyField::Age => "age",
        };
        f.write_str(name)
    }
}

/// The energy calculator produced no result because an input is not a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Calculation unavailable: {field} is not a number")]
pub struct CalculationUnavailable {
    pub field: EnergyField,
}
