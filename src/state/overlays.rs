use tracing::debug;

use crate::calculator::{compute_energy, compute_macro_input};
use crate::error::CalculationUnavailable;
use crate::models::{CalculatorInput, CaseStudyProfile, EnergyResult, MacroInput, MacroResult};

/// Energy calculator form plus the last result it displayed.
#[derive(Debug, Clone, Default)]
pub struct EnergyOverlay {
    input: CalculatorInput,
    result: Option<EnergyResult>,
}

impl EnergyOverlay {
    /// Open the form, seeded from `profile` when one is selected.
    ///
    /// Seeding never runs the calculation.
    pub fn open(profile: Option<&CaseStudyProfile>) -> Self {
        let input = profile
            .map(CalculatorInput::seeded_from)
            .unwrap_or_default();
        Self {
            input,
            result: None,
        }
    }

    pub fn input(&self) -> &CalculatorInput {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut CalculatorInput {
        &mut self.input
    }

    /// Last successful result.
    pub fn result(&self) -> Option<&EnergyResult> {
        self.result.as_ref()
    }

    /// Recalculate from the current form.
    ///
    /// On failure the previous result stays in place.
    pub fn calculate(&mut self) -> Result<EnergyResult, CalculationUnavailable> {
        match compute_energy(&self.input) {
            Ok(result) => {
                self.result = Some(result);
                Ok(result)
            }
            Err(e) => {
                debug!(field = %e.field, "energy calculation unavailable");
                Err(e)
            }
        }
    }
}

/// Macro calculator form. The split is recomputed from the form on demand.
#[derive(Debug, Clone)]
pub struct MacroOverlay {
    input: MacroInput,
}

impl MacroOverlay {
    pub fn open(defaults: &MacroInput) -> Self {
        Self {
            input: defaults.clone(),
        }
    }

    pub fn input(&self) -> &MacroInput {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut MacroInput {
        &mut self.input
    }

    pub fn result(&self) -> MacroResult {
        compute_macro_input(&self.input)
    }
}
