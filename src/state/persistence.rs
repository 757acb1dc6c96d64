use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::Result;
use crate::models::CaseStudyProfile;
use crate::state::CaseStudyRegistry;

/// Case studies compiled into the binary.
const BUILTIN_CASE_STUDIES: &str = include_str!("../../data/case_studies.json");

/// Parse a JSON array of profiles.
pub fn parse_profiles(json: &str) -> Result<Vec<CaseStudyProfile>> {
    Ok(serde_json::from_str(json)?)
}

/// Load profiles from a JSON file.
pub fn load_profiles<P: AsRef<Path>>(path: P) -> Result<Vec<CaseStudyProfile>> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading case-study dataset");
    let content = fs::read_to_string(path)?;
    parse_profiles(&content)
}

/// The bundled case studies.
pub fn builtin_profiles() -> Result<Vec<CaseStudyProfile>> {
    parse_profiles(BUILTIN_CASE_STUDIES)
}

/// Build the registry from `path`, or from the bundled dataset when `None`.
pub fn load_registry(path: Option<&Path>) -> Result<CaseStudyRegistry> {
    let profiles = match path {
        Some(path) => load_profiles(path)?,
        None => builtin_profiles()?,
    };
    let registry = CaseStudyRegistry::new(profiles)?;
    info!(count = registry.len(), "loaded case studies");
    Ok(registry)
}
