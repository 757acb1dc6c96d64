use std::collections::HashSet;

use strsim::jaro_winkler;
use tracing::warn;

use crate::calculator::constants::{INTRO_ID, SUGGESTION_THRESHOLD};
use crate::error::{CaseStudyError, Result};
use crate::models::CaseStudyProfile;

/// Read-only set of case-study profiles, kept in dataset order.
#[derive(Debug, Clone)]
pub struct CaseStudyRegistry {
    profiles: Vec<CaseStudyProfile>,
}

impl CaseStudyRegistry {
    /// Build a registry, rejecting duplicate ids and the reserved intro id.
    pub fn new(profiles: Vec<CaseStudyProfile>) -> Result<Self> {
        let mut seen = HashSet::new();
        for profile in &profiles {
            if profile.id == INTRO_ID {
                return Err(CaseStudyError::ReservedProfileId(profile.id.clone()));
            }
            if !seen.insert(profile.id.as_str()) {
                return Err(CaseStudyError::DuplicateProfile(profile.id.clone()));
            }
            if !profile.has_explicit_gender() {
                warn!(
                    id = %profile.id,
                    gender = %profile.gender(),
                    "profile has no gender field, using identifier lookup"
                );
            }
        }
        Ok(Self { profiles })
    }

    /// Look up the profile for a selection.
    ///
    /// The intro id never resolves to a profile.
    pub fn select_profile(&self, id: &str) -> Option<&CaseStudyProfile> {
        if id == INTRO_ID {
            return None;
        }
        self.profiles.iter().find(|p| p.id == id)
    }

    /// Like [`select_profile`](Self::select_profile), but a miss is an error.
    pub fn get_profile(&self, id: &str) -> Result<&CaseStudyProfile> {
        self.select_profile(id)
            .ok_or_else(|| CaseStudyError::ProfileNotFound(id.to_string()))
    }

    /// Closest profile to a mistyped id or name, if any is similar enough.
    pub fn suggest(&self, query: &str) -> Option<&CaseStudyProfile> {
        let query = query.to_lowercase();
        self.profiles
            .iter()
            .map(|p| {
                let by_id = jaro_winkler(&p.id.to_lowercase(), &query);
                let by_name = jaro_winkler(&p.name.to_lowercase(), &query);
                (p, by_id.max(by_name))
            })
            .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(p, _)| p)
    }

    pub fn profiles(&self) -> &[CaseStudyProfile] {
        &self.profiles
    }

    pub fn ids(&self) -> Vec<&str> {
        self.profiles.iter().map(|p| p.id.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;

    fn profile(id: &str, name: &str) -> CaseStudyProfile {
        CaseStudyProfile {
            id: id.to_string(),
            name: name.to_string(),
            image_url: String::new(),
            gender: Some(Gender::Female),
            profile_details: vec![],
            health_stats: Default::default(),
            lifestyle: Default::default(),
            background: vec![],
            food_diary: Default::default(),
        }
    }

    fn sample_registry() -> CaseStudyRegistry {
        CaseStudyRegistry::new(vec![profile("amelia", "Amelia"), profile("rafael", "Rafael")])
            .unwrap()
    }

    #[test]
    fn test_select_profile() {
        let registry = sample_registry();
        assert_eq!(registry.select_profile("rafael").unwrap().name, "Rafael");
        assert!(registry.select_profile("Rafael").is_none());
        assert!(registry.select_profile("nobody").is_none());
    }

    #[test]
    fn test_intro_never_resolves() {
        let registry = sample_registry();
        assert!(registry.select_profile("intro").is_none());
        assert!(matches!(
            registry.get_profile("intro"),
            Err(CaseStudyError::ProfileNotFound(_))
        ));
    }

    #[test]
    fn test_rejects_duplicates() {
        let result = CaseStudyRegistry::new(vec![profile("amelia", "A"), profile("amelia", "B")]);
        assert!(matches!(result, Err(CaseStudyError::DuplicateProfile(id)) if id == "amelia"));
    }

    #[test]
    fn test_rejects_reserved_id() {
        let result = CaseStudyRegistry::new(vec![profile("intro", "Intro")]);
        assert!(matches!(result, Err(CaseStudyError::ReservedProfileId(_))));
    }

    #[test]
    fn test_suggest() {
        let registry = sample_registry();
        assert_eq!(registry.suggest("rafel").unwrap().id, "rafael");
        assert_eq!(registry.suggest("AMELIA").unwrap().id, "amelia");
        assert!(registry.suggest("zzzz").is_none());
    }

    #[test]
    fn test_keeps_dataset_order() {
        let registry = sample_registry();
        assert_eq!(registry.ids(), vec!["amelia", "rafael"]);
        assert_eq!(registry.len(), 2);
    }
}
