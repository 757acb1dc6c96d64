use serde::{Deserialize, Serialize};

use crate::calculator::constants::{
    AGE_LABEL, CURRENT_WEIGHT_LABEL, HEIGHT_LABEL, LEGACY_MALE_PROFILE_IDS,
};
use crate::models::Gender;

/// A labeled value shown in the profile header or the health-stats grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDetail {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStats {
    #[serde(default)]
    pub stats: Vec<ProfileDetail>,

    #[serde(default)]
    pub main_goal: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lifestyle {
    #[serde(default)]
    pub eating_patterns: Vec<String>,

    #[serde(default)]
    pub lifestyle_factors: Vec<String>,

    #[serde(default)]
    pub challenges: Vec<String>,
}

/// One meal or snack recorded in the food diary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiaryMeal {
    pub meal: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,

    #[serde(default)]
    pub items: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drinks: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiaryDay {
    pub day: String,

    #[serde(default)]
    pub meals: Vec<DiaryMeal>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FoodDiary {
    #[serde(default)]
    pub days: Vec<DiaryDay>,
}

/// A fixed case-study client.
///
/// Profiles are loaded once at start-up and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudyProfile {
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub image_url: String,

    /// Explicit gender. Older datasets leave this out; see [`CaseStudyProfile::gender`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,

    #[serde(default)]
    pub profile_details: Vec<ProfileDetail>,

    #[serde(default)]
    pub health_stats: HealthStats,

    #[serde(default)]
    pub lifestyle: Lifestyle,

    #[serde(default)]
    pub background: Vec<String>,

    #[serde(default)]
    pub food_diary: FoodDiary,
}

impl CaseStudyProfile {
    /// Value of a profile-header detail by exact label.
    pub fn detail(&self, label: &str) -> Option<&str> {
        find_value(&self.profile_details, label)
    }

    /// Value of a health stat by exact label.
    pub fn stat(&self, label: &str) -> Option<&str> {
        find_value(&self.health_stats.stats, label)
    }

    pub fn age(&self) -> Option<&str> {
        self.detail(AGE_LABEL)
    }

    pub fn height(&self) -> Option<&str> {
        self.stat(HEIGHT_LABEL)
    }

    pub fn current_weight(&self) -> Option<&str> {
        self.stat(CURRENT_WEIGHT_LABEL)
    }

    /// Gender used to seed the energy calculator.
    ///
    /// Falls back to [`legacy_gender`] when the dataset has no explicit value.
    pub fn gender(&self) -> Gender {
        self.gender.unwrap_or_else(|| legacy_gender(&self.id))
    }

    pub fn has_explicit_gender(&self) -> bool {
        self.gender.is_some()
    }
}

/// Identifier-based gender lookup used by datasets without a `gender` field.
pub fn legacy_gender(profile_id: &str) -> Gender {
    if LEGACY_MALE_PROFILE_IDS.contains(&profile_id) {
        Gender::Male
    } else {
        Gender::Female
    }
}

fn find_value<'a>(details: &'a [ProfileDetail], label: &str) -> Option<&'a str> {
    details
        .iter()
        .find(|d| d.label == label)
        .map(|d| d.value.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(label: &str, value: &str) -> ProfileDetail {
        ProfileDetail {
            label: label.to_string(),
            value: value.to_string(),
        }
    }

    fn sample_profile(id: &str, gender: Option<Gender>) -> CaseStudyProfile {
        CaseStudyProfile {
            id: id.to_string(),
            name: "Sample".to_string(),
            image_url: String::new(),
            gender,
            profile_details: vec![detail("Age", "41 years"), detail("Occupation", "Chef")],
            health_stats: HealthStats {
                stats: vec![detail("Height", "172 cm"), detail("Current Weight", "88 kg")],
                main_goal: "Lose weight".to_string(),
            },
            lifestyle: Lifestyle::default(),
            background: vec![],
            food_diary: FoodDiary::default(),
        }
    }

    #[test]
    fn test_labeled_lookups() {
        let profile = sample_profile("sample", None);
        assert_eq!(profile.age(), Some("41 years"));
        assert_eq!(profile.height(), Some("172 cm"));
        assert_eq!(profile.current_weight(), Some("88 kg"));
        assert_eq!(profile.detail("Occupation"), Some("Chef"));
        // Labels match exactly
        assert_eq!(profile.detail("age"), None);
    }

    #[test]
    fn test_explicit_gender_wins() {
        let profile = sample_profile("rafael", Some(Gender::Female));
        assert_eq!(profile.gender(), Gender::Female);
        assert!(profile.has_explicit_gender());
    }

    #[test]
    fn test_legacy_gender_fallback() {
        assert_eq!(sample_profile("rafael", None).gender(), Gender::Male);
        assert_eq!(sample_profile("yusuf", None).gender(), Gender::Male);
        assert_eq!(sample_profile("amelia", None).gender(), Gender::Female);
    }

    #[test]
    fn test_deserialize_camel_case_without_gender() {
        let json = r#"{
            "id": "mara",
            "name": "Mara",
            "imageUrl": "images/mara.jpg",
            "profileDetails": [{"label": "Age", "value": "29"}],
            "healthStats": {"stats": [{"label": "Height", "value": "160 cm"}], "mainGoal": "More energy"},
            "lifestyle": {"eatingPatterns": ["Skips breakfast"]},
            "background": ["Works nights."],
            "foodDiary": {"days": [{"day": "Monday", "meals": [{"meal": "Lunch", "items": ["Soup"]}]}]}
        }"#;

        let profile: CaseStudyProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.image_url, "images/mara.jpg");
        assert_eq!(profile.gender, None);
        assert_eq!(profile.health_stats.main_goal, "More energy");
        assert_eq!(profile.lifestyle.eating_patterns.len(), 1);
        assert!(profile.lifestyle.challenges.is_empty());
        assert_eq!(profile.food_diary.days[0].meals[0].time, None);
    }
}
