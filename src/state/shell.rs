use tracing::debug;

use crate::calculator::constants::INTRO_ID;
use crate::models::CaseStudyProfile;
use crate::state::CaseStudyRegistry;

/// Page currently shown by the presentation shell.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Intro,
    CaseStudy(String),
}

/// Overlay hosted on top of a case-study page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Energy,
    Macro,
    Video,
}

/// Presentation state owned by the top-level controller.
///
/// Holds the selected page and the open overlay; everything below the
/// controller receives it by reference.
#[derive(Debug, Clone, Default)]
pub struct ShellState {
    view: View,
    overlay: Option<Overlay>,
}

impl ShellState {
    /// Start on the instructions page with nothing open.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn overlay(&self) -> Option<Overlay> {
        self.overlay
    }

    /// Switch page. Unknown ids fall back to the instructions page.
    ///
    /// Any open overlay is closed.
    pub fn select(&mut self, registry: &CaseStudyRegistry, id: &str) -> &View {
        self.overlay = None;
        self.view = if id == INTRO_ID {
            View::Intro
        } else if registry.select_profile(id).is_some() {
            View::CaseStudy(id.to_string())
        } else {
            debug!(id = %id, "unknown case study, showing instructions");
            View::Intro
        };
        &self.view
    }

    /// Profile behind the current page, if it is a case study.
    pub fn active_profile<'a>(
        &self,
        registry: &'a CaseStudyRegistry,
    ) -> Option<&'a CaseStudyProfile> {
        match &self.view {
            View::Intro => None,
            View::CaseStudy(id) => registry.select_profile(id),
        }
    }

    /// Open an overlay. Overlays only exist on case-study pages.
    pub fn open(&mut self, overlay: Overlay) -> bool {
        if self.view == View::Intro {
            return false;
        }
        debug!(?overlay, "opening overlay");
        self.overlay = Some(overlay);
        true
    }

    pub fn close(&mut self) {
        if let Some(overlay) = self.overlay.take() {
            debug!(?overlay, "closing overlay");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::builtin_profiles;

    fn registry() -> CaseStudyRegistry {
        CaseStudyRegistry::new(builtin_profiles().unwrap()).unwrap()
    }

    #[test]
    fn test_starts_on_intro() {
        let state = ShellState::new();
        assert_eq!(state.view(), &View::Intro);
        assert_eq!(state.overlay(), None);
    }

    #[test]
    fn test_select_known_profile() {
        let registry = registry();
        let mut state = ShellState::new();
        state.select(&registry, "yusuf");
        assert_eq!(state.view(), &View::CaseStudy("yusuf".to_string()));
        assert_eq!(state.active_profile(&registry).unwrap().name, "Yusuf");
    }

    #[test]
    fn test_select_unknown_falls_back_to_intro() {
        let registry = registry();
        let mut state = ShellState::new();
        state.select(&registry, "rafael");
        state.select(&registry, "nobody");
        assert_eq!(state.view(), &View::Intro);
        assert!(state.active_profile(&registry).is_none());
    }

    #[test]
    fn test_overlays_need_a_case_study() {
        let registry = registry();
        let mut state = ShellState::new();
        assert!(!state.open(Overlay::Energy));
        assert_eq!(state.overlay(), None);

        state.select(&registry, "amelia");
        assert!(state.open(Overlay::Macro));
        assert_eq!(state.overlay(), Some(Overlay::Macro));

        state.close();
        assert_eq!(state.overlay(), None);
    }

    #[test]
    fn test_select_closes_overlay() {
        let registry = registry();
        let mut state = ShellState::new();
        state.select(&registry, "amelia");
        state.open(Overlay::Video);
        state.select(&registry, "priya");
        assert_eq!(state.overlay(), None);
    }

    #[test]
    fn test_open_is_refused_after_returning_to_intro() {
        let registry = registry();
        let mut state = ShellState::new();
        state.select(&registry, "rafael");
        assert!(state.open(Overlay::Energy));

        state.select(&registry, INTRO_ID);
        assert!(!state.open(Overlay::Energy));
        assert_eq!(state.overlay(), None);
    }
}
