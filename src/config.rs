use crate::models::MacroInput;

/// Consultation questions form opened from each case study.
pub const SURVEY_URL: &str = "https://docs.google.com/forms/d/e/1FAIpQLSdtUkJGo3QOE2UdYUd1XSd22Dy6mSkcPvyjJMGo93soozwWNg/viewform?usp=dialog";

/// Instruction video on using the report prompt.
pub const VIDEO_URL: &str =
    "https://player.vimeo.com/video/1152911440?h=ec8c6c9e0d&title=0&byline=0&portrait=0";

pub const VIDEO_TITLE: &str = "How to use the Prompt";

pub const APP_TITLE: &str = "Level 3 Nutrition Case Study";

/// Presentation settings shared by every page.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    pub title: String,
    pub survey_url: String,
    pub video_url: String,
    pub video_title: String,
    /// Values the macro calculator opens with.
    pub macro_defaults: MacroInput,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            title: APP_TITLE.to_string(),
            survey_url: SURVEY_URL.to_string(),
            video_url: VIDEO_URL.to_string(),
            video_title: VIDEO_TITLE.to_string(),
            macro_defaults: MacroInput::default(),
        }
    }
}

impl ShellConfig {
    /// Replace the outbound links where overrides are given.
    pub fn with_links(mut self, survey_url: Option<String>, video_url: Option<String>) -> Self {
        if let Some(url) = survey_url {
            self.survey_url = url;
        }
        if let Some(url) = video_url {
            self.video_url = url;
        }
        self
    }
}
