pub mod prompts;
pub mod render;

pub use prompts::{
    prompt_activity_factor, prompt_energy_input, prompt_gender, prompt_macro_input,
    prompt_navigation, prompt_profile_action, prompt_yes_no, NavChoice, ProfileAction,
};
pub use render::{
    display_energy_input, display_energy_result, display_intro, display_links,
    display_macro_table, display_profile, display_profile_list, display_report_prompt,
    display_title, display_video,
};
