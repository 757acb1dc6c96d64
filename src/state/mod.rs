mod overlays;
mod persistence;
mod registry;
mod shell;

pub use overlays::{EnergyOverlay, MacroOverlay};
pub use persistence::{builtin_profiles, load_profiles, load_registry, parse_profiles};
pub use registry::CaseStudyRegistry;
pub use shell::{Overlay, ShellState, View};
