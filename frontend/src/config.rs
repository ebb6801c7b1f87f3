use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose while running under trunk serve
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Settings handed to the animated background. The landing page never
/// reads anything back from it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackgroundConfig {
    pub colors: &'static [&'static str],
    pub scale: f64,
    pub frequency: f64,
    pub warp_strength: f64,
    pub transparent: bool,
}

pub const BACKGROUND: BackgroundConfig = BackgroundConfig {
    colors: &["#ff0000", "#00ff00", "#0000ff"],
    scale: 1.0,
    frequency: 1.0,
    warp_strength: 1.0,
    transparent: false,
};
