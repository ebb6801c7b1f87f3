use log::{info, warn};
use web_sys::window;

pub const MAP_PAGE: &str = "./carte_unesco_france.html";
pub const REPORT_PAGE: &str = "./rapport.html";

/// One destination listed in the codes modal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationOption {
    pub title: &'static str,
    pub description: &'static str,
    /// Font Awesome class, e.g. `fa-spider`.
    pub icon_id: &'static str,
    pub accent_color: &'static str,
    pub accent_gradient: &'static str,
    pub target_url: &'static str,
}

pub const CODE_OPTIONS: &[NavigationOption] = &[
    NavigationOption {
        title: "Code du WebScraping",
        description: "Extraction des sites UNESCO depuis Wikipédia",
        icon_id: "fa-spider",
        accent_color: "#60a5fa",
        accent_gradient: "linear-gradient(135deg, #60a5fa, #3b82f6)",
        target_url: "./code.html",
    },
    NavigationOption {
        title: "Code API V1",
        description: "Première version de l'API des sites",
        icon_id: "fa-plug",
        accent_color: "#a78bfa",
        accent_gradient: "linear-gradient(135deg, #a78bfa, #8b5cf6)",
        target_url: "./codeAPI_1.html",
    },
    NavigationOption {
        title: "Code API V2",
        description: "API enrichie avec coordonnées et catégories",
        icon_id: "fa-server",
        accent_color: "#34d399",
        accent_gradient: "linear-gradient(135deg, #34d399, #10b981)",
        target_url: "./codeAPI_2.html",
    },
];

/// What a call-to-action button does when pressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    Navigate(&'static str),
    OpenCodes,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CtaStyle {
    Solid,
    Accent,
    Ghost,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallToAction {
    pub label: &'static str,
    pub icon_id: &'static str,
    pub style: CtaStyle,
    pub intent: Intent,
}

pub const CALLS_TO_ACTION: &[CallToAction] = &[
    CallToAction {
        label: "Consulter la carte",
        icon_id: "fa-map-location-dot",
        style: CtaStyle::Solid,
        intent: Intent::Navigate(MAP_PAGE),
    },
    CallToAction {
        label: "Consulter les codes",
        icon_id: "fa-code",
        style: CtaStyle::Accent,
        intent: Intent::OpenCodes,
    },
    CallToAction {
        label: "Rapport collectif",
        icon_id: "fa-file-alt",
        style: CtaStyle::Ghost,
        intent: Intent::Navigate(REPORT_PAGE),
    },
];

/// Replaces the current page with `url`. The page unloads right after, so
/// a failed assignment is only logged.
pub fn go_to(url: &str) {
    info!("Navigating to {}", url);
    let Some(window) = window() else {
        warn!("No window available, cannot navigate to {}", url);
        return;
    };
    if let Err(e) = window.location().set_href(url) {
        warn!("Failed to navigate to {}: {:?}", url, e);
    }
}
