use yew::prelude::*;
use log::info;

mod config;
mod navigation;
mod state;
mod components {
    pub mod background;
    pub mod code_modal;
}
mod pages {
    pub mod landing;
}

use navigation::CODE_OPTIONS;
use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! {
        <Landing options={CODE_OPTIONS} />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }

    info!("Starting WikiScrap landing page");
    yew::Renderer::<App>::new().render();
}
