use yew::prelude::*;

use crate::components::background::ColorBends;
use crate::components::code_modal::CodeModal;
use crate::config::BACKGROUND;
use crate::navigation::{self, CallToAction, CtaStyle, Intent, NavigationOption, CALLS_TO_ACTION};
use crate::state::{LandingAction, ModalHit, ViewState};

fn browser_navigator() -> Callback<&'static str> {
    Callback::from(navigation::go_to)
}

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    /// Destinations listed in the codes modal, in display order.
    pub options: &'static [NavigationOption],
    #[prop_or_else(browser_navigator)]
    pub on_navigate: Callback<&'static str>,
}

/// What pressing a call-to-action does, without the DOM event.
pub fn cta_handler(
    intent: Intent,
    on_navigate: &Callback<&'static str>,
    on_action: &Callback<LandingAction>,
) -> Callback<()> {
    match intent {
        Intent::Navigate(url) => {
            let on_navigate = on_navigate.clone();
            Callback::from(move |_: ()| on_navigate.emit(url))
        }
        Intent::OpenCodes => {
            let on_action = on_action.clone();
            Callback::from(move |_: ()| on_action.emit(LandingAction::OpenCodes))
        }
    }
}

pub fn modal_hit_handler(on_action: &Callback<LandingAction>) -> Callback<ModalHit> {
    let on_action = on_action.clone();
    Callback::from(move |hit: ModalHit| {
        if hit.dismisses() {
            on_action.emit(LandingAction::CloseCodes);
        }
    })
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let state = use_reducer(ViewState::default);

    let on_action = {
        let state = state.clone();
        Callback::from(move |action: LandingAction| state.dispatch(action))
    };

    let cta_button = |cta: &CallToAction| {
        let onclick = {
            let handler = cta_handler(cta.intent, &props.on_navigate, &on_action);
            Callback::from(move |_: MouseEvent| handler.emit(()))
        };
        let style_class = match cta.style {
            CtaStyle::Solid => "cta-solid",
            CtaStyle::Accent => "cta-accent",
            CtaStyle::Ghost => "cta-ghost",
        };
        html! {
            <button class={classes!("cta", style_class)} {onclick}>
                <i class={classes!("fas", cta.icon_id)}></i>
                {cta.label}
            </button>
        }
    };

    html! {
        <div class="page">
            <div class="page-background">
                <ColorBends config={BACKGROUND} />
            </div>

            <div class="page-overlay">
                <nav class="brand-nav">
                    <div class="brand">
                        <div class="brand-badge">
                            <i class="fas fa-star"></i>
                        </div>
                        <span class="brand-name">{"WikiScrap UNESCO"}</span>
                    </div>
                </nav>

                <div class="hero">
                    <h1 class="hero-title">
                        <div class="hero-line">{"Sites UNESCO"}</div>
                        <div class="hero-line">{"de France"}</div>
                    </h1>

                    <div class="cta-row">
                        { for CALLS_TO_ACTION.iter().map(cta_button) }
                    </div>
                </div>
            </div>

            if state.modal_open {
                <CodeModal
                    options={props.options}
                    on_hit={modal_hit_handler(&on_action)}
                    on_select={props.on_navigate.clone()}
                />
            }

            <style>
                {r#"
                .page {
                    position: relative;
                    width: 100%;
                    height: 100vh;
                    background: #000;
                    overflow: hidden;
                }

                .page-background {
                    width: 100%;
                    height: 100%;
                }

                .page-overlay {
                    position: absolute;
                    top: 0;
                    left: 0;
                    right: 0;
                    bottom: 0;
                    z-index: 10;
                }

                .brand-nav {
                    position: absolute;
                    top: 32px;
                    left: 50%;
                    transform: translateX(-50%);
                    padding: 16px 32px;
                    background: rgba(255, 255, 255, 0.08);
                    backdrop-filter: blur(20px);
                    border-radius: 9999px;
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .brand {
                    display: flex;
                    align-items: center;
                    gap: 14px;
                }

                .brand-badge {
                    width: 36px;
                    height: 36px;
                    border-radius: 50%;
                    background: linear-gradient(135deg, #60a5fa, #a78bfa);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: white;
                    font-size: 16px;
                }

                .brand-name {
                    color: white;
                    font-weight: 600;
                    font-size: 20px;
                    letter-spacing: -0.01em;
                }

                .hero {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100%;
                    padding: 32px;
                    box-sizing: border-box;
                }

                .hero-title {
                    text-align: center;
                    margin: 0 0 60px;
                    max-width: 1600px;
                }

                .hero-line {
                    font-size: clamp(56px, 10vw, 160px);
                    font-weight: 700;
                    color: white;
                    line-height: 1;
                    letter-spacing: -0.03em;
                    font-family: system-ui, -apple-system, sans-serif;
                }

                .hero-line + .hero-line {
                    margin-top: 20px;
                }

                .cta-row {
                    display: flex;
                    gap: 20px;
                    flex-wrap: wrap;
                    justify-content: center;
                }

                .cta {
                    padding: 18px 40px;
                    border-radius: 9999px;
                    font-weight: 600;
                    font-size: 20px;
                    cursor: pointer;
                    display: flex;
                    align-items: center;
                    gap: 14px;
                    transition: transform 0.2s ease, box-shadow 0.2s ease, background 0.2s ease;
                }

                .cta i {
                    font-size: 18px;
                }

                .cta:hover,
                .cta:focus-visible {
                    transform: translateY(-2px) scale(1.03);
                }

                .cta-solid {
                    background: white;
                    color: black;
                    border: none;
                    box-shadow: 0 20px 50px rgba(255, 255, 255, 0.3);
                }

                .cta-solid:hover,
                .cta-solid:focus-visible {
                    box-shadow: 0 24px 60px rgba(255, 255, 255, 0.45);
                }

                .cta-accent {
                    background: rgba(96, 165, 250, 0.15);
                    backdrop-filter: blur(10px);
                    color: #60a5fa;
                    border: 1px solid rgba(96, 165, 250, 0.3);
                }

                .cta-accent:hover,
                .cta-accent:focus-visible {
                    background: rgba(96, 165, 250, 0.25);
                    border-color: rgba(96, 165, 250, 0.6);
                }

                .cta-ghost {
                    background: rgba(0, 0, 0, 0.3);
                    backdrop-filter: blur(10px);
                    color: white;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                }

                .cta-ghost:hover,
                .cta-ghost:focus-visible {
                    background: rgba(255, 255, 255, 0.1);
                    border-color: rgba(255, 255, 255, 0.4);
                }
                "#}
            </style>
        </div>
    }
}
