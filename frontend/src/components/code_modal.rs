use yew::prelude::*;

use crate::navigation::NavigationOption;
use crate::state::ModalHit;

#[derive(Properties, PartialEq)]
pub struct CodeModalProps {
    pub options: &'static [NavigationOption],
    pub on_hit: Callback<ModalHit>,
    pub on_select: Callback<&'static str>,
}

/// Click handlers for each interactive part of the modal, detached from the
/// DOM event so they can be driven without a browser.
pub struct ModalHandlers {
    pub backdrop: Callback<()>,
    pub panel: Callback<()>,
    pub close: Callback<()>,
    /// One per option, same order as `CodeModalProps::options`.
    pub cards: Vec<Callback<()>>,
}

impl ModalHandlers {
    pub fn new(props: &CodeModalProps) -> Self {
        let hit = |kind: ModalHit| {
            let on_hit = props.on_hit.clone();
            Callback::from(move |_: ()| on_hit.emit(kind))
        };
        let cards = props
            .options
            .iter()
            .map(|option| {
                let on_select = props.on_select.clone();
                let url = option.target_url;
                Callback::from(move |_: ()| on_select.emit(url))
            })
            .collect();
        Self {
            backdrop: hit(ModalHit::Backdrop),
            panel: hit(ModalHit::Panel),
            close: hit(ModalHit::CloseButton),
            cards,
        }
    }
}

fn on_click(handler: &Callback<()>) -> Callback<MouseEvent> {
    let handler = handler.clone();
    Callback::from(move |_: MouseEvent| handler.emit(()))
}

// Clicks handled here must never reach the backdrop.
fn on_click_contained(handler: &Callback<()>) -> Callback<MouseEvent> {
    let handler = handler.clone();
    Callback::from(move |e: MouseEvent| {
        e.stop_propagation();
        handler.emit(());
    })
}

#[function_component(CodeModal)]
pub fn code_modal(props: &CodeModalProps) -> Html {
    let handlers = ModalHandlers::new(props);

    html! {
        <div class="codes-modal-overlay" onclick={on_click(&handlers.backdrop)}>
            <div class="codes-modal-panel" onclick={on_click_contained(&handlers.panel)}>
                <button class="codes-modal-close" aria-label="Fermer" onclick={on_click_contained(&handlers.close)}>
                    <i class="fas fa-xmark"></i>
                </button>
                <h2 class="codes-modal-title">{"Choisissez un code"}</h2>
                <div class="codes-modal-grid">
                    { for props.options.iter().zip(handlers.cards.iter()).map(|(option, select)| {
                        let accent = format!(
                            "--accent: {}; --accent-gradient: {};",
                            option.accent_color, option.accent_gradient
                        );
                        html! {
                            <button class="code-card" style={accent} onclick={on_click(select)}>
                                <span class="card-icon">
                                    <i class={classes!("fas", option.icon_id)}></i>
                                </span>
                                <span class="card-title">{option.title}</span>
                                <span class="card-description">{option.description}</span>
                            </button>
                        }
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .codes-modal-overlay {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    height: 100%;
                    background: rgba(0, 0, 0, 0.7);
                    backdrop-filter: blur(8px);
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    z-index: 1000;
                }

                .codes-modal-panel {
                    position: relative;
                    width: min(900px, 90%);
                    padding: 48px 40px 40px;
                    background: rgba(20, 20, 28, 0.92);
                    border: 1px solid rgba(255, 255, 255, 0.12);
                    border-radius: 28px;
                    box-shadow: 0 30px 80px rgba(0, 0, 0, 0.6);
                    color: white;
                    font-family: system-ui, -apple-system, sans-serif;
                }

                .codes-modal-title {
                    margin: 0 0 32px;
                    font-size: 32px;
                    font-weight: 700;
                    letter-spacing: -0.02em;
                    text-align: center;
                }

                .codes-modal-close {
                    position: absolute;
                    top: 16px;
                    right: 16px;
                    width: 40px;
                    height: 40px;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.08);
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    color: white;
                    font-size: 18px;
                    cursor: pointer;
                    transition: all 0.2s ease;
                }

                .codes-modal-close:hover,
                .codes-modal-close:focus-visible {
                    background: rgba(255, 255, 255, 0.2);
                    transform: rotate(90deg);
                }

                .codes-modal-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 20px;
                }

                .code-card {
                    display: flex;
                    flex-direction: column;
                    align-items: flex-start;
                    gap: 12px;
                    padding: 24px;
                    text-align: left;
                    background: rgba(255, 255, 255, 0.04);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 20px;
                    color: white;
                    cursor: pointer;
                    transition: transform 0.2s ease, border-color 0.2s ease, box-shadow 0.2s ease;
                }

                .code-card:hover,
                .code-card:focus-visible {
                    transform: translateY(-4px);
                    border-color: var(--accent);
                    box-shadow: 0 16px 40px rgba(0, 0, 0, 0.4);
                }

                .card-icon {
                    width: 48px;
                    height: 48px;
                    border-radius: 14px;
                    background: var(--accent-gradient);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 20px;
                }

                .card-title {
                    font-size: 20px;
                    font-weight: 600;
                }

                .card-description {
                    font-size: 14px;
                    color: rgba(255, 255, 255, 0.65);
                }

                .code-card:hover .card-title {
                    color: var(--accent);
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::CODE_OPTIONS;
    use std::cell::RefCell;
    use std::rc::Rc;
    use yew::LocalServerRenderer;

    fn recorder<T: 'static>() -> (Rc<RefCell<Vec<T>>>, Callback<T>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, Callback::from(move |value: T| sink.borrow_mut().push(value)))
    }

    #[test]
    fn each_region_reports_its_own_hit() {
        let (hits, on_hit) = recorder();
        let handlers = ModalHandlers::new(&CodeModalProps {
            options: CODE_OPTIONS,
            on_hit,
            on_select: Callback::noop(),
        });

        handlers.panel.emit(());
        handlers.close.emit(());
        handlers.backdrop.emit(());

        assert_eq!(
            *hits.borrow(),
            vec![ModalHit::Panel, ModalHit::CloseButton, ModalHit::Backdrop]
        );
    }

    #[test]
    fn panel_click_keeps_modal_open() {
        let (hits, on_hit) = recorder();
        let handlers = ModalHandlers::new(&CodeModalProps {
            options: CODE_OPTIONS,
            on_hit,
            on_select: Callback::noop(),
        });

        handlers.panel.emit(());

        assert!(hits.borrow().iter().all(|hit| !hit.dismisses()));
    }

    #[test]
    fn each_card_selects_its_own_target() {
        let (urls, on_select) = recorder();
        let handlers = ModalHandlers::new(&CodeModalProps {
            options: CODE_OPTIONS,
            on_hit: Callback::noop(),
            on_select,
        });
        assert_eq!(handlers.cards.len(), 3);

        for card in &handlers.cards {
            card.emit(());
        }

        assert_eq!(
            *urls.borrow(),
            vec!["./code.html", "./codeAPI_1.html", "./codeAPI_2.html"]
        );
    }

    async fn render_modal() -> String {
        let props = CodeModalProps {
            options: CODE_OPTIONS,
            on_hit: Callback::noop(),
            on_select: Callback::noop(),
        };
        LocalServerRenderer::<CodeModal>::with_props(props)
            .hydratable(false)
            .render()
            .await
    }

    #[tokio::test]
    async fn lists_three_cards_in_order() {
        let html = render_modal().await;
        assert_eq!(html.matches(r#"class="code-card""#).count(), 3);

        let positions: Vec<usize> = ["Code du WebScraping", "Code API V1", "Code API V2"]
            .iter()
            .map(|title| html.find(title).unwrap_or_else(|| panic!("missing {title}")))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
    }

    #[tokio::test]
    async fn renders_close_button_and_backdrop() {
        let html = render_modal().await;
        assert!(html.contains(r#"class="codes-modal-overlay""#));
        assert!(html.contains(r#"class="codes-modal-close""#));
    }

    #[tokio::test]
    async fn cards_carry_their_accent() {
        let html = render_modal().await;
        for option in CODE_OPTIONS {
            assert!(html.contains(option.accent_color), "{}", option.title);
        }
    }

    #[tokio::test]
    async fn reopening_renders_the_same_cards() {
        let first = render_modal().await;
        let second = render_modal().await;
        assert_eq!(first, second);
    }
}
