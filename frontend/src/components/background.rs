//! Animated "color bends" backdrop drawn on a canvas.
//!
//! Each configured color becomes a soft radial blob drifting on its own
//! sinusoidal path; blobs are composited additively so overlaps blend.

use std::cell::Cell;
use std::f64::consts::TAU;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::config::BackgroundConfig;

const FRAME_MS: u32 = 33;

#[derive(Properties, PartialEq)]
pub struct BackgroundProps {
    pub config: BackgroundConfig,
}

#[function_component(ColorBends)]
pub fn color_bends(props: &BackgroundProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |config: &BackgroundConfig| {
                let config = *config;
                let elapsed = Rc::new(Cell::new(0.0_f64));
                let interval = canvas_ref.cast::<HtmlCanvasElement>().and_then(|canvas| {
                    let ctx = match context_2d(&canvas) {
                        Some(ctx) => ctx,
                        None => {
                            warn!("Canvas 2d context unavailable, background stays static");
                            return None;
                        }
                    };
                    Some(Interval::new(FRAME_MS, move || {
                        let t = elapsed.get() + f64::from(FRAME_MS) / 1000.0;
                        elapsed.set(t);
                        if let Err(e) = paint(&canvas, &ctx, &config, t) {
                            warn!("Background frame failed: {:?}", e);
                        }
                    }))
                });
                // Dropping the interval cancels it.
                move || drop(interval)
            },
            props.config,
        );
    }

    html! {
        <canvas ref={canvas_ref} class="color-bends" style="display: block; width: 100%; height: 100%;"></canvas>
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

fn paint(
    canvas: &HtmlCanvasElement,
    ctx: &CanvasRenderingContext2d,
    config: &BackgroundConfig,
    t: f64,
) -> Result<(), JsValue> {
    let width = canvas.client_width().max(1) as u32;
    let height = canvas.client_height().max(1) as u32;
    if canvas.width() != width || canvas.height() != height {
        canvas.set_width(width);
        canvas.set_height(height);
    }
    let (w, h) = (f64::from(width), f64::from(height));

    ctx.set_global_composite_operation("source-over")?;
    if config.transparent {
        ctx.clear_rect(0.0, 0.0, w, h);
    } else {
        ctx.set_fill_style_str("#000");
        ctx.fill_rect(0.0, 0.0, w, h);
    }

    ctx.set_global_composite_operation("lighter")?;
    let radius = blob_radius(w, h, config.scale);
    for (index, color) in config.colors.iter().enumerate() {
        let (nx, ny) = blob_center(index, config.colors.len(), t, config);
        let (x, y) = (nx * w, ny * h);
        let gradient = ctx.create_radial_gradient(x, y, 0.0, x, y, radius)?;
        gradient.add_color_stop(0.0, color)?;
        gradient.add_color_stop(1.0, "rgba(0, 0, 0, 0)")?;
        ctx.set_fill_style_canvas_gradient(&gradient);
        ctx.fill_rect(0.0, 0.0, w, h);
    }
    Ok(())
}

fn blob_radius(w: f64, h: f64, scale: f64) -> f64 {
    w.max(h) * 0.6 * scale.max(0.05)
}

/// Blob position in unit coordinates. Stays inside `[0, 1]` for any
/// `warp_strength` since the swing is clamped.
fn blob_center(index: usize, count: usize, t: f64, config: &BackgroundConfig) -> (f64, f64) {
    let phase = TAU * index as f64 / count.max(1) as f64;
    let speed = 0.35 * config.frequency;
    let swing = (0.3 * config.warp_strength).clamp(0.0, 0.5);
    let x = 0.5 + swing * (t * speed + phase).sin();
    let y = 0.5 + swing * (t * speed * 1.3 + phase * 0.7).cos();
    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BACKGROUND;

    #[test]
    fn centers_stay_on_canvas_even_with_strong_warp() {
        let config = BackgroundConfig { warp_strength: 10.0, ..BACKGROUND };
        for i in 0..config.colors.len() {
            for step in 0..200 {
                let (x, y) = blob_center(i, config.colors.len(), step as f64 * 0.1, &config);
                assert!((0.0..=1.0).contains(&x) && (0.0..=1.0).contains(&y), "({x}, {y})");
            }
        }
    }

    #[test]
    fn blobs_start_apart() {
        let n = BACKGROUND.colors.len();
        let a = blob_center(0, n, 0.0, &BACKGROUND);
        let b = blob_center(1, n, 0.0, &BACKGROUND);
        assert!((a.0 - b.0).abs() + (a.1 - b.1).abs() > 0.1);
    }

    #[test]
    fn zero_frequency_freezes_blobs() {
        let config = BackgroundConfig { frequency: 0.0, ..BACKGROUND };
        assert_eq!(blob_center(2, 3, 0.0, &config), blob_center(2, 3, 42.0, &config));
    }

    #[test]
    fn radius_follows_scale() {
        let full = blob_radius(1000.0, 500.0, 1.0);
        let half = blob_radius(1000.0, 500.0, 0.5);
        assert!((full - 600.0).abs() < 1e-9);
        assert!((half * 2.0 - full).abs() < 1e-9);
    }
}
