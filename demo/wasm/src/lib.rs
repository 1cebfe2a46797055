use wasm_bindgen::prelude::*;

use ugly_avatar::svg::{render_svg, RenderOptions};
use ugly_avatar::{generate_avatar as generate, to_polyline_path, to_smooth_path, PointD};

mod convert;

/// Install the panic hook and route `log` output to the browser console.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // A second init (e.g. module re-instantiation) keeps the first logger.
    let _ = console_log::init_with_level(log::Level::Warn);
}

/// Generate an avatar and return it as a plain JS object.
///
/// Field names mirror the data model in camelCase (`faceShape`,
/// `hairLines`, `hasRainbowHair`, ...); points are `{x, y}` objects and
/// colors `#rrggbb` strings. Passing the same seed twice yields the same
/// avatar; `undefined` draws a fresh one.
#[wasm_bindgen(js_name = generateAvatar)]
pub fn generate_avatar(seed: Option<String>) -> Result<JsValue, JsValue> {
    let avatar = generate(seed.as_deref());
    convert::avatar_to_js(&avatar)
}

/// Generate an avatar and return it as SVG markup, `size` pixels square.
#[wasm_bindgen(js_name = generateAvatarSvg)]
pub fn generate_avatar_svg(seed: Option<String>, size: u32) -> String {
    let avatar = generate(seed.as_deref());
    let opts = RenderOptions {
        size,
        ..RenderOptions::default()
    };
    render_svg(&avatar, &opts)
}

/// Quadratic-smoothed SVG path data through the points `(xs[i], ys[i])`.
#[wasm_bindgen(js_name = smoothPath)]
pub fn smooth_path(xs: &[f64], ys: &[f64]) -> String {
    to_smooth_path(&zip_points(xs, ys)).to_svg_data()
}

/// Straight-line SVG path data through the points `(xs[i], ys[i])`.
#[wasm_bindgen(js_name = polylinePath)]
pub fn polyline_path(xs: &[f64], ys: &[f64]) -> String {
    to_polyline_path(&zip_points(xs, ys)).to_svg_data()
}

/// Get the library version string.
#[wasm_bindgen]
pub fn version() -> String {
    format!("ugly-avatar {}", env!("CARGO_PKG_VERSION"))
}

/// Pairs coordinates up to the shorter of the two slices.
fn zip_points(xs: &[f64], ys: &[f64]) -> Vec<PointD> {
    xs.iter()
        .zip(ys)
        .map(|(&x, &y)| PointD::new(x, y))
        .collect()
}
