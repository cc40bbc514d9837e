//! Browser binding for the renderer.
//!
//! The JS side speaks the stateful `init` / `height` / `surfacePosition`
//! protocol, so the configured planet lives in a thread-local
//! [`PlanetState`]; wasm has a single thread and every call runs to
//! completion, so readers never see a half-applied `init`.
use std::cell::RefCell;

use js_sys::Float32Array;
use planet_core::{PlanetError, PlanetSettings, PlanetState};
use wasm_bindgen::prelude::*;

// rand pulls in getrandom; its "js" backend must be linked for wasm32 even
// though the permutation shuffle never asks for OS entropy.
use getrandom as _;

thread_local! {
    static PLANET: RefCell<PlanetState> = RefCell::new(PlanetState::default());
}

fn to_js(err: PlanetError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

// ── JS-free core of each export (exercised by native tests) ──────────────────

fn init_state(seed: i32, scale: f32, radius: f32) {
    // JS numbers arrive as i32; the seed is the same 32 bits read unsigned.
    let seed = seed as u32;
    PLANET.with(|p| p.borrow_mut().init(seed, scale, radius));
}

fn init_state_from_json(settings_json: &str) -> Result<(), PlanetError> {
    let s = PlanetSettings::from_json(settings_json)?;
    PLANET.with(|p| p.borrow_mut().init(s.seed, s.scale, s.radius));
    Ok(())
}

fn height_of(x: f32, y: f32, z: f32) -> Result<f32, PlanetError> {
    PLANET.with(|p| p.borrow().height(x, y, z))
}

fn position_of(x: f32, y: f32, z: f32) -> Result<[f32; 3], PlanetError> {
    PLANET.with(|p| p.borrow().surface_position(x, y, z))
}

fn positions_of(directions: &[f32]) -> Result<Vec<f32>, PlanetError> {
    PLANET.with(|p| Ok(p.borrow().config()?.surface_positions(directions)))
}

// ── Exports ───────────────────────────────────────────────────────────────────

/// Configure the planet. Calling again replaces the previous planet entirely.
#[wasm_bindgen(js_name = init)]
pub fn init_planet(seed: i32, scale: f32, radius: f32) {
    init_state(seed, scale, radius);
}

/// Configure from a `{"seed", "scale", "radius"}` JSON string.
#[wasm_bindgen(js_name = initFromJson)]
pub fn init_from_json(settings_json: &str) -> Result<(), JsValue> {
    init_state_from_json(settings_json).map_err(to_js)
}

/// Signed elevation (sea level 0) in direction `(x, y, z)`.
/// Throws if `init` has not been called.
#[wasm_bindgen]
pub fn height(x: f32, y: f32, z: f32) -> Result<f32, JsValue> {
    height_of(x, y, z).map_err(to_js)
}

/// Displaced surface point above `(x, y, z)` as a 3-element Float32Array.
#[wasm_bindgen(js_name = surfacePosition)]
pub fn surface_position(x: f32, y: f32, z: f32) -> Result<Float32Array, JsValue> {
    let p = position_of(x, y, z).map_err(to_js)?;
    Ok(Float32Array::from(&p[..]))
}

/// Displace a packed xyz direction buffer (one triple per mesh vertex).
#[wasm_bindgen(js_name = surfacePositions)]
pub fn surface_positions(directions: &[f32]) -> Result<Vec<f32>, JsValue> {
    positions_of(directions).map_err(to_js)
}

/// The derived noise parameters of the configured planet, as a JS object.
#[wasm_bindgen(js_name = noiseParams)]
pub fn noise_params() -> Result<JsValue, JsValue> {
    let params = PLANET.with(|p| p.borrow().config().map(|c| *c.params())).map_err(to_js)?;
    serde_wasm_bindgen::to_value(&params).map_err(|e| JsValue::from_str(&e.to_string()))
}
