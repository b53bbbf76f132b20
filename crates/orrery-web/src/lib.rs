pub mod runner;

pub use runner::OrreryRunner;

use std::cell::RefCell;

use orrery_engine::{
    BodyInstance, Catalog, InputEvent, Orrery, OrreryConfig, OrreryError, RingInstance,
};
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<OrreryRunner>> = RefCell::new(None);
}

/// Run `f` against the runner. Before `orrery_init` this logs and returns `None`.
fn with_runner<R>(f: impl FnOnce(&mut OrreryRunner) -> R) -> Option<R> {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        match borrow.as_mut() {
            Some(runner) => Some(f(runner)),
            None => {
                log::warn!("orrery not initialized; call orrery_init() first");
                None
            }
        }
    })
}

fn to_js(err: OrreryError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn install(catalog: Catalog, config_json: Option<String>) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = match config_json {
        Some(json) => OrreryConfig::from_json(&json).map_err(to_js)?,
        None => OrreryConfig::default(),
    };
    let runner = OrreryRunner::new(Orrery::new(catalog, config));
    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("orrery: initialized");
    Ok(())
}

/// Load a catalog in the `planets.json` shape and start on the overview.
#[wasm_bindgen]
pub fn orrery_init(catalog_json: &str, config_json: Option<String>) -> Result<(), JsValue> {
    let catalog = Catalog::from_json(catalog_json).map_err(to_js)?;
    install(catalog, config_json)
}

/// Start with the catalog bundled into the module.
#[wasm_bindgen]
pub fn orrery_init_builtin(config_json: Option<String>) -> Result<(), JsValue> {
    let catalog = Catalog::builtin().map_err(to_js)?;
    install(catalog, config_json)
}

#[wasm_bindgen]
pub fn orrery_tick(dt: f32) {
    with_runner(|r| r.tick(dt));
}

// ---- Input ----

#[wasm_bindgen]
pub fn orrery_pointer_down(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
}

#[wasm_bindgen]
pub fn orrery_pointer_up(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerUp { x, y }));
}

#[wasm_bindgen]
pub fn orrery_pointer_move(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
}

#[wasm_bindgen]
pub fn orrery_pointer_leave() {
    with_runner(|r| r.push_input(InputEvent::PointerLeave));
}

#[wasm_bindgen]
pub fn orrery_wheel(delta_y: f32) {
    with_runner(|r| r.push_input(InputEvent::Wheel { delta_y }));
}

#[wasm_bindgen]
pub fn orrery_key_down(key_code: u32) {
    with_runner(|r| r.push_input(InputEvent::KeyDown { key_code }));
}

#[wasm_bindgen]
pub fn orrery_custom_event(kind: u32, a: f32, b: f32, c: f32) {
    with_runner(|r| r.push_input(InputEvent::Custom { kind, a, b, c }));
}

// ---- Navigation ----

#[wasm_bindgen]
pub fn orrery_navigate(path: &str) {
    with_runner(|r| r.navigate(path));
}

#[wasm_bindgen]
pub fn orrery_back() {
    with_runner(|r| r.back());
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_bodies_ptr() -> *const f32 {
    with_runner(|r| r.bodies_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_body_count() -> u32 {
    with_runner(|r| r.body_count()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_body_floats() -> u32 {
    BodyInstance::FLOATS as u32
}

#[wasm_bindgen]
pub fn get_rings_ptr() -> *const f32 {
    with_runner(|r| r.rings_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_ring_count() -> u32 {
    with_runner(|r| r.ring_count()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_ring_floats() -> u32 {
    RingInstance::FLOATS as u32
}

/// View-projection matrix (16 floats, column-major) followed by the eye (4 floats).
#[wasm_bindgen]
pub fn get_camera_ptr() -> *const f32 {
    with_runner(|r| r.camera_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_camera_eye() -> js_sys::Float32Array {
    let eye = with_runner(|r| r.camera_eye()).unwrap_or_default();
    js_sys::Float32Array::from(&eye[..])
}

#[wasm_bindgen]
pub fn get_body_ids_json() -> String {
    with_runner(|r| r.body_ids_json()).unwrap_or_else(|| "[]".to_string())
}

#[wasm_bindgen]
pub fn get_state_json() -> String {
    with_runner(|r| r.state_json()).unwrap_or_default()
}

#[wasm_bindgen]
pub fn get_events_json() -> String {
    with_runner(|r| r.events_json().to_string()).unwrap_or_else(|| "[]".to_string())
}
