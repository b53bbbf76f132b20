use orrery_engine::{
    BodyFilter, CameraUniform, FrameClock, InputEvent, InputQueue, Orrery, RenderBuffer, Route,
};
use serde_json::json;

/// Wires the orrery into the browser frame loop.
///
/// `lib.rs` keeps one runner in a `thread_local!` and exports free functions
/// via `#[wasm_bindgen]`; this type holds everything those functions touch.
pub struct OrreryRunner {
    app: Orrery,
    input: InputQueue,
    clock: FrameClock,
    render_buffer: RenderBuffer,
    camera: CameraUniform,
    /// Events of the last tick, serialized for JavaScript.
    events_json: String,
}

impl OrreryRunner {
    pub fn new(app: Orrery) -> Self {
        let clock = FrameClock::new(app.config().max_frame_dt);
        let camera = app.camera_uniform();
        let mut render_buffer = RenderBuffer::new();
        app.render(&mut render_buffer);
        Self {
            app,
            input: InputQueue::new(),
            clock,
            render_buffer,
            camera,
            events_json: "[]".to_string(),
        }
    }

    pub fn app(&self) -> &Orrery {
        &self.app
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Navigate from a URL path. Takes effect immediately; the resulting
    /// events are reported with the next tick.
    pub fn navigate(&mut self, path: &str) {
        self.app.navigate(Route::from_path(path));
    }

    pub fn back(&mut self) {
        self.app.back();
    }

    /// Run one frame: update with the sanitized delta, rebuild render data,
    /// and publish this frame's events.
    pub fn tick(&mut self, raw_dt: f32) {
        let dt = self.clock.tick(raw_dt);

        self.app.update(&self.input, dt);
        self.input.clear();

        self.app.render(&mut self.render_buffer);
        self.camera = self.app.camera_uniform();

        self.events_json = serde_json::to_string(self.app.events()).unwrap_or_else(|err| {
            log::warn!("failed to serialize view events: {err}");
            "[]".to_string()
        });
        self.app.clear_frame_data();
    }

    // ---- Pointer accessors for JavaScript reads ----

    pub fn bodies_ptr(&self) -> *const f32 {
        self.render_buffer.bodies_ptr()
    }

    pub fn body_count(&self) -> u32 {
        self.render_buffer.body_count()
    }

    pub fn rings_ptr(&self) -> *const f32 {
        self.render_buffer.rings_ptr()
    }

    pub fn ring_count(&self) -> u32 {
        self.render_buffer.ring_count()
    }

    pub fn camera_ptr(&self) -> *const f32 {
        &self.camera as *const CameraUniform as *const f32
    }

    pub fn camera_eye(&self) -> [f32; 3] {
        let [x, y, z, _] = self.camera.eye;
        [x, y, z]
    }

    // ---- JSON snapshots ----

    pub fn events_json(&self) -> &str {
        &self.events_json
    }

    /// Catalog ids matching the body instances, in buffer order.
    pub fn body_ids_json(&self) -> String {
        json!(self.render_buffer.body_ids).to_string()
    }

    /// Interaction state plus the derived values the panels display.
    pub fn state_json(&self) -> String {
        let counts: serde_json::Map<String, serde_json::Value> = BodyFilter::ALL
            .iter()
            .map(|f| (f.tab().to_string(), json!(self.app.catalog().count(*f))))
            .collect();
        json!({
            "state": self.app.state(),
            "route": self.app.route().path(),
            "scope": self.app.scope(),
            "satellites": self.app.satellite_summary(),
            "filterCounts": counts,
        })
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_engine::{BodyInstance, Catalog, Command, OrreryConfig};

    fn runner() -> OrreryRunner {
        let catalog = Catalog::builtin().unwrap();
        OrreryRunner::new(Orrery::new(catalog, OrreryConfig::default()))
    }

    #[test]
    fn renders_before_first_tick() {
        let r = runner();
        assert_eq!(r.body_count(), 9);
        assert_eq!(r.ring_count(), 8);
    }

    #[test]
    fn tick_drains_input() {
        let mut r = runner();
        r.push_input(InputEvent::Command(Command::AdjustSpeed(1.0)));
        r.tick(0.016);
        r.tick(0.016);
        assert_eq!(r.app().state().rotation_speed(), 1.5);
    }

    #[test]
    fn stalled_frame_is_capped() {
        let mut r = runner();
        let before = r.render_buffer.bodies[1];
        r.tick(f32::NAN);
        assert_eq!(r.render_buffer.bodies[1], before);
        r.tick(-1.0);
        assert_eq!(r.render_buffer.bodies[1], before);
    }

    #[test]
    fn events_reported_once() {
        let mut r = runner();
        r.navigate("/planet/mars");
        r.tick(0.016);
        assert_eq!(r.events_json(), r#"[{"kind":"route-changed","path":"/planet/mars"}]"#);
        r.tick(0.016);
        assert_eq!(r.events_json(), "[]");
    }

    #[test]
    fn unknown_route_reports_redirect() {
        let mut r = runner();
        r.navigate("/planet/nowhere");
        r.tick(0.016);
        assert!(r.events_json().contains("redirected"));
        assert_eq!(r.app().route(), &Route::Overview);
    }

    #[test]
    fn state_json_has_panel_fields() {
        let mut r = runner();
        r.navigate("/planet/jupiter");
        r.tick(0.016);
        let v: serde_json::Value = serde_json::from_str(&r.state_json()).unwrap();
        assert_eq!(v["route"], "/planet/jupiter");
        assert_eq!(v["scope"], "detail");
        assert_eq!(v["state"]["selectedBody"], "jupiter");
        assert_eq!(v["state"]["cameraDistance"], 8.0);
        assert_eq!(v["filterCounts"]["all"], 8);
        assert_eq!(v["filterCounts"]["terrestrial"], 4);
        assert_eq!(v["satellites"]["total"], 12);
        assert_eq!(v["satellites"]["shown"], 10);
    }

    #[test]
    fn camera_pointer_reads_uniform() {
        let r = runner();
        let floats = std::mem::size_of::<CameraUniform>() / 4;
        let data = unsafe { std::slice::from_raw_parts(r.camera_ptr(), floats) };
        assert_eq!(&data[16..19], &r.camera_eye());
        assert_eq!(data[19], 1.0);
    }

    #[test]
    fn body_ids_line_up_with_instances() {
        let r = runner();
        let ids: Vec<String> = serde_json::from_str(&r.body_ids_json()).unwrap();
        assert_eq!(ids.len(), r.body_count() as usize);
        assert_eq!(ids[0], "sun");
        assert_eq!(std::mem::size_of::<BodyInstance>(), 48);
    }
}
