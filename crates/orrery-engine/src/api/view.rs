use glam::Vec3;

use crate::api::config::OrreryConfig;
use crate::api::types::{Route, Scope, ViewEvent, SPEED_BOUNDS};
use crate::core::state::InteractionState;
use crate::input::queue::InputQueue;
use crate::renderer::camera::Camera3D;
use crate::renderer::instance::RenderBuffer;
use crate::views::detail::SatelliteSummary;

/// The contract each scope (overview, body detail) fulfills.
pub trait View {
    fn scope(&self) -> Scope;

    /// Called when the view becomes active. Applies scope-local defaults.
    fn enter(&mut self, ctx: &mut ViewContext);

    /// One frame: apply input, then advance motion and camera by `dt` seconds.
    fn update(&mut self, ctx: &mut ViewContext, input: &InputQueue, dt: f32);

    /// Called when the view is replaced. Undo scope-local overrides here.
    fn exit(&mut self, _ctx: &mut ViewContext) {}

    /// Fill `buffer` with this frame's instances. The buffer arrives cleared.
    fn render(&self, ctx: &ViewContext, buffer: &mut RenderBuffer);

    /// Shown/total satellite counts, for scopes that draw satellites.
    fn satellite_summary(&self) -> Option<SatelliteSummary> {
        None
    }
}

/// Mutable state shared by every view, passed to `View` methods.
pub struct ViewContext {
    pub state: InteractionState,
    pub camera: Camera3D,
    pub config: OrreryConfig,
    pub events: Vec<ViewEvent>,
    pending_route: Option<Route>,
}

impl ViewContext {
    pub fn new(config: OrreryConfig) -> Self {
        let mut state = InteractionState::new();
        state.set_camera_distance(config.camera.default_distance);
        Self {
            state,
            camera: Camera3D::from_config(&config.camera),
            config,
            events: Vec::new(),
            pending_route: None,
        }
    }

    /// Ask the app to switch routes once the current update returns.
    pub fn request_navigation(&mut self, route: Route) {
        self.pending_route = Some(route);
    }

    pub fn take_navigation(&mut self) -> Option<Route> {
        self.pending_route.take()
    }

    /// Emit an event to be forwarded to JavaScript.
    pub fn emit_event(&mut self, event: ViewEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }

    // -- Clamped writes --

    /// Change the rotation multiplier by `steps` speed steps, clamped to [0, 5].
    pub fn adjust_speed(&mut self, steps: f32) {
        let speed = self.state.rotation_speed() + steps * self.config.controls.speed_step;
        self.state.set_rotation_speed(SPEED_BOUNDS.clamp(speed));
    }

    /// Set the target camera distance, clamped to the scope's bound.
    pub fn set_zoom(&mut self, scope: Scope, distance: f32) {
        self.state.set_camera_distance(scope.zoom_bounds().clamp(distance));
    }

    /// Move the target distance by `delta`, clamped to the scope's bound.
    pub fn zoom_by(&mut self, scope: Scope, delta: f32) {
        self.set_zoom(scope, self.state.camera_distance() + delta);
    }

    /// Ease the camera towards the stored distance, clamped for `scope` first.
    pub fn converge_camera(&mut self, scope: Scope, dt: f32) {
        let target = scope.zoom_bounds().clamp(self.state.camera_distance());
        let cfg = &self.config.camera;
        self.camera
            .converge(target, cfg.convergence_fraction, cfg.convergence_epsilon, dt);
    }

    /// Rotate the camera from a drag or an orbit command.
    pub fn orbit_camera(&mut self, yaw: f32, pitch: f32) {
        self.camera.orbit(yaw, pitch);
    }

    /// Place the camera at a scope's starting eye position.
    pub fn reset_camera(&mut self, eye: [f32; 3]) {
        self.camera.reset(Vec3::from_array(eye));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_stays_in_bounds() {
        let mut ctx = ViewContext::new(OrreryConfig::default());
        for _ in 0..20 {
            ctx.adjust_speed(1.0);
        }
        assert_eq!(ctx.state.rotation_speed(), 5.0);
        for _ in 0..30 {
            ctx.adjust_speed(-1.0);
            assert!(SPEED_BOUNDS.contains(ctx.state.rotation_speed()));
        }
        assert_eq!(ctx.state.rotation_speed(), 0.0);
    }

    #[test]
    fn zoom_clamps_per_scope() {
        let mut ctx = ViewContext::new(OrreryConfig::default());
        ctx.set_zoom(Scope::Overview, 2.0);
        assert_eq!(ctx.state.camera_distance(), 5.0);
        ctx.set_zoom(Scope::Detail, 2.0);
        assert_eq!(ctx.state.camera_distance(), 3.0);
        ctx.zoom_by(Scope::Detail, 100.0);
        assert_eq!(ctx.state.camera_distance(), 30.0);
    }

    #[test]
    fn camera_target_is_clamped_before_converging() {
        let mut ctx = ViewContext::new(OrreryConfig::default());
        ctx.state.set_camera_distance(500.0);
        for _ in 0..600 {
            ctx.converge_camera(Scope::Overview, 1.0 / 60.0);
            assert!(ctx.camera.distance() <= 100.0 + 1e-3);
        }
        assert!((ctx.camera.distance() - 100.0).abs() < 0.2);
    }

    #[test]
    fn navigation_request_is_taken_once() {
        let mut ctx = ViewContext::new(OrreryConfig::default());
        ctx.request_navigation(Route::Body("mars".into()));
        assert_eq!(ctx.take_navigation(), Some(Route::Body("mars".into())));
        assert_eq!(ctx.take_navigation(), None);
    }
}
