use std::rc::Rc;

use glam::{Quat, Vec2};

use crate::api::config::OrreryConfig;
use crate::api::types::{Route, Scope};
use crate::api::view::{View, ViewContext};
use crate::assets::catalog::{BodyFilter, Catalog};
use crate::components::orbiter::{OrbitalMotion, Orbiter};
use crate::core::scene::OrbitScene;
use crate::core::state::ScaleMode;
use crate::input::queue::{Command, InputEvent, InputQueue, KEY_ESCAPE};
use crate::renderer::instance::{BodyRole, RenderBuffer};
use crate::systems::motion;
use crate::systems::picking::pick_nearest;
use crate::systems::render::{
    emit_center, emit_orbiters, pick_targets, Highlight, RingStyle, BODY_EMPHASIS, SUN_COLOR,
    SUN_EMISSIVE,
};
use crate::views::pointer::{PointerAction, PointerTracker};

/// Id reported for the sun in the render buffer.
pub const SUN_ID: &str = "sun";

/// The whole system: the sun plus every catalog body passing the active filter.
pub struct OverviewView {
    catalog: Rc<Catalog>,
    scene: OrbitScene,
    /// Slow rotation of the whole system about Y.
    system_angle: f64,
    pointer: PointerTracker,
    layout: Option<(BodyFilter, ScaleMode)>,
}

impl OverviewView {
    /// Every catalog body gets an orbiter; the filter only toggles visibility,
    /// so bodies keep their phase when tabs change.
    pub fn new(catalog: Rc<Catalog>, config: &OrreryConfig) -> Self {
        let total = catalog.len();
        let mut scene = OrbitScene::with_capacity(total);
        for (i, body) in catalog.bodies().iter().enumerate() {
            let speed = motion::orbital_speed(
                config.motion.body_base_speed,
                config.motion.body_speed_floor,
                body.distance_au,
            );
            let orbit = OrbitalMotion::new(
                motion::initial_angle(i, total),
                speed,
                motion::spin_rate(&config.motion, i),
            );
            scene.spawn(Orbiter::new(body.id.as_str(), orbit).with_color(body.rgb()));
        }
        Self {
            catalog,
            scene,
            system_angle: 0.0,
            pointer: PointerTracker::new(),
            layout: None,
        }
    }

    pub fn scene(&self) -> &OrbitScene {
        &self.scene
    }

    pub fn system_angle(&self) -> f64 {
        self.system_angle
    }

    fn system_rotation(&self) -> Quat {
        Quat::from_rotation_y(self.system_angle as f32)
    }

    /// Re-derive visibility and sizes when the filter or scale mode changed.
    fn sync_layout(&mut self, ctx: &mut ViewContext) {
        let filter = ctx.state.active_filter();
        let mode = ctx.state.scale_mode();
        if self.layout == Some((filter, mode)) {
            return;
        }
        let cfg = &ctx.config.scale;
        for orbiter in self.scene.iter_mut() {
            let Some(body) = self.catalog.get(&orbiter.id) else {
                continue;
            };
            orbiter.active = filter.matches(body.kind);
            orbiter.display_radius = motion::display_radius(body.radius, mode, cfg);
            orbiter.orbit_radius = motion::orbit_distance(body.distance_au, mode, cfg);
        }
        log::debug!(
            "overview layout: filter={} scale={:?}, {} of {} bodies visible",
            filter.tab(),
            mode,
            self.scene.active_count(),
            self.scene.len()
        );
        self.layout = Some((filter, mode));

        // A hidden body can't stay under the pointer.
        if let Some(hovered) = ctx.state.hovered_body() {
            if !self.scene.get(hovered).is_some_and(|o| o.active) {
                ctx.state.set_hovered_body(None);
            }
        }
    }

    /// Nearest visible body under an NDC point.
    fn pick(&self, ctx: &ViewContext, ndc: Vec2) -> Option<String> {
        let (origin, dir) = ctx.camera.screen_ray(ndc.x, ndc.y);
        let highlight = Highlight {
            selected: ctx.state.selected_body(),
            hovered: ctx.state.hovered_body(),
        };
        let targets = pick_targets(&self.scene, self.system_rotation(), &BODY_EMPHASIS, highlight);
        pick_nearest(origin, dir, &targets).map(str::to_string)
    }

    fn close_modal(ctx: &mut ViewContext) {
        ctx.state.set_detail_modal_open(false);
        ctx.state.set_selected_body(None);
    }

    fn handle_pointer(&mut self, ctx: &mut ViewContext, action: PointerAction) {
        match action {
            PointerAction::Hover(p) => {
                let hit = self.pick(ctx, p);
                ctx.state.set_hovered_body(hit);
            }
            PointerAction::Leave => ctx.state.set_hovered_body(None),
            PointerAction::Drag(d) => {
                let speed = ctx.config.controls.rotate_speed;
                ctx.orbit_camera(-d.x * speed, -d.y * speed);
            }
            PointerAction::Click(p) => {
                if let Some(id) = self.pick(ctx, p) {
                    ctx.state.set_selected_body(Some(id));
                    ctx.state.set_detail_modal_open(true);
                }
            }
        }
    }

    fn handle_command(&mut self, ctx: &mut ViewContext, command: Command) {
        let scope = self.scope();
        match command {
            Command::AdjustSpeed(steps) => ctx.adjust_speed(steps),
            Command::AdjustZoom(steps) => {
                let step = ctx.config.controls.zoom_step;
                ctx.zoom_by(scope, -steps * step);
            }
            Command::ResetView => {
                ctx.set_zoom(scope, ctx.config.camera.default_distance);
                Self::close_modal(ctx);
            }
            Command::SetProportionalScale(on) => ctx.state.set_proportional_scale(on),
            Command::SetFilter(filter) => ctx.state.set_active_filter(filter),
            Command::OpenDetails => {
                if ctx.state.detail_modal_open() {
                    if let Some(id) = ctx.state.selected_body() {
                        let route = Route::Body(id.to_string());
                        ctx.request_navigation(route);
                    }
                }
            }
            Command::CloseModal => Self::close_modal(ctx),
            Command::OrbitCamera { yaw, pitch } => ctx.orbit_camera(yaw, pitch),
            Command::SelectSatellite(_) | Command::Back | Command::Resize { .. } => {}
        }
    }
}

impl View for OverviewView {
    fn scope(&self) -> Scope {
        Scope::Overview
    }

    fn enter(&mut self, ctx: &mut ViewContext) {
        ctx.reset_camera(ctx.config.camera.overview_eye);
        let distance = ctx.state.camera_distance();
        ctx.set_zoom(self.scope(), distance);
        self.sync_layout(ctx);
    }

    fn update(&mut self, ctx: &mut ViewContext, input: &InputQueue, dt: f32) {
        let threshold = ctx.config.controls.drag_threshold;
        for event in input.iter() {
            if let Some(action) = self.pointer.handle(event, threshold) {
                self.handle_pointer(ctx, action);
                continue;
            }
            match *event {
                InputEvent::Wheel { delta_y } if delta_y != 0.0 => {
                    let step = ctx.config.controls.wheel_step;
                    ctx.zoom_by(self.scope(), step.copysign(delta_y));
                }
                InputEvent::KeyDown { key_code: KEY_ESCAPE } => {
                    if ctx.state.detail_modal_open() {
                        Self::close_modal(ctx);
                    }
                }
                _ => {
                    if let Some(command) = event.command() {
                        self.handle_command(ctx, command);
                    }
                }
            }
        }

        self.sync_layout(ctx);

        let multiplier = ctx.state.rotation_speed();
        self.scene.advance(dt, multiplier);
        self.system_angle += (dt * multiplier * ctx.config.motion.system_spin) as f64;

        ctx.converge_camera(self.scope(), dt);
    }

    fn render(&self, ctx: &ViewContext, buffer: &mut RenderBuffer) {
        let mode = ctx.state.scale_mode();
        emit_center(
            buffer,
            SUN_ID,
            motion::sun_radius(mode, &ctx.config.scale),
            0.0,
            SUN_COLOR,
            SUN_EMISSIVE,
        );
        emit_orbiters(
            buffer,
            &self.scene,
            self.system_rotation(),
            BodyRole::Body,
            &BODY_EMPHASIS,
            &RingStyle::body(ctx.config.scale.ring_half_width),
            Highlight {
                selected: ctx.state.selected_body(),
                hovered: ctx.state.hovered_body(),
            },
        );
    }
}
