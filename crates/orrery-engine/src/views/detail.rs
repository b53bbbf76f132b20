use std::fmt;
use std::rc::Rc;

use glam::{Quat, Vec2};
use serde::Serialize;

use crate::api::config::OrreryConfig;
use crate::api::types::Scope;
use crate::api::view::{View, ViewContext};
use crate::assets::catalog::{Catalog, CelestialBody};
use crate::components::orbiter::{OrbitalMotion, Orbiter};
use crate::core::scene::OrbitScene;
use crate::input::queue::{Command, InputEvent, InputQueue, KEY_ESCAPE};
use crate::renderer::instance::{BodyRole, RenderBuffer};
use crate::systems::motion;
use crate::systems::picking::pick_nearest;
use crate::systems::render::{
    emit_center, emit_orbiters, pick_targets, Highlight, RingStyle, CENTER_EMISSIVE,
    SATELLITE_EMPHASIS,
};
use crate::views::pointer::{PointerAction, PointerTracker};

/// How many satellites are drawn versus how many the body has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SatelliteSummary {
    pub shown: usize,
    pub total: usize,
}

impl SatelliteSummary {
    pub fn is_truncated(&self) -> bool {
        self.shown < self.total
    }
}

impl fmt::Display for SatelliteSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.shown, self.total)
    }
}

/// One body at the center with its first N satellites orbiting it.
pub struct DetailView {
    catalog: Rc<Catalog>,
    body_id: String,
    scene: OrbitScene,
    center_spin: f64,
    pointer: PointerTracker,
    summary: SatelliteSummary,
}

impl DetailView {
    /// `body_id` should exist in the catalog; an unknown id yields an empty scene.
    pub fn new(catalog: Rc<Catalog>, body_id: impl Into<String>, config: &OrreryConfig) -> Self {
        let body_id = body_id.into();
        let satellites = catalog
            .get(&body_id)
            .map(|b| b.satellites.as_slice())
            .unwrap_or_default();
        let total = satellites.len();
        let shown = total.min(config.max_satellites);

        let mut scene = OrbitScene::with_capacity(shown);
        for (i, sat) in satellites.iter().take(shown).enumerate() {
            let distance = motion::satellite_distance(i, &config.scale);
            let speed = motion::orbital_speed(
                config.motion.satellite_base_speed,
                config.motion.satellite_speed_floor,
                distance,
            );
            let orbit = OrbitalMotion::new(
                motion::initial_angle(i, shown),
                speed,
                motion::spin_rate(&config.motion, i),
            );
            scene.spawn(
                Orbiter::new(sat.id.as_str(), orbit)
                    .with_color(sat.rgb())
                    .with_display_radius(motion::satellite_radius(sat.radius, &config.scale))
                    .with_orbit_radius(distance),
            );
        }

        Self {
            summary: SatelliteSummary { shown, total },
            catalog,
            body_id,
            scene,
            center_spin: 0.0,
            pointer: PointerTracker::new(),
        }
    }

    pub fn body_id(&self) -> &str {
        &self.body_id
    }

    pub fn body(&self) -> Option<&CelestialBody> {
        self.catalog.get(&self.body_id)
    }

    pub fn summary(&self) -> SatelliteSummary {
        self.summary
    }

    pub fn scene(&self) -> &OrbitScene {
        &self.scene
    }

    pub fn center_spin(&self) -> f64 {
        self.center_spin
    }

    fn pick(&self, ctx: &ViewContext, ndc: Vec2) -> Option<String> {
        let (origin, dir) = ctx.camera.screen_ray(ndc.x, ndc.y);
        let highlight = Highlight {
            selected: ctx.state.selected_satellite(),
            hovered: ctx.state.hovered_satellite(),
        };
        let targets = pick_targets(&self.scene, Quat::IDENTITY, &SATELLITE_EMPHASIS, highlight);
        pick_nearest(origin, dir, &targets).map(str::to_string)
    }

    fn open_satellite(ctx: &mut ViewContext, id: String) {
        ctx.state.set_selected_satellite(Some(id));
        ctx.state.set_satellite_modal_open(true);
    }

    fn close_modal(ctx: &mut ViewContext) {
        ctx.state.set_satellite_modal_open(false);
        ctx.state.set_selected_satellite(None);
    }

    /// Select from the full satellite list, including ones beyond the render cap.
    fn select_by_index(&self, ctx: &mut ViewContext, index: usize) {
        match self.body().and_then(|b| b.satellites.get(index)) {
            Some(sat) => Self::open_satellite(ctx, sat.id.clone()),
            None => log::warn!(
                "satellite index {index} out of range for `{}`",
                self.body_id
            ),
        }
    }

    fn handle_pointer(&mut self, ctx: &mut ViewContext, action: PointerAction) {
        match action {
            PointerAction::Hover(p) => {
                let hit = self.pick(ctx, p);
                ctx.state.set_hovered_satellite(hit);
            }
            PointerAction::Leave => ctx.state.set_hovered_satellite(None),
            PointerAction::Drag(d) => {
                let speed = ctx.config.controls.rotate_speed;
                ctx.orbit_camera(-d.x * speed, -d.y * speed);
            }
            PointerAction::Click(p) => {
                if let Some(id) = self.pick(ctx, p) {
                    Self::open_satellite(ctx, id);
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
                ctx.set_zoom(scope, ctx.config.camera.detail_distance);
                Self::close_modal(ctx);
            }
            Command::SetProportionalScale(on) => ctx.state.set_proportional_scale(on),
            Command::SetFilter(filter) => ctx.state.set_active_filter(filter),
            Command::CloseModal => Self::close_modal(ctx),
            Command::SelectSatellite(index) => self.select_by_index(ctx, index),
            Command::OrbitCamera { yaw, pitch } => ctx.orbit_camera(yaw, pitch),
            Command::OpenDetails | Command::Back | Command::Resize { .. } => {}
        }
    }
}

impl View for DetailView {
    fn scope(&self) -> Scope {
        Scope::Detail
    }

    fn enter(&mut self, ctx: &mut ViewContext) {
        ctx.state.set_selected_body(Some(self.body_id.clone()));
        ctx.state.set_selected_satellite(None);
        ctx.state.set_hovered_satellite(None);
        ctx.state.set_satellite_modal_open(false);
        ctx.set_zoom(self.scope(), ctx.config.camera.detail_distance);
        ctx.reset_camera(ctx.config.camera.detail_eye);
        log::info!(
            "detail view `{}`: {} satellites",
            self.body_id,
            self.summary
        );
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
                    if ctx.state.satellite_modal_open() {
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

        let multiplier = ctx.state.rotation_speed();
        self.scene.advance(dt, multiplier);
        self.center_spin += (dt * multiplier * ctx.config.motion.center_spin) as f64;

        ctx.converge_camera(self.scope(), dt);
    }

    /// Restores the overview distance and drops everything scoped to this body.
    fn exit(&mut self, ctx: &mut ViewContext) {
        ctx.set_zoom(Scope::Overview, ctx.config.camera.default_distance);
        ctx.state.set_selected_body(None);
        ctx.state.set_selected_satellite(None);
        ctx.state.set_hovered_satellite(None);
        ctx.state.set_satellite_modal_open(false);
    }

    fn render(&self, ctx: &ViewContext, buffer: &mut RenderBuffer) {
        let Some(body) = self.body() else {
            return;
        };
        emit_center(
            buffer,
            &self.body_id,
            motion::center_radius(body.radius, &ctx.config.scale),
            self.center_spin as f32,
            body.rgb(),
            CENTER_EMISSIVE,
        );
        emit_orbiters(
            buffer,
            &self.scene,
            Quat::IDENTITY,
            BodyRole::Satellite,
            &SATELLITE_EMPHASIS,
            &RingStyle::satellite(ctx.config.scale.satellite_ring_half_width),
            Highlight {
                selected: ctx.state.selected_satellite(),
                hovered: ctx.state.hovered_satellite(),
            },
        );
    }

    fn satellite_summary(&self) -> Option<SatelliteSummary> {
        Some(self.summary)
    }
}
