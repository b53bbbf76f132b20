use serde::Serialize;

use crate::api::types::Route;
use crate::assets::catalog::BodyFilter;

pub const DEFAULT_ROTATION_SPEED: f32 = 1.0;
pub const DEFAULT_CAMERA_DISTANCE: f32 = 15.0;

/// How display radii are derived from true radii.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScaleMode {
    /// Cube-root compression; small bodies stay clickable.
    Compressed,
    /// True ratios, uniformly scaled down.
    Proportional,
}

/// The single mutable record every view reads and writes.
///
/// Setters replace the field unconditionally and never fail. Range-bounded
/// fields (`rotation_speed`, `camera_distance`) are clamped by the caller
/// using `SPEED_BOUNDS` / `Scope::zoom_bounds` before writing. Coupled
/// transitions (select + open modal, close modal + clear selection) are the
/// caller's job too; each field here is independent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionState {
    selected_body: Option<String>,
    selected_satellite: Option<String>,
    hovered_body: Option<String>,
    hovered_satellite: Option<String>,
    rotation_speed: f32,
    camera_distance: f32,
    active_filter: BodyFilter,
    detail_modal_open: bool,
    satellite_modal_open: bool,
    proportional_scale: bool,
    pending_navigation: bool,
    prior_route: Option<Route>,
}

impl InteractionState {
    pub fn new() -> Self {
        Self {
            selected_body: None,
            selected_satellite: None,
            hovered_body: None,
            hovered_satellite: None,
            rotation_speed: DEFAULT_ROTATION_SPEED,
            camera_distance: DEFAULT_CAMERA_DISTANCE,
            active_filter: BodyFilter::All,
            detail_modal_open: false,
            satellite_modal_open: false,
            proportional_scale: false,
            pending_navigation: false,
            prior_route: None,
        }
    }

    // -- Selection --

    pub fn selected_body(&self) -> Option<&str> {
        self.selected_body.as_deref()
    }

    pub fn set_selected_body(&mut self, id: Option<String>) {
        self.selected_body = id;
    }

    pub fn selected_satellite(&self) -> Option<&str> {
        self.selected_satellite.as_deref()
    }

    pub fn set_selected_satellite(&mut self, id: Option<String>) {
        self.selected_satellite = id;
    }

    // -- Hover --

    pub fn hovered_body(&self) -> Option<&str> {
        self.hovered_body.as_deref()
    }

    pub fn set_hovered_body(&mut self, id: Option<String>) {
        self.hovered_body = id;
    }

    pub fn hovered_satellite(&self) -> Option<&str> {
        self.hovered_satellite.as_deref()
    }

    pub fn set_hovered_satellite(&mut self, id: Option<String>) {
        self.hovered_satellite = id;
    }

    // -- Playback and camera --

    pub fn rotation_speed(&self) -> f32 {
        self.rotation_speed
    }

    pub fn set_rotation_speed(&mut self, speed: f32) {
        self.rotation_speed = speed;
    }

    pub fn camera_distance(&self) -> f32 {
        self.camera_distance
    }

    pub fn set_camera_distance(&mut self, distance: f32) {
        self.camera_distance = distance;
    }

    // -- View mode --

    pub fn active_filter(&self) -> BodyFilter {
        self.active_filter
    }

    pub fn set_active_filter(&mut self, filter: BodyFilter) {
        self.active_filter = filter;
    }

    pub fn proportional_scale(&self) -> bool {
        self.proportional_scale
    }

    pub fn set_proportional_scale(&mut self, value: bool) {
        self.proportional_scale = value;
    }

    pub fn scale_mode(&self) -> ScaleMode {
        if self.proportional_scale {
            ScaleMode::Proportional
        } else {
            ScaleMode::Compressed
        }
    }

    // -- Modals --

    pub fn detail_modal_open(&self) -> bool {
        self.detail_modal_open
    }

    pub fn set_detail_modal_open(&mut self, open: bool) {
        self.detail_modal_open = open;
    }

    pub fn satellite_modal_open(&self) -> bool {
        self.satellite_modal_open
    }

    pub fn set_satellite_modal_open(&mut self, open: bool) {
        self.satellite_modal_open = open;
    }

    // -- Navigation --

    pub fn pending_navigation(&self) -> bool {
        self.pending_navigation
    }

    pub fn set_pending_navigation(&mut self, pending: bool) {
        self.pending_navigation = pending;
    }

    pub fn prior_route(&self) -> Option<&Route> {
        self.prior_route.as_ref()
    }

    pub fn set_prior_route(&mut self, route: Option<Route>) {
        self.prior_route = route;
    }
}

impl Default for InteractionState {
    fn default() -> Self {
        Self::new()
    }
}
