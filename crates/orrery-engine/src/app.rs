use std::rc::Rc;

use crate::api::config::OrreryConfig;
use crate::api::types::{Route, Scope, ViewEvent};
use crate::api::view::{View, ViewContext};
use crate::assets::catalog::Catalog;
use crate::core::state::InteractionState;
use crate::input::queue::{Command, InputQueue};
use crate::renderer::camera::{Camera3D, CameraUniform};
use crate::renderer::instance::RenderBuffer;
use crate::views::detail::{DetailView, SatelliteSummary};
use crate::views::overview::OverviewView;

/// Seconds after a route change before `pending_navigation` clears.
pub const NAVIGATION_SETTLE_SECS: f32 = 0.5;

/// Owns the interaction state and the active view, and switches views on
/// route changes.
pub struct Orrery {
    catalog: Rc<Catalog>,
    ctx: ViewContext,
    view: Box<dyn View>,
    route: Route,
    settle_remaining: f32,
}

impl Orrery {
    /// Start on the overview with default interaction state.
    pub fn new(catalog: Catalog, config: OrreryConfig) -> Self {
        let catalog = Rc::new(catalog);
        let mut ctx = ViewContext::new(config);
        let mut view: Box<dyn View> = Box::new(OverviewView::new(catalog.clone(), &ctx.config));
        view.enter(&mut ctx);
        log::info!("orrery: {} bodies loaded", catalog.len());
        Self {
            catalog,
            ctx,
            view,
            route: Route::Overview,
            settle_remaining: 0.0,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &OrreryConfig {
        &self.ctx.config
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn scope(&self) -> Scope {
        self.view.scope()
    }

    pub fn state(&self) -> &InteractionState {
        &self.ctx.state
    }

    /// Direct store access for hosts that write fields themselves.
    /// Range-bounded fields must be clamped by the caller.
    pub fn state_mut(&mut self) -> &mut InteractionState {
        &mut self.ctx.state
    }

    pub fn camera(&self) -> &Camera3D {
        &self.ctx.camera
    }

    pub fn camera_uniform(&self) -> CameraUniform {
        self.ctx.camera.uniform()
    }

    pub fn satellite_summary(&self) -> Option<SatelliteSummary> {
        self.view.satellite_summary()
    }

    /// Events emitted since the last `clear_frame_data`.
    pub fn events(&self) -> &[ViewEvent] {
        &self.ctx.events
    }

    pub fn clear_frame_data(&mut self) {
        self.ctx.clear_frame_data();
    }

    /// Go to `route`. Leaving the overview remembers it for `back`.
    /// Unknown body ids redirect to the overview.
    pub fn navigate(&mut self, route: Route) {
        self.switch_to(route, true);
    }

    /// `navigate` from a URL path.
    pub fn navigate_path(&mut self, path: &str) {
        self.navigate(Route::from_path(path));
    }

    /// Return to the remembered route. Falls back to the overview when
    /// nothing is remembered or the remembered route is the current one.
    pub fn back(&mut self) {
        let target = match self.ctx.state.prior_route() {
            Some(prior) if *prior != self.route => prior.clone(),
            _ => Route::Overview,
        };
        self.switch_to(target, false);
    }

    fn switch_to(&mut self, route: Route, remember: bool) {
        let (route, remember) = match route {
            Route::Body(id) if !self.catalog.contains(&id) => {
                log::warn!("no body `{id}` in catalog, redirecting to overview");
                self.ctx.emit_event(ViewEvent::Redirected { requested: id });
                (Route::Overview, false)
            }
            route => (route, remember),
        };
        if route == self.route {
            return;
        }

        self.view.exit(&mut self.ctx);
        let mut view: Box<dyn View> = match &route {
            Route::Overview => Box::new(OverviewView::new(self.catalog.clone(), &self.ctx.config)),
            Route::Body(id) => Box::new(DetailView::new(self.catalog.clone(), id.as_str(), &self.ctx.config)),
        };

        if remember && self.route == Route::Overview {
            self.ctx.state.set_prior_route(Some(Route::Overview));
        }
        self.ctx.state.set_pending_navigation(true);
        self.ctx.state.set_detail_modal_open(false);
        self.ctx.state.set_hovered_body(None);
        self.ctx.state.set_hovered_satellite(None);
        self.settle_remaining = NAVIGATION_SETTLE_SECS;

        view.enter(&mut self.ctx);
        self.view = view;

        log::info!("route {} -> {}", self.route.path(), route.path());
        self.ctx.emit_event(ViewEvent::RouteChanged { path: route.path() });
        self.route = route;
    }

    /// One frame: route input to the active view, advance motion and camera,
    /// then apply any navigation the view asked for.
    pub fn update(&mut self, input: &InputQueue, dt: f32) {
        let mut back = false;
        for event in input.iter() {
            match event.command() {
                Some(Command::Resize { width, height }) => self.ctx.camera.resize(width, height),
                Some(Command::Back) => back = true,
                _ => {}
            }
        }

        self.view.update(&mut self.ctx, input, dt);

        if self.settle_remaining > 0.0 {
            self.settle_remaining -= dt;
            if self.settle_remaining <= 0.0 {
                self.ctx.state.set_pending_navigation(false);
            }
        }

        if let Some(route) = self.ctx.take_navigation() {
            self.navigate(route);
        }
        if back {
            self.back();
        }
    }

    /// Rebuild `buffer` for the current frame.
    pub fn render(&self, buffer: &mut RenderBuffer) {
        buffer.clear();
        self.view.render(&self.ctx, buffer);
    }
}
