pub mod api;
pub mod app;
pub mod assets;
pub mod components;
pub mod core;
pub mod error;
pub mod input;
pub mod renderer;
pub mod systems;
pub mod views;

// Re-export key types at crate root for convenience
pub use api::config::{CameraConfig, ControlConfig, MotionConfig, OrreryConfig, ScaleConfig};
pub use api::types::{Bounds, Route, Scope, ViewEvent, SPEED_BOUNDS};
pub use api::view::{View, ViewContext};
pub use app::Orrery;
pub use assets::catalog::{BodyFilter, BodyKind, Catalog, CelestialBody};
pub use components::orbiter::{OrbitalMotion, Orbiter};
pub use core::scene::OrbitScene;
pub use core::state::{InteractionState, ScaleMode};
pub use core::time::FrameClock;
pub use error::{OrreryError, Result};
pub use input::queue::{Command, InputEvent, InputQueue};
pub use renderer::camera::{Camera3D, CameraUniform};
pub use renderer::instance::{BodyInstance, BodyRole, RenderBuffer, RingInstance};
pub use views::detail::{DetailView, SatelliteSummary};
pub use views::overview::OverviewView;
