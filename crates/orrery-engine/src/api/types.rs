use serde::{Deserialize, Serialize};

/// Closed numeric range used to clamp caller input before it reaches the store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f32,
    pub max: f32,
}

impl Bounds {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Clamp `value` into the range. NaN maps to `min`.
    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            return self.min;
        }
        value.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Rotation speed multiplier range.
pub const SPEED_BOUNDS: Bounds = Bounds::new(0.0, 5.0);

/// Which view is active: the whole system, or one body and its satellites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scope {
    Overview,
    Detail,
}

impl Scope {
    /// Camera distance range while this scope is active.
    pub fn zoom_bounds(self) -> Bounds {
        match self {
            Scope::Overview => Bounds::new(5.0, 100.0),
            Scope::Detail => Bounds::new(3.0, 30.0),
        }
    }
}

/// Where the app is. `Body` carries the id from the URL, which may not exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "route", content = "id", rename_all = "kebab-case")]
pub enum Route {
    Overview,
    Body(String),
}

impl Route {
    /// URL path for the host's history API.
    pub fn path(&self) -> String {
        match self {
            Route::Overview => "/".to_string(),
            Route::Body(id) => format!("/planet/{id}"),
        }
    }

    /// Parse a URL path. Anything unrecognized is the overview.
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/').strip_prefix("/planet/") {
            Some(id) if !id.is_empty() && !id.contains('/') => Route::Body(id.to_string()),
            _ => Route::Overview,
        }
    }
}

/// Notifications for the host, drained once per frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ViewEvent {
    /// The active route changed; the host should update the URL.
    RouteChanged { path: String },
    /// A route or selection named an id absent from the catalog.
    Redirected { requested: String },
}
