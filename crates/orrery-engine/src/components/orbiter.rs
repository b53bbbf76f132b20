use glam::Vec3;

/// Angle and spin accumulators for one body on a circular orbit.
///
/// Accumulators are f64 so that hours of animation don't drift;
/// per-tick increments are computed in f32 like everything else.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalMotion {
    angle: f64,
    spin: f64,
    /// Radians per second at unit multiplier.
    pub orbital_speed: f32,
    /// Axial spin, radians per second at unit multiplier.
    pub spin_rate: f32,
}

impl OrbitalMotion {
    pub fn new(initial_angle: f64, orbital_speed: f32, spin_rate: f32) -> Self {
        Self {
            angle: initial_angle,
            spin: 0.0,
            orbital_speed,
            spin_rate,
        }
    }

    /// Angle increment for one tick.
    #[inline]
    pub fn orbit_step(&self, dt: f32, multiplier: f32) -> f64 {
        (dt * multiplier * self.orbital_speed) as f64
    }

    /// Spin increment for one tick.
    #[inline]
    pub fn spin_step(&self, dt: f32, multiplier: f32) -> f64 {
        (dt * multiplier * self.spin_rate) as f64
    }

    /// Advance both accumulators by one tick.
    pub fn advance(&mut self, dt: f32, multiplier: f32) {
        self.angle += self.orbit_step(dt, multiplier);
        self.spin += self.spin_step(dt, multiplier);
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn spin(&self) -> f64 {
        self.spin
    }

    /// Position on the XZ plane at the given orbit radius.
    pub fn position(&self, orbit_radius: f32) -> Vec3 {
        let (sin, cos) = self.angle.sin_cos();
        Vec3::new(cos as f32 * orbit_radius, 0.0, sin as f32 * orbit_radius)
    }
}

/// A body placed on an orbit in the current scope.
#[derive(Debug, Clone)]
pub struct Orbiter {
    /// Catalog id of the body or satellite.
    pub id: String,
    /// Inactive orbiters keep moving but are neither drawn nor pickable.
    pub active: bool,
    /// Display color, linear RGB.
    pub color: [f32; 3],
    /// Sphere radius before emphasis.
    pub display_radius: f32,
    /// Radius of the circular path around the scope center.
    pub orbit_radius: f32,
    pub motion: OrbitalMotion,
}

impl Orbiter {
    pub fn new(id: impl Into<String>, motion: OrbitalMotion) -> Self {
        Self {
            id: id.into(),
            active: true,
            color: [1.0, 1.0, 1.0],
            display_radius: 1.0,
            orbit_radius: 0.0,
            motion,
        }
    }

    // -- Builder pattern --

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn with_color(mut self, color: [f32; 3]) -> Self {
        self.color = color;
        self
    }

    pub fn with_display_radius(mut self, radius: f32) -> Self {
        self.display_radius = radius;
        self
    }

    pub fn with_orbit_radius(mut self, radius: f32) -> Self {
        self.orbit_radius = radius;
        self
    }

    /// Current position relative to the scope center.
    pub fn position(&self) -> Vec3 {
        self.motion.position(self.orbit_radius)
    }
}
