use crate::components::orbiter::Orbiter;

/// The bodies orbiting the center of the current scope, in catalog order.
/// A flat Vec; scopes hold at most a few dozen orbiters.
pub struct OrbitScene {
    orbiters: Vec<Orbiter>,
}

impl OrbitScene {
    pub fn new() -> Self {
        Self {
            orbiters: Vec::with_capacity(16),
        }
    }

    /// Create a scene with a specific orbiter capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            orbiters: Vec::with_capacity(capacity),
        }
    }

    /// Add an orbiter to the scene.
    pub fn spawn(&mut self, orbiter: Orbiter) {
        self.orbiters.push(orbiter);
    }

    /// Advance every orbiter by one tick, active or not.
    pub fn advance(&mut self, dt: f32, multiplier: f32) {
        for orbiter in &mut self.orbiters {
            orbiter.motion.advance(dt, multiplier);
        }
    }

    pub fn get(&self, id: &str) -> Option<&Orbiter> {
        self.orbiters.iter().find(|o| o.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Orbiter> {
        self.orbiters.iter_mut().find(|o| o.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Orbiter> {
        self.orbiters.iter()
    }

    /// Orbiters that are drawn and pickable.
    pub fn iter_active(&self) -> impl Iterator<Item = &Orbiter> {
        self.orbiters.iter().filter(|o| o.active)
    }

    pub fn active_count(&self) -> usize {
        self.iter_active().count()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Orbiter> {
        self.orbiters.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.orbiters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orbiters.is_empty()
    }

    pub fn clear(&mut self) {
        self.orbiters.clear();
    }
}

impl Default for OrbitScene {
    fn default() -> Self {
        Self::new()
    }
}
