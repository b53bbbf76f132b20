use bytemuck::{Pod, Zeroable};

/// What a body instance stands for, stored as a float in `BodyInstance::role`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum BodyRole {
    /// The sun in the overview, the inspected body in the detail scope.
    Center = 0,
    /// A top-level body orbiting the sun.
    Body = 1,
    /// A satellite orbiting the inspected body.
    Satellite = 2,
}

impl BodyRole {
    pub fn as_f32(self) -> f32 {
        self as u8 as f32
    }
}

/// Per-sphere render data read by the JavaScript renderer.
/// 12 floats = 48 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct BodyInstance {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Display radius before emphasis.
    pub radius: f32,
    /// Axial spin angle in radians.
    pub spin: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    /// Scale multiplier for hover/selection (1.0 = none).
    pub emphasis: f32,
    /// Emissive intensity.
    pub emissive: f32,
    /// 1.0 when the name label should be shown.
    pub label: f32,
    /// `BodyRole` as a float.
    pub role: f32,
}

impl BodyInstance {
    pub const FLOATS: usize = 12;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Orbit ring around the scope center, lying in the XZ plane.
/// 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct RingInstance {
    pub radius: f32,
    /// Half the ring's width in world units.
    pub half_width: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub alpha: f32,
    /// 1.0 when the orbiting body is hovered or selected.
    pub highlight: f32,
    pub role: f32,
}

impl RingInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Everything drawn in one frame. Rebuilt from scratch every tick.
pub struct RenderBuffer {
    pub bodies: Vec<BodyInstance>,
    /// Catalog id per entry in `bodies`, for labels and UI lookups.
    pub body_ids: Vec<String>,
    pub rings: Vec<RingInstance>,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self {
            bodies: Vec::with_capacity(16),
            body_ids: Vec::with_capacity(16),
            rings: Vec::with_capacity(16),
        }
    }

    pub fn clear(&mut self) {
        self.bodies.clear();
        self.body_ids.clear();
        self.rings.clear();
    }

    pub fn push_body(&mut self, id: impl Into<String>, instance: BodyInstance) {
        self.body_ids.push(id.into());
        self.bodies.push(instance);
    }

    pub fn push_ring(&mut self, ring: RingInstance) {
        self.rings.push(ring);
    }

    pub fn body_count(&self) -> u32 {
        self.bodies.len() as u32
    }

    pub fn ring_count(&self) -> u32 {
        self.rings.len() as u32
    }

    /// Bodies with the given role.
    pub fn count_role(&self, role: BodyRole) -> usize {
        self.bodies.iter().filter(|b| b.role == role.as_f32()).count()
    }

    /// Raw pointer to body instance data for JavaScript reads.
    pub fn bodies_ptr(&self) -> *const f32 {
        self.bodies.as_ptr() as *const f32
    }

    /// Raw pointer to ring instance data for JavaScript reads.
    pub fn rings_ptr(&self) -> *const f32 {
        self.rings.as_ptr() as *const f32
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}
