use glam::Quat;

use crate::components::orbiter::Orbiter;
use crate::core::scene::OrbitScene;
use crate::renderer::instance::{BodyInstance, BodyRole, RenderBuffer, RingInstance};
use crate::systems::picking::PickTarget;

/// Sun color (#FFD700).
pub const SUN_COLOR: [f32; 3] = [1.0, 215.0 / 255.0, 0.0];
pub const SUN_EMISSIVE: f32 = 0.8;
/// Emissive of the inspected body at the center of the detail scope.
pub const CENTER_EMISSIVE: f32 = 0.3;

/// How hover and selection change an orbiter's look.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmphasisRule {
    pub selected_scale: f32,
    pub hovered_scale: f32,
    pub active_emissive: f32,
    pub idle_emissive: f32,
}

pub const BODY_EMPHASIS: EmphasisRule = EmphasisRule {
    selected_scale: 1.3,
    hovered_scale: 1.15,
    active_emissive: 0.3,
    idle_emissive: 0.1,
};

pub const SATELLITE_EMPHASIS: EmphasisRule = EmphasisRule {
    selected_scale: 1.5,
    hovered_scale: 1.3,
    active_emissive: 0.3,
    idle_emissive: 0.1,
};

impl EmphasisRule {
    /// Selection wins over hover.
    pub fn scale(&self, selected: bool, hovered: bool) -> f32 {
        if selected {
            self.selected_scale
        } else if hovered {
            self.hovered_scale
        } else {
            1.0
        }
    }

    pub fn emissive(&self, selected: bool, hovered: bool) -> f32 {
        if selected || hovered {
            self.active_emissive
        } else {
            self.idle_emissive
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingStyle {
    pub half_width: f32,
    pub idle_alpha: f32,
    pub hover_alpha: f32,
}

impl RingStyle {
    pub fn body(half_width: f32) -> Self {
        Self { half_width, idle_alpha: 0.25, hover_alpha: 0.25 }
    }

    pub fn satellite(half_width: f32) -> Self {
        Self { half_width, idle_alpha: 0.2, hover_alpha: 0.4 }
    }
}

/// Selection and hover of the orbiters in the scope being drawn.
#[derive(Debug, Clone, Copy, Default)]
pub struct Highlight<'a> {
    pub selected: Option<&'a str>,
    pub hovered: Option<&'a str>,
}

impl Highlight<'_> {
    fn flags(&self, id: &str) -> (bool, bool) {
        (self.selected == Some(id), self.hovered == Some(id))
    }
}

/// Push the body at the scope center.
pub fn emit_center(
    buffer: &mut RenderBuffer,
    id: &str,
    radius: f32,
    spin: f32,
    color: [f32; 3],
    emissive: f32,
) {
    buffer.push_body(
        id,
        BodyInstance {
            radius,
            spin,
            r: color[0],
            g: color[1],
            b: color[2],
            emphasis: 1.0,
            emissive,
            role: BodyRole::Center.as_f32(),
            ..Default::default()
        },
    );
}

/// Push one ring and one sphere per active orbiter.
/// `rotation` is applied to positions (the overview's slow system spin).
pub fn emit_orbiters(
    buffer: &mut RenderBuffer,
    scene: &OrbitScene,
    rotation: Quat,
    role: BodyRole,
    rule: &EmphasisRule,
    ring: &RingStyle,
    highlight: Highlight<'_>,
) {
    for orbiter in scene.iter_active() {
        let (selected, hovered) = highlight.flags(&orbiter.id);
        let [r, g, b] = orbiter.color;
        buffer.push_ring(RingInstance {
            radius: orbiter.orbit_radius,
            half_width: ring.half_width,
            r,
            g,
            b,
            alpha: if hovered { ring.hover_alpha } else { ring.idle_alpha },
            highlight: if selected || hovered { 1.0 } else { 0.0 },
            role: role.as_f32(),
        });

        let pos = rotation * orbiter.position();
        buffer.push_body(
            orbiter.id.as_str(),
            BodyInstance {
                x: pos.x,
                y: pos.y,
                z: pos.z,
                radius: orbiter.display_radius,
                spin: orbiter.motion.spin() as f32,
                r,
                g,
                b,
                emphasis: rule.scale(selected, hovered),
                emissive: rule.emissive(selected, hovered),
                label: if selected || hovered { 1.0 } else { 0.0 },
                role: role.as_f32(),
            },
        );
    }
}

/// Pickable spheres for the active orbiters, sized as drawn.
pub fn pick_targets(
    scene: &OrbitScene,
    rotation: Quat,
    rule: &EmphasisRule,
    highlight: Highlight<'_>,
) -> Vec<PickTarget> {
    scene
        .iter_active()
        .map(|orbiter: &Orbiter| {
            let (selected, hovered) = highlight.flags(&orbiter.id);
            PickTarget {
                id: orbiter.id.clone(),
                center: rotation * orbiter.position(),
                radius: orbiter.display_radius * rule.scale(selected, hovered),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::orbiter::OrbitalMotion;

    fn scene() -> OrbitScene {
        let mut scene = OrbitScene::new();
        scene.spawn(
            Orbiter::new("earth", OrbitalMotion::new(0.0, 0.2, 0.5))
                .with_orbit_radius(3.0)
                .with_display_radius(0.3),
        );
        scene.spawn(
            Orbiter::new("mars", OrbitalMotion::new(1.0, 0.2, 0.6))
                .with_orbit_radius(4.5)
                .with_display_radius(0.25),
        );
        scene.spawn(
            Orbiter::new("hidden", OrbitalMotion::new(2.0, 0.1, 0.7))
                .with_orbit_radius(9.0)
                .with_active(false),
        );
        scene
    }

    #[test]
    fn emphasis_selected_beats_hovered() {
        assert_eq!(BODY_EMPHASIS.scale(true, true), 1.3);
        assert_eq!(BODY_EMPHASIS.scale(false, true), 1.15);
        assert_eq!(BODY_EMPHASIS.scale(false, false), 1.0);
        assert_eq!(SATELLITE_EMPHASIS.scale(true, false), 1.5);
        assert_eq!(BODY_EMPHASIS.emissive(false, true), 0.3);
        assert_eq!(BODY_EMPHASIS.emissive(false, false), 0.1);
    }

    #[test]
    fn one_ring_and_sphere_per_active_orbiter() {
        let mut buf = RenderBuffer::new();
        emit_center(&mut buf, "sun", 2.0, 0.0, SUN_COLOR, SUN_EMISSIVE);
        emit_orbiters(
            &mut buf,
            &scene(),
            Quat::IDENTITY,
            BodyRole::Body,
            &BODY_EMPHASIS,
            &RingStyle::body(0.03),
            Highlight { selected: Some("mars"), hovered: None },
        );
        assert_eq!(buf.ring_count(), 2);
        assert_eq!(buf.count_role(BodyRole::Center), 1);
        assert_eq!(buf.count_role(BodyRole::Body), 2);
        assert!(!buf.body_ids.iter().any(|id| id == "hidden"));

        let mars = buf.bodies[2];
        assert_eq!(mars.emphasis, 1.3);
        assert_eq!(mars.label, 1.0);
        assert_eq!(buf.bodies[1].label, 0.0);
    }

    #[test]
    fn satellite_ring_alpha_follows_hover() {
        let mut buf = RenderBuffer::new();
        emit_orbiters(
            &mut buf,
            &scene(),
            Quat::IDENTITY,
            BodyRole::Satellite,
            &SATELLITE_EMPHASIS,
            &RingStyle::satellite(0.02),
            Highlight { selected: None, hovered: Some("earth") },
        );
        assert_eq!(buf.rings[0].alpha, 0.4);
        assert_eq!(buf.rings[1].alpha, 0.2);
    }

    #[test]
    fn rotation_applies_to_positions_and_picking() {
        let rot = Quat::from_rotation_y(std::f32::consts::FRAC_PI_2);
        let targets = pick_targets(&scene(), rot, &BODY_EMPHASIS, Highlight::default());
        assert_eq!(targets.len(), 2);
        // Earth starts at +X; a quarter turn about Y moves it to -Z.
        assert!(targets[0].center.abs_diff_eq(glam::Vec3::new(0.0, 0.0, -3.0), 1e-4));
    }

    #[test]
    fn pick_radius_includes_emphasis() {
        let targets = pick_targets(
            &scene(),
            Quat::IDENTITY,
            &BODY_EMPHASIS,
            Highlight { selected: Some("earth"), hovered: None },
        );
        assert!((targets[0].radius - 0.39).abs() < 1e-6);
    }
}
