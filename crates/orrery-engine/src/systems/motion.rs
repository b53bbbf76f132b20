//! Parametric orbit and sizing rules. Pure math, no view or store dependencies.
//!
//! Nothing here is physically accurate. Orbits are planar circles, speeds
//! follow `base / sqrt(distance)` only so that inner bodies visibly lap
//! outer ones, and radii are compressed for readability.

use std::f64::consts::TAU;

use crate::api::config::{MotionConfig, ScaleConfig};
use crate::core::state::ScaleMode;

/// Smallest display radius any body may get.
pub const MIN_DISPLAY_RADIUS: f32 = 1e-3;

/// Lower bound on the speed divisor, so a zero floor can't divide by zero.
const MIN_SPEED_FLOOR: f32 = 1e-3;

/// Map NaN and negatives to zero, infinities to `f32::MAX`.
#[inline]
fn sanitize(value: f32) -> f32 {
    if value.is_nan() || value <= 0.0 {
        0.0
    } else {
        value.min(f32::MAX)
    }
}

/// Starting angle that spreads `total` bodies evenly around the circle.
/// `total` of zero is treated as one.
pub fn initial_angle(index: usize, total: usize) -> f64 {
    index as f64 / total.max(1) as f64 * TAU
}

/// Angular speed in radians per second at unit multiplier.
pub fn orbital_speed(base: f32, floor: f32, distance: f32) -> f32 {
    base / floor.max(MIN_SPEED_FLOOR).max(sanitize(distance).sqrt())
}

/// Axial spin rate; grows with list position for visual variety only.
pub fn spin_rate(cfg: &MotionConfig, index: usize) -> f32 {
    cfg.spin_base + index as f32 * cfg.spin_index_factor
}

/// Display radius of a top-level body. Always strictly positive.
pub fn display_radius(true_radius: f32, mode: ScaleMode, cfg: &ScaleConfig) -> f32 {
    let r = sanitize(true_radius);
    let radius = match mode {
        ScaleMode::Proportional => cfg.proportional_floor.max(r * cfg.proportional_scale),
        ScaleMode::Compressed => {
            cfg.compressed_offset + cfg.compressed_offset * r.max(cfg.compressed_epsilon).cbrt()
        }
    };
    if radius.is_finite() {
        radius.max(MIN_DISPLAY_RADIUS)
    } else {
        MIN_DISPLAY_RADIUS
    }
}

/// Display orbit radius of a top-level body.
pub fn orbit_distance(distance_au: f32, mode: ScaleMode, cfg: &ScaleConfig) -> f32 {
    let scale = match mode {
        ScaleMode::Proportional => cfg.proportional_distance_scale,
        ScaleMode::Compressed => cfg.compressed_distance_scale,
    };
    sanitize(distance_au) * scale
}

pub fn sun_radius(mode: ScaleMode, cfg: &ScaleConfig) -> f32 {
    let radius = match mode {
        ScaleMode::Proportional => cfg.sun_true_radius * cfg.proportional_scale,
        ScaleMode::Compressed => cfg.sun_radius,
    };
    radius.max(MIN_DISPLAY_RADIUS)
}

/// Orbit radius of the `index`-th rendered satellite. Spacing is by list
/// position because true satellite distances don't share a usable scale.
pub fn satellite_distance(index: usize, cfg: &ScaleConfig) -> f32 {
    cfg.satellite_first_distance + index as f32 * cfg.satellite_spacing
}

pub fn satellite_radius(true_radius: f32, cfg: &ScaleConfig) -> f32 {
    cfg.satellite_floor
        .max(sanitize(true_radius) * cfg.satellite_scale)
        .max(MIN_DISPLAY_RADIUS)
}

/// Radius of the body at the center of the detail scope.
pub fn center_radius(true_radius: f32, cfg: &ScaleConfig) -> f32 {
    cfg.center_floor
        .max(sanitize(true_radius) * cfg.center_scale)
        .max(MIN_DISPLAY_RADIUS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_angles_spread_evenly() {
        assert_eq!(initial_angle(0, 4), 0.0);
        assert!((initial_angle(1, 4) - TAU / 4.0).abs() < 1e-12);
        assert!((initial_angle(3, 4) - 3.0 * TAU / 4.0).abs() < 1e-12);
    }

    #[test]
    fn initial_angle_with_empty_list_is_finite() {
        let a = initial_angle(0, 0);
        assert!(a.is_finite());
        assert_eq!(a, 0.0);
    }

    #[test]
    fn closer_bodies_orbit_faster() {
        let cfg = MotionConfig::default();
        let mercury = orbital_speed(cfg.body_base_speed, cfg.body_speed_floor, 0.39);
        let earth = orbital_speed(cfg.body_base_speed, cfg.body_speed_floor, 1.0);
        let neptune = orbital_speed(cfg.body_base_speed, cfg.body_speed_floor, 30.06);
        assert!(mercury > earth && earth > neptune);
        assert!((earth - 0.2).abs() < 1e-6);
    }

    #[test]
    fn speed_floor_caps_inner_speed() {
        let cfg = MotionConfig::default();
        let at_zero = orbital_speed(cfg.body_base_speed, cfg.body_speed_floor, 0.0);
        let tiny = orbital_speed(cfg.body_base_speed, cfg.body_speed_floor, 0.01);
        assert!((at_zero - 1.0).abs() < 1e-6);
        assert_eq!(at_zero, tiny);
        assert!(orbital_speed(0.2, 0.0, 0.0).is_finite());
        assert!(orbital_speed(0.2, 0.2, f32::NAN).is_finite());
    }

    #[test]
    fn spin_rates_vary_by_index() {
        let cfg = MotionConfig::default();
        assert!((spin_rate(&cfg, 0) - 0.5).abs() < 1e-6);
        assert!((spin_rate(&cfg, 3) - 0.8).abs() < 1e-6);
    }

    #[test]
    fn display_radius_strictly_positive_in_both_modes() {
        let cfg = ScaleConfig::default();
        for mode in [ScaleMode::Compressed, ScaleMode::Proportional] {
            for r in [0.0, -5.0, f32::NAN, 1e-9, 1.0, 1e6, f32::MAX, f32::INFINITY] {
                let d = display_radius(r, mode, &cfg);
                assert!(d > 0.0 && d.is_finite(), "mode {mode:?} r {r} -> {d}");
            }
        }
    }

    #[test]
    fn display_radius_positive_even_with_zeroed_config() {
        let cfg = ScaleConfig {
            compressed_offset: 0.0,
            proportional_floor: 0.0,
            proportional_scale: 0.0,
            ..ScaleConfig::default()
        };
        assert!(display_radius(0.0, ScaleMode::Compressed, &cfg) > 0.0);
        assert!(display_radius(0.0, ScaleMode::Proportional, &cfg) > 0.0);
    }

    #[test]
    fn proportional_mode_preserves_ratios() {
        let cfg = ScaleConfig::default();
        let earth = display_radius(1.0, ScaleMode::Proportional, &cfg);
        let jupiter = display_radius(11.21, ScaleMode::Proportional, &cfg);
        assert!((jupiter / earth - 11.21).abs() < 1e-3);
    }

    #[test]
    fn compressed_mode_narrows_range() {
        let cfg = ScaleConfig::default();
        let earth = display_radius(1.0, ScaleMode::Compressed, &cfg);
        let jupiter = display_radius(11.21, ScaleMode::Compressed, &cfg);
        assert!((earth - 0.3).abs() < 1e-6);
        assert!(jupiter / earth < 2.0);
    }

    #[test]
    fn orbit_distance_by_mode() {
        let cfg = ScaleConfig::default();
        assert_eq!(orbit_distance(2.0, ScaleMode::Compressed, &cfg), 6.0);
        assert_eq!(orbit_distance(2.0, ScaleMode::Proportional, &cfg), 12.0);
        assert_eq!(orbit_distance(-1.0, ScaleMode::Compressed, &cfg), 0.0);
    }

    #[test]
    fn sun_radius_by_mode() {
        let cfg = ScaleConfig::default();
        assert_eq!(sun_radius(ScaleMode::Compressed, &cfg), 2.0);
        assert!((sun_radius(ScaleMode::Proportional, &cfg) - 1.09).abs() < 1e-6);
    }

    #[test]
    fn satellite_layout() {
        let cfg = ScaleConfig::default();
        assert_eq!(satellite_distance(0, &cfg), 3.0);
        assert_eq!(satellite_distance(2, &cfg), 6.0);
        assert_eq!(satellite_radius(0.0, &cfg), 0.05);
        assert!((satellite_radius(1.0, &cfg) - 0.1).abs() < 1e-6);
        assert_eq!(center_radius(0.0, &cfg), 0.5);
        assert!((center_radius(11.21, &cfg) - 3.363).abs() < 1e-3);
    }
}
