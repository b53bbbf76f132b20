use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Tunables for the orrery, provided once at startup.
/// Every field has a default, so a partial JSON object is enough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrreryConfig {
    pub motion: MotionConfig,
    pub scale: ScaleConfig,
    pub camera: CameraConfig,
    pub controls: ControlConfig,
    /// Satellites rendered in the detail scope (default: 10).
    pub max_satellites: usize,
    /// Largest frame delta in seconds fed to the motion model (default: 0.25).
    pub max_frame_dt: f32,
}

impl Default for OrreryConfig {
    fn default() -> Self {
        Self {
            motion: MotionConfig::default(),
            scale: ScaleConfig::default(),
            camera: CameraConfig::default(),
            controls: ControlConfig::default(),
            max_satellites: 10,
            max_frame_dt: 0.25,
        }
    }
}

impl OrreryConfig {
    /// Parse a config from a JSON string. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Angular speed constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Numerator of the planet speed heuristic `base / max(floor, sqrt(au))`.
    pub body_base_speed: f32,
    pub body_speed_floor: f32,
    pub satellite_base_speed: f32,
    pub satellite_speed_floor: f32,
    /// Axial spin rate is `spin_base + index * spin_index_factor`.
    pub spin_base: f32,
    pub spin_index_factor: f32,
    /// Spin of the central body in the detail scope.
    pub center_spin: f32,
    /// Slow rotation of the whole overview system about Y.
    pub system_spin: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            body_base_speed: 0.2,
            body_speed_floor: 0.2,
            satellite_base_speed: 0.3,
            satellite_speed_floor: 0.5,
            spin_base: 0.5,
            spin_index_factor: 0.1,
            center_spin: 0.5,
            system_spin: 0.1,
        }
    }
}

/// Display-size and placement constants for both scale modes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleConfig {
    /// Orbit radius per AU in compressed mode.
    pub compressed_distance_scale: f32,
    /// Orbit radius per AU in proportional mode.
    pub proportional_distance_scale: f32,
    pub compressed_offset: f32,
    pub compressed_epsilon: f32,
    pub proportional_scale: f32,
    pub proportional_floor: f32,
    /// Sun radius in compressed mode.
    pub sun_radius: f32,
    /// Sun radius in Earth radii, scaled by `proportional_scale` in proportional mode.
    pub sun_true_radius: f32,
    pub center_scale: f32,
    pub center_floor: f32,
    pub satellite_first_distance: f32,
    pub satellite_spacing: f32,
    pub satellite_scale: f32,
    pub satellite_floor: f32,
    pub ring_half_width: f32,
    pub satellite_ring_half_width: f32,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            compressed_distance_scale: 3.0,
            proportional_distance_scale: 6.0,
            compressed_offset: 0.15,
            compressed_epsilon: 0.01,
            proportional_scale: 0.01,
            proportional_floor: 0.01,
            sun_radius: 2.0,
            sun_true_radius: 109.0,
            center_scale: 0.3,
            center_floor: 0.5,
            satellite_first_distance: 3.0,
            satellite_spacing: 1.5,
            satellite_scale: 0.1,
            satellite_floor: 0.05,
            ring_half_width: 0.03,
            satellite_ring_half_width: 0.02,
        }
    }
}

/// Camera framing and easing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Overview target distance, also restored when leaving the detail scope.
    pub default_distance: f32,
    /// Target distance applied when entering the detail scope.
    pub detail_distance: f32,
    /// Fraction of the remaining gap closed per 60 Hz tick.
    pub convergence_fraction: f32,
    /// Gap below which the camera is considered converged.
    pub convergence_epsilon: f32,
    pub overview_eye: [f32; 3],
    pub detail_eye: [f32; 3],
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            default_distance: 15.0,
            detail_distance: 8.0,
            convergence_fraction: 0.1,
            convergence_epsilon: 0.1,
            overview_eye: [0.0, 15.0, 15.0],
            detail_eye: [0.0, 10.0, 15.0],
            fov_y_degrees: 75.0,
            znear: 0.1,
            zfar: 1000.0,
        }
    }
}

/// Step sizes for the control panel, wheel and drag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlConfig {
    pub speed_step: f32,
    pub zoom_step: f32,
    pub wheel_step: f32,
    /// Radians of camera rotation per unit of NDC drag.
    pub rotate_speed: f32,
    /// NDC distance before a press becomes a drag.
    pub drag_threshold: f32,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            speed_step: 0.5,
            zoom_step: 2.0,
            wheel_step: 1.5,
            rotate_speed: 2.5,
            drag_threshold: 0.01,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = OrreryConfig::from_json(r#"{ "max_satellites": 4, "camera": { "detail_distance": 6.0 } }"#)
            .unwrap();
        assert_eq!(cfg.max_satellites, 4);
        assert_eq!(cfg.camera.detail_distance, 6.0);
        assert_eq!(cfg.camera.default_distance, 15.0);
        assert_eq!(cfg.motion, MotionConfig::default());
    }

    #[test]
    fn empty_object_is_default() {
        let cfg = OrreryConfig::from_json("{}").unwrap();
        assert_eq!(cfg, OrreryConfig::default());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(OrreryConfig::from_json("{ max_satellites: ").is_err());
    }

    #[test]
    fn convergence_fraction_is_a_proper_fraction() {
        let cfg = CameraConfig::default();
        assert!(cfg.convergence_fraction > 0.0 && cfg.convergence_fraction < 1.0);
    }
}
