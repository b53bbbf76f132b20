use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3, Vec4};

use crate::api::config::CameraConfig;

/// Pitch limit for drag rotation, short of the poles so `look_at` stays defined.
const MAX_PITCH: f32 = 85.0 * std::f32::consts::PI / 180.0;

/// Used when the eye sits exactly on the target.
const FALLBACK_DIRECTION: Vec3 = Vec3::new(0.0, std::f32::consts::FRAC_1_SQRT_2, std::f32::consts::FRAC_1_SQRT_2);

/// Perspective camera looking at the scope center.
#[derive(Debug, Clone)]
pub struct Camera3D {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub aspect: f32,
    pub znear: f32,
    pub zfar: f32,
}

/// GPU-side uniform data for the camera.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    /// Eye position, w = 1.
    pub eye: [f32; 4],
}

impl Camera3D {
    pub fn new(eye: Vec3) -> Self {
        Self {
            eye,
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_y: 75f32.to_radians(),
            aspect: 1.0,
            znear: 0.1,
            zfar: 1000.0,
        }
    }

    pub fn from_config(cfg: &CameraConfig) -> Self {
        Self {
            fov_y: cfg.fov_y_degrees.to_radians(),
            znear: cfg.znear,
            zfar: cfg.zfar,
            ..Self::new(Vec3::from_array(cfg.overview_eye))
        }
    }

    /// Distance from the eye to the target.
    pub fn distance(&self) -> f32 {
        self.eye.distance(self.target)
    }

    /// Unit vector from the target towards the eye.
    pub fn direction(&self) -> Vec3 {
        let dir = (self.eye - self.target).normalize_or_zero();
        if dir == Vec3::ZERO {
            FALLBACK_DIRECTION
        } else {
            dir
        }
    }

    /// Ease the eye along its current direction towards `target_distance`.
    ///
    /// `fraction` of the remaining gap is closed per 60 Hz tick, scaled to the
    /// real `dt`. Returns true once within `epsilon`, in which case nothing moves.
    pub fn converge(&mut self, target_distance: f32, fraction: f32, epsilon: f32, dt: f32) -> bool {
        let current = self.distance();
        let gap = target_distance - current;
        if !gap.is_finite() || gap.abs() <= epsilon {
            return true;
        }
        let step = if fraction >= 1.0 {
            1.0
        } else {
            1.0 - (1.0 - fraction.max(0.0)).powf(dt.max(0.0) * 60.0)
        };
        let next = current + gap * step;
        self.eye = self.target + self.direction() * next;
        false
    }

    /// Rotate the eye around the target, preserving distance.
    pub fn orbit(&mut self, yaw: f32, pitch: f32) {
        let radius = self.distance();
        let dir = self.direction();
        let current_yaw = dir.x.atan2(dir.z);
        let current_pitch = dir.y.clamp(-1.0, 1.0).asin();
        let yaw = current_yaw + yaw;
        let pitch = (current_pitch + pitch).clamp(-MAX_PITCH, MAX_PITCH);
        let offset = Vec3::new(pitch.cos() * yaw.sin(), pitch.sin(), pitch.cos() * yaw.cos());
        self.eye = self.target + offset * radius;
    }

    /// Jump to a new eye position, e.g. when switching scopes.
    pub fn reset(&mut self, eye: Vec3) {
        self.eye = eye;
        self.target = Vec3::ZERO;
    }

    /// Update the aspect ratio from a viewport size in pixels.
    pub fn resize(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view_proj: (self.projection_matrix() * self.view_matrix()).to_cols_array_2d(),
            eye: self.eye.extend(1.0).to_array(),
        }
    }

    /// World-space ray through a point in normalized device coordinates
    /// (x right, y up, both in [-1, 1]). Returns `(origin, direction)`.
    pub fn screen_ray(&self, ndc_x: f32, ndc_y: f32) -> (Vec3, Vec3) {
        let inv = (self.projection_matrix() * self.view_matrix()).inverse();
        let far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
        let far = far.truncate() / far.w;
        let dir = (far - self.eye).normalize_or_zero();
        (self.eye, dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera_at(distance: f32) -> Camera3D {
        Camera3D::new(Vec3::new(0.0, 0.0, distance))
    }

    #[test]
    fn distance_and_direction() {
        let cam = Camera3D::new(Vec3::new(0.0, 15.0, 15.0));
        assert!((cam.distance() - 15.0 * 2f32.sqrt()).abs() < 1e-4);
        assert!((cam.direction().length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn direction_at_target_falls_back() {
        let cam = Camera3D::new(Vec3::ZERO);
        assert!((cam.direction().length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn converge_is_monotone_without_overshoot_inwards() {
        let mut cam = camera_at(40.0);
        let target = 8.0;
        let mut prev = cam.distance();
        for _ in 0..500 {
            cam.converge(target, 0.1, 0.1, 1.0 / 60.0);
            let d = cam.distance();
            assert!(d <= prev + 1e-4, "moved away: {prev} -> {d}");
            assert!(d >= target - 1e-4, "overshot: {d}");
            prev = d;
        }
        assert!((cam.distance() - target).abs() <= 0.1 + 1e-4);
    }

    #[test]
    fn converge_is_monotone_without_overshoot_outwards() {
        let mut cam = camera_at(3.0);
        let target = 30.0;
        let mut prev = cam.distance();
        for _ in 0..500 {
            cam.converge(target, 0.1, 0.1, 0.033);
            let d = cam.distance();
            assert!(d >= prev - 1e-4);
            assert!(d <= target + 1e-4);
            prev = d;
        }
        assert!((cam.distance() - target).abs() <= 0.1 + 1e-4);
    }

    #[test]
    fn converge_at_sixty_hz_closes_fraction() {
        let mut cam = camera_at(25.0);
        cam.converge(15.0, 0.1, 0.1, 1.0 / 60.0);
        assert!((cam.distance() - 24.0).abs() < 1e-3);
    }

    #[test]
    fn converge_within_epsilon_reports_done() {
        let mut cam = camera_at(15.05);
        assert!(cam.converge(15.0, 0.1, 0.1, 0.016));
        assert_eq!(cam.eye, Vec3::new(0.0, 0.0, 15.05));
    }

    #[test]
    fn converge_with_zero_dt_holds_still() {
        let mut cam = camera_at(20.0);
        assert!(!cam.converge(10.0, 0.1, 0.1, 0.0));
        assert!((cam.distance() - 20.0).abs() < 1e-5);
    }

    #[test]
    fn converge_keeps_direction() {
        let mut cam = Camera3D::new(Vec3::new(0.0, 15.0, 15.0));
        let before = cam.direction();
        cam.converge(8.0, 0.1, 0.1, 0.016);
        assert!(cam.direction().abs_diff_eq(before, 1e-5));
    }

    #[test]
    fn orbit_preserves_distance_and_clamps_pitch() {
        let mut cam = Camera3D::new(Vec3::new(0.0, 10.0, 15.0));
        let d = cam.distance();
        cam.orbit(0.7, 0.2);
        assert!((cam.distance() - d).abs() < 1e-3);
        cam.orbit(0.0, 10.0);
        let pitch = cam.direction().y.asin();
        assert!(pitch <= MAX_PITCH + 1e-4);
        assert!((cam.distance() - d).abs() < 1e-3);
    }

    #[test]
    fn resize_ignores_degenerate_viewport() {
        let mut cam = camera_at(10.0);
        cam.resize(1920.0, 1080.0);
        assert!((cam.aspect - 1920.0 / 1080.0).abs() < 1e-6);
        cam.resize(0.0, 0.0);
        assert!((cam.aspect - 1920.0 / 1080.0).abs() < 1e-6);
    }

    #[test]
    fn center_ray_points_at_target() {
        let cam = Camera3D::new(Vec3::new(0.0, 10.0, 15.0));
        let (origin, dir) = cam.screen_ray(0.0, 0.0);
        assert_eq!(origin, cam.eye);
        let to_target = (cam.target - cam.eye).normalize();
        assert!(dir.abs_diff_eq(to_target, 1e-3));
    }

    #[test]
    fn uniform_carries_eye() {
        let cam = camera_at(12.0);
        let u = cam.uniform();
        assert_eq!(u.eye, [0.0, 0.0, 12.0, 1.0]);
    }
}
