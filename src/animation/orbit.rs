use std::f32::consts::FRAC_PI_4;
use crate::config::SceneConfig;
use crate::math::{Mat4, Vec3};

/// Largest azimuth the camera swings to on either side
pub const MAX_SWING: f32 = FRAC_PI_4;

/// Camera azimuth at `elapsed` seconds, oscillating within ±[`MAX_SWING`]
pub fn camera_angle(elapsed: f32) -> f32 {
    elapsed.sin() * MAX_SWING
}

/// Camera position on the X-Z circle of `radius` at `elapsed` seconds
pub fn camera_position(elapsed: f32, radius: f32) -> Vec3 {
    let angle = camera_angle(elapsed);
    Vec3::new(radius * angle.sin(), 0.0, radius * angle.cos())
}

/// Per-frame camera output
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    pub elapsed: f32,
    pub camera_position: Vec3,
    pub view: Mat4,
    /// View followed by projection
    pub mvp: Mat4,
}

/// Orbiting camera that always looks at the origin
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    radius: f32,
    up: Vec3,
    fov_y: f32,
    near: f32,
    far: f32,
    projection: Mat4,
}

impl OrbitCamera {
    pub fn new(aspect: f32, config: &SceneConfig) -> Self {
        let fov_y = config.fov_radians();
        Self {
            radius: config.orbit_radius,
            up: Vec3::UP,
            fov_y,
            near: config.near,
            far: config.far,
            projection: Mat4::perspective(fov_y, aspect, config.near, config.far),
        }
    }

    /// Rebuild the projection for a new viewport shape
    pub fn set_aspect(&mut self, aspect: f32) {
        self.projection = Mat4::perspective(self.fov_y, aspect, self.near, self.far);
    }

    pub fn projection(&self) -> &Mat4 {
        &self.projection
    }

    /// Camera transforms for `elapsed` seconds since start
    pub fn frame(&self, elapsed: f32) -> Frame {
        let camera_position = camera_position(elapsed, self.radius);
        let camera_to_world = Mat4::look_at(camera_position, Vec3::ZERO, self.up);
        // An orthonormal look-at basis always has an inverse
        let view = camera_to_world.inverse().unwrap_or_else(Mat4::identity);
        let mvp = self.projection.mul(&view);

        Frame {
            elapsed,
            camera_position,
            view,
            mvp,
        }
    }
}
