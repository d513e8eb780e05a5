//! Right-handed perspective camera used by the particle visualizer.

use crate::constants::*;
use glam::{Mat4, Vec3, Vec4};

#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Fixed view over both particle fields at the given aspect ratio.
    pub fn visualizer(aspect: f32) -> Self {
        Self {
            eye: Vec3::from_array(CAMERA_EYE),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: aspect.max(f32::EPSILON),
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Whether a world-space point lies inside the view frustum.
    ///
    /// Clip-space test against the wgpu depth range `0..=w`.
    pub fn contains(&self, point: Vec3) -> bool {
        let clip = self.view_proj() * Vec4::from((point, 1.0));
        if clip.w <= 0.0 {
            return false;
        }
        let w = clip.w;
        clip.x.abs() <= w && clip.y.abs() <= w && clip.z >= 0.0 && clip.z <= w
    }
}
