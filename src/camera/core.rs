use glam::{Mat4, Vec3};

use crate::options::CameraOptions;

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the view-projection matrix and camera metadata.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
    /// Camera forward direction for lighting.
    pub forward: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
}

impl Camera {
    /// Camera with the given projection options and a square viewport.
    #[must_use]
    pub fn from_options(options: &CameraOptions) -> Self {
        Self {
            fovy: options.fovy,
            aspect: 1.0,
            znear: options.znear,
            zfar: options.zfar,
        }
    }

    /// Get just the projection matrix.
    #[must_use]
    pub fn build_projection(&self) -> Mat4 {
        // perspective_rh already uses [0,1] depth range (wgpu/Vulkan
        // convention)
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Update the aspect ratio for a new viewport size. Zero-sized
    /// viewports (minimized windows) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.aspect = width as f32 / height as f32;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_options(&CameraOptions::default())
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity view-projection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            aspect: 1.0,
            forward: [0.0, 0.0, -1.0],
            fovy: 45.0,
        }
    }

    /// Update uniform fields from a camera and its world transform.
    pub fn update(&mut self, camera: &Camera, camera_world: Mat4) {
        let view = camera_world.inverse();
        self.view_proj = (camera.build_projection() * view).to_cols_array_2d();
        let eye = camera_world.transform_point3(Vec3::ZERO);
        self.position = eye.to_array();
        self.aspect = camera.aspect;
        self.forward = camera_world
            .transform_vector3(Vec3::NEG_Z)
            .normalize_or_zero()
            .to_array();
        self.fovy = camera.fovy;
    }
}
