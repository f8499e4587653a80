//! Light data component.
//!
//! Pure data plus the shadow-pass matrices a renderer would consume; no
//! rendering state lives here.

use glam::{Mat4, Vec3, Vec4};

/// Shadow projection constants: a fixed 40 degree square frustum.
const SHADOW_FOVY_DEGREES: f32 = 40.0;
const SHADOW_NEAR: f32 = 1.0;
const SHADOW_FAR: f32 = 10.0;

#[derive(Debug, Clone)]
pub struct Light {
    position: Vec3,
    direction: Vec3,
    color: Vec4,
}

impl Light {
    /// A white point light at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            direction: Vec3::NEG_Z,
            color: Vec4::ONE,
        }
    }

    /// A point light at `position`.
    #[must_use]
    pub fn point(position: Vec3, color: Vec4) -> Self {
        Self {
            position,
            direction: Vec3::NEG_Z,
            color,
        }
    }

    /// A directional light shining along `direction` (normalized here).
    #[must_use]
    pub fn directional(direction: Vec3, color: Vec4) -> Self {
        Self {
            position: Vec3::ZERO,
            direction: direction.normalize(),
            color,
        }
    }

    #[inline]
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    #[inline]
    #[must_use]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Vec3) {
        self.direction = direction;
    }

    #[inline]
    #[must_use]
    pub fn color(&self) -> Vec4 {
        self.color
    }

    pub fn set_color(&mut self, color: Vec4) {
        self.color = color;
    }

    /// View matrix for a shadow pass: looking from the light's position
    /// along its direction.
    #[must_use]
    pub fn shadow_view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.direction, Vec3::Y)
    }

    /// Projection matrix for a shadow pass (fixed square perspective).
    #[must_use]
    pub fn shadow_projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(
            SHADOW_FOVY_DEGREES.to_radians(),
            1.0,
            SHADOW_NEAR,
            SHADOW_FAR,
        )
    }
}

impl Default for Light {
    fn default() -> Self {
        Self::new()
    }
}
