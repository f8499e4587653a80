//! View/projection math and an arcball orbit controller.
//!
//! [`Camera`] is a plain matrix pair: callers feed it an eye pose and a
//! projection and read the matrices back. [`Arcball`] layers a windowing-free
//! orbit controller on top, taking screen dimensions and cursor positions
//! and keeping its camera's view matrix up to date.

use glam::{Mat4, Vec2, Vec3};
use std::f32::consts::{FRAC_PI_2, PI};

#[derive(Debug, Clone)]
pub struct Camera {
    view_matrix: Mat4,
    projection_matrix: Mat4,
}

impl Camera {
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_matrix: Mat4::IDENTITY,
            projection_matrix: Mat4::IDENTITY,
        }
    }

    /// Generates a view matrix looking from `eye` towards `center`.
    pub fn set_look_at(&mut self, eye: Vec3, center: Vec3, up: Vec3) {
        self.view_matrix = Mat4::look_at_rh(eye, center, up);
    }

    /// Generates a perspective projection matrix (GL-style clip range).
    pub fn set_perspective(&mut self, fovy_degrees: f32, aspect: f32, near: f32, far: f32) {
        self.projection_matrix =
            Mat4::perspective_rh_gl(fovy_degrees.to_radians(), aspect, near, far);
    }

    /// Generates an orthographic projection matrix (GL-style clip range).
    pub fn set_orthographic(
        &mut self,
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    ) {
        self.projection_matrix = Mat4::orthographic_rh_gl(left, right, bottom, top, near, far);
    }

    #[inline]
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        self.view_matrix
    }

    #[inline]
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection_matrix
    }

    #[inline]
    #[must_use]
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix
    }

    /// Recovers the eye position from the view matrix.
    #[must_use]
    pub fn eye_position(&self) -> Vec3 {
        self.view_matrix.inverse().w_axis.truncate()
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Arcball
// ============================================================================

const POLE_EPSILON: f32 = 0.0001;

/// Orbit controller parameterized in spherical coordinates around a center.
///
/// Cursor positions come in as screen pixels; a full screen-height drag
/// rotates by one turn. The polar angle is clamped just short of the poles
/// so the view up vector never degenerates.
#[derive(Debug, Clone)]
pub struct Arcball {
    pub camera: Camera,

    pub rotate_speed: f32,
    pub fovy_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub min_radius: f32,
    pub max_radius: f32,

    screen_size: Vec2,
    center: Vec3,
    radius: f32,
    theta: f32,
    phi: f32,

    dragging: bool,
    last_cursor: Vec2,
}

impl Arcball {
    #[must_use]
    pub fn new(screen_width: u32, screen_height: u32) -> Self {
        let mut arcball = Self {
            camera: Camera::new(),

            rotate_speed: 1.0,
            fovy_degrees: 45.0,
            near: 0.01,
            far: 1000.0,
            min_radius: 0.01,
            max_radius: 1000.0,

            screen_size: Vec2::new(screen_width.max(1) as f32, screen_height.max(1) as f32),
            center: Vec3::ZERO,
            radius: 5.0,
            theta: 0.0,
            phi: FRAC_PI_2,

            dragging: false,
            last_cursor: Vec2::ZERO,
        };

        arcball.resize(screen_width, screen_height);
        arcball.update_view_matrix();
        arcball
    }

    /// Updates the screen dimensions and the projection aspect.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.screen_size = Vec2::new(width.max(1) as f32, height.max(1) as f32);
        let aspect = self.screen_size.x / self.screen_size.y;
        self.camera
            .set_perspective(self.fovy_degrees, aspect, self.near, self.far);
    }

    /// Begins a rotation drag at the given cursor position.
    pub fn start_rotation(&mut self, x: f32, y: f32) {
        self.dragging = true;
        self.last_cursor = Vec2::new(x, y);
    }

    /// Continues a rotation drag; no-op unless a drag is active.
    pub fn rotate_to(&mut self, x: f32, y: f32) {
        if !self.dragging {
            return;
        }

        let cursor = Vec2::new(x, y);
        let delta = cursor - self.last_cursor;
        self.last_cursor = cursor;

        let per_pixel = 2.0 * PI / self.screen_size.y;
        self.theta -= delta.x * per_pixel * self.rotate_speed;
        self.phi -= delta.y * per_pixel * self.rotate_speed;
        self.phi = self.phi.clamp(POLE_EPSILON, PI - POLE_EPSILON);

        self.update_view_matrix();
    }

    /// Ends the active rotation drag.
    pub fn end_rotation(&mut self) {
        self.dragging = false;
    }

    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius.clamp(self.min_radius, self.max_radius);
        self.update_view_matrix();
    }

    /// Dollies in or out by a signed amount.
    pub fn add_radius(&mut self, delta: f32) {
        self.set_radius(self.radius + delta);
    }

    pub fn set_center(&mut self, center: Vec3) {
        self.center = center;
        self.update_view_matrix();
    }

    /// Pans the orbit center by a world-space offset.
    pub fn add_center(&mut self, delta: Vec3) {
        self.set_center(self.center + delta);
    }

    #[inline]
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    #[must_use]
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// The current eye position on the orbit sphere.
    #[must_use]
    pub fn eye_position(&self) -> Vec3 {
        let offset = Vec3::new(
            self.radius * self.phi.sin() * self.theta.sin(),
            self.radius * self.phi.cos(),
            self.radius * self.phi.sin() * self.theta.cos(),
        );
        self.center + offset
    }

    fn update_view_matrix(&mut self) {
        self.camera
            .set_look_at(self.eye_position(), self.center, Vec3::Y);
    }
}
