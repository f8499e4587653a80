//! Camera tests
//!
//! Tests for:
//! - look_at view matrices and eye recovery
//! - GL-style perspective/orthographic projections
//! - Arcball orbit controller (radius preservation, drag gating, panning)

use armature::camera::{Arcball, Camera};
use glam::{Vec3, Vec4};

// ============================================================================
// Helpers
// ============================================================================

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn vec3_approx(a: Vec3, b: Vec3) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
}

// ============================================================================
// View Matrix
// ============================================================================

#[test]
fn look_at_moves_center_onto_the_view_axis() {
    let mut camera = Camera::new();
    camera.set_look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);

    let center_in_view = camera.view_matrix() * Vec4::new(0.0, 0.0, 0.0, 1.0);
    assert!(approx_eq(center_in_view.x, 0.0));
    assert!(approx_eq(center_in_view.y, 0.0));
    assert!(approx_eq(center_in_view.z, -5.0));
}

#[test]
fn eye_position_recovers_the_look_at_eye() {
    let mut camera = Camera::new();
    let eye = Vec3::new(3.0, 4.0, 5.0);
    camera.set_look_at(eye, Vec3::ZERO, Vec3::Y);

    assert!(vec3_approx(camera.eye_position(), eye));
}

// ============================================================================
// Projections
// ============================================================================

#[test]
fn perspective_maps_near_and_far_to_gl_clip_range() {
    let mut camera = Camera::new();
    camera.set_perspective(60.0, 1.0, 1.0, 10.0);
    let proj = camera.projection_matrix();

    let near = proj * Vec4::new(0.0, 0.0, -1.0, 1.0);
    assert!(approx_eq(near.z / near.w, -1.0));

    let far = proj * Vec4::new(0.0, 0.0, -10.0, 1.0);
    assert!(approx_eq(far.z / far.w, 1.0));
}

#[test]
fn orthographic_maps_the_box_corners_to_clip_corners() {
    let mut camera = Camera::new();
    camera.set_orthographic(-2.0, 2.0, -1.0, 1.0, 0.1, 10.0);
    let proj = camera.projection_matrix();

    let corner = proj * Vec4::new(2.0, 1.0, -10.0, 1.0);
    assert!(approx_eq(corner.x, 1.0));
    assert!(approx_eq(corner.y, 1.0));
    assert!(approx_eq(corner.z, 1.0));

    let opposite = proj * Vec4::new(-2.0, -1.0, -0.1, 1.0);
    assert!(approx_eq(opposite.x, -1.0));
    assert!(approx_eq(opposite.y, -1.0));
    assert!(approx_eq(opposite.z, -1.0));
}

#[test]
fn view_projection_composes_in_projection_view_order() {
    let mut camera = Camera::new();
    camera.set_look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
    camera.set_perspective(45.0, 1.0, 0.1, 100.0);

    let expected = camera.projection_matrix() * camera.view_matrix();
    assert_eq!(camera.view_projection_matrix(), expected);
}

// ============================================================================
// Arcball
// ============================================================================

#[test]
fn arcball_starts_on_the_z_axis() {
    let arcball = Arcball::new(800, 600);
    assert!(vec3_approx(arcball.eye_position(), Vec3::new(0.0, 0.0, 5.0)));
    assert!(vec3_approx(arcball.camera.eye_position(), arcball.eye_position()));
}

#[test]
fn arcball_rotation_preserves_the_orbit_radius() {
    let mut arcball = Arcball::new(800, 600);
    let radius = arcball.radius();

    arcball.start_rotation(100.0, 100.0);
    arcball.rotate_to(260.0, 40.0);
    arcball.rotate_to(300.0, 220.0);
    arcball.end_rotation();

    let eye = arcball.eye_position();
    assert!(approx_eq((eye - arcball.center()).length(), radius));
    assert!(vec3_approx(arcball.camera.eye_position(), eye));
}

#[test]
fn arcball_ignores_motion_without_an_active_drag() {
    let mut arcball = Arcball::new(800, 600);
    let eye_before = arcball.eye_position();

    arcball.rotate_to(400.0, 300.0);

    assert!(vec3_approx(arcball.eye_position(), eye_before));
}

#[test]
fn arcball_radius_is_clamped() {
    let mut arcball = Arcball::new(800, 600);

    arcball.set_radius(-3.0);
    assert!(approx_eq(arcball.radius(), arcball.min_radius));

    arcball.add_radius(1e9);
    assert!(approx_eq(arcball.radius(), arcball.max_radius));
}

#[test]
fn arcball_pan_moves_center_and_eye_together() {
    let mut arcball = Arcball::new(800, 600);
    let eye_before = arcball.eye_position();

    let delta = Vec3::new(1.0, 2.0, 0.0);
    arcball.add_center(delta);

    assert!(vec3_approx(arcball.center(), delta));
    assert!(vec3_approx(arcball.eye_position(), eye_before + delta));
}

#[test]
fn arcball_drag_clamps_at_the_poles() {
    let mut arcball = Arcball::new(800, 600);

    // drag far past the top pole
    arcball.start_rotation(0.0, 0.0);
    arcball.rotate_to(0.0, 10_000.0);
    arcball.end_rotation();

    // the eye stays strictly off the vertical axis
    let eye = arcball.eye_position() - arcball.center();
    assert!(eye.x.abs() + eye.z.abs() > 0.0);
    assert!(approx_eq(eye.length(), arcball.radius()));
}
