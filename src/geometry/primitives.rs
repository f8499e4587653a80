//! Procedural primitive generators.
//!
//! All generators return CPU-side [`TriangleMesh`] / [`WireMesh`] data;
//! uploading to a renderer is the caller's concern.

use std::f32::consts::PI;

use glam::{Mat3, Vec2, Vec3, Vec4};

use crate::geometry::basis::basis_for_direction;
use crate::geometry::mesh::{TriangleMesh, WireMesh};

const MIN_SECTIONS: u32 = 3;
const MIN_RADIUS: f32 = 0.001;

/// Creates a unit-normal XZ ground plane of the given edge length,
/// centered on the origin.
#[must_use]
pub fn create_xz_plane(size: f32) -> TriangleMesh {
    let s = size.abs() * 0.5;
    let n = Vec3::Y;

    let mut mesh = TriangleMesh::new();
    mesh.positions = vec![
        Vec3::new(-s, 0.0, s),
        Vec3::new(s, 0.0, s),
        Vec3::new(s, 0.0, -s),
        Vec3::new(-s, 0.0, -s),
    ];
    mesh.normals = vec![n; 4];
    mesh.uvs = vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(0.0, 1.0),
    ];
    mesh.triangles = vec![[0, 1, 2], [0, 2, 3]];

    mesh
}

/// Creates a capped cylinder between `start` and `end`.
///
/// The mantle is built from `sections` quads with the low/high rim vertices
/// interleaved; the caps are triangle fans around the first rim vertex of
/// each ring. `sections` is clamped to at least 3 and `radius` to a small
/// positive minimum.
#[must_use]
pub fn create_cylinder(start: Vec3, end: Vec3, radius: f32, sections: u32) -> TriangleMesh {
    let sections = sections.max(MIN_SECTIONS);
    let radius = radius.max(MIN_RADIUS);

    let basis = basis_for_direction(end - start);
    let x = basis.x_axis;
    let y = basis.z_axis;

    let angle_step = 2.0 * PI / sections as f32;

    let mut mesh = TriangleMesh::new();

    for i in 0..sections {
        let angle = angle_step * i as f32;
        let radial = angle.cos() * x + angle.sin() * y;

        mesh.positions.push(start + radius * radial);
        mesh.positions.push(end + radius * radial);
        mesh.normals.push(radial);
        mesh.normals.push(radial);
        let u = i as f32 / sections as f32;
        mesh.uvs.push(Vec2::new(u, 0.0));
        mesh.uvs.push(Vec2::new(u, 0.0));

        if i == 0 {
            continue;
        }

        // close the quad against the previous ring pair
        let v = 2 + (2 * i - 1);
        mesh.triangles.push([v - 2, v, v - 3]);
        mesh.triangles.push([v, v - 1, v - 3]);
    }

    // last mantle quad wraps around to the first ring pair
    let v = mesh.positions.len() as u32 - 1;
    mesh.triangles.push([v, 1, v - 1]);
    mesh.triangles.push([1, 0, v - 1]);

    // caps: fans around the first low/high rim vertex
    for i in 1..sections - 1 {
        mesh.triangles.push([0, 2 * i, 2 * (i + 1)]);
        mesh.triangles.push([1, 2 * (i + 1) + 1, 2 * i + 1]);
    }

    mesh
}

/// Creates a capped cone from a base circle at `start` to `tip`.
#[must_use]
pub fn create_cone(start: Vec3, tip: Vec3, radius: f32, sections: u32) -> TriangleMesh {
    let sections = sections.max(MIN_SECTIONS);
    let radius = radius.max(MIN_RADIUS);

    let dir = (tip - start).normalize();
    let basis = basis_for_direction(dir);
    let x = basis.x_axis;
    let y = basis.z_axis;

    let angle_step = 2.0 * PI / sections as f32;

    let mut mesh = TriangleMesh::new();

    mesh.positions.push(tip);
    mesh.normals.push(dir);
    mesh.uvs.push(Vec2::new(1.0, 1.0));

    for i in 0..sections {
        let angle = angle_step * i as f32;
        let radial = angle.cos() * x + angle.sin() * y;

        mesh.positions.push(start + radius * radial);
        mesh.normals.push(radial);
        mesh.uvs.push(Vec2::new(i as f32 / sections as f32, 0.0));

        if i == 0 {
            continue;
        }

        mesh.triangles.push([0, i + 1, i]);
    }

    // close the mantle
    let last = mesh.positions.len() as u32 - 1;
    mesh.triangles.push([0, 1, last]);

    // base cap fan around the first rim vertex
    for i in 1..sections - 1 {
        mesh.triangles.push([1, i + 1, i + 2]);
    }

    mesh
}

/// Creates an icosahedron shell with circumradius `radius` around `center`.
#[must_use]
pub fn create_icosphere(center: Vec3, radius: f32) -> TriangleMesh {
    let radius = radius.max(MIN_RADIUS);

    // golden-ratio rectangle corners
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;

    let corners = [
        Vec3::new(-1.0, t, 0.0),
        Vec3::new(1.0, t, 0.0),
        Vec3::new(-1.0, -t, 0.0),
        Vec3::new(1.0, -t, 0.0),
        Vec3::new(0.0, -1.0, t),
        Vec3::new(0.0, 1.0, t),
        Vec3::new(0.0, -1.0, -t),
        Vec3::new(0.0, 1.0, -t),
        Vec3::new(t, 0.0, -1.0),
        Vec3::new(t, 0.0, 1.0),
        Vec3::new(-t, 0.0, -1.0),
        Vec3::new(-t, 0.0, 1.0),
    ];

    let mut mesh = TriangleMesh::new();
    for corner in corners {
        let dir = corner.normalize();
        mesh.positions.push(center + dir * radius);
        mesh.normals.push(dir);
    }

    mesh.triangles = vec![
        [0, 11, 5],
        [0, 5, 1],
        [0, 1, 7],
        [0, 7, 10],
        [0, 10, 11],
        [1, 5, 9],
        [5, 11, 4],
        [11, 10, 2],
        [10, 7, 6],
        [7, 1, 8],
        [3, 9, 4],
        [3, 4, 2],
        [3, 2, 6],
        [3, 6, 8],
        [3, 8, 9],
        [4, 9, 5],
        [2, 4, 11],
        [6, 2, 10],
        [8, 6, 7],
        [9, 8, 1],
    ];

    mesh
}

/// Creates the 12-edge wireframe box spanning an AABB.
#[must_use]
pub fn create_wire_box(min: Vec3, max: Vec3) -> WireMesh {
    WireMesh {
        positions: vec![
            min,
            Vec3::new(min.x, min.y, max.z),
            Vec3::new(max.x, min.y, max.z),
            Vec3::new(max.x, min.y, min.z),
            Vec3::new(min.x, max.y, min.z),
            Vec3::new(min.x, max.y, max.z),
            max,
            Vec3::new(max.x, max.y, min.z),
        ],
        segments: vec![
            [0, 1],
            [1, 2],
            [2, 3],
            [3, 0],
            [0, 4],
            [1, 5],
            [2, 6],
            [3, 7],
            [4, 5],
            [5, 6],
            [6, 7],
            [7, 4],
        ],
    }
}

/// Creates three thin unit-length cylinders along the X/Y/Z axes, colored
/// red/green/blue, for visualising a coordinate frame.
#[must_use]
pub fn create_axis_triad() -> TriangleMesh {
    // each matrix maps the +Y template cylinder onto one axis
    let orientations = [
        Mat3::from_cols(Vec3::new(0.0, -1.0, 0.0), Vec3::X, Vec3::Z),
        Mat3::IDENTITY,
        Mat3::from_cols(Vec3::X, Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, -1.0, 0.0)),
    ];

    let mut mesh = TriangleMesh::new();

    for (axis, orientation) in orientations.into_iter().enumerate() {
        let template = create_cylinder(Vec3::ZERO, Vec3::Y, 0.01, 20);
        let base = mesh.positions.len() as u32;

        for (p, n) in template.positions.iter().zip(&template.normals) {
            mesh.positions.push(orientation * *p);
            mesh.normals.push(orientation * *n);
            mesh.colors.push(Vec4::new(
                f32::from(axis == 0),
                f32::from(axis == 1),
                f32::from(axis == 2),
                1.0,
            ));
        }

        for tri in &template.triangles {
            mesh.triangles
                .push([base + tri[0], base + tri[1], base + tri[2]]);
        }
    }

    mesh
}
