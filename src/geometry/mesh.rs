use glam::{Mat3, Vec2, Vec3, Vec4};

/// CPU-side triangle soup.
///
/// This is the exchange format between the mesh importer, the procedural
/// primitive generators and the rig fitter: an ordered vertex array plus a
/// triangle index list. The `normals`, `uvs` and `colors` channels are
/// optional and left empty by generators that do not produce them.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
    pub colors: Vec<Vec4>,
    pub triangles: Vec<[u32; 3]>,
}

impl TriangleMesh {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Recomputes the smooth per-vertex normal set from the current
    /// positions and triangles.
    pub fn recompute_normals(&mut self) {
        self.normals = compute_vertex_normals(&self.positions, &self.triangles);
    }
}

/// CPU-side line geometry (debug visualisation helpers).
#[derive(Debug, Clone, Default)]
pub struct WireMesh {
    pub positions: Vec<Vec3>,
    pub segments: Vec<[u32; 2]>,
}

// ============================================================================
// Vertex-soup utilities
// ============================================================================

/// Calculates a smooth per-vertex normal set (normalized).
///
/// Face normals are accumulated onto each incident vertex and normalized at
/// the end, so larger faces weigh in proportionally.
#[must_use]
pub fn compute_vertex_normals(positions: &[Vec3], triangles: &[[u32; 3]]) -> Vec<Vec3> {
    let mut normals = vec![Vec3::ZERO; positions.len()];

    for tri in triangles {
        let a = positions[tri[0] as usize];
        let b = positions[tri[1] as usize];
        let c = positions[tri[2] as usize];
        let face_normal = (b - a).cross(c - a).normalize();
        normals[tri[0] as usize] += face_normal;
        normals[tri[1] as usize] += face_normal;
        normals[tri[2] as usize] += face_normal;
    }

    for n in &mut normals {
        *n = n.normalize();
    }

    normals
}

/// Centers scattered point data on its center of gravity.
///
/// Returns the centroid that was subtracted from every vertex.
pub fn center_mesh(positions: &mut [Vec3]) -> Vec3 {
    if positions.is_empty() {
        return Vec3::ZERO;
    }

    let mut cog = Vec3::ZERO;
    for p in positions.iter() {
        cog += *p;
    }
    cog /= positions.len() as f32;

    for p in positions.iter_mut() {
        *p -= cog;
    }

    cog
}

/// Subtracts a vector from all vertices.
pub fn offset_mesh(positions: &mut [Vec3], offset: Vec3) {
    for p in positions.iter_mut() {
        *p -= offset;
    }
}

/// Rotates all vertices by a matrix.
pub fn rotate_mesh(positions: &mut [Vec3], rotation: Mat3) {
    for p in positions.iter_mut() {
        *p = rotation * *p;
    }
}

/// Scales all vertices by a scalar.
pub fn scale_mesh(positions: &mut [Vec3], factor: f32) {
    for p in positions.iter_mut() {
        *p *= factor;
    }
}

/// Samples evenly spaced dots along the segment from `a` to `b`.
///
/// `delta` is the requested spacing; segments too short to hold at least two
/// dots produce an empty result.
#[must_use]
pub fn line_dots(a: Vec3, b: Vec3, delta: f32) -> Vec<Vec3> {
    let num_points = ((b - a).length() / delta) as usize;

    if num_points < 2 {
        return Vec::new();
    }

    let mut dots = Vec::with_capacity(num_points);
    for i in 0..num_points {
        let w = i as f32 / (num_points - 1) as f32;
        dots.push((1.0 - w) * a + w * b);
    }

    dots
}
