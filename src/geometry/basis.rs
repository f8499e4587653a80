use glam::{Mat3, Vec3};

/// Completes a single direction into a full orthonormal basis.
///
/// The returned matrix has `dir` as its middle (Y) column; the other two
/// columns are built by crossing against a fixed near-vertical reference,
/// `(0, 0, -1)`, flipped to `(0, 0, 1)` when `dir` points downward. The
/// caller is expected to pass a unit-length direction; the middle column is
/// stored as given.
///
/// Known limitation: a direction colinear with the reference (i.e. along
/// ±Z) makes both cross products vanish before normalization, so the
/// resulting side columns are undefined for those directions.
#[must_use]
pub fn basis_for_direction(dir: Vec3) -> Mat3 {
    let reference = if dir.y < 0.0 { Vec3::Z } else { Vec3::NEG_Z };

    let e2 = dir.cross(reference).normalize();
    let e1 = e2.cross(dir).normalize();

    Mat3::from_cols(e2, dir, e1)
}
