//! Mesh data and procedural geometry.
//!
//! - [`TriangleMesh`] / [`WireMesh`]: CPU-side vertex/index soup, the
//!   exchange format between importers, generators and the rig fitter
//! - [`basis_for_direction`]: orthonormal basis completion from a single axis
//! - vertex-soup utilities (normals, centering, rigid edits)
//! - `create_*` primitive generators (plane, cylinder, cone, icosphere,
//!   wire box, axis triad)

pub mod basis;
pub mod mesh;
pub mod primitives;

pub use basis::basis_for_direction;
pub use mesh::{
    TriangleMesh, WireMesh, center_mesh, compute_vertex_normals, line_dots, offset_mesh,
    rotate_mesh, scale_mesh,
};
pub use primitives::{
    create_axis_triad, create_cone, create_cylinder, create_icosphere, create_wire_box,
    create_xz_plane,
};
