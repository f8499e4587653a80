#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

//! Skeletal kinematics and rig fitting.
//!
//! The core of the crate is the bone-hierarchy kinematics subsystem:
//! [`Skeleton`] (an index-linked joint/bone tree with forward-kinematics
//! propagation and retargeting) and [`MakeHumanRig`] (a fixed 19-joint /
//! 18-bone human rig that derives a consistent orthonormal frame per bone
//! from landmark vertices of one known mesh topology). Around it sit the
//! supporting pieces a small animation exercise stack needs: procedural
//! mesh generation, camera math with an arcball controller, light and
//! material data, and OFF mesh I/O.

pub mod assets;
pub mod camera;
pub mod errors;
pub mod geometry;
pub mod light;
pub mod material;
pub mod rig;
pub mod skeleton;

pub use assets::{export_off, import_off};
pub use camera::{Arcball, Camera};
pub use errors::{ArmatureError, Result};
pub use geometry::{TriangleMesh, WireMesh, basis_for_direction};
pub use light::Light;
pub use material::PhongMaterial;
pub use rig::MakeHumanRig;
pub use skeleton::{Bone, Skeleton};
