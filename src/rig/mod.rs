//! Fixed human rig bound to the MakeHuman mesh topology.
//!
//! [`MakeHumanRig`] composes a generic [`Skeleton`](crate::skeleton::Skeleton)
//! with a mesh-aware fitter; the [`landmarks`] module holds the rig's
//! configuration tables (joint/bone topology and landmark vertex indices).

pub mod human;
pub mod landmarks;

pub use human::MakeHumanRig;
pub use landmarks::{BONE_COUNT, JOINT_COUNT, MAKEHUMAN_VERTEX_COUNT};
