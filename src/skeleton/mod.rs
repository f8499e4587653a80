//! Bone-hierarchy kinematics.
//!
//! - [`Bone`]: a rigid segment with an index-linked parent/children tree,
//!   a world offset, an orthonormal basis and a rest length
//! - [`Skeleton`]: the owning joint/bone arena with forward-kinematics
//!   propagation and retargeting by orientation or by length

pub mod bone;
#[allow(clippy::module_inception)]
pub mod skeleton;

pub use bone::Bone;
pub use skeleton::Skeleton;
