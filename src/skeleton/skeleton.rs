use glam::{EulerRot, Mat3, Quat, Vec3};

use crate::errors::{ArmatureError, Result};
use crate::geometry::basis_for_direction;
use crate::skeleton::Bone;

/// An ordered collection of joints and the bones spanning them.
///
/// Joints are plain 3D positions identified by index; bones link joints and
/// each other by index, forming a tree with exactly one parentless root.
/// A skeleton is built once (joints and bones added in dependency order,
/// parents before children) and then repeatedly re-posed via
/// [`update_bones_by_joints`](Self::update_bones_by_joints),
/// [`fit_to_target`](Self::fit_to_target) or
/// [`fit_to_bone_lengths`](Self::fit_to_bone_lengths).
#[derive(Debug, Clone, Default)]
pub struct Skeleton {
    pub(crate) joints: Vec<Vec3>,
    pub(crate) bones: Vec<Bone>,
}

impl Skeleton {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Construction & queries
    // ========================================================================

    #[inline]
    #[must_use]
    pub fn joint_count(&self) -> usize {
        self.joints.len()
    }

    #[inline]
    #[must_use]
    pub fn bone_count(&self) -> usize {
        self.bones.len()
    }

    /// Appends a new joint and returns its index.
    pub fn add_joint(&mut self, pos: Vec3) -> usize {
        self.joints.push(pos);
        self.joints.len() - 1
    }

    /// Returns the position of the joint `idx`, if it exists.
    #[must_use]
    pub fn joint(&self, idx: usize) -> Option<Vec3> {
        self.joints.get(idx).copied()
    }

    /// Sets the position of the joint `idx`.
    pub fn set_joint(&mut self, idx: usize, pos: Vec3) -> Result<()> {
        let count = self.joints.len();
        match self.joints.get_mut(idx) {
            Some(joint) => {
                *joint = pos;
                Ok(())
            }
            None => Err(ArmatureError::JointIndexOutOfBounds { index: idx, count }),
        }
    }

    /// Returns a read-only slice of all joint positions.
    #[inline]
    #[must_use]
    pub fn joints(&self) -> &[Vec3] {
        &self.joints
    }

    /// Appends a new bone from joint `start` to joint `end` and returns its
    /// index.
    ///
    /// Either endpoint may be `None` to represent an end effector or a root
    /// stub. The rest length is captured from the current endpoint distance
    /// (zero when an endpoint is unset). If `parent` is given, the new index
    /// is registered in that bone's children list.
    pub fn add_bone(
        &mut self,
        start: Option<usize>,
        end: Option<usize>,
        parent: Option<usize>,
    ) -> Result<usize> {
        let joint_count = self.joints.len();
        let endpoint_ok = |idx: Option<usize>| idx.is_none_or(|i| i < joint_count);

        if !endpoint_ok(start) || !endpoint_ok(end) {
            return Err(ArmatureError::InvalidBoneEndpoints {
                start,
                end,
                count: joint_count,
            });
        }

        if let Some(p) = parent {
            if p >= self.bones.len() {
                return Err(ArmatureError::InvalidParentBone {
                    parent: p,
                    count: self.bones.len(),
                });
            }
        }

        let index = self.bones.len();
        let mut bone = Bone::new();
        bone.start = start;
        bone.end = end;
        bone.parent = parent;
        if let (Some(s), Some(e)) = (start, end) {
            bone.length = (self.joints[s] - self.joints[e]).length();
        }

        if let Some(p) = parent {
            self.bones[p].children.push(index);
        }
        self.bones.push(bone);

        Ok(index)
    }

    /// Returns the bone `idx`, if it exists.
    #[must_use]
    pub fn bone(&self, idx: usize) -> Option<&Bone> {
        self.bones.get(idx)
    }

    /// Returns a read-only slice of all bones.
    #[inline]
    #[must_use]
    pub fn bones(&self) -> &[Bone] {
        &self.bones
    }

    /// Returns all bone rest lengths, in bone-index order.
    #[must_use]
    pub fn bone_lengths(&self) -> Vec<f32> {
        self.bones.iter().map(|b| b.length).collect()
    }

    // ========================================================================
    // Euler-angle access
    // ========================================================================

    /// Decomposes bone `idx`'s basis into XYZ Euler angles.
    #[must_use]
    pub fn bone_rotation_angles(&self, idx: usize) -> Option<Vec3> {
        let bone = self.bones.get(idx)?;
        let (x, y, z) = Quat::from_mat3(&bone.basis).to_euler(EulerRot::XYZ);
        Some(Vec3::new(x, y, z))
    }

    /// Re-orients bone `idx` from XYZ Euler angles, then re-derives every
    /// bone's world offset so the whole tree stays consistent.
    ///
    /// The rotation is composed as consecutive axis rotations about X, Y
    /// and Z; the skeleton's own rest lengths are preserved.
    pub fn set_bone_rotation_angles(&mut self, idx: usize, angles: Vec3) -> Result<()> {
        if idx >= self.bones.len() {
            return Err(ArmatureError::BoneIndexOutOfBounds {
                index: idx,
                count: self.bones.len(),
            });
        }

        let rotation = Quat::from_euler(EulerRot::XYZ, angles.x, angles.y, angles.z);
        self.bones[idx].basis = Mat3::from_quat(rotation);

        let lengths = self.bone_lengths();
        self.fit_to_bone_lengths(&lengths)
    }

    // ========================================================================
    // Forward kinematics
    // ========================================================================

    /// Derives every bone's offset, length and basis from the current joint
    /// positions.
    ///
    /// Bones with a single set endpoint are degenerate: their offset is that
    /// joint and their orientation is reset to identity. Bones with no set
    /// endpoint are reported and skipped, leaving their basis untouched.
    /// A zero-length bone direction also resets the basis to identity.
    pub fn update_bones_by_joints(&mut self) {
        for (i, bone) in self.bones.iter_mut().enumerate() {
            let (start, end) = match (bone.start, bone.end) {
                (None, None) => {
                    log::warn!("bone {i} has no endpoints, skipping");
                    continue;
                }
                (None, Some(e)) => {
                    bone.offset = self.joints[e];
                    bone.basis = Mat3::IDENTITY;
                    continue;
                }
                (Some(s), None) => {
                    bone.offset = self.joints[s];
                    bone.basis = Mat3::IDENTITY;
                    continue;
                }
                (Some(s), Some(e)) => (s, e),
            };

            bone.offset = self.joints[start];
            bone.length = (self.joints[end] - self.joints[start]).length();

            let d = self.joints[end] - self.joints[start];
            if d.length() == 0.0 {
                bone.basis = Mat3::IDENTITY;
                continue;
            }

            // The completion helper degenerates for directions along +-Z;
            // see `basis_for_direction`.
            bone.basis = basis_for_direction(d.normalize());
        }
    }

    // ========================================================================
    // Retargeting
    // ========================================================================

    /// Re-poses this skeleton with the orientations of `target`, preserving
    /// this skeleton's own rest lengths.
    ///
    /// Bones are visited root-first; every non-root bone is re-anchored to
    /// its parent's end point, and the joints are rewritten to match the
    /// fresh bone transforms. The target must have the same bone count and
    /// this skeleton must have a root bone; on failure nothing is modified.
    pub fn fit_to_target(&mut self, target: &Skeleton) -> Result<()> {
        if self.bones.len() != target.bone_count() {
            return Err(ArmatureError::BoneCountMismatch {
                expected: self.bones.len(),
                found: target.bone_count(),
            });
        }

        let order = self.level_order()?;

        for &index in &order {
            let basis = target.bones[index].basis;
            self.bones[index].basis = basis;
            self.reanchor_bone(index);
        }

        Ok(())
    }

    /// Re-poses this skeleton with the supplied rest lengths, preserving
    /// every bone's orientation.
    ///
    /// Traversal and joint write-back mirror [`fit_to_target`](Self::fit_to_target);
    /// `lengths` is indexed by bone index and must match the bone count.
    pub fn fit_to_bone_lengths(&mut self, lengths: &[f32]) -> Result<()> {
        if self.bones.len() != lengths.len() {
            return Err(ArmatureError::BoneCountMismatch {
                expected: self.bones.len(),
                found: lengths.len(),
            });
        }

        let order = self.level_order()?;

        for &index in &order {
            self.bones[index].length = lengths[index];
            self.reanchor_bone(index);
        }

        Ok(())
    }

    /// Splits the skeleton into its joint and bone storages so callers can
    /// read joints while rewriting bones.
    pub(crate) fn parts_mut(&mut self) -> (&[Vec3], &mut [Bone]) {
        (&self.joints, &mut self.bones)
    }

    /// Finds the unique parentless bone.
    fn root_bone(&self) -> Option<usize> {
        self.bones.iter().position(|b| b.parent.is_none())
    }

    /// Builds a parent-before-children ordering of all bone indices,
    /// starting from the root.
    fn level_order(&self) -> Result<Vec<usize>> {
        let root = self.root_bone().ok_or(ArmatureError::NoRootBone)?;

        let mut order = vec![root];
        let mut cursor = 0;
        while cursor < order.len() {
            order.extend_from_slice(&self.bones[order[cursor]].children);
            cursor += 1;
        }

        Ok(order)
    }

    /// Moves bone `index` to its parent's end point (root bones keep their
    /// offset) and rewrites its joints from the bone transform.
    fn reanchor_bone(&mut self, index: usize) {
        if let Some(p) = self.bones[index].parent {
            let parent_end = self.bones[p].end_point();
            self.bones[index].offset = parent_end;
        }

        let bone = &self.bones[index];
        if let Some(s) = bone.start {
            self.joints[s] = bone.offset;
        }
        if let Some(e) = bone.end {
            self.joints[e] = bone.end_point();
        }
    }
}
