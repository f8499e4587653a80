use glam::{Mat3, Vec3};

/// A single rigid segment of a [`Skeleton`](crate::skeleton::Skeleton).
///
/// Bones reference joints and each other purely by index into the owning
/// skeleton's flat sequences; there are no owning links, so a whole skeleton
/// can be cloned by value without aliasing.
///
/// # Orientation convention
///
/// `basis` is a 3x3 orthonormal matrix whose columns are the bone's local
/// front / up / side axes. The middle (Y) column is the canonical bone
/// direction: the bone runs from `offset` to
/// `offset + basis.y_axis * length`.
#[derive(Debug, Clone, PartialEq)]
pub struct Bone {
    /// Start joint index (`None` for a root stub)
    pub start: Option<usize>,
    /// End joint index (`None` for an end effector)
    pub end: Option<usize>,
    /// Parent bone index (`None` for the root bone)
    pub parent: Option<usize>,
    /// Indices of bones whose parent is this bone (back-references)
    pub children: Vec<usize>,
    /// World-space offset of the bone, typically the start joint position
    pub offset: Vec3,
    /// Local orthonormal basis, columns = front / up / side
    pub basis: Mat3,
    /// Rest length, captured once on insertion and kept invariant when
    /// re-posing by orientation
    pub length: f32,
}

impl Bone {
    #[must_use]
    pub fn new() -> Self {
        Self {
            start: None,
            end: None,
            parent: None,
            children: Vec::new(),
            offset: Vec3::ZERO,
            basis: Mat3::IDENTITY,
            length: 0.0,
        }
    }

    /// Returns the bone's up axis (the canonical bone direction).
    #[inline]
    #[must_use]
    pub fn up_axis(&self) -> Vec3 {
        self.basis.y_axis
    }

    /// Returns the world-space end of the bone: the offset displaced along
    /// the up axis by the rest length.
    #[inline]
    #[must_use]
    pub fn end_point(&self) -> Vec3 {
        self.offset + self.basis.y_axis * self.length
    }

    /// A bone with neither endpoint set carries no geometric information.
    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.start.is_some() || self.end.is_some()
    }
}

impl Default for Bone {
    fn default() -> Self {
        Self::new()
    }
}
