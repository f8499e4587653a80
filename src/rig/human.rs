use glam::{Mat3, Vec3};

use crate::errors::{ArmatureError, Result};
use crate::rig::landmarks::{
    BONE_FRONT_LANDMARKS, BONE_TOPOLOGY, JOINT_COUNT, JOINT_LANDMARKS, MAKEHUMAN_VERTEX_COUNT,
    bone, joint,
};
use crate::skeleton::Skeleton;

/// Reference directions closer than this to the bone axis are unusable for
/// basis construction; a fallback axis is substituted instead.
const HINGE_PARALLEL_THRESHOLD: f32 = 0.1;

/// How a bone's "front" reference is obtained in the joint-only basis
/// derivation.
enum FrontRule {
    /// `front = normalize(up x (j[head] - j[tail]))`,
    /// `side = normalize(front x up)`
    CrossUp { head: usize, tail: usize },
    /// Breast only: front is the normal of the hip/torso plane,
    /// `normalize((l_hip - torso) x (r_hip - torso))`
    HipPlane,
    /// Seed front from an already-computed bone's front column, then
    /// re-orthogonalize against this bone's up axis
    AlignFront { source: usize },
    /// Seed front from the negated up column of an already-computed bone
    /// (feet hang off the lower legs)
    AlignDown { source: usize },
    /// Lower limbs: reference is `normalize(j[head] - j[tail])`; when nearly
    /// parallel to the bone axis the fallback bone's front axis is
    /// substituted, then `front = normalize(reference x up)`
    HingeGuard {
        head: usize,
        tail: usize,
        fallback: usize,
    },
}

/// One anatomical basis rule: the bone it applies to, the joint pair whose
/// normalized difference is the up axis, and the front-reference rule.
struct BasisRule {
    bone: usize,
    /// `up = normalize(j[to] - j[from])`
    up: (usize, usize),
    front: FrontRule,
}

/// The 18 bone-specific orientation rules, in evaluation order.
///
/// The order is load-bearing: the head, hands and feet seed their front
/// axis from bones earlier in the list, and the hinge fallbacks reference
/// the already-computed upper limbs.
const BASIS_RULES: [BasisRule; 18] = [
    BasisRule {
        bone: bone::BREAST,
        up: (joint::TORSO, joint::NECK),
        front: FrontRule::HipPlane,
    },
    BasisRule {
        bone: bone::LEFT_SHOULDER,
        up: (joint::NECK, joint::LEFT_SHOULDER),
        front: FrontRule::CrossUp {
            head: joint::TORSO,
            tail: joint::NECK,
        },
    },
    BasisRule {
        bone: bone::RIGHT_SHOULDER,
        up: (joint::NECK, joint::RIGHT_SHOULDER),
        front: FrontRule::CrossUp {
            head: joint::NECK,
            tail: joint::TORSO,
        },
    },
    BasisRule {
        bone: bone::HEAD,
        up: (joint::HEAD, joint::NECK),
        front: FrontRule::AlignFront {
            source: bone::BREAST,
        },
    },
    BasisRule {
        bone: bone::LEFT_ABDOMEN,
        up: (joint::TORSO, joint::LEFT_HIP),
        front: FrontRule::CrossUp {
            head: joint::TORSO,
            tail: joint::NECK,
        },
    },
    BasisRule {
        bone: bone::RIGHT_ABDOMEN,
        up: (joint::TORSO, joint::RIGHT_HIP),
        front: FrontRule::CrossUp {
            head: joint::NECK,
            tail: joint::TORSO,
        },
    },
    BasisRule {
        bone: bone::LEFT_UPPER_ARM,
        up: (joint::LEFT_SHOULDER, joint::LEFT_ELBOW),
        front: FrontRule::CrossUp {
            head: joint::TORSO,
            tail: joint::NECK,
        },
    },
    BasisRule {
        bone: bone::RIGHT_UPPER_ARM,
        up: (joint::RIGHT_SHOULDER, joint::RIGHT_ELBOW),
        front: FrontRule::CrossUp {
            head: joint::NECK,
            tail: joint::TORSO,
        },
    },
    BasisRule {
        bone: bone::LEFT_UPPER_LEG,
        up: (joint::LEFT_HIP, joint::LEFT_KNEE),
        front: FrontRule::CrossUp {
            head: joint::RIGHT_HIP,
            tail: joint::LEFT_HIP,
        },
    },
    BasisRule {
        bone: bone::RIGHT_UPPER_LEG,
        up: (joint::RIGHT_HIP, joint::RIGHT_KNEE),
        front: FrontRule::CrossUp {
            head: joint::RIGHT_HIP,
            tail: joint::LEFT_HIP,
        },
    },
    BasisRule {
        bone: bone::LEFT_LOWER_ARM,
        up: (joint::LEFT_ELBOW, joint::LEFT_HAND),
        front: FrontRule::HingeGuard {
            head: joint::LEFT_ELBOW,
            tail: joint::LEFT_SHOULDER,
            fallback: bone::LEFT_UPPER_ARM,
        },
    },
    BasisRule {
        bone: bone::RIGHT_LOWER_ARM,
        up: (joint::RIGHT_ELBOW, joint::RIGHT_HAND),
        front: FrontRule::HingeGuard {
            head: joint::RIGHT_ELBOW,
            tail: joint::RIGHT_SHOULDER,
            fallback: bone::RIGHT_UPPER_ARM,
        },
    },
    BasisRule {
        bone: bone::LEFT_LOWER_LEG,
        up: (joint::LEFT_KNEE, joint::LEFT_FOOT),
        front: FrontRule::HingeGuard {
            head: joint::LEFT_KNEE,
            tail: joint::RIGHT_KNEE,
            fallback: bone::LEFT_UPPER_LEG,
        },
    },
    BasisRule {
        bone: bone::RIGHT_LOWER_LEG,
        up: (joint::RIGHT_KNEE, joint::RIGHT_FOOT),
        front: FrontRule::HingeGuard {
            head: joint::LEFT_KNEE,
            tail: joint::RIGHT_KNEE,
            fallback: bone::RIGHT_UPPER_LEG,
        },
    },
    BasisRule {
        bone: bone::LEFT_HAND,
        up: (joint::LEFT_HAND, joint::LEFT_FINGER),
        front: FrontRule::AlignFront {
            source: bone::LEFT_LOWER_ARM,
        },
    },
    BasisRule {
        bone: bone::RIGHT_HAND,
        up: (joint::RIGHT_HAND, joint::RIGHT_FINGER),
        front: FrontRule::AlignFront {
            source: bone::RIGHT_LOWER_ARM,
        },
    },
    BasisRule {
        bone: bone::LEFT_FOOT,
        up: (joint::LEFT_FOOT, joint::LEFT_TOE),
        front: FrontRule::AlignDown {
            source: bone::LEFT_LOWER_LEG,
        },
    },
    BasisRule {
        bone: bone::RIGHT_FOOT,
        up: (joint::RIGHT_FOOT, joint::RIGHT_TOE),
        front: FrontRule::AlignDown {
            source: bone::RIGHT_LOWER_LEG,
        },
    },
];

/// The fixed 19-joint / 18-bone human rig bound to the MakeHuman mesh
/// topology.
///
/// A generic [`Skeleton`] plus the mesh-aware fitting capability: joint
/// positions are derived from landmark vertex pairs of a mesh with exactly
/// [`MAKEHUMAN_VERTEX_COUNT`] vertices, and every bone's orthonormal frame
/// is reconstructed from anatomical reference directions.
#[derive(Debug, Clone)]
pub struct MakeHumanRig {
    skeleton: Skeleton,
}

impl MakeHumanRig {
    /// Builds the rig with all joints at the origin and the fixed bone tree
    /// wired up (parents before children).
    #[must_use]
    pub fn new() -> Self {
        let mut skeleton = Skeleton::new();
        for _ in 0..JOINT_COUNT {
            skeleton.add_joint(Vec3::ZERO);
        }
        for &(start, end, parent) in &BONE_TOPOLOGY {
            skeleton
                .add_bone(Some(start), Some(end), parent)
                .expect("rig topology table is consistent");
        }

        Self { skeleton }
    }

    #[inline]
    #[must_use]
    pub fn skeleton(&self) -> &Skeleton {
        &self.skeleton
    }

    #[inline]
    pub fn skeleton_mut(&mut self) -> &mut Skeleton {
        &mut self.skeleton
    }

    /// Consumes the rig, returning the plain skeleton.
    #[must_use]
    pub fn into_skeleton(self) -> Skeleton {
        self.skeleton
    }

    /// Fits the rig to a MakeHuman mesh.
    ///
    /// Every joint is placed at the midpoint of its landmark vertex pair,
    /// then the bone bases are derived from the mesh. The vertex count must
    /// be exactly [`MAKEHUMAN_VERTEX_COUNT`]; otherwise an error is returned
    /// and no joint is modified.
    pub fn fit_to_mesh(&mut self, vertices: &[Vec3]) -> Result<()> {
        Self::check_topology(vertices)?;

        for (i, pair) in JOINT_LANDMARKS.iter().enumerate() {
            let midpoint = 0.5 * (vertices[pair[0]] + vertices[pair[1]]);
            self.skeleton.set_joint(i, midpoint)?;
        }

        self.update_bones_from_mesh(vertices)
    }

    /// Recomputes every bone's offset, length and basis from the current
    /// joint positions alone, using the anatomical rule table.
    pub fn update_bones_by_joints(&mut self) {
        Self::refresh_offsets_and_lengths(&mut self.skeleton);

        let (joints, bones) = self.skeleton.parts_mut();
        let j = |i: usize| joints[i];

        for rule in &BASIS_RULES {
            let up = (j(rule.up.1) - j(rule.up.0)).normalize();

            let (front, side) = match rule.front {
                FrontRule::CrossUp { head, tail } => {
                    let front = up.cross(j(head) - j(tail)).normalize();
                    (front, front.cross(up).normalize())
                }
                FrontRule::HipPlane => {
                    let front = (j(joint::LEFT_HIP) - j(joint::TORSO))
                        .cross(j(joint::RIGHT_HIP) - j(joint::TORSO))
                        .normalize();
                    (front, front.cross(up).normalize())
                }
                FrontRule::AlignFront { source } => {
                    let seed = bones[source].basis.x_axis;
                    let side = seed.cross(up).normalize();
                    (up.cross(side).normalize(), side)
                }
                FrontRule::AlignDown { source } => {
                    let seed = -bones[source].basis.y_axis;
                    let side = up.cross(seed).normalize();
                    (up.cross(side).normalize(), side)
                }
                FrontRule::HingeGuard {
                    head,
                    tail,
                    fallback,
                } => {
                    let mut reference = (j(head) - j(tail)).normalize();
                    if up.dot(reference) > HINGE_PARALLEL_THRESHOLD {
                        reference = up.cross(bones[fallback].basis.x_axis);
                    }
                    let front = reference.cross(up).normalize();
                    (front, front.cross(up).normalize())
                }
            };

            bones[rule.bone].basis = Mat3::from_cols(front, up, side);
        }
    }

    /// Recomputes every bone's offset, length and basis, taking the front
    /// reference directions from the mesh's per-bone landmark vertex pairs.
    ///
    /// More mesh-faithful than [`update_bones_by_joints`](Self::update_bones_by_joints),
    /// but only valid for the one fixed mesh topology.
    pub fn update_bones_from_mesh(&mut self, vertices: &[Vec3]) -> Result<()> {
        Self::check_topology(vertices)?;

        Self::refresh_offsets_and_lengths(&mut self.skeleton);

        let (joints, bones) = self.skeleton.parts_mut();
        for (i, pair) in BONE_FRONT_LANDMARKS.iter().enumerate() {
            let (Some(s), Some(e)) = (bones[i].start, bones[i].end) else {
                continue;
            };

            let up = (joints[e] - joints[s]).normalize();
            let front = (vertices[pair[0]] - vertices[pair[1]]).normalize();
            let side = up.cross(front).normalize();
            let front = up.cross(side).normalize();

            bones[i].basis = Mat3::from_cols(front, up, side);
        }

        Ok(())
    }

    fn check_topology(vertices: &[Vec3]) -> Result<()> {
        if vertices.len() == MAKEHUMAN_VERTEX_COUNT {
            Ok(())
        } else {
            Err(ArmatureError::VertexCountMismatch {
                expected: MAKEHUMAN_VERTEX_COUNT,
                found: vertices.len(),
            })
        }
    }

    fn refresh_offsets_and_lengths(skeleton: &mut Skeleton) {
        let (joints, bones) = skeleton.parts_mut();
        for bone in bones {
            if let (Some(s), Some(e)) = (bone.start, bone.end) {
                bone.offset = joints[s];
                bone.length = (joints[e] - joints[s]).length();
            }
        }
    }
}

impl Default for MakeHumanRig {
    fn default() -> Self {
        Self::new()
    }
}
