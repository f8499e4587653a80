//! MakeHuman rig tests
//!
//! Tests for:
//! - Fixed 19-joint / 18-bone topology wiring
//! - Mesh fitting preconditions (exact vertex count)
//! - Landmark-midpoint joint placement
//! - Anatomical basis derivation (joint-only and mesh-aware)

use armature::errors::ArmatureError;
use armature::rig::landmarks::{
    BONE_COUNT, BONE_FRONT_LANDMARKS, BONE_TOPOLOGY, JOINT_COUNT, JOINT_LANDMARKS,
    MAKEHUMAN_VERTEX_COUNT, joint,
};
use armature::rig::MakeHumanRig;
use glam::{Mat3, Vec3};

// ============================================================================
// Helpers
// ============================================================================

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn vec3_approx(a: Vec3, b: Vec3) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
}

fn assert_orthonormal(basis: Mat3, label: &str) {
    assert!(approx_eq(basis.x_axis.length(), 1.0), "{label}: front not unit");
    assert!(approx_eq(basis.y_axis.length(), 1.0), "{label}: up not unit");
    assert!(approx_eq(basis.z_axis.length(), 1.0), "{label}: side not unit");
    assert!(
        approx_eq(basis.x_axis.dot(basis.y_axis), 0.0),
        "{label}: front/up not orthogonal"
    );
    assert!(
        approx_eq(basis.y_axis.dot(basis.z_axis), 0.0),
        "{label}: up/side not orthogonal"
    );
    assert!(
        approx_eq(basis.x_axis.dot(basis.z_axis), 0.0),
        "{label}: front/side not orthogonal"
    );
    assert!(
        approx_eq(basis.determinant(), 1.0),
        "{label}: basis not right-handed"
    );
}

/// A plausible T-pose, indexed by joint.
fn t_pose() -> [Vec3; JOINT_COUNT] {
    [
        Vec3::new(0.0, 1.8, 0.0),    // head
        Vec3::new(0.0, 1.6, 0.0),    // neck
        Vec3::new(0.25, 1.55, 0.0),  // left shoulder
        Vec3::new(-0.25, 1.55, 0.0), // right shoulder
        Vec3::new(0.0, 1.0, 0.0),    // torso
        Vec3::new(0.55, 1.55, 0.0),  // left elbow
        Vec3::new(-0.55, 1.55, 0.0), // right elbow
        Vec3::new(0.85, 1.55, 0.0),  // left hand
        Vec3::new(-0.85, 1.55, 0.0), // right hand
        Vec3::new(0.15, 0.95, 0.0),  // left hip
        Vec3::new(-0.15, 0.95, 0.0), // right hip
        Vec3::new(0.18, 0.5, 0.0),   // left knee
        Vec3::new(-0.18, 0.5, 0.0),  // right knee
        Vec3::new(0.2, 0.05, 0.0),   // left foot
        Vec3::new(-0.2, 0.05, 0.0),  // right foot
        Vec3::new(1.0, 1.55, 0.0),   // left finger
        Vec3::new(-1.0, 1.55, 0.0),  // right finger
        Vec3::new(0.2, 0.05, 0.15),  // left toe
        Vec3::new(-0.2, 0.05, 0.15), // right toe
    ]
}

/// Builds a MakeHuman-sized vertex buffer whose joint landmarks midpoint to
/// the T-pose and whose front landmarks point towards +Z.
fn t_pose_vertices() -> Vec<Vec3> {
    let mut vertices = vec![Vec3::ZERO; MAKEHUMAN_VERTEX_COUNT];

    let pose = t_pose();
    for (pair, pos) in JOINT_LANDMARKS.iter().zip(pose) {
        vertices[pair[0]] = pos;
        vertices[pair[1]] = pos;
    }

    // front landmark differences must not be parallel to any bone axis;
    // +Z is orthogonal to the whole T-pose
    for pair in &BONE_FRONT_LANDMARKS {
        vertices[pair[0]] = vertices[pair[1]] + Vec3::Z;
    }

    vertices
}

fn fitted_rig() -> MakeHumanRig {
    let mut rig = MakeHumanRig::new();
    rig.fit_to_mesh(&t_pose_vertices()).unwrap();
    rig
}

// ============================================================================
// Topology
// ============================================================================

#[test]
fn rig_has_fixed_joint_and_bone_counts() {
    let rig = MakeHumanRig::new();
    assert_eq!(rig.skeleton().joint_count(), JOINT_COUNT);
    assert_eq!(rig.skeleton().bone_count(), BONE_COUNT);
}

#[test]
fn rig_bones_follow_the_topology_table() {
    let rig = MakeHumanRig::new();
    for (i, &(start, end, parent)) in BONE_TOPOLOGY.iter().enumerate() {
        let bone = rig.skeleton().bone(i).unwrap();
        assert_eq!(bone.start, Some(start), "bone {i} start");
        assert_eq!(bone.end, Some(end), "bone {i} end");
        assert_eq!(bone.parent, parent, "bone {i} parent");
    }
}

#[test]
fn rig_has_exactly_one_root() {
    let rig = MakeHumanRig::new();
    let roots = rig
        .skeleton()
        .bones()
        .iter()
        .filter(|b| b.parent.is_none())
        .count();
    assert_eq!(roots, 1);
}

#[test]
fn rig_children_backreference_their_parent() {
    let rig = MakeHumanRig::new();
    let bones = rig.skeleton().bones();

    for (i, bone) in bones.iter().enumerate() {
        if let Some(p) = bone.parent {
            assert!(
                bones[p].children.contains(&i),
                "bone {i} missing from parent {p}'s children"
            );
        }
        for &child in &bone.children {
            assert_eq!(bones[child].parent, Some(i));
        }
    }
}

#[test]
fn rig_joints_start_at_origin_with_zero_lengths() {
    let rig = MakeHumanRig::new();
    for joint in rig.skeleton().joints() {
        assert_eq!(*joint, Vec3::ZERO);
    }
    for bone in rig.skeleton().bones() {
        assert_eq!(bone.length, 0.0);
    }
}

// ============================================================================
// Mesh Fitting Preconditions
// ============================================================================

#[test]
fn fit_to_mesh_rejects_wrong_vertex_count() {
    let mut rig = MakeHumanRig::new();
    let vertices = vec![Vec3::ONE; 100];

    let err = rig.fit_to_mesh(&vertices).unwrap_err();
    assert!(matches!(
        err,
        ArmatureError::VertexCountMismatch {
            expected: MAKEHUMAN_VERTEX_COUNT,
            found: 100
        }
    ));

    // no joint was modified
    for joint in rig.skeleton().joints() {
        assert_eq!(*joint, Vec3::ZERO);
    }
}

#[test]
fn update_bones_from_mesh_rejects_wrong_vertex_count() {
    let mut rig = fitted_rig();
    let before: Vec<_> = rig.skeleton().bones().to_vec();

    let err = rig.update_bones_from_mesh(&[Vec3::ZERO; 3]).unwrap_err();
    assert!(matches!(err, ArmatureError::VertexCountMismatch { .. }));
    assert_eq!(rig.skeleton().bones(), before.as_slice());
}

// ============================================================================
// Landmark Placement
// ============================================================================

#[test]
fn fit_to_mesh_places_joints_at_landmark_midpoints() {
    let rig = fitted_rig();
    let pose = t_pose();

    for (i, expected) in pose.iter().enumerate() {
        let joint = rig.skeleton().joint(i).unwrap();
        assert!(vec3_approx(joint, *expected), "joint {i}");
    }
}

#[test]
fn fit_to_mesh_derives_bone_offsets_and_lengths() {
    let rig = fitted_rig();
    let pose = t_pose();

    for (i, &(start, end, _)) in BONE_TOPOLOGY.iter().enumerate() {
        let bone = rig.skeleton().bone(i).unwrap();
        assert!(vec3_approx(bone.offset, pose[start]), "bone {i} offset");
        assert!(
            approx_eq(bone.length, (pose[end] - pose[start]).length()),
            "bone {i} length"
        );
    }
}

// ============================================================================
// Mesh-Aware Basis Derivation
// ============================================================================

#[test]
fn mesh_aware_bases_are_orthonormal() {
    let rig = fitted_rig();
    for (i, bone) in rig.skeleton().bones().iter().enumerate() {
        assert_orthonormal(bone.basis, &format!("bone {i}"));
    }
}

#[test]
fn mesh_aware_up_column_is_the_bone_direction() {
    let rig = fitted_rig();
    let pose = t_pose();

    for (i, &(start, end, _)) in BONE_TOPOLOGY.iter().enumerate() {
        let direction = (pose[end] - pose[start]).normalize();
        let up = rig.skeleton().bone(i).unwrap().basis.y_axis;
        assert!(vec3_approx(up, direction), "bone {i} up axis");
    }
}

#[test]
fn mesh_aware_fit_is_idempotent() {
    let mut rig = fitted_rig();
    let first: Vec<_> = rig.skeleton().bones().to_vec();

    rig.fit_to_mesh(&t_pose_vertices()).unwrap();
    let second: Vec<_> = rig.skeleton().bones().to_vec();

    assert_eq!(first, second);
}

// ============================================================================
// Joint-Only Basis Derivation
// ============================================================================

#[test]
fn joint_only_bases_are_orthonormal() {
    let mut rig = fitted_rig();
    rig.update_bones_by_joints();

    for (i, bone) in rig.skeleton().bones().iter().enumerate() {
        assert_orthonormal(bone.basis, &format!("bone {i}"));
    }
}

#[test]
fn joint_only_breast_up_points_from_torso_to_neck() {
    let mut rig = fitted_rig();
    rig.update_bones_by_joints();

    let pose = t_pose();
    let expected = (pose[joint::NECK] - pose[joint::TORSO]).normalize();
    let up = rig.skeleton().bone(3).unwrap().basis.y_axis;
    assert!(vec3_approx(up, expected));
}

#[test]
fn joint_only_limb_up_columns_follow_the_bones() {
    let mut rig = fitted_rig();
    rig.update_bones_by_joints();

    let pose = t_pose();
    // every bone except the breast carries its own direction as up
    for (i, &(start, end, _)) in BONE_TOPOLOGY.iter().enumerate() {
        if i == 3 {
            continue;
        }
        let direction = (pose[end] - pose[start]).normalize();
        let up = rig.skeleton().bone(i).unwrap().basis.y_axis;
        assert!(vec3_approx(up, direction), "bone {i} up axis");
    }
}

#[test]
fn joint_only_straight_arm_takes_the_fallback_reference() {
    // in a T-pose the forearm is colinear with the upper arm, which forces
    // the hinge fallback; the resulting frame must still be orthonormal and
    // aligned with the forearm
    let mut rig = fitted_rig();
    rig.update_bones_by_joints();

    let pose = t_pose();
    for bone_index in [10usize, 11] {
        let (start, end, _) = BONE_TOPOLOGY[bone_index];
        let basis = rig.skeleton().bone(bone_index).unwrap().basis;
        assert_orthonormal(basis, &format!("bone {bone_index}"));
        let direction = (pose[end] - pose[start]).normalize();
        assert!(vec3_approx(basis.y_axis, direction));
    }
}

#[test]
fn joint_only_update_is_idempotent() {
    let mut rig = fitted_rig();
    rig.update_bones_by_joints();
    let first: Vec<_> = rig.skeleton().bones().to_vec();

    rig.update_bones_by_joints();
    let second: Vec<_> = rig.skeleton().bones().to_vec();

    assert_eq!(first, second);
}

// ============================================================================
// Interplay With Generic Retargeting
// ============================================================================

#[test]
fn rig_skeleton_retargets_to_its_own_lengths() {
    let mut rig = fitted_rig();

    let lengths = rig.skeleton().bone_lengths();
    rig.skeleton_mut().fit_to_bone_lengths(&lengths).unwrap();

    assert_eq!(rig.skeleton().bone_lengths(), lengths);
}

#[test]
fn rig_skeleton_fit_to_itself_is_consistent() {
    // the mesh-aware bases carry the bone direction as up, so re-anchoring
    // every bone to its parent's end point reproduces the same pose
    let rig = fitted_rig();

    let target = rig.skeleton().clone();
    let mut reposed = rig.into_skeleton();
    reposed.fit_to_target(&target).unwrap();

    for (bone, reference) in reposed.bones().iter().zip(target.bones()) {
        assert!(vec3_approx(bone.offset, reference.offset), "offset drift");
        assert!(approx_eq(bone.length, reference.length), "length drift");
    }
}
