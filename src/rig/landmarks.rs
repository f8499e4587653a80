//! MakeHuman rig configuration tables.
//!
//! The fixed-rig fitter is bound to one specific, externally produced mesh
//! topology (a MakeHuman export with exactly [`MAKEHUMAN_VERTEX_COUNT`]
//! vertices). The vertex indices below are hand-picked landmarks on that
//! mesh and must be preserved bit-for-bit for compatibility with the
//! reference rig; treat this module as a configuration asset.

/// Vertex count of the bound MakeHuman mesh topology.
pub const MAKEHUMAN_VERTEX_COUNT: usize = 19811;

/// Number of joints in the rig.
pub const JOINT_COUNT: usize = 19;

/// Number of bones in the rig.
pub const BONE_COUNT: usize = 18;

/// Named joint indices.
pub mod joint {
    pub const HEAD: usize = 0;
    pub const NECK: usize = 1;
    pub const LEFT_SHOULDER: usize = 2;
    pub const RIGHT_SHOULDER: usize = 3;
    pub const TORSO: usize = 4;
    pub const LEFT_ELBOW: usize = 5;
    pub const RIGHT_ELBOW: usize = 6;
    pub const LEFT_HAND: usize = 7;
    pub const RIGHT_HAND: usize = 8;
    pub const LEFT_HIP: usize = 9;
    pub const RIGHT_HIP: usize = 10;
    pub const LEFT_KNEE: usize = 11;
    pub const RIGHT_KNEE: usize = 12;
    pub const LEFT_FOOT: usize = 13;
    pub const RIGHT_FOOT: usize = 14;
    pub const LEFT_FINGER: usize = 15;
    pub const RIGHT_FINGER: usize = 16;
    pub const LEFT_TOE: usize = 17;
    pub const RIGHT_TOE: usize = 18;
}

/// Named bone indices.
pub mod bone {
    pub const HEAD: usize = 0;
    pub const LEFT_SHOULDER: usize = 1;
    pub const RIGHT_SHOULDER: usize = 2;
    pub const BREAST: usize = 3;
    pub const LEFT_ABDOMEN: usize = 4;
    pub const RIGHT_ABDOMEN: usize = 5;
    pub const LEFT_UPPER_ARM: usize = 6;
    pub const RIGHT_UPPER_ARM: usize = 7;
    pub const LEFT_UPPER_LEG: usize = 8;
    pub const RIGHT_UPPER_LEG: usize = 9;
    pub const LEFT_LOWER_ARM: usize = 10;
    pub const RIGHT_LOWER_ARM: usize = 11;
    pub const LEFT_LOWER_LEG: usize = 12;
    pub const RIGHT_LOWER_LEG: usize = 13;
    pub const LEFT_HAND: usize = 14;
    pub const RIGHT_HAND: usize = 15;
    pub const LEFT_FOOT: usize = 16;
    pub const RIGHT_FOOT: usize = 17;
}

/// Bone tree: (start joint, end joint, parent bone), in bone-index order.
pub const BONE_TOPOLOGY: [(usize, usize, Option<usize>); BONE_COUNT] = [
    (0, 1, None),       // head
    (1, 2, Some(0)),    // left shoulder
    (1, 3, Some(0)),    // right shoulder
    (1, 4, Some(0)),    // breast
    (4, 9, Some(3)),    // left abdomen
    (4, 10, Some(3)),   // right abdomen
    (2, 5, Some(1)),    // left upper arm
    (3, 6, Some(2)),    // right upper arm
    (9, 11, Some(4)),   // left upper leg
    (10, 12, Some(5)),  // right upper leg
    (5, 7, Some(6)),    // left lower arm
    (6, 8, Some(7)),    // right lower arm
    (11, 13, Some(8)),  // left lower leg
    (12, 14, Some(9)),  // right lower leg
    (7, 15, Some(10)),  // left hand
    (8, 16, Some(11)),  // right hand
    (13, 17, Some(12)), // left foot
    (14, 18, Some(13)), // right foot
];

/// Per-joint mesh landmark pairs; the joint position is their midpoint.
/// Finger and toe pairs are degenerate on purpose.
pub const JOINT_LANDMARKS: [[usize; 2]; JOINT_COUNT] = [
    [8567, 4870],   // head
    [14675, 5137],  // neck
    [12618, 11324], // left shoulder
    [2728, 1432],   // right shoulder
    [7952, 17867],  // torso
    [17390, 16872], // left elbow
    [7496, 6979],   // right elbow
    [16772, 17174], // left hand
    [6879, 7281],   // right hand
    [10478, 12366], // left hip
    [585, 2476],    // right hip
    [13068, 18095], // left knee
    [3174, 8180],   // right knee
    [19416, 18412], // left foot
    [9499, 8497],   // right foot
    [15957, 15957], // left finger
    [6064, 6064],   // right finger
    [19495, 19495], // left toe
    [9579, 9579],   // right toe
];

/// Per-bone mesh landmark pairs; the normalized difference of the two vertex
/// positions is the bone's "front" reference direction in the mesh-aware
/// basis derivation.
pub const BONE_FRONT_LANDMARKS: [[usize; 2]; BONE_COUNT] = [
    [4434, 4870],   // head
    [12099, 11909], // left shoulder
    [2207, 2018],   // right shoulder
    [15414, 5226],  // breast
    [12666, 10996], // left abdomen
    [2775, 1103],   // right abdomen
    [11550, 15218], // left upper arm
    [1659, 5323],   // right upper arm
    [13361, 10389], // left upper leg
    [3466, 496],    // right upper leg
    [9908, 16966],  // left lower arm
    [13, 7073],     // right lower arm
    [18182, 11443], // left lower leg
    [8267, 1551],   // right lower leg
    [17358, 16755], // left hand
    [7464, 6862],   // right hand
    [19263, 10545], // left foot
    [9346, 652],    // right foot
];
