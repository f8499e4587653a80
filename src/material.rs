//! Phong material parameters.

use glam::Vec4;

/// Classic ambient/diffuse/specular reflectance set.
#[derive(Debug, Clone, PartialEq)]
pub struct PhongMaterial {
    pub ambient: Vec4,
    pub diffuse: Vec4,
    pub specular: Vec4,
    pub shininess: f32,
}

impl PhongMaterial {
    #[must_use]
    pub fn new(ambient: Vec4, diffuse: Vec4, specular: Vec4, shininess: f32) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
            shininess,
        }
    }

    /// A material with only the diffuse term set.
    #[must_use]
    pub fn with_diffuse(diffuse: Vec4) -> Self {
        Self {
            diffuse,
            ..Self::default()
        }
    }
}

impl Default for PhongMaterial {
    /// Matte mid-gray fallback.
    fn default() -> Self {
        Self {
            ambient: Vec4::new(0.0, 0.0, 0.0, 1.0),
            diffuse: Vec4::new(0.5, 0.5, 0.5, 1.0),
            specular: Vec4::new(0.0, 0.0, 0.0, 1.0),
            shininess: 1.0,
        }
    }
}
