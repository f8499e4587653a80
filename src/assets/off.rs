//! OFF triangle-mesh import/export.
//!
//! The Object File Format is the exchange format the course meshes ship in:
//! a header token, vertex/face/edge counts, vertex positions, then faces as
//! an arity-prefixed index list. Only triangle faces are accepted.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use glam::Vec3;

use crate::errors::{ArmatureError, Result};

/// Imports vertex positions and triangle indices from an OFF file.
pub fn import_off(path: impl AsRef<Path>) -> Result<(Vec<Vec3>, Vec<[u32; 3]>)> {
    let text = fs::read_to_string(path)?;
    parse_off(&text)
}

/// Exports vertex positions and triangle indices to an OFF file.
pub fn export_off(
    path: impl AsRef<Path>,
    positions: &[Vec3],
    triangles: &[[u32; 3]],
) -> Result<()> {
    let mut out = String::new();
    out.push_str("OFF\n");
    let _ = writeln!(out, "{} {} 0", positions.len(), triangles.len());

    for p in positions {
        let _ = writeln!(out, "{} {} {}", p.x, p.y, p.z);
    }
    for t in triangles {
        let _ = writeln!(out, "3 {} {} {}", t[0], t[1], t[2]);
    }

    fs::write(path, out)?;
    Ok(())
}

/// Parses OFF text into vertex positions and triangle indices.
pub fn parse_off(text: &str) -> Result<(Vec<Vec3>, Vec<[u32; 3]>)> {
    let mut tokens = text.split_whitespace();

    let header = next_token(&mut tokens, "header")?;
    if header != "OFF" {
        return Err(ArmatureError::MalformedOff(format!(
            "unexpected header '{header}'"
        )));
    }

    let vertex_count: usize = next_value(&mut tokens, "vertex count")?;
    let face_count: usize = next_value(&mut tokens, "face count")?;
    let _edge_count: usize = next_value(&mut tokens, "edge count")?;

    let mut positions = Vec::with_capacity(vertex_count);
    for _ in 0..vertex_count {
        let x: f32 = next_value(&mut tokens, "vertex coordinate")?;
        let y: f32 = next_value(&mut tokens, "vertex coordinate")?;
        let z: f32 = next_value(&mut tokens, "vertex coordinate")?;
        positions.push(Vec3::new(x, y, z));
    }

    let mut triangles = Vec::with_capacity(face_count);
    for _ in 0..face_count {
        let arity: usize = next_value(&mut tokens, "face arity")?;
        if arity != 3 {
            return Err(ArmatureError::MalformedOff(format!(
                "only triangle faces are supported, found arity {arity}"
            )));
        }

        let mut tri = [0u32; 3];
        for slot in &mut tri {
            let index: u32 = next_value(&mut tokens, "face index")?;
            if index as usize >= vertex_count {
                return Err(ArmatureError::MalformedOff(format!(
                    "face index {index} out of range (vertex count {vertex_count})"
                )));
            }
            *slot = index;
        }
        triangles.push(tri);
    }

    Ok((positions, triangles))
}

fn next_token<'a>(tokens: &mut impl Iterator<Item = &'a str>, what: &str) -> Result<&'a str> {
    tokens
        .next()
        .ok_or_else(|| ArmatureError::MalformedOff(format!("unexpected end of data, expected {what}")))
}

fn next_value<'a, T: FromStr>(
    tokens: &mut impl Iterator<Item = &'a str>,
    what: &str,
) -> Result<T> {
    let token = next_token(tokens, what)?;
    token
        .parse()
        .map_err(|_| ArmatureError::MalformedOff(format!("invalid {what}: '{token}'")))
}
