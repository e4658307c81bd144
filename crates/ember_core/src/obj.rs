//! Minimal OBJ loading: vertices and triangular faces only.
//!
//! Produces the raw position/index arrays that [`crate::TriangleMesh`]
//! consumes; normals are derived by the mesh itself. Anything beyond `v`
//! and `f` statements (comments, groups, materials, texture coordinates)
//! is ignored.

use ember_math::Vec3;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ObjError {
    #[error("failed to read OBJ file: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: malformed `{statement}` statement")]
    Malformed {
        line: usize,
        statement: &'static str,
    },
    #[error("line {line}: face index {index} out of range")]
    IndexOutOfRange { line: usize, index: i64 },
}

/// Load an OBJ file from disk.
pub fn load_obj(path: impl AsRef<Path>) -> Result<(Vec<Vec3>, Vec<u32>), ObjError> {
    let text = std::fs::read_to_string(path)?;
    parse_obj(&text)
}

/// Parse OBJ text into positions and triangle indices (0-based).
pub fn parse_obj(text: &str) -> Result<(Vec<Vec3>, Vec<u32>), ObjError> {
    let mut positions = Vec::new();
    let mut indices = Vec::new();

    for (line_number, line) in text.lines().enumerate() {
        let line_number = line_number + 1;
        let mut tokens = line.split_whitespace();

        match tokens.next() {
            Some("v") => {
                let mut component = || -> Result<f32, ObjError> {
                    tokens
                        .next()
                        .and_then(|t| t.parse().ok())
                        .ok_or(ObjError::Malformed {
                            line: line_number,
                            statement: "v",
                        })
                };
                let x = component()?;
                let y = component()?;
                let z = component()?;
                positions.push(Vec3::new(x, y, z));
            }
            Some("f") => {
                for _ in 0..3 {
                    let token = tokens.next().ok_or(ObjError::Malformed {
                        line: line_number,
                        statement: "f",
                    })?;
                    // Face tokens may carry /uv/normal references; only the
                    // position index matters here.
                    let index: i64 = token
                        .split('/')
                        .next()
                        .and_then(|t| t.parse().ok())
                        .ok_or(ObjError::Malformed {
                            line: line_number,
                            statement: "f",
                        })?;
                    // OBJ indices are 1-based.
                    if index < 1 || index as usize > positions.len() {
                        return Err(ObjError::IndexOutOfRange {
                            line: line_number,
                            index,
                        });
                    }
                    indices.push((index - 1) as u32);
                }
            }
            // Comments and unsupported statements are skipped.
            _ => {}
        }
    }

    Ok((positions, indices))
}
