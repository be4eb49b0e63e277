use std::collections::HashSet;

use crate::loaders::MeshData;
use crate::types::LineVertex;

pub const AXIS_LENGTH: f32 = 5.0;
pub const WIREFRAME_COLOR: [f32; 3] = [0.85, 0.85, 0.85];
/// Uniform world scale applied to the loaded model (the axes stay unscaled)
pub const MODEL_SCALE: f32 = 2.0;

const RED: [f32; 3] = [1.0, 0.0, 0.0];
const GREEN: [f32; 3] = [0.0, 1.0, 0.0];
const BLUE: [f32; 3] = [0.0, 0.0, 1.0];

/// World axes as a line list: red +x, green +y, blue +z
pub fn axis_lines() -> Vec<LineVertex> {
    vec![
        LineVertex::new([0.0, 0.0, 0.0], RED),
        LineVertex::new([AXIS_LENGTH, 0.0, 0.0], RED),
        LineVertex::new([0.0, 0.0, 0.0], GREEN),
        LineVertex::new([0.0, AXIS_LENGTH, 0.0], GREEN),
        LineVertex::new([0.0, 0.0, 0.0], BLUE),
        LineVertex::new([0.0, 0.0, AXIS_LENGTH], BLUE),
    ]
}

/// Triangle edges of a mesh as a line list, each shared edge emitted once,
/// with positions scaled uniformly about the origin
pub fn wireframe_lines(mesh: &MeshData, scale: f32, color: [f32; 3]) -> Vec<LineVertex> {
    let mut seen = HashSet::new();
    let mut lines = Vec::new();

    for tri in mesh.indices.chunks_exact(3) {
        for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
            let edge = (a.min(b), a.max(b));
            if a == b || !seen.insert(edge) {
                continue;
            }

            let (Some(pa), Some(pb)) = (
                mesh.positions.get(a as usize),
                mesh.positions.get(b as usize),
            ) else {
                log::warn!("Edge {:?} references a missing vertex", edge);
                continue;
            };

            lines.push(LineVertex::new((*pa * scale).to_array(), color));
            lines.push(LineVertex::new((*pb * scale).to_array(), color));
        }
    }

    lines
}

/// Everything the viewer draws
pub fn build_scene(mesh: Option<&MeshData>, show_axes: bool) -> Vec<LineVertex> {
    let mut lines = if show_axes { axis_lines() } else { Vec::new() };

    if let Some(mesh) = mesh {
        lines.extend(wireframe_lines(mesh, MODEL_SCALE, WIREFRAME_COLOR));
    }

    lines
}
