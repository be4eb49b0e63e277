use anyhow::{Context, Result};
use glam::{Mat4, Vec3};
use std::path::Path;

/// Flattened triangle mesh: world-space positions and triangle-list indices
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    pub positions: Vec<Vec3>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Append a primitive, rebasing its indices onto the existing vertices
    pub fn append(&mut self, positions: &[Vec3], indices: Option<&[u32]>) {
        let base = self.positions.len() as u32;
        self.positions.extend_from_slice(positions);

        match indices {
            Some(indices) => {
                let whole = indices.len() - indices.len() % 3;
                self.indices.extend(indices[..whole].iter().map(|i| base + i));
            }
            None => {
                let whole = positions.len() - positions.len() % 3;
                self.indices.extend(base..base + whole as u32);
            }
        }
    }

    /// Axis-aligned bounds as (min, max); zero-sized at the origin when empty
    pub fn bounds(&self) -> (Vec3, Vec3) {
        let Some(&first) = self.positions.first() else {
            return (Vec3::ZERO, Vec3::ZERO);
        };

        self.positions
            .iter()
            .skip(1)
            .fold((first, first), |(min, max), &p| (min.min(p), max.max(p)))
    }
}

/// Loads every triangle primitive of every scene in a glTF file
pub fn load_mesh(path: impl AsRef<Path>) -> Result<MeshData> {
    let path = path.as_ref();
    log::info!("Loading glTF mesh: {:?}", path);

    let (gltf, buffers, _images) = gltf::import(path)
        .with_context(|| format!("Failed to load glTF file: {:?}", path))?;

    log::debug!(
        "glTF: {} scenes, {} nodes, {} meshes",
        gltf.scenes().count(),
        gltf.nodes().count(),
        gltf.meshes().count()
    );

    let mut mesh = MeshData::default();

    for scene in gltf.scenes() {
        for node in scene.nodes() {
            process_node(&node, &buffers, &Mat4::IDENTITY, &mut mesh)?;
        }
    }

    if mesh.indices.is_empty() {
        log::warn!("No triangles found in {:?}", path);
    }

    let (min, max) = mesh.bounds();
    log::info!(
        "Loaded {} vertices, {} triangles, bounds {:?}..{:?}",
        mesh.positions.len(),
        mesh.triangle_count(),
        min,
        max
    );
    Ok(mesh)
}

/// Recursively processes glTF nodes
fn process_node(
    node: &gltf::Node,
    buffers: &[gltf::buffer::Data],
    parent_transform: &Mat4,
    mesh: &mut MeshData,
) -> Result<()> {
    let local_transform = Mat4::from_cols_array_2d(&node.transform().matrix());
    let global_transform = *parent_transform * local_transform;

    if let Some(node_mesh) = node.mesh() {
        for primitive in node_mesh.primitives() {
            if primitive.mode() != gltf::mesh::Mode::Triangles {
                log::debug!("Skipping {:?} primitive", primitive.mode());
                continue;
            }

            let reader = primitive.reader(|buffer| Some(&buffers[buffer.index()]));

            let positions: Vec<Vec3> = reader
                .read_positions()
                .context("Mesh primitive has no positions")?
                .map(|pos| global_transform.transform_point3(Vec3::from_array(pos)))
                .collect();

            let indices: Option<Vec<u32>> = reader.read_indices().map(|i| i.into_u32().collect());

            mesh.append(&positions, indices.as_deref());
        }
    }

    for child in node.children() {
        process_node(&child, buffers, &global_transform, mesh)?;
    }

    Ok(())
}
