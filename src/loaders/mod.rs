pub mod gltf;

pub use self::gltf::{load_mesh, MeshData};
