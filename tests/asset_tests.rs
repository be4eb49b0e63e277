use std::fs;

use free_look::assets::{self, AssetError};
use free_look::loaders::load_mesh;
use tempfile::TempDir;

#[cfg(test)]
mod asset_resolution_tests {
    use super::*;

    #[test]
    fn test_falls_back_to_asset_dir() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("fallback_only_model.glb"), b"glTF").unwrap();

        let resolved = assets::resolve("fallback_only_model.glb", Some(dir.path())).unwrap();

        assert_eq!(resolved, dir.path().join("fallback_only_model.glb"));
    }

    #[test]
    fn test_primary_path_wins() {
        let dir = TempDir::new().unwrap();
        let primary = dir.path().join("primary.glb");
        fs::write(&primary, b"glTF").unwrap();

        let other = TempDir::new().unwrap();
        let resolved = assets::resolve(&primary, Some(other.path())).unwrap();

        assert_eq!(resolved, primary);
    }

    #[test]
    fn test_not_found_lists_both_attempts() {
        let dir = TempDir::new().unwrap();

        let err = assets::resolve("nowhere_model.glb", Some(dir.path())).unwrap_err();
        let AssetError::NotFound { tried, .. } = err;

        assert_eq!(tried.len(), 2);
        assert_eq!(tried[1], dir.path().join("nowhere_model.glb"));
    }

    #[test]
    fn test_absolute_path_has_no_fallback() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("gone.glb");

        let err = assets::resolve(&missing, Some(dir.path())).unwrap_err();
        let AssetError::NotFound { tried, .. } = err;

        assert_eq!(tried, vec![missing]);
    }

    #[test]
    fn test_directory_is_not_an_asset() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("model.glb")).unwrap();

        assert!(assets::resolve(dir.path().join("model.glb"), None).is_err());
    }
}

#[cfg(test)]
mod mesh_loading_tests {
    use super::*;

    #[test]
    fn test_garbage_file_is_an_error_not_a_panic() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.glb");
        fs::write(&path, b"definitely not gltf").unwrap();

        assert!(load_mesh(&path).is_err());
    }

    #[test]
    fn test_minimal_embedded_gltf_loads() {
        // one triangle, positions in an embedded base64 buffer
        let gltf = r#"{
            "asset": { "version": "2.0" },
            "scene": 0,
            "scenes": [ { "nodes": [0] } ],
            "nodes": [ { "mesh": 0, "translation": [0.0, 1.0, 0.0] } ],
            "meshes": [ { "primitives": [ { "attributes": { "POSITION": 0 } } ] } ],
            "accessors": [ {
                "bufferView": 0, "componentType": 5126, "count": 3, "type": "VEC3",
                "min": [0.0, 0.0, 0.0], "max": [1.0, 1.0, 0.0]
            } ],
            "bufferViews": [ { "buffer": 0, "byteLength": 36 } ],
            "buffers": [ {
                "byteLength": 36,
                "uri": "data:application/octet-stream;base64,AAAAAAAAAAAAAAAAAACAPwAAAAAAAAAAAAAAAAAAgD8AAAAA"
            } ]
        }"#;
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("triangle.gltf");
        fs::write(&path, gltf).unwrap();

        let mesh = load_mesh(&path).unwrap();

        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.positions.len(), 3);
        // node translation applied
        assert_eq!(mesh.positions[0], glam::Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(mesh.positions[2], glam::Vec3::new(0.0, 2.0, 0.0));
    }

    #[test]
    fn test_line_primitives_are_skipped() {
        // the triangle again, plus a two-point line strip over the same buffer
        let gltf = r#"{
            "asset": { "version": "2.0" },
            "scene": 0,
            "scenes": [ { "nodes": [0] } ],
            "nodes": [ { "mesh": 0 } ],
            "meshes": [ { "primitives": [
                { "attributes": { "POSITION": 0 } },
                { "attributes": { "POSITION": 1 }, "mode": 1 }
            ] } ],
            "accessors": [
                {
                    "bufferView": 0, "componentType": 5126, "count": 3, "type": "VEC3",
                    "min": [0.0, 0.0, 0.0], "max": [1.0, 1.0, 0.0]
                },
                {
                    "bufferView": 0, "componentType": 5126, "count": 2, "type": "VEC3",
                    "min": [0.0, 0.0, 0.0], "max": [1.0, 0.0, 0.0]
                }
            ],
            "bufferViews": [ { "buffer": 0, "byteLength": 36 } ],
            "buffers": [ {
                "byteLength": 36,
                "uri": "data:application/octet-stream;base64,AAAAAAAAAAAAAAAAAACAPwAAAAAAAAAAAAAAAAAAgD8AAAAA"
            } ]
        }"#;
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mixed.gltf");
        fs::write(&path, gltf).unwrap();

        let mesh = load_mesh(&path).unwrap();

        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.positions.len(), 3);
        assert_eq!(mesh.bounds(), (glam::Vec3::ZERO, glam::Vec3::new(1.0, 1.0, 0.0)));
    }
}
