//! Use-Case-Funktionen für Import und Export.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.

use crate::app::AppState;
use crate::core::{Aabb, SceneObject};
use crate::interchange::{ExportMesh, SceneCodec};
use anyhow::Context;
use std::path::{Path, PathBuf};

/// Importiert alle Meshes einer Datei als neue Objekte und richtet die
/// Kamera auf sie aus.
///
/// Schlägt Lesen, Dekodieren oder die Prüfung eines Meshes fehl, wird nichts
/// hinzugefügt. Der Import wird nicht in der Undo-History aufgezeichnet.
pub fn import_scene(
    state: &mut AppState,
    codec: Option<&dyn SceneCodec>,
    path: &Path,
) -> anyhow::Result<usize> {
    let codec = codec.context("Kein Szenen-Codec konfiguriert")?;
    if path.extension().and_then(|e| e.to_str()) != Some(codec.extension()) {
        log::warn!(
            "{} hat nicht die Endung .{}, versuche trotzdem zu dekodieren",
            path.display(),
            codec.extension()
        );
    }

    let payload =
        std::fs::read(path).with_context(|| format!("Datei {} nicht lesbar", path.display()))?;
    let meshes = codec
        .decode(&payload)
        .with_context(|| format!("Datei {} nicht dekodierbar", path.display()))?;
    drop(payload);

    for imported in &meshes {
        imported
            .mesh
            .validate()
            .with_context(|| format!("Mesh '{}' in {} ungültig", imported.name, path.display()))?;
    }

    let mut bounds: Option<Aabb> = None;
    let count = meshes.len();
    for imported in meshes {
        let id = state.scene.add_imported(imported.name, imported.mesh);
        if let Some(object_bounds) = state.scene.get(id).and_then(SceneObject::world_bounds) {
            bounds = Some(match bounds {
                Some(acc) => acc.union(&object_bounds),
                None => object_bounds,
            });
        }
    }

    if let Some(bounds) = bounds {
        super::camera::frame_bounds(state, &bounds);
    }

    let msg = format!("{} Meshes aus {} importiert", count, path.display());
    log::info!("{}", msg);
    state.ui.status_message = Some(msg);
    Ok(count)
}

/// Exportiert alle nicht-Hilfsobjekte in eine Datei.
///
/// Ein Pfad ohne Endung bekommt die Endung des Codecs. Gibt den
/// geschriebenen Pfad zurück.
pub fn export_scene(
    state: &mut AppState,
    codec: Option<&dyn SceneCodec>,
    path: &Path,
) -> anyhow::Result<PathBuf> {
    let codec = codec.context("Kein Szenen-Codec konfiguriert")?;
    let path = if path.extension().is_none() {
        path.with_extension(codec.extension())
    } else {
        path.to_path_buf()
    };

    let objects: Vec<ExportMesh<'_>> = state.scene.selectable().map(ExportMesh::from).collect();
    let count = objects.len();
    let payload = codec.encode(&objects).context("Szene nicht kodierbar")?;
    std::fs::write(&path, payload)
        .with_context(|| format!("Datei {} nicht schreibbar", path.display()))?;

    let msg = format!("{} Meshes nach {} exportiert", count, path.display());
    log::info!("{}", msg);
    state.ui.status_message = Some(msg);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MeshData, PrimitiveKind};
    use crate::interchange::{ImportedMesh, TomlSceneCodec};
    use glam::Vec3;

    /// Liefert unabhängig von der Payload ein fest vorgegebenes Mesh.
    struct FixedCodec(MeshData);

    impl SceneCodec for FixedCodec {
        fn extension(&self) -> &str {
            "fix"
        }

        fn encode(&self, _objects: &[ExportMesh<'_>]) -> anyhow::Result<Vec<u8>> {
            Ok(Vec::new())
        }

        fn decode(&self, _payload: &[u8]) -> anyhow::Result<Vec<ImportedMesh>> {
            Ok(vec![ImportedMesh {
                name: "fest".to_string(),
                mesh: self.0.clone(),
            }])
        }
    }

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("scene_editor_uc_{}_{}", name, std::process::id()))
    }

    #[test]
    fn import_rejects_out_of_range_indices_from_any_codec() {
        let mut state = AppState::new();
        let path = temp_path("invalid.fix");
        std::fs::write(&path, b"x").expect("Testdatei schreibbar");
        let objects_before = state.scene.len();
        let codec = FixedCodec(MeshData::triangles(
            vec![Vec3::ZERO, Vec3::X, Vec3::Y],
            vec![0, 1, 9],
        ));

        let result = import_scene(&mut state, Some(&codec), &path);

        assert!(result.is_err());
        assert_eq!(state.scene.len(), objects_before);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn import_frames_camera_on_world_bounds() {
        let mut state = AppState::new();
        let path = temp_path("valid.fix");
        std::fs::write(&path, b"x").expect("Testdatei schreibbar");
        let codec = FixedCodec(MeshData::triangles(
            vec![Vec3::new(4.0, 0.0, 0.0), Vec3::new(6.0, 0.0, 0.0), Vec3::new(5.0, 2.0, 0.0)],
            vec![0, 1, 2],
        ));

        assert_eq!(import_scene(&mut state, Some(&codec), &path).ok(), Some(1));
        assert_eq!(state.view.camera.target, Vec3::new(5.0, 1.0, 0.0));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn export_appends_codec_extension_when_missing() {
        let mut state = AppState::new();
        state.scene.spawn_primitive(PrimitiveKind::Triangle);
        let path = temp_path("ohne_endung");

        let written =
            export_scene(&mut state, Some(&TomlSceneCodec), &path).expect("Export erfolgreich");

        assert_eq!(written, path.with_extension("toml"));
        assert!(written.exists());
        let _ = std::fs::remove_file(&written);
    }
}
