use super::{send, setup};
use approx::assert_relative_eq;
use glam::Vec3;
use scene_editor::interchange::{ExportMesh, ImportedMesh};
use scene_editor::{
    AppController, AppIntent, AppState, PrimitiveKind, SceneCodec, TomlSceneCodec,
};
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "scene_editor_{}_{}.toml",
        name,
        std::process::id()
    ))
}

fn setup_with_codec() -> (AppController, AppState) {
    let (mut controller, state) = setup();
    controller.set_codec(Box::new(TomlSceneCodec));
    (controller, state)
}

struct BrokenCodec;

impl SceneCodec for BrokenCodec {
    fn extension(&self) -> &str {
        "bin"
    }

    fn encode(&self, _objects: &[ExportMesh<'_>]) -> anyhow::Result<Vec<u8>> {
        Ok(b"kaputt".to_vec())
    }

    fn decode(&self, _payload: &[u8]) -> anyhow::Result<Vec<ImportedMesh>> {
        anyhow::bail!("Payload unlesbar")
    }
}

#[test]
fn export_then_import_adds_non_undoable_copies() {
    let (mut controller, mut state) = setup_with_codec();
    for kind in [PrimitiveKind::Triangle, PrimitiveKind::Cube] {
        send(
            &mut controller,
            &mut state,
            AppIntent::CreatePrimitiveRequested { kind },
        );
    }
    let path = temp_path("roundtrip");

    send(
        &mut controller,
        &mut state,
        AppIntent::ExportRequested { path: path.clone() },
    );
    let text = std::fs::read_to_string(&path).expect("Export geschrieben");
    // Grid und Achsen werden nicht exportiert
    assert_eq!(text.matches("[[meshes]]").count(), 2);

    let undo_depth = state.history.undo_len();
    send(
        &mut controller,
        &mut state,
        AppIntent::ImportRequested { path: path.clone() },
    );

    assert_eq!(state.scene.selectable_count(), 4);
    assert_eq!(state.scene.selectable_vertex_count(), 22);
    assert_eq!(state.history.undo_len(), undo_depth);
    assert!(state.ui.status_message.is_some());

    let _ = std::fs::remove_file(&path);
}

#[test]
fn import_frames_camera_on_imported_bounds() {
    let (mut controller, mut state) = setup_with_codec();
    let path = temp_path("framing");
    std::fs::write(
        &path,
        r#"
[[meshes]]
name = "Versetzt"
positions = [[9.0, -1.0, 0.0], [11.0, -1.0, 0.0], [10.0, 1.0, 0.0]]
indices = [0, 1, 2]
"#,
    )
    .expect("Testdatei schreibbar");

    send(
        &mut controller,
        &mut state,
        AppIntent::ImportRequested { path: path.clone() },
    );

    assert_eq!(state.scene.selectable_count(), 1);
    let target = state.view.camera.target;
    assert_relative_eq!(target.x, 10.0, epsilon = 1e-5);
    assert_relative_eq!(target.y, 0.0, epsilon = 1e-5);
    assert_eq!(target.z, 0.0);
    assert!(!state.can_undo());

    let _ = std::fs::remove_file(&path);
}

#[test]
fn failed_import_adds_nothing_and_reports_status() {
    let (mut controller, mut state) = setup_with_codec();
    let objects_before = state.scene.len();
    let camera_before = state.view.camera.clone();

    let result = controller.handle_intent(
        &mut state,
        AppIntent::ImportRequested {
            path: temp_path("does_not_exist"),
        },
    );

    assert!(result.is_err());
    assert_eq!(state.scene.len(), objects_before);
    assert_eq!(state.view.camera, camera_before);
    let status = state.ui.status_message.as_deref().unwrap_or_default();
    assert!(status.starts_with("Import fehlgeschlagen"));
}

#[test]
fn decode_error_leaves_scene_untouched() {
    let (_, mut state) = setup();
    let mut controller = AppController::with_codec(Box::new(BrokenCodec));
    let path = temp_path("broken");
    std::fs::write(&path, b"irgendwas").expect("Testdatei schreibbar");
    let objects_before = state.scene.len();

    let result = controller.handle_intent(&mut state, AppIntent::ImportRequested { path: path.clone() });

    assert!(result.is_err());
    assert_eq!(state.scene.len(), objects_before);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn io_without_codec_fails() {
    let (mut controller, mut state) = setup();

    let result = controller.handle_intent(
        &mut state,
        AppIntent::ExportRequested {
            path: temp_path("no_codec"),
        },
    );

    assert!(result.is_err());
    assert!(!temp_path("no_codec").exists());
}

#[test]
fn exported_positions_include_object_offset() {
    let (mut controller, mut state) = setup_with_codec();
    send(
        &mut controller,
        &mut state,
        AppIntent::CreatePrimitiveRequested {
            kind: PrimitiveKind::Triangle,
        },
    );
    let id = state.scene.selectable().next().map(|o| o.id).expect("Dreieck");
    state.scene.set_position(id, Vec3::new(5.0, 0.0, 0.0));
    let path = temp_path("offset");

    send(
        &mut controller,
        &mut state,
        AppIntent::ExportRequested { path: path.clone() },
    );
    let payload = std::fs::read(&path).expect("Export geschrieben");
    let meshes = TomlSceneCodec.decode(&payload).expect("dekodierbar");

    assert_eq!(meshes.len(), 1);
    let bounds = meshes[0].mesh.bounds().expect("nicht leer");
    assert_relative_eq!(bounds.center().x, 5.0, epsilon = 1e-5);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn codec_installed_later_enables_export() {
    let (mut controller, mut state) = setup();
    send(
        &mut controller,
        &mut state,
        AppIntent::CreatePrimitiveRequested {
            kind: PrimitiveKind::Quad,
        },
    );
    let path = temp_path("late_codec");
    assert!(controller
        .handle_intent(&mut state, AppIntent::ExportRequested { path: path.clone() })
        .is_err());

    controller.set_codec(Box::new(TomlSceneCodec));
    controller
        .handle_intent(&mut state, AppIntent::ExportRequested { path: path.clone() })
        .expect("Export mit Codec");

    assert!(path.exists());
    let _ = std::fs::remove_file(&path);
}
