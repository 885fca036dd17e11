//! Handler für Import und Export.

use crate::app::use_cases;
use crate::app::AppState;
use crate::interchange::SceneCodec;
use std::path::Path;

/// Importiert eine Szenendatei. Fehler landen zusätzlich in der Statuszeile.
pub fn import(
    state: &mut AppState,
    codec: Option<&dyn SceneCodec>,
    path: &Path,
) -> anyhow::Result<()> {
    match use_cases::file_io::import_scene(state, codec, path) {
        Ok(_) => Ok(()),
        Err(e) => {
            state.ui.status_message = Some(format!("Import fehlgeschlagen: {e:#}"));
            Err(e)
        }
    }
}

/// Exportiert die Szene in eine Datei.
pub fn export(
    state: &mut AppState,
    codec: Option<&dyn SceneCodec>,
    path: &Path,
) -> anyhow::Result<()> {
    match use_cases::file_io::export_scene(state, codec, path) {
        Ok(_) => Ok(()),
        Err(e) => {
            state.ui.status_message = Some(format!("Export fehlgeschlagen: {e:#}"));
            Err(e)
        }
    }
}
