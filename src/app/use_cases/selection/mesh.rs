//! Use-Case: Mesh-Selektion per Klick.

use crate::app::AppState;
use crate::core::{EditorMode, ObjectId};

/// Schaltet die Selektion eines getroffenen Meshes um.
///
/// Neue Einträge bekommen eine Verschiebe-Fähigkeit, die genau dann aktiv
/// ist, wenn der Translate-Modus an ist. Gibt `true` zurück, wenn das Mesh
/// danach selektiert ist.
pub fn toggle_mesh(state: &mut AppState, object: ObjectId) -> bool {
    if !state.scene.is_selectable(object) {
        log::debug!("Mesh-Selektion: {} ist nicht selektierbar", object);
        return false;
    }

    let drag_enabled = state.modes.contains(EditorMode::Translate);
    let selected = state.selection.toggle_mesh(
        object,
        drag_enabled,
        state.options.highlight_color_mesh,
    );
    log::info!(
        "Mesh {} {}",
        object,
        if selected { "selektiert" } else { "abgewählt" }
    );
    selected
}
