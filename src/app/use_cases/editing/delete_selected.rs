//! Use-Case: Selektierte Meshes löschen.

use crate::app::history::EditAction;
use crate::app::AppState;
use crate::core::ObjectId;

/// Entfernt alle mesh-selektierten Objekte samt ihrer Selektionseinträge und
/// zeichnet eine gemeinsame `Deletion`-Aktion auf.
///
/// Gibt die Anzahl gelöschter Objekte zurück.
pub fn delete_selected(state: &mut AppState) -> usize {
    let ids: Vec<ObjectId> = state.selection.meshes.keys().copied().collect();
    if ids.is_empty() {
        log::debug!("Nichts zum Löschen selektiert");
        return 0;
    }

    if state
        .input
        .drag
        .is_some_and(|gesture| ids.contains(&gesture.object))
    {
        state.input.drag = None;
    }

    let mut removed = Vec::with_capacity(ids.len());
    for id in ids {
        state.selection.purge_object(id);
        if let Some(object) = state.scene.dispose(id) {
            removed.push(object);
        }
    }

    let count = removed.len();
    if count > 0 {
        state.history.record(EditAction::Deletion { objects: removed });
    }
    log::info!("{} Objekte gelöscht", count);
    count
}
