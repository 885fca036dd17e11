//! Gemeinsame Hilfsfunktionen für Selektionslogik.

use crate::app::AppState;
use crate::core::ObjectId;
use indexmap::IndexSet;

/// Löscht alle Selektionen explizit (Marker werden entsorgt).
pub fn clear_selection(state: &mut AppState) {
    let removed = state.selection.clear();
    if removed > 0 {
        log::info!("{} Selektionseinträge aufgehoben", removed);
    }
}

/// Entfernt Selektionseinträge, deren Objekt nicht mehr in der Szene ist.
///
/// Gibt die Anzahl entfernter Einträge zurück.
pub fn prune_missing_objects(state: &mut AppState) -> usize {
    let selection = &state.selection;
    let owners: IndexSet<ObjectId> = selection
        .meshes
        .keys()
        .copied()
        .chain(selection.vertices.keys().map(|k| k.object))
        .chain(selection.edges.keys().map(|k| k.object))
        .chain(selection.faces.keys().map(|k| k.object))
        .filter(|object| !state.scene.contains(*object))
        .collect();

    let mut removed = 0;
    for object in owners {
        removed += state.selection.purge_object(object);
    }
    if removed > 0 {
        log::debug!("{} verwaiste Selektionseinträge entfernt", removed);
    }
    removed
}
