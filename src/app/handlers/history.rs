//! Handler für Undo/Redo-Operationen.

use crate::app::use_cases;
use crate::app::AppState;

/// Führt einen Undo-Schritt aus, falls vorhanden.
///
/// Gibt `true` zurück, wenn eine Aktion rückgängig gemacht wurde.
pub fn undo(state: &mut AppState) -> bool {
    let Some(label) = state.history.undo(&mut state.scene).map(|a| a.label()) else {
        log::debug!("Undo: nichts zu tun");
        return false;
    };
    after_history_step(state);
    log::info!("Undo ausgeführt: {}", label);
    true
}

/// Führt einen Redo-Schritt aus, falls vorhanden.
pub fn redo(state: &mut AppState) -> bool {
    let Some(label) = state.history.redo(&mut state.scene).map(|a| a.label()) else {
        log::debug!("Redo: nichts zu tun");
        return false;
    };
    after_history_step(state);
    log::info!("Redo ausgeführt: {}", label);
    true
}

/// Entfernt Selektionen und Gesten, deren Objekt verschwunden ist.
fn after_history_step(state: &mut AppState) {
    use_cases::selection::prune_missing_objects(state);
    use_cases::editing::cancel_drag_of_missing(state);
}
