//! Handler für Bearbeitungs-Operationen (Erzeugen, Löschen, Verschieben).

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{ObjectId, PrimitiveKind};
use glam::Vec2;

/// Erzeugt ein Primitiv im Ursprung.
pub fn create_primitive(state: &mut AppState, kind: PrimitiveKind) {
    use_cases::editing::create_primitive(state, kind);
}

/// Löscht alle selektierten Meshes.
pub fn delete_selected(state: &mut AppState) {
    use_cases::editing::delete_selected(state);
}

/// Beginnt das Verschieben eines selektierten Meshes.
pub fn begin_drag(state: &mut AppState, object: ObjectId, pointer: Vec2) {
    use_cases::editing::begin_drag(state, object, pointer);
}

/// Führt die Verschiebung nach.
pub fn update_drag(state: &mut AppState, pointer: Vec2) {
    use_cases::editing::update_drag(state, pointer);
}

/// Beendet die Verschiebung.
pub fn end_drag(state: &mut AppState) {
    use_cases::editing::end_drag(state);
}
