//! Handler für Selektions-Operationen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::ObjectId;
use glam::Vec2;

/// Schaltet die Mesh-Selektion eines getroffenen Objekts um.
pub fn toggle_mesh(state: &mut AppState, object: ObjectId) {
    use_cases::selection::toggle_mesh(state, object);
}

/// Schaltet den nächsten Vertex zum Zeiger um.
pub fn select_vertex_near(state: &mut AppState, object: ObjectId, pointer: Vec2) {
    use_cases::selection::select_vertex_near(state, object, pointer);
}

/// Schaltet die nächste Kante zum Zeiger um.
pub fn select_edge_near(state: &mut AppState, object: ObjectId, pointer: Vec2) {
    use_cases::selection::select_edge_near(state, object, pointer);
}

/// Schaltet ein Face um.
pub fn toggle_face(state: &mut AppState, object: ObjectId, face_index: u32) {
    use_cases::selection::toggle_face(state, object, face_index);
}

/// Hebt alle Selektionen auf.
pub fn clear(state: &mut AppState) {
    use_cases::selection::clear_selection(state);
}
