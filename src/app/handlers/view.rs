//! Handler für Kamera, Viewport, Grid und Optionen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::shared::EditorOptions;
use glam::Vec2;

/// Setzt die Kamera auf den Standardzustand zurück.
pub fn reset_camera(state: &mut AppState) {
    use_cases::camera::reset_camera(state);
}

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: Vec2) {
    use_cases::viewport::resize(state, size);
}

/// Beginnt eine Kamera-Rotation.
pub fn begin_orbit(state: &mut AppState, pointer: Vec2) {
    use_cases::camera::begin_orbit(state, pointer);
}

/// Dreht die Kamera zur neuen Zeigerposition.
pub fn orbit(state: &mut AppState, pointer: Vec2) {
    use_cases::camera::orbit(state, pointer);
}

/// Beendet die Kamera-Rotation.
pub fn end_orbit(state: &mut AppState) {
    use_cases::camera::end_orbit(state);
}

/// Aktualisiert die Grid-Chunks um das Kameraziel.
pub fn update_grid(state: &mut AppState) {
    use_cases::viewport::update_grid(state);
}

/// Setzt den Vertex-Pick-Radius.
pub fn set_vertex_pick_radius(state: &mut AppState, radius_px: f32) {
    use_cases::viewport::set_vertex_pick_radius(state, radius_px);
}

/// Übernimmt geänderte Optionen.
pub fn apply_options(state: &mut AppState, options: EditorOptions) {
    use_cases::viewport::apply_options(state, options);
}
