//! Use-Case-Funktionen für Kamera-Steuerung.

use crate::app::AppState;
use crate::core::Aabb;
use glam::Vec2;

/// Setzt die Kamera auf die Startwerte aus den Optionen zurück.
pub fn reset_camera(state: &mut AppState) {
    state.view.camera.reset(&state.options);
}

/// Beginnt eine Rotation an der Zeigerposition (nur mit verbundener Steuerung).
pub fn begin_orbit(state: &mut AppState, pointer: Vec2) {
    if state.view.camera.controls_attached {
        state.input.orbit_last = Some(pointer);
    }
}

/// Dreht die Kamera um das Zeiger-Delta seit dem letzten Aufruf.
pub fn orbit(state: &mut AppState, pointer: Vec2) {
    let Some(last) = state.input.orbit_last else {
        return;
    };
    if !state.view.camera.controls_attached {
        state.input.orbit_last = None;
        return;
    }
    state
        .view
        .camera
        .orbit(pointer - last, state.options.orbit_sensitivity);
    state.input.orbit_last = Some(pointer);
}

/// Beendet die Rotation.
pub fn end_orbit(state: &mut AppState) {
    state.input.orbit_last = None;
}

/// Richtet die Kamera auf eine Bounding-Box aus.
pub fn frame_bounds(state: &mut AppState, bounds: &Aabb) {
    state.view.camera.frame_bounds(bounds);
    log::debug!(
        "Kamera ausgerichtet: Ziel {:?}, Abstand {:.2}",
        state.view.camera.target,
        state.view.camera.radius
    );
}
