//! Use-Case: Editor-Modi umschalten.

use super::editing;
use crate::app::AppState;
use crate::core::{EditorMode, ModeToggle};

/// Schaltet einen Modus um und wendet die Nebenwirkungen an.
///
/// - Verschieben aller selektierten Meshes ist genau dann aktiv, wenn
///   `translate` aktiv ist.
/// - `navigate` verbindet bzw. trennt die Kamera-Steuerung.
pub fn toggle_mode(state: &mut AppState, mode: EditorMode) -> ModeToggle {
    let toggle = state.modes.toggle(mode);

    let translate_active = state.modes.contains(EditorMode::Translate);
    state.selection.set_drag_enabled(translate_active);
    if !translate_active && state.input.is_dragging() {
        editing::end_drag(state);
    }

    if mode == EditorMode::Navigate {
        if toggle.now_active {
            state.view.camera.attach_control();
        } else {
            state.view.camera.detach_control();
            state.input.orbit_last = None;
        }
    }

    for sibling in &toggle.removed_siblings {
        log::debug!("Modus {} durch {} verdrängt", sibling, mode);
    }
    log::info!(
        "Modus {} {}",
        mode,
        if toggle.now_active { "aktiv" } else { "inaktiv" }
    );
    toggle
}
