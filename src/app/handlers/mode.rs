//! Handler für Modus-Umschaltung.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::EditorMode;

/// Schaltet einen Editor-Modus um.
pub fn toggle(state: &mut AppState, mode: EditorMode) {
    use_cases::modes::toggle_mode(state, mode);
}
