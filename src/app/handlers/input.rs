//! Handler für Zeiger-Gesten und Kontextmenü.

use crate::app::events::{PointerButton, PointerKind};
use crate::app::use_cases;
use crate::app::AppState;
use glam::Vec2;

/// Merkt den gedrückten Zeiger.
pub fn press(state: &mut AppState, pos: Vec2, button: PointerButton, kind: PointerKind, time_ms: u64) {
    use_cases::context_menu::press_pointer(state, pos, button, kind, time_ms);
}

/// Vergisst den gedrückten Zeiger.
pub fn release(state: &mut AppState) {
    use_cases::context_menu::release_pointer(state);
}

/// Schaltet den Long-Press-Timer scharf.
pub fn start_long_press(state: &mut AppState, origin: Vec2, time_ms: u64) {
    use_cases::context_menu::start_long_press(state, origin, time_ms);
}

/// Verwirft den Long-Press-Timer.
pub fn cancel_long_press(state: &mut AppState) {
    use_cases::context_menu::cancel_long_press(state);
}

/// Löst einen fälligen Long-Press aus.
pub fn fire_due_long_press(state: &mut AppState, time_ms: u64) {
    use_cases::context_menu::fire_due_long_press(state, time_ms);
}

/// Schließt das Kontextmenü.
pub fn dismiss_context_menu(state: &mut AppState) {
    use_cases::context_menu::dismiss_context_menu(state);
}
