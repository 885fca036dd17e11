//! Use-Case-Funktionen für Zeiger-Gesten und Kontextmenü (Long-Press).
//!
//! Es gibt höchstens einen scharfen Long-Press-Timer. Er wird durch einen
//! neuen Druck ersetzt, durch frühes Loslassen (Touch) oder zu weite
//! Bewegung verworfen und beim nächsten Frame-Takt nach Ablauf ausgelöst.

use crate::app::events::{PointerButton, PointerKind};
use crate::app::state::{PendingLongPress, PointerPress};
use crate::app::AppState;
use glam::Vec2;

/// Merkt den gedrückten Zeiger.
pub fn press_pointer(
    state: &mut AppState,
    pos: Vec2,
    button: PointerButton,
    kind: PointerKind,
    time_ms: u64,
) {
    state.input.press = Some(PointerPress {
        pos,
        button,
        kind,
        time_ms,
    });
}

/// Vergisst den gedrückten Zeiger.
pub fn release_pointer(state: &mut AppState) {
    state.input.press = None;
}

/// Schaltet den Long-Press-Timer scharf; ein laufender Timer wird ersetzt.
pub fn start_long_press(state: &mut AppState, origin: Vec2, time_ms: u64) {
    if state.input.long_press.is_some() {
        log::debug!("Laufender Long-Press durch neuen Druck ersetzt");
    }
    state.input.long_press = Some(PendingLongPress {
        origin,
        deadline_ms: time_ms.saturating_add(state.options.long_press_ms),
    });
}

/// Verwirft den Long-Press-Timer.
pub fn cancel_long_press(state: &mut AppState) {
    if state.input.long_press.take().is_some() {
        log::debug!("Long-Press abgebrochen");
    }
}

/// Löst einen fälligen Long-Press aus und öffnet das Kontextmenü.
///
/// Ist der Zeiger beim Öffnen noch gedrückt, wird die erste folgende
/// Schließen-Anfrage (das Loslassen) verschluckt.
pub fn fire_due_long_press(state: &mut AppState, time_ms: u64) -> bool {
    let Some(pending) = state.input.long_press else {
        return false;
    };
    if time_ms < pending.deadline_ms {
        return false;
    }

    state.input.long_press = None;
    state.ui.context_menu.open_at = Some(pending.origin);
    state.ui.context_menu.swallow_next_dismiss = state.input.press.is_some();
    log::info!("Kontextmenü geöffnet bei {:?}", pending.origin);
    true
}

/// Schließt das Kontextmenü.
///
/// Gibt `true` zurück, wenn das Menü dadurch geschlossen wurde.
pub fn dismiss_context_menu(state: &mut AppState) -> bool {
    let menu = &mut state.ui.context_menu;
    if !menu.is_open() {
        return false;
    }
    if menu.swallow_next_dismiss {
        menu.swallow_next_dismiss = false;
        log::debug!("Schließen-Anfrage nach dem Öffnen verschluckt");
        return false;
    }
    menu.open_at = None;
    log::debug!("Kontextmenü geschlossen");
    true
}
