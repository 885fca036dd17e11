//! Use-Case: Primitiv erzeugen.

use crate::app::history::EditAction;
use crate::app::AppState;
use crate::core::{ObjectId, PrimitiveKind};

/// Erzeugt ein Primitiv im Ursprung und zeichnet eine `Creation`-Aktion auf.
///
/// Ein offenes Kontextmenü wird dabei geschlossen.
pub fn create_primitive(state: &mut AppState, kind: PrimitiveKind) -> ObjectId {
    let object = state.scene.spawn_primitive(kind);
    state.history.record(EditAction::Creation { object, kind });
    state.ui.context_menu = Default::default();
    log::info!("{} erzeugt: {}", kind, object);
    object
}
