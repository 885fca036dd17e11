//! Use-Case: Selektierte Meshes per Zeiger verschieben.
//!
//! Verschoben wird in der Ebene durch die Startposition des Objekts mit der
//! Normale der Verschiebe-Fähigkeit.

use crate::app::history::EditAction;
use crate::app::state::DragGesture;
use crate::app::AppState;
use crate::core::ObjectId;
use glam::{Vec2, Vec3};

fn plane_hit(state: &AppState, pointer: Vec2, origin: Vec3, normal: Vec3) -> Option<Vec3> {
    state
        .view
        .camera
        .screen_ray(pointer, state.view.viewport_size)?
        .intersect_plane(origin, normal)
}

/// Beginnt das Verschieben, falls das Objekt eine aktive Verschiebe-Fähigkeit hat.
pub fn begin_drag(state: &mut AppState, object: ObjectId, pointer: Vec2) -> bool {
    let Some(handle) = state.selection.active_drag(object) else {
        log::debug!("Drag: {} ist nicht verschiebbar", object);
        return false;
    };
    let Some(position) = state.scene.get(object).map(|o| o.position) else {
        return false;
    };
    let Some(hit) = plane_hit(state, pointer, position, handle.plane_normal) else {
        log::debug!("Drag: Zeigerstrahl trifft die Ebene nicht");
        return false;
    };

    state.input.drag = Some(DragGesture {
        object,
        start_position: position,
        grab_offset: position - hit,
        plane_normal: handle.plane_normal,
    });
    log::debug!("Drag von {} gestartet", object);
    true
}

/// Führt die laufende Verschiebung zur Zeigerposition nach.
pub fn update_drag(state: &mut AppState, pointer: Vec2) -> Option<Vec3> {
    let gesture = state.input.drag?;
    let hit = plane_hit(state, pointer, gesture.start_position, gesture.plane_normal)?;
    let position = hit + gesture.grab_offset;
    state
        .scene
        .set_position(gesture.object, position)
        .then_some(position)
}

/// Beendet die Verschiebung und zeichnet eine `Translation` auf, falls sich
/// das Objekt bewegt hat.
pub fn end_drag(state: &mut AppState) -> bool {
    let Some(gesture) = state.input.drag.take() else {
        return false;
    };
    let Some(to) = state.scene.get(gesture.object).map(|o| o.position) else {
        return false;
    };
    if to == gesture.start_position {
        log::debug!("Drag ohne Bewegung beendet");
        return false;
    }

    state.history.record(EditAction::Translation {
        object: gesture.object,
        from: gesture.start_position,
        to,
    });
    log::info!(
        "{} verschoben: {:?} -> {:?}",
        gesture.object,
        gesture.start_position,
        to
    );
    true
}

/// Verwirft eine Verschiebung, deren Objekt nicht mehr existiert.
pub fn cancel_drag_of_missing(state: &mut AppState) {
    if let Some(gesture) = state.input.drag {
        if !state.scene.contains(gesture.object) {
            state.input.drag = None;
        }
    }
}
