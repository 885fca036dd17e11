//! Use-Case: Vertex-, Kanten- und Face-Selektion auf einem getroffenen Mesh.

use crate::app::state::{EdgeKey, FaceKey, VertexKey};
use crate::app::AppState;
use crate::core::{closest_edge, closest_vertex, ObjectId};
use glam::Vec2;

/// Schaltet den Vertex des Objekts um, der dem Zeiger im Screen-Space am
/// nächsten liegt, sofern er innerhalb des Pick-Radius liegt.
///
/// `None`: kein Vertex im Radius (No-op).
pub fn select_vertex_near(state: &mut AppState, object: ObjectId, pointer: Vec2) -> Option<bool> {
    let target = state.scene.get(object)?;
    let Some(hit) = closest_vertex(
        target,
        &state.view.camera,
        state.view.viewport_size,
        pointer,
        state.options.vertex_pick_radius_px,
    ) else {
        log::debug!(
            "Kein Vertex von {} innerhalb {} px",
            object,
            state.options.vertex_pick_radius_px
        );
        return None;
    };

    let key = VertexKey {
        object,
        index: hit.index,
    };
    let selected = state
        .selection
        .toggle_vertex(key, state.options.highlight_color_vertex);
    log::info!(
        "Vertex {} von {} {} ({:.1} px)",
        hit.index,
        object,
        if selected { "selektiert" } else { "abgewählt" },
        hit.distance_px
    );
    Some(selected)
}

/// Schaltet die Dreieckskante um, deren Endpunkte dem Zeiger zusammen am
/// nächsten liegen.
pub fn select_edge_near(state: &mut AppState, object: ObjectId, pointer: Vec2) -> Option<bool> {
    let target = state.scene.get(object)?;
    let Some(hit) = closest_edge(
        target,
        &state.view.camera,
        state.view.viewport_size,
        pointer,
        state.options.edge_pick_slack_px,
    ) else {
        log::debug!("Keine Kante von {} in Zeigernähe", object);
        return None;
    };

    let key = EdgeKey::new(object, hit.a, hit.b);
    let selected = state
        .selection
        .toggle_edge(key, state.options.highlight_color_edge);
    log::info!(
        "Kante {}-{} von {} {}",
        key.a,
        key.b,
        object,
        if selected { "selektiert" } else { "abgewählt" }
    );
    Some(selected)
}

/// Schaltet das vom Pick gemeldete Face um.
pub fn toggle_face(state: &mut AppState, object: ObjectId, face_index: u32) -> Option<bool> {
    let target = state.scene.get(object)?;
    if face_index as usize >= target.mesh.triangle_count() {
        log::warn!("Face {} existiert nicht in {}", face_index, object);
        return None;
    }

    let key = FaceKey {
        object,
        face: face_index,
    };
    let selected = state
        .selection
        .toggle_face(key, state.options.highlight_color_face);
    log::info!(
        "Face {} von {} {}",
        face_index,
        object,
        if selected { "selektiert" } else { "abgewählt" }
    );
    Some(selected)
}
