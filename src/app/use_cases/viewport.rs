//! Use-Case-Funktionen für Viewport, Grid und Optionen.

use crate::app::AppState;
use crate::core::GridUpdate;
use crate::shared::EditorOptions;
use glam::Vec2;

/// Aktualisiert die gespeicherte Viewport-Größe.
pub fn resize(state: &mut AppState, size: Vec2) {
    state.view.viewport_size = size;
}

/// Erzeugt bzw. entsorgt Grid-Chunks um das aktuelle Kameraziel.
pub fn update_grid(state: &mut AppState) -> GridUpdate {
    let center = state.view.camera.target;
    state
        .view
        .grid
        .update(&mut state.scene, center, &state.options)
}

/// Setzt den Vertex-Pick-Radius (Screen-Pixel).
pub fn set_vertex_pick_radius(state: &mut AppState, radius_px: f32) {
    if !radius_px.is_finite() || radius_px < 0.0 {
        log::warn!("Ungültiger Vertex-Pick-Radius ignoriert: {}", radius_px);
        return;
    }
    state.options.vertex_pick_radius_px = radius_px;
    log::info!("Vertex-Pick-Radius: {} px", radius_px);
}

/// Übernimmt neue Optionen (History-Tiefe wird sofort angewendet).
pub fn apply_options(state: &mut AppState, options: EditorOptions) {
    state.history.set_max_depth(options.history_depth);
    state.options = options;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_updates_viewport_size() {
        let mut state = AppState::new();

        resize(&mut state, Vec2::new(1920.0, 1080.0));

        assert_eq!(state.view.viewport_size, Vec2::new(1920.0, 1080.0));
    }

    #[test]
    fn negative_pick_radius_is_rejected() {
        let mut state = AppState::new();

        set_vertex_pick_radius(&mut state, 25.0);
        set_vertex_pick_radius(&mut state, -3.0);

        assert_eq!(state.options.vertex_pick_radius_px, 25.0);
    }

    #[test]
    fn grid_follows_camera_target() {
        let mut state = AppState::new();
        state.view.camera.target.x = 25.0;

        let update = update_grid(&mut state);

        assert_eq!(update.created, 10);
        assert_eq!(update.disposed, 10);
        assert_eq!(state.scene.selectable_count(), 0);
    }
}
