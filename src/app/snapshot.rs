//! Read-only Sicht auf den Editor-Zustand für UI und Host.

use super::state::{EdgeKey, FaceKey, VertexKey};
use super::{AppState, EditAction};
use crate::core::{EditorMode, ModeSet, ObjectId};
use glam::Vec2;

/// Zustand eines Toolbar-Knopfs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolbarIndicator {
    pub mode: EditorMode,
    pub active: bool,
}

/// Toolbar-Anzeige als reine Funktion der aktiven Modi.
pub fn toolbar_indicators(modes: &ModeSet) -> Vec<ToolbarIndicator> {
    EditorMode::ALL
        .iter()
        .map(|&mode| ToolbarIndicator {
            mode,
            active: modes.contains(mode),
        })
        .collect()
}

/// Momentaufnahme für die Anzeige.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorSnapshot {
    pub active_modes: Vec<EditorMode>,
    pub toolbar: Vec<ToolbarIndicator>,
    pub meshes: Vec<ObjectId>,
    pub vertices: Vec<VertexKey>,
    pub edges: Vec<EdgeKey>,
    pub faces: Vec<FaceKey>,
    pub status_line: String,
    pub can_undo: bool,
    pub can_redo: bool,
    /// Bezeichnung der nächsten Undo-Aktion (Tooltip)
    pub undo_label: Option<&'static str>,
    /// Bezeichnung der nächsten Redo-Aktion (Tooltip)
    pub redo_label: Option<&'static str>,
    /// Position des offenen Kontextmenüs
    pub context_menu: Option<Vec2>,
    pub camera_controls_attached: bool,
    pub status_message: Option<String>,
}

impl EditorSnapshot {
    /// Erstellt die Momentaufnahme aus dem aktuellen State.
    pub fn from_state(state: &AppState) -> Self {
        Self {
            active_modes: state.modes.iter().collect(),
            toolbar: toolbar_indicators(&state.modes),
            meshes: state.selection.meshes.keys().copied().collect(),
            vertices: state.selection.vertices.keys().copied().collect(),
            edges: state.selection.edges.keys().copied().collect(),
            faces: state.selection.faces.keys().copied().collect(),
            status_line: state.status_line(),
            can_undo: state.can_undo(),
            can_redo: state.can_redo(),
            undo_label: state.history.peek_undo().map(EditAction::label),
            redo_label: state.history.peek_redo().map(EditAction::label),
            context_menu: state.ui.context_menu.open_at,
            camera_controls_attached: state.view.camera.controls_attached,
            status_message: state.ui.status_message.clone(),
        }
    }

    /// Gibt `true` zurück, wenn der Toolbar-Knopf des Modus aktiv ist.
    pub fn is_active(&self, mode: EditorMode) -> bool {
        self.toolbar
            .iter()
            .any(|indicator| indicator.mode == mode && indicator.active)
    }
}
