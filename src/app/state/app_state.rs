use crate::app::history::ActionLog;
use crate::app::CommandLog;
use crate::core::{spawn_axes, ModeSet, OrbitCamera, Scene};
use crate::shared::EditorOptions;

use super::{InputState, SelectionState, UiState, ViewState};

/// Hauptzustand des Editors
///
/// Wird von genau einem [`crate::app::AppController`] bearbeitet; es gibt
/// keine globalen Instanzen.
pub struct AppState {
    /// Szene mit Primitiven, Importen und Hilfsobjekten
    pub scene: Scene,
    /// Aktive Editor-Modi
    pub modes: ModeSet,
    /// Selektionsmengen und Marker
    pub selection: SelectionState,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Laufende Zeiger-Geste
    pub input: InputState,
    /// Undo/Redo-History (aktionsbasiert)
    pub history: ActionLog,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
}

impl AppState {
    /// Erstellt einen App-State mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen App-State mit Achsen und initialem Grid.
    pub fn with_options(options: EditorOptions) -> Self {
        let mut scene = Scene::new();
        let mut view = ViewState::new(OrbitCamera::from_options(&options));
        view.axes = Some(spawn_axes(&mut scene, options.axes_size));
        view.grid.update(&mut scene, view.camera.target, &options);

        Self {
            scene,
            modes: ModeSet::new(),
            selection: SelectionState::new(),
            view,
            ui: UiState::new(),
            input: InputState::new(),
            history: ActionLog::new_with_capacity(options.history_depth),
            command_log: CommandLog::new(),
            options,
        }
    }

    /// Gibt zurück, ob ein Undo-Schritt verfügbar ist.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Statuszeile `Meshes: a/b, Vertices: c/d, Edges: e, Faces: f`.
    pub fn status_line(&self) -> String {
        format!(
            "Meshes: {}/{}, Vertices: {}/{}, Edges: {}, Faces: {}",
            self.selection.meshes.len(),
            self.scene.selectable_count(),
            self.selection.vertices.len(),
            self.scene.selectable_vertex_count(),
            self.selection.edges.len(),
            self.selection.faces.len(),
        )
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
