//! Application Controller für zentrale Event-Verarbeitung.

use super::snapshot::EditorSnapshot;
use super::{AppCommand, AppIntent, AppState};
use crate::interchange::SceneCodec;

/// Callback nach jedem wirksamen Undo/Redo.
pub type PostActionHook = Box<dyn FnMut(&EditorSnapshot)>;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController {
    codec: Option<Box<dyn SceneCodec>>,
    post_action_hook: Option<PostActionHook>,
}

impl AppController {
    /// Erstellt einen Controller ohne Codec und ohne Callback.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt einen Controller mit Szenen-Codec für Import/Export.
    pub fn with_codec(codec: Box<dyn SceneCodec>) -> Self {
        Self {
            codec: Some(codec),
            post_action_hook: None,
        }
    }

    /// Setzt den Szenen-Codec.
    pub fn set_codec(&mut self, codec: Box<dyn SceneCodec>) {
        self.codec = Some(codec);
    }

    /// Registriert den Callback, der nach jedem wirksamen Undo/Redo läuft.
    pub fn set_post_action_hook(&mut self, hook: impl FnMut(&EditorSnapshot) + 'static) {
        self.post_action_hook = Some(Box::new(hook));
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Modi ===
            AppCommand::ToggleMode { mode } => handlers::mode::toggle(state, mode),

            // === Selektion ===
            AppCommand::ToggleMeshSelection { object } => {
                handlers::selection::toggle_mesh(state, object)
            }
            AppCommand::SelectVertexNear { object, pointer } => {
                handlers::selection::select_vertex_near(state, object, pointer)
            }
            AppCommand::SelectEdgeNear { object, pointer } => {
                handlers::selection::select_edge_near(state, object, pointer)
            }
            AppCommand::ToggleFaceSelection { object, face_index } => {
                handlers::selection::toggle_face(state, object, face_index)
            }
            AppCommand::ClearSelection => handlers::selection::clear(state),

            // === Verschieben ===
            AppCommand::BeginDrag { object, pointer } => {
                handlers::editing::begin_drag(state, object, pointer)
            }
            AppCommand::UpdateDrag { pointer } => handlers::editing::update_drag(state, pointer),
            AppCommand::EndDrag => handlers::editing::end_drag(state),

            // === Kamera & Viewport ===
            AppCommand::BeginOrbit { pointer } => handlers::view::begin_orbit(state, pointer),
            AppCommand::OrbitCamera { pointer } => handlers::view::orbit(state, pointer),
            AppCommand::EndOrbit => handlers::view::end_orbit(state),
            AppCommand::ResetCamera => handlers::view::reset_camera(state),
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::UpdateGrid => handlers::view::update_grid(state),

            // === Zeiger & Kontextmenü ===
            AppCommand::PressPointer {
                pos,
                button,
                kind,
                time_ms,
            } => handlers::input::press(state, pos, button, kind, time_ms),
            AppCommand::ReleasePointer => handlers::input::release(state),
            AppCommand::StartLongPress { origin, time_ms } => {
                handlers::input::start_long_press(state, origin, time_ms)
            }
            AppCommand::CancelLongPress => handlers::input::cancel_long_press(state),
            AppCommand::FireDueLongPress { time_ms } => {
                handlers::input::fire_due_long_press(state, time_ms)
            }
            AppCommand::DismissContextMenu => handlers::input::dismiss_context_menu(state),

            // === Bearbeitung ===
            AppCommand::CreatePrimitive { kind } => handlers::editing::create_primitive(state, kind),
            AppCommand::DeleteSelected => handlers::editing::delete_selected(state),

            // === History ===
            AppCommand::Undo => {
                if handlers::history::undo(state) {
                    self.notify_post_action(state);
                }
            }
            AppCommand::Redo => {
                if handlers::history::redo(state) {
                    self.notify_post_action(state);
                }
            }

            // === Datei-I/O ===
            AppCommand::ImportScene { path } => {
                handlers::file_io::import(state, self.codec.as_deref(), &path)?
            }
            AppCommand::ExportScene { path } => {
                handlers::file_io::export(state, self.codec.as_deref(), &path)?
            }

            // === Optionen ===
            AppCommand::SetVertexPickRadius { radius_px } => {
                handlers::view::set_vertex_pick_radius(state, radius_px)
            }
            AppCommand::ApplyOptions { options } => handlers::view::apply_options(state, *options),
        }

        Ok(())
    }

    fn notify_post_action(&mut self, state: &AppState) {
        if let Some(hook) = self.post_action_hook.as_mut() {
            hook(&EditorSnapshot::from_state(state));
        }
    }
}
