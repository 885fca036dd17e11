//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Hier wird auch der Zeiger-Druck interpretiert: Pick ausführen und anhand
//! der aktiven Modi genau eine Reaktion wählen.

use super::events::{PointerButton, PointerKind};
use super::{AppCommand, AppIntent, AppState};
use crate::core::{pick, EditorMode, PickHit};
use glam::Vec2;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ModeToggleRequested { mode } => vec![AppCommand::ToggleMode { mode }],
        AppIntent::PointerDown {
            pos,
            button,
            kind,
            time_ms,
        } => map_pointer_down(state, pos, button, kind, time_ms),
        AppIntent::PointerMove { pos, .. } => map_pointer_move(state, pos),
        AppIntent::PointerUp { kind, .. } => map_pointer_up(state, kind),
        AppIntent::FrameTick { time_ms } => {
            let mut commands = Vec::with_capacity(2);
            if state.input.long_press.is_some() {
                commands.push(AppCommand::FireDueLongPress { time_ms });
            }
            commands.push(AppCommand::UpdateGrid);
            commands
        }
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::CreatePrimitiveRequested { kind } => vec![AppCommand::CreatePrimitive { kind }],
        AppIntent::DeleteSelectedRequested => vec![AppCommand::DeleteSelected],
        AppIntent::DeselectAllRequested => vec![AppCommand::ClearSelection],
        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],
        AppIntent::ImportRequested { path } => vec![AppCommand::ImportScene { path }],
        AppIntent::ExportRequested { path } => vec![AppCommand::ExportScene { path }],
        AppIntent::ContextMenuDismissRequested => vec![AppCommand::DismissContextMenu],
        AppIntent::VertexPickRadiusChanged { radius_px } => {
            vec![AppCommand::SetVertexPickRadius { radius_px }]
        }
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions {
            options: Box::new(options),
        }],
        AppIntent::ResetCameraRequested => vec![AppCommand::ResetCamera],
    }
}

fn map_pointer_down(
    state: &AppState,
    pos: Vec2,
    button: PointerButton,
    kind: PointerKind,
    time_ms: u64,
) -> Vec<AppCommand> {
    // Ein Druck bei offenem Menü schließt nur das Menü
    if state.ui.context_menu.is_open() {
        return vec![AppCommand::DismissContextMenu];
    }

    let mut commands = vec![AppCommand::PressPointer {
        pos,
        button,
        kind,
        time_ms,
    }];

    let arms_long_press = button == PointerButton::Secondary
        || (kind == PointerKind::Touch && button == PointerButton::Primary);
    if arms_long_press {
        commands.push(AppCommand::StartLongPress {
            origin: pos,
            time_ms,
        });
    } else if state.input.long_press.is_some() {
        commands.push(AppCommand::CancelLongPress);
    }

    if button == PointerButton::Primary {
        // Ohne Viewport-Fläche gibt es keinen Strahl
        let hit = if state.view.has_viewport() {
            pick(
                &state.scene,
                &state.view.camera,
                state.view.viewport_size,
                pos,
            )
        } else {
            None
        };
        commands.extend(interpret_pointer_down(state, hit, pos));
    }

    commands
}

/// Wählt die Reaktion auf einen primären Zeiger-Druck.
///
/// Feste Reihenfolge, nur der erste passende Zweig greift:
/// 1. `select` + Treffer → Mesh-Selektion umschalten
/// 2. `select-vertex` + Treffer → nächsten Vertex umschalten
/// 3. `select-edge` + Treffer → nächste Kante umschalten
/// 4. `select-face` + Treffer → getroffenes Face umschalten
/// 5. `translate` + Treffer auf ein selektiertes, verschiebbares Mesh → Drag
/// 6. `navigate` + verbundene Kamera → Rotation
pub fn interpret_pointer_down(
    state: &AppState,
    hit: Option<PickHit>,
    pointer: Vec2,
) -> Option<AppCommand> {
    let modes = &state.modes;

    if let Some(hit) = hit {
        let object = hit.object;
        match modes.active_selection_mode() {
            Some(EditorMode::Select) => return Some(AppCommand::ToggleMeshSelection { object }),
            Some(EditorMode::SelectVertex) => {
                return Some(AppCommand::SelectVertexNear { object, pointer })
            }
            Some(EditorMode::SelectEdge) => {
                return Some(AppCommand::SelectEdgeNear { object, pointer })
            }
            Some(EditorMode::SelectFace) => {
                return Some(AppCommand::ToggleFaceSelection {
                    object,
                    face_index: hit.face_index,
                })
            }
            _ => {}
        }

        if modes.contains(EditorMode::Translate) && state.selection.active_drag(object).is_some() {
            return Some(AppCommand::BeginDrag { object, pointer });
        }
    }

    if modes.contains(EditorMode::Navigate) && state.view.camera.controls_attached {
        return Some(AppCommand::BeginOrbit { pointer });
    }

    None
}

fn map_pointer_move(state: &AppState, pos: Vec2) -> Vec<AppCommand> {
    let mut commands = Vec::new();

    if let Some(pending) = state.input.long_press {
        if pending.origin.distance(pos) > state.options.long_press_move_tolerance_px {
            commands.push(AppCommand::CancelLongPress);
        }
    }

    if state.input.is_dragging() {
        commands.push(AppCommand::UpdateDrag { pointer: pos });
    } else if state.input.orbit_last.is_some() {
        commands.push(AppCommand::OrbitCamera { pointer: pos });
    }

    commands
}

fn map_pointer_up(state: &AppState, kind: PointerKind) -> Vec<AppCommand> {
    let mut commands = Vec::new();

    if state.input.is_dragging() {
        commands.push(AppCommand::EndDrag);
    }
    if state.input.orbit_last.is_some() {
        commands.push(AppCommand::EndOrbit);
    }
    if kind == PointerKind::Touch && state.input.long_press.is_some() {
        commands.push(AppCommand::CancelLongPress);
    }
    commands.push(AppCommand::ReleasePointer);
    if state.ui.context_menu.is_open() {
        commands.push(AppCommand::DismissContextMenu);
    }

    commands
}
