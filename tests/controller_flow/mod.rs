//! Controller-Flows: Intents rein, State und Snapshot prüfen.

mod context_menu;
mod history;
mod io;
mod modes;
mod selection;

use glam::{Vec2, Vec3};
use scene_editor::{AppController, AppIntent, AppState, EditorMode, PointerButton, PointerKind};

pub const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

/// Controller und State mit gesetztem Viewport.
pub fn setup() -> (AppController, AppState) {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    send(
        &mut controller,
        &mut state,
        AppIntent::ViewportResized { size: VIEWPORT },
    );
    (controller, state)
}

pub fn send(controller: &mut AppController, state: &mut AppState, intent: AppIntent) {
    controller
        .handle_intent(state, intent)
        .expect("Intent sollte ohne Fehler durchlaufen");
}

pub fn toggle(controller: &mut AppController, state: &mut AppState, mode: EditorMode) {
    send(controller, state, AppIntent::ModeToggleRequested { mode });
}

pub fn pointer_down(
    controller: &mut AppController,
    state: &mut AppState,
    pos: Vec2,
    kind: PointerKind,
    time_ms: u64,
) {
    send(
        controller,
        state,
        AppIntent::PointerDown {
            pos,
            button: PointerButton::Primary,
            kind,
            time_ms,
        },
    );
}

pub fn pointer_up(
    controller: &mut AppController,
    state: &mut AppState,
    pos: Vec2,
    kind: PointerKind,
    time_ms: u64,
) {
    send(
        controller,
        state,
        AppIntent::PointerUp {
            pos,
            button: PointerButton::Primary,
            kind,
            time_ms,
        },
    );
}

/// Maus-Klick (Drücken + Loslassen) an einer Screen-Position.
pub fn click(controller: &mut AppController, state: &mut AppState, pos: Vec2) {
    pointer_down(controller, state, pos, PointerKind::Mouse, 0);
    pointer_up(controller, state, pos, PointerKind::Mouse, 0);
}

/// Screen-Position eines Weltpunkts mit der aktuellen Kamera.
pub fn screen_of(state: &AppState, world: Vec3) -> Vec2 {
    state
        .view
        .camera
        .project(world, state.view.viewport_size)
        .expect("Punkt sollte vor der Kamera liegen")
}
