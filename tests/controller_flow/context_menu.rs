use super::{pointer_down, pointer_up, send, setup};
use glam::Vec2;
use scene_editor::{AppIntent, PointerButton, PointerKind, PrimitiveKind};

const PRESS_AT: Vec2 = Vec2::new(200.0, 150.0);

fn tick(
    controller: &mut scene_editor::AppController,
    state: &mut scene_editor::AppState,
    time_ms: u64,
) {
    send(controller, state, AppIntent::FrameTick { time_ms });
}

#[test]
fn touch_long_press_opens_menu_and_release_is_swallowed() {
    let (mut controller, mut state) = setup();

    pointer_down(&mut controller, &mut state, PRESS_AT, PointerKind::Touch, 1_000);
    tick(&mut controller, &mut state, 1_400);
    assert!(!state.ui.context_menu.is_open());

    tick(&mut controller, &mut state, 1_500);
    assert_eq!(state.ui.context_menu.open_at, Some(PRESS_AT));

    pointer_up(&mut controller, &mut state, PRESS_AT, PointerKind::Touch, 1_600);
    assert!(state.ui.context_menu.is_open());

    send(&mut controller, &mut state, AppIntent::ContextMenuDismissRequested);
    assert!(!state.ui.context_menu.is_open());
}

#[test]
fn early_touch_release_cancels_long_press() {
    let (mut controller, mut state) = setup();

    pointer_down(&mut controller, &mut state, PRESS_AT, PointerKind::Touch, 0);
    pointer_up(&mut controller, &mut state, PRESS_AT, PointerKind::Touch, 200);
    tick(&mut controller, &mut state, 1_000);

    assert!(!state.ui.context_menu.is_open());
    assert!(state.input.long_press.is_none());
}

#[test]
fn moving_past_tolerance_cancels_long_press() {
    let (mut controller, mut state) = setup();

    pointer_down(&mut controller, &mut state, PRESS_AT, PointerKind::Touch, 0);
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerMove {
            pos: PRESS_AT + Vec2::new(25.0, 0.0),
            time_ms: 100,
        },
    );
    tick(&mut controller, &mut state, 600);

    assert!(!state.ui.context_menu.is_open());
}

#[test]
fn right_click_opens_menu_and_next_press_closes_it() {
    let (mut controller, mut state) = setup();
    for intent in [
        AppIntent::PointerDown {
            pos: PRESS_AT,
            button: PointerButton::Secondary,
            kind: PointerKind::Mouse,
            time_ms: 0,
        },
        AppIntent::PointerUp {
            pos: PRESS_AT,
            button: PointerButton::Secondary,
            kind: PointerKind::Mouse,
            time_ms: 80,
        },
    ] {
        send(&mut controller, &mut state, intent);
    }
    tick(&mut controller, &mut state, 500);
    assert!(state.ui.context_menu.is_open());

    let orbit_before = state.view.camera.alpha;
    pointer_down(&mut controller, &mut state, Vec2::new(10.0, 10.0), PointerKind::Mouse, 600);

    assert!(!state.ui.context_menu.is_open());
    // Der schließende Druck startet keine Geste
    assert!(state.input.orbit_last.is_none());
    assert_eq!(state.view.camera.alpha, orbit_before);
}

#[test]
fn second_press_supersedes_pending_timer() {
    let (mut controller, mut state) = setup();

    pointer_down(&mut controller, &mut state, PRESS_AT, PointerKind::Touch, 0);
    pointer_down(&mut controller, &mut state, Vec2::new(20.0, 20.0), PointerKind::Mouse, 300);
    tick(&mut controller, &mut state, 600);

    assert!(!state.ui.context_menu.is_open());
}

#[test]
fn adding_from_menu_creates_primitive_and_closes_menu() {
    let (mut controller, mut state) = setup();
    pointer_down(&mut controller, &mut state, PRESS_AT, PointerKind::Touch, 0);
    tick(&mut controller, &mut state, 500);
    pointer_up(&mut controller, &mut state, PRESS_AT, PointerKind::Touch, 550);
    assert!(state.ui.context_menu.is_open());

    send(
        &mut controller,
        &mut state,
        AppIntent::CreatePrimitiveRequested {
            kind: PrimitiveKind::Triangle,
        },
    );

    assert!(!state.ui.context_menu.is_open());
    assert_eq!(state.scene.selectable_count(), 1);
    assert!(state.can_undo());
}
