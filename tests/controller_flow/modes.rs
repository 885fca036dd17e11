use super::{click, screen_of, setup, toggle};
use glam::Vec3;
use scene_editor::{AppIntent, EditorMode, EditorSnapshot, PrimitiveKind};

const FAMILY: [EditorMode; 4] = [
    EditorMode::Select,
    EditorMode::SelectVertex,
    EditorMode::SelectEdge,
    EditorMode::SelectFace,
];

#[test]
fn selection_family_stays_exclusive_through_controller() {
    let (mut controller, mut state) = setup();
    let sequence = [
        EditorMode::Select,
        EditorMode::SelectEdge,
        EditorMode::Translate,
        EditorMode::SelectFace,
        EditorMode::SelectFace,
        EditorMode::SelectVertex,
        EditorMode::Navigate,
        EditorMode::Select,
    ];

    for mode in sequence {
        toggle(&mut controller, &mut state, mode);
        let active = FAMILY.iter().filter(|m| state.modes.contains(**m)).count();
        assert!(active <= 1, "mehr als ein Selektionsmodus nach {mode}");
    }

    let snapshot = EditorSnapshot::from_state(&state);
    assert!(snapshot.is_active(EditorMode::Select));
    assert!(snapshot.is_active(EditorMode::Translate));
    assert!(!snapshot.is_active(EditorMode::Navigate));
    assert!(!snapshot.camera_controls_attached);
}

#[test]
fn toggling_a_mode_twice_restores_the_mode_set() {
    let (mut controller, mut state) = setup();
    toggle(&mut controller, &mut state, EditorMode::Translate);

    for mode in EditorMode::ALL {
        let before = state.modes.clone();
        toggle(&mut controller, &mut state, mode);
        toggle(&mut controller, &mut state, mode);
        assert!(state.modes.same_modes(&before), "Toggle von {mode} nicht selbstinvers");
    }
}

#[test]
fn translate_mode_gates_drag_of_selected_meshes() {
    let (mut controller, mut state) = setup();
    controller
        .handle_intent(
            &mut state,
            AppIntent::CreatePrimitiveRequested {
                kind: PrimitiveKind::Cube,
            },
        )
        .expect("Erzeugen");
    let id = state.scene.selectable().next().map(|o| o.id).expect("Würfel");

    toggle(&mut controller, &mut state, EditorMode::Select);
    let center = screen_of(&state, Vec3::ZERO);
    click(&mut controller, &mut state, center);
    assert!(state.selection.is_mesh_selected(id));
    assert!(state.selection.active_drag(id).is_none());

    toggle(&mut controller, &mut state, EditorMode::Translate);
    assert!(state.selection.active_drag(id).is_some());

    toggle(&mut controller, &mut state, EditorMode::Translate);
    assert!(state.selection.active_drag(id).is_none());
}

#[test]
fn navigate_toggle_detaches_camera_controls() {
    let (mut controller, mut state) = setup();

    toggle(&mut controller, &mut state, EditorMode::Navigate);
    assert!(!state.view.camera.controls_attached);
    assert!(state.modes.is_empty());

    toggle(&mut controller, &mut state, EditorMode::Navigate);
    assert!(state.view.camera.controls_attached);
}
