use super::{click, screen_of, send, setup, toggle};
use glam::Vec3;
use scene_editor::app::EditAction;
use scene_editor::{AppIntent, EditorMode, PrimitiveKind};
use std::cell::RefCell;
use std::rc::Rc;

fn recording_hook(controller: &mut scene_editor::AppController) -> Rc<RefCell<Vec<String>>> {
    let lines = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&lines);
    controller.set_post_action_hook(move |snapshot| {
        sink.borrow_mut().push(snapshot.status_line.clone());
    });
    lines
}

#[test]
fn undo_and_redo_on_empty_log_are_silent_no_ops() {
    let (mut controller, mut state) = setup();
    let lines = recording_hook(&mut controller);
    let objects_before = state.scene.len();

    send(&mut controller, &mut state, AppIntent::UndoRequested);
    send(&mut controller, &mut state, AppIntent::RedoRequested);

    assert!(lines.borrow().is_empty());
    assert_eq!(state.scene.len(), objects_before);
}

#[test]
fn undo_creation_disposes_and_redo_recreates_fresh_instance() {
    let (mut controller, mut state) = setup();
    let lines = recording_hook(&mut controller);

    send(
        &mut controller,
        &mut state,
        AppIntent::CreatePrimitiveRequested {
            kind: PrimitiveKind::Triangle,
        },
    );
    let original = state.scene.selectable().next().map(|o| o.id).expect("Dreieck");

    send(&mut controller, &mut state, AppIntent::UndoRequested);
    assert!(!state.scene.contains(original));
    assert!(state.can_redo());

    send(&mut controller, &mut state, AppIntent::RedoRequested);
    let recreated = state.scene.selectable().next().expect("neu erzeugt");
    assert_ne!(recreated.id, original);
    assert_eq!(recreated.position, Vec3::ZERO);
    assert!(matches!(
        state.history.peek_undo(),
        Some(EditAction::Creation { object, kind: PrimitiveKind::Triangle }) if *object == recreated.id
    ));

    assert_eq!(
        *lines.borrow(),
        vec![
            "Meshes: 0/0, Vertices: 0/0, Edges: 0, Faces: 0".to_string(),
            "Meshes: 0/1, Vertices: 0/3, Edges: 0, Faces: 0".to_string(),
        ]
    );
}

#[test]
fn new_action_after_undo_clears_redo() {
    let (mut controller, mut state) = setup();
    send(
        &mut controller,
        &mut state,
        AppIntent::CreatePrimitiveRequested {
            kind: PrimitiveKind::Cube,
        },
    );
    send(&mut controller, &mut state, AppIntent::UndoRequested);
    assert!(state.can_redo());

    send(
        &mut controller,
        &mut state,
        AppIntent::CreatePrimitiveRequested {
            kind: PrimitiveKind::Quad,
        },
    );

    assert!(!state.can_redo());
    assert_eq!(state.history.undo_len(), 1);
}

#[test]
fn undo_of_selected_creation_purges_its_selection() {
    let (mut controller, mut state) = setup();
    send(
        &mut controller,
        &mut state,
        AppIntent::CreatePrimitiveRequested {
            kind: PrimitiveKind::Cube,
        },
    );
    toggle(&mut controller, &mut state, EditorMode::Select);
    let pointer = screen_of(&state, Vec3::ZERO);
    click(&mut controller, &mut state, pointer);
    assert_eq!(state.selection.meshes.len(), 1);

    send(&mut controller, &mut state, AppIntent::UndoRequested);

    assert!(state.selection.is_empty());
    assert_eq!(state.selection.highlights.live_count(), 0);
    assert_eq!(
        state.status_line(),
        "Meshes: 0/0, Vertices: 0/0, Edges: 0, Faces: 0"
    );
}

#[test]
fn delete_then_undo_restores_object_identity() {
    let (mut controller, mut state) = setup();
    send(
        &mut controller,
        &mut state,
        AppIntent::CreatePrimitiveRequested {
            kind: PrimitiveKind::Quad,
        },
    );
    let id = state.scene.selectable().next().map(|o| o.id).expect("Quad");
    toggle(&mut controller, &mut state, EditorMode::Select);
    let pointer = screen_of(&state, Vec3::new(0.5, -0.5, 0.0));
    click(&mut controller, &mut state, pointer);

    send(&mut controller, &mut state, AppIntent::DeleteSelectedRequested);
    assert!(!state.scene.contains(id));
    assert!(state.selection.is_empty());

    send(&mut controller, &mut state, AppIntent::UndoRequested);
    assert!(state.scene.contains(id));
    // Selektion wird nicht wiederhergestellt
    assert!(state.selection.is_empty());

    send(&mut controller, &mut state, AppIntent::RedoRequested);
    assert!(!state.scene.contains(id));
}

#[test]
fn options_change_shrinks_history_depth() {
    let (mut controller, mut state) = setup();
    for _ in 0..5 {
        send(
            &mut controller,
            &mut state,
            AppIntent::CreatePrimitiveRequested {
                kind: PrimitiveKind::Triangle,
            },
        );
    }
    let mut options = state.options.clone();
    options.history_depth = 2;

    send(&mut controller, &mut state, AppIntent::OptionsChanged { options });

    assert_eq!(state.history.undo_len(), 2);
    assert_eq!(state.options.history_depth, 2);
}
