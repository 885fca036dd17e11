use super::{click, pointer_down, pointer_up, screen_of, send, setup, toggle};
use approx::assert_relative_eq;
use glam::{Vec2, Vec3};
use scene_editor::app::state::{EdgeKey, FaceKey, VertexKey};
use scene_editor::{AppIntent, EditorMode, PointerKind, PrimitiveKind};

fn add(
    controller: &mut scene_editor::AppController,
    state: &mut scene_editor::AppState,
    kind: PrimitiveKind,
) -> scene_editor::ObjectId {
    send(controller, state, AppIntent::CreatePrimitiveRequested { kind });
    state
        .scene
        .selectable()
        .last()
        .map(|o| o.id)
        .expect("Objekt erzeugt")
}

#[test]
fn clicking_a_mesh_twice_toggles_selection_and_highlight() {
    let (mut controller, mut state) = setup();
    let id = add(&mut controller, &mut state, PrimitiveKind::Cube);
    toggle(&mut controller, &mut state, EditorMode::Select);
    let center = screen_of(&state, Vec3::ZERO);

    click(&mut controller, &mut state, center);
    assert!(state.selection.is_mesh_selected(id));
    assert_eq!(state.selection.highlights.live_count(), 1);
    assert_eq!(
        state.status_line(),
        "Meshes: 1/1, Vertices: 0/8, Edges: 0, Faces: 0"
    );

    click(&mut controller, &mut state, center);
    assert!(state.selection.is_empty());
    assert_eq!(state.selection.highlights.live_count(), 0);
}

#[test]
fn clicking_empty_space_selects_nothing() {
    let (mut controller, mut state) = setup();
    add(&mut controller, &mut state, PrimitiveKind::Triangle);
    toggle(&mut controller, &mut state, EditorMode::Select);

    // Grid und Achsen liegen hier, sind aber nicht pickbar
    click(&mut controller, &mut state, Vec2::new(5.0, 590.0));

    assert!(state.selection.is_empty());
}

#[test]
fn vertex_mode_selects_nearest_vertex_of_hit_mesh() {
    let (mut controller, mut state) = setup();
    let id = add(&mut controller, &mut state, PrimitiveKind::Triangle);
    toggle(&mut controller, &mut state, EditorMode::SelectVertex);

    // Innerhalb des Dreiecks, nahe der Spitze (0, 1, 0)
    let pointer = screen_of(&state, Vec3::new(0.0, 0.7, 0.0));
    click(&mut controller, &mut state, pointer);

    assert_eq!(state.selection.vertices.len(), 1);
    assert!(state
        .selection
        .vertices
        .contains_key(&VertexKey { object: id, index: 2 }));
    assert_eq!(
        state.status_line(),
        "Meshes: 0/1, Vertices: 1/3, Edges: 0, Faces: 0"
    );
}

#[test]
fn vertex_pick_radius_is_runtime_configurable() {
    let (mut controller, mut state) = setup();
    add(&mut controller, &mut state, PrimitiveKind::Triangle);
    toggle(&mut controller, &mut state, EditorMode::SelectVertex);
    send(
        &mut controller,
        &mut state,
        AppIntent::VertexPickRadiusChanged { radius_px: 2.0 },
    );

    // Dreiecksmitte: alle Vertices deutlich weiter als 2 px entfernt
    let pointer = screen_of(&state, Vec3::new(0.0, -0.3, 0.0));
    click(&mut controller, &mut state, pointer);

    assert!(state.selection.vertices.is_empty());
    assert_eq!(state.selection.highlights.live_count(), 0);
}

#[test]
fn edge_mode_stores_canonical_pair() {
    let (mut controller, mut state) = setup();
    let id = add(&mut controller, &mut state, PrimitiveKind::Triangle);
    toggle(&mut controller, &mut state, EditorMode::SelectEdge);

    // Knapp innerhalb der Kante (0,1,0)-(-1,-1,0)
    let pointer = screen_of(&state, Vec3::new(-0.45, 0.0, 0.0));
    click(&mut controller, &mut state, pointer);

    assert_eq!(state.selection.edges.len(), 1);
    assert!(state.selection.edges.contains_key(&EdgeKey::new(id, 0, 2)));
    let key = state.selection.edges.keys().next().copied().expect("Kante");
    assert!(key.a < key.b);
}

#[test]
fn face_mode_uses_reported_face_index() {
    let (mut controller, mut state) = setup();
    let id = add(&mut controller, &mut state, PrimitiveKind::Quad);
    toggle(&mut controller, &mut state, EditorMode::SelectFace);

    let pointer = screen_of(&state, Vec3::new(-0.3, 0.5, 0.0));
    click(&mut controller, &mut state, pointer);
    assert!(state
        .selection
        .faces
        .contains_key(&FaceKey { object: id, face: 1 }));

    click(&mut controller, &mut state, pointer);
    assert!(state.selection.faces.is_empty());
}

#[test]
fn deselect_all_disposes_every_highlight() {
    let (mut controller, mut state) = setup();
    add(&mut controller, &mut state, PrimitiveKind::Quad);
    toggle(&mut controller, &mut state, EditorMode::Select);
    let pointer = screen_of(&state, Vec3::new(-0.5, 0.5, 0.0));
    click(&mut controller, &mut state, pointer);
    toggle(&mut controller, &mut state, EditorMode::SelectFace);
    let pointer = screen_of(&state, Vec3::new(0.5, -0.5, 0.0));
    click(&mut controller, &mut state, pointer);
    assert_eq!(state.selection.total_len(), 2);

    send(&mut controller, &mut state, AppIntent::DeselectAllRequested);

    assert!(state.selection.is_empty());
    assert_eq!(state.selection.highlights.live_count(), 0);
}

#[test]
fn dragging_selected_mesh_moves_it_without_orbiting() {
    let (mut controller, mut state) = setup();
    let id = add(&mut controller, &mut state, PrimitiveKind::Triangle);
    toggle(&mut controller, &mut state, EditorMode::Select);
    let start = screen_of(&state, Vec3::ZERO);
    click(&mut controller, &mut state, start);
    toggle(&mut controller, &mut state, EditorMode::Select);
    toggle(&mut controller, &mut state, EditorMode::Translate);
    let alpha = state.view.camera.alpha;
    let target = screen_of(&state, Vec3::new(2.0, 1.0, 0.0));

    pointer_down(&mut controller, &mut state, start, PointerKind::Mouse, 0);
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerMove {
            pos: target,
            time_ms: 10,
        },
    );
    pointer_up(&mut controller, &mut state, target, PointerKind::Mouse, 20);

    let position = state.scene.get(id).map(|o| o.position).expect("Objekt");
    assert_relative_eq!(position.x, 2.0, epsilon = 1e-3);
    assert_relative_eq!(position.y, 1.0, epsilon = 1e-3);
    assert_relative_eq!(state.view.camera.alpha, alpha);
    assert!(state.can_undo());

    send(&mut controller, &mut state, AppIntent::UndoRequested);
    assert_eq!(state.scene.get(id).map(|o| o.position), Some(Vec3::ZERO));
}

#[test]
fn navigate_drag_on_empty_space_orbits_camera() {
    let (mut controller, mut state) = setup();
    let alpha = state.view.camera.alpha;

    pointer_down(&mut controller, &mut state, Vec2::new(100.0, 100.0), PointerKind::Mouse, 0);
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerMove {
            pos: Vec2::new(150.0, 100.0),
            time_ms: 5,
        },
    );
    pointer_up(&mut controller, &mut state, Vec2::new(150.0, 100.0), PointerKind::Mouse, 10);

    assert!(state.view.camera.alpha < alpha);
    assert!(state.input.orbit_last.is_none());
}
