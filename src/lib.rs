//! Scene Editor Library.
//! Modus-Steuerung, Selektion und Undo/Redo eines 3D-Szeneneditors,
//! als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod interchange;
pub mod script;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, EditorSnapshot, PointerButton, PointerKind,
    SelectionState, UiState, ViewState,
};
pub use core::{EditorMode, ModeSet, ObjectId, OrbitCamera, PrimitiveKind, Scene};
pub use interchange::{SceneCodec, TomlSceneCodec};
pub use script::{ScriptParser, ScriptStep};
pub use shared::EditorOptions;
