//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod history;
mod intent_mapping;
pub mod keyboard;
pub mod snapshot;
/// Application State
///
/// Dieses Modul verwaltet den Zustand des Editors (Szene, Modi, Selektion, View).
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::{AppController, PostActionHook};
pub use events::{AppCommand, AppIntent, PointerButton, PointerKind};
pub use history::{ActionLog, ActionTarget, EditAction};
pub use intent_mapping::interpret_pointer_down;
pub use keyboard::{map_key, Key, KeyInput};
pub use snapshot::{toolbar_indicators, EditorSnapshot, ToolbarIndicator};
pub use state::{AppState, SelectionState, UiState, ViewState};
