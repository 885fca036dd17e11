//! Application State — zentrale Datenhaltung.

mod app_state;
mod input;
mod selection;
mod ui;
mod view;

pub use app_state::AppState;
pub use input::{DragGesture, InputState, PendingLongPress, PointerPress};
pub use selection::{DragHandle, EdgeKey, FaceKey, MeshSelection, SelectionState, VertexKey};
pub use ui::{ContextMenuState, UiState};
pub use view::ViewState;
