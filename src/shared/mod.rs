//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen, die von `core` und `app` gleichermaßen
//! gelesen werden.

pub mod options;

pub use options::EditorOptions;
pub use options::{EDGE_PICK_SLACK_PX, VERTEX_PICK_RADIUS_PX};
