//! Use-Case-Funktionen für Szenen-Bearbeitung.
//!
//! Aufgeteilt nach Operation:
//! - `create_primitive` — Primitiv erzeugen
//! - `delete_selected` — Selektierte Meshes löschen
//! - `drag` — Selektierte Meshes in ihrer Ebene verschieben
mod create_primitive;
mod delete_selected;
mod drag;

pub use create_primitive::create_primitive;
pub use delete_selected::delete_selected;
pub use drag::{begin_drag, cancel_drag_of_missing, end_drag, update_drag};
