//! Use-Case-Funktionen für Selektion.
//!
//! Aufgeteilt nach Selektionsart:
//! - `mesh` — ganze Meshes (mit Verschiebe-Fähigkeit)
//! - `elements` — Vertices, Kanten und Faces eines getroffenen Meshes
//! - `helpers` — Aufheben und Bereinigen
mod elements;
mod helpers;
mod mesh;

pub use elements::{select_edge_near, select_vertex_near, toggle_face};
pub use helpers::{clear_selection, prune_missing_objects};
pub use mesh::toggle_mesh;
