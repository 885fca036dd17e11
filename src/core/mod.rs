//! Core-Domänentypen: Modi, Meshes, Szene, Kamera, Picking, Grid, Highlights.

pub mod camera;
pub mod grid;
pub mod highlight;
pub mod mesh;
pub mod mode;
pub mod picking;
pub mod scene;

pub use camera::OrbitCamera;
pub use grid::{spawn_axes, ChunkCoord, GridChunks, GridUpdate};
pub use highlight::{Highlight, HighlightId, HighlightLayer, HighlightTarget};
pub use mesh::{Aabb, MeshData, PrimitiveKind, Topology};
pub use mode::{EditorMode, ModeSet, ModeToggle};
pub use picking::{closest_edge, closest_vertex, pick, EdgeHit, PickHit, Ray, VertexHit};
pub use scene::{HelperKind, ObjectId, ObjectKind, Scene, SceneObject};
