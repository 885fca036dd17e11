//! Austauschformat-Schnittstelle für Szenen-Import und -Export.
//!
//! Die eigentliche Kodierung (z.B. glTF-Binary) liefert ein externer Codec,
//! der dem Controller übergeben wird.

mod toml_codec;

pub use toml_codec::TomlSceneCodec;

use crate::core::{MeshData, SceneObject};
use glam::Vec3;

/// Ein zu exportierendes Objekt (geliehen aus der Szene).
#[derive(Debug, Clone, Copy)]
pub struct ExportMesh<'a> {
    pub name: &'a str,
    pub mesh: &'a MeshData,
    pub position: Vec3,
}

impl<'a> From<&'a SceneObject> for ExportMesh<'a> {
    fn from(object: &'a SceneObject) -> Self {
        Self {
            name: &object.name,
            mesh: &object.mesh,
            position: object.position,
        }
    }
}

/// Ein dekodiertes Mesh (Transformation bereits in die Positionen eingerechnet).
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedMesh {
    pub name: String,
    pub mesh: MeshData,
}

/// Kodiert und dekodiert Szenen in ein binäres Austauschformat.
pub trait SceneCodec {
    /// Dateiendung ohne Punkt (z.B. `glb`).
    fn extension(&self) -> &str;

    /// Kodiert die Objekte in eine Binär-Payload.
    fn encode(&self, objects: &[ExportMesh<'_>]) -> anyhow::Result<Vec<u8>>;

    /// Dekodiert eine Binär-Payload.
    fn decode(&self, payload: &[u8]) -> anyhow::Result<Vec<ImportedMesh>>;
}
