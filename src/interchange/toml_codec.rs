//! Einfacher TOML-Szenen-Codec (Positionen + Dreiecks-Indizes).
//!
//! Dient dem Headless-Treiber und Tests als Austauschformat, solange kein
//! Binär-Codec eingebunden ist.

use super::{ExportMesh, ImportedMesh, SceneCodec};
use crate::core::MeshData;
use anyhow::{bail, Context};
use glam::Vec3;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct SceneDocument {
    #[serde(default)]
    meshes: Vec<MeshRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct MeshRecord {
    name: String,
    positions: Vec<Vec3>,
    indices: Vec<u32>,
}

impl MeshRecord {
    fn validate(&self) -> anyhow::Result<()> {
        if self.indices.len() % 3 != 0 {
            bail!(
                "Mesh '{}': Indexanzahl {} ist kein Vielfaches von 3",
                self.name,
                self.indices.len()
            );
        }
        if let Some(bad) = self
            .indices
            .iter()
            .find(|&&i| i as usize >= self.positions.len())
        {
            bail!(
                "Mesh '{}': Index {} außerhalb von {} Vertices",
                self.name,
                bad,
                self.positions.len()
            );
        }
        Ok(())
    }
}

/// Szenen-Codec für `.toml`-Dateien. Die Objektposition wird in die
/// Vertex-Positionen eingerechnet.
#[derive(Debug, Clone, Copy, Default)]
pub struct TomlSceneCodec;

impl SceneCodec for TomlSceneCodec {
    fn extension(&self) -> &str {
        "toml"
    }

    fn encode(&self, objects: &[ExportMesh<'_>]) -> anyhow::Result<Vec<u8>> {
        let meshes = objects
            .iter()
            .map(|object| MeshRecord {
                name: object.name.to_string(),
                positions: object
                    .mesh
                    .positions
                    .iter()
                    .map(|p| *p + object.position)
                    .collect(),
                indices: object.mesh.indices.clone(),
            })
            .collect();
        let text = toml::to_string_pretty(&SceneDocument { meshes })
            .context("Szene konnte nicht serialisiert werden")?;
        Ok(text.into_bytes())
    }

    fn decode(&self, payload: &[u8]) -> anyhow::Result<Vec<ImportedMesh>> {
        let text = std::str::from_utf8(payload).context("Szenendatei ist kein UTF-8")?;
        let document: SceneDocument = toml::from_str(text).context("Ungültige Szenendatei")?;

        document
            .meshes
            .into_iter()
            .map(|record| {
                record.validate()?;
                Ok(ImportedMesh {
                    name: record.name,
                    mesh: MeshData::triangles(record.positions, record.indices),
                })
            })
            .collect()
    }
}
