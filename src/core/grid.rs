//! Referenz-Grid in Chunks mit Entfernungs-LOD und Achsenlinien.
//!
//! Grid-Chunks und Achsen sind Hilfsobjekte der Szene: sie werden nie
//! gepickt, gezählt oder exportiert.

use super::mesh::MeshData;
use super::scene::{HelperKind, ObjectId, Scene};
use crate::shared::EditorOptions;
use glam::Vec3;
use indexmap::IndexMap;
use std::fmt;

/// Chunk-Koordinate in Chunk-Einheiten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkCoord {
    pub x: i32,
    pub z: i32,
}

impl ChunkCoord {
    /// Chunk, der den Punkt (x, z) enthält.
    pub fn containing(x: f32, z: f32, chunk_size: f32) -> Self {
        Self {
            x: (x / chunk_size).floor() as i32,
            z: (z / chunk_size).floor() as i32,
        }
    }

    /// Euklidischer Abstand in Chunk-Einheiten.
    pub fn distance(&self, other: &ChunkCoord) -> f32 {
        let dx = (self.x - other.x) as f32;
        let dz = (self.z - other.z) as f32;
        (dx * dx + dz * dz).sqrt()
    }
}

impl fmt::Display for ChunkCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.x, self.z)
    }
}

/// Ein erzeugter Grid-Chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridChunk {
    pub object: ObjectId,
    pub lod: u32,
}

/// Ergebnis eines Grid-Updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridUpdate {
    pub created: usize,
    pub disposed: usize,
}

/// Verwaltet die sichtbaren Grid-Chunks um das Kameraziel.
#[derive(Debug, Clone, Default)]
pub struct GridChunks {
    chunks: IndexMap<ChunkCoord, GridChunk>,
}

impl GridChunks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Linien eines Chunks mit `lod` Unterteilungen je Richtung.
    pub fn chunk_lines(coord: ChunkCoord, chunk_size: f32, lod: u32) -> Vec<[Vec3; 2]> {
        let lod = lod.max(1);
        let step = chunk_size / lod as f32;
        let start_x = coord.x as f32 * chunk_size;
        let start_z = coord.z as f32 * chunk_size;

        let mut lines = Vec::with_capacity((lod as usize + 1) * 2);
        for i in 0..=lod {
            let offset = i as f32 * step;
            lines.push([
                Vec3::new(start_x + offset, 0.0, start_z),
                Vec3::new(start_x + offset, 0.0, start_z + chunk_size),
            ]);
            lines.push([
                Vec3::new(start_x, 0.0, start_z + offset),
                Vec3::new(start_x + chunk_size, 0.0, start_z + offset),
            ]);
        }
        lines
    }

    /// Erzeugt fehlende Chunks im Sichtfenster und entsorgt Chunks außerhalb.
    ///
    /// Bereits vorhandene Chunks werden nicht neu aufgebaut, auch wenn sich
    /// ihre LOD-Stufe geändert hätte.
    pub fn update(&mut self, scene: &mut Scene, center: Vec3, options: &EditorOptions) -> GridUpdate {
        let size = options.grid_chunk_size;
        if size <= 0.0 {
            log::warn!("Ungültige Grid-Chunk-Größe: {}", size);
            return GridUpdate::default();
        }

        let current = ChunkCoord::containing(center.x, center.z, size);
        let range = options.grid_render_distance.max(0);
        let mut update = GridUpdate::default();
        let mut wanted = Vec::new();

        for x in (current.x - range)..=(current.x + range) {
            for z in (current.z - range)..=(current.z + range) {
                let coord = ChunkCoord { x, z };
                wanted.push(coord);
                if self.chunks.contains_key(&coord) {
                    continue;
                }
                let lod = options.grid_lod_for_distance(current.distance(&coord));
                let mesh = MeshData::lines(&Self::chunk_lines(coord, size, lod));
                let object = scene.add_helper(coord.to_string(), HelperKind::GridChunk, mesh);
                self.chunks.insert(coord, GridChunk { object, lod });
                update.created += 1;
            }
        }

        let stale: Vec<ChunkCoord> = self
            .chunks
            .keys()
            .copied()
            .filter(|coord| !wanted.contains(coord))
            .collect();
        for coord in stale {
            if let Some(chunk) = self.chunks.shift_remove(&coord) {
                scene.dispose(chunk.object);
                update.disposed += 1;
            }
        }

        if update.created > 0 || update.disposed > 0 {
            log::debug!(
                "Grid aktualisiert: {} erzeugt, {} entsorgt",
                update.created,
                update.disposed
            );
        }
        update
    }

    /// Anzahl aktiver Chunks.
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Gibt `true` zurück, wenn keine Chunks existieren.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Chunk an einer Koordinate.
    pub fn get(&self, coord: ChunkCoord) -> Option<&GridChunk> {
        self.chunks.get(&coord)
    }
}

/// Legt die X- und Z-Achse als Hilfsobjekte an.
pub fn spawn_axes(scene: &mut Scene, size: f32) -> [ObjectId; 2] {
    let half = size / 2.0;
    let axis_x = scene.add_helper(
        "axisX",
        HelperKind::AxisX,
        MeshData::lines(&[[Vec3::new(-half, 0.0, 0.0), Vec3::new(half, 0.0, 0.0)]]),
    );
    let axis_z = scene.add_helper(
        "axisZ",
        HelperKind::AxisZ,
        MeshData::lines(&[[Vec3::new(0.0, 0.0, -half), Vec3::new(0.0, 0.0, half)]]),
    );
    [axis_x, axis_z]
}
