//! Mesh-Daten (Vertex-/Index-Puffer) und Primitiv-Fabriken.

use glam::Vec3;
use std::fmt;
use std::str::FromStr;

/// Interpretation des Index-Puffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Topology {
    /// Je drei Indizes bilden ein Dreieck
    #[default]
    Triangles,
    /// Je zwei Indizes bilden eine Linie (Grid, Achsen)
    Lines,
}

/// Achsen-aligned Bounding-Box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Mittelpunkt der Box.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Halbe Ausdehnung je Achse.
    pub fn half_extent(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// Vereinigung zweier Boxen.
    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Verschiebt die Box um `offset`.
    pub fn translated(&self, offset: Vec3) -> Aabb {
        Aabb {
            min: self.min + offset,
            max: self.max + offset,
        }
    }
}

/// Vertex- und Index-Puffer eines Objekts (lokale Koordinaten).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MeshData {
    pub positions: Vec<Vec3>,
    pub indices: Vec<u32>,
    pub topology: Topology,
}

impl MeshData {
    /// Erstellt ein Dreiecks-Mesh.
    pub fn triangles(positions: Vec<Vec3>, indices: Vec<u32>) -> Self {
        Self {
            positions,
            indices,
            topology: Topology::Triangles,
        }
    }

    /// Erstellt ein Linien-Mesh aus Segmenten.
    pub fn lines(segments: &[[Vec3; 2]]) -> Self {
        let mut positions = Vec::with_capacity(segments.len() * 2);
        let mut indices = Vec::with_capacity(segments.len() * 2);
        for [a, b] in segments {
            indices.push(positions.len() as u32);
            positions.push(*a);
            indices.push(positions.len() as u32);
            positions.push(*b);
        }
        Self {
            positions,
            indices,
            topology: Topology::Lines,
        }
    }

    /// Anzahl Vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Anzahl Dreiecke (0 für Linien-Meshes).
    pub fn triangle_count(&self) -> usize {
        match self.topology {
            Topology::Triangles => self.indices.len() / 3,
            Topology::Lines => 0,
        }
    }

    /// Iteriert die Dreiecke mit ihrem Face-Index (`indices / 3`).
    ///
    /// Dreiecke mit ungültigen Indizes werden übersprungen; die Face-Indizes
    /// der übrigen bleiben unverändert.
    pub fn faces(&self) -> impl Iterator<Item = (u32, [u32; 3])> + '_ {
        let count = self.positions.len() as u32;
        let indices: &[u32] = match self.topology {
            Topology::Triangles => &self.indices,
            Topology::Lines => &[],
        };
        indices
            .chunks_exact(3)
            .enumerate()
            .map(|(face, tri)| (face as u32, [tri[0], tri[1], tri[2]]))
            .filter(move |(_, tri)| tri.iter().all(|&i| i < count))
    }

    /// Iteriert die gültigen Dreiecke als Index-Tripel.
    pub fn triangles_iter(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.faces().map(|(_, tri)| tri)
    }

    /// Prüft den Index-Puffer gegen Topologie und Vertex-Anzahl.
    pub fn validate(&self) -> anyhow::Result<()> {
        let stride = match self.topology {
            Topology::Triangles => 3,
            Topology::Lines => 2,
        };
        if self.indices.len() % stride != 0 {
            anyhow::bail!(
                "Indexanzahl {} ist kein Vielfaches von {}",
                self.indices.len(),
                stride
            );
        }
        if let Some(bad) = self
            .indices
            .iter()
            .find(|&&i| i as usize >= self.positions.len())
        {
            anyhow::bail!(
                "Index {} außerhalb von {} Vertices",
                bad,
                self.positions.len()
            );
        }
        Ok(())
    }

    /// Bounding-Box in lokalen Koordinaten (None für leere Meshes).
    pub fn bounds(&self) -> Option<Aabb> {
        let first = *self.positions.first()?;
        let mut bounds = Aabb {
            min: first,
            max: first,
        };
        for p in &self.positions[1..] {
            bounds.min = bounds.min.min(*p);
            bounds.max = bounds.max.max(*p);
        }
        Some(bounds)
    }
}

/// Arten erzeugbarer Primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Triangle,
    Quad,
    Cube,
}

impl PrimitiveKind {
    /// Alle Primitive.
    pub const ALL: [PrimitiveKind; 3] = [
        PrimitiveKind::Triangle,
        PrimitiveKind::Quad,
        PrimitiveKind::Cube,
    ];

    /// Objektname in der Szene.
    pub fn name(self) -> &'static str {
        match self {
            PrimitiveKind::Triangle => "triangle",
            PrimitiveKind::Quad => "quad",
            PrimitiveKind::Cube => "cube",
        }
    }

    /// Baut die Geometrie des Primitivs.
    pub fn build(self) -> MeshData {
        match self {
            PrimitiveKind::Triangle => MeshData::triangles(
                vec![
                    Vec3::new(-1.0, -1.0, 0.0),
                    Vec3::new(1.0, -1.0, 0.0),
                    Vec3::new(0.0, 1.0, 0.0),
                ],
                vec![0, 1, 2],
            ),
            PrimitiveKind::Quad => MeshData::triangles(
                vec![
                    Vec3::new(-1.0, -1.0, 0.0),
                    Vec3::new(1.0, -1.0, 0.0),
                    Vec3::new(1.0, 1.0, 0.0),
                    Vec3::new(-1.0, 1.0, 0.0),
                ],
                vec![0, 1, 2, 0, 2, 3],
            ),
            PrimitiveKind::Cube => {
                let positions = vec![
                    Vec3::new(-1.0, -1.0, -1.0),
                    Vec3::new(1.0, -1.0, -1.0),
                    Vec3::new(1.0, 1.0, -1.0),
                    Vec3::new(-1.0, 1.0, -1.0),
                    Vec3::new(-1.0, -1.0, 1.0),
                    Vec3::new(1.0, -1.0, 1.0),
                    Vec3::new(1.0, 1.0, 1.0),
                    Vec3::new(-1.0, 1.0, 1.0),
                ];
                #[rustfmt::skip]
                let indices = vec![
                    0, 2, 1, 0, 3, 2, // -Z
                    4, 5, 6, 4, 6, 7, // +Z
                    0, 1, 5, 0, 5, 4, // -Y
                    3, 7, 6, 3, 6, 2, // +Y
                    0, 4, 7, 0, 7, 3, // -X
                    1, 2, 6, 1, 6, 5, // +X
                ];
                MeshData::triangles(positions, indices)
            }
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PrimitiveKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PrimitiveKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| anyhow::anyhow!("Unbekanntes Primitiv: {s}"))
    }
}
