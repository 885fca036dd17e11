use crate::core::{HighlightId, HighlightLayer, HighlightTarget, ObjectId};
use glam::Vec3;
use indexmap::IndexMap;

/// Schlüssel einer Vertex-Selektion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexKey {
    pub object: ObjectId,
    pub index: u32,
}

/// Schlüssel einer Kanten-Selektion; Indizes immer aufsteigend sortiert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeKey {
    pub object: ObjectId,
    pub a: u32,
    pub b: u32,
}

impl EdgeKey {
    /// Erstellt den kanonischen Schlüssel `(min, max)`.
    pub fn new(object: ObjectId, i: u32, j: u32) -> Self {
        Self {
            object,
            a: i.min(j),
            b: i.max(j),
        }
    }
}

/// Schlüssel einer Face-Selektion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FaceKey {
    pub object: ObjectId,
    pub face: u32,
}

/// Verschiebe-Fähigkeit eines selektierten Meshes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragHandle {
    /// Nur aktiv, solange der Translate-Modus an ist
    pub enabled: bool,
    /// Normale der Ebene, in der verschoben wird
    pub plane_normal: Vec3,
}

impl DragHandle {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            plane_normal: Vec3::Z,
        }
    }
}

/// Eintrag der Mesh-Selektion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshSelection {
    pub highlight: HighlightId,
    pub drag: Option<DragHandle>,
}

/// Auswahlbezogener Anwendungszustand: vier Selektionsmengen plus Marker.
///
/// Jeder Eintrag besitzt genau einen Marker im [`HighlightLayer`]; wer einen
/// Eintrag entfernt, entfernt auch dessen Marker.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    pub meshes: IndexMap<ObjectId, MeshSelection>,
    pub vertices: IndexMap<VertexKey, HighlightId>,
    pub edges: IndexMap<EdgeKey, HighlightId>,
    pub faces: IndexMap<FaceKey, HighlightId>,
    pub highlights: HighlightLayer,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schaltet die Mesh-Selektion eines Objekts um.
    ///
    /// Gibt `true` zurück, wenn das Objekt danach selektiert ist.
    pub fn toggle_mesh(&mut self, object: ObjectId, drag_enabled: bool, color: [f32; 4]) -> bool {
        if let Some(entry) = self.meshes.shift_remove(&object) {
            self.highlights.remove(entry.highlight);
            return false;
        }
        let highlight = self.highlights.add(HighlightTarget::Mesh(object), color);
        self.meshes.insert(
            object,
            MeshSelection {
                highlight,
                drag: Some(DragHandle::new(drag_enabled)),
            },
        );
        true
    }

    /// Schaltet die Selektion eines Vertex um.
    pub fn toggle_vertex(&mut self, key: VertexKey, color: [f32; 4]) -> bool {
        let target = HighlightTarget::Vertex {
            object: key.object,
            index: key.index,
        };
        Self::toggle_entry(&mut self.vertices, &mut self.highlights, key, target, color)
    }

    /// Schaltet die Selektion einer Kante um.
    pub fn toggle_edge(&mut self, key: EdgeKey, color: [f32; 4]) -> bool {
        let target = HighlightTarget::Edge {
            object: key.object,
            a: key.a,
            b: key.b,
        };
        Self::toggle_entry(&mut self.edges, &mut self.highlights, key, target, color)
    }

    /// Schaltet die Selektion eines Faces um.
    pub fn toggle_face(&mut self, key: FaceKey, color: [f32; 4]) -> bool {
        let target = HighlightTarget::Face {
            object: key.object,
            face: key.face,
        };
        Self::toggle_entry(&mut self.faces, &mut self.highlights, key, target, color)
    }

    fn toggle_entry<K: std::hash::Hash + Eq>(
        set: &mut IndexMap<K, HighlightId>,
        highlights: &mut HighlightLayer,
        key: K,
        target: HighlightTarget,
        color: [f32; 4],
    ) -> bool {
        if let Some(highlight) = set.shift_remove(&key) {
            highlights.remove(highlight);
            false
        } else {
            set.insert(key, highlights.add(target, color));
            true
        }
    }

    /// Aktiviert oder deaktiviert das Verschieben aller selektierten Meshes.
    pub fn set_drag_enabled(&mut self, enabled: bool) {
        for entry in self.meshes.values_mut() {
            if let Some(drag) = entry.drag.as_mut() {
                drag.enabled = enabled;
            }
        }
    }

    /// Verschiebe-Fähigkeit eines Objekts, falls es selektiert ist und sie aktiv ist.
    pub fn active_drag(&self, object: ObjectId) -> Option<DragHandle> {
        self.meshes
            .get(&object)
            .and_then(|entry| entry.drag)
            .filter(|drag| drag.enabled)
    }

    pub fn is_mesh_selected(&self, object: ObjectId) -> bool {
        self.meshes.contains_key(&object)
    }

    /// Entfernt alle Einträge eines Objekts. Gibt die Anzahl entfernter Einträge zurück.
    pub fn purge_object(&mut self, object: ObjectId) -> usize {
        let mut removed = Vec::new();
        if let Some(entry) = self.meshes.shift_remove(&object) {
            removed.push(entry.highlight);
        }
        Self::drain_where(&mut self.vertices, |k| k.object == object, &mut removed);
        Self::drain_where(&mut self.edges, |k| k.object == object, &mut removed);
        Self::drain_where(&mut self.faces, |k| k.object == object, &mut removed);

        for highlight in &removed {
            self.highlights.remove(*highlight);
        }
        removed.len()
    }

    fn drain_where<K: std::hash::Hash + Eq>(
        set: &mut IndexMap<K, HighlightId>,
        predicate: impl Fn(&K) -> bool,
        removed: &mut Vec<HighlightId>,
    ) {
        set.retain(|key, highlight| {
            if predicate(key) {
                removed.push(*highlight);
                false
            } else {
                true
            }
        });
    }

    /// Leert alle vier Mengen. Gibt die Anzahl entfernter Einträge zurück.
    pub fn clear(&mut self) -> usize {
        let count = self.total_len();
        let highlights = self
            .meshes
            .drain(..)
            .map(|(_, entry)| entry.highlight)
            .chain(self.vertices.drain(..).map(|(_, h)| h))
            .chain(self.edges.drain(..).map(|(_, h)| h))
            .chain(self.faces.drain(..).map(|(_, h)| h))
            .collect::<Vec<_>>();
        for highlight in highlights {
            self.highlights.remove(highlight);
        }
        count
    }

    /// Summe aller Einträge.
    pub fn total_len(&self) -> usize {
        self.meshes.len() + self.vertices.len() + self.edges.len() + self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total_len() == 0
    }
}
