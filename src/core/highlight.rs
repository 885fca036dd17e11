//! Highlight-Layer: Verwaltung visueller Marker für Selektionseinträge.
//!
//! Jeder Selektionseintrag besitzt genau einen Marker. Der Layer zählt die
//! lebenden Marker, damit Lecks in Tests sichtbar werden.

use super::scene::ObjectId;
use indexmap::IndexMap;

/// Handle eines Markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HighlightId(u64);

/// Worauf ein Marker zeigt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightTarget {
    Mesh(ObjectId),
    Vertex { object: ObjectId, index: u32 },
    Edge { object: ObjectId, a: u32, b: u32 },
    Face { object: ObjectId, face: u32 },
}

impl HighlightTarget {
    /// Besitzendes Objekt.
    pub fn object(&self) -> ObjectId {
        match *self {
            HighlightTarget::Mesh(object)
            | HighlightTarget::Vertex { object, .. }
            | HighlightTarget::Edge { object, .. }
            | HighlightTarget::Face { object, .. } => object,
        }
    }
}

/// Ein lebender Marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Highlight {
    pub target: HighlightTarget,
    pub color: [f32; 4],
}

#[derive(Debug, Clone, Default)]
pub struct HighlightLayer {
    live: IndexMap<HighlightId, Highlight>,
    next_id: u64,
}

impl HighlightLayer {
    /// Erstellt einen leeren Layer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erzeugt einen Marker.
    pub fn add(&mut self, target: HighlightTarget, color: [f32; 4]) -> HighlightId {
        self.next_id += 1;
        let id = HighlightId(self.next_id);
        self.live.insert(id, Highlight { target, color });
        id
    }

    /// Entsorgt einen Marker. `false`, wenn er nicht (mehr) existiert.
    pub fn remove(&mut self, id: HighlightId) -> bool {
        self.live.shift_remove(&id).is_some()
    }

    pub fn get(&self, id: HighlightId) -> Option<&Highlight> {
        self.live.get(&id)
    }

    /// Anzahl lebender Marker.
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Alle lebenden Marker (Render-Reihenfolge).
    pub fn iter(&self) -> impl Iterator<Item = &Highlight> {
        self.live.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_remove_balance() {
        let mut layer = HighlightLayer::new();
        let id = layer.add(HighlightTarget::Mesh(ObjectId(1)), [0.0, 1.0, 0.0, 1.0]);
        assert_eq!(layer.live_count(), 1);
        assert_eq!(layer.get(id).map(|h| h.target.object()), Some(ObjectId(1)));

        assert!(layer.remove(id));
        assert!(!layer.remove(id));
        assert_eq!(layer.live_count(), 0);
    }
}
