//! Szenengraph-Modell: Objekte mit Geometrie, Position und Rolle.

use super::mesh::{Aabb, MeshData, PrimitiveKind};
use glam::{Mat4, Vec3};
use indexmap::IndexMap;
use std::fmt;

/// Eindeutige Objekt-ID. Wird nie wiederverwendet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u64);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Art eines Hilfsobjekts (nicht selektierbar, nicht exportiert).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HelperKind {
    GridChunk,
    AxisX,
    AxisZ,
}

/// Herkunft bzw. Rolle eines Szenenobjekts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    /// Über eine Primitiv-Fabrik erzeugt
    Primitive(PrimitiveKind),
    /// Aus einer Austauschdatei importiert
    Imported,
    /// Grid/Achsen
    Helper(HelperKind),
}

/// Ein Objekt der Szene.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub id: ObjectId,
    pub name: String,
    pub kind: ObjectKind,
    /// Geometrie in lokalen Koordinaten
    pub mesh: MeshData,
    /// Welt-Position (einzige Transformation)
    pub position: Vec3,
}

impl SceneObject {
    /// Welt-Matrix des Objekts.
    pub fn world_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
    }

    /// Welt-Position eines Vertex.
    pub fn world_vertex(&self, index: u32) -> Option<Vec3> {
        self.mesh
            .positions
            .get(index as usize)
            .map(|p| self.world_matrix().transform_point3(*p))
    }

    /// Hilfsobjekte (Grid, Achsen) sind nicht selektierbar.
    pub fn is_selectable(&self) -> bool {
        !matches!(self.kind, ObjectKind::Helper(_))
    }

    /// Bounding-Box in Welt-Koordinaten.
    pub fn world_bounds(&self) -> Option<Aabb> {
        self.mesh.bounds().map(|b| b.translated(self.position))
    }
}

/// Container aller Szenenobjekte.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    objects: IndexMap<ObjectId, SceneObject>,
    next_id: u64,
}

impl Scene {
    /// Erstellt eine leere Szene.
    pub fn new() -> Self {
        Self {
            objects: IndexMap::new(),
            next_id: 1,
        }
    }

    fn allocate_id(&mut self) -> ObjectId {
        let id = ObjectId(self.next_id.max(1));
        self.next_id = id.0 + 1;
        id
    }

    fn insert_new(&mut self, name: String, kind: ObjectKind, mesh: MeshData) -> ObjectId {
        let id = self.allocate_id();
        self.objects.insert(
            id,
            SceneObject {
                id,
                name,
                kind,
                mesh,
                position: Vec3::ZERO,
            },
        );
        id
    }

    /// Erzeugt ein Primitiv im Ursprung.
    pub fn spawn_primitive(&mut self, kind: PrimitiveKind) -> ObjectId {
        let id = self.insert_new(kind.name().to_string(), ObjectKind::Primitive(kind), kind.build());
        log::debug!("Primitiv {} erzeugt: {}", kind, id);
        id
    }

    /// Fügt ein Hilfsobjekt hinzu.
    pub fn add_helper(&mut self, name: impl Into<String>, kind: HelperKind, mesh: MeshData) -> ObjectId {
        self.insert_new(name.into(), ObjectKind::Helper(kind), mesh)
    }

    /// Fügt ein importiertes Mesh hinzu.
    pub fn add_imported(&mut self, name: impl Into<String>, mesh: MeshData) -> ObjectId {
        self.insert_new(name.into(), ObjectKind::Imported, mesh)
    }

    /// Entfernt ein Objekt und gibt es zurück.
    pub fn dispose(&mut self, id: ObjectId) -> Option<SceneObject> {
        self.objects.shift_remove(&id)
    }

    /// Setzt ein zuvor entferntes Objekt mit seiner ID wieder ein.
    ///
    /// Gibt `false` zurück, wenn die ID bereits belegt ist.
    pub fn restore(&mut self, object: SceneObject) -> bool {
        if self.objects.contains_key(&object.id) {
            log::warn!("Objekt {} existiert bereits, Wiederherstellung übersprungen", object.id);
            return false;
        }
        self.next_id = self.next_id.max(object.id.0 + 1);
        self.objects.insert(object.id, object);
        true
    }

    /// Setzt die Welt-Position eines Objekts.
    pub fn set_position(&mut self, id: ObjectId, position: Vec3) -> bool {
        match self.objects.get_mut(&id) {
            Some(object) => {
                object.position = position;
                true
            }
            None => false,
        }
    }

    /// Objekt per ID.
    pub fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(&id)
    }

    /// Prüft ob ein Objekt existiert.
    pub fn contains(&self, id: ObjectId) -> bool {
        self.objects.contains_key(&id)
    }

    /// Gesamtzahl aller Objekte inkl. Hilfsobjekte.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Gibt `true` zurück, wenn die Szene leer ist.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Alle Objekte in Einfügereihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.values()
    }

    /// Alle selektierbaren Objekte (ohne Grid/Achsen).
    pub fn selectable(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.values().filter(|o| o.is_selectable())
    }

    /// Anzahl selektierbarer Objekte.
    pub fn selectable_count(&self) -> usize {
        self.selectable().count()
    }

    /// Summe der Vertices aller selektierbaren Objekte.
    pub fn selectable_vertex_count(&self) -> usize {
        self.selectable().map(|o| o.mesh.vertex_count()).sum()
    }

    /// Prüft ob ein Objekt existiert und selektierbar ist.
    pub fn is_selectable(&self, id: ObjectId) -> bool {
        self.get(id).is_some_and(|o| o.is_selectable())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_never_reused() {
        let mut scene = Scene::new();
        let a = scene.spawn_primitive(PrimitiveKind::Triangle);
        scene.dispose(a);
        let b = scene.spawn_primitive(PrimitiveKind::Triangle);
        assert_ne!(a, b);
    }

    #[test]
    fn helpers_are_excluded_from_selectable_queries() {
        let mut scene = Scene::new();
        scene.add_helper("axisX", HelperKind::AxisX, MeshData::lines(&[[Vec3::ZERO, Vec3::X]]));
        scene.spawn_primitive(PrimitiveKind::Quad);

        assert_eq!(scene.len(), 2);
        assert_eq!(scene.selectable_count(), 1);
        assert_eq!(scene.selectable_vertex_count(), 4);
    }

    #[test]
    fn restore_keeps_identity_and_rejects_duplicates() {
        let mut scene = Scene::new();
        let id = scene.spawn_primitive(PrimitiveKind::Cube);
        scene.set_position(id, Vec3::new(3.0, 0.0, 0.0));
        let object = scene.dispose(id).expect("Objekt vorhanden");

        assert!(scene.restore(object.clone()));
        assert_eq!(scene.get(id).map(|o| o.position), Some(Vec3::new(3.0, 0.0, 0.0)));
        assert!(!scene.restore(object));
    }

    #[test]
    fn world_vertex_applies_position() {
        let mut scene = Scene::new();
        let id = scene.spawn_primitive(PrimitiveKind::Triangle);
        scene.set_position(id, Vec3::new(0.0, 2.0, 0.0));
        let object = scene.get(id).expect("Objekt vorhanden");
        assert_eq!(object.world_vertex(2), Some(Vec3::new(0.0, 3.0, 0.0)));
        assert_eq!(object.world_vertex(3), None);
    }

    #[test]
    fn world_bounds_follow_position() {
        let mut scene = Scene::new();
        let id = scene.spawn_primitive(PrimitiveKind::Cube);
        scene.set_position(id, Vec3::new(3.0, 0.0, 0.0));
        let bounds = scene.get(id).and_then(SceneObject::world_bounds).expect("nicht leer");
        assert_eq!(bounds.center(), Vec3::new(3.0, 0.0, 0.0));
        assert_eq!(bounds.min, Vec3::new(2.0, -1.0, -1.0));
    }
}
