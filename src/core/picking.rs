//! Picking: Strahl-Dreieck-Tests und Screen-Space-Suche nach Vertices/Kanten.
//!
//! Alle Suchen sind erschöpfend (O(Vertices) bzw. O(Dreiecke)) und
//! deterministisch: bei Gleichstand gewinnt der zuerst gefundene Kandidat.

use super::camera::OrbitCamera;
use super::scene::{ObjectId, Scene, SceneObject};
use glam::{Vec2, Vec3};

/// Strahl in Welt-Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Normierte Richtung
    pub direction: Vec3,
}

impl Ray {
    /// Punkt auf dem Strahl im Abstand `t`.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Schnittpunkt mit einer Ebene (Punkt + Normale).
    pub fn intersect_plane(&self, point: Vec3, normal: Vec3) -> Option<Vec3> {
        let denom = self.direction.dot(normal);
        if denom.abs() < 1e-6 {
            return None;
        }
        let t = (point - self.origin).dot(normal) / denom;
        (t >= 0.0).then(|| self.at(t))
    }
}

/// Möller-Trumbore Strahl-Dreieck-Schnitt (beidseitig).
/// Gibt den Abstand entlang des Strahls zurück.
pub fn ray_triangle_intersect(ray: &Ray, v0: Vec3, v1: Vec3, v2: Vec3) -> Option<f32> {
    const EPSILON: f32 = 1e-7;

    let edge1 = v1 - v0;
    let edge2 = v2 - v0;
    let h = ray.direction.cross(edge2);
    let a = edge1.dot(h);

    // Strahl parallel zum Dreieck
    if a.abs() < EPSILON {
        return None;
    }

    let f = 1.0 / a;
    let s = ray.origin - v0;
    let u = f * s.dot(h);
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(edge1);
    let v = f * ray.direction.dot(q);
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = f * edge2.dot(q);
    (t > EPSILON).then_some(t)
}

/// Treffer eines Picks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    pub object: ObjectId,
    /// Index des getroffenen Dreiecks im Index-Puffer (indices / 3)
    pub face_index: u32,
    /// Abstand entlang des Strahls
    pub distance: f32,
}

/// Nächstes selektierbares Objekt unter dem Zeiger.
///
/// Hilfsobjekte (Grid, Achsen) werden nie getroffen.
pub fn pick(scene: &Scene, camera: &OrbitCamera, viewport: Vec2, pointer: Vec2) -> Option<PickHit> {
    let ray = camera.screen_ray(pointer, viewport)?;
    pick_with_ray(scene, &ray)
}

/// Wie [`pick`], aber mit vorgegebenem Strahl.
pub fn pick_with_ray(scene: &Scene, ray: &Ray) -> Option<PickHit> {
    let mut best: Option<PickHit> = None;

    for object in scene.selectable() {
        let matrix = object.world_matrix();
        for (face_index, [a, b, c]) in object.mesh.faces() {
            let v0 = matrix.transform_point3(object.mesh.positions[a as usize]);
            let v1 = matrix.transform_point3(object.mesh.positions[b as usize]);
            let v2 = matrix.transform_point3(object.mesh.positions[c as usize]);
            if let Some(distance) = ray_triangle_intersect(ray, v0, v1, v2) {
                if best.as_ref().is_none_or(|hit| distance < hit.distance) {
                    best = Some(PickHit {
                        object: object.id,
                        face_index,
                        distance,
                    });
                }
            }
        }
    }

    best
}

/// Ergebnis der Vertex-Suche.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexHit {
    pub index: u32,
    /// Screen-Abstand zum Zeiger in Pixeln
    pub distance_px: f32,
}

/// Projiziert alle Vertices eines Objekts in Screen-Koordinaten.
///
/// Vertices hinter der Kamera ergeben `None`.
pub fn project_vertices(object: &SceneObject, camera: &OrbitCamera, viewport: Vec2) -> Vec<Option<Vec2>> {
    let matrix = object.world_matrix();
    object
        .mesh
        .positions
        .iter()
        .map(|p| camera.project(matrix.transform_point3(*p), viewport))
        .collect()
}

/// Index des projizierten Punkts mit minimalem Abstand zu `pointer`,
/// falls dieser Abstand `radius_px` nicht überschreitet.
pub fn nearest_screen_point(points: &[Option<Vec2>], pointer: Vec2, radius_px: f32) -> Option<VertexHit> {
    let mut best: Option<VertexHit> = None;
    for (index, point) in points.iter().enumerate() {
        let Some(point) = point else { continue };
        let distance_px = point.distance(pointer);
        if best.as_ref().is_none_or(|hit| distance_px < hit.distance_px) {
            best = Some(VertexHit {
                index: index as u32,
                distance_px,
            });
        }
    }
    best.filter(|hit| hit.distance_px <= radius_px)
}

/// Nächster Vertex eines Objekts zum Zeiger (Screen-Space).
pub fn closest_vertex(
    object: &SceneObject,
    camera: &OrbitCamera,
    viewport: Vec2,
    pointer: Vec2,
    radius_px: f32,
) -> Option<VertexHit> {
    let points = project_vertices(object, camera, viewport);
    nearest_screen_point(&points, pointer, radius_px)
}

/// Ergebnis der Kanten-Suche.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeHit {
    /// Kleinerer Vertex-Index
    pub a: u32,
    /// Größerer Vertex-Index
    pub b: u32,
    /// Summe der Zeiger-Endpunkt-Abstände in Pixeln
    pub score_px: f32,
}

/// Nächste Kante eines Objekts zum Zeiger (Screen-Space).
///
/// Bewertet wird `|q-p1| + |q-p2|`; eine Kante kommt nur in Frage, wenn diese
/// Summe höchstens `slack_px` über ihrer eigenen Screen-Länge liegt.
pub fn closest_edge(
    object: &SceneObject,
    camera: &OrbitCamera,
    viewport: Vec2,
    pointer: Vec2,
    slack_px: f32,
) -> Option<EdgeHit> {
    let points = project_vertices(object, camera, viewport);
    let mut best: Option<EdgeHit> = None;

    for [i0, i1, i2] in object.mesh.triangles_iter() {
        for (a, b) in [(i0, i1), (i1, i2), (i2, i0)] {
            let (Some(p1), Some(p2)) = (points[a as usize], points[b as usize]) else {
                continue;
            };
            let score_px = pointer.distance(p1) + pointer.distance(p2);
            if score_px > p1.distance(p2) + slack_px {
                continue;
            }
            if best.as_ref().is_none_or(|hit| score_px < hit.score_px) {
                best = Some(EdgeHit {
                    a: a.min(b),
                    b: a.max(b),
                    score_px,
                });
            }
        }
    }

    best
}
