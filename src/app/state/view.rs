use crate::core::{GridChunks, ObjectId, OrbitCamera};
use glam::Vec2;

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Orbit-Kamera
    pub camera: OrbitCamera,
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: Vec2,
    /// Sichtbare Grid-Chunks um das Kameraziel
    pub grid: GridChunks,
    /// Achsen-Hilfsobjekte (X, Z)
    pub axes: Option<[ObjectId; 2]>,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new(camera: OrbitCamera) -> Self {
        Self {
            camera,
            viewport_size: Vec2::ZERO,
            grid: GridChunks::new(),
            axes: None,
        }
    }

    /// Gibt `true` zurück, wenn der Viewport eine Fläche hat.
    pub fn has_viewport(&self) -> bool {
        self.viewport_size.x > 0.0 && self.viewport_size.y > 0.0
    }
}
