use crate::app::events::{PointerButton, PointerKind};
use crate::core::ObjectId;
use glam::{Vec2, Vec3};

/// Aktuell gedrückter Zeiger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPress {
    pub pos: Vec2,
    pub button: PointerButton,
    pub kind: PointerKind,
    pub time_ms: u64,
}

/// Laufende Verschiebung eines Objekts in seiner Drag-Ebene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragGesture {
    pub object: ObjectId,
    /// Position beim Drag-Start (für die Undo-Aktion)
    pub start_position: Vec3,
    /// Objektposition minus Ebenen-Treffpunkt beim Start
    pub grab_offset: Vec3,
    pub plane_normal: Vec3,
}

/// Scharfgeschalteter Long-Press-Timer (höchstens einer).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingLongPress {
    pub origin: Vec2,
    pub deadline_ms: u64,
}

/// Zustand der laufenden Zeiger-Geste.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub press: Option<PointerPress>,
    pub drag: Option<DragGesture>,
    /// Letzte Zeigerposition einer laufenden Kamera-Rotation
    pub orbit_last: Option<Vec2>,
    pub long_press: Option<PendingLongPress>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gibt `true` zurück, solange ein Objekt verschoben wird.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }
}
