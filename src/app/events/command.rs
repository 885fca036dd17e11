use super::intent::{PointerButton, PointerKind};
use crate::core::{EditorMode, ObjectId, PrimitiveKind};
use crate::shared::EditorOptions;
use glam::Vec2;
use std::path::PathBuf;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    // === Modi ===
    /// Modus umschalten (inkl. Drag-Freigabe und Kamera-Steuerung)
    ToggleMode { mode: EditorMode },

    // === Selektion ===
    /// Mesh-Selektion eines getroffenen Objekts umschalten
    ToggleMeshSelection { object: ObjectId },
    /// Nächsten Vertex zum Zeiger umschalten
    SelectVertexNear { object: ObjectId, pointer: Vec2 },
    /// Nächste Kante zum Zeiger umschalten
    SelectEdgeNear { object: ObjectId, pointer: Vec2 },
    /// Getroffenes Face umschalten
    ToggleFaceSelection { object: ObjectId, face_index: u32 },
    /// Alle Selektionen aufheben
    ClearSelection,

    // === Verschieben ===
    /// Verschieben eines selektierten Meshes beginnen
    BeginDrag { object: ObjectId, pointer: Vec2 },
    /// Verschiebung nachführen
    UpdateDrag { pointer: Vec2 },
    /// Verschieben beenden (zeichnet Undo-Aktion auf)
    EndDrag,

    // === Kamera & Viewport ===
    /// Kamera-Rotation beginnen
    BeginOrbit { pointer: Vec2 },
    /// Kamera-Rotation nachführen
    OrbitCamera { pointer: Vec2 },
    /// Kamera-Rotation beenden
    EndOrbit,
    /// Kamera auf Standard zurücksetzen
    ResetCamera,
    /// Viewport-Größe setzen
    SetViewportSize { size: Vec2 },
    /// Grid-Chunks um das Kameraziel aktualisieren
    UpdateGrid,

    // === Zeiger & Kontextmenü ===
    /// Gedrückten Zeiger merken
    PressPointer {
        pos: Vec2,
        button: PointerButton,
        kind: PointerKind,
        time_ms: u64,
    },
    /// Gedrückten Zeiger vergessen
    ReleasePointer,
    /// Long-Press-Timer scharf schalten (ersetzt einen laufenden)
    StartLongPress { origin: Vec2, time_ms: u64 },
    /// Long-Press-Timer verwerfen
    CancelLongPress,
    /// Fälligen Long-Press auslösen (öffnet Kontextmenü)
    FireDueLongPress { time_ms: u64 },
    /// Kontextmenü schließen (erste Anfrage nach dem Öffnen wird verschluckt)
    DismissContextMenu,

    // === Bearbeitung ===
    /// Primitiv erzeugen (zeichnet Undo-Aktion auf)
    CreatePrimitive { kind: PrimitiveKind },
    /// Selektierte Meshes löschen (zeichnet Undo-Aktion auf)
    DeleteSelected,

    // === History ===
    /// Undo ausführen
    Undo,
    /// Redo ausführen
    Redo,

    // === Datei-I/O ===
    /// Szene importieren
    ImportScene { path: PathBuf },
    /// Szene exportieren
    ExportScene { path: PathBuf },

    // === Optionen ===
    /// Vertex-Pick-Radius setzen
    SetVertexPickRadius { radius_px: f32 },
    /// Optionen übernehmen
    ApplyOptions { options: Box<EditorOptions> },
}
