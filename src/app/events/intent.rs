use crate::core::{EditorMode, PrimitiveKind};
use crate::shared::EditorOptions;
use glam::Vec2;
use std::path::PathBuf;

/// Maustaste bzw. Touch-Kontakt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerButton {
    #[default]
    Primary,
    Secondary,
    Middle,
}

/// Art des Eingabegeräts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerKind {
    #[default]
    Mouse,
    Touch,
    Pen,
}

/// App-Intents: Eingaben aus UI/System ohne direkte Mutationslogik.
///
/// Zeitstempel sind Millisekunden einer monotonen Host-Uhr.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Toolbar-Modus umschalten
    ModeToggleRequested { mode: EditorMode },
    /// Zeiger gedrückt (Screen-Pixel, y nach unten)
    PointerDown {
        pos: Vec2,
        button: PointerButton,
        kind: PointerKind,
        time_ms: u64,
    },
    /// Zeiger bewegt
    PointerMove { pos: Vec2, time_ms: u64 },
    /// Zeiger losgelassen
    PointerUp {
        pos: Vec2,
        button: PointerButton,
        kind: PointerKind,
        time_ms: u64,
    },
    /// Frame-Takt des Hosts (Timer, Grid-Update)
    FrameTick { time_ms: u64 },
    /// Viewport-Größe geändert
    ViewportResized { size: Vec2 },
    /// Primitiv im Ursprung erzeugen (Toolbar / Kontextmenü)
    CreatePrimitiveRequested { kind: PrimitiveKind },
    /// Alle selektierten Meshes löschen
    DeleteSelectedRequested,
    /// Alle Selektionen aufheben
    DeselectAllRequested,
    /// Undo ausführen
    UndoRequested,
    /// Redo ausführen
    RedoRequested,
    /// Szene aus Datei importieren
    ImportRequested { path: PathBuf },
    /// Szene in Datei exportieren
    ExportRequested { path: PathBuf },
    /// Kontextmenü schließen (Klick außerhalb)
    ContextMenuDismissRequested,
    /// Vertex-Pick-Radius geändert
    VertexPickRadiusChanged { radius_px: f32 },
    /// Optionen wurden geändert (sofortige Anwendung)
    OptionsChanged { options: EditorOptions },
    /// Kamera auf Standard zurücksetzen
    ResetCameraRequested,
}
