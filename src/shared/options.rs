//! Zentrale Konfiguration für den Szeneneditor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Selektion ───────────────────────────────────────────────────────

/// Pick-Radius für die Vertex-Selektion in Screen-Pixeln.
pub const VERTEX_PICK_RADIUS_PX: f32 = 100.0;
/// Toleranz (Pixel) zwischen Endpunkt-Distanzsumme und Kantenlänge bei der Kanten-Selektion.
pub const EDGE_PICK_SLACK_PX: f32 = 10.0;

// ── Highlights ──────────────────────────────────────────────────────

/// Highlight-Farbe selektierter Meshes (RGBA: Grün).
pub const HIGHLIGHT_COLOR_MESH: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
/// Marker-Farbe selektierter Vertices (RGBA: Gelb).
pub const HIGHLIGHT_COLOR_VERTEX: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
/// Marker-Farbe selektierter Kanten (RGBA: Orange).
pub const HIGHLIGHT_COLOR_EDGE: [f32; 4] = [1.0, 0.5, 0.1, 1.0];
/// Marker-Farbe selektierter Faces (RGBA: Cyan).
pub const HIGHLIGHT_COLOR_FACE: [f32; 4] = [0.0, 0.8, 1.0, 1.0];

// ── Eingabe ─────────────────────────────────────────────────────────

/// Dauer bis ein Long-Press das Kontextmenü öffnet (Millisekunden).
pub const LONG_PRESS_MS: u64 = 500;
/// Bewegung (Pixel), ab der ein Long-Press als Drag gilt und verworfen wird.
pub const LONG_PRESS_MOVE_TOLERANCE_PX: f32 = 10.0;
/// Orbit-Empfindlichkeit der Kamera (Radiant pro Pixel).
pub const ORBIT_SENSITIVITY: f32 = 0.005;

// ── Kamera ──────────────────────────────────────────────────────────

/// Horizontaler Startwinkel der Orbit-Kamera.
pub const CAMERA_ALPHA: f32 = -std::f32::consts::FRAC_PI_2;
/// Vertikaler Startwinkel der Orbit-Kamera.
pub const CAMERA_BETA: f32 = std::f32::consts::PI / 2.5;
/// Startabstand der Kamera zum Ziel.
pub const CAMERA_RADIUS: f32 = 15.0;
/// Minimaler Abstand der Kamera zum Ziel.
pub const CAMERA_LOWER_RADIUS_LIMIT: f32 = 1.0;
/// Vertikales Sichtfeld (Radiant).
pub const CAMERA_FOV: f32 = 0.8;

// ── Hilfsgeometrie ─────────────────────────────────────────────────

/// Kantenlänge eines Grid-Chunks in Welteinheiten.
pub const GRID_CHUNK_SIZE: f32 = 10.0;
/// Unterteilungen pro Chunk, nach Entfernung zum Kameraziel gestaffelt.
pub const GRID_LOD_LEVELS: [u32; 4] = [1, 2, 4, 8];
/// Anzahl Chunks in jede Richtung um das Kameraziel.
pub const GRID_RENDER_DISTANCE: i32 = 2;
/// Gesamtlänge der Achsenlinien.
pub const AXES_SIZE: f32 = 100.0;

// ── History ─────────────────────────────────────────────────────────

/// Maximale Anzahl Undo-Schritte.
pub const HISTORY_DEPTH: usize = 200;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `scene_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Selektion ───────────────────────────────────────────────
    /// Pick-Radius für Vertex-Selektion in Screen-Pixeln
    pub vertex_pick_radius_px: f32,
    /// Kanten-Toleranz in Screen-Pixeln
    pub edge_pick_slack_px: f32,

    // ── Highlights ──────────────────────────────────────────────
    /// Highlight-Farbe selektierter Meshes
    pub highlight_color_mesh: [f32; 4],
    /// Marker-Farbe selektierter Vertices
    pub highlight_color_vertex: [f32; 4],
    /// Marker-Farbe selektierter Kanten
    pub highlight_color_edge: [f32; 4],
    /// Marker-Farbe selektierter Faces
    pub highlight_color_face: [f32; 4],

    // ── Eingabe ─────────────────────────────────────────────────
    /// Long-Press-Dauer in Millisekunden
    pub long_press_ms: u64,
    /// Bewegungstoleranz für Long-Press in Pixeln
    pub long_press_move_tolerance_px: f32,
    /// Orbit-Empfindlichkeit (Radiant pro Pixel)
    pub orbit_sensitivity: f32,

    // ── Kamera ──────────────────────────────────────────────────
    /// Horizontaler Startwinkel
    pub camera_alpha: f32,
    /// Vertikaler Startwinkel
    pub camera_beta: f32,
    /// Startabstand zum Ziel
    pub camera_radius: f32,
    /// Minimaler Abstand zum Ziel
    pub camera_lower_radius_limit: f32,
    /// Vertikales Sichtfeld (Radiant)
    pub camera_fov: f32,

    // ── Grid & Achsen ───────────────────────────────────────────
    /// Kantenlänge eines Grid-Chunks
    pub grid_chunk_size: f32,
    /// LOD-Stufen (Unterteilungen pro Chunk)
    pub grid_lod_levels: Vec<u32>,
    /// Chunk-Sichtweite um das Kameraziel
    pub grid_render_distance: i32,
    /// Gesamtlänge der Achsenlinien
    pub axes_size: f32,

    // ── History ─────────────────────────────────────────────────
    /// Maximale Undo-Tiefe
    pub history_depth: usize,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            vertex_pick_radius_px: VERTEX_PICK_RADIUS_PX,
            edge_pick_slack_px: EDGE_PICK_SLACK_PX,

            highlight_color_mesh: HIGHLIGHT_COLOR_MESH,
            highlight_color_vertex: HIGHLIGHT_COLOR_VERTEX,
            highlight_color_edge: HIGHLIGHT_COLOR_EDGE,
            highlight_color_face: HIGHLIGHT_COLOR_FACE,

            long_press_ms: LONG_PRESS_MS,
            long_press_move_tolerance_px: LONG_PRESS_MOVE_TOLERANCE_PX,
            orbit_sensitivity: ORBIT_SENSITIVITY,

            camera_alpha: CAMERA_ALPHA,
            camera_beta: CAMERA_BETA,
            camera_radius: CAMERA_RADIUS,
            camera_lower_radius_limit: CAMERA_LOWER_RADIUS_LIMIT,
            camera_fov: CAMERA_FOV,

            grid_chunk_size: GRID_CHUNK_SIZE,
            grid_lod_levels: GRID_LOD_LEVELS.to_vec(),
            grid_render_distance: GRID_RENDER_DISTANCE,
            axes_size: AXES_SIZE,

            history_depth: HISTORY_DEPTH,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("scene_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("scene_editor.toml")
    }

    /// LOD-Stufe (Unterteilungen) für einen Chunk-Abstand.
    ///
    /// Index = `floor(distance)`, begrenzt auf die letzte Stufe.
    pub fn grid_lod_for_distance(&self, distance: f32) -> u32 {
        let Some(&last) = self.grid_lod_levels.last() else {
            return 1;
        };
        let index = distance.max(0.0).floor() as usize;
        self.grid_lod_levels.get(index).copied().unwrap_or(last)
    }
}
