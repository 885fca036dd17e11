//! Interaktionsmodi und Modus-Menge mit exklusiver Selektionsfamilie.

use indexmap::IndexSet;
use std::fmt;
use std::str::FromStr;

/// Ein einzelner Interaktionsmodus (Toolbar-Schalter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorMode {
    /// Kamera-Navigation (Orbit)
    Navigate,
    /// Ganze Meshes selektieren
    Select,
    /// Selektierte Meshes per Drag verschieben
    Translate,
    /// Einzelne Vertices selektieren
    SelectVertex,
    /// Einzelne Kanten selektieren
    SelectEdge,
    /// Einzelne Faces selektieren
    SelectFace,
}

impl EditorMode {
    /// Alle Modi in Toolbar-Reihenfolge.
    pub const ALL: [EditorMode; 6] = [
        EditorMode::Navigate,
        EditorMode::Select,
        EditorMode::Translate,
        EditorMode::SelectVertex,
        EditorMode::SelectEdge,
        EditorMode::SelectFace,
    ];

    /// Gehört der Modus zur gegenseitig exklusiven Selektionsfamilie?
    pub fn is_selection_family(self) -> bool {
        matches!(
            self,
            EditorMode::Select
                | EditorMode::SelectVertex
                | EditorMode::SelectEdge
                | EditorMode::SelectFace
        )
    }

    /// Stabiler Tag-Name (Toolbar-ID).
    pub fn tag(self) -> &'static str {
        match self {
            EditorMode::Navigate => "navigate",
            EditorMode::Select => "select",
            EditorMode::Translate => "translate",
            EditorMode::SelectVertex => "select-vertex",
            EditorMode::SelectEdge => "select-edge",
            EditorMode::SelectFace => "select-face",
        }
    }
}

impl fmt::Display for EditorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for EditorMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EditorMode::ALL
            .into_iter()
            .find(|mode| mode.tag() == s)
            .ok_or_else(|| anyhow::anyhow!("Unbekannter Modus: {s}"))
    }
}

/// Ergebnis eines `ModeSet::toggle`-Aufrufs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeToggle {
    /// Ob der umgeschaltete Modus danach aktiv ist
    pub now_active: bool,
    /// Geschwister-Modi der Selektionsfamilie, die dabei entfernt wurden
    pub removed_siblings: Vec<EditorMode>,
}

/// Menge der aktiven Modi.
///
/// Invariante: höchstens ein Modus der Selektionsfamilie ist aktiv.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeSet {
    active: IndexSet<EditorMode>,
}

impl Default for ModeSet {
    fn default() -> Self {
        Self::new()
    }
}

impl ModeSet {
    /// Startzustand: nur `navigate` aktiv.
    pub fn new() -> Self {
        let mut active = IndexSet::new();
        active.insert(EditorMode::Navigate);
        Self { active }
    }

    /// Schaltet einen Modus um.
    ///
    /// Für Modi der Selektionsfamilie werden zuerst alle *anderen*
    /// Familienmitglieder entfernt, auch wenn `mode` selbst gerade
    /// ausgeschaltet wird.
    pub fn toggle(&mut self, mode: EditorMode) -> ModeToggle {
        let mut removed_siblings = Vec::new();
        if mode.is_selection_family() {
            let siblings: Vec<EditorMode> = self
                .active
                .iter()
                .copied()
                .filter(|m| *m != mode && m.is_selection_family())
                .collect();
            for sibling in siblings {
                self.active.shift_remove(&sibling);
                removed_siblings.push(sibling);
            }
        }

        let now_active = if self.active.shift_remove(&mode) {
            false
        } else {
            self.active.insert(mode);
            true
        };

        ModeToggle {
            now_active,
            removed_siblings,
        }
    }

    /// Prüft ob ein Modus aktiv ist.
    pub fn contains(&self, mode: EditorMode) -> bool {
        self.active.contains(&mode)
    }

    /// Aktive Modi in Aktivierungsreihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = EditorMode> + '_ {
        self.active.iter().copied()
    }

    /// Anzahl aktiver Modi.
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Gibt `true` zurück, wenn kein Modus aktiv ist.
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Der aktive Modus der Selektionsfamilie (falls vorhanden).
    pub fn active_selection_mode(&self) -> Option<EditorMode> {
        self.iter().find(|m| m.is_selection_family())
    }

    /// Vergleich als ungeordnete Menge.
    pub fn same_modes(&self, other: &ModeSet) -> bool {
        self.len() == other.len() && self.iter().all(|m| other.contains(m))
    }
}
