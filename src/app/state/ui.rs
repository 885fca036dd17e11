use glam::Vec2;

/// Zustand des Kontextmenüs.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ContextMenuState {
    /// Screen-Position, an der das Menü offen ist
    pub open_at: Option<Vec2>,
    /// Die nächste Schließen-Anfrage wird verschluckt (Loslassen nach dem Öffnen)
    pub swallow_next_dismiss: bool,
}

impl ContextMenuState {
    pub fn is_open(&self) -> bool {
        self.open_at.is_some()
    }
}

/// UI-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub context_menu: ContextMenuState,
    /// Letzte Meldung für die Statusleiste (z.B. fehlgeschlagener Import)
    pub status_message: Option<String>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }
}
