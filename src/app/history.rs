//! Undo/Redo-Aktionslog mit zwei Stacks.
//!
//! Jede Aktion beschreibt eine umkehrbare Bearbeitung. Die Umkehrung wird
//! gegen ein [`ActionTarget`] ausgeführt (Fabrik + Entsorgung), damit das Log
//! nicht an eine konkrete Szenen-Implementierung gebunden ist.

use crate::core::{ObjectId, PrimitiveKind, Scene, SceneObject};
use glam::Vec3;

/// Eine umkehrbare Bearbeitung.
#[derive(Debug, Clone, PartialEq)]
pub enum EditAction {
    /// Objekt über eine Primitiv-Fabrik erzeugt
    Creation { object: ObjectId, kind: PrimitiveKind },
    /// Objekte gelöscht (vollständige Kopien für die Wiederherstellung)
    Deletion { objects: Vec<SceneObject> },
    /// Objekt verschoben
    Translation { object: ObjectId, from: Vec3, to: Vec3 },
}

impl EditAction {
    /// Kurzbezeichnung für Logs und Statusanzeige.
    pub fn label(&self) -> &'static str {
        match self {
            EditAction::Creation { .. } => "Erzeugen",
            EditAction::Deletion { .. } => "Löschen",
            EditAction::Translation { .. } => "Verschieben",
        }
    }

    /// Ersetzt Referenzen auf `old` durch `new`.
    fn remap_object(&mut self, old: ObjectId, new: ObjectId) {
        match self {
            EditAction::Creation { object, .. } | EditAction::Translation { object, .. } => {
                if *object == old {
                    *object = new;
                }
            }
            EditAction::Deletion { objects } => {
                for snapshot in objects.iter_mut().filter(|o| o.id == old) {
                    snapshot.id = new;
                }
            }
        }
    }
}

/// Fähigkeiten, die das Log zum Anwenden und Umkehren von Aktionen braucht.
pub trait ActionTarget {
    /// Erzeugt eine neue Instanz eines Primitivs (Fabrik-Callback).
    fn spawn(&mut self, kind: PrimitiveKind) -> ObjectId;
    /// Entfernt ein Objekt und gibt es zurück.
    fn dispose(&mut self, id: ObjectId) -> Option<SceneObject>;
    /// Setzt ein entferntes Objekt mit seiner Identität wieder ein.
    fn restore(&mut self, object: SceneObject) -> bool;
    /// Setzt die Welt-Position eines Objekts.
    fn set_position(&mut self, id: ObjectId, position: Vec3) -> bool;
}

impl ActionTarget for Scene {
    fn spawn(&mut self, kind: PrimitiveKind) -> ObjectId {
        self.spawn_primitive(kind)
    }

    fn dispose(&mut self, id: ObjectId) -> Option<SceneObject> {
        Scene::dispose(self, id)
    }

    fn restore(&mut self, object: SceneObject) -> bool {
        Scene::restore(self, object)
    }

    fn set_position(&mut self, id: ObjectId, position: Vec3) -> bool {
        Scene::set_position(self, id, position)
    }
}

/// Lineare Undo/Redo-History.
///
/// Invariante: eine neu aufgezeichnete Aktion leert den Redo-Stack.
#[derive(Debug, Clone, Default)]
pub struct ActionLog {
    undo_stack: Vec<EditAction>,
    redo_stack: Vec<EditAction>,
    max_depth: usize,
}

impl ActionLog {
    /// Erstellt ein Log mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        let max_depth = max_depth.max(1);
        Self {
            undo_stack: Vec::with_capacity(max_depth.min(64)),
            redo_stack: Vec::new(),
            max_depth,
        }
    }

    /// Ändert die maximale Tiefe; überzählige älteste Einträge werden verworfen.
    pub fn set_max_depth(&mut self, max_depth: usize) {
        self.max_depth = max_depth.max(1);
        Self::trim(&mut self.undo_stack, self.max_depth);
        Self::trim(&mut self.redo_stack, self.max_depth);
    }

    fn trim(stack: &mut Vec<EditAction>, max_depth: usize) {
        if stack.len() > max_depth {
            let excess = stack.len() - max_depth;
            stack.drain(..excess);
        }
    }

    fn push_bounded(stack: &mut Vec<EditAction>, action: EditAction, max_depth: usize) {
        if stack.len() >= max_depth {
            stack.remove(0);
        }
        stack.push(action);
    }

    /// Zeichnet eine ausgeführte Aktion auf und verwirft die Redo-History.
    pub fn record(&mut self, action: EditAction) {
        log::debug!("Aktion aufgezeichnet: {}", action.label());
        Self::push_bounded(&mut self.undo_stack, action, self.max_depth);
        self.redo_stack.clear();
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Anzahl rückgängig machbarer Aktionen.
    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    /// Anzahl wiederholbarer Aktionen.
    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// Oberste Aktion des Undo-Stacks.
    pub fn peek_undo(&self) -> Option<&EditAction> {
        self.undo_stack.last()
    }

    /// Oberste Aktion des Redo-Stacks.
    pub fn peek_redo(&self) -> Option<&EditAction> {
        self.redo_stack.last()
    }

    /// Macht die letzte Aktion rückgängig.
    ///
    /// Leerer Stack: No-op, gibt `None` zurück.
    pub fn undo<T: ActionTarget + ?Sized>(&mut self, target: &mut T) -> Option<&EditAction> {
        let mut action = self.undo_stack.pop()?;

        match &mut action {
            EditAction::Creation { object, .. } => {
                if target.dispose(*object).is_none() {
                    log::warn!("Undo: erzeugtes Objekt {} existiert nicht mehr", object);
                }
            }
            EditAction::Deletion { objects } => {
                for snapshot in objects.iter() {
                    target.restore(snapshot.clone());
                }
            }
            EditAction::Translation { object, from, .. } => {
                if !target.set_position(*object, *from) {
                    log::warn!("Undo: verschobenes Objekt {} existiert nicht mehr", object);
                }
            }
        }

        Self::push_bounded(&mut self.redo_stack, action, self.max_depth);
        self.redo_stack.last()
    }

    /// Wendet die zuletzt rückgängig gemachte Aktion erneut an.
    ///
    /// Eine erneut ausgeführte Erzeugung liefert eine *neue* Instanz; spätere
    /// Redo-Einträge werden auf die neue ID umgeschrieben.
    pub fn redo<T: ActionTarget + ?Sized>(&mut self, target: &mut T) -> Option<&EditAction> {
        let mut action = self.redo_stack.pop()?;

        match &mut action {
            EditAction::Creation { object, kind } => {
                let old = *object;
                let new = target.spawn(*kind);
                *object = new;
                for pending in self.redo_stack.iter_mut() {
                    pending.remap_object(old, new);
                }
            }
            EditAction::Deletion { objects } => {
                for snapshot in objects.iter_mut() {
                    match target.dispose(snapshot.id) {
                        Some(current) => *snapshot = current,
                        None => log::warn!("Redo: zu löschendes Objekt {} fehlt", snapshot.id),
                    }
                }
            }
            EditAction::Translation { object, to, .. } => {
                if !target.set_position(*object, *to) {
                    log::warn!("Redo: verschobenes Objekt {} existiert nicht mehr", object);
                }
            }
        }

        Self::push_bounded(&mut self.undo_stack, action, self.max_depth);
        self.undo_stack.last()
    }
}
