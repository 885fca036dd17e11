//! Tastenkürzel → Intents.

use super::AppIntent;
use crate::core::EditorMode;
use std::str::FromStr;

/// Taste ohne Modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Delete,
    Escape,
}

/// Tastendruck mit Modifiern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    pub key: Key,
    pub ctrl: bool,
    pub shift: bool,
}

impl KeyInput {
    /// Tastendruck ohne Ctrl und Shift.
    pub fn plain(key: Key) -> Self {
        Self {
            key,
            ctrl: false,
            shift: false,
        }
    }
}

impl FromStr for KeyInput {
    type Err = anyhow::Error;

    /// Parst Kombinationen wie `ctrl+z`, `ctrl+shift+z`, `delete`, `e`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut ctrl = false;
        let mut shift = false;
        let mut key = None;

        for part in s.split('+').map(|p| p.trim().to_ascii_lowercase()) {
            match part.as_str() {
                "ctrl" | "control" | "cmd" => ctrl = true,
                "shift" => shift = true,
                "delete" | "del" => key = Some(Key::Delete),
                "escape" | "esc" => key = Some(Key::Escape),
                other => {
                    let mut chars = other.chars();
                    match (chars.next(), chars.next()) {
                        (Some(c), None) => key = Some(Key::Char(c)),
                        _ => anyhow::bail!("Unbekannte Taste: {}", other),
                    }
                }
            }
        }

        let key = key.ok_or_else(|| anyhow::anyhow!("Keine Taste in '{}'", s))?;
        Ok(Self {
            ctrl,
            shift,
            ..Self::plain(key)
        })
    }
}

/// Übersetzt einen Tastendruck in einen Intent.
pub fn map_key(input: KeyInput) -> Option<AppIntent> {
    let intent = match (input.key, input.ctrl, input.shift) {
        (Key::Char(c), true, shift) => match (c.to_ascii_lowercase(), shift) {
            ('z', false) => AppIntent::UndoRequested,
            ('z', true) | ('y', false) => AppIntent::RedoRequested,
            _ => return None,
        },
        (Key::Delete, false, _) => AppIntent::DeleteSelectedRequested,
        (Key::Escape, false, _) => AppIntent::DeselectAllRequested,
        (Key::Char(c), false, _) => {
            let mode = match c.to_ascii_lowercase() {
                'n' => EditorMode::Navigate,
                's' => EditorMode::Select,
                't' => EditorMode::Translate,
                'v' => EditorMode::SelectVertex,
                'e' => EditorMode::SelectEdge,
                'f' => EditorMode::SelectFace,
                _ => return None,
            };
            AppIntent::ModeToggleRequested { mode }
        }
        _ => return None,
    };
    Some(intent)
}
