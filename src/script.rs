//! Zeilenbasiertes Skriptformat für den Headless-Treiber.
//!
//! ```text
//! viewport 800 600
//! add cube
//! mode select      # Kommentar
//! click 400 300
//! tick 16
//! undo
//! status
//! ```

use crate::app::{map_key, AppIntent, KeyInput, PointerButton, PointerKind};
use crate::core::{EditorMode, PrimitiveKind};
use anyhow::{bail, Context};
use glam::Vec2;
use std::path::PathBuf;

/// Ergebnis einer Skriptzeile.
#[derive(Debug, Clone)]
pub enum ScriptStep {
    /// An den Controller weiterzureichende Intents
    Intents(Vec<AppIntent>),
    /// Statuszeile ausgeben
    PrintStatus,
}

/// Parser mit Skript-Uhr (Millisekunden) und letzter Zeigerart.
#[derive(Debug, Clone, Default)]
pub struct ScriptParser {
    clock_ms: u64,
    last_button: PointerButton,
    last_kind: PointerKind,
}

impl ScriptParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Aktueller Stand der Skript-Uhr.
    pub fn clock_ms(&self) -> u64 {
        self.clock_ms
    }

    /// Parst eine Zeile. Leerzeilen und Kommentare ergeben `None`.
    pub fn parse_line(&mut self, line: &str) -> anyhow::Result<Option<ScriptStep>> {
        let line = strip_comment(line).trim();
        if line.is_empty() {
            return Ok(None);
        }

        let mut words = line.split_whitespace();
        let command = words.next().unwrap_or_default().to_ascii_lowercase();
        let args: Vec<&str> = words.collect();
        let now = self.clock_ms;

        let intents = match command.as_str() {
            "status" => return Ok(Some(ScriptStep::PrintStatus)),
            "mode" => {
                let mode: EditorMode = single(&args, "mode")?.parse()?;
                vec![AppIntent::ModeToggleRequested { mode }]
            }
            "click" => {
                let pos = point(&args)?;
                vec![
                    self.down(pos, PointerButton::Primary, PointerKind::Mouse),
                    self.up(pos),
                ]
            }
            "press" => vec![self.down(point(&args)?, PointerButton::Primary, PointerKind::Mouse)],
            "touch" => vec![self.down(point(&args)?, PointerButton::Primary, PointerKind::Touch)],
            "rclick" => {
                let pos = point(&args)?;
                vec![
                    self.down(pos, PointerButton::Secondary, PointerKind::Mouse),
                    self.up(pos),
                ]
            }
            "move" => vec![AppIntent::PointerMove {
                pos: point(&args)?,
                time_ms: now,
            }],
            "release" => vec![self.up(point(&args)?)],
            "tick" => {
                let delta: u64 = single(&args, "tick")?
                    .parse()
                    .context("tick erwartet Millisekunden")?;
                self.clock_ms = self.clock_ms.saturating_add(delta);
                vec![AppIntent::FrameTick {
                    time_ms: self.clock_ms,
                }]
            }
            "viewport" => vec![AppIntent::ViewportResized { size: point(&args)? }],
            "add" => {
                let kind: PrimitiveKind = single(&args, "add")?.parse()?;
                vec![AppIntent::CreatePrimitiveRequested { kind }]
            }
            "delete" => vec![AppIntent::DeleteSelectedRequested],
            "deselect" => vec![AppIntent::DeselectAllRequested],
            "undo" => vec![AppIntent::UndoRequested],
            "redo" => vec![AppIntent::RedoRequested],
            "dismiss" => vec![AppIntent::ContextMenuDismissRequested],
            "reset-camera" => vec![AppIntent::ResetCameraRequested],
            "radius" => {
                let radius_px: f32 = single(&args, "radius")?
                    .parse()
                    .context("radius erwartet Pixel")?;
                vec![AppIntent::VertexPickRadiusChanged { radius_px }]
            }
            "import" => vec![AppIntent::ImportRequested {
                path: PathBuf::from(single(&args, "import")?),
            }],
            "export" => vec![AppIntent::ExportRequested {
                path: PathBuf::from(single(&args, "export")?),
            }],
            "key" => {
                let input: KeyInput = single(&args, "key")?.parse()?;
                match map_key(input) {
                    Some(intent) => vec![intent],
                    None => {
                        log::debug!("Taste ohne Belegung: {:?}", input);
                        Vec::new()
                    }
                }
            }
            other => bail!("Unbekannter Skriptbefehl: {}", other),
        };

        Ok(Some(ScriptStep::Intents(intents)))
    }

    fn down(&mut self, pos: Vec2, button: PointerButton, kind: PointerKind) -> AppIntent {
        self.last_button = button;
        self.last_kind = kind;
        AppIntent::PointerDown {
            pos,
            button,
            kind,
            time_ms: self.clock_ms,
        }
    }

    fn up(&self, pos: Vec2) -> AppIntent {
        AppIntent::PointerUp {
            pos,
            button: self.last_button,
            kind: self.last_kind,
            time_ms: self.clock_ms,
        }
    }
}

/// Schneidet einen Kommentar ab. `#` leitet nur am Zeilenanfang oder nach
/// Leerraum einen Kommentar ein, damit Pfade wie `a#b.toml` erhalten bleiben.
fn strip_comment(line: &str) -> &str {
    let mut previous: Option<char> = None;
    for (index, c) in line.char_indices() {
        if c == '#' && previous.map_or(true, char::is_whitespace) {
            return &line[..index];
        }
        previous = Some(c);
    }
    line
}

fn single<'a>(args: &[&'a str], command: &str) -> anyhow::Result<&'a str> {
    match args {
        [value] => Ok(value),
        _ => bail!("{} erwartet genau ein Argument", command),
    }
}

fn point(args: &[&str]) -> anyhow::Result<Vec2> {
    match args {
        [x, y] => {
            let x: f32 = x.parse().with_context(|| format!("Ungültige X-Koordinate: {}", x))?;
            let y: f32 = y.parse().with_context(|| format!("Ungültige Y-Koordinate: {}", y))?;
            Ok(Vec2::new(x, y))
        }
        _ => bail!("Erwartet zwei Koordinaten"),
    }
}
