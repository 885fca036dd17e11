//! Scene Editor — Headless-Treiber.
//!
//! Liest ein Zeilenskript (Datei oder stdin), leitet jede Zeile als Intents an
//! den Controller und gibt nach jedem Undo/Redo die Statuszeile aus.

use anyhow::Context;
use glam::Vec2;
use scene_editor::{
    AppController, AppIntent, AppState, EditorOptions, ScriptParser, ScriptStep, TomlSceneCodec,
};
use std::fs::File;
use std::io::{BufRead, BufReader};

/// Viewport-Größe bis zum ersten `viewport`-Befehl
const DEFAULT_VIEWPORT: Vec2 = Vec2::new(1280.0, 720.0);

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Scene Editor v{} startet...", env!("CARGO_PKG_VERSION"));

    // Optionen aus TOML laden (oder Standardwerte)
    let config_path = EditorOptions::config_path();
    let options = EditorOptions::load_from_file(&config_path);

    let mut state = AppState::with_options(options);
    let mut controller = AppController::with_codec(Box::new(TomlSceneCodec));
    controller.set_post_action_hook(|snapshot| println!("{}", snapshot.status_line));
    controller.handle_intent(
        &mut state,
        AppIntent::ViewportResized {
            size: DEFAULT_VIEWPORT,
        },
    )?;

    let reader: Box<dyn BufRead> = match std::env::args_os().nth(1) {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("Skript {} nicht lesbar", path.to_string_lossy()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(std::io::stdin())),
    };

    run_script(&mut controller, &mut state, reader)
}

/// Führt alle Skriptzeilen aus. Fehlerhafte Zeilen werden geloggt und übersprungen.
fn run_script(
    controller: &mut AppController,
    state: &mut AppState,
    reader: impl BufRead,
) -> anyhow::Result<()> {
    let mut parser = ScriptParser::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line.context("Skript konnte nicht gelesen werden")?;
        let line_no = index + 1;

        let step = match parser.parse_line(&line) {
            Ok(Some(step)) => step,
            Ok(None) => continue,
            Err(e) => {
                log::error!("Zeile {}: {:#}", line_no, e);
                continue;
            }
        };

        match step {
            ScriptStep::PrintStatus => println!("{}", state.status_line()),
            ScriptStep::Intents(intents) => {
                for intent in intents {
                    if let Err(e) = controller.handle_intent(state, intent) {
                        log::error!("Zeile {}: {:#}", line_no, e);
                    }
                }
            }
        }
    }

    log::info!("Skript beendet: {}", state.status_line());
    Ok(())
}
