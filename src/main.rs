//! Namibia Geology Viewer: Replay-Runner.
//!
//! Spielt eine JSON-Liste von `AppIntent`s gegen den Mess-/Selektionskern ab
//! und schreibt jede erzeugte Benachrichtigung als JSON-Zeile auf stdout.
//!
//! Aufruf: `nam-geology-viewer <intents.json> [source_layer=features.geojson ...]`

use anyhow::{bail, Context};
use nam_geology_viewer::{AppController, AppIntent, AppState, CatalogFeatureLocator, ViewerOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

fn main() -> anyhow::Result<()> {
    ReplayRunner::run()
}

struct ReplayRunner;

impl ReplayRunner {
    fn run() -> anyhow::Result<()> {
        // Logger initialisieren, RUST_LOG überschreibt den Info-Standard
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

        log::info!(
            "Namibia Geology Viewer v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let args = ReplayArgs::parse(std::env::args().skip(1))?;
        let options = ViewerOptions::load_from_file(&ViewerOptions::config_path());

        let mut locator = CatalogFeatureLocator::new(&options);
        for (source_layer, path) in &args.layer_files {
            let count = locator.load_layer_file(source_layer, path)?;
            log::info!("Layer {}: {} Features", source_layer, count);
        }

        let mut state = AppState::with_options(options);
        state.set_locator(Box::new(locator));

        let intents = load_intents(&args.script)?;
        let mut session = ReplaySession {
            state,
            controller: AppController::new(),
        };
        session.process_intents(intents)
    }
}

/// Kommandozeilen-Argumente des Runners
struct ReplayArgs {
    script: PathBuf,
    layer_files: Vec<(String, PathBuf)>,
}

impl ReplayArgs {
    fn parse(mut args: impl Iterator<Item = String>) -> anyhow::Result<Self> {
        let Some(script) = args.next() else {
            bail!("Aufruf: nam-geology-viewer <intents.json> [source_layer=features.geojson ...]");
        };

        let layer_files = args
            .map(|arg| -> anyhow::Result<(String, PathBuf)> {
                // Quell-Layer enthalten selbst ':' aber nie '='
                let (layer, path) = arg.rsplit_once('=').with_context(|| {
                    format!("Erwartet source_layer=datei.geojson, erhalten: {arg}")
                })?;
                Ok((layer.to_owned(), PathBuf::from(path)))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(Self {
            script: PathBuf::from(script),
            layer_files,
        })
    }
}

fn load_intents(path: &Path) -> anyhow::Result<Vec<AppIntent>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Intent-Skript nicht lesbar: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Intent-Skript fehlerhaft: {}", path.display()))
}

/// State und Controller eines Replays
struct ReplaySession {
    state: AppState,
    controller: AppController,
}

impl ReplaySession {
    fn process_intents(&mut self, intents: Vec<AppIntent>) -> anyhow::Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();

        for intent in intents {
            if let Err(e) = self.controller.handle_intent(&mut self.state, intent) {
                log::error!("Event handling failed: {:#}", e);
            }
            for event in self.state.drain_events() {
                serde_json::to_writer(&mut out, &event)?;
                writeln!(out)?;
            }
        }

        log::info!("{} Commands ausgeführt", self.state.command_log.len());
        Ok(())
    }
}
