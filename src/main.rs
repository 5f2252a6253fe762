//! Bézier Path Editor (Headless-Demo).
//!
//! Baut einen Beispielpfad über die Editing-Surface auf und protokolliert
//! die resultierende Szene. Ein grafischer Host ruft dieselben Intents auf.

use bezier_path_editor::{PathEditor, PathEditorOptions, PathHandle, PathIntent, TangentSide};
use glam::Vec3;

fn main() -> anyhow::Result<()> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Bezier Path Editor v{} startet...", env!("CARGO_PKG_VERSION"));

        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = PathEditorOptions::config_path();
        let options = PathEditorOptions::load_from_file(&config_path);

        let mut editor = PathEditor::new(Vec3::ZERO, options);
        for intent in demo_intents() {
            let outcome = editor.handle_intent(intent.clone())?;
            log::debug!("{:?} → {:?}", intent, outcome);
        }

        let scene = editor.build_scene();
        log::info!(
            "{} Kontrollpunkte, {} Segmente, Länge {:.2}",
            editor.path().num_control_points(),
            scene.segments.len(),
            scene.total_length()
        );
        for (i, segment) in scene.segments.iter().enumerate() {
            let [p0, p1, p2, p3] = segment.bezier;
            log::info!("Segment {}: {} | {} | {} | {}", i, p0, p1, p2, p3);
        }
        Ok(())
    }
}

/// Beispiel-Sitzung: Punkte anhängen, Handles ziehen, Pfad schließen.
fn demo_intents() -> Vec<PathIntent> {
    vec![
        PathIntent::HandleMoved {
            index: 1,
            handle: PathHandle::Position,
            world_pos: Vec3::new(6.0, 0.0, 0.0),
        },
        PathIntent::InsertRequested { index: 2 },
        PathIntent::HandleMoved {
            index: 2,
            handle: PathHandle::Position,
            world_pos: Vec3::new(6.0, 0.0, 6.0),
        },
        PathIntent::HandleMoved {
            index: 1,
            handle: PathHandle::Tangent(TangentSide::Front),
            world_pos: Vec3::new(8.0, 0.0, 2.0),
        },
        PathIntent::HandleMoved {
            index: 1,
            handle: PathHandle::Tangent(TangentSide::Back),
            world_pos: Vec3::new(4.0, 0.0, -2.0),
        },
        PathIntent::LoopChanged { closed: true },
    ]
}
