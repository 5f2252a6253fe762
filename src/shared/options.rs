//! Zentrale Konfiguration für den Bézier-Pfad-Editor.
//!
//! `PathEditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use anyhow::Context;
use glam::Vec3;
use serde::{Deserialize, Serialize};

// ── Handles ─────────────────────────────────────────────────────────

/// Größe der Positions-Handles in Welteinheiten.
pub const POSITION_HANDLE_SIZE: f32 = 0.6;
/// Größe der Tangenten-Handles in Welteinheiten.
pub const TANGENT_HANDLE_SIZE: f32 = 0.4;

// ── Topologie ───────────────────────────────────────────────────────

/// Mindestanzahl Kontrollpunkte, unter die der Editor nicht löscht.
pub const MIN_CONTROL_POINTS: usize = 2;

// ── Kurven-Abtastung ────────────────────────────────────────────────

/// Anzahl Abtast-Intervalle pro Bézier-Segment.
pub const SAMPLES_PER_SEGMENT: usize = 16;

/// Dateiname der Optionen-Datei neben der Binary.
const CONFIG_FILE_NAME: &str = "bezier_path_editor.toml";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `bezier_path_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PathEditorOptions {
    // ── Host-Flags ──────────────────────────────────────────────
    /// Pfad schließen (letzter Punkt → erster Punkt)
    pub close_loop: bool,
    /// Top-Down-Modus: alle Punkte vor der Ausgabe auf y = 0 projizieren
    pub top_down: bool,

    // ── Handles ─────────────────────────────────────────────────
    /// Größe der Positions-Handles
    pub position_handle_size: f32,
    /// Größe der Tangenten-Handles
    pub tangent_handle_size: f32,
    /// Versatz eines neu eingefügten Punkts relativ zum angeklickten Punkt
    pub insert_offset: Vec3,

    // ── Topologie ───────────────────────────────────────────────
    /// Löschungen unter diese Anzahl werden abgelehnt
    pub min_control_points: usize,

    // ── Kurven ──────────────────────────────────────────────────
    /// Abtast-Intervalle pro Segment für die Polyline-Vorschau
    pub samples_per_segment: usize,
}

impl Default for PathEditorOptions {
    fn default() -> Self {
        Self {
            close_loop: false,
            top_down: false,

            position_handle_size: POSITION_HANDLE_SIZE,
            tangent_handle_size: TANGENT_HANDLE_SIZE,
            insert_offset: Vec3::new(POSITION_HANDLE_SIZE, 0.0, 0.0),

            min_control_points: MIN_CONTROL_POINTS,

            samples_per_segment: SAMPLES_PER_SEGMENT,
        }
    }
}

impl PathEditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Pfad-Editor-Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!(
                        "{} fehlerhaft, verwende Standard-Pfad-Optionen: {}",
                        path.display(),
                        e
                    );
                    Self::default()
                }
            },
            Err(_) => {
                log::info!(
                    "Keine {} gefunden, verwende Standard-Pfad-Optionen",
                    CONFIG_FILE_NAME
                );
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self).context("Optionen nicht serialisierbar")?;
        std::fs::write(path, content)
            .with_context(|| format!("Schreiben fehlgeschlagen: {}", path.display()))?;
        log::info!("Pfad-Editor-Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("bezier_path_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join(CONFIG_FILE_NAME)
    }
}
