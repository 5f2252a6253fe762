//! Editing-Surface: übersetzt Intents in Pfad-Mutationen.

use super::events::{EditOutcome, PathHandle, PathIntent};
use super::render_scene::{self, SceneOptions};
use crate::core::{Path, TangentSide};
use crate::shared::bezier::flatten_to_ground;
use crate::shared::{PathEditorOptions, PathScene};
use anyhow::Context;
use glam::Vec3;

/// Besitzt einen Pfad und die Editor-Optionen und verarbeitet Intents darauf.
#[derive(Debug, Clone)]
pub struct PathEditor {
    path: Path,
    options: PathEditorOptions,
}

impl PathEditor {
    /// Erstellt einen Editor mit neuem Zwei-Punkt-Pfad an `origin`.
    pub fn new(origin: Vec3, options: PathEditorOptions) -> Self {
        Self::from_path(Path::new(origin), options)
    }

    /// Übernimmt einen bestehenden Pfad (z.B. vom Host wiederhergestellt).
    pub fn from_path(mut path: Path, options: PathEditorOptions) -> Self {
        path.set_loop(options.close_loop);
        Self { path, options }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn options(&self) -> &PathEditorOptions {
        &self.options
    }

    /// Ersetzt die Optionen und übernimmt das Loop-Flag in den Pfad.
    pub fn set_options(&mut self, options: PathEditorOptions) {
        self.path.set_loop(options.close_loop);
        self.options = options;
    }

    /// Gibt den Pfad an den Host zurück.
    pub fn into_path(self) -> Path {
        self.path
    }

    /// Verarbeitet einen Intent. Index-Fehler aus dem Pfad werden weitergereicht.
    pub fn handle_intent(&mut self, intent: PathIntent) -> anyhow::Result<EditOutcome> {
        match intent {
            PathIntent::LoopChanged { closed } => {
                if self.path.is_loop() == closed {
                    return Ok(EditOutcome::Unchanged);
                }
                self.options.close_loop = closed;
                self.path.set_loop(closed);
                log::info!("Pfad ist jetzt {}", if closed { "geschlossen" } else { "offen" });
                Ok(EditOutcome::Applied)
            }
            PathIntent::HandleMoved {
                index,
                handle: PathHandle::Position,
                world_pos,
            } => self.move_position(index, world_pos),
            PathIntent::HandleMoved {
                index,
                handle: PathHandle::Tangent(side),
                world_pos,
            } => self.move_tangent_handle(index, side, world_pos),
            PathIntent::InsertRequested { index } => self.insert_at(index),
            PathIntent::RemoveRequested { index } => self.remove_at(index),
        }
    }

    /// Projiziert in den Top-Down-Modus, falls aktiv.
    fn project(&self, p: Vec3) -> Vec3 {
        if self.options.top_down {
            flatten_to_ground(p)
        } else {
            p
        }
    }

    fn move_position(&mut self, index: usize, world_pos: Vec3) -> anyhow::Result<EditOutcome> {
        let current = self
            .path
            .control_point(index)
            .context("Positions-Handle verschieben")?
            .position();
        let target = self.project(world_pos);
        if self.project(current) == target {
            return Ok(EditOutcome::Unchanged);
        }
        self.path.move_position_point(index, target)?;
        Ok(EditOutcome::Applied)
    }

    /// Gemeinsamer Pfad für Back- und Front-Handle: Weltposition → Offset.
    fn move_tangent_handle(
        &mut self,
        index: usize,
        side: TangentSide,
        world_pos: Vec3,
    ) -> anyhow::Result<EditOutcome> {
        let cp = *self
            .path
            .control_point(index)
            .with_context(|| format!("Tangente {:?} verschieben", side))?;
        let anchor = self.project(cp.position());
        let target = self.project(world_pos);
        if self.project(cp.tangent_world(side)) == target {
            return Ok(EditOutcome::Unchanged);
        }
        self.path.move_tangent(index, side, target - anchor)?;
        Ok(EditOutcome::Applied)
    }

    fn insert_at(&mut self, index: usize) -> anyhow::Result<EditOutcome> {
        let points = self.path.control_points();
        let anchor = points
            .get(index)
            .or_else(|| points.last())
            .map(|cp| cp.position())
            .unwrap_or(Vec3::ZERO);
        let position = self.project(anchor) + self.options.insert_offset;
        self.path
            .insert_point(index, position)
            .context("Kontrollpunkt einfügen")?;
        Ok(EditOutcome::Applied)
    }

    fn remove_at(&mut self, index: usize) -> anyhow::Result<EditOutcome> {
        // Ungültiger Index ist ein Fehler, keine Ablehnung
        self.path
            .control_point(index)
            .context("Kontrollpunkt löschen")?;
        let min = self.options.min_control_points;
        if self.path.num_control_points() <= min {
            let reason = format!(
                "Kontrollpunkt kann nicht gelöscht werden: ein Pfad braucht mindestens {} Punkte",
                min
            );
            log::warn!("{}", reason);
            return Ok(EditOutcome::Refused { reason });
        }
        self.path
            .remove_point(index)
            .context("Kontrollpunkt löschen")?;
        Ok(EditOutcome::Applied)
    }

    /// Baut die Szene mit den aktuellen Optionen (Flatten, Abtastung).
    pub fn build_scene(&self) -> PathScene {
        render_scene::build(&self.path, &SceneOptions::from(&self.options))
    }
}

#[cfg(test)]
mod tests;
