//! Die zentrale Path-Datenstruktur: Kontrollpunkt-Folge, Loop-Topologie
//! und Bézier-Geometrie pro Segment.

use super::{ControlPoint, TangentSide};
use glam::Vec3;
use thiserror::Error;

/// Fehler bei Index-basierten Pfad-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PathError {
    /// Index liegt außerhalb des gültigen Bereichs `[0, len)` bzw. `[0, len]` beim Einfügen
    #[error("Index {index} außerhalb des gültigen Bereichs (Länge {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Die vier Kontrollwerte eines kubischen Bézier-Segments: [P0, P1, P2, P3].
pub type BezierPoints = [Vec3; 4];

/// Geschlossener oder offener Pfad aus Kontrollpunkten.
///
/// Ein Pfad sollte immer mindestens zwei Kontrollpunkte haben. Das wird hier
/// nicht erzwungen: der Aufrufer (Editing-Surface) lehnt Löschungen ab, die
/// darunter fallen würden.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    /// Alle Kontrollpunkte in Durchlauf-Reihenfolge
    points: Vec<ControlPoint>,
    /// Letzter Punkt ist mit dem ersten verbunden
    closed: bool,
}

impl Path {
    /// Erstellt einen offenen Pfad mit zwei Punkten: `position` und `position + X`.
    pub fn new(position: Vec3) -> Self {
        Self {
            points: vec![
                ControlPoint::new(position),
                ControlPoint::new(position + Vec3::X),
            ],
            closed: false,
        }
    }

    /// Setzt das Loop-Flag. Die Segmentanzahl wird erst bei Abfrage abgeleitet.
    pub fn set_loop(&mut self, closed: bool) {
        self.closed = closed;
    }

    pub fn is_loop(&self) -> bool {
        self.closed
    }

    /// Anzahl der Kontrollpunkte
    pub fn num_control_points(&self) -> usize {
        self.points.len()
    }

    /// Anzahl der Segmente: `count` bei Loop, sonst `count - 1`.
    ///
    /// Ein leerer offener Pfad ist degeneriert und liefert 0.
    pub fn num_segments(&self) -> usize {
        if self.closed {
            self.points.len()
        } else {
            self.points.len().saturating_sub(1)
        }
    }

    /// Read-only Sicht auf alle Kontrollpunkte.
    pub fn control_points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Liefert den Kontrollpunkt an `index`.
    pub fn control_point(&self, index: usize) -> Result<&ControlPoint, PathError> {
        self.points.get(index).ok_or(PathError::IndexOutOfRange {
            index,
            len: self.points.len(),
        })
    }

    fn control_point_mut(&mut self, index: usize) -> Result<&mut ControlPoint, PathError> {
        let len = self.points.len();
        self.points
            .get_mut(index)
            .ok_or(PathError::IndexOutOfRange { index, len })
    }

    /// Verschiebt die Position eines Kontrollpunkts. Die Tangenten-Offsets
    /// bleiben gleich, die Handles wandern also mit.
    pub fn move_position_point(&mut self, index: usize, position: Vec3) -> Result<(), PathError> {
        self.control_point_mut(index)?.set_position(position);
        Ok(())
    }

    /// Setzt den Tangenten-Offset der gewählten Seite.
    ///
    /// `offset` ist relativ zur Position des Kontrollpunkts
    /// (`gewünschte_weltposition - position`).
    pub fn move_tangent(
        &mut self,
        index: usize,
        side: TangentSide,
        offset: Vec3,
    ) -> Result<(), PathError> {
        self.control_point_mut(index)?.set_tangent(side, offset);
        Ok(())
    }

    pub fn move_back_tangent(&mut self, index: usize, offset: Vec3) -> Result<(), PathError> {
        self.move_tangent(index, TangentSide::Back, offset)
    }

    pub fn move_front_tangent(&mut self, index: usize, offset: Vec3) -> Result<(), PathError> {
        self.move_tangent(index, TangentSide::Front, offset)
    }

    /// Fügt an `index` einen neuen Kontrollpunkt mit Standard-Tangenten ein.
    /// Nachfolgende Punkte rücken um eins nach hinten. `index == count` hängt an.
    pub fn insert_point(&mut self, index: usize, position: Vec3) -> Result<(), PathError> {
        let len = self.points.len();
        if index > len {
            return Err(PathError::IndexOutOfRange { index, len });
        }
        self.points.insert(index, ControlPoint::new(position));
        log::debug!(
            "Kontrollpunkt {} eingefügt bei {:?} ({} Punkte)",
            index,
            position,
            self.points.len()
        );
        Ok(())
    }

    /// Entfernt den Kontrollpunkt an `index` und gibt ihn zurück.
    /// Das Minimum von zwei Punkten wird hier nicht geprüft.
    pub fn remove_point(&mut self, index: usize) -> Result<ControlPoint, PathError> {
        let len = self.points.len();
        if index >= len {
            return Err(PathError::IndexOutOfRange { index, len });
        }
        let removed = self.points.remove(index);
        log::debug!(
            "Kontrollpunkt {} entfernt ({} Punkte)",
            index,
            self.points.len()
        );
        Ok(removed)
    }

    /// Index des vorderen Kontrollpunkts von Segment `segment`.
    ///
    /// Beim letzten Segment eines Loops wird auf Punkt 0 umgebrochen.
    fn front_index(&self, segment: usize) -> usize {
        if self.closed && segment == self.points.len() - 1 {
            0
        } else {
            segment + 1
        }
    }

    /// Berechnet die vier Bézier-Kontrollwerte von Segment `segment`.
    ///
    /// - P0 = Position des hinteren Punkts
    /// - P1 = P0 + vordere Tangente des hinteren Punkts
    /// - P2 = P3 + hintere Tangente des vorderen Punkts
    /// - P3 = Position des vorderen Punkts
    pub fn bezier_points_in_segment(&self, segment: usize) -> Result<BezierPoints, PathError> {
        let len = self.num_segments();
        if segment >= len {
            return Err(PathError::IndexOutOfRange {
                index: segment,
                len,
            });
        }

        let back = &self.points[segment];
        let front = &self.points[self.front_index(segment)];

        Ok([
            back.position(),
            back.tangent_world(TangentSide::Front),
            front.tangent_world(TangentSide::Back),
            front.position(),
        ])
    }

    /// Iterator über die Bézier-Kontrollwerte aller Segmente in Reihenfolge.
    pub fn segments(&self) -> impl Iterator<Item = BezierPoints> + '_ {
        (0..self.num_segments()).filter_map(move |i| self.bezier_points_in_segment(i).ok())
    }
}
