//! Pfad-Szene als expliziter Übergabevertrag zwischen Editor und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und ein externer Renderer sie konsumiert.

use crate::core::BezierPoints;
use glam::Vec3;

/// Handle-Positionen eines Kontrollpunkts in Weltkoordinaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleGizmo {
    /// Positions-Handle
    pub position: Vec3,
    /// Hinteres Tangenten-Handle (absolut)
    pub back_tangent: Vec3,
    /// Vorderes Tangenten-Handle (absolut)
    pub front_tangent: Vec3,
    /// Darstellungsgröße des Positions-Handles
    pub position_size: f32,
    /// Darstellungsgröße der Tangenten-Handles
    pub tangent_size: f32,
}

/// Ein darstellbares Segment: Bézier-Kontrollwerte plus abgetastete Polyline.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentCurve {
    pub bezier: BezierPoints,
    pub polyline: Vec<Vec3>,
}

/// Read-only Daten für einen Frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathScene {
    /// Ein Eintrag pro Kontrollpunkt, in Pfad-Reihenfolge
    pub handles: Vec<HandleGizmo>,
    /// Ein Eintrag pro Segment, in Pfad-Reihenfolge
    pub segments: Vec<SegmentCurve>,
    /// Ob die Punkte auf y = 0 projiziert wurden
    pub flattened: bool,
}

impl PathScene {
    /// Summierte Länge aller abgetasteten Segmente.
    pub fn total_length(&self) -> f32 {
        self.segments
            .iter()
            .map(|s| super::bezier::polyline_length(&s.polyline))
            .sum()
    }
}
