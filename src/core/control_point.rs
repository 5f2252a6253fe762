//! Repräsentiert einen Kontrollpunkt mit Position und zwei Tangenten-Handles.

use glam::Vec3;

/// Standard-Offset der vorderen Tangente bei neu erzeugten Kontrollpunkten.
pub const DEFAULT_FRONT_TANGENT: Vec3 = Vec3::ONE;
/// Standard-Offset der hinteren Tangente bei neu erzeugten Kontrollpunkten.
pub const DEFAULT_BACK_TANGENT: Vec3 = Vec3::NEG_ONE;

/// Auswahl einer der beiden Tangenten eines Kontrollpunkts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TangentSide {
    /// Eingehendes Handle (Richtung vorheriger Punkt)
    Back,
    /// Ausgehendes Handle (Richtung nächster Punkt)
    Front,
}

/// Ein Kontrollpunkt eines Pfads.
///
/// Die Tangenten werden als Offset relativ zur Position gespeichert,
/// nicht als Weltkoordinaten. Verschiebt man die Position, wandern die
/// Handles starr mit. Back und Front sind unabhängig voneinander editierbar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    position: Vec3,
    back_tangent: Vec3,
    front_tangent: Vec3,
}

impl ControlPoint {
    /// Erstellt einen Kontrollpunkt mit Standard-Tangenten (+1,+1,+1) / (-1,-1,-1)
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            back_tangent: DEFAULT_BACK_TANGENT,
            front_tangent: DEFAULT_FRONT_TANGENT,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Offset der hinteren Tangente (relativ zur Position)
    pub fn back_tangent(&self) -> Vec3 {
        self.back_tangent
    }

    pub fn set_back_tangent(&mut self, offset: Vec3) {
        self.back_tangent = offset;
    }

    /// Offset der vorderen Tangente (relativ zur Position)
    pub fn front_tangent(&self) -> Vec3 {
        self.front_tangent
    }

    pub fn set_front_tangent(&mut self, offset: Vec3) {
        self.front_tangent = offset;
    }

    /// Offset der gewählten Tangente.
    pub fn tangent(&self, side: TangentSide) -> Vec3 {
        match side {
            TangentSide::Back => self.back_tangent,
            TangentSide::Front => self.front_tangent,
        }
    }

    /// Setzt den Offset der gewählten Tangente (Caller rechnet `welt - position`).
    pub fn set_tangent(&mut self, side: TangentSide, offset: Vec3) {
        match side {
            TangentSide::Back => self.back_tangent = offset,
            TangentSide::Front => self.front_tangent = offset,
        }
    }

    /// Absolute Weltposition des Tangenten-Handles (`position + offset`).
    pub fn tangent_world(&self, side: TangentSide) -> Vec3 {
        self.position + self.tangent(side)
    }
}
