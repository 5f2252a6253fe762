//! Intents und Ergebnisse der Editing-Surface.
//!
//! Intents sind bereits ausgewertete Benutzereingaben (welches Handle, welche
//! Zielposition). Rohes Input-Handling (Modifier, Klicks) liegt beim Host.

use crate::core::TangentSide;
use glam::Vec3;

/// Welches Handle eines Kontrollpunkts bewegt wurde
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathHandle {
    /// Positions-Handle (Kontrollpunkt selbst)
    Position,
    /// Eines der beiden Tangenten-Handles
    Tangent(TangentSide),
}

/// Eingaben an den `PathEditor`.
#[derive(Debug, Clone, PartialEq)]
pub enum PathIntent {
    /// Loop-Flag des Hosts hat sich geändert
    LoopChanged { closed: bool },
    /// Handle wurde auf eine neue Weltposition gezogen
    HandleMoved {
        index: usize,
        handle: PathHandle,
        world_pos: Vec3,
    },
    /// Neuen Punkt an `index` einfügen (z.B. Shift + Klick auf bestehenden Punkt)
    InsertRequested { index: usize },
    /// Punkt an `index` löschen (z.B. Ctrl + Klick)
    RemoveRequested { index: usize },
}

/// Ergebnis eines verarbeiteten Intents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// Pfad wurde verändert
    Applied,
    /// Intent hatte keine Wirkung (Position unverändert)
    Unchanged,
    /// Intent wurde abgelehnt; `reason` ist für den Endnutzer gedacht
    Refused { reason: String },
}
