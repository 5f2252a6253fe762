//! Core-Domänentypen: Kontrollpunkte und Bézier-Pfad.
//!
//! Das Datenmodell kennt keinen Editor-Zustand. Loop- und Flatten-Flags
//! werden von außen gesetzt bzw. an den Abfragestellen übergeben.

pub mod control_point;
/// Pfad aus Kontrollpunkten mit abgeleiteter Segment-Geometrie
pub mod path;

pub use control_point::{ControlPoint, TangentSide};
pub use path::{BezierPoints, Path, PathError};
