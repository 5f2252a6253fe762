//! Bézier Path Editor Library.
//! Pfad-Datenmodell, Editing-Surface und Geometrie als Library für Hosts und Tests.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{EditOutcome, PathEditor, PathHandle, PathIntent, SceneOptions};
pub use core::{BezierPoints, ControlPoint, Path, PathError, TangentSide};
pub use shared::{HandleGizmo, PathEditorOptions, PathScene, SegmentCurve};
