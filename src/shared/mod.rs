//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Geometrie-Hilfen, Optionen und die Pfad-Szene, die zwischen
//! `app` und einem Renderer geteilt werden.

pub mod bezier;
pub mod options;
mod path_scene;

pub use options::PathEditorOptions;
pub use path_scene::{HandleGizmo, PathScene, SegmentCurve};
