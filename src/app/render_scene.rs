//! Builder für Pfad-Szenen aus dem aktuellen Pfad.

use crate::core::{BezierPoints, Path, TangentSide};
use crate::shared::bezier::{flatten_to_ground, sample_segment};
use crate::shared::options::{POSITION_HANDLE_SIZE, SAMPLES_PER_SEGMENT, TANGENT_HANDLE_SIZE};
use crate::shared::{HandleGizmo, PathEditorOptions, PathScene, SegmentCurve};

/// Explizite Parameter für den Scene-Builder (statt Host-Flags im Modell).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneOptions {
    /// Alle Punkte auf y = 0 projizieren (Top-Down)
    pub flatten: bool,
    /// Abtast-Intervalle pro Segment
    pub samples_per_segment: usize,
    /// Größe der Positions-Handles
    pub position_handle_size: f32,
    /// Größe der Tangenten-Handles
    pub tangent_handle_size: f32,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            flatten: false,
            samples_per_segment: SAMPLES_PER_SEGMENT,
            position_handle_size: POSITION_HANDLE_SIZE,
            tangent_handle_size: TANGENT_HANDLE_SIZE,
        }
    }
}

impl From<&PathEditorOptions> for SceneOptions {
    fn from(options: &PathEditorOptions) -> Self {
        Self {
            flatten: options.top_down,
            samples_per_segment: options.samples_per_segment,
            position_handle_size: options.position_handle_size,
            tangent_handle_size: options.tangent_handle_size,
        }
    }
}

/// Baut eine PathScene aus dem Pfad. Die Projektion erfolgt vor dem Abtasten.
pub fn build(path: &Path, options: &SceneOptions) -> PathScene {
    let project = |p| {
        if options.flatten {
            flatten_to_ground(p)
        } else {
            p
        }
    };

    let handles = path
        .control_points()
        .iter()
        .map(|cp| HandleGizmo {
            position: project(cp.position()),
            back_tangent: project(cp.tangent_world(TangentSide::Back)),
            front_tangent: project(cp.tangent_world(TangentSide::Front)),
            position_size: options.position_handle_size,
            tangent_size: options.tangent_handle_size,
        })
        .collect();

    let segments = path
        .segments()
        .map(|bezier| {
            let bezier: BezierPoints = bezier.map(project);
            SegmentCurve {
                polyline: sample_segment(&bezier, options.samples_per_segment),
                bezier,
            }
        })
        .collect();

    PathScene {
        handles,
        segments,
        flattened: options.flatten,
    }
}
