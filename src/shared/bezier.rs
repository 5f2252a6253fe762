//! Reine Geometrie-Funktionen für kubische Bézier-Segmente.
//!
//! Layer-neutral: wird von `app` (Scene-Builder) und Benchmarks genutzt,
//! ohne dass `core` davon wissen muss.

use crate::core::BezierPoints;
use glam::Vec3;

/// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
pub fn cubic_bezier(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let inv = 1.0 - t;
    let inv2 = inv * inv;
    let t2 = t * t;
    inv2 * inv * p0 + 3.0 * inv2 * t * p1 + 3.0 * inv * t2 * p2 + t2 * t * p3
}

/// Tastet ein Segment gleichmäßig in `t` ab.
///
/// Liefert `samples + 1` Punkte inklusive Start- und Endpunkt.
/// `samples == 0` wird wie 1 behandelt (gerade Sehne).
pub fn sample_segment(points: &BezierPoints, samples: usize) -> Vec<Vec3> {
    let [p0, p1, p2, p3] = *points;
    let samples = samples.max(1);
    let mut result = Vec::with_capacity(samples + 1);
    for i in 0..samples {
        let t = i as f32 / samples as f32;
        result.push(cubic_bezier(p0, p1, p2, p3, t));
    }
    // Endpunkt immer exakt übernehmen
    result.push(p3);
    result
}

/// Projiziert einen Punkt auf die Bodenebene (y = 0) für die Top-Down-Ansicht.
pub fn flatten_to_ground(p: Vec3) -> Vec3 {
    Vec3::new(p.x, 0.0, p.z)
}

/// Approximierte Länge einer Polyline.
pub fn polyline_length(points: &[Vec3]) -> f32 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}
