//! NACA 4-digit section outlines.
//!
//! Used when the UI has no uploaded polygon: the outline is generated from
//! the same geometry the coefficient engine evaluates and handed to the
//! particle simulator as its collision body.

use std::f64::consts::PI;

use nalgebra::Point2;

use crate::geometry::GeometryDefinition;

/// Chordwise position of maximum camber (the "4" in NACA 2412)
pub const MAX_CAMBER_POSITION: f64 = 0.4;

/// Fewer points than this per surface makes a degenerate outline
pub const MIN_POINTS_PER_SURFACE: usize = 4;

/// Half-thickness at chordwise station `x` (0..1) for thickness ratio `t`
pub fn thickness_distribution(x: f64, t: f64) -> f64 {
    5.0 * t
        * (0.2969 * x.sqrt() - 0.1260 * x - 0.3516 * x.powi(2) + 0.2843 * x.powi(3)
            - 0.1015 * x.powi(4))
}

/// Mean camber line height and slope at chordwise station `x`
pub fn camber_line(x: f64, m: f64, p: f64) -> (f64, f64) {
    if m <= 0.0 {
        return (0.0, 0.0);
    }
    if x < p {
        (
            m / (p * p) * (2.0 * p * x - x * x),
            2.0 * m / (p * p) * (p - x),
        )
    } else {
        let q = (1.0 - p) * (1.0 - p);
        (
            m / q * ((1.0 - 2.0 * p) + 2.0 * p * x - x * x),
            2.0 * m / q * (p - x),
        )
    }
}

/// Closed outline of the section in chord units, centred on mid-chord.
///
/// The outline is always one unit long: `geometry.chord` sets the Reynolds
/// number, not the size of the body in the particle scene.
///
/// Points run from the leading edge along the upper surface to the trailing
/// edge and back along the lower surface, with cosine spacing to resolve the
/// leading edge. The leading-edge point appears once; the loop is implicitly
/// closed (no duplicated end point).
///
/// # Arguments
///
/// * `geometry` - Section description; thickness and camber are clamped first
/// * `points_per_surface` - Panels per surface, at least [`MIN_POINTS_PER_SURFACE`]
///
/// # Returns
///
/// `2 * points_per_surface + 1` vertices
///
/// # Examples
///
/// ```
/// use aero::{airfoil_polygon, GeometryDefinition};
///
/// let outline = airfoil_polygon(&GeometryDefinition::default(), 40);
/// assert_eq!(outline.len(), 81);
/// ```
pub fn airfoil_polygon(geometry: &GeometryDefinition, points_per_surface: usize) -> Vec<Point2<f64>> {
    let geometry = geometry.clamped();
    let n = points_per_surface.max(MIN_POINTS_PER_SURFACE);
    let t = geometry.thickness;
    let m = geometry.camber;

    let stations: Vec<f64> = (0..=n)
        .map(|i| 0.5 * (1.0 - (PI * i as f64 / n as f64).cos()))
        .collect();

    let surface_point = |x: f64, upper: bool| {
        let yt = thickness_distribution(x, t);
        let (yc, slope) = camber_line(x, m, MAX_CAMBER_POSITION);
        let theta = slope.atan();
        let sign = if upper { 1.0 } else { -1.0 };
        Point2::new(
            x - sign * yt * theta.sin() - 0.5,
            yc + sign * yt * theta.cos(),
        )
    };

    let upper = stations.iter().map(|&x| surface_point(x, true));
    let lower = stations[1..].iter().rev().map(|&x| surface_point(x, false));

    upper.chain(lower).collect()
}
