/*
    Sectograph
    https://github.com/dbalsom/sectograph

    Copyright 2025 Daniel Balsom

    Permission is hereby granted, free of charge, to any person obtaining a
    copy of this software and associated documentation files (the “Software”),
    to deal in the Software without restriction, including without limitation
    the rights to use, copy, modify, merge, publish, distribute, sublicense,
    and/or sell copies of the Software, and to permit persons to whom the
    Software is furnished to do so, subject to the following conditions:

    The above copyright notice and this permission notice shall be included in
    all copies or substantial portions of the Software.

    THE SOFTWARE IS PROVIDED “AS IS”, WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
    IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
    FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
    AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
    LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
    FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
    DEALINGS IN THE SOFTWARE.

    --------------------------------------------------------------------------
*/

//! Annular-sector path construction. A task segment becomes a closed path:
//! outer arc from start to end angle, radial line inward, inner arc back,
//! radial line out to close. The four corners are chamfered with a corner
//! radius that is clamped per arc, so short or thin sectors can never produce
//! self-intersecting geometry.
//!
//! Paths are wound clockwise (increasing dial angle) on the outer ring and
//! counter-clockwise on the inner ring, which makes the sector fill correctly
//! under the nonzero winding rule.

use std::f32::consts::{PI, TAU};

use crate::{
    types::{
        path::{PathCommand, Sweep},
        point::Point2d,
    },
    SectographError,
};

/// Clamped corner-rounding parameters for one ring of a sector.
#[derive(Copy, Clone, Debug, Default)]
struct CornerFit {
    /// Effective corner radius after clamping. Zero disables rounding.
    radius: f32,
    /// Angular inset of the rounding tangent point from the sector edge.
    delta: f32,
    /// Distance from dial center to the corner circle's center.
    pivot_radius: f32,
}

/// Fit a corner radius to one ring of an annular sector.
///
/// The rounding is clamped so it never exceeds half the ring band
/// `(outer - inner) / 2`, nor half the chord length of the angular span at
/// the ring's radius. The angular inset is additionally capped at half the
/// span so opposing corners can at worst meet, never cross.
fn fit_corner(corner_radius: f32, ring_radius: f32, band: f32, span: f32, outer: bool) -> CornerFit {
    let half_chord = ring_radius * (span * 0.5).sin().abs();
    let radius = corner_radius.min(band * 0.5).min(half_chord).max(0.0);
    if radius <= f32::EPSILON {
        return CornerFit::default();
    }

    // The corner circle sits inside the band, tangent to the ring.
    let pivot_radius = if outer {
        ring_radius - radius
    }
    else {
        ring_radius + radius
    };
    if pivot_radius <= f32::EPSILON {
        // Inner ring too small to host the rounding (e.g. a pie slice).
        return CornerFit::default();
    }

    let delta = (radius / pivot_radius).clamp(-1.0, 1.0).asin().min(span * 0.5);
    CornerFit {
        radius,
        delta,
        pivot_radius,
    }
}

/// Emit the outer or inner arc run of a sector, including its two corner
/// chamfers, onto `path`. `forward` selects the direction of travel along
/// the ring (outer runs forward, inner runs backward).
#[allow(clippy::too_many_arguments)]
fn push_ring_run(
    path: &mut Vec<PathCommand>,
    center: Point2d<f32>,
    ring_radius: f32,
    start_angle: f32,
    end_angle: f32,
    fit: CornerFit,
    forward: bool,
    line_to_first: bool,
) {
    let span = end_angle - start_angle;
    // Tangent points of the corner circles on the radial edges.
    let edge_reach = fit.pivot_radius * fit.delta.cos();

    // Angles along the direction of travel.
    let (lead_edge, trail_edge) = if forward {
        (start_angle, end_angle)
    }
    else {
        (end_angle, start_angle)
    };
    let (arc_from, arc_to) = if forward {
        (start_angle + fit.delta, end_angle - fit.delta)
    }
    else {
        (end_angle - fit.delta, start_angle + fit.delta)
    };
    let ring_sweep = if forward {
        Sweep::Clockwise
    }
    else {
        Sweep::CounterClockwise
    };

    if fit.radius > 0.0 {
        let entry = Point2d::polar(center, edge_reach, lead_edge);
        if line_to_first {
            path.push(PathCommand::LineTo(entry));
        }
        else {
            path.push(PathCommand::MoveTo(entry));
        }
        // Corner chamfer onto the ring. Corner arcs always turn with the
        // traversal (clockwise for a clockwise-wound boundary).
        path.push(PathCommand::ArcTo {
            radius: fit.radius,
            large_arc: false,
            sweep: Sweep::Clockwise,
            end: Point2d::polar(center, ring_radius, arc_from),
        });
    }
    else {
        let entry = Point2d::polar(center, ring_radius, lead_edge);
        if line_to_first {
            path.push(PathCommand::LineTo(entry));
        }
        else {
            path.push(PathCommand::MoveTo(entry));
        }
    }

    // Main arc along the ring, if the chamfers have not consumed it.
    let run_span = span - 2.0 * fit.delta;
    if run_span > f32::EPSILON {
        path.push(PathCommand::ArcTo {
            radius: ring_radius,
            large_arc: run_span > PI,
            sweep: ring_sweep,
            end: Point2d::polar(center, ring_radius, arc_to),
        });
    }

    if fit.radius > 0.0 {
        // Chamfer off the ring onto the trailing radial edge.
        path.push(PathCommand::ArcTo {
            radius: fit.radius,
            large_arc: false,
            sweep: Sweep::Clockwise,
            end: Point2d::polar(center, edge_reach, trail_edge),
        });
    }
}

/// Build a closed annular-sector path.
///
/// `start_angle`/`end_angle` are dial angles in radians with
/// `end_angle >= start_angle`; values need not be reduced to `[0, TAU)`.
/// `corner_radius` requests rounding of the sector's four corners and is
/// clamped per arc (see [fit_corner]). An `inner_radius` of zero produces a
/// pie slice. A span of a full turn or more produces an annulus ring.
///
/// Fails with [SectographError::InvalidGeometry] when the radii cannot form
/// an annulus; this is a caller configuration error, not task-data error.
pub fn build_annular_sector(
    center: Point2d<f32>,
    start_angle: f32,
    end_angle: f32,
    inner_radius: f32,
    outer_radius: f32,
    corner_radius: f32,
) -> Result<Vec<PathCommand>, SectographError> {
    if !(outer_radius > inner_radius) {
        return Err(SectographError::InvalidGeometry(format!(
            "outer_radius ({}) must be greater than inner_radius ({})",
            outer_radius, inner_radius
        )));
    }
    if inner_radius < 0.0 || !outer_radius.is_finite() {
        return Err(SectographError::InvalidGeometry(format!(
            "radii must be finite and non-negative (inner {}, outer {})",
            inner_radius, outer_radius
        )));
    }
    let span = end_angle - start_angle;
    if span < 0.0 {
        return Err(SectographError::InvalidGeometry(format!(
            "end_angle ({}) must not precede start_angle ({})",
            end_angle, start_angle
        )));
    }

    if span >= TAU - f32::EPSILON {
        return Ok(build_annulus(center, inner_radius, outer_radius, start_angle));
    }

    let band = outer_radius - inner_radius;
    let outer_fit = fit_corner(corner_radius, outer_radius, band, span, true);
    let inner_fit = if inner_radius > f32::EPSILON {
        fit_corner(corner_radius, inner_radius, band, span, false)
    }
    else {
        CornerFit::default()
    };

    let mut path = Vec::with_capacity(10);
    push_ring_run(
        &mut path,
        center,
        outer_radius,
        start_angle,
        end_angle,
        outer_fit,
        true,
        false,
    );
    if inner_radius > f32::EPSILON {
        push_ring_run(
            &mut path,
            center,
            inner_radius,
            start_angle,
            end_angle,
            inner_fit,
            false,
            true,
        );
    }
    else {
        // Pie slice: both radial edges meet at the dial center.
        path.push(PathCommand::LineTo(center));
    }
    // Close draws the remaining radial edge back to the path start.
    path.push(PathCommand::Close);

    Ok(path)
}

/// A full annulus: the outer circle wound clockwise and the inner circle
/// counter-clockwise, each as two half-turn arcs since a single arc command
/// cannot span a full circle. Fills as a ring under nonzero winding.
fn build_annulus(
    center: Point2d<f32>,
    inner_radius: f32,
    outer_radius: f32,
    start_angle: f32,
) -> Vec<PathCommand> {
    let mut path = Vec::with_capacity(8);
    let half = start_angle + PI;

    let o0 = Point2d::polar(center, outer_radius, start_angle);
    let o1 = Point2d::polar(center, outer_radius, half);
    path.push(PathCommand::MoveTo(o0));
    path.push(PathCommand::ArcTo {
        radius: outer_radius,
        large_arc: false,
        sweep: Sweep::Clockwise,
        end: o1,
    });
    path.push(PathCommand::ArcTo {
        radius: outer_radius,
        large_arc: false,
        sweep: Sweep::Clockwise,
        end: o0,
    });
    path.push(PathCommand::Close);

    if inner_radius > f32::EPSILON {
        let i0 = Point2d::polar(center, inner_radius, start_angle);
        let i1 = Point2d::polar(center, inner_radius, half);
        path.push(PathCommand::MoveTo(i0));
        path.push(PathCommand::ArcTo {
            radius: inner_radius,
            large_arc: false,
            sweep: Sweep::CounterClockwise,
            end: i1,
        });
        path.push(PathCommand::ArcTo {
            radius: inner_radius,
            large_arc: false,
            sweep: Sweep::CounterClockwise,
            end: i0,
        });
        path.push(PathCommand::Close);
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTER: Point2d<f32> = Point2d { x: 100.0, y: 100.0 };

    fn finite(path: &[PathCommand]) -> bool {
        path.iter().all(|cmd| match cmd {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => p.x.is_finite() && p.y.is_finite(),
            PathCommand::ArcTo { radius, end, .. } => {
                radius.is_finite() && end.x.is_finite() && end.y.is_finite()
            }
            PathCommand::Close => true,
        })
    }

    #[test]
    fn rejects_degenerate_radii() {
        assert!(matches!(
            build_annular_sector(CENTER, 0.0, 1.0, 50.0, 50.0, 0.0),
            Err(SectographError::InvalidGeometry(_))
        ));
        assert!(matches!(
            build_annular_sector(CENTER, 0.0, 1.0, 60.0, 50.0, 0.0),
            Err(SectographError::InvalidGeometry(_))
        ));
    }

    #[test]
    fn sharp_sector_has_expected_shape() {
        let path = build_annular_sector(CENTER, 0.0, 1.0, 60.0, 95.0, 0.0).unwrap();
        // MoveTo, outer arc, line inward, inner arc, close.
        assert_eq!(path.len(), 5);
        assert!(matches!(path[0], PathCommand::MoveTo(_)));
        assert!(matches!(
            path[1],
            PathCommand::ArcTo {
                sweep: Sweep::Clockwise,
                large_arc: false,
                ..
            }
        ));
        assert!(matches!(path[2], PathCommand::LineTo(_)));
        assert!(matches!(
            path[3],
            PathCommand::ArcTo {
                sweep: Sweep::CounterClockwise,
                ..
            }
        ));
        assert!(matches!(path[4], PathCommand::Close));
    }

    #[test]
    fn rounded_sector_adds_corner_arcs() {
        let path = build_annular_sector(CENTER, 0.0, 1.0, 60.0, 95.0, 8.0).unwrap();
        // Four corner arcs in addition to the two ring arcs.
        let arcs = path
            .iter()
            .filter(|c| matches!(c, PathCommand::ArcTo { .. }))
            .count();
        assert_eq!(arcs, 6);
        assert!(finite(&path));
    }

    #[test]
    fn corner_radius_clamps_on_thin_arcs() {
        // Angular span of ~0.5 degrees with an oversized corner radius.
        let span = 0.5f32.to_radians();
        let path = build_annular_sector(CENTER, 0.0, span, 60.0, 95.0, 50.0).unwrap();
        assert!(finite(&path));
        // Rounding may vanish entirely but the path must remain closed.
        assert!(matches!(path.last(), Some(PathCommand::Close)));
    }

    #[test]
    fn corner_radius_clamps_on_thin_bands() {
        let path = build_annular_sector(CENTER, 0.0, 1.0, 94.0, 95.0, 50.0).unwrap();
        assert!(finite(&path));
        for cmd in &path {
            if let PathCommand::ArcTo { radius, .. } = cmd {
                // Every arc is either a ring arc or a chamfer clamped to
                // half the 1.0-wide band.
                assert!(*radius <= 0.5 + 1e-5 || *radius >= 94.0);
            }
        }
    }

    #[test]
    fn long_spans_use_large_arc_flag() {
        let path = build_annular_sector(CENTER, 0.0, PI + 0.5, 60.0, 95.0, 0.0).unwrap();
        assert!(path.iter().any(|c| matches!(
            c,
            PathCommand::ArcTo { large_arc: true, .. }
        )));
    }

    #[test]
    fn full_turn_produces_ring_subpaths() {
        let path = build_annular_sector(CENTER, 0.0, TAU, 60.0, 95.0, 12.0).unwrap();
        let moves = path
            .iter()
            .filter(|c| matches!(c, PathCommand::MoveTo(_)))
            .count();
        let closes = path
            .iter()
            .filter(|c| matches!(c, PathCommand::Close))
            .count();
        assert_eq!((moves, closes), (2, 2));
        assert!(finite(&path));
    }

    #[test]
    fn pie_slice_reaches_center() {
        let path = build_annular_sector(CENTER, 0.0, 1.0, 0.0, 95.0, 0.0).unwrap();
        assert!(path.iter().any(|c| matches!(
            c,
            PathCommand::LineTo(p) if *p == CENTER
        )));
    }
}
