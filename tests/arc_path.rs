mod common;

use common::*;
use sectograph::{prelude::*, SectographError};
use std::f32::consts::PI;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Every point a path command lands on, ignoring Close.
fn path_points(path: &[PathCommand]) -> Vec<Point2d<f32>> {
    path.iter().filter_map(|cmd| cmd.endpoint()).collect()
}

#[test]
fn test_sector_path_is_closed_and_starts_with_move() {
    init();
    let center = Point2d::new(100.0, 100.0);
    let path = build_annular_sector(center, 0.0, PI / 3.0, 60.0, 95.0, 6.0).unwrap();

    assert!(matches!(path.first(), Some(PathCommand::MoveTo(_))));
    assert!(matches!(path.last(), Some(PathCommand::Close)));
    // A closed figure with no dangling MoveTo in the middle.
    let moves = path
        .iter()
        .filter(|c| matches!(c, PathCommand::MoveTo(_)))
        .count();
    assert_eq!(moves, 1);
}

#[test]
fn test_sector_points_stay_inside_the_band() {
    init();
    let center = Point2d::new(100.0, 100.0);
    let (inner, outer) = (60.0, 95.0);
    let path = build_annular_sector(center, -0.4, 1.9, inner, outer, 6.0).unwrap();

    for point in path_points(&path) {
        let r = center.distance(&point);
        assert!(
            r > inner - 1e-3 && r < outer + 1e-3,
            "point {} at radius {} escapes the band [{}, {}]",
            point,
            r,
            inner,
            outer
        );
    }
}

#[test]
fn test_rounding_never_exceeds_half_the_band() {
    init();
    let center = Point2d::new(100.0, 100.0);
    // A corner radius far larger than the 10-unit band can accommodate.
    let path = build_annular_sector(center, 0.0, PI / 2.0, 85.0, 95.0, 50.0).unwrap();

    for cmd in &path {
        if let PathCommand::ArcTo { radius, .. } = cmd {
            // Chamfer arcs are clamped to 5.0; ring arcs are 85 or 95.
            assert!(
                *radius <= 5.0 + 1e-4 || *radius >= 85.0 - 1e-4,
                "unexpected arc radius {}",
                radius
            );
        }
    }
}

#[test]
fn test_inverted_radii_are_rejected() {
    init();
    let center = Point2d::new(100.0, 100.0);
    match build_annular_sector(center, 0.0, 1.0, 95.0, 60.0, 6.0) {
        Err(SectographError::InvalidGeometry(msg)) => {
            assert!(msg.contains("outer"), "unhelpful message: {}", msg)
        }
        other => panic!("expected InvalidGeometry, got {:?}", other),
    }
}

#[test]
fn test_wrapped_halves_meet_at_the_seam() {
    init();
    let params = test_params();
    let tasks = vec![gray_task("overnight", "23:00", "01:00")];
    let list = layout_tasks(&tasks, &params).unwrap();

    let arcs: Vec<_> = list.arcs_for_task("overnight").collect();
    assert_eq!(arcs.len(), 2);

    // The pre-midnight half ends where the post-midnight half begins: both
    // boundaries land on the top reference angle.
    let wrapped = arcs
        .iter()
        .find(|a| !a.flags.contains(ArcFlags::WRAP_CONTINUATION))
        .unwrap();
    let continuation = arcs
        .iter()
        .find(|a| a.flags.contains(ArcFlags::WRAP_CONTINUATION))
        .unwrap();
    assert_angle_eq(
        wrapped.end_angle,
        continuation.start_angle + std::f32::consts::TAU,
        "seam angle",
    );
}

#[test]
fn test_full_turn_renders_as_an_annulus() {
    init();
    let tasks = vec![gray_task("allday", "00:00", "00:00")];
    let list = layout_tasks(&tasks, &test_params()).unwrap();

    let arcs: Vec<_> = list.arcs_for_task("allday").collect();
    assert_eq!(arcs.len(), 1, "a span starting at midnight needs no split");

    // An annulus is two concentric subpaths, so two MoveTo and two Close.
    let path = &arcs[0].path;
    let moves = path
        .iter()
        .filter(|c| matches!(c, PathCommand::MoveTo(_)))
        .count();
    let closes = path.iter().filter(|c| matches!(c, PathCommand::Close)).count();
    assert_eq!((moves, closes), (2, 2));
}
