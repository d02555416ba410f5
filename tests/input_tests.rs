//! Request queue parsing and geometry bounds handling

use seeksim_core::error::Error;
use seeksim_core::types::{BoundsMode, Geometry, Policy};
use seeksim_planner::{parse_head, parse_queue};
use seeksim_sched::Scheduler;

#[test]
fn test_parse_then_schedule() {
    let requests = parse_queue("98, 183, 37, 122, 14, 124, 65, 67", ",").unwrap();
    let head = parse_head("53").unwrap();
    let s = Scheduler::default().run(Policy::Fcfs, &requests, head).unwrap();
    assert_eq!(s.total_seek, 640);
}

#[test]
fn test_invalid_tokens_name_the_culprit() {
    for (text, bad) in [("1,2,x", "x"), ("1.5", "1.5"), ("7,-3", "-3"), ("99999999999", "99999999999")] {
        match parse_queue(text, ",") {
            Err(Error::InvalidInput { token, .. }) => assert_eq!(token, bad, "{text}"),
            other => panic!("{text}: unexpected {other:?}"),
        }
    }
}

#[test]
fn test_duplicates_survive_parsing_and_scheduling() {
    let requests = parse_queue("40,40,40", ",").unwrap();
    for p in Policy::ALL {
        let s = Scheduler::default().run(p, &requests, 10).unwrap();
        assert_eq!(s.sequence.iter().filter(|&&c| c == 40).count(), 3, "{p}");
    }
}

#[test]
fn test_bounds_modes() {
    let g = Geometry::new(100).unwrap();
    let requests = [20, 100, 150];

    let err = Scheduler::new(g, BoundsMode::Reject)
        .run(Policy::Scan, &requests, 50)
        .unwrap_err();
    assert_eq!(
        err,
        Error::OutOfRangeGeometry {
            cylinder: 100,
            cylinder_count: 100
        }
    );

    let clamped = Scheduler::new(g, BoundsMode::Clamp)
        .run(Policy::Scan, &requests, 50)
        .unwrap();
    assert_eq!(clamped.sequence, vec![50, 99, 99, 99, 20]);

    let permitted = Scheduler::new(g, BoundsMode::Permit)
        .run(Policy::Scan, &requests, 50)
        .unwrap();
    assert_eq!(permitted.sequence, vec![50, 100, 150, 99, 20]);
}

#[test]
fn test_head_out_of_range_rejected() {
    let err = Scheduler::default().run(Policy::Fcfs, &[1], 200).unwrap_err();
    assert!(matches!(err, Error::OutOfRangeGeometry { cylinder: 200, .. }));
}
