//! Integration tests for ripple-input.

use ripple_input::{ContactMapper, ContactTracker, InputConfig, InputSink, SurfacePoint};
use ripple_solver::{ImpulseTarget, WaveSolver};
use ripple_types::ContactId;

/// Records every impulse instead of applying it.
struct RecordingTarget {
    count_x: usize,
    count_y: usize,
    calls: Vec<(f32, f32, f32)>,
}

impl RecordingTarget {
    fn new(count_x: usize, count_y: usize) -> Self {
        Self {
            count_x,
            count_y,
            calls: Vec::new(),
        }
    }

    fn cells(&self) -> Vec<(i32, i32)> {
        self.calls.iter().map(|&(_, i, j)| (i as i32, j as i32)).collect()
    }
}

impl ImpulseTarget for RecordingTarget {
    fn cell_count_x(&self) -> usize {
        self.count_x
    }

    fn cell_count_y(&self) -> usize {
        self.count_y
    }

    fn inject_impulse(&mut self, amount: f32, i: f32, j: f32) {
        self.calls.push((amount, i, j));
    }
}

fn mapper() -> ContactMapper {
    ContactMapper::new(InputConfig::default()).unwrap()
}

// ─── Surface Tests ────────────────────────────────────────────

#[test]
fn surface_to_cell_floors_and_clamps() {
    assert_eq!(SurfacePoint::new(0.5, 0.5).to_cell(11, 11), (5, 5));
    assert_eq!(SurfacePoint::new(0.0, 1.0).to_cell(11, 21), (0, 20));
    assert_eq!(SurfacePoint::new(-0.3, 1.7).to_cell(11, 11), (0, 10));
    assert_eq!(SurfacePoint::new(f32::NAN, 0.25).to_cell(11, 5), (0, 1));
}

#[test]
fn single_cell_axis_maps_to_zero() {
    assert_eq!(SurfacePoint::new(0.9, 0.9).to_cell(1, 1), (0, 0));
}

#[test]
fn pixels_normalize_by_surface_size() {
    let p = SurfacePoint::from_pixels(150.0, 50.0, 300.0, 200.0);
    assert_eq!(p, SurfacePoint::new(0.5, 0.25));
    assert_eq!(SurfacePoint::from_pixels(10.0, 10.0, 0.0, 0.0), SurfacePoint::default());
}

// ─── Tracker Tests ────────────────────────────────────────────

#[test]
fn tracker_shifts_history() {
    let mut t = ContactTracker::new(SurfacePoint::new(0.1, 0.1));
    assert_eq!(t.previous(), t.current());
    t.move_to(SurfacePoint::new(0.2, 0.3));
    assert_eq!(t.previous(), SurfacePoint::new(0.1, 0.1));
    assert_eq!(t.current(), SurfacePoint::new(0.2, 0.3));
}

// ─── Mapper Tests ─────────────────────────────────────────────

#[test]
fn start_deposits_one_tap() {
    let mut m = mapper();
    let mut target = RecordingTarget::new(11, 11);
    assert!(m.contact_start(&mut target, ContactId(1), SurfacePoint::new(0.5, 0.3)));

    assert_eq!(target.calls, vec![(250_000.0, 5.0, 3.0)]);
    assert_eq!(m.active_contacts(), 1);
}

#[test]
fn repeated_start_is_ignored() {
    let mut m = mapper();
    let mut target = RecordingTarget::new(11, 11);
    m.contact_start(&mut target, ContactId(1), SurfacePoint::new(0.5, 0.5));
    assert!(!m.contact_start(&mut target, ContactId(1), SurfacePoint::new(0.1, 0.1)));
    assert_eq!(target.calls.len(), 1);
}

#[test]
fn move_deposits_along_rasterized_line() {
    let mut m = mapper();
    let mut target = RecordingTarget::new(11, 11);
    m.contact_start(&mut target, ContactId(3), SurfacePoint::new(0.0, 0.0));
    target.calls.clear();

    let deposited = m.contact_move(&mut target, ContactId(3), SurfacePoint::new(0.4, 0.0));
    assert_eq!(deposited, 5);
    assert_eq!(target.cells(), vec![(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]);
    assert!(target.calls.iter().all(|&(a, _, _)| a == 10_000.0));
}

#[test]
fn fast_diagonal_drag_leaves_no_gaps() {
    let mut m = mapper();
    let mut target = RecordingTarget::new(101, 101);
    let (from, to) = (SurfacePoint::new(0.1, 0.1), SurfacePoint::new(0.9, 0.5));
    m.contact_start(&mut target, ContactId(0), from);
    target.calls.clear();

    m.contact_move(&mut target, ContactId(0), to);
    let cells = target.cells();
    assert_eq!(cells.first(), Some(&from.to_cell(101, 101)));
    assert_eq!(cells.last(), Some(&to.to_cell(101, 101)));
    assert!(cells.len() >= 79);
    assert!(cells.windows(2).all(|w| (w[1].0 - w[0].0).abs() <= 1 && (w[1].1 - w[0].1).abs() <= 1));
}

#[test]
fn move_without_start_tracks_and_deposits_once() {
    let mut m = mapper();
    let mut target = RecordingTarget::new(11, 11);
    let deposited = m.contact_move(&mut target, ContactId(9), SurfacePoint::new(0.2, 0.2));
    assert_eq!(deposited, 1);
    assert_eq!(target.cells(), vec![(2, 2)]);
    assert!(m.tracker(ContactId(9)).is_some());
}

#[test]
fn contacts_are_tracked_independently() {
    let mut m = mapper();
    let mut target = RecordingTarget::new(11, 11);
    m.contact_start(&mut target, ContactId(1), SurfacePoint::new(0.0, 0.0));
    m.contact_start(&mut target, ContactId(2), SurfacePoint::new(1.0, 1.0));
    target.calls.clear();

    m.contact_move(&mut target, ContactId(2), SurfacePoint::new(0.8, 1.0));
    assert_eq!(target.cells(), vec![(10, 10), (9, 10), (8, 10)]);
    assert_eq!(
        m.tracker(ContactId(1)).map(|t| t.current()),
        Some(SurfacePoint::new(0.0, 0.0))
    );
}

#[test]
fn end_discards_tracking_record() {
    let mut m = mapper();
    let mut target = RecordingTarget::new(11, 11);
    m.contact_start(&mut target, ContactId(4), SurfacePoint::new(0.5, 0.5));
    assert!(m.contact_end(ContactId(4)));
    assert!(!m.contact_end(ContactId(4)));
    assert_eq!(m.active_contacts(), 0);

    // Touching down again taps again.
    assert!(m.contact_start(&mut target, ContactId(4), SurfacePoint::new(0.5, 0.5)));
}

#[test]
fn clear_forgets_everything() {
    let mut m = mapper();
    let mut target = RecordingTarget::new(4, 4);
    m.contact_start(&mut target, ContactId(1), SurfacePoint::new(0.5, 0.5));
    m.contact_start(&mut target, ContactId::POINTER, SurfacePoint::new(0.5, 0.5));
    m.clear();
    assert_eq!(m.active_contacts(), 0);
}

// ─── Sink Tests ───────────────────────────────────────────────

#[test]
fn bound_mapper_drives_a_solver() {
    let mut m = mapper();
    let mut solver = WaveSolver::with_defaults(32, 32).unwrap();
    {
        let mut sink = m.bind(&mut solver);
        sink.on_contact_start(ContactId::POINTER, SurfacePoint::new(0.5, 0.5));
        sink.on_contact_move(ContactId::POINTER, SurfacePoint::new(0.7, 0.5));
        sink.on_contact_end(ContactId::POINTER);
    }
    assert!(solver.max_abs_velocity() > 0.0);
    assert_eq!(solver.max_abs_density(), 0.0);
    assert_eq!(m.active_contacts(), 0);
}

#[test]
fn sink_works_through_dyn_target() {
    let mut m = mapper();
    let mut target = RecordingTarget::new(8, 8);
    let dyn_target: &mut dyn ImpulseTarget = &mut target;
    let mut sink = m.bind(dyn_target);
    sink.on_contact_start(ContactId(0), SurfacePoint::new(0.0, 0.0));
    drop(sink);
    assert_eq!(target.calls.len(), 1);
}

// ─── Config Tests ─────────────────────────────────────────────

#[test]
fn non_finite_magnitude_is_rejected() {
    let config = InputConfig {
        tap_magnitude: f32::NAN,
        ..Default::default()
    };
    assert!(ContactMapper::new(config).is_err());
}

#[test]
fn config_json_round_trip() {
    let config = InputConfig {
        tap_magnitude: 1.0,
        drag_magnitude: -2.0,
    };
    let json = serde_json::to_string(&config).unwrap();
    let recovered: InputConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, config);
}
