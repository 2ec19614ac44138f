// Host-side tests for the slingshot gesture state machine.

use glam::Vec2;
use orbit_core::slingshot::{amount_for_pull, category_index_for_offset, clamp_drag};
use orbit_core::{run_fixed, Category, Simulation, Slingshot, SlingshotPhase};

const DT: f32 = 1.0 / 60.0;
const GRAB: Vec2 = Vec2::new(200.0, 400.0);

/// Drag from `GRAB` by `sideways` px and pull down-screen by `pull` px.
fn drag(s: &mut Slingshot, sideways: f32, pull: f32) {
    s.pointer_down(GRAB);
    s.pointer_move(Vec2::new(GRAB.x + sideways, GRAB.y - pull));
}

#[test]
fn projections_follow_the_drag_offset() {
    assert_eq!(category_index_for_offset(-140.0), 0);
    assert_eq!(category_index_for_offset(0.0), 2);
    assert_eq!(category_index_for_offset(140.0), 4);
    assert_eq!(category_index_for_offset(-500.0), 0);
    assert_eq!(category_index_for_offset(500.0), 4);
    assert_eq!(amount_for_pull(0.0), 0);
    assert_eq!(amount_for_pull(75.0), 100);
    assert_eq!(amount_for_pull(150.0), 200);
    assert_eq!(
        clamp_drag(Vec2::new(-900.0, 900.0)),
        Vec2::new(-140.0, 150.0)
    );
    assert_eq!(clamp_drag(Vec2::new(10.0, -30.0)), Vec2::new(10.0, 0.0));
}

#[test]
fn dragging_updates_amount_and_category() {
    let mut s = Slingshot::with_seed(1);
    assert!(s.hint_visible());
    drag(&mut s, 70.0, 75.0);
    assert_eq!(s.phase(), SlingshotPhase::Dragging);
    assert!(!s.hint_visible());
    assert_eq!(s.offset(), Vec2::new(70.0, 75.0));
    assert_eq!(s.amount(), 100);
    assert_eq!(s.category(), Category::Fun);
    assert!((s.tension() - 0.5).abs() < 1e-6);
    assert!((s.dial_rotation_deg() - 15.0).abs() < 1e-4);

    // dragging past the bands clamps
    s.pointer_move(Vec2::new(GRAB.x + 1000.0, GRAB.y - 1000.0));
    assert_eq!(s.offset(), Vec2::new(140.0, 150.0));
    assert_eq!(s.category(), Category::Health);
}

#[test]
fn full_pull_launches_and_emits_one_expense() {
    let mut s = Slingshot::with_seed(7);
    drag(&mut s, 0.0, 150.0);
    assert_eq!(s.amount(), 200);
    assert_eq!(s.category_index(), 2);

    s.pointer_up();
    assert_eq!(s.phase(), SlingshotPhase::Launching);
    assert_eq!(s.target(), Vec2::new(0.0, -425.0));
    assert_eq!(s.velocity(), Vec2::new(0.0, -1200.0));

    let events = run_fixed(&mut s, DT, 600, 1_000.0);
    assert_eq!(events.len(), 1, "exactly one expense per launch");
    let e = &events[0];
    assert_eq!(e.amount, 200);
    assert_eq!(e.category, Category::Gear);
    assert!(e.timestamp >= 1_000.0);
    assert!((0.2..0.8).contains(&e.x));
    assert!((0.1..0.5).contains(&e.y));
    assert!(uuid::Uuid::parse_str(&e.id).is_ok());

    // bounced home and went quiet
    assert_eq!(s.phase(), SlingshotPhase::Idle);
    assert_eq!(s.amount(), 0);
    assert!(s.offset().length() < 0.3);
}

#[test]
fn launch_returns_with_a_bounce() {
    let mut s = Slingshot::with_seed(3);
    drag(&mut s, -140.0, 100.0);
    s.pointer_up();
    assert_eq!(s.velocity(), Vec2::new(420.0, -800.0));

    let mut events = Vec::new();
    let mut frames = 0;
    while events.is_empty() && frames < 600 {
        s.advance(DT, 0.0, &mut events);
        frames += 1;
    }
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].category, Category::Food);
    assert_eq!(s.phase(), SlingshotPhase::Returning);
    assert_eq!(s.target(), Vec2::ZERO);
    assert_eq!(s.velocity(), Vec2::new(0.0, -50.0));
}

#[test]
fn weak_pull_snaps_back_without_an_expense() {
    let mut s = Slingshot::with_seed(11);
    drag(&mut s, 20.0, 10.0);
    assert_eq!(s.amount(), 13);
    s.pointer_up();
    assert_eq!(s.phase(), SlingshotPhase::Settling);
    assert_eq!(s.target(), Vec2::ZERO);

    let events = run_fixed(&mut s, DT, 600, 0.0);
    assert!(events.is_empty());
    assert_eq!(s.phase(), SlingshotPhase::Idle);
    assert_eq!(s.amount(), 0);
}

#[test]
fn grab_mid_flight_keeps_the_visual_offset() {
    let mut s = Slingshot::with_seed(5);
    drag(&mut s, 30.0, 120.0);
    s.pointer_up();
    run_fixed(&mut s, DT, 4, 0.0);
    let in_flight = s.offset();
    assert_ne!(in_flight, Vec2::new(30.0, 120.0));

    s.pointer_down(Vec2::new(10.0, 10.0));
    assert_eq!(s.phase(), SlingshotPhase::Dragging);
    assert_eq!(s.offset(), in_flight);
    assert_eq!(s.velocity(), Vec2::ZERO);

    // physics is paused while the finger owns the puck
    let events = run_fixed(&mut s, DT, 30, 0.0);
    assert!(events.is_empty());
    assert_eq!(s.offset(), in_flight);
}

#[test]
fn stray_pointer_events_are_ignored() {
    let mut s = Slingshot::with_seed(9);
    s.pointer_move(Vec2::new(50.0, 50.0));
    s.pointer_up();
    assert_eq!(s.phase(), SlingshotPhase::Idle);
    assert_eq!(s.offset(), Vec2::ZERO);
    assert!(run_fixed(&mut s, DT, 10, 0.0).is_empty());
}

#[test]
fn launched_expenses_have_fresh_ids() {
    let mut s = Slingshot::with_seed(21);
    let mut ids = Vec::new();
    for _ in 0..3 {
        drag(&mut s, 0.0, 90.0);
        s.pointer_up();
        ids.extend(run_fixed(&mut s, DT, 600, 0.0).into_iter().map(|e| e.id));
    }
    assert_eq!(ids.len(), 3);
    assert_ne!(ids[0], ids[1]);
    assert_ne!(ids[1], ids[2]);
}
