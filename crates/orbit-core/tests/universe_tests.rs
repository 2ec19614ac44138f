// Host-side tests for the background universe.

use orbit_core::universe::{generate_stars, orb_target_radius};
use orbit_core::{run_fixed, Category, Expense, Ripple, Universe};

const DT: f32 = 1.0 / 60.0;

fn expense(id: &str, amount: u32, category: Category, x: f32, y: f32) -> Expense {
    Expense {
        id: id.to_string(),
        amount,
        category,
        timestamp: 0.0,
        x,
        y,
    }
}

#[test]
fn starfield_is_deterministic_and_stays_up_top() {
    let stars = generate_stars(120, 800.0, 600.0);
    assert_eq!(stars, generate_stars(120, 800.0, 600.0));
    for s in &stars {
        assert!((0.0..800.0).contains(&s.x));
        assert!((0.0..420.0).contains(&s.y));
        assert!(s.radius >= 0.3 && s.radius <= 1.9);
        for t in [0.0, 250.0, 1_000.0, 12_345.0] {
            let a = s.alpha(t);
            assert!(a >= s.brightness * 0.4 - 1e-6 && a <= s.brightness + 1e-6);
        }
    }

    let universe = Universe::with_seed(800.0, 600.0, 1);
    assert_eq!(universe.stars().len(), 120);
    assert_eq!(universe.stars(), &stars[..]);
}

#[test]
fn orb_size_follows_amount_with_a_cap() {
    assert_eq!(orb_target_radius(0), 8.0);
    assert!((orb_target_radius(100) - 23.0).abs() < 1e-4);
    assert!((orb_target_radius(200) - 38.0).abs() < 1e-4);
    assert_eq!(orb_target_radius(5_000), 40.0);
}

#[test]
fn expenses_become_orbs_in_the_upper_field() {
    let mut universe = Universe::with_seed(1000.0, 500.0, 2);
    universe.set_expenses(vec![
        expense("a", 100, Category::Food, 0.5, 0.5),
        expense("b", 0, Category::Health, 0.2, 0.1),
    ]);
    let orbs = universe.orbs();
    assert_eq!(orbs.len(), 2);
    assert_eq!(orbs[0].x, 500.0);
    assert_eq!(orbs[0].y, 0.5 * 500.0 * 0.6 + 40.0);
    assert_eq!(orbs[0].radius, 0.0);
    assert!((orbs[0].target_radius - 23.0).abs() < 1e-4);
    assert_eq!(orbs[0].category, Category::Food);
    assert_eq!(orbs[1].category, Category::Health);
    assert_eq!(orbs[1].opacity, 0.8);
}

#[test]
fn orbs_grow_then_hold_their_size() {
    let mut universe = Universe::with_seed(400.0, 800.0, 3);
    universe.set_expenses(vec![expense("a", 200, Category::Gear, 0.4, 0.4)]);
    run_fixed(&mut universe, DT, 1, 0.0);
    let first = universe.orbs()[0].radius;
    assert!(first > 0.0 && first < 38.0);
    assert!(!universe.orbs()[0].shows_glyph());

    run_fixed(&mut universe, DT, 600, 0.0);
    let orb = &universe.orbs()[0];
    assert!((orb.radius - 38.0).abs() < 0.01);
    assert!(orb.shows_glyph());
    let pulsed = orb.pulsed_radius(universe.time_ms());
    assert!((pulsed - orb.radius).abs() <= 2.0 + 1e-4);
}

#[test]
fn new_expense_list_rebuilds_every_orb() {
    let mut universe = Universe::with_seed(400.0, 800.0, 4);
    universe.set_expenses(vec![expense("a", 50, Category::Fun, 0.3, 0.3)]);
    run_fixed(&mut universe, DT, 120, 0.0);
    assert!(universe.orbs()[0].radius > 10.0);

    universe.set_expenses(vec![
        expense("a", 50, Category::Fun, 0.3, 0.3),
        expense("b", 80, Category::Travel, 0.6, 0.2),
    ]);
    assert_eq!(universe.orbs().len(), 2);
    assert!(universe.orbs().iter().all(|o| o.radius == 0.0));
}

#[test]
fn resize_reprojects_stars_and_orbs() {
    let mut universe = Universe::with_seed(400.0, 400.0, 5);
    universe.set_expenses(vec![expense("a", 10, Category::Food, 0.5, 0.0)]);
    universe.set_viewport(800.0, 1000.0);
    assert_eq!(universe.width(), 800.0);
    assert_eq!(universe.orbs()[0].x, 400.0);
    assert_eq!(universe.orbs()[0].y, 40.0);
    assert!(universe.stars().iter().all(|s| s.y < 700.0));

    // a collapsed viewport keeps the last starfield
    universe.set_viewport(0.0, 0.0);
    assert_eq!(universe.stars().len(), 120);
}

#[test]
fn clock_accumulates_frame_time() {
    let mut universe = Universe::with_seed(400.0, 400.0, 6);
    assert_eq!(universe.time_ms(), 0.0);
    run_fixed(&mut universe, DT, 60, 0.0);
    assert!((universe.time_ms() - 1_000.0).abs() < 0.1);
}

#[test]
fn wallet_mode_hides_the_starfield() {
    let mut universe = Universe::with_seed(400.0, 400.0, 7);
    assert!(universe.shows_starfield());
    universe.set_wallet_mode(true);
    assert!(universe.wallet_mode());
    assert!(!universe.shows_starfield());
    universe.set_wallet_mode(false);
    assert!(universe.shows_starfield());
}

#[test]
fn ripples_thin_as_they_expand() {
    let mut ripple = Ripple {
        x: 10.0,
        y: 10.0,
        radius: 0.0,
        max_radius: 100.0,
        opacity: 1.0,
        color: "rgb(255,107,107)".to_string(),
    };
    assert_eq!(ripple.stroke_width(), 6.0);
    ripple.radius = 50.0;
    assert_eq!(ripple.stroke_width(), 4.0);
    ripple.radius = 100.0;
    assert_eq!(ripple.stroke_width(), 2.0);
    assert!(ripple.visible());
    ripple.opacity = 0.0;
    assert!(!ripple.visible());

    let mut universe = Universe::with_seed(400.0, 400.0, 8);
    universe.set_ripples(vec![ripple.clone()]);
    assert_eq!(universe.ripples(), &[ripple][..]);
}

#[test]
fn ripples_arrive_from_host_json() {
    let json = r#"{"x":12,"y":30,"radius":4,"maxRadius":80,"opacity":0.6,"color":"rgb(1,2,3)"}"#;
    let ripple: Ripple = serde_json::from_str(json).unwrap();
    assert_eq!(ripple.max_radius, 80.0);
    assert_eq!(ripple.color, "rgb(1,2,3)");
}
