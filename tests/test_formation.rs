use rand::rngs::StdRng;
use rand::SeedableRng;

use invaders::alien::{AlienDistribution, AlienFormation, AlienKind};
use invaders::config::PLAY_WIDTH;
use invaders::events::{EventQueue, SoundKind};
use invaders::geometry::{MoveDirection, Point};

const THREE_ROWS: AlienDistribution = [
    (AlienKind::Toxic, 1),
    (AlienKind::Rage, 1),
    (AlienKind::Spooky, 1),
];

const ONE_ROW: AlienDistribution = [
    (AlienKind::Toxic, 1),
    (AlienKind::Rage, 0),
    (AlienKind::Spooky, 0),
];

// Intervals chosen so a whole-second `now` always triggers exactly one
// move decision and never an alien shot.
fn formation(distribution: &AlienDistribution, columns: usize) -> AlienFormation {
    AlienFormation::new(distribution, columns, 1.0, 1e9, 0.0)
}

fn positions(formation: &AlienFormation) -> Vec<Point> {
    formation.aliens.iter().map(|a| a.pos).collect()
}

#[test]
fn grid_is_built_row_by_row_in_table_order() {
    let formation = formation(&THREE_ROWS, 5);

    assert_eq!(formation.rows, 3);
    assert_eq!(formation.columns, 5);
    assert_eq!(formation.aliens.len(), 15);
    assert_eq!(formation.alives, 15);
    assert_eq!(formation.direction, MoveDirection::Right);

    for (i, alien) in formation.aliens.iter().enumerate() {
        assert_eq!(alien.id, i);
        let expected_kind = match i / 5 {
            0 => AlienKind::Toxic,
            1 => AlienKind::Rage,
            _ => AlienKind::Spooky,
        };
        assert_eq!(alien.kind, expected_kind);
    }

    // Column pitch is width + gap, row pitch is height + gap.
    assert_eq!(formation.aliens[0].pos, Point::new(60.0, 80.0));
    assert_eq!(formation.aliens[1].pos, Point::new(120.0, 80.0));
    assert_eq!(formation.aliens[5].pos, Point::new(60.0, 136.0));
}

#[test]
fn every_move_is_a_uniform_sweep_or_a_uniform_descent() {
    let mut formation = formation(&THREE_ROWS, 5);
    let mut rng = StdRng::seed_from_u64(7);
    let mut events = EventQueue::new();

    for tick in 1..=60 {
        let before = positions(&formation);
        formation.update(tick as f64, &mut rng, &mut events);
        let after = positions(&formation);

        let deltas: Vec<(f32, f32)> = before
            .iter()
            .zip(&after)
            .map(|(b, a)| (a.x - b.x, a.y - b.y))
            .collect();

        let first = deltas[0];
        assert!(deltas.iter().all(|&d| d == first), "mixed move at tick {tick}");
        assert!(
            first == (10.0, 0.0) || first == (-10.0, 0.0) || first == (0.0, 20.0),
            "unexpected step {first:?} at tick {tick}"
        );
    }
}

#[test]
fn formation_never_leaves_the_playfield() {
    let mut formation = formation(&THREE_ROWS, 5);
    let mut rng = StdRng::seed_from_u64(7);
    let mut events = EventQueue::new();

    for tick in 1..=200 {
        formation.update(tick as f64, &mut rng, &mut events);
        let (min_x, max_x) = formation.live_bounds().unwrap();
        assert!(min_x >= 0.0);
        assert!(max_x <= PLAY_WIDTH);
    }
}

#[test]
fn five_steps_to_the_wall_then_descend_and_flip() {
    let mut formation = formation(&ONE_ROW, 5);
    let mut rng = StdRng::seed_from_u64(1);
    let mut events = EventQueue::new();

    // Park the row so its leading edge (340 at spawn) sits five steps
    // short of the wall.
    let shift = (PLAY_WIDTH - 5.0 * 10.0) - 340.0;
    for alien in formation.aliens.iter_mut() {
        alien.pos.x += shift;
    }

    for tick in 1..=5 {
        let before = positions(&formation);
        formation.update(tick as f64, &mut rng, &mut events);
        for (b, a) in before.iter().zip(positions(&formation)) {
            assert_eq!(a.x, b.x + 10.0);
            assert_eq!(a.y, b.y);
        }
    }

    let (_, max_x) = formation.live_bounds().unwrap();
    assert_eq!(max_x, PLAY_WIDTH);
    assert_eq!(formation.direction, MoveDirection::Right);

    // The sixth decision has no room left to sweep.
    let before = positions(&formation);
    formation.update(6.0, &mut rng, &mut events);
    for (b, a) in before.iter().zip(positions(&formation)) {
        assert_eq!(a.x, b.x);
        assert_eq!(a.y, b.y + 20.0);
    }
    assert_eq!(formation.direction, MoveDirection::Left);
}

#[test]
fn left_wall_contact_flips_back_to_the_right() {
    let mut formation = formation(&ONE_ROW, 2);
    let mut rng = StdRng::seed_from_u64(1);
    let mut events = EventQueue::new();

    formation.direction = MoveDirection::Left;
    formation.aliens[0].pos.x = 5.0;
    formation.aliens[1].pos.x = 65.0;

    formation.update(1.0, &mut rng, &mut events);

    assert_eq!(formation.direction, MoveDirection::Right);
    assert_eq!(formation.aliens[0].pos.x, 5.0);
    assert_eq!(formation.aliens[0].pos.y, 100.0);
}

#[test]
fn kill_by_id_is_idempotent() {
    let mut formation = formation(&THREE_ROWS, 5);
    let mut events = EventQueue::new();

    formation.kill_by_id(3, &mut events);
    assert!(!formation.aliens[3].alive);
    assert_eq!(formation.alives, 14);
    assert_eq!(events.sounds(), &[SoundKind::AlienDie]);

    formation.kill_by_id(3, &mut events);
    assert_eq!(formation.alives, 14);
    assert_eq!(events.sounds().len(), 1);
}

#[test]
fn dead_aliens_do_not_move() {
    let mut formation = formation(&ONE_ROW, 3);
    let mut rng = StdRng::seed_from_u64(1);
    let mut events = EventQueue::new();

    formation.kill_by_id(1, &mut events);
    let parked = formation.aliens[1].pos;

    formation.update(1.0, &mut rng, &mut events);

    assert_eq!(formation.aliens[1].pos, parked);
    assert_eq!(formation.aliens[0].pos.x, 70.0);
}

#[test]
fn bounds_shrink_to_the_survivors() {
    let mut formation = formation(&ONE_ROW, 3);
    let mut events = EventQueue::new();

    formation.kill_by_id(0, &mut events);
    formation.kill_by_id(2, &mut events);

    let (min_x, max_x) = formation.live_bounds().unwrap();
    assert_eq!(min_x, 120.0);
    assert_eq!(max_x, 160.0);
    assert_eq!(formation.group_width, 40.0);
}

#[test]
fn empty_formation_reports_all_dead_and_still_updates() {
    let mut formation = formation(&ONE_ROW, 2);
    let mut rng = StdRng::seed_from_u64(1);
    let mut events = EventQueue::new();

    formation.kill_by_id(0, &mut events);
    formation.kill_by_id(1, &mut events);

    assert!(formation.all_dead());
    assert!(formation.live_bounds().is_none());

    formation.update(1.0, &mut rng, &mut events);
}

#[test]
fn threshold_crossing_tracks_live_bottom_edges() {
    let mut formation = formation(&THREE_ROWS, 5);
    let mut events = EventQueue::new();

    assert!(!formation.crossed_threshold(500.0));

    formation.aliens[14].pos.y = 470.0;
    assert!(formation.crossed_threshold(500.0));

    // A dead alien past the line does not count.
    formation.kill_by_id(14, &mut events);
    assert!(!formation.crossed_threshold(500.0));
}

#[test]
fn a_live_alien_fires_from_the_shared_pool() {
    let mut formation = AlienFormation::new(&ONE_ROW, 3, 1e9, 0.5, 0.0);
    let mut rng = StdRng::seed_from_u64(42);
    let mut events = EventQueue::new();

    formation.update(1.0, &mut rng, &mut events);

    assert_eq!(formation.bullets.quantity(), 1);

    let bullet = formation.bullets.slots()[0];
    assert_eq!(bullet.direction, MoveDirection::Down);

    let from_live_alien = formation
        .aliens
        .iter()
        .filter(|a| a.alive)
        .any(|a| bullet.collider().overlaps(&a.collider()));
    assert!(from_live_alien);
}

#[test]
fn only_the_survivor_can_shoot() {
    let mut formation = AlienFormation::new(&ONE_ROW, 3, 1e9, 0.5, 0.0);
    let mut rng = StdRng::seed_from_u64(42);
    let mut events = EventQueue::new();

    formation.kill_by_id(0, &mut events);
    formation.kill_by_id(2, &mut events);

    formation.update(1.0, &mut rng, &mut events);

    let bullet = formation.bullets.slots()[0];
    assert!(bullet.active);
    assert!(bullet.collider().overlaps(&formation.aliens[1].collider()));
}

#[test]
fn fire_waits_for_its_interval() {
    let mut formation = AlienFormation::new(&ONE_ROW, 3, 1e9, 10.0, 0.0);
    let mut rng = StdRng::seed_from_u64(42);
    let mut events = EventQueue::new();

    formation.update(5.0, &mut rng, &mut events);
    assert_eq!(formation.bullets.quantity(), 0);

    formation.update(10.0, &mut rng, &mut events);
    assert_eq!(formation.bullets.quantity(), 1);
}
