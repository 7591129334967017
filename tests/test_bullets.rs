use invaders::bullet::{BulletConfig, BulletPool};
use invaders::config::PLAY_HEIGHT;
use invaders::geometry::{MoveDirection, Point, Rect};

const UP_CONFIG: BulletConfig = BulletConfig {
    width: 8.0,
    height: 19.0,
    speed: 12.0,
    direction: MoveDirection::Up,
};

const DOWN_CONFIG: BulletConfig = BulletConfig {
    width: 8.0,
    height: 19.0,
    speed: 7.0,
    direction: MoveDirection::Down,
};

fn spawner_at(x: f32, y: f32) -> Rect {
    // Same size as the bullet, so the spawned bullet lands exactly at (x, y).
    Rect::new(Point::new(x, y), 8.0, 19.0)
}

fn active_flags(pool: &BulletPool) -> usize {
    pool.slots().iter().filter(|b| b.active).count()
}

#[test]
fn new_pool_is_empty_and_parked_off_screen() {
    let pool = BulletPool::new(4, UP_CONFIG);

    assert_eq!(pool.capacity(), 4);
    assert_eq!(pool.quantity(), 0);
    assert!(!pool.is_full());

    for bullet in pool.slots() {
        assert!(!bullet.active);
        assert_eq!(bullet.pos, Point::new(-10.0, -10.0));
    }
}

#[test]
fn slot_ids_match_indices() {
    let pool = BulletPool::new(8, DOWN_CONFIG);

    for (index, bullet) in pool.slots().iter().enumerate() {
        assert_eq!(bullet.id, index);
    }
}

#[test]
fn quantity_always_matches_active_flags() {
    let mut pool = BulletPool::new(3, UP_CONFIG);

    pool.fire(&spawner_at(100.0, 300.0));
    pool.fire(&spawner_at(200.0, 300.0));
    assert_eq!(pool.quantity(), active_flags(&pool));

    pool.deactivate(0);
    assert_eq!(pool.quantity(), active_flags(&pool));

    pool.fire(&spawner_at(300.0, 300.0));
    pool.update();
    assert_eq!(pool.quantity(), active_flags(&pool));
}

#[test]
fn single_slot_pool_lifecycle() {
    let mut pool = BulletPool::new(1, UP_CONFIG);

    assert!(pool.fire(&spawner_at(100.0, 300.0)));
    assert_eq!(pool.quantity(), 1);
    assert!(pool.is_full());

    // Second shot while the slot is live is silently dropped.
    assert!(!pool.fire(&spawner_at(100.0, 300.0)));
    assert_eq!(pool.quantity(), 1);

    pool.deactivate(0);
    assert_eq!(pool.quantity(), 0);

    assert!(pool.fire(&spawner_at(100.0, 300.0)));
    assert_eq!(pool.quantity(), 1);
}

#[test]
fn fire_reuses_lowest_index_inactive_slot() {
    let mut pool = BulletPool::new(3, UP_CONFIG);

    pool.fire(&spawner_at(10.0, 300.0));
    pool.fire(&spawner_at(20.0, 300.0));
    pool.fire(&spawner_at(30.0, 300.0));

    pool.deactivate(2);
    pool.deactivate(0);

    pool.fire(&spawner_at(99.0, 300.0));
    assert!(pool.slots()[0].active);
    assert_eq!(pool.slots()[0].pos.x, 99.0);
    assert!(!pool.slots()[2].active);
}

#[test]
fn fired_bullet_is_centered_inside_spawner() {
    let mut pool = BulletPool::new(1, UP_CONFIG);
    let spawner = Rect::new(Point::new(96.0, 200.0), 16.0, 19.0);

    pool.fire(&spawner);

    assert_eq!(pool.slots()[0].pos, Point::new(100.0, 200.0));
}

#[test]
fn update_advances_by_speed_in_configured_direction() {
    let mut up = BulletPool::new(1, UP_CONFIG);
    up.fire(&spawner_at(100.0, 300.0));
    up.update();
    assert_eq!(up.slots()[0].pos.y, 288.0);

    let mut down = BulletPool::new(1, DOWN_CONFIG);
    down.fire(&spawner_at(100.0, 300.0));
    down.update();
    assert_eq!(down.slots()[0].pos.y, 307.0);
}

#[test]
fn upward_bullet_retires_past_the_top() {
    let mut pool = BulletPool::new(1, UP_CONFIG);
    pool.fire(&spawner_at(100.0, 5.0));

    for _ in 0..3 {
        pool.update();
    }

    assert_eq!(pool.quantity(), 0);
    assert!(!pool.slots()[0].active);
}

#[test]
fn downward_bullet_retires_past_the_bottom() {
    let mut pool = BulletPool::new(1, DOWN_CONFIG);
    pool.fire(&spawner_at(100.0, PLAY_HEIGHT - 5.0));

    for _ in 0..2 {
        pool.update();
    }

    assert_eq!(pool.quantity(), 0);
}

#[test]
fn iter_active_skips_retired_slots() {
    let mut pool = BulletPool::new(3, UP_CONFIG);
    pool.fire(&spawner_at(10.0, 300.0));
    pool.fire(&spawner_at(20.0, 300.0));
    pool.deactivate(0);

    let active: Vec<usize> = pool.iter_active().map(|b| b.id).collect();
    assert_eq!(active, vec![1]);
}
