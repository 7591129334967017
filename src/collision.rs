/// Cross-product collision resolution between all live entity categories.
///
/// Deliberate brute force — entity counts are tiny.  Aliens are tested in
/// array order and the first match wins, which keeps outcomes predictable
/// for tests.  Every hit deactivates the bullet, so a bullet kills at most
/// one target.

use crate::alien::AlienFormation;
use crate::events::EventQueue;
use crate::explosion::ExplosionManager;
use crate::player::Player;
use crate::ufo::Ufo;

pub fn handle_collisions(
    player: &mut Player,
    formation: &mut AlienFormation,
    ufo: &mut Ufo,
    explosions: &mut ExplosionManager,
    events: &mut EventQueue,
    now: f64,
) {
    player_bullets_vs_aliens(player, formation, explosions, events, now);
    player_bullets_vs_ufo(player, ufo, explosions, events, now);
    alien_bullets_vs_player(formation, player, events);
}

fn player_bullets_vs_aliens(
    player: &mut Player,
    formation: &mut AlienFormation,
    explosions: &mut ExplosionManager,
    events: &mut EventQueue,
    now: f64,
) {
    for id in 0..player.bullets.capacity() {
        let bullet = player.bullets.slots()[id];

        if !bullet.active {
            continue;
        }

        let bullet_collider = bullet.collider();

        for alien_id in 0..formation.aliens.len() {
            if !formation.aliens[alien_id].alive {
                continue;
            }

            let alien_collider = formation.aliens[alien_id].collider();

            if bullet_collider.overlaps(&alien_collider) {
                player.add_score(formation.aliens[alien_id].points);
                explosions.trigger(&alien_collider, now);
                formation.kill_by_id(alien_id, events);
                player.bullets.deactivate(id);
                break;
            }
        }
    }
}

fn player_bullets_vs_ufo(
    player: &mut Player,
    ufo: &mut Ufo,
    explosions: &mut ExplosionManager,
    events: &mut EventQueue,
    now: f64,
) {
    if !ufo.active {
        return;
    }

    for id in 0..player.bullets.capacity() {
        let bullet = player.bullets.slots()[id];

        if !bullet.active {
            continue;
        }

        if bullet.collider().overlaps(&ufo.collider()) {
            player.add_score(ufo.points);
            explosions.trigger(&ufo.collider(), now);
            ufo.kill(now, events);
            player.bullets.deactivate(id);
            return;
        }
    }
}

fn alien_bullets_vs_player(
    formation: &mut AlienFormation,
    player: &mut Player,
    events: &mut EventQueue,
) {
    let player_collider = player.collider();

    for id in 0..formation.bullets.capacity() {
        let bullet = formation.bullets.slots()[id];

        if !bullet.active {
            continue;
        }

        if bullet.collider().overlaps(&player_collider) {
            formation.bullets.deactivate(id);
            player.take_hit(events);
        }
    }
}
