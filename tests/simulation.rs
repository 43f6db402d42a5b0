use glam::Vec2;

use zeta_arena::consts::SIM_DT;
use zeta_arena::sim::{
    Aabb, Difficulty, Enemy, GameEvent, GamePhase, GameState, Projectile, TickInput, WavePhase,
};
use zeta_arena::tuning::SpawnPolicy;
use zeta_arena::{ConfigError, Tuning};

/// Spawn points far from the arena centre so nothing touches the player early
fn corner_tuning() -> Tuning {
    let mut tuning = Tuning::default();
    tuning.waves.spawn = Some(SpawnPolicy::Points(vec![Vec2::new(0.0, 0.0)]));
    tuning
}

fn new_state(tuning: Tuning) -> GameState {
    GameState::new(tuning, Difficulty::Normal).expect("valid tuning")
}

#[test]
fn first_enemy_spawns_after_interval() {
    let mut state = new_state(corner_tuning());
    let idle = TickInput::default();

    for _ in 0..29 {
        state.advance(SIM_DT, &idle);
    }
    assert_eq!(state.waves.live_enemy_count(), 0);

    for _ in 0..3 {
        state.advance(SIM_DT, &idle);
    }
    assert_eq!(state.waves.live_enemy_count(), 1);
    assert_eq!(state.waves.enemies_to_spawn, 4);
    assert_eq!(state.snapshot().wave_phase, WavePhase::Spawning);
}

#[test]
fn cleared_wave_advances_once_and_starts_spawning() {
    let mut state = new_state(corner_tuning());
    state.waves.enemies_to_spawn = 0;
    state.waves.enemies.clear();

    state.advance(SIM_DT, &TickInput::default());
    assert_eq!(state.snapshot().wave, 2);
    assert_eq!(state.waves.enemies_to_spawn, 7);

    state.advance(SIM_DT, &TickInput::default());
    assert_eq!(state.snapshot().wave, 2);

    let events = state.drain_events();
    assert!(events.contains(&GameEvent::WaveCleared { wave: 1 }));
    assert!(events.contains(&GameEvent::WaveStarted { wave: 2, enemies: 7 }));
}

#[test]
fn killing_last_enemy_of_wave_advances_wave() {
    let tuning = corner_tuning();
    let mut state = new_state(tuning);
    state.waves.enemies_to_spawn = 0;

    let center = state.player.center();
    let enemy_pos = center + Vec2::new(100.0, -10.0);
    state
        .waves
        .enemies
        .push(Enemy::new(42, enemy_pos, 1, &state.tuning.enemy));
    state.player.projectiles.push(Projectile::new(
        enemy_pos + Vec2::new(8.0, 8.0),
        Vec2::X,
        1,
        &state.tuning.projectile,
    ));

    state.advance(SIM_DT, &TickInput::default());
    assert_eq!(state.progress.kill_count, 1);
    assert_eq!(state.progress.currency, 1);
    assert_eq!(state.snapshot().wave, 1);
    assert_eq!(state.snapshot().wave_phase, WavePhase::Cleared);

    state.advance(SIM_DT, &TickInput::default());
    assert_eq!(state.snapshot().wave, 2);
}

#[test]
fn projectile_wound_keeps_enemy_and_removes_projectile() {
    let mut state = new_state(corner_tuning());
    let enemy_pos = state.player.center() + Vec2::new(100.0, -10.0);
    state
        .waves
        .enemies
        .push(Enemy::new(7, enemy_pos, 3, &state.tuning.enemy));
    state.player.projectiles.push(Projectile::new(
        enemy_pos + Vec2::new(8.0, 8.0),
        Vec2::X,
        1,
        &state.tuning.projectile,
    ));

    state.advance(SIM_DT, &TickInput::default());

    let snapshot = state.snapshot();
    assert!(snapshot.projectiles.is_empty());
    let enemy = snapshot.enemies.iter().find(|e| e.id == 7).expect("enemy alive");
    assert_eq!(enemy.health, 2);
    assert_eq!(snapshot.kill_count, 0);
}

#[test]
fn game_over_freezes_simulation_until_reset() {
    let mut tuning = corner_tuning();
    tuning.enemy.contact_damage = 10;
    let mut state = new_state(tuning);

    let pos = state.player.pos;
    state
        .waves
        .enemies
        .push(Enemy::new(1, pos + Vec2::new(2.0, 2.0), 3, &state.tuning.enemy));
    state.progress.add_money(5);

    state.advance(SIM_DT, &TickInput::default());
    assert!(state.is_game_over());
    let frozen = state.snapshot();
    assert!(frozen.game_over);
    assert_eq!(frozen.player.health, 0);

    let busy = TickInput {
        move_right: true,
        fire: true,
        aim: Vec2::new(0.0, 0.0),
        pause: true,
        ..Default::default()
    };
    for _ in 0..120 {
        state.advance(SIM_DT, &busy);
    }
    assert_eq!(state.snapshot(), frozen);
    assert_eq!(state.phase, GamePhase::GameOver);

    state.reset_game();
    assert!(!state.is_game_over());
    let fresh = state.snapshot();
    assert_eq!(fresh.player.health, 5);
    assert_eq!(fresh.currency, 0);
    assert_eq!(fresh.wave, 1);
    assert!(fresh.enemies.is_empty());
}

#[test]
fn events_report_player_damage_and_death() {
    let mut tuning = corner_tuning();
    tuning.enemy.contact_damage = 5;
    let mut state = new_state(tuning);
    let pos = state.player.pos;
    state
        .waves
        .enemies
        .push(Enemy::new(1, pos, 3, &state.tuning.enemy));
    state.drain_events();

    state.advance(SIM_DT, &TickInput::default());
    let events = state.drain_events();
    assert_eq!(
        events,
        vec![
            GameEvent::PlayerDamaged { damage: 5, remaining: 0 },
            GameEvent::PlayerKilled,
        ]
    );
}

#[test]
fn difficulty_change_affects_new_spawns_only() {
    let mut state = new_state(corner_tuning());
    let idle = TickInput::default();
    for _ in 0..35 {
        state.advance(SIM_DT, &idle);
    }
    assert_eq!(state.waves.enemies[0].health.max(), 3);

    state.set_difficulty(Difficulty::Insane);
    for _ in 0..35 {
        state.advance(SIM_DT, &idle);
    }
    assert_eq!(state.waves.enemies[0].health.max(), 3);
    assert_eq!(state.waves.enemies[1].health.max(), 5);
    assert_eq!(state.snapshot().wave, 1);
}

#[test]
fn reset_replays_identically() {
    let mut state = new_state(Tuning::default());
    let input = TickInput {
        fire: true,
        aim: Vec2::new(0.0, 0.0),
        ..Default::default()
    };

    let mut first = Vec::new();
    for _ in 0..300 {
        state.advance(SIM_DT, &input);
        first.push(state.snapshot());
    }

    state.reset_game();
    for expected in &first {
        state.advance(SIM_DT, &input);
        assert_eq!(&state.snapshot(), expected);
    }
}

#[test]
fn huge_starting_wave_starts_without_overflow() {
    let mut tuning = corner_tuning();
    tuning.difficulty.starting_waves = vec![4_000_000_000; 6];
    let mut state = GameState::new(tuning, Difficulty::Normal).expect("valid tuning");
    assert_eq!(state.snapshot().wave, 4_000_000_000);
    assert_eq!(state.waves.enemies_to_spawn, u32::MAX);

    for _ in 0..35 {
        state.advance(SIM_DT, &TickInput::default());
    }
    assert_eq!(state.waves.live_enemy_count(), 1);
}

#[test]
fn unsampleable_spawn_area_refuses_to_start() {
    let tuning = Tuning::from_json_str(
        r#"{ "waves": { "spawn": { "area": { "min": [3e38, 0.0], "size": [3e38, 10.0] } } } }"#,
    )
    .expect("valid json");
    assert!(matches!(
        GameState::new(tuning, Difficulty::Normal),
        Err(ConfigError::EmptySpawnArea { .. })
    ));

    let mut tuning = Tuning::default();
    tuning.waves.spawn = Some(SpawnPolicy::Area(Aabb::new(
        Vec2::new(1e10, 0.0),
        Vec2::new(1.0, 10.0),
    )));
    assert!(GameState::new(tuning, Difficulty::Normal).is_err());
}

#[test]
fn snapshot_serializes_to_json() {
    let state = new_state(Tuning::default());
    let json = serde_json::to_string(&state.snapshot()).expect("serializable");
    assert!(json.contains("\"wave\":1"));
    assert!(json.contains("\"game_over\":false"));
}
