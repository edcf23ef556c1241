use lane_runner::config::*;
use lane_runner::entities::*;
use lane_runner::session::{Phase, Session};
use lane_runner::sinks::{NullSink, RecordingSink, UiCall};

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

/// A session already past character selection, with every enemy parked
/// far off-screen and stopped, and both gems out of the player's column.
fn started_session(rng: &mut StdRng, ui: &mut RecordingSink) -> Session {
    let mut s = Session::new(rng);
    s.select_character(CharacterId::Boy, ui);
    park_entities(&mut s);
    ui.clear();
    s
}

fn park_entities(s: &mut Session) {
    for e in s.enemies_mut() {
        e.pos.x = -1000.0;
        e.speed = 0.0;
    }
    for g in s.gems_mut() {
        g.pos = Position::new(0.0, 80.0);
    }
}

#[test]
fn new_session_waits_in_character_select() {
    let mut rng = seeded_rng();
    let s = Session::new(&mut rng);
    assert_eq!(s.phase(), Phase::CharacterSelect);
    assert!(s.enemies().is_empty());
    assert!(s.gems().is_empty());
    assert_eq!(s.player().status, PlayerStatus::NotStarted);
}

#[test]
fn selecting_a_character_activates_the_pools() {
    let mut rng = seeded_rng();
    let mut ui = RecordingSink::new();
    let mut s = Session::new(&mut rng);
    s.push_input(InputEvent::SelectCharacter(CharacterId::CatGirl));
    s.tick(0.0, &mut rng, &mut ui);

    assert_eq!(s.phase(), Phase::Active);
    assert_eq!(s.enemies().len(), ENEMY_POOL_SIZE);
    assert_eq!(s.gems().len(), GEM_POOL_SIZE);
    assert!(s.player().is_playing());
    assert_eq!(s.player().character, CharacterId::CatGirl);
    assert!(ui.ui.contains(&UiCall::ResetLives));
    assert!(ui.ui.contains(&UiCall::Panel(Panel::SelectPlayer, false)));
    assert!(ui.ui.contains(&UiCall::Panel(Panel::ScorePanel, true)));
}

#[test]
fn pools_start_one_enemy_per_lane() {
    let mut rng = seeded_rng();
    let mut ui = RecordingSink::new();
    let mut s = Session::new(&mut rng);
    s.select_character(CharacterId::Princess, &mut ui);
    let lanes: Vec<f64> = s.enemies().iter().map(|e| e.pos.y).collect();
    assert_eq!(lanes, ENEMY_LANES.to_vec());
    assert!(s.enemies().iter().all(|e| e.pos.x == ENEMY_SPAWN_X));
}

#[test]
fn input_is_buffered_until_the_next_tick() {
    let mut rng = seeded_rng();
    let mut ui = RecordingSink::new();
    let mut s = started_session(&mut rng, &mut ui);

    s.push_input(InputEvent::Move(Direction::Up));
    s.push_input(InputEvent::Move(Direction::Left));
    assert_eq!(s.pending_inputs(), 2);
    assert_eq!(s.player().pos, Position::new(202.0, 390.0));

    s.tick(0.016, &mut rng, &mut ui);
    assert_eq!(s.pending_inputs(), 0);
    assert_eq!(s.player().pos, Position::new(101.0, 305.0));
}

#[test]
fn tick_reports_score_and_level() {
    let mut rng = seeded_rng();
    let mut ui = RecordingSink::new();
    let mut s = started_session(&mut rng, &mut ui);
    s.tick(0.016, &mut rng, &mut ui);
    assert_eq!(ui.ui, vec![UiCall::Score(0), UiCall::Level(1)]);
}

#[test]
fn enemy_hit_costs_a_life() {
    let mut rng = seeded_rng();
    let mut ui = RecordingSink::new();
    let mut s = started_session(&mut rng, &mut ui);
    s.player_mut().pos = Position::new(202.0, 135.0);
    s.enemies_mut()[1].pos.x = 200.0; // lane y = 145

    s.tick(0.016, &mut rng, &mut ui);
    assert_eq!(s.player().lives, 2);
    assert_eq!(s.player().score, -5);
    assert_eq!(s.player().pos, Position::new(202.0, 390.0));
    assert_eq!(ui.count(&UiCall::RemoveLife), 1);
}

#[test]
fn passing_enemy_levels_up_and_respawns() {
    let mut rng = seeded_rng();
    let mut ui = RecordingSink::new();
    let mut s = started_session(&mut rng, &mut ui);
    s.player_mut().enemies_avoided = 4;
    {
        let e = &mut s.enemies_mut()[0];
        e.pos.x = 500.0;
        e.speed = 100.0;
    }

    s.tick(0.1, &mut rng, &mut ui);
    assert_eq!(s.player().enemies_avoided, 5);
    assert_eq!(s.player().level, 2);

    // Respawned with the new level's speed floor
    let e = &s.enemies()[0];
    assert_eq!(e.pos.x, ENEMY_SPAWN_X);
    assert_eq!(e.pos.y, ENEMY_LANES[e.lane]);
    assert!(e.speed >= 100.0 && e.speed < 300.0);
    assert!(ui.ui.contains(&UiCall::Level(2)));
}

#[test]
fn gem_pickup_scores_and_relocates() {
    let mut rng = seeded_rng();
    let mut ui = RecordingSink::new();
    let mut s = started_session(&mut rng, &mut ui);
    s.player_mut().pos = Position::new(303.0, 135.0);
    {
        let g = &mut s.gems_mut()[0];
        g.pos = Position::new(303.0, 165.0);
        g.kind = GemKind::High;
    }

    s.tick(0.016, &mut rng, &mut ui);
    assert_eq!(s.player().score, 5);
    let g = &s.gems()[0];
    assert!(GEM_COLUMNS.contains(&g.pos.x));
    assert!(GEM_ROWS.contains(&g.pos.y));
}

#[test]
fn last_life_lost_mid_tick_stops_further_effects() {
    let mut rng = seeded_rng();
    let mut ui = RecordingSink::new();
    let mut s = started_session(&mut rng, &mut ui);
    s.player_mut().lives = 1;
    s.player_mut().pos = Position::new(202.0, 220.0);

    // Two enemies on the player's lane, one gem under the start tile
    for e in s.enemies_mut().iter_mut().take(2) {
        e.lane = 2;
        e.pos = Position::new(202.0, ENEMY_LANES[2]);
    }
    s.gems_mut()[0].pos = Position::new(202.0, 390.0);
    s.push_input(InputEvent::Move(Direction::Up));

    s.tick(0.016, &mut rng, &mut ui);
    assert_eq!(s.player().lives, 0);
    assert_eq!(s.player().score, -5);
    assert_eq!(s.player().status, PlayerStatus::GameOver);
    assert_eq!(s.player().pos, Position::new(202.0, 390.0));
    assert_eq!(ui.end_messages(), vec!["The alien loses, with -5 points!"]);
}

#[test]
fn enemies_keep_moving_after_game_over_without_effects() {
    let mut rng = seeded_rng();
    let mut ui = RecordingSink::new();
    let mut s = started_session(&mut rng, &mut ui);
    s.player_mut().lives = 1;
    s.player_mut().meet_enemy(&mut ui);
    let avoided = s.player().enemies_avoided;

    {
        let e = &mut s.enemies_mut()[0];
        e.pos.x = 500.0;
        e.speed = 100.0;
    }
    s.tick(0.1, &mut rng, &mut ui);
    assert_eq!(s.player().enemies_avoided, avoided);
    assert_eq!(s.enemies()[0].pos.x, ENEMY_SPAWN_X);
}

#[test]
fn selection_ignored_during_a_run() {
    let mut rng = seeded_rng();
    let mut ui = RecordingSink::new();
    let mut s = started_session(&mut rng, &mut ui);
    s.player_mut().score = 12;

    s.push_input(InputEvent::SelectCharacter(CharacterId::PinkGirl));
    s.tick(0.016, &mut rng, &mut ui);
    assert_eq!(s.player().character, CharacterId::Boy);
    assert_eq!(s.player().score, 12);
    assert_eq!(ui.count(&UiCall::ResetLives), 0);
}

#[test]
fn restart_ignored_while_playing() {
    let mut rng = seeded_rng();
    let mut ui = RecordingSink::new();
    let mut s = started_session(&mut rng, &mut ui);
    s.push_input(InputEvent::RestartRequested);
    s.tick(0.016, &mut rng, &mut ui);
    assert_eq!(s.phase(), Phase::Active);
    assert!(s.player().is_playing());
}

#[test]
fn full_cycle_select_lose_restart_select() {
    let mut rng = seeded_rng();
    let mut ui = RecordingSink::new();
    let mut s = started_session(&mut rng, &mut ui);

    for _ in 0..3 {
        s.player_mut().meet_enemy(&mut ui);
    }
    assert_eq!(s.player().status, PlayerStatus::GameOver);

    s.push_input(InputEvent::RestartRequested);
    s.tick(0.016, &mut rng, &mut ui);
    assert_eq!(s.phase(), Phase::CharacterSelect);
    assert!(s.enemies().is_empty());
    assert!(ui.ui.contains(&UiCall::Panel(Panel::WinLoseMessage, false)));
    assert!(ui.ui.contains(&UiCall::Panel(Panel::SelectPlayer, true)));

    s.push_input(InputEvent::SelectCharacter(CharacterId::HornGirl));
    s.tick(0.0, &mut rng, &mut ui);
    let p = s.player();
    assert!(p.is_playing());
    assert_eq!(p.character, CharacterId::HornGirl);
    assert_eq!((p.level, p.lives, p.score, p.enemies_avoided), (1, 3, 0, 0));
    assert_eq!(s.enemies().len(), ENEMY_POOL_SIZE);
}

#[test]
fn render_draws_enemies_gems_then_player() {
    let mut rng = seeded_rng();
    let mut ui = RecordingSink::new();
    let mut s = started_session(&mut rng, &mut ui);
    let mut out = RecordingSink::new();
    s.frame(0.0, &mut rng, &mut NullSink, &mut out);

    let sprites: Vec<Sprite> = out.draws.iter().map(|d| d.0).collect();
    assert_eq!(sprites.len(), ENEMY_POOL_SIZE + GEM_POOL_SIZE + 1);
    assert!(sprites[..ENEMY_POOL_SIZE].iter().all(|s| *s == Sprite::Enemy));
    assert_eq!(
        *sprites.last().unwrap(),
        Sprite::Character(CharacterId::Boy)
    );
    assert_eq!(out.draws.last().unwrap().1, 202.0);
}

#[test]
fn render_in_menu_draws_only_the_player() {
    let mut rng = seeded_rng();
    let s = Session::new(&mut rng);
    let mut out = RecordingSink::new();
    s.render(&mut out);
    assert_eq!(out.draws.len(), 1);
}
