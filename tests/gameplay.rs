//! End-to-end sessions driven through `Game` with in-memory collaborators

use glam::Vec2;

use hoop_shot::consts::*;
use hoop_shot::platform::{MemoryStore, ScoreDisplay};
use hoop_shot::renderer::DrawCommand;
use hoop_shot::sim::{BallState, PointerInput};
use hoop_shot::{Game, Settings};

const W: f32 = 800.0;
const H: f32 = 600.0;
const FRAME_MS: f64 = 1000.0 / 60.0;

#[derive(Default)]
struct RecordingDisplay {
    shown: Vec<(u32, u32)>,
}

impl ScoreDisplay for RecordingDisplay {
    fn show(&mut self, current: u32, best: u32) {
        self.shown.push((current, best));
    }
}

fn new_game(stored_best: Option<&str>) -> Game<RecordingDisplay, MemoryStore> {
    let store = match stored_best {
        Some(v) => MemoryStore::with_value(v),
        None => MemoryStore::default(),
    };
    Game::new(W, H, Settings::default(), RecordingDisplay::default(), store)
}

/// Place a flying ball just above the hoop, heading down through it
fn line_up_basket(game: &mut Game<RecordingDisplay, MemoryStore>) {
    let rim_x = game.state.court.rim.x;
    game.state.ball.pos = Vec2::new(rim_x, 100.0);
    game.state.ball.launch(Vec2::new(0.0, 2.0));
}

/// Place a flying ball below the canvas
fn line_up_miss(game: &mut Game<RecordingDisplay, MemoryStore>) {
    game.state.ball.pos = Vec2::new(W / 2.0, H + 40.0);
    game.state.ball.launch(Vec2::new(0.0, 5.0));
}

#[test]
fn drag_release_throws_slingshot_style() {
    let mut game = new_game(None);
    let center = Vec2::new(W / 2.0, H / 2.0);

    assert!(game.pointer_down(PointerInput::mouse(center.x, center.y)));
    game.pointer_move(PointerInput::mouse(center.x - 60.0, center.y + 30.0));
    let vel = game.pointer_up(PointerInput::mouse(center.x - 100.0, center.y + 50.0));

    assert_eq!(vel, Some(Vec2::new(10.0, -5.0)));
    assert_eq!(game.state.ball.state, BallState::Flying);

    game.frame(FRAME_MS);
    assert!(game.state.ball.pos.x > center.x);
}

#[test]
fn touch_input_works_like_mouse() {
    let mut game = new_game(None);
    let center = Vec2::new(W / 2.0, H / 2.0);

    assert!(game.pointer_down(PointerInput::touch(center.x + 5.0, center.y)));
    let vel = game.pointer_up(PointerInput::touch(center.x + 5.0, center.y + 400.0));

    assert_eq!(vel, Some(Vec2::new(0.0, -MAX_INITIAL_VELOCITY)));
}

#[test]
fn press_away_from_ball_does_nothing() {
    let mut game = new_game(None);

    assert!(!game.pointer_down(PointerInput::mouse(5.0, 5.0)));
    assert_eq!(game.pointer_up(PointerInput::mouse(100.0, 100.0)), None);
    assert_eq!(game.state.ball.state, BallState::Idle);
}

#[test]
fn basket_increments_score_and_resets_ball() {
    let mut game = new_game(Some("4"));
    line_up_basket(&mut game);

    game.frame(FRAME_MS);

    assert_eq!(game.scoreboard().current, 1);
    assert_eq!(game.display().shown.last(), Some(&(1, 4)));
    assert_eq!(game.state.ball.state, BallState::Idle);
    assert_eq!(game.state.ball.pos, Vec2::new(W / 2.0, H / 2.0));
    assert_eq!(game.state.ball.vel, Vec2::ZERO);
    // Best score only moves on a miss
    assert_eq!(game.store().value.as_deref(), Some("4"));
}

#[test]
fn miss_after_streak_saves_new_best() {
    let mut game = new_game(Some("2"));

    for _ in 0..3 {
        line_up_basket(&mut game);
        game.frame(FRAME_MS);
    }
    assert_eq!(game.scoreboard().current, 3);

    line_up_miss(&mut game);
    game.frame(FRAME_MS);

    assert_eq!(game.scoreboard().current, 0);
    assert_eq!(game.scoreboard().best, 3);
    assert_eq!(game.store().value.as_deref(), Some("3"));
    assert_eq!(
        game.display().shown,
        vec![(0, 2), (1, 2), (2, 2), (3, 2), (0, 3)]
    );
    assert_eq!(game.state.ball.state, BallState::Idle);
}

#[test]
fn miss_below_best_leaves_store_alone() {
    let mut game = new_game(Some("10"));
    line_up_basket(&mut game);
    game.frame(FRAME_MS);

    line_up_miss(&mut game);
    game.frame(FRAME_MS);

    assert_eq!(game.scoreboard().best, 10);
    assert_eq!(game.store().value.as_deref(), Some("10"));
    assert_eq!(game.display().shown.last(), Some(&(0, 10)));
}

#[test]
fn corrupt_stored_best_starts_at_zero() {
    let game = new_game(Some("lots"));
    assert_eq!(game.scoreboard().best, 0);
    assert_eq!(game.display().shown, vec![(0, 0)]);
}

#[test]
fn left_rim_bounce_reverses_and_damps() {
    let mut game = new_game(None);
    game.state.ball.pos = Vec2::new(335.0, 60.0);
    game.state.ball.launch(Vec2::new(2.0, 2.0));

    let mut probe = game.state.ball.clone();
    probe.integrate();
    probe.update_radius(H);

    game.frame(FRAME_MS);

    let ball = &game.state.ball;
    let zone = game.state.court.rim.left_zone;
    assert!((ball.vel.x - probe.vel.x * RIM_RESTITUTION_X).abs() < 1e-5);
    assert!((ball.vel.y - probe.vel.y * RIM_RESTITUTION_Y).abs() < 1e-5);
    assert!((ball.pos.x - (zone.x - probe.radius)).abs() < 1e-4);
    assert_eq!(game.scoreboard().current, 0);
}

#[test]
fn unthrown_release_falls_and_misses() {
    let mut game = new_game(None);
    let center = Vec2::new(W / 2.0, H / 2.0);
    game.pointer_down(PointerInput::mouse(center.x, center.y));
    game.pointer_up(PointerInput::mouse(center.x, center.y));

    let mut frames = 0;
    while game.state.ball.state == BallState::Flying && frames < 600 {
        game.frame(frames as f64 * FRAME_MS);
        frames += 1;
    }

    assert_eq!(game.state.ball.state, BallState::Idle);
    assert!(frames > 1);
    assert_eq!(game.display().shown.last(), Some(&(0, 0)));
}

#[test]
fn resize_moves_court_and_idle_ball() {
    let mut game = new_game(None);
    game.resize(1200.0, 900.0);
    game.frame(FRAME_MS);

    assert_eq!(game.state.court.rim.x, 600.0);
    assert_eq!(game.state.ball.pos, Vec2::new(600.0, 450.0));
}

#[test]
fn frame_draws_court_then_ball() {
    let mut game = new_game(None);
    let commands = game.frame(FRAME_MS);

    assert!(matches!(commands.first(), Some(DrawCommand::Clear { .. })));
    let first_ball_cmd = commands
        .iter()
        .position(|c| matches!(c, DrawCommand::FillCircle { .. }))
        .unwrap();
    let last_rect = commands
        .iter()
        .rposition(|c| matches!(c, DrawCommand::FillRect { .. }))
        .unwrap();
    assert!(last_rect < first_ball_cmd);
}
