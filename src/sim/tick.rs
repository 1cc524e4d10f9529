//! Per-frame simulation step
//!
//! One call advances the ball by one display frame. The order below matters:
//! boundaries first, then the floor miss, then the rim, then scoring.

use super::state::{GameEvent, GameState};

/// Advance the game by one frame and report what happened
pub fn tick(state: &mut GameState) -> Vec<GameEvent> {
    let mut events = Vec::new();
    state.frame += 1;

    if state.physics_active() {
        state.ball.integrate();
    }

    // Perspective applies whether or not the ball is moving
    state.ball.update_radius(state.canvas_height);

    state.ball.collide_side_walls(state.canvas_width);
    state.ball.collide_ceiling();

    if state.ball.is_below_floor(state.canvas_height) {
        let score = state.scoreboard.current;
        let new_best = state.scoreboard.record_miss();
        state.reset_ball();

        log::info!("Missed after {} baskets", score);
        events.push(GameEvent::Missed { score });
        if let Some(best) = new_best {
            log::info!("New best score: {}", best);
            events.push(GameEvent::BestScore { best });
        }
        return events;
    }

    for side in state.court.rim.check_collision(&mut state.ball) {
        log::debug!("Rim hit: {:?}", side);
        events.push(GameEvent::RimHit { side });
    }

    if state.court.rim.is_scoring(&state.ball) {
        let score = state.scoreboard.record_basket();
        state.reset_ball();
        log::info!("Basket! Score: {}", score);
        events.push(GameEvent::Scored { score });
    }

    events
}
