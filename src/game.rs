//! Simulation loop driver
//!
//! `Game` owns the session state and the score collaborators. The host calls
//! the pointer methods as events arrive and `frame` once per display refresh,
//! then renders whatever commands `frame` returns.

use glam::Vec2;

use crate::persistence::{load_best_score, save_best_score};
use crate::platform::{ScoreDisplay, TextStore};
use crate::renderer::DrawCommand;
use crate::renderer::scene;
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, PointerInput, Scoreboard, tick};

/// Frames averaged for the FPS readout
const FPS_WINDOW: usize = 60;

/// Rolling frame rate from frame timestamps (ms)
#[derive(Debug, Clone)]
struct FpsCounter {
    frame_times: [f64; FPS_WINDOW],
    frame_index: usize,
    fps: u32,
}

impl FpsCounter {
    fn new() -> Self {
        Self {
            frame_times: [0.0; FPS_WINDOW],
            frame_index: 0,
            fps: 0,
        }
    }

    fn record(&mut self, time: f64) {
        self.frame_times[self.frame_index] = time;
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;

        // Oldest sample is the next slot to be overwritten
        let oldest_time = self.frame_times[self.frame_index];
        if oldest_time > 0.0 {
            let elapsed = time - oldest_time;
            if elapsed > 0.0 {
                self.fps = ((FPS_WINDOW - 1) as f64 * 1000.0 / elapsed).round() as u32;
            }
        }
    }
}

pub struct Game<D: ScoreDisplay, S: TextStore> {
    pub state: GameState,
    pub settings: Settings,
    display: D,
    store: S,
    fps: FpsCounter,
}

impl<D: ScoreDisplay, S: TextStore> Game<D, S> {
    /// Start a session on a canvas of the given size, reading the best score from `store`
    pub fn new(
        canvas_width: f32,
        canvas_height: f32,
        settings: Settings,
        mut display: D,
        store: S,
    ) -> Self {
        let best = load_best_score(&store);
        display.show(0, best);
        Self {
            state: GameState::new(canvas_width, canvas_height, best),
            settings,
            display,
            store,
            fps: FpsCounter::new(),
        }
    }

    pub fn scoreboard(&self) -> Scoreboard {
        self.state.scoreboard
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn fps(&self) -> u32 {
        self.fps.fps
    }

    /// Returns true if the press grabbed the ball
    pub fn pointer_down(&mut self, input: PointerInput) -> bool {
        self.state.drag.pointer_down(input, &self.state.ball)
    }

    pub fn pointer_move(&mut self, input: PointerInput) {
        self.state.drag.pointer_move(input);
    }

    /// Returns the launch velocity if a drag was released
    pub fn pointer_up(&mut self, input: PointerInput) -> Option<Vec2> {
        self.state.drag.pointer_up(input, &mut self.state.ball)
    }

    pub fn resize(&mut self, canvas_width: f32, canvas_height: f32) {
        log::info!("Canvas resized to {}x{}", canvas_width, canvas_height);
        self.state.resize(canvas_width, canvas_height);
    }

    /// Run one simulation step and describe the resulting frame.
    ///
    /// `time` is the frame timestamp in milliseconds, used only for the FPS readout.
    pub fn frame(&mut self, time: f64) -> Vec<DrawCommand> {
        let events = tick(&mut self.state);
        self.apply_events(&events);
        self.fps.record(time);
        scene::frame(&self.state, &self.settings)
    }

    fn apply_events(&mut self, events: &[GameEvent]) {
        for event in events {
            match *event {
                GameEvent::Scored { .. } | GameEvent::Missed { .. } => {
                    let board = self.state.scoreboard;
                    self.display.show(board.current, board.best);
                }
                GameEvent::BestScore { best } => save_best_score(&mut self.store, best),
                GameEvent::RimHit { .. } => {}
            }
        }
    }
}
