//! Game state and core simulation types

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Run ended by collision. One-way: a new session requires a fresh
    /// `GameState`, there is no in-place reset.
    Over,
}

/// The player-controlled bird
#[derive(Debug, Clone, Copy)]
pub struct Bird {
    /// Position of the top-left corner of the bounding box. `pos.x` is fixed
    /// after construction; only `pos.y` evolves.
    pub pos: Vec2,
    /// Vertical velocity (positive = down)
    pub vel: f32,
    /// Bounding box side length
    pub size: f32,
}

impl Bird {
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size
    }

    /// Center of the bounding box (the bird is drawn as a circle around it)
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }
}

/// A vertical gap barrier scrolling leftward
#[derive(Debug, Clone, Copy)]
pub struct Pipe {
    /// Left edge; decreases by `PIPE_SPEED` every tick
    pub x: f32,
    /// Height of the top segment; the bottom segment starts at
    /// `top_height + PIPE_GAP`. Fixed at spawn.
    pub top_height: f32,
    /// Set once when the bird passes this pipe, so it scores exactly once
    pub passed: bool,
}

/// Events produced by the simulation for the frame loop to act on
/// (sound effects, HUD updates). Drained once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The bird flapped (play the jump tone)
    Flapped,
    /// A pipe was passed; carries the new score
    Scored(u32),
    /// Collision ended the run; carries the final score
    GameOver { score: u32 },
}

/// Complete game state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    /// Field dimensions, fixed at construction from the canvas size
    pub field: Vec2,
    pub bird: Bird,
    /// Pipes in spawn order (x-descending)
    pub pipes: Vec<Pipe>,
    pub score: u32,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Pending events, drained by the frame loop
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new session with the given seed and field dimensions.
    /// The first pipe is spawned immediately.
    pub fn new(seed: u64, field_width: f32, field_height: f32) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            field: Vec2::new(field_width, field_height),
            bird: Bird {
                pos: Vec2::new(field_width / 3.0, field_height / 2.0),
                vel: 0.0,
                size: BIRD_SIZE,
            },
            pipes: Vec::new(),
            score: 0,
            phase: GamePhase::Running,
            time_ticks: 0,
            events: Vec::new(),
        };

        state.spawn_pipe();

        state
    }

    /// Flap input: sets the bird's velocity to the fixed impulse.
    /// Ignored once the run is over.
    pub fn flap(&mut self) {
        if self.phase == GamePhase::Over {
            return;
        }
        self.bird.vel = FLAP_IMPULSE;
        self.push_event(GameEvent::Flapped);
    }

    /// Spawn a pipe at the right edge with a random top-segment height in
    /// `[PIPE_MIN_HEIGHT, field_h - PIPE_GAP - PIPE_MIN_HEIGHT]`.
    pub fn spawn_pipe(&mut self) {
        // Fields too short for the usual range collapse to the minimum
        // height instead of producing an empty sample range
        let max_height = (self.field.y - PIPE_GAP - PIPE_MIN_HEIGHT).max(PIPE_MIN_HEIGHT);
        let top_height = self.rng.random_range(PIPE_MIN_HEIGHT..=max_height);
        self.pipes.push(Pipe {
            x: self.field.x,
            top_height,
            passed: false,
        });
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all pending events, leaving the queue empty
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
