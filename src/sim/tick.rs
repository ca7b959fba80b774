//! Per-frame simulation step
//!
//! One `tick` advances the world by exactly one animation frame: the
//! original game integrates with a fixed per-frame step and no delta-time
//! compensation, so the constants in `consts` are tuned for that cadence.

use crate::consts::*;

use super::collision::{bird_hits_bounds, bird_hits_pipe};
use super::state::{GameEvent, GamePhase, GameState};

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// One-shot flap request (key press / canvas click), cleared by the
    /// frame loop after the tick consumes it
    pub flap: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    // Terminal state freezes the world; render keeps showing the last frame
    if state.phase == GamePhase::Over {
        return;
    }

    if input.flap {
        state.flap();
    }

    state.time_ticks += 1;

    // Explicit Euler, one step per frame
    state.bird.vel += GRAVITY;
    state.bird.pos.y += state.bird.vel;

    let bird = state.bird;
    let field_h = state.field.y;

    // Advance pipes in spawn order. Collision is evaluated against each
    // pipe's post-advance position; the first hit ends the scan so later
    // pipes neither move nor score on this tick.
    let mut collided = false;
    for i in 0..state.pipes.len() {
        state.pipes[i].x -= PIPE_SPEED;
        let pipe = state.pipes[i];

        if bird_hits_pipe(&bird, &pipe) || bird_hits_bounds(&bird, field_h) {
            collided = true;
            break;
        }

        if !pipe.passed && pipe.x < bird.left() {
            state.pipes[i].passed = true;
            state.score += 1;
            let score = state.score;
            state.push_event(GameEvent::Scored(score));
        }
    }

    if collided {
        state.phase = GamePhase::Over;
        let score = state.score;
        state.push_event(GameEvent::GameOver { score });
    }

    // Cull pipes whose right edge has scrolled past the left boundary.
    // This still runs on the collision tick, matching the original.
    state.pipes.retain(|p| p.x + PIPE_WIDTH > 0.0);

    // Maintain constant spacing: once the newest pipe is far enough in,
    // spawn the next one at the right edge.
    let should_spawn = state
        .pipes
        .last()
        .is_none_or(|p| p.x < state.field.x - PIPE_SPACING);
    if should_spawn {
        state.spawn_pipe();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Pipe;

    const FIELD_W: f32 = 400.0;
    const FIELD_H: f32 = 600.0;

    /// Fresh state with the initial pipe replaced by the given ones,
    /// so tests control the geometry exactly.
    fn state_with_pipes(pipes: Vec<Pipe>) -> GameState {
        let mut state = GameState::new(12345, FIELD_W, FIELD_H);
        state.pipes = pipes;
        state.drain_events();
        state
    }

    /// A pipe whose gap fully contains the bird's starting box
    fn harmless_pipe(x: f32) -> Pipe {
        Pipe {
            x,
            top_height: 250.0, // gap [250, 400], bird box [300, 330]
            passed: false,
        }
    }

    #[test]
    fn velocity_accumulates_gravity_every_tick() {
        let mut state = GameState::new(1, FIELD_W, FIELD_H);
        let input = TickInput::default();
        for n in 1..=20 {
            let before = state.bird.vel;
            tick(&mut state, &input);
            assert_eq!(state.phase, GamePhase::Running, "died at tick {n}");
            assert_eq!(state.bird.vel, before + GRAVITY);
        }
    }

    #[test]
    fn flap_through_input_overrides_prior_velocity() {
        let mut state = GameState::new(1, FIELD_W, FIELD_H);
        state.bird.vel = 7.0;
        let input = TickInput { flap: true };
        tick(&mut state, &input);
        // Flap set vel to the impulse, then one gravity step applied
        assert_eq!(state.bird.vel, FLAP_IMPULSE + GRAVITY);
        assert!(state.drain_events().contains(&GameEvent::Flapped));
    }

    #[test]
    fn passing_a_pipe_scores_exactly_once() {
        // Pipe about to fall behind the bird's left edge
        let bird_left = FIELD_W / 3.0;
        let mut state = state_with_pipes(vec![harmless_pipe(bird_left + PIPE_SPEED - 0.5)]);
        state.bird.vel = 0.0;

        let input = TickInput { flap: true }; // keep the bird inside the gap
        tick(&mut state, &input);
        assert_eq!(state.score, 1);
        assert!(state.pipes[0].passed);
        assert!(state.drain_events().contains(&GameEvent::Scored(1)));

        tick(&mut state, &TickInput { flap: true });
        assert_eq!(state.score, 1, "pipe must not score twice");
        let events = state.drain_events();
        assert!(!events.iter().any(|e| matches!(e, GameEvent::Scored(_))));
    }

    #[test]
    fn ceiling_collision_sets_terminal_state() {
        let mut state = GameState::new(1, FIELD_W, FIELD_H);
        state.bird.pos.y = -1.0 - GRAVITY; // top < 0 after the gravity step
        state.bird.vel = 0.0;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::Over);
        assert!(
            state
                .drain_events()
                .contains(&GameEvent::GameOver { score: 0 })
        );
    }

    #[test]
    fn ground_collision_sets_terminal_state() {
        let mut state = GameState::new(1, FIELD_W, FIELD_H);
        state.bird.pos.y = FIELD_H; // bottom well past the ground
        state.bird.vel = 0.0;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::Over);
    }

    #[test]
    fn update_is_a_noop_after_game_over() {
        let mut state = GameState::new(1, FIELD_W, FIELD_H);
        state.bird.pos.y = FIELD_H + 10.0;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::Over);
        state.drain_events();

        let bird_pos = state.bird.pos;
        let bird_vel = state.bird.vel;
        let pipe_xs: Vec<f32> = state.pipes.iter().map(|p| p.x).collect();
        let score = state.score;
        let ticks = state.time_ticks;

        for _ in 0..50 {
            tick(&mut state, &TickInput { flap: true });
        }

        assert_eq!(state.bird.pos, bird_pos);
        assert_eq!(state.bird.vel, bird_vel);
        assert_eq!(
            state.pipes.iter().map(|p| p.x).collect::<Vec<f32>>(),
            pipe_xs
        );
        assert_eq!(state.score, score);
        assert_eq!(state.time_ticks, ticks);
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn offscreen_pipe_is_culled() {
        // Right edge lands exactly on the left boundary after one advance
        let mut state = state_with_pipes(vec![
            harmless_pipe(-PIPE_WIDTH + PIPE_SPEED),
            harmless_pipe(FIELD_W - 10.0),
        ]);
        state.bird.vel = 0.0;
        tick(&mut state, &TickInput { flap: true });
        assert!(
            state.pipes.iter().all(|p| p.x + PIPE_WIDTH > 0.0),
            "culled pipe must not reappear"
        );
        assert_eq!(state.pipes.len(), 1);
    }

    #[test]
    fn crossing_spacing_threshold_spawns_one_pipe_at_right_edge() {
        let threshold = FIELD_W - PIPE_SPACING;
        let mut state = state_with_pipes(vec![harmless_pipe(threshold + PIPE_SPEED - 0.5)]);
        tick(&mut state, &TickInput { flap: true });
        assert_eq!(state.pipes.len(), 2, "exactly one new pipe");
        let newest = state.pipes.last().copied().unwrap();
        assert_eq!(newest.x, FIELD_W);
        assert!(!newest.passed);

        // Still above the threshold: no further spawn
        let mut state = state_with_pipes(vec![harmless_pipe(threshold + PIPE_SPEED + 0.5)]);
        tick(&mut state, &TickInput { flap: true });
        assert_eq!(state.pipes.len(), 1);
    }

    #[test]
    fn spawned_heights_stay_within_bounds() {
        let mut state = GameState::new(999, FIELD_W, FIELD_H);
        for _ in 0..200 {
            state.spawn_pipe();
        }
        let max = FIELD_H - PIPE_GAP - PIPE_MIN_HEIGHT;
        for pipe in &state.pipes {
            assert!(pipe.top_height >= PIPE_MIN_HEIGHT);
            assert!(pipe.top_height <= max);
        }
    }

    #[test]
    fn first_colliding_pipe_stops_the_scan() {
        // Two pipes stacked on the bird; only the first may act this tick
        let bird_left = FIELD_W / 3.0;
        let blocking = Pipe {
            x: bird_left,
            top_height: 400.0, // gap [400, 550], bird at [300, 330] hits top
            passed: false,
        };
        let second_x = bird_left + 5.0;
        let mut state = state_with_pipes(vec![
            blocking,
            Pipe {
                x: second_x,
                top_height: 400.0,
                passed: false,
            },
        ]);
        state.bird.vel = 0.0;
        tick(&mut state, &TickInput::default());

        assert_eq!(state.phase, GamePhase::Over);
        let game_overs = state
            .drain_events()
            .iter()
            .filter(|e| matches!(e, GameEvent::GameOver { .. }))
            .count();
        assert_eq!(game_overs, 1);
        // The second pipe was never advanced on the collision tick
        assert_eq!(state.pipes[1].x, second_x);
    }
}
