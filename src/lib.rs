//! Flappy Canvas - a Flappy Bird clone for the browser
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, pipes, collisions, scoring)
//! - `render`: Canvas2D drawing (circle bird, rectangle pipes)
//! - `audio`: Procedural sound effects via Web Audio
//! - `settings`: Audio preferences persisted to LocalStorage

#[cfg(target_arch = "wasm32")]
pub mod audio;
#[cfg(target_arch = "wasm32")]
pub mod render;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game tuning constants
pub mod consts {
    /// Downward acceleration applied to the bird every tick
    pub const GRAVITY: f32 = 0.6;
    /// Velocity the bird is set to on a flap (negative = up)
    pub const FLAP_IMPULSE: f32 = -10.0;
    /// Bird bounding box side length
    pub const BIRD_SIZE: f32 = 30.0;

    /// Horizontal pipe speed per tick (leftward)
    pub const PIPE_SPEED: f32 = 2.0;
    /// Horizontal distance between consecutive pipe spawns
    pub const PIPE_SPACING: f32 = 200.0;
    /// Vertical clearance between a pipe's top and bottom segments
    pub const PIPE_GAP: f32 = 150.0;
    /// Pipe width
    pub const PIPE_WIDTH: f32 = 60.0;
    /// Minimum height of the top segment (and, symmetrically, the bottom one)
    pub const PIPE_MIN_HEIGHT: f32 = 50.0;
}
