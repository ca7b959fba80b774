//! Collision detection between the bird and the world
//!
//! The bird collides as an axis-aligned box `[x, x+size] x [y, y+size]`,
//! even though it is drawn as a circle. Pipes are two full-width rectangles
//! separated by a fixed vertical gap.

use crate::consts::{PIPE_GAP, PIPE_WIDTH};

use super::state::{Bird, Pipe};

/// Check the bird's box against one pipe's top and bottom segments.
///
/// Horizontal overlap first, then the vertical test: anything above the gap
/// hits the top segment, anything below it hits the bottom one.
pub fn bird_hits_pipe(bird: &Bird, pipe: &Pipe) -> bool {
    let overlaps_x = bird.right() > pipe.x && bird.left() < pipe.x + PIPE_WIDTH;
    if !overlaps_x {
        return false;
    }
    bird.top() < pipe.top_height || bird.bottom() > pipe.top_height + PIPE_GAP
}

/// Check the bird against the ground and ceiling.
pub fn bird_hits_bounds(bird: &Bird, field_height: f32) -> bool {
    bird.bottom() > field_height || bird.top() < 0.0
}
