//! Bounding-box collision and pass-through scoring.

use std::collections::VecDeque;

use super::types::{Bird, Pipe};

/// Axis-aligned rectangle, origin at the top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Aabb {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Strict overlap: rectangles that only share an edge do not collide.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }
}

/// Outcome of checking the bird against every active pipe for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipeSweep {
    /// Pipes newly marked as passed this frame.
    pub newly_passed: u32,
    /// The bird overlaps at least one pipe.
    pub hit: bool,
}

/// Score newly passed pipes and test every pipe for overlap.
///
/// A pipe is passed once the bird's left edge is beyond the pipe's right edge;
/// the `passed` flag makes that count once per pipe.
pub fn sweep_pipes(bird: &Bird, pipes: &mut VecDeque<Pipe>) -> PipeSweep {
    let bird_box = bird.bounds();
    let mut sweep = PipeSweep::default();

    for pipe in pipes.iter_mut() {
        if !pipe.passed && bird.x > pipe.right() {
            pipe.passed = true;
            sweep.newly_passed += 1;
        }
        if bird_box.overlaps(&pipe.bounds()) {
            sweep.hit = true;
        }
    }

    sweep
}
