//! Pipe pair generation and scrolling.

use std::collections::VecDeque;

use rand::Rng;

use super::types::{Pipe, PipeRole};
use crate::config::GameConfig;

/// Build a top/bottom pair from a uniform draw `r` in `[0, 1)`.
///
/// The top pipe's lower edge lands between a quarter and three quarters of a
/// pipe height below the field top, so the opening is never fully off screen.
pub fn pipe_pair(r: f64, gap_divisor: f64, config: &GameConfig) -> [Pipe; 2] {
    let pipe_height = config.pipe_height;
    let top_y = -pipe_height / 4.0 - r * (pipe_height / 2.0);
    let gap = config.field_height / gap_divisor;
    let x = config.pipe_spawn_x();

    let top = Pipe {
        x,
        y: top_y,
        width: config.pipe_width,
        height: pipe_height,
        role: PipeRole::Top,
        passed: false,
    };
    let bottom = Pipe {
        y: top_y + pipe_height + gap,
        role: PipeRole::Bottom,
        ..top.clone()
    };
    [top, bottom]
}

/// Spawn a pair at the right edge with one random vertical offset.
pub fn spawn_pair<R: Rng>(rng: &mut R, gap_divisor: f64, config: &GameConfig) -> [Pipe; 2] {
    let r: f64 = rng.gen();
    pipe_pair(r, gap_divisor, config)
}

/// Scroll every pipe left by `speed`, then drop pipes that are fully past the
/// left edge. Pipes are spawned in order at the same x, so only the front of
/// the queue can be off screen. Returns how many were dropped.
pub fn advance_pipes(pipes: &mut VecDeque<Pipe>, speed: f64) -> usize {
    for pipe in pipes.iter_mut() {
        pipe.x -= speed;
    }

    let mut evicted = 0;
    while pipes.front().is_some_and(|p| p.right() < 0.0) {
        pipes.pop_front();
        evicted += 1;
    }
    evicted
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_pair_layout_at_extremes() {
        let config = GameConfig::default();

        let [top, bottom] = pipe_pair(0.0, 4.0, &config);
        assert_eq!(top.y, -62.5);
        assert_eq!(bottom.y, -62.5 + 250.0 + 160.0);

        let [top, bottom] = pipe_pair(0.999_999, 4.0, &config);
        assert!(top.y > -187.5 && top.y < -62.5);
        assert!((bottom.y - (top.y + 250.0) - 160.0).abs() < 1e-9);
    }

    #[test]
    fn test_pair_spawns_at_right_edge_unpassed() {
        let config = GameConfig::default();
        let [top, bottom] = pipe_pair(0.5, 3.0, &config);
        assert_eq!(top.x, 360.0);
        assert_eq!(bottom.x, 360.0);
        assert_eq!(top.role, PipeRole::Top);
        assert_eq!(bottom.role, PipeRole::Bottom);
        assert!(!top.passed && !bottom.passed);
        assert_eq!(top.width, 64.0);
        assert_eq!(bottom.height, 250.0);
    }

    #[test]
    fn test_random_pairs_keep_gap() {
        let config = GameConfig::default();
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let [top, bottom] = spawn_pair(&mut rng, 4.0, &config);
            let gap = bottom.y - (top.y + top.height);
            assert!((gap - 160.0).abs() < 1e-9);
            assert!(top.y <= -62.5 && top.y > -187.5);
        }
    }

    #[test]
    fn test_advance_scrolls_all_pipes() {
        let config = GameConfig::default();
        let mut pipes: VecDeque<Pipe> = pipe_pair(0.5, 4.0, &config).into_iter().collect();
        let evicted = advance_pipes(&mut pipes, 2.0);
        assert_eq!(evicted, 0);
        assert!(pipes.iter().all(|p| p.x == 358.0));
    }

    #[test]
    fn test_eviction_waits_until_fully_off_screen() {
        let config = GameConfig::default();
        let mut pipes: VecDeque<Pipe> = pipe_pair(0.5, 4.0, &config).into_iter().collect();
        for p in pipes.iter_mut() {
            p.x = -62.0;
        }

        // -64 is exactly flush with the left edge: still kept
        assert_eq!(advance_pipes(&mut pipes, 2.0), 0);
        assert_eq!(pipes.len(), 2);

        assert_eq!(advance_pipes(&mut pipes, 2.0), 2);
        assert!(pipes.is_empty());
    }

    #[test]
    fn test_eviction_preserves_order_of_survivors() {
        let config = GameConfig::default();
        let mut pipes = VecDeque::new();
        for (i, x) in [-60.0, 100.0, 250.0].into_iter().enumerate() {
            for mut p in pipe_pair(i as f64 / 4.0, 4.0, &config) {
                p.x = x;
                pipes.push_back(p);
            }
        }

        assert_eq!(advance_pipes(&mut pipes, 5.0), 2);
        let xs: Vec<f64> = pipes.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![95.0, 95.0, 245.0, 245.0]);
        assert_eq!(pipes[0].role, PipeRole::Top);
        assert_eq!(pipes[1].role, PipeRole::Bottom);
    }
}
