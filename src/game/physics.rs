//! Vertical motion of the bird.

use super::types::Bird;

/// Advance the bird one frame: gravity into velocity, velocity into position.
///
/// The top of the field clamps position only. Velocity is left as is, so a
/// bird pressed against the ceiling keeps its upward speed until gravity wins.
/// There is no floor clamp; falling past the field is a crash, detected by the
/// caller.
pub fn tick_bird(bird: &mut Bird, gravity: f64) {
    bird.velocity += gravity;
    bird.y += bird.velocity;
    bird.y = bird.y.max(0.0);
}

/// Override the bird's velocity with the flap impulse (not additive).
pub fn flap(bird: &mut Bird, impulse: f64) {
    bird.velocity = impulse;
}

/// Whether the bird has dropped below the bottom of the field.
pub fn fell_out(bird: &Bird, field_height: f64) -> bool {
    bird.y > field_height
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    fn bird() -> Bird {
        Bird::new(&GameConfig::default())
    }

    #[test]
    fn test_gravity_accumulates_velocity() {
        let mut b = bird();
        let start_y = b.y;
        let mut expected_y = start_y;
        let mut expected_v = 0.0;
        for _ in 0..5 {
            tick_bird(&mut b, 0.2);
            expected_v += 0.2;
            expected_y += expected_v;
        }
        assert!((b.velocity - 1.0).abs() < 1e-9);
        assert!((b.y - expected_y).abs() < 1e-9);
        // 0.2 + 0.4 + 0.6 + 0.8 + 1.0
        assert!((b.y - start_y - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_flap_overrides_velocity() {
        let mut b = bird();
        b.velocity = 12.5;
        flap(&mut b, -6.0);
        assert_eq!(b.velocity, -6.0);

        b.velocity = -3.0;
        flap(&mut b, -6.0);
        assert_eq!(b.velocity, -6.0);
    }

    #[test]
    fn test_ceiling_clamps_position_but_keeps_velocity() {
        let mut b = bird();
        b.y = 2.0;
        b.velocity = -8.0;
        tick_bird(&mut b, 0.25);
        assert_eq!(b.y, 0.0);
        assert_eq!(b.velocity, -7.75);
    }

    #[test]
    fn test_no_floor_clamp() {
        let mut b = bird();
        b.y = 639.0;
        b.velocity = 5.0;
        tick_bird(&mut b, 0.25);
        assert!(b.y > 640.0);
        assert!(fell_out(&b, 640.0));
    }

    #[test]
    fn test_resting_on_bottom_edge_is_not_a_fall() {
        let mut b = bird();
        b.y = 640.0;
        assert!(!fell_out(&b, 640.0));
    }
}
