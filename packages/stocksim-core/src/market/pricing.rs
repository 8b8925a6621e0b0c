//! Random price moves.

use crate::types::round_to_cents;
use rand::Rng;

/// Draw a uniform percentage change in `[-max_change_percent, +max_change_percent)`.
pub fn draw_change_percent<R: Rng + ?Sized>(rng: &mut R, max_change_percent: f64) -> f64 {
    rng.gen_range(-max_change_percent..max_change_percent)
}

/// Apply a percentage change to a price and round to the nearest cent.
///
/// No floor is applied. A price of at least one cent stays at least one cent
/// as long as the move is above -50%, which config validation guarantees.
pub fn apply_change(price: f64, change_percent: f64) -> f64 {
    round_to_cents(price + price * (change_percent / 100.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_apply_change_up_and_down() {
        assert_relative_eq!(apply_change(150.0, 5.0), 157.5);
        assert_relative_eq!(apply_change(150.0, -5.0), 142.5);
        assert_relative_eq!(apply_change(2800.0, 0.0), 2800.0);
    }

    #[test]
    fn test_apply_change_rounds_to_cents() {
        // 700 * 1.01234 = 708.638
        assert_relative_eq!(apply_change(700.0, 1.234), 708.64);
        // 3300 * 0.98765 = 3259.245 -> nearest cent
        let moved = apply_change(3300.0, -1.235);
        assert_relative_eq!(moved, round_to_cents(moved));
    }

    #[test]
    fn test_one_cent_survives_largest_drop() {
        assert_eq!(apply_change(0.01, -5.0), 0.01);
        assert_eq!(apply_change(0.01, -49.9), 0.01);
    }

    #[test]
    fn test_apply_change_has_no_floor() {
        assert_eq!(apply_change(0.004, 4.0), 0.0);
        assert_eq!(apply_change(0.01, -60.0), 0.0);
    }

    #[test]
    fn test_draw_change_within_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..10_000 {
            let change = draw_change_percent(&mut rng, 5.0);
            assert!((-5.0..5.0).contains(&change), "out of range: {}", change);
        }
    }
}
