//! Reward of the takeoff task.

/// Reward for being at `position` when the goal is `target`.
///
/// The sum of the absolute per-axis errors is squashed by `tanh(-0.2 * d)`,
/// so the reward is `0` at the target and approaches `-1` as the vehicle
/// moves away. All axes are weighted equally.
pub fn takeoff_reward(position: &[f64; 3], target: &[f64; 3]) -> f64 {
    let d: f64 = position
        .iter()
        .zip(target.iter())
        .map(|(p, t)| (p - t).abs())
        .sum();
    (-0.2 * d).tanh()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TARGET: [f64; 3] = [0.0, 0.0, 10.0];

    #[test]
    fn test_reward_at_target() {
        assert_eq!(takeoff_reward(&[0.0, 0.0, 10.0], &TARGET), 0.0);
    }

    #[test]
    fn test_reward_on_the_ground() {
        let r = takeoff_reward(&[0.0, 0.0, 0.0], &TARGET);
        assert!((r - (-2f64).tanh()).abs() < 1e-12);
        assert!((r + 0.964).abs() < 1e-3);
    }

    #[test]
    fn test_reward_increases_towards_target() {
        let mut prev = -1.0;
        for z in 0..10 {
            let r = takeoff_reward(&[0.0, 0.0, z as f64], &TARGET);
            assert!(r > prev);
            assert!(r > -1.0 && r < 0.0);
            prev = r;
        }
    }

    #[test]
    fn test_reward_is_symmetric_across_axes() {
        let rx = takeoff_reward(&[3.0, 0.0, 10.0], &TARGET);
        let ry = takeoff_reward(&[0.0, -3.0, 10.0], &TARGET);
        let rz = takeoff_reward(&[0.0, 0.0, 13.0], &TARGET);
        assert_eq!(rx, ry);
        assert_eq!(rx, rz);
        let mixed = takeoff_reward(&[1.0, 1.0, 11.0], &TARGET);
        assert!((mixed - rx).abs() < 1e-12);
    }
}
