//! Sliding window of the most recent poses.
use crate::{Pose, POSE_SIZE};
use ndarray::{aview1, s, Array1, Array2};

/// Fixed-capacity window of the last `capacity` poses.
///
/// Row `0` holds the oldest pose and row `capacity - 1` the newest one.
#[derive(Clone, Debug, PartialEq)]
pub struct PoseHistory {
    buf: Array2<f64>,
}

impl PoseHistory {
    /// Creates a window of `capacity` zero poses.
    pub fn new(capacity: usize) -> Self {
        Self {
            buf: Array2::zeros((capacity, POSE_SIZE)),
        }
    }

    /// Number of poses in the window.
    pub fn capacity(&self) -> usize {
        self.buf.nrows()
    }

    /// Overwrites every row with `pose`, invoked when resetting.
    pub fn fill(&mut self, pose: &Pose) {
        let pose = aview1(pose.as_array());
        for mut row in self.buf.rows_mut() {
            row.assign(&pose);
        }
    }

    /// Drops the oldest pose and appends `pose` as the newest one.
    pub fn push(&mut self, pose: &Pose) {
        let n = self.capacity();
        if n == 0 {
            return;
        }

        // Shift rows row(j) <- row(j + 1) for j = 0, .., (n - 2)
        for j in 0..n - 1 {
            let (mut dst, src) = self.buf.multi_slice_mut((s![j, ..], s![j + 1, ..]));
            dst.assign(&src);
        }
        self.buf.row_mut(n - 1).assign(&aview1(pose.as_array()));
    }

    /// Pose at row `i`, `0` being the oldest.
    pub fn get(&self, i: usize) -> Option<Pose> {
        if i >= self.capacity() {
            return None;
        }
        let row = self.buf.row(i);
        let mut pose = [0f64; POSE_SIZE];
        pose.iter_mut().zip(row.iter()).for_each(|(d, s)| *d = *s);
        Some(Pose(pose))
    }

    /// Concatenation of the poses from the oldest to the newest.
    pub fn flatten(&self) -> Array1<f64> {
        self.buf.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pose_z(z: f64) -> Pose {
        Pose::new([0.0, 0.0, z], [0.0, 0.0, 0.0])
    }

    #[test]
    fn test_fill_replicates_pose() {
        let mut history = PoseHistory::new(3);
        let pose = Pose([1.0, 2.0, 3.0, 0.1, 0.2, 0.3]);
        history.fill(&pose);

        let flat = history.flatten();
        assert_eq!(flat.len(), 18);
        for i in 0..3 {
            assert_eq!(history.get(i), Some(pose));
            assert_eq!(flat.slice(s![i * 6..(i + 1) * 6]).to_vec(), pose.0.to_vec());
        }
        assert_eq!(history.get(3), None);
    }

    #[test]
    fn test_push_keeps_order() {
        let mut history = PoseHistory::new(3);
        history.fill(&pose_z(0.0));
        for z in 1..=4 {
            history.push(&pose_z(z as f64));
        }

        // the window holds the three most recent poses, oldest first
        let zs: Vec<f64> = (0..3).map(|i| history.get(i).unwrap().0[2]).collect();
        assert_eq!(zs, vec![2.0, 3.0, 4.0]);
        assert_eq!(history.flatten()[2], 2.0);
        assert_eq!(history.flatten()[14], 4.0);
    }
}
