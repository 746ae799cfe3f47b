// track/ - Surface tracking and the placement reticle
//
// The host owns the WebXR session. It asks the tracker whether a hit-test
// source should be requested, performs the async requests, and reports the
// outcome back. Each frame it passes the hit poses (column-major 4x4,
// expressed in the local reference space) for the tracker to consume.

mod reticle;
mod tracker;

pub use reticle::Reticle;
pub use tracker::{HitTestSource, InitRequest, SurfaceTracker, TrackerState};

use glam::Mat4;

pub const POSE_LEN: usize = 16;

/// Split a flat `[m0..m15, m0..m15, ...]` buffer into poses.
/// A trailing partial pose is ignored.
pub fn poses_from_slice(flat: &[f32]) -> Vec<Mat4> {
    flat.chunks_exact(POSE_LEN).map(Mat4::from_cols_slice).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn flat_poses_decode_in_order() {
        let a = Mat4::from_translation(Vec3::new(1.0, 0.0, -1.0));
        let b = Mat4::from_translation(Vec3::new(0.0, 2.0, 0.0));
        let mut flat = Vec::new();
        flat.extend_from_slice(&a.to_cols_array());
        flat.extend_from_slice(&b.to_cols_array());
        flat.push(9.0);

        let poses = poses_from_slice(&flat);
        assert_eq!(poses, vec![a, b]);
    }
}
