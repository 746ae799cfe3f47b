// tracker.rs - Hit-test source lifecycle and per-frame reticle update

use glam::Mat4;

use super::Reticle;
use crate::error::{Error, Result};

/// Host-side handle of an XRHitTestSource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitTestSource(pub u32);

/// Ask the host to acquire a viewer-space hit-test source and a local
/// reference space. The epoch must be echoed back on completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitRequest {
    pub epoch: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackerState {
    #[default]
    Idle,
    Requesting,
    Ready(HitTestSource),
    /// Capability denied for this session; no retries until it ends
    Unavailable,
}

#[derive(Debug, Default)]
pub struct SurfaceTracker {
    state: TrackerState,
    epoch: u32,
}

impl SurfaceTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> TrackerState {
        self.state
    }

    /// Returns a request the first time it is called in a session, None after.
    pub fn begin(&mut self) -> Option<InitRequest> {
        if self.state != TrackerState::Idle {
            return None;
        }
        self.state = TrackerState::Requesting;
        Some(InitRequest { epoch: self.epoch })
    }

    /// Splice the async outcome in. A denial is reported exactly once.
    pub fn complete(&mut self, epoch: u32, outcome: Result<HitTestSource>) -> Result<()> {
        if epoch != self.epoch || self.state != TrackerState::Requesting {
            log::debug!("dropping stale hit-test init (epoch {epoch}, now {})", self.epoch);
            return Ok(());
        }

        match outcome {
            Ok(source) => {
                log::info!("hit-test source ready: {:?}", source);
                self.state = TrackerState::Ready(source);
                Ok(())
            }
            Err(err) => {
                log::warn!("surface tracking disabled: {err}");
                self.state = TrackerState::Unavailable;
                match err {
                    Error::CapabilityUnavailable(_) => Err(err),
                    other => Err(Error::CapabilityUnavailable(other.to_string())),
                }
            }
        }
    }

    /// Session ended: forget the source so the next session starts clean.
    pub fn end_session(&mut self) {
        self.state = TrackerState::Idle;
        self.epoch = self.epoch.wrapping_add(1);
    }

    /// Apply this frame's hits to the reticle. Returns whether it is visible.
    ///
    /// The first hit is the nearest one. No hits hides the reticle but keeps
    /// its last matrix. Without a ready source the reticle stays hidden.
    pub fn update(&self, hits: &[Mat4], reticle: &mut Reticle) -> bool {
        if !matches!(self.state, TrackerState::Ready(_)) {
            reticle.visible = false;
            return false;
        }

        match hits.first() {
            Some(pose) => {
                reticle.visible = true;
                reticle.matrix = *pose;
            }
            None => reticle.visible = false,
        }
        reticle.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn ready() -> SurfaceTracker {
        let mut t = SurfaceTracker::new();
        let req = t.begin().unwrap();
        t.complete(req.epoch, Ok(HitTestSource(1))).unwrap();
        t
    }

    #[test]
    fn begin_is_guarded() {
        let mut t = SurfaceTracker::new();
        assert!(t.begin().is_some());
        assert!(t.begin().is_none());
        assert_eq!(t.state(), TrackerState::Requesting);
    }

    #[test]
    fn first_hit_wins() {
        let t = ready();
        let near = Mat4::from_translation(Vec3::new(0.0, 0.0, -0.5));
        let far = Mat4::from_translation(Vec3::new(0.0, 0.0, -3.0));
        let mut r = Reticle::new();
        assert!(t.update(&[near, far], &mut r));
        assert_eq!(r.matrix, near);
    }

    #[test]
    fn miss_hides_but_keeps_matrix() {
        let t = ready();
        let pose = Mat4::from_translation(Vec3::new(0.3, -1.0, -0.8));
        let mut r = Reticle::new();
        t.update(&[pose], &mut r);
        assert!(!t.update(&[], &mut r));
        assert!(!r.visible);
        assert_eq!(r.matrix, pose);
    }

    #[test]
    fn not_ready_hides_reticle() {
        let mut t = ready();
        let pose = Mat4::from_translation(Vec3::new(0.0, -1.0, -1.0));
        let mut r = Reticle::new();
        assert!(t.update(&[pose], &mut r));

        // Next session, source still pending
        t.end_session();
        t.begin();
        assert!(!t.update(&[Mat4::IDENTITY], &mut r));
        assert!(!r.visible);
        assert_eq!(r.matrix, pose);
    }

    #[test]
    fn denial_is_reported_once_and_not_retried() {
        let mut t = SurfaceTracker::new();
        let req = t.begin().unwrap();
        let err = t
            .complete(req.epoch, Err(Error::CapabilityUnavailable("hit-test".into())))
            .unwrap_err();
        assert!(matches!(err, Error::CapabilityUnavailable(_)));
        assert_eq!(t.state(), TrackerState::Unavailable);
        assert!(t.begin().is_none());
    }

    #[test]
    fn session_end_resets_and_drops_late_completion() {
        let mut t = SurfaceTracker::new();
        let req = t.begin().unwrap();
        t.end_session();
        t.complete(req.epoch, Ok(HitTestSource(7))).unwrap();
        assert_eq!(t.state(), TrackerState::Idle);

        let req = t.begin().unwrap();
        t.complete(req.epoch, Ok(HitTestSource(8))).unwrap();
        assert_eq!(t.state(), TrackerState::Ready(HitTestSource(8)));
    }
}
