//! Frame digests
//!
//! SHA-256 over the raw bits of sampled frames. Two runs over the same match
//! and configuration must produce the same digest on any machine.

use sha2::{Digest, Sha256};

use crate::blend::PositionBlender;
use crate::error::{ReplayError, Result};
use crate::models::{PositionSource, RenderFrame};

/// Upper bound on the number of timestamps one sampling run may produce.
pub const MAX_SAMPLES: usize = 10_000_000;

/// Evenly spaced timestamps, yielded lazily.
///
/// Each timestamp is derived from its index, not by accumulation, so long
/// matches do not drift.
#[derive(Debug, Clone)]
pub struct SampleTimes {
    start: f64,
    fps: f64,
    next: usize,
    count: usize,
}

impl Iterator for SampleTimes {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.next >= self.count {
            return None;
        }
        let t = self.start + self.next as f64 / self.fps;
        self.next += 1;
        Some(t)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.count - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for SampleTimes {}

/// Timestamps from `start` to `end` at `fps`, inclusive of `start`.
///
/// A non-positive or non-finite `fps` yields `start` only. Fails when the run
/// would exceed [`MAX_SAMPLES`].
pub fn sample_times(start: f64, end: f64, fps: f64) -> Result<SampleTimes> {
    if !(fps.is_finite() && fps > 0.0) || !(end > start) {
        return Ok(SampleTimes { start, fps: 1.0, next: 0, count: 1 });
    }
    let span = end - start;
    let steps = (span * fps).floor();
    // Also catches an infinite product.
    if !(steps < MAX_SAMPLES as f64) {
        return Err(ReplayError::TooManySamples { fps, span, limit: MAX_SAMPLES });
    }
    Ok(SampleTimes { start, fps, next: 0, count: steps as usize + 1 })
}

fn source_tag(source: PositionSource) -> u8 {
    match source {
        PositionSource::Tracked => 0,
        PositionSource::Blended => 1,
        PositionSource::Tactical => 2,
    }
}

/// Feed one frame into a running hash.
pub fn hash_frame(hasher: &mut Sha256, frame: &RenderFrame) {
    hasher.update(frame.t.to_bits().to_le_bytes());
    hasher.update(frame.ball.x.to_bits().to_le_bytes());
    hasher.update(frame.ball.y.to_bits().to_le_bytes());
    hasher.update((frame.players.len() as u64).to_le_bytes());
    for p in &frame.players {
        hasher.update(p.player_id.0.to_le_bytes());
        hasher.update(p.position.x.to_bits().to_le_bytes());
        hasher.update(p.position.y.to_bits().to_le_bytes());
        hasher.update([source_tag(p.source)]);
    }
}

/// Hex digest of frames sampled at `fps` over the whole match.
pub fn replay_digest(
    blender: &PositionBlender<'_>,
    start: f64,
    end: f64,
    fps: f64,
) -> Result<String> {
    let mut hasher = Sha256::new();
    for t in sample_times(start, end, fps)? {
        hash_frame(&mut hasher, &blender.frame_at(t));
    }
    Ok(format!("{:x}", hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PlayerFrame, PlayerId, TeamId};
    use crate::pitch::PitchPos;

    fn frame(x: f64) -> RenderFrame {
        RenderFrame {
            t: 1.0,
            ball: PitchPos::new(60.0, 40.0),
            players: vec![PlayerFrame {
                player_id: PlayerId(1),
                team_id: TeamId(1),
                jersey_number: 1,
                position: PitchPos::new(x, 10.0),
                source: PositionSource::Tactical,
            }],
        }
    }

    fn digest_of(frame: &RenderFrame) -> String {
        let mut hasher = Sha256::new();
        hash_frame(&mut hasher, frame);
        format!("{:x}", hasher.finalize())
    }

    fn times(start: f64, end: f64, fps: f64) -> Vec<f64> {
        sample_times(start, end, fps).unwrap().collect()
    }

    #[test]
    fn test_sample_times() {
        assert_eq!(times(0.0, 1.0, 4.0), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(times(10.0, 10.0, 25.0), vec![10.0]);
        assert_eq!(times(0.0, 5.0, 0.0), vec![0.0]);
        assert_eq!(times(0.0, 5.0, f64::NAN), vec![0.0]);
        assert_eq!(sample_times(0.0, 5400.0, 25.0).unwrap().len(), 135_001);
    }

    #[test]
    fn test_huge_fps_is_rejected() {
        for fps in [1e300, 1e9, f64::MAX] {
            let err = sample_times(0.0, 5400.0, fps).unwrap_err();
            assert!(matches!(err, ReplayError::TooManySamples { limit: MAX_SAMPLES, .. }));
            assert!(err.is_recoverable());
        }
    }

    #[test]
    fn test_sample_count_just_below_limit() {
        let fps = (MAX_SAMPLES - 1) as f64;
        let times = sample_times(0.0, 1.0, fps).unwrap();
        assert_eq!(times.len(), MAX_SAMPLES);
        assert!(sample_times(0.0, 1.0, MAX_SAMPLES as f64).is_err());
    }

    #[test]
    fn test_digest_sensitive_to_last_bit() {
        let a = frame(30.0);
        let b = frame(f64::from_bits(30.0f64.to_bits() + 1));
        assert_eq!(digest_of(&a), digest_of(&a.clone()));
        assert_ne!(digest_of(&a), digest_of(&b));
        assert_eq!(digest_of(&a).len(), 64);
    }
}
