//! Sparse per-player tracking samples
//!
//! Samples come from freeze-frame payloads and, optionally, from the acting
//! player of an event that carries a ball location.

use std::collections::HashMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::{Event, PlayerId};
use crate::pitch::PitchPos;
use crate::roster::RosterCache;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SampleOrigin {
    FreezeFrame,
    EventActor,
}

/// A known real position of one player at one instant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct TrackingSample {
    pub t: f64,
    pub player_id: PlayerId,
    pub position: PitchPos,
    pub origin: SampleOrigin,
}

/// Collect samples from time-ordered events into per-player lists sorted by time.
///
/// The actor sample of an event is extracted before its freeze-frame payload,
/// so at a shared timestamp the freeze frame wins.
pub(crate) fn extract_samples(
    timed: &[(f64, Event)],
    roster: &RosterCache,
    track_event_actors: bool,
) -> HashMap<PlayerId, Vec<TrackingSample>> {
    let mut per_player: HashMap<PlayerId, Vec<TrackingSample>> = HashMap::new();
    let mut skipped = 0usize;

    let mut push = |sample: TrackingSample| {
        if !sample.position.is_finite() {
            warn!(player = %sample.player_id, t = sample.t, "non-finite sample position skipped");
            skipped += 1;
            return;
        }
        if !roster.contains(sample.player_id) {
            warn!(player = %sample.player_id, t = sample.t, "sample for player outside roster skipped");
            skipped += 1;
            return;
        }
        per_player.entry(sample.player_id).or_default().push(sample);
    };

    for (t, event) in timed {
        if track_event_actors {
            if let (Some(player_id), Some(position)) = (event.player_id, event.location) {
                push(TrackingSample { t: *t, player_id, position, origin: SampleOrigin::EventActor });
            }
        }
        for ff in event.freeze_frame.iter().flatten() {
            push(TrackingSample {
                t: *t,
                player_id: ff.player_id,
                position: ff.location,
                origin: SampleOrigin::FreezeFrame,
            });
        }
    }

    if skipped > 0 {
        warn!(skipped, "tracking samples dropped during extraction");
    }

    for samples in per_player.values_mut() {
        samples.sort_by(|a, b| a.t.total_cmp(&b.t));
        dedup_keep_last(samples);
    }
    per_player
}

/// Collapse runs of equal timestamps onto the last sample of the run.
fn dedup_keep_last(samples: &mut Vec<TrackingSample>) {
    let mut out: Vec<TrackingSample> = Vec::with_capacity(samples.len());
    for sample in samples.drain(..) {
        match out.last_mut() {
            Some(last) if last.t == sample.t => *last = sample,
            _ => out.push(sample),
        }
    }
    *samples = out;
}
