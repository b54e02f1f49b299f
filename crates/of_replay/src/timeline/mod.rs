//! Event Timeline Indexer
//!
//! Owns the time-ordered event list of one match and the indexes derived from
//! it at load time:
//! - per-player tracking samples (binary-searchable by time)
//! - ball locations (binary-searchable by time)
//!
//! Nothing here changes after `load`, so every query takes `&self` and costs
//! the same whichever direction playback moves.

mod samples;

pub use samples::{SampleOrigin, TrackingSample};

use std::collections::HashMap;

use tracing::info;

use crate::config::TimelineConfig;
use crate::error::{MalformedEventError, MalformedEventReason, Result};
use crate::models::{Event, EventType, PlayerId};
use crate::pitch::{Pitch, PitchPos};
use crate::roster::RosterCache;

#[derive(Debug, Clone)]
pub struct EventTimeline {
    /// Events sorted by timestamp (stable for equal timestamps)
    events: Vec<Event>,
    /// Timestamp of each entry in `events`
    times: Vec<f64>,
    samples: HashMap<PlayerId, Vec<TrackingSample>>,
    /// (timestamp, location) of every event carrying a ball location
    ball: Vec<(f64, PitchPos)>,
    centre_spot: PitchPos,
}

impl EventTimeline {
    /// Validate, order and index a match's events.
    ///
    /// The first event without a usable timestamp, or a freeze-frame event
    /// without positions, rejects the whole match.
    pub fn load(
        events: Vec<Event>,
        roster: &RosterCache,
        pitch: &Pitch,
        config: &TimelineConfig,
    ) -> Result<Self> {
        let mut timed = Vec::with_capacity(events.len());
        for (idx, event) in events.into_iter().enumerate() {
            let t = validate_event(idx, &event)?;
            timed.push((t, event));
        }
        timed.sort_by(|a, b| a.0.total_cmp(&b.0));

        let samples = samples::extract_samples(&timed, roster, config.track_event_actors);
        let ball: Vec<(f64, PitchPos)> = timed
            .iter()
            .filter_map(|(t, e)| e.location.filter(|loc| loc.is_finite()).map(|loc| (*t, loc)))
            .collect();

        let (times, events): (Vec<f64>, Vec<Event>) = timed.into_iter().unzip();

        let timeline = Self { events, times, samples, ball, centre_spot: pitch.centre() };
        info!(
            events = timeline.events.len(),
            tracked_players = timeline.samples.len(),
            samples = timeline.sample_count(),
            start = timeline.start_time(),
            end = timeline.end_time(),
            "event timeline loaded"
        );
        Ok(timeline)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Timestamps parallel to `events()`
    pub fn event_times(&self) -> &[f64] {
        &self.times
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn start_time(&self) -> f64 {
        self.times.first().copied().unwrap_or(0.0)
    }

    pub fn end_time(&self) -> f64 {
        self.times.last().copied().unwrap_or(0.0)
    }

    pub fn duration(&self) -> f64 {
        self.end_time() - self.start_time()
    }

    /// Clamp a query time into the match bounds; NaN maps to the start.
    #[inline]
    pub fn clamp_time(&self, t: f64) -> f64 {
        if t.is_nan() {
            self.start_time()
        } else {
            t.clamp(self.start_time(), self.end_time())
        }
    }

    /// All samples of one player, ordered by time.
    pub fn samples(&self, player_id: PlayerId) -> &[TrackingSample] {
        self.samples.get(&player_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn sample_count(&self) -> usize {
        self.samples.values().map(Vec::len).sum()
    }

    /// Latest sample at or before `t` and earliest sample at or after `t`.
    ///
    /// A sample exactly at `t` is returned on both sides.
    pub fn nearest_samples(
        &self,
        player_id: PlayerId,
        t: f64,
    ) -> (Option<&TrackingSample>, Option<&TrackingSample>) {
        let list = self.samples(player_id);
        let upto = list.partition_point(|s| s.t <= t);
        let before = upto.checked_sub(1).map(|i| &list[i]);
        let after = list.get(list.partition_point(|s| s.t < t));
        (before, after)
    }

    /// Ball location at `t`: the most recent event location at or before `t`,
    /// else the first known location, else the centre spot.
    pub fn ball_position_at(&self, t: f64) -> PitchPos {
        let upto = self.ball.partition_point(|(bt, _)| *bt <= t);
        match upto.checked_sub(1) {
            Some(i) => self.ball[i].1,
            None => self.ball.first().map(|(_, pos)| *pos).unwrap_or(self.centre_spot),
        }
    }

    /// Number of events with timestamp ≤ `t`.
    #[inline]
    pub fn events_until(&self, t: f64) -> usize {
        self.times.partition_point(|et| *et <= t)
    }

    /// Most recent event at or before `t`.
    pub fn event_at(&self, t: f64) -> Option<&Event> {
        self.events_until(t).checked_sub(1).map(|i| &self.events[i])
    }

    /// Events with `from < timestamp <= to`; empty when `to < from`.
    pub fn events_between(&self, from: f64, to: f64) -> &[Event] {
        let lo = self.events_until(from);
        let hi = self.events_until(to);
        if hi <= lo {
            &[]
        } else {
            &self.events[lo..hi]
        }
    }
}

fn validate_event(idx: usize, event: &Event) -> std::result::Result<f64, MalformedEventError> {
    let t = event
        .timestamp
        .ok_or_else(|| MalformedEventError::new(idx, MalformedEventReason::MissingTimestamp))?;
    if !t.is_finite() || t < 0.0 {
        return Err(MalformedEventError::new(idx, MalformedEventReason::InvalidTimestamp(t)));
    }
    if event.event_type == EventType::FreezeFrame
        && event.freeze_frame.as_ref().map_or(true, Vec::is_empty)
    {
        return Err(MalformedEventError::new(idx, MalformedEventReason::EmptyFreezeFrame));
    }
    Ok(t)
}
