//! Loaded match facade
//!
//! `MatchReplay` owns everything derived from one `MatchData` document and
//! answers every query with `&self`. Several matches can be loaded side by
//! side and shared across threads.

pub mod playback;

pub use playback::PlaybackClock;

use tracing::info;

use crate::blend::PositionBlender;
use crate::config::ReplayConfig;
use crate::digest;
use crate::error::Result;
use crate::models::{Event, MatchData, PlayerId, PositionSource, RenderFrame, TeamInfo};
use crate::pitch::PitchPos;
use crate::roster::RosterCache;
use crate::state::{MatchState, StateIndex};
use crate::stats::MatchStatistics;
use crate::tactical::TacticalModel;
use crate::timeline::EventTimeline;

#[derive(Debug, Clone)]
pub struct MatchReplay {
    home: TeamInfo,
    away: TeamInfo,
    config: ReplayConfig,
    roster: RosterCache,
    timeline: EventTimeline,
    tactical: TacticalModel,
    states: StateIndex,
    stats: MatchStatistics,
}

impl MatchReplay {
    /// Validate the configuration and index a match document.
    pub fn load(data: MatchData, config: ReplayConfig) -> Result<Self> {
        config.validate()?;

        let roster = RosterCache::build(data.home.id, data.away.id, data.roster)?;
        let timeline = EventTimeline::load(data.events, &roster, &config.pitch, &config.timeline)?;
        let tactical =
            TacticalModel::new(config.pitch, config.tactical.clone(), config.separation.clone());
        let states = StateIndex::build(&timeline, &roster);
        let stats = MatchStatistics::from_events(timeline.events(), &roster);

        info!(
            home = %data.home.name,
            away = %data.away.name,
            players = roster.len(),
            duration = timeline.duration(),
            "match loaded"
        );

        Ok(Self { home: data.home, away: data.away, config, roster, timeline, tactical, states, stats })
    }

    pub fn from_json_str(json: &str, config: ReplayConfig) -> Result<Self> {
        Self::load(MatchData::from_json_str(json)?, config)
    }

    pub fn home(&self) -> &TeamInfo {
        &self.home
    }

    pub fn away(&self) -> &TeamInfo {
        &self.away
    }

    pub fn config(&self) -> &ReplayConfig {
        &self.config
    }

    pub fn roster(&self) -> &RosterCache {
        &self.roster
    }

    pub fn timeline(&self) -> &EventTimeline {
        &self.timeline
    }

    pub fn tactical(&self) -> &TacticalModel {
        &self.tactical
    }

    pub fn start_time(&self) -> f64 {
        self.timeline.start_time()
    }

    pub fn end_time(&self) -> f64 {
        self.timeline.end_time()
    }

    pub fn blender(&self) -> PositionBlender<'_> {
        PositionBlender::new(&self.timeline, &self.roster, &self.tactical, &self.config.blend)
    }

    pub fn position_at(&self, player_id: PlayerId, t: f64) -> Option<PitchPos> {
        self.blender().position_at(player_id, t)
    }

    pub fn sourced_position_at(
        &self,
        player_id: PlayerId,
        t: f64,
    ) -> Option<(PitchPos, PositionSource)> {
        self.blender().sourced_position_at(player_id, t)
    }

    pub fn ball_position_at(&self, t: f64) -> PitchPos {
        self.timeline.ball_position_at(self.timeline.clamp_time(t))
    }

    pub fn frame_at(&self, t: f64) -> RenderFrame {
        self.blender().frame_at(t)
    }

    /// Frames sampled at `fps` from kickoff to the last event, computed lazily.
    pub fn frames(&self, fps: f64) -> Result<impl ExactSizeIterator<Item = RenderFrame> + '_> {
        let blender = self.blender();
        let times = digest::sample_times(self.start_time(), self.end_time(), fps)?;
        Ok(times.map(move |t| blender.frame_at(t)))
    }

    pub fn state_at(&self, t: f64) -> MatchState {
        self.states.state_at(&self.timeline, self.timeline.clamp_time(t))
    }

    /// Events crossed when moving the clock from `from` (exclusive) to `to` (inclusive).
    pub fn events_between(&self, from: f64, to: f64) -> &[Event] {
        self.timeline.events_between(from, to)
    }

    pub fn stats(&self) -> &MatchStatistics {
        &self.stats
    }

    /// SHA-256 of all frames sampled at `fps`.
    pub fn digest(&self, fps: f64) -> Result<String> {
        digest::replay_digest(&self.blender(), self.start_time(), self.end_time(), fps)
    }

    /// Fresh paused clock spanning this match.
    pub fn playback_clock(&self) -> PlaybackClock {
        PlaybackClock::new(self.start_time(), self.end_time(), self.config.playback.clone())
    }
}
