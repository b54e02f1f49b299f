//! Playback clock
//!
//! Holds the UI-facing replay clock only. Frames are still pulled from the
//! stateless `MatchReplay` queries with whatever time this clock reports.

use crate::config::PlaybackConfig;
use crate::state::match_minute;

#[derive(Debug, Clone)]
pub struct PlaybackClock {
    start: f64,
    end: f64,
    current: f64,
    speed: f64,
    playing: bool,
    config: PlaybackConfig,
}

impl PlaybackClock {
    /// Paused at `start`, normal speed (raised to the minimum if needed).
    pub fn new(start: f64, end: f64, config: PlaybackConfig) -> Self {
        let end = end.max(start);
        let speed = 1.0f64.clamp(config.min_speed, config.max_speed);
        Self { start, end, current: start, speed, playing: false, config }
    }

    pub fn play(&mut self) {
        self.playing = true;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Pause and rewind to the start.
    pub fn stop(&mut self) {
        self.playing = false;
        self.current = self.start;
    }

    pub fn toggle(&mut self) {
        self.playing = !self.playing;
    }

    /// Advance by `dt` wall-clock seconds scaled by the playback speed.
    ///
    /// Does nothing while paused. Reaching the end pauses the clock there.
    pub fn advance(&mut self, dt: f64) -> f64 {
        if !self.playing || !(dt.is_finite() && dt > 0.0) {
            return self.current;
        }
        self.current = (self.current + dt * self.speed).min(self.end);
        if self.current >= self.end {
            self.playing = false;
        }
        self.current
    }

    /// Jump to `t`, clamped to the match; the play/pause state is kept.
    pub fn seek(&mut self, t: f64) {
        self.current = if t.is_nan() { self.start } else { t.clamp(self.start, self.end) };
    }

    /// Set the speed multiplier, clamped to the configured range. Returns the applied speed.
    pub fn set_speed(&mut self, speed: f64) -> f64 {
        self.speed = if speed.is_nan() {
            self.config.min_speed
        } else {
            speed.clamp(self.config.min_speed, self.config.max_speed)
        };
        self.speed
    }

    pub fn current_time(&self) -> f64 {
        self.current
    }

    pub fn current_minute(&self) -> u32 {
        match_minute(self.current)
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_finished(&self) -> bool {
        self.current >= self.end
    }
}
