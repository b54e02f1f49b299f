//! Position Blender
//!
//! Resolves the position of a player at an arbitrary timestamp by fusing
//! sparse tracking samples with the tactical model:
//!
//! 1. Two samples at most `max_tracking_gap` apart: smoothstep between them.
//! 2. Otherwise blend between the nearest samples and the tactical target over
//!    `transition_window` seconds on either side; with no samples at all the
//!    tactical target is used as is.
//! 3. Add deterministic idle noise and clamp to the pitch.
//!
//! The blender holds only borrowed, immutable state, so it is pure over
//! (loaded match, t).

use super::easing::{smoothstep, transition_weight};
use super::idle_noise::IdleNoise;
use crate::config::BlendConfig;
use crate::models::{PlayerFrame, PlayerId, PositionSource, RenderFrame, TeamSide};
use crate::pitch::PitchPos;
use crate::roster::RosterCache;
use crate::tactical::TacticalModel;
use crate::timeline::EventTimeline;

#[derive(Debug, Clone, Copy)]
pub struct PositionBlender<'a> {
    timeline: &'a EventTimeline,
    roster: &'a RosterCache,
    tactical: &'a TacticalModel,
    config: &'a BlendConfig,
    noise: IdleNoise,
}

impl<'a> PositionBlender<'a> {
    pub fn new(
        timeline: &'a EventTimeline,
        roster: &'a RosterCache,
        tactical: &'a TacticalModel,
        config: &'a BlendConfig,
    ) -> Self {
        Self { timeline, roster, tactical, config, noise: IdleNoise::new(config.idle_noise_amplitude) }
    }

    /// Final rendered position of one player; `None` only for an unknown id.
    ///
    /// A fallback query resolves the player's whole team shape, which is
    /// O(n² × passes). Use [`frame_at`](Self::frame_at) to render every player
    /// at once; it resolves each shape a single time.
    pub fn position_at(&self, player_id: PlayerId, t: f64) -> Option<PitchPos> {
        self.sourced_position_at(player_id, t).map(|(pos, _)| pos)
    }

    /// Like `position_at`, also reporting which path produced the position.
    pub fn sourced_position_at(
        &self,
        player_id: PlayerId,
        t: f64,
    ) -> Option<(PitchPos, PositionSource)> {
        let entry = self.roster.get(player_id)?;
        let t = self.timeline.clamp_time(t);

        let (base, source) = self.blend(player_id, t, || {
            let ball = self.timeline.ball_position_at(t);
            self.tactical
                .team_shape(entry.side, self.roster.side(entry.side), ball)
                .position_of(player_id)
                .unwrap_or_else(|| self.tactical.tactical_position(entry.role, entry.side, ball))
        });
        Some((self.finish(player_id, t, base), source))
    }

    /// Every rostered player plus the ball at `t`, players ordered by id.
    ///
    /// Each team shape is resolved once per frame and shared by all of its
    /// players.
    pub fn frame_at(&self, t: f64) -> RenderFrame {
        let t = self.timeline.clamp_time(t);
        let ball = self.timeline.ball_position_at(t);

        let mut players = Vec::with_capacity(self.roster.len());
        for side in [TeamSide::Home, TeamSide::Away] {
            let shape = self.tactical.team_shape(side, self.roster.side(side), ball);
            for &(player_id, target) in &shape.positions {
                let Some(entry) = self.roster.get(player_id) else {
                    continue;
                };
                let (base, source) = self.blend(player_id, t, || target);
                players.push(PlayerFrame {
                    player_id,
                    team_id: entry.meta.team_id,
                    jersey_number: entry.meta.jersey_number,
                    position: self.finish(player_id, t, base),
                    source,
                });
            }
        }
        players.sort_by_key(|p| p.player_id);

        RenderFrame { t, ball, players }
    }

    /// Position before idle noise. `target` is only evaluated when tracking
    /// data is too sparse.
    fn blend(
        &self,
        player_id: PlayerId,
        t: f64,
        target: impl FnOnce() -> PitchPos,
    ) -> (PitchPos, PositionSource) {
        let (before, after) = self.timeline.nearest_samples(player_id, t);

        if let (Some(b), Some(a)) = (before, after) {
            let gap = a.t - b.t;
            if gap <= self.config.max_tracking_gap {
                if gap <= 0.0 {
                    return (b.position, PositionSource::Tracked);
                }
                let s = smoothstep((t - b.t) / gap);
                return (b.position.lerp(a.position, s), PositionSource::Tracked);
            }
        }

        let target = target();
        let window = self.config.transition_window;
        let mut pos = target;
        let mut fully_tactical = true;

        // Drift away from the last known position...
        if let Some(b) = before {
            let w = transition_weight(t - b.t, window);
            pos = b.position.lerp(target, w);
            fully_tactical &= w >= 1.0;
        }
        // ...and converge onto the next one.
        if let Some(a) = after {
            let w = transition_weight(a.t - t, window);
            pos = a.position.lerp(pos, w);
            fully_tactical &= w >= 1.0;
        }

        let source = if fully_tactical { PositionSource::Tactical } else { PositionSource::Blended };
        (pos, source)
    }

    fn finish(&self, player_id: PlayerId, t: f64, base: PitchPos) -> PitchPos {
        let (dx, dy) = self.noise.offset(player_id, t);
        self.tactical.pitch().clamp(base.offset(dx, dy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ReplayConfig, TimelineConfig};
    use crate::models::{Event, EventType, FreezeFramePlayer, PlayerMeta, TeamId};
    use crate::pitch::Pitch;

    struct Fixture {
        timeline: EventTimeline,
        roster: RosterCache,
        tactical: TacticalModel,
        config: ReplayConfig,
    }

    impl Fixture {
        fn new(events: Vec<Event>, config: ReplayConfig) -> Self {
            let roster = RosterCache::build(
                TeamId(1),
                TeamId(2),
                vec![
                    PlayerMeta::new(1, 4, "CB", 1),
                    PlayerMeta::new(2, 9, "ST", 1),
                    PlayerMeta::new(3, 10, "CAM", 2),
                ],
            )
            .unwrap();
            let timeline =
                EventTimeline::load(events, &roster, &config.pitch, &TimelineConfig::default())
                    .unwrap();
            let tactical = TacticalModel::new(
                config.pitch,
                config.tactical.clone(),
                config.separation.clone(),
            );
            Self { timeline, roster, tactical, config }
        }

        fn blender(&self) -> PositionBlender<'_> {
            PositionBlender::new(&self.timeline, &self.roster, &self.tactical, &self.config.blend)
        }
    }

    fn ff(t: f64, id: u32, x: f64, y: f64) -> Event {
        Event::freeze_frame(t, vec![FreezeFramePlayer::new(PlayerId(id), x, y)])
    }

    #[test]
    fn test_smoothstep_midpoint() {
        let fx = Fixture::new(
            vec![ff(10.0, 1, 0.0, 0.0), ff(20.0, 1, 10.0, 10.0)],
            ReplayConfig::analysis(),
        );
        let (pos, source) = fx.blender().sourced_position_at(PlayerId(1), 15.0).unwrap();
        assert!((pos.x - 5.0).abs() < 1e-9 && (pos.y - 5.0).abs() < 1e-9, "{:?}", pos);
        assert_eq!(source, PositionSource::Tracked);
    }

    #[test]
    fn test_sample_timestamps_reproduce_samples() {
        let fx = Fixture::new(
            vec![ff(10.0, 1, 30.0, 20.0), ff(14.0, 1, 34.0, 22.0)],
            ReplayConfig::analysis(),
        );
        let blender = fx.blender();
        assert_eq!(blender.position_at(PlayerId(1), 10.0), Some(PitchPos::new(30.0, 20.0)));
        assert_eq!(blender.position_at(PlayerId(1), 14.0), Some(PitchPos::new(34.0, 22.0)));
    }

    #[test]
    fn test_unknown_player_is_none() {
        let fx = Fixture::new(vec![Event::new(0.0, EventType::PeriodStart)], ReplayConfig::default());
        assert!(fx.blender().position_at(PlayerId(999), 0.0).is_none());
    }

    #[test]
    fn test_no_samples_uses_tactical_target() {
        let fx = Fixture::new(
            vec![Event::new(0.0, EventType::PeriodStart), Event::new(60.0, EventType::PeriodEnd)],
            ReplayConfig::analysis(),
        );
        let (pos, source) = fx.blender().sourced_position_at(PlayerId(3), 30.0).unwrap();
        assert_eq!(source, PositionSource::Tactical);

        let ball = fx.timeline.ball_position_at(30.0);
        let shape = fx.tactical.team_shape(TeamSide::Away, fx.roster.side(TeamSide::Away), ball);
        assert_eq!(Some(pos), shape.position_of(PlayerId(3)));
    }

    #[test]
    fn test_fallback_engages_beyond_max_gap() {
        let cfg = ReplayConfig::analysis();
        let gap = cfg.blend.max_tracking_gap * 4.0;
        let fx = Fixture::new(vec![ff(0.0, 1, 10.0, 10.0), ff(gap, 1, 110.0, 70.0)], cfg);
        let blender = fx.blender();

        let mid = gap / 2.0;
        let (pos, source) = blender.sourced_position_at(PlayerId(1), mid).unwrap();
        assert_eq!(source, PositionSource::Tactical);

        // Pure linear interpolation between the samples would land here
        let straight = PitchPos::new(10.0, 10.0).lerp(PitchPos::new(110.0, 70.0), 0.5);
        assert!(pos.distance(straight) > 1.0);
    }

    #[test]
    fn test_gap_of_exactly_max_is_interpolated() {
        let cfg = ReplayConfig::analysis();
        let gap = cfg.blend.max_tracking_gap;

        let at_limit =
            Fixture::new(vec![ff(0.0, 1, 20.0, 20.0), ff(gap, 1, 40.0, 30.0)], cfg.clone());
        let (pos, source) = at_limit.blender().sourced_position_at(PlayerId(1), gap / 2.0).unwrap();
        assert_eq!(source, PositionSource::Tracked);
        assert!(pos.distance(PitchPos::new(30.0, 25.0)) < 1e-9, "{:?}", pos);

        let past_limit = Fixture::new(vec![ff(0.0, 1, 20.0, 20.0), ff(gap + 0.5, 1, 40.0, 30.0)], cfg);
        let (_, source) = past_limit.blender().sourced_position_at(PlayerId(1), gap / 2.0).unwrap();
        assert_ne!(source, PositionSource::Tracked);
    }

    #[test]
    fn test_transition_leaves_and_rejoins_samples() {
        let cfg = ReplayConfig::analysis();
        let window = cfg.blend.transition_window;
        let fx = Fixture::new(vec![ff(0.0, 1, 10.0, 10.0), ff(40.0, 1, 60.0, 40.0)], cfg);
        let blender = fx.blender();

        let (_, leaving) = blender.sourced_position_at(PlayerId(1), window * 0.5).unwrap();
        let (_, arriving) = blender.sourced_position_at(PlayerId(1), 40.0 - window * 0.5).unwrap();
        assert_eq!(leaving, PositionSource::Blended);
        assert_eq!(arriving, PositionSource::Blended);

        // Continuous at the sample times
        let near_start = blender.position_at(PlayerId(1), 1e-6).unwrap();
        assert!(near_start.distance(PitchPos::new(10.0, 10.0)) < 1e-3);
        let near_end = blender.position_at(PlayerId(1), 40.0 - 1e-6).unwrap();
        assert!(near_end.distance(PitchPos::new(60.0, 40.0)) < 1e-3);
    }

    #[test]
    fn test_single_sample_trails_off_to_tactical() {
        let cfg = ReplayConfig::analysis();
        let window = cfg.blend.transition_window;
        let fx = Fixture::new(
            vec![ff(10.0, 2, 100.0, 10.0), Event::new(60.0, EventType::PeriodEnd)],
            cfg,
        );
        let blender = fx.blender();

        let (_, src) = blender.sourced_position_at(PlayerId(2), 10.0 + window + 1.0).unwrap();
        assert_eq!(src, PositionSource::Tactical);

        // At the sample itself the tracked position is used
        let (_, src) = blender.sourced_position_at(PlayerId(2), 10.0).unwrap();
        assert_eq!(src, PositionSource::Tracked);
    }

    #[test]
    fn test_frame_matches_single_queries() {
        let fx = Fixture::new(
            vec![
                ff(0.0, 1, 20.0, 30.0),
                Event::new(5.0, EventType::Pass).with_player(PlayerId(2)).at(50.0, 40.0),
                Event::new(30.0, EventType::Shot).at(100.0, 35.0),
            ],
            ReplayConfig::default(),
        );
        let blender = fx.blender();

        for t in [0.0, 2.5, 7.0, 18.0, 30.0] {
            let frame = blender.frame_at(t);
            assert_eq!(frame.players.len(), 3);
            for p in &frame.players {
                assert_eq!(Some(p.position), blender.position_at(p.player_id, t));
            }
        }
    }

    #[test]
    fn test_frame_is_ordered_and_clamped_in_time() {
        let fx = Fixture::new(
            vec![Event::new(10.0, EventType::Pass).at(60.0, 40.0), Event::new(20.0, EventType::Pass)],
            ReplayConfig::default(),
        );
        let frame = fx.blender().frame_at(500.0);

        assert_eq!(frame.t, 20.0);
        let ids: Vec<u32> = frame.players.iter().map(|p| p.player_id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(frame.players.iter().all(|p| Pitch::default().contains(p.position)));
    }

    #[test]
    fn test_idle_noise_moves_tactical_players() {
        let events = vec![Event::new(0.0, EventType::PeriodStart), Event::new(60.0, EventType::PeriodEnd)];
        let quiet = Fixture::new(events.clone(), ReplayConfig::analysis());
        let noisy = Fixture::new(events, ReplayConfig::broadcast());

        let a = quiet.blender().position_at(PlayerId(3), 20.0).unwrap();
        let b = noisy.blender().position_at(PlayerId(3), 20.0).unwrap();
        let amp = ReplayConfig::broadcast().blend.idle_noise_amplitude;
        assert!(a.distance(b) <= amp * std::f64::consts::SQRT_2 + 1e-9);
    }
}
