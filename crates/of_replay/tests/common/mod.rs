//! Shared match fixtures for integration tests

#![allow(dead_code)]

use of_replay::{
    Event, EventOutcome, EventType, FreezeFramePlayer, MatchData, PlayerId, PlayerMeta, TeamId,
    TeamInfo,
};

pub const HOME: TeamId = TeamId(1);
pub const AWAY: TeamId = TeamId(2);

/// 4-4-2 with two identical striker labels.
const LINEUP: [&str; 11] = ["GK", "LB", "LCB", "RCB", "RB", "LM", "LCM", "RCM", "RM", "ST", "ST"];

/// Eleven players of one team with ids `first_id..first_id + 11`.
pub fn lineup(team: TeamId, first_id: u32) -> Vec<PlayerMeta> {
    LINEUP
        .iter()
        .enumerate()
        .map(|(i, role)| PlayerMeta::new(first_id + i as u32, i as u8 + 1, *role, team.0))
        .collect()
}

pub fn teams() -> (TeamInfo, TeamInfo) {
    (TeamInfo { id: HOME, name: "Home FC".into() }, TeamInfo { id: AWAY, name: "Away FC".into() })
}

/// Five minutes of play: a located pass every 7 seconds, a few freeze frames
/// and a home goal at 200s.
pub fn sample_match() -> MatchData {
    let (home, away) = teams();
    let mut roster = lineup(HOME, 1);
    roster.extend(lineup(AWAY, 101));

    let mut events = vec![Event::new(0.0, EventType::PeriodStart)];
    for i in 1..42u32 {
        let t = i as f64 * 7.0;
        let (team, player) = if i % 3 == 0 { (AWAY, 101 + i % 11) } else { (HOME, 1 + i % 11) };
        let x = 10.0 + (i as f64 * 13.0) % 100.0;
        let y = 5.0 + (i as f64 * 17.0) % 70.0;
        events.push(
            Event::new(t, EventType::Pass)
                .with_team(team)
                .with_player(PlayerId(player))
                .at(x, y)
                .with_outcome(if i % 4 == 0 { EventOutcome::Incomplete } else { EventOutcome::Complete }),
        );
    }
    for (t, shift) in [(30.0, 0.0), (33.0, 2.0), (60.0, 5.0), (150.0, -4.0)] {
        events.push(Event::freeze_frame(
            t,
            vec![
                FreezeFramePlayer::new(PlayerId(10), 70.0 + shift, 38.0),
                FreezeFramePlayer::new(PlayerId(11), 72.0 + shift, 44.0),
                FreezeFramePlayer::new(PlayerId(103), 40.0 - shift, 30.0),
            ],
        ));
    }
    events.push(
        Event::new(200.0, EventType::Shot)
            .with_team(HOME)
            .with_player(PlayerId(10))
            .at(108.0, 41.0)
            .with_outcome(EventOutcome::Goal),
    );
    events.push(Event::new(300.0, EventType::PeriodEnd));

    MatchData { home, away, roster, events }
}

/// Full lineups, ball moving along the pitch, no tracking data at all.
pub fn untracked_match() -> MatchData {
    let (home, away) = teams();
    let mut roster = lineup(HOME, 1);
    roster.extend(lineup(AWAY, 101));

    let events = (0..=20)
        .map(|i| Event::new(i as f64 * 10.0, EventType::Pass).at(i as f64 * 6.0, 40.0))
        .collect();
    MatchData { home, away, roster, events }
}

/// Home front-loaded XI stacked around the centre forward slot, standard away
/// lineup, no tracking data.
pub fn crowded_match() -> MatchData {
    const CROWDED: [&str; 11] =
        ["ST", "ST", "ST", "CF", "LF", "RF", "CAM", "CAM", "LAM", "RAM", "CM"];

    let mut data = untracked_match();
    for (meta, role) in data.roster.iter_mut().zip(CROWDED) {
        meta.role = role.to_string();
    }
    data
}

/// One home player with freeze frames at the given (t, x, y) instants.
pub fn single_player_match(samples: &[(f64, f64, f64)], end: f64) -> MatchData {
    let (home, away) = teams();
    let mut events: Vec<Event> = samples
        .iter()
        .map(|&(t, x, y)| Event::freeze_frame(t, vec![FreezeFramePlayer::new(PlayerId(1), x, y)]))
        .collect();
    events.push(Event::new(0.0, EventType::PeriodStart));
    events.push(Event::new(end, EventType::PeriodEnd));

    MatchData { home, away, roster: vec![PlayerMeta::new(1, 8, "CM", HOME.0)], events }
}
