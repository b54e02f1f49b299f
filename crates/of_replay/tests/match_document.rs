//! Loading provider documents through the public API

use of_replay::{
    EventType, MalformedEventReason, MatchData, MatchReplay, PlayerId, PositionSource,
    ReplayConfig, ReplayError, SampleOrigin, StatKind,
};

const MINI_MATCH: &str = include_str!("fixtures/mini_match.json");

#[test]
fn parses_and_loads_fixture() {
    let data = MatchData::from_json_str(MINI_MATCH).unwrap();
    assert_eq!(data.events.len(), 7);
    // Unknown provider types are kept as `other`
    assert_eq!(data.events[2].event_type, EventType::Other);

    let replay = MatchReplay::load(data, ReplayConfig::default()).unwrap();
    assert_eq!(replay.home().name, "Barcelona");
    assert_eq!(replay.roster().len(), 5);
    assert_eq!(replay.end_time(), 90.0);
}

#[test]
fn freeze_frame_and_actor_samples_are_indexed() {
    let replay = MatchReplay::from_json_str(MINI_MATCH, ReplayConfig::default()).unwrap();

    let keeper = replay.timeline().samples(PlayerId(6374));
    assert_eq!(keeper.len(), 1);
    assert_eq!(keeper[0].origin, SampleOrigin::FreezeFrame);

    let messi = replay.timeline().samples(PlayerId(5503));
    assert_eq!(messi.iter().map(|s| s.t).collect::<Vec<_>>(), vec![4.8, 9.5, 62.4]);
    assert!(messi.iter().all(|s| s.origin == SampleOrigin::EventActor));
}

#[test]
fn state_and_stats_from_fixture() {
    let replay = MatchReplay::from_json_str(MINI_MATCH, ReplayConfig::default()).unwrap();

    assert_eq!(replay.state_at(60.0).score_line(), "0-0");
    let after_goal = replay.state_at(62.4);
    assert_eq!(after_goal.score_line(), "1-0");
    assert_eq!(after_goal.minute, 1);

    let messi = replay.stats().player(PlayerId(5503)).unwrap();
    assert_eq!((messi.shots, messi.shots_on_target, messi.goals), (2, 2, 1));
    assert_eq!(replay.stats().top_players(StatKind::Shots, 1), vec![(PlayerId(5503), 2)]);
}

#[test]
fn player_without_samples_is_tactical() {
    let replay = MatchReplay::from_json_str(MINI_MATCH, ReplayConfig::default()).unwrap();
    let (_, source) = replay.sourced_position_at(PlayerId(20055), 45.0).unwrap();
    assert_eq!(source, PositionSource::Tactical);
}

#[test]
fn missing_timestamp_rejects_match() {
    let broken = MINI_MATCH.replacen("\"timestamp\": 31.0, ", "", 1);
    let err = MatchReplay::from_json_str(&broken, ReplayConfig::default()).unwrap_err();

    match err {
        ReplayError::MalformedEvent(e) => {
            assert_eq!(e.event_index, 4);
            assert_eq!(e.reason, MalformedEventReason::MissingTimestamp);
            assert!(e.to_string().contains("#4"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn roster_with_foreign_team_rejected() {
    let broken = MINI_MATCH.replacen("\"team_id\": 206}", "\"team_id\": 999}", 1);
    let err = MatchReplay::from_json_str(&broken, ReplayConfig::default()).unwrap_err();
    assert!(matches!(err, ReplayError::UnknownTeam { .. }));
    assert!(err.is_recoverable());
}

#[test]
fn invalid_json_is_reported() {
    let err = MatchReplay::from_json_str("{\"home\": ", ReplayConfig::default()).unwrap_err();
    assert!(matches!(err, ReplayError::Json(_)));
}

#[test]
fn schema_describes_document() {
    let schema = MatchData::json_schema();
    assert!(schema["properties"]["events"].is_object());
    assert!(schema["properties"]["roster"].is_object());
}
