//! Command implementations for the `of-replay` binary
//!
//! File access lives here, never in the core crate. Every command writes to
//! a caller-supplied writer so it can be exercised without a terminal.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Serialize;

use of_replay::digest::sample_times;
use of_replay::{
    MatchData, MatchReplay, PitchPos, PlayerId, PositionSource, ReplayConfig, StatKind,
};

/// Named configuration presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Profile {
    Broadcast,
    Analysis,
    Smooth,
}

impl Profile {
    pub fn config(self) -> ReplayConfig {
        match self {
            Profile::Broadcast => ReplayConfig::broadcast(),
            Profile::Analysis => ReplayConfig::analysis(),
            Profile::Smooth => ReplayConfig::smooth(),
        }
    }
}

pub fn load_match_file(path: &Path) -> Result<MatchData> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read match file: {}", path.display()))?;
    MatchData::from_json_str(&json)
        .with_context(|| format!("Failed to parse match file: {}", path.display()))
}

/// Config file (YAML by extension, JSON otherwise), else the preset, else
/// `OF_REPLAY_PROFILE`.
pub fn load_config(path: Option<&Path>, profile: Option<Profile>) -> Result<ReplayConfig> {
    let Some(path) = path else {
        return Ok(profile.map(Profile::config).unwrap_or_else(ReplayConfig::from_env_or_default));
    };

    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    let config = if is_yaml {
        ReplayConfig::from_yaml_str(&text)
    } else {
        ReplayConfig::from_json_str(&text)
    };
    config.with_context(|| format!("Invalid config file: {}", path.display()))
}

pub fn load_replay(match_path: &Path, config: ReplayConfig) -> Result<MatchReplay> {
    let data = load_match_file(match_path)?;
    MatchReplay::load(data, config)
        .with_context(|| format!("Failed to load match: {}", match_path.display()))
}

fn write_json_line<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Frames sampled at `fps` as JSON lines; returns the number written.
pub fn run_frames<W: Write>(
    replay: &MatchReplay,
    fps: f64,
    from: Option<f64>,
    to: Option<f64>,
    out: &mut W,
) -> Result<usize> {
    if !(fps.is_finite() && fps > 0.0) {
        bail!("fps must be positive, got {}", fps);
    }
    let timeline = replay.timeline();
    let start = timeline.clamp_time(from.unwrap_or(replay.start_time()));
    let end = timeline.clamp_time(to.unwrap_or(replay.end_time()));

    let blender = replay.blender();
    let times = sample_times(start, end, fps)?;
    let count = times.len();
    for t in times {
        write_json_line(out, &blender.frame_at(t))?;
    }
    Ok(count)
}

#[derive(Debug, Serialize)]
struct ProbeRow {
    t: f64,
    x: f64,
    y: f64,
    source: PositionSource,
}

/// One player's trajectory as JSON lines.
pub fn run_probe<W: Write>(
    replay: &MatchReplay,
    player: PlayerId,
    fps: f64,
    out: &mut W,
) -> Result<usize> {
    if !replay.roster().contains(player) {
        bail!("Player {} is not in the roster", player);
    }
    if !(fps.is_finite() && fps > 0.0) {
        bail!("fps must be positive, got {}", fps);
    }

    let times = sample_times(replay.start_time(), replay.end_time(), fps)?;
    let count = times.len();
    let blender = replay.blender();
    for t in times {
        let Some((PitchPos { x, y }, source)) = blender.sourced_position_at(player, t) else {
            continue;
        };
        write_json_line(out, &ProbeRow { t, x, y, source })?;
    }
    Ok(count)
}

pub fn run_state<W: Write>(replay: &MatchReplay, t: f64, out: &mut W) -> Result<()> {
    let state = replay.state_at(t);
    serde_json::to_writer_pretty(&mut *out, &state)?;
    writeln!(out)?;
    Ok(())
}

#[derive(Debug, Serialize)]
struct RankingRow<'a> {
    player_id: PlayerId,
    name: &'a str,
    jersey_number: u8,
    value: u32,
}

/// Full per-player statistics, or a ranking for one statistic.
pub fn run_stats<W: Write>(
    replay: &MatchReplay,
    top: Option<StatKind>,
    limit: usize,
    out: &mut W,
) -> Result<()> {
    let stats = replay.stats();
    match top {
        None => serde_json::to_writer_pretty(&mut *out, stats)?,
        Some(kind) => {
            let rows: Vec<RankingRow> = stats
                .top_players(kind, limit)
                .into_iter()
                .filter_map(|(id, value)| {
                    replay.roster().get(id).map(|entry| RankingRow {
                        player_id: id,
                        name: &entry.meta.name,
                        jersey_number: entry.meta.jersey_number,
                        value,
                    })
                })
                .collect();
            serde_json::to_writer_pretty(&mut *out, &rows)?;
        }
    }
    writeln!(out)?;
    Ok(())
}

pub fn run_digest<W: Write>(replay: &MatchReplay, fps: f64, out: &mut W) -> Result<String> {
    if !(fps.is_finite() && fps > 0.0) {
        bail!("fps must be positive, got {}", fps);
    }
    let digest = replay.digest(fps)?;
    writeln!(out, "{}", digest)?;
    Ok(digest)
}

pub fn run_schema<W: Write>(out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, &MatchData::json_schema())?;
    writeln!(out)?;
    Ok(())
}
