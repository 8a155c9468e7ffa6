// ABOUTME: Demo binary: replays a synthetic landmark stream through a full session
// ABOUTME: Shows live counting, completion dispatch, and teardown without a camera
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Rehab Motion Engine

//! Replays a synthetic landmark stream through a full exercise session,
//! printing the resulting count and completion status. Useful for trying
//! the engine without a camera or a pose model.

#![allow(clippy::print_stdout)]

use std::str::FromStr;
use std::sync::Arc;

use anyhow::Result;
use chrono::{Duration as ChronoDuration, Utc};
use clap::Parser;
use tracing::info;

use rehab_motion_engine::api::{initialize_shared_client, ExerciseApiClient};
use rehab_motion_engine::catalog::ExerciseInfo;
use rehab_motion_engine::config::EngineConfig;
use rehab_motion_engine::dispatcher::HttpCompletionSink;
use rehab_motion_engine::errors::EngineError;
use rehab_motion_engine::logging;
use rehab_motion_engine::models::{ExerciseKind, Landmark, LandmarkFrame, PoseLandmark};
use rehab_motion_engine::session::ExerciseSession;
use rehab_motion_engine::source::ScriptedSource;

/// Replay a synthetic exercise session through the counting engine
#[derive(Parser, Debug)]
#[command(name = "rehab-motion-demo")]
struct Args {
    /// Exercise kind to score (e.g. squat, knee_raise, raise_hands)
    #[arg(long, default_value = "squat")]
    exercise: String,

    /// Repetition target; defaults to the catalog prescription
    #[arg(long)]
    target: Option<u32>,

    /// Assignment id reported to the completion API
    #[arg(long, default_value = "demo-assignment")]
    assignment_id: String,

    /// Look the assignment up on the practice-management API first and take
    /// the exercise kind and target from it
    #[arg(long)]
    lookup: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init()?;

    let args = Args::parse();
    let config = EngineConfig::from_env();
    initialize_shared_client(config.http_timeout_secs, config.http_connect_timeout_secs);

    let client = ExerciseApiClient::new(&config.api_base_url);

    let (kind, target) = if args.lookup {
        let assignment = client.get_patient_exercise(&args.assignment_id).await?;
        let kind = ExerciseKind::from_str(&assignment.exercise_type)?;
        let target = args
            .target
            .or(assignment.repetitions)
            .unwrap_or_else(|| ExerciseInfo::for_kind(kind).repetitions);
        (kind, target)
    } else {
        let kind = ExerciseKind::from_str(&args.exercise)?;
        let target = args
            .target
            .unwrap_or_else(|| ExerciseInfo::for_kind(kind).repetitions);
        (kind, target)
    };
    let info = ExerciseInfo::for_kind(kind);

    info!(%kind, target, "starting demo session for '{}'", info.name);

    let frames = scripted_frames(kind, target);
    if frames.is_empty() {
        return Err(EngineError::DeviceUnavailable {
            reason: "scripted stream produced no frames".to_owned(),
        }
        .into());
    }

    let sink = Arc::new(HttpCompletionSink::new(client));
    let mut session =
        ExerciseSession::with_debounce(kind, &args.assignment_id, target, config.debounce(), sink);
    let mut source = ScriptedSource::new(frames, config.frame_interval());

    let summary = session.run(&mut source, config.completion_delay()).await;

    println!(
        "{}: {}/{} repetitions, completed = {}",
        info.name, summary.repetitions, target, summary.completed
    );
    Ok(())
}

/// One in-position / out-of-position cycle per target repetition.
///
/// The out-of-position frames re-arm the debounce so each cycle scores
/// exactly one repetition regardless of cadence.
fn scripted_frames(kind: ExerciseKind, target: u32) -> Vec<LandmarkFrame> {
    let mut frames = Vec::new();
    let mut at = Utc::now();
    let step = ChronoDuration::milliseconds(100);

    for _ in 0..target {
        for _ in 0..3 {
            frames.push(in_position_frame(kind).with_captured_at(at));
            at += step;
        }
        for _ in 0..2 {
            frames.push(out_of_position_frame(kind).with_captured_at(at));
            at += step;
        }
    }
    frames
}

fn in_position_frame(kind: ExerciseKind) -> LandmarkFrame {
    let frame = LandmarkFrame::empty(Utc::now());
    match kind {
        ExerciseKind::Squat => frame
            .with(PoseLandmark::LeftShoulder, Landmark::at(0.62, 0.58))
            .with(PoseLandmark::LeftHip, Landmark::at(0.5, 0.5))
            .with(PoseLandmark::LeftKnee, Landmark::at(0.5, 0.7))
            .with(PoseLandmark::LeftAnkle, Landmark::at(0.7, 0.7))
            .with(PoseLandmark::RightHip, Landmark::at(0.5, 0.5))
            .with(PoseLandmark::RightKnee, Landmark::at(0.5, 0.7))
            .with(PoseLandmark::RightAnkle, Landmark::at(0.7, 0.7)),
        ExerciseKind::ShoulderPress => frame
            .with(PoseLandmark::LeftShoulder, Landmark::at(0.4, 0.5))
            .with(PoseLandmark::LeftElbow, Landmark::at(0.4, 0.35))
            .with(PoseLandmark::LeftWrist, Landmark::at(0.4, 0.2))
            .with(PoseLandmark::RightShoulder, Landmark::at(0.6, 0.5))
            .with(PoseLandmark::RightElbow, Landmark::at(0.6, 0.35))
            .with(PoseLandmark::RightWrist, Landmark::at(0.6, 0.2)),
        ExerciseKind::Plank => frame
            .with(PoseLandmark::LeftShoulder, Landmark::at(0.3, 0.5))
            .with(PoseLandmark::LeftHip, Landmark::at(0.5, 0.5))
            .with(PoseLandmark::LeftAnkle, Landmark::at(0.32, 0.52))
            .with(PoseLandmark::RightShoulder, Landmark::at(0.3, 0.52))
            .with(PoseLandmark::RightHip, Landmark::at(0.5, 0.52))
            .with(PoseLandmark::RightAnkle, Landmark::at(0.32, 0.54)),
        ExerciseKind::BicepCurl | ExerciseKind::WallPushup => frame
            .with(PoseLandmark::LeftShoulder, Landmark::at(0.4, 0.5))
            .with(PoseLandmark::LeftElbow, Landmark::at(0.4, 0.65))
            .with(PoseLandmark::LeftWrist, Landmark::at(0.55, 0.65))
            .with(PoseLandmark::RightShoulder, Landmark::at(0.6, 0.5))
            .with(PoseLandmark::RightElbow, Landmark::at(0.6, 0.65))
            .with(PoseLandmark::RightWrist, Landmark::at(0.75, 0.65)),
        ExerciseKind::Bridge => frame
            .with(PoseLandmark::LeftShoulder, Landmark::at(0.3, 0.7))
            .with(PoseLandmark::LeftHip, Landmark::at(0.5, 0.5))
            .with(PoseLandmark::LeftKnee, Landmark::at(0.6, 0.62))
            .with(PoseLandmark::RightShoulder, Landmark::at(0.3, 0.72))
            .with(PoseLandmark::RightHip, Landmark::at(0.5, 0.52))
            .with(PoseLandmark::RightKnee, Landmark::at(0.6, 0.64)),
        ExerciseKind::KneeBend => frame
            .with(PoseLandmark::RightHip, Landmark::at(0.5, 0.5))
            .with(PoseLandmark::RightKnee, Landmark::at(0.5, 0.7))
            .with(PoseLandmark::RightAnkle, Landmark::at(0.52, 0.52)),
        ExerciseKind::KneeRaise => frame
            .with(PoseLandmark::LeftKnee, Landmark::at(0.5, 0.4))
            .with(PoseLandmark::LeftHip, Landmark::at(0.5, 0.5)),
        ExerciseKind::RaiseHands => frame
            .with(PoseLandmark::LeftWrist, Landmark::at(0.4, 0.2))
            .with(PoseLandmark::RightWrist, Landmark::at(0.6, 0.2))
            .with(PoseLandmark::Nose, Landmark::at(0.5, 0.3)),
        ExerciseKind::TouchShoulder => frame
            .with(PoseLandmark::LeftWrist, Landmark::at(0.505, 0.3))
            .with(PoseLandmark::LeftShoulder, Landmark::at(0.5, 0.3)),
    }
}

fn out_of_position_frame(kind: ExerciseKind) -> LandmarkFrame {
    let frame = LandmarkFrame::empty(Utc::now());
    match kind {
        ExerciseKind::Squat => frame
            .with(PoseLandmark::LeftShoulder, Landmark::at(0.5, 0.1))
            .with(PoseLandmark::LeftHip, Landmark::at(0.5, 0.3))
            .with(PoseLandmark::LeftKnee, Landmark::at(0.5, 0.5))
            .with(PoseLandmark::LeftAnkle, Landmark::at(0.5, 0.7))
            .with(PoseLandmark::RightHip, Landmark::at(0.5, 0.3))
            .with(PoseLandmark::RightKnee, Landmark::at(0.5, 0.5))
            .with(PoseLandmark::RightAnkle, Landmark::at(0.5, 0.7)),
        ExerciseKind::ShoulderPress => frame
            .with(PoseLandmark::LeftShoulder, Landmark::at(0.4, 0.5))
            .with(PoseLandmark::LeftElbow, Landmark::at(0.4, 0.65))
            .with(PoseLandmark::LeftWrist, Landmark::at(0.55, 0.65))
            .with(PoseLandmark::RightShoulder, Landmark::at(0.6, 0.5))
            .with(PoseLandmark::RightElbow, Landmark::at(0.6, 0.65))
            .with(PoseLandmark::RightWrist, Landmark::at(0.75, 0.65)),
        ExerciseKind::Plank => frame
            .with(PoseLandmark::LeftShoulder, Landmark::at(0.3, 0.3))
            .with(PoseLandmark::LeftHip, Landmark::at(0.5, 0.5))
            .with(PoseLandmark::LeftAnkle, Landmark::at(0.7, 0.7))
            .with(PoseLandmark::RightShoulder, Landmark::at(0.3, 0.32))
            .with(PoseLandmark::RightHip, Landmark::at(0.5, 0.52))
            .with(PoseLandmark::RightAnkle, Landmark::at(0.7, 0.72)),
        ExerciseKind::BicepCurl | ExerciseKind::WallPushup => frame
            .with(PoseLandmark::LeftShoulder, Landmark::at(0.4, 0.5))
            .with(PoseLandmark::LeftElbow, Landmark::at(0.4, 0.65))
            .with(PoseLandmark::LeftWrist, Landmark::at(0.4, 0.8))
            .with(PoseLandmark::RightShoulder, Landmark::at(0.6, 0.5))
            .with(PoseLandmark::RightElbow, Landmark::at(0.6, 0.65))
            .with(PoseLandmark::RightWrist, Landmark::at(0.6, 0.8)),
        ExerciseKind::Bridge => frame
            .with(PoseLandmark::LeftShoulder, Landmark::at(0.3, 0.7))
            .with(PoseLandmark::LeftHip, Landmark::at(0.5, 0.7))
            .with(PoseLandmark::LeftKnee, Landmark::at(0.7, 0.7))
            .with(PoseLandmark::RightShoulder, Landmark::at(0.3, 0.72))
            .with(PoseLandmark::RightHip, Landmark::at(0.5, 0.72))
            .with(PoseLandmark::RightKnee, Landmark::at(0.7, 0.72)),
        ExerciseKind::KneeBend => frame
            .with(PoseLandmark::RightHip, Landmark::at(0.5, 0.3))
            .with(PoseLandmark::RightKnee, Landmark::at(0.5, 0.5))
            .with(PoseLandmark::RightAnkle, Landmark::at(0.5, 0.9)),
        ExerciseKind::KneeRaise => frame
            .with(PoseLandmark::LeftKnee, Landmark::at(0.5, 0.6))
            .with(PoseLandmark::LeftHip, Landmark::at(0.5, 0.5)),
        ExerciseKind::RaiseHands => frame
            .with(PoseLandmark::LeftWrist, Landmark::at(0.4, 0.5))
            .with(PoseLandmark::RightWrist, Landmark::at(0.6, 0.5))
            .with(PoseLandmark::Nose, Landmark::at(0.5, 0.3)),
        ExerciseKind::TouchShoulder => frame
            .with(PoseLandmark::LeftWrist, Landmark::at(0.7, 0.6))
            .with(PoseLandmark::LeftShoulder, Landmark::at(0.5, 0.3)),
    }
}
