// ABOUTME: Core value types for the pose pipeline: landmarks, frames, kinds, verdicts
// ABOUTME: Landmark indices follow the MediaPipe 33-point pose scheme
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Rehab Motion Engine

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::EngineError;

/// Number of landmarks in one pose frame (MediaPipe pose scheme)
pub const LANDMARK_COUNT: usize = 33;

/// One tracked anatomical point.
///
/// Coordinates are normalized image coordinates: `x` and `y` in `[0, 1]`
/// with `y` growing downward, `z` a relative depth estimate. `visibility`
/// is the model's detection confidence in `[0, 1]`; positions with low
/// visibility must not be trusted for geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// Horizontal position, normalized
    pub x: f64,
    /// Vertical position, normalized, grows downward
    pub y: f64,
    /// Relative depth, unused by the 2D posture checks
    pub z: f64,
    /// Detection confidence in `[0, 1]`
    pub visibility: f64,
}

impl Landmark {
    /// Construct a landmark at a 2D position with full visibility
    #[must_use]
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            z: 0.0,
            visibility: 1.0,
        }
    }

    /// Return a copy with the given visibility score
    #[must_use]
    pub fn with_visibility(mut self, visibility: f64) -> Self {
        self.visibility = visibility;
        self
    }
}

/// Anatomical landmark indices (MediaPipe pose scheme).
///
/// Only the points the validators actually read are named; the scheme is
/// external and immutable for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
pub enum PoseLandmark {
    /// Nose tip
    Nose = 0,
    /// Left shoulder
    LeftShoulder = 11,
    /// Right shoulder
    RightShoulder = 12,
    /// Left elbow
    LeftElbow = 13,
    /// Right elbow
    RightElbow = 14,
    /// Left wrist
    LeftWrist = 15,
    /// Right wrist
    RightWrist = 16,
    /// Left hip
    LeftHip = 23,
    /// Right hip
    RightHip = 24,
    /// Left knee
    LeftKnee = 25,
    /// Right knee
    RightKnee = 26,
    /// Left ankle
    LeftAnkle = 27,
    /// Right ankle
    RightAnkle = 28,
}

impl PoseLandmark {
    /// Index of this landmark within a frame
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// One atomically produced set of landmarks from a single model inference.
///
/// Frames are immutable value objects; a new frame supersedes the previous
/// one and no history is retained. Slots may be empty when the model failed
/// to detect a point, so lookups are fallible by construction.
#[derive(Debug, Clone)]
pub struct LandmarkFrame {
    landmarks: Vec<Option<Landmark>>,
    captured_at: DateTime<Utc>,
}

impl LandmarkFrame {
    /// Build a frame from per-slot detections, padded or truncated to
    /// [`LANDMARK_COUNT`] entries
    #[must_use]
    pub fn new(mut landmarks: Vec<Option<Landmark>>, captured_at: DateTime<Utc>) -> Self {
        landmarks.resize(LANDMARK_COUNT, None);
        Self {
            landmarks,
            captured_at,
        }
    }

    /// Build an empty frame (all slots undetected)
    #[must_use]
    pub fn empty(captured_at: DateTime<Utc>) -> Self {
        Self::new(Vec::new(), captured_at)
    }

    /// Return a copy with `landmark` placed at `point`
    #[must_use]
    pub fn with(mut self, point: PoseLandmark, landmark: Landmark) -> Self {
        self.landmarks[point.index()] = Some(landmark);
        self
    }

    /// Look up a landmark by anatomical point; `None` when undetected
    #[must_use]
    pub fn get(&self, point: PoseLandmark) -> Option<&Landmark> {
        self.landmarks.get(point.index()).and_then(Option::as_ref)
    }

    /// When the frame was produced (frame metadata from the source)
    #[must_use]
    pub fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }

    /// Return a copy stamped with a different capture time
    #[must_use]
    pub fn with_captured_at(mut self, captured_at: DateTime<Utc>) -> Self {
        self.captured_at = captured_at;
        self
    }
}

/// Closed set of exercises the engine can score.
///
/// Adding a kind forces every exhaustive match (validator dispatch, catalog)
/// to be extended, so an unscored exercise is a compile error rather than a
/// runtime fallthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseKind {
    /// Bodyweight squat
    Squat,
    /// Overhead shoulder press
    ShoulderPress,
    /// Forearm plank hold
    Plank,
    /// Bicep curl
    BicepCurl,
    /// Glute bridge
    Bridge,
    /// Standing wall push-up
    WallPushup,
    /// Single-leg knee bend (right side)
    KneeBend,
    /// Standing knee raise (left side)
    KneeRaise,
    /// Raise both hands overhead
    RaiseHands,
    /// Touch hand to shoulder
    TouchShoulder,
}

impl ExerciseKind {
    /// All kinds the engine supports, in catalog order
    pub const ALL: [Self; 10] = [
        Self::Squat,
        Self::ShoulderPress,
        Self::Plank,
        Self::BicepCurl,
        Self::Bridge,
        Self::WallPushup,
        Self::KneeBend,
        Self::KneeRaise,
        Self::RaiseHands,
        Self::TouchShoulder,
    ];

    /// Wire identifier for this kind
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Squat => "squat",
            Self::ShoulderPress => "shoulder_press",
            Self::Plank => "plank",
            Self::BicepCurl => "bicep_curl",
            Self::Bridge => "bridge",
            Self::WallPushup => "wall_pushup",
            Self::KneeBend => "knee_bend",
            Self::KneeRaise => "knee_raise",
            Self::RaiseHands => "raise_hands",
            Self::TouchShoulder => "touch_shoulder",
        }
    }
}

impl fmt::Display for ExerciseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExerciseKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "squat" => Ok(Self::Squat),
            "shoulder_press" => Ok(Self::ShoulderPress),
            "plank" => Ok(Self::Plank),
            "bicep_curl" => Ok(Self::BicepCurl),
            "bridge" => Ok(Self::Bridge),
            "wall_pushup" => Ok(Self::WallPushup),
            "knee_bend" | "knee_bending" => Ok(Self::KneeBend),
            "knee_raise" => Ok(Self::KneeRaise),
            "raise_hands" => Ok(Self::RaiseHands),
            "touch_shoulder" => Ok(Self::TouchShoulder),
            other => Err(EngineError::UnsupportedKind {
                kind: other.to_owned(),
            }),
        }
    }
}

/// Outcome of evaluating one frame against one exercise's form rule.
///
/// Carries no history; a verdict judges the current posture only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationVerdict {
    /// Whether the current posture satisfies the exercise's rule
    pub is_valid: bool,
    /// Human-readable feedback for the patient
    pub message: String,
}

impl ValidationVerdict {
    /// A passing verdict
    #[must_use]
    pub fn pass(message: &str) -> Self {
        Self {
            is_valid: true,
            message: message.to_owned(),
        }
    }

    /// A failing verdict
    #[must_use]
    pub fn fail(message: &str) -> Self {
        Self {
            is_valid: false,
            message: message.to_owned(),
        }
    }
}

/// Fixed payload reported to the patient-exercise API on completion.
///
/// The clinic records a standard prescription outcome; the live count is
/// shown to the patient but the remote record uses the prescribed values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionReport {
    /// Calendar date the exercise was completed
    pub completed_date: NaiveDate,
    /// Sets performed
    pub sets_completed: u32,
    /// Repetitions performed per set
    pub repetitions_completed: u32,
    /// Total active duration in seconds
    pub duration_completed_seconds: u32,
    /// Subjective pain rating, 1-10
    pub pain_level: u32,
    /// Subjective difficulty rating, 1-5
    pub difficulty_rating: u32,
}

impl CompletionReport {
    /// The standard prescription outcome recorded for a finished session
    #[must_use]
    pub fn standard(completed_date: NaiveDate) -> Self {
        Self {
            completed_date,
            sets_completed: 3,
            repetitions_completed: 10,
            duration_completed_seconds: 300,
            pain_level: 3,
            difficulty_rating: 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips_through_wire_string() {
        for kind in ExerciseKind::ALL {
            assert_eq!(kind.as_str().parse::<ExerciseKind>().ok(), Some(kind));
        }
    }

    #[test]
    fn kind_accepts_hyphenated_spelling() {
        assert_eq!(
            "knee-raise".parse::<ExerciseKind>().ok(),
            Some(ExerciseKind::KneeRaise)
        );
    }

    #[test]
    fn unknown_kind_is_a_config_error() {
        let err = "lunge".parse::<ExerciseKind>();
        assert!(matches!(
            err,
            Err(EngineError::UnsupportedKind { kind }) if kind == "lunge"
        ));
    }

    #[test]
    fn completion_report_matches_the_wire_shape() {
        let report = CompletionReport::standard(
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap_or_default(),
        );
        let value = serde_json::to_value(&report).unwrap_or_default();
        assert_eq!(
            value,
            serde_json::json!({
                "completed_date": "2025-06-01",
                "sets_completed": 3,
                "repetitions_completed": 10,
                "duration_completed_seconds": 300,
                "pain_level": 3,
                "difficulty_rating": 4,
            })
        );
    }

    #[test]
    fn frame_lookup_is_fallible() {
        let frame = LandmarkFrame::empty(Utc::now());
        assert!(frame.get(PoseLandmark::LeftKnee).is_none());

        let frame = frame.with(PoseLandmark::LeftKnee, Landmark::at(0.5, 0.5));
        assert!(frame.get(PoseLandmark::LeftKnee).is_some());
    }
}
