// ABOUTME: Tests for per-exercise form validators through the public validate() dispatch
// ABOUTME: Covers pass/fail geometry, visibility gating, and missing-landmark verdicts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Rehab Motion Engine

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::Utc;
use rehab_motion_engine::models::{ExerciseKind, Landmark, LandmarkFrame, PoseLandmark};
use rehab_motion_engine::validators::{validate, MSG_LANDMARKS_MISSING, MSG_LOW_VISIBILITY};

fn frame() -> LandmarkFrame {
    LandmarkFrame::empty(Utc::now())
}

/// Knees at ~90 degrees, torso folded along the leg line
fn squat_down_frame() -> LandmarkFrame {
    frame()
        .with(PoseLandmark::LeftShoulder, Landmark::at(0.62, 0.58))
        .with(PoseLandmark::LeftHip, Landmark::at(0.5, 0.5))
        .with(PoseLandmark::LeftKnee, Landmark::at(0.5, 0.7))
        .with(PoseLandmark::LeftAnkle, Landmark::at(0.7, 0.7))
        .with(PoseLandmark::RightHip, Landmark::at(0.5, 0.5))
        .with(PoseLandmark::RightKnee, Landmark::at(0.5, 0.7))
        .with(PoseLandmark::RightAnkle, Landmark::at(0.7, 0.7))
}

#[test]
fn squat_passes_at_depth() {
    let verdict = validate(&squat_down_frame(), ExerciseKind::Squat);
    assert!(verdict.is_valid, "{}", verdict.message);
}

#[test]
fn squat_fails_standing_straight() {
    let standing = frame()
        .with(PoseLandmark::LeftShoulder, Landmark::at(0.5, 0.1))
        .with(PoseLandmark::LeftHip, Landmark::at(0.5, 0.3))
        .with(PoseLandmark::LeftKnee, Landmark::at(0.5, 0.5))
        .with(PoseLandmark::LeftAnkle, Landmark::at(0.5, 0.7))
        .with(PoseLandmark::RightHip, Landmark::at(0.5, 0.3))
        .with(PoseLandmark::RightKnee, Landmark::at(0.5, 0.5))
        .with(PoseLandmark::RightAnkle, Landmark::at(0.5, 0.7));
    let verdict = validate(&standing, ExerciseKind::Squat);
    assert!(!verdict.is_valid);
    assert!(verdict.message.contains("knees"));
}

#[test]
fn squat_fails_on_bent_back() {
    // Knees in the window, but the shoulder pulled away from the leg line
    let bent_back = squat_down_frame().with(PoseLandmark::LeftShoulder, Landmark::at(0.7, 0.3));
    let verdict = validate(&bent_back, ExerciseKind::Squat);
    assert!(!verdict.is_valid);
    assert!(verdict.message.contains("back"));
}

#[test]
fn squat_fails_on_one_sided_depth() {
    // Right leg straight while the left is at depth
    let half = squat_down_frame()
        .with(PoseLandmark::RightHip, Landmark::at(0.5, 0.3))
        .with(PoseLandmark::RightKnee, Landmark::at(0.5, 0.5))
        .with(PoseLandmark::RightAnkle, Landmark::at(0.5, 0.7));
    assert!(!validate(&half, ExerciseKind::Squat).is_valid);
}

#[test]
fn shoulder_press_passes_with_extended_arms() {
    let extended = frame()
        .with(PoseLandmark::LeftShoulder, Landmark::at(0.4, 0.5))
        .with(PoseLandmark::LeftElbow, Landmark::at(0.4, 0.35))
        .with(PoseLandmark::LeftWrist, Landmark::at(0.4, 0.2))
        .with(PoseLandmark::RightShoulder, Landmark::at(0.6, 0.5))
        .with(PoseLandmark::RightElbow, Landmark::at(0.6, 0.35))
        .with(PoseLandmark::RightWrist, Landmark::at(0.6, 0.2));
    assert!(validate(&extended, ExerciseKind::ShoulderPress).is_valid);
}

#[test]
fn shoulder_press_fails_with_bent_arms() {
    let bent = frame()
        .with(PoseLandmark::LeftShoulder, Landmark::at(0.4, 0.5))
        .with(PoseLandmark::LeftElbow, Landmark::at(0.4, 0.35))
        .with(PoseLandmark::LeftWrist, Landmark::at(0.55, 0.35))
        .with(PoseLandmark::RightShoulder, Landmark::at(0.6, 0.5))
        .with(PoseLandmark::RightElbow, Landmark::at(0.6, 0.35))
        .with(PoseLandmark::RightWrist, Landmark::at(0.75, 0.35));
    assert!(!validate(&bent, ExerciseKind::ShoulderPress).is_valid);
}

/// Tight body line on the left, right side mirrored
fn plank_frame() -> LandmarkFrame {
    frame()
        .with(PoseLandmark::LeftShoulder, Landmark::at(0.3, 0.5))
        .with(PoseLandmark::LeftHip, Landmark::at(0.5, 0.5))
        .with(PoseLandmark::LeftAnkle, Landmark::at(0.32, 0.52))
        .with(PoseLandmark::RightShoulder, Landmark::at(0.3, 0.52))
        .with(PoseLandmark::RightHip, Landmark::at(0.5, 0.52))
        .with(PoseLandmark::RightAnkle, Landmark::at(0.32, 0.54))
}

#[test]
fn plank_passes_with_tight_body_line() {
    assert!(validate(&plank_frame(), ExerciseKind::Plank).is_valid);
}

#[test]
fn plank_fails_with_sagging_hips() {
    let sagging = plank_frame()
        .with(PoseLandmark::LeftShoulder, Landmark::at(0.3, 0.3))
        .with(PoseLandmark::LeftAnkle, Landmark::at(0.7, 0.7));
    assert!(!validate(&sagging, ExerciseKind::Plank).is_valid);
}

#[test]
fn plank_with_right_side_occluded_is_insufficient_data() {
    // Body line reads the left side, but a half-detected plank must not score
    let left_only = frame()
        .with(PoseLandmark::LeftShoulder, Landmark::at(0.3, 0.5))
        .with(PoseLandmark::LeftHip, Landmark::at(0.5, 0.5))
        .with(PoseLandmark::LeftAnkle, Landmark::at(0.32, 0.52));
    let verdict = validate(&left_only, ExerciseKind::Plank);
    assert!(!verdict.is_valid);
    assert_eq!(verdict.message, MSG_LANDMARKS_MISSING);
}

fn curl_frame() -> LandmarkFrame {
    frame()
        .with(PoseLandmark::LeftShoulder, Landmark::at(0.4, 0.5))
        .with(PoseLandmark::LeftElbow, Landmark::at(0.4, 0.65))
        .with(PoseLandmark::LeftWrist, Landmark::at(0.55, 0.65))
        .with(PoseLandmark::RightShoulder, Landmark::at(0.6, 0.5))
        .with(PoseLandmark::RightElbow, Landmark::at(0.6, 0.65))
        .with(PoseLandmark::RightWrist, Landmark::at(0.75, 0.65))
}

#[test]
fn bicep_curl_passes_at_ninety_degrees() {
    assert!(validate(&curl_frame(), ExerciseKind::BicepCurl).is_valid);
}

#[test]
fn wall_pushup_shares_the_elbow_window() {
    assert!(validate(&curl_frame(), ExerciseKind::WallPushup).is_valid);

    let straight = curl_frame()
        .with(PoseLandmark::LeftWrist, Landmark::at(0.4, 0.8))
        .with(PoseLandmark::RightWrist, Landmark::at(0.6, 0.8));
    assert!(!validate(&straight, ExerciseKind::WallPushup).is_valid);
}

/// Hips lifted on the left, right side mirrored
fn bridge_frame() -> LandmarkFrame {
    frame()
        .with(PoseLandmark::LeftShoulder, Landmark::at(0.3, 0.7))
        .with(PoseLandmark::LeftHip, Landmark::at(0.5, 0.5))
        .with(PoseLandmark::LeftKnee, Landmark::at(0.6, 0.62))
        .with(PoseLandmark::RightShoulder, Landmark::at(0.3, 0.72))
        .with(PoseLandmark::RightHip, Landmark::at(0.5, 0.52))
        .with(PoseLandmark::RightKnee, Landmark::at(0.6, 0.64))
}

#[test]
fn bridge_passes_with_lifted_hips() {
    assert!(validate(&bridge_frame(), ExerciseKind::Bridge).is_valid);
}

#[test]
fn bridge_fails_lying_flat() {
    let flat = bridge_frame()
        .with(PoseLandmark::LeftHip, Landmark::at(0.5, 0.7))
        .with(PoseLandmark::LeftKnee, Landmark::at(0.7, 0.7));
    assert!(!validate(&flat, ExerciseKind::Bridge).is_valid);
}

#[test]
fn bridge_with_right_side_occluded_is_insufficient_data() {
    let left_only = frame()
        .with(PoseLandmark::LeftShoulder, Landmark::at(0.3, 0.7))
        .with(PoseLandmark::LeftHip, Landmark::at(0.5, 0.5))
        .with(PoseLandmark::LeftKnee, Landmark::at(0.6, 0.62));
    let verdict = validate(&left_only, ExerciseKind::Bridge);
    assert!(!verdict.is_valid);
    assert_eq!(verdict.message, MSG_LANDMARKS_MISSING);
}

#[test]
fn knee_bend_passes_when_bent_past_ninety() {
    let bent = frame()
        .with(PoseLandmark::RightHip, Landmark::at(0.5, 0.5))
        .with(PoseLandmark::RightKnee, Landmark::at(0.5, 0.7))
        .with(PoseLandmark::RightAnkle, Landmark::at(0.52, 0.52));
    assert!(validate(&bent, ExerciseKind::KneeBend).is_valid);
}

#[test]
fn knee_bend_fails_with_straight_leg() {
    let straight = frame()
        .with(PoseLandmark::RightHip, Landmark::at(0.5, 0.3))
        .with(PoseLandmark::RightKnee, Landmark::at(0.5, 0.5))
        .with(PoseLandmark::RightAnkle, Landmark::at(0.5, 0.9));
    assert!(!validate(&straight, ExerciseKind::KneeBend).is_valid);
}

#[test]
fn knee_raise_passes_with_knee_above_hip() {
    let raised = frame()
        .with(PoseLandmark::LeftKnee, Landmark::at(0.5, 0.4))
        .with(PoseLandmark::LeftHip, Landmark::at(0.5, 0.5));
    assert!(validate(&raised, ExerciseKind::KneeRaise).is_valid);
}

#[test]
fn knee_raise_fails_with_knee_below_hip() {
    let lowered = frame()
        .with(PoseLandmark::LeftKnee, Landmark::at(0.5, 0.6))
        .with(PoseLandmark::LeftHip, Landmark::at(0.5, 0.5));
    assert!(!validate(&lowered, ExerciseKind::KneeRaise).is_valid);
}

#[test]
fn raise_hands_passes_with_both_wrists_above_nose() {
    let up = frame()
        .with(PoseLandmark::LeftWrist, Landmark::at(0.4, 0.2))
        .with(PoseLandmark::RightWrist, Landmark::at(0.6, 0.2))
        .with(PoseLandmark::Nose, Landmark::at(0.5, 0.3));
    assert!(validate(&up, ExerciseKind::RaiseHands).is_valid);
}

#[test]
fn raise_hands_low_confidence_overrides_geometric_pass() {
    // Wrists geometrically above the nose but at visibility 0.3
    let doubtful = frame()
        .with(
            PoseLandmark::LeftWrist,
            Landmark::at(0.4, 0.2).with_visibility(0.3),
        )
        .with(
            PoseLandmark::RightWrist,
            Landmark::at(0.6, 0.2).with_visibility(0.3),
        )
        .with(PoseLandmark::Nose, Landmark::at(0.5, 0.3));
    let verdict = validate(&doubtful, ExerciseKind::RaiseHands);
    assert!(!verdict.is_valid);
    assert_eq!(verdict.message, MSG_LOW_VISIBILITY);
}

#[test]
fn raise_hands_fails_with_one_hand_down() {
    let half = frame()
        .with(PoseLandmark::LeftWrist, Landmark::at(0.4, 0.2))
        .with(PoseLandmark::RightWrist, Landmark::at(0.6, 0.5))
        .with(PoseLandmark::Nose, Landmark::at(0.5, 0.3));
    assert!(!validate(&half, ExerciseKind::RaiseHands).is_valid);
}

#[test]
fn touch_shoulder_passes_within_proximity() {
    let touching = frame()
        .with(PoseLandmark::LeftWrist, Landmark::at(0.505, 0.3))
        .with(PoseLandmark::LeftShoulder, Landmark::at(0.5, 0.3));
    assert!(validate(&touching, ExerciseKind::TouchShoulder).is_valid);
}

#[test]
fn touch_shoulder_fails_out_of_reach() {
    let apart = frame()
        .with(PoseLandmark::LeftWrist, Landmark::at(0.7, 0.6))
        .with(PoseLandmark::LeftShoulder, Landmark::at(0.5, 0.3));
    assert!(!validate(&apart, ExerciseKind::TouchShoulder).is_valid);
}

#[test]
fn touch_shoulder_low_visibility_is_insufficient_data() {
    let dim = frame()
        .with(
            PoseLandmark::LeftWrist,
            Landmark::at(0.505, 0.3).with_visibility(0.4),
        )
        .with(PoseLandmark::LeftShoulder, Landmark::at(0.5, 0.3));
    let verdict = validate(&dim, ExerciseKind::TouchShoulder);
    assert!(!verdict.is_valid);
    assert_eq!(verdict.message, MSG_LOW_VISIBILITY);
}

#[test]
fn empty_frame_never_panics_for_any_kind() {
    let empty = frame();
    for kind in ExerciseKind::ALL {
        let verdict = validate(&empty, kind);
        assert!(!verdict.is_valid, "{kind} passed on an empty frame");
        assert_eq!(verdict.message, MSG_LANDMARKS_MISSING);
    }
}

#[test]
fn partially_missing_landmarks_yield_missing_verdict() {
    // Squat frame with the right ankle undetected
    let partial = frame()
        .with(PoseLandmark::LeftShoulder, Landmark::at(0.62, 0.58))
        .with(PoseLandmark::LeftHip, Landmark::at(0.5, 0.5))
        .with(PoseLandmark::LeftKnee, Landmark::at(0.5, 0.7))
        .with(PoseLandmark::LeftAnkle, Landmark::at(0.7, 0.7))
        .with(PoseLandmark::RightHip, Landmark::at(0.5, 0.5))
        .with(PoseLandmark::RightKnee, Landmark::at(0.5, 0.7));
    let verdict = validate(&partial, ExerciseKind::Squat);
    assert!(!verdict.is_valid);
    assert_eq!(verdict.message, MSG_LANDMARKS_MISSING);
}
