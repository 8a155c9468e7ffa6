// ABOUTME: Per-exercise form validators: pure pass/fail predicates over one frame
// ABOUTME: Dispatch is an exhaustive match on ExerciseKind, no open-string fallthrough
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Rehab Motion Engine

use crate::geometry::{angle, distance, is_visible, STRICT_VISIBILITY_THRESHOLD};
use crate::models::{ExerciseKind, LandmarkFrame, PoseLandmark, ValidationVerdict};

/// Verdict message when a required landmark is absent from the frame
pub const MSG_LANDMARKS_MISSING: &str = "required landmarks not detected";

/// Verdict message when a required landmark is below the visibility gate
pub const MSG_LOW_VISIBILITY: &str = "required landmarks not visible enough";

const MSG_GOOD_FORM: &str = "good form, keep going";

// Angle windows, inclusive, in degrees
const FLEXION_MIN: f64 = 70.0;
const FLEXION_MAX: f64 = 110.0;
const EXTENSION_MIN: f64 = 160.0;
const BACK_MAX: f64 = 20.0;
const BODY_LINE_MAX: f64 = 10.0;
const KNEE_BEND_MAX: f64 = 90.0;

// Normalized-units proximity for touch-shoulder
const TOUCH_DISTANCE_MAX: f64 = 0.07;

/// Evaluate one frame against one exercise's form rule.
///
/// Pure and side-effect free; re-evaluated on every incoming frame. Missing
/// or insufficiently visible landmarks yield a distinct negative verdict
/// rather than a geometric fail, and never a panic.
#[must_use]
pub fn validate(frame: &LandmarkFrame, kind: ExerciseKind) -> ValidationVerdict {
    match kind {
        ExerciseKind::Squat => check_squat(frame),
        ExerciseKind::ShoulderPress => check_shoulder_press(frame),
        ExerciseKind::Plank => check_plank(frame),
        ExerciseKind::BicepCurl => check_elbow_flexion(frame, "bend your elbows toward 90 degrees"),
        ExerciseKind::Bridge => check_bridge(frame),
        ExerciseKind::WallPushup => {
            check_elbow_flexion(frame, "bend your elbows and lean toward the wall")
        }
        ExerciseKind::KneeBend => check_knee_bend(frame),
        ExerciseKind::KneeRaise => check_knee_raise(frame),
        ExerciseKind::RaiseHands => check_raise_hands(frame),
        ExerciseKind::TouchShoulder => check_touch_shoulder(frame),
    }
}

fn in_window(value: f64, min: f64, max: f64) -> bool {
    (min..=max).contains(&value)
}

/// Knees bent into the squat window on both sides, back held straight
fn check_squat(frame: &LandmarkFrame) -> ValidationVerdict {
    let (
        Some(left_hip),
        Some(left_knee),
        Some(left_ankle),
        Some(right_hip),
        Some(right_knee),
        Some(right_ankle),
        Some(left_shoulder),
    ) = (
        frame.get(PoseLandmark::LeftHip),
        frame.get(PoseLandmark::LeftKnee),
        frame.get(PoseLandmark::LeftAnkle),
        frame.get(PoseLandmark::RightHip),
        frame.get(PoseLandmark::RightKnee),
        frame.get(PoseLandmark::RightAnkle),
        frame.get(PoseLandmark::LeftShoulder),
    )
    else {
        return ValidationVerdict::fail(MSG_LANDMARKS_MISSING);
    };

    let left_knee_angle = angle(left_hip, left_knee, left_ankle);
    let right_knee_angle = angle(right_hip, right_knee, right_ankle);
    if !in_window(left_knee_angle, FLEXION_MIN, FLEXION_MAX)
        || !in_window(right_knee_angle, FLEXION_MIN, FLEXION_MAX)
    {
        return ValidationVerdict::fail("bend your knees further");
    }

    // Torso deviation from the leg line, left side
    let back_angle = angle(left_shoulder, left_hip, left_ankle);
    if back_angle > BACK_MAX {
        return ValidationVerdict::fail("keep your back straight");
    }

    ValidationVerdict::pass(MSG_GOOD_FORM)
}

/// Both arms extended overhead
fn check_shoulder_press(frame: &LandmarkFrame) -> ValidationVerdict {
    let (
        Some(left_shoulder),
        Some(left_elbow),
        Some(left_wrist),
        Some(right_shoulder),
        Some(right_elbow),
        Some(right_wrist),
    ) = (
        frame.get(PoseLandmark::LeftShoulder),
        frame.get(PoseLandmark::LeftElbow),
        frame.get(PoseLandmark::LeftWrist),
        frame.get(PoseLandmark::RightShoulder),
        frame.get(PoseLandmark::RightElbow),
        frame.get(PoseLandmark::RightWrist),
    )
    else {
        return ValidationVerdict::fail(MSG_LANDMARKS_MISSING);
    };

    let left_arm = angle(left_shoulder, left_elbow, left_wrist);
    let right_arm = angle(right_shoulder, right_elbow, right_wrist);
    if left_arm < EXTENSION_MIN || right_arm < EXTENSION_MIN {
        return ValidationVerdict::fail("extend your arms fully overhead");
    }

    ValidationVerdict::pass(MSG_GOOD_FORM)
}

/// Shoulders, hips, and ankles held in a straight line.
///
/// Both sides must be detected before scoring, even though the body line
/// is measured on the left; a half-occluded plank is insufficient data.
fn check_plank(frame: &LandmarkFrame) -> ValidationVerdict {
    let (Some(left_shoulder), Some(left_hip), Some(left_ankle), Some(_), Some(_), Some(_)) = (
        frame.get(PoseLandmark::LeftShoulder),
        frame.get(PoseLandmark::LeftHip),
        frame.get(PoseLandmark::LeftAnkle),
        frame.get(PoseLandmark::RightShoulder),
        frame.get(PoseLandmark::RightHip),
        frame.get(PoseLandmark::RightAnkle),
    ) else {
        return ValidationVerdict::fail(MSG_LANDMARKS_MISSING);
    };

    // Same convention as the squat back check: the shoulder and ankle rays
    // from the hip must be near-parallel
    let body_line = angle(left_shoulder, left_hip, left_ankle);
    if body_line > BODY_LINE_MAX {
        return ValidationVerdict::fail("keep a straight line from shoulders to heels");
    }

    ValidationVerdict::pass(MSG_GOOD_FORM)
}

/// Both elbows flexed into the curl window (bicep curl, wall push-up)
fn check_elbow_flexion(frame: &LandmarkFrame, fail_message: &str) -> ValidationVerdict {
    let (
        Some(left_shoulder),
        Some(left_elbow),
        Some(left_wrist),
        Some(right_shoulder),
        Some(right_elbow),
        Some(right_wrist),
    ) = (
        frame.get(PoseLandmark::LeftShoulder),
        frame.get(PoseLandmark::LeftElbow),
        frame.get(PoseLandmark::LeftWrist),
        frame.get(PoseLandmark::RightShoulder),
        frame.get(PoseLandmark::RightElbow),
        frame.get(PoseLandmark::RightWrist),
    )
    else {
        return ValidationVerdict::fail(MSG_LANDMARKS_MISSING);
    };

    let left_arm = angle(left_shoulder, left_elbow, left_wrist);
    let right_arm = angle(right_shoulder, right_elbow, right_wrist);
    if !in_window(left_arm, FLEXION_MIN, FLEXION_MAX)
        || !in_window(right_arm, FLEXION_MIN, FLEXION_MAX)
    {
        return ValidationVerdict::fail(fail_message);
    }

    ValidationVerdict::pass(MSG_GOOD_FORM)
}

/// Hips lifted so the shoulder-hip-knee angle falls in the bridge window.
///
/// Both sides must be detected before scoring; the angle itself reads the
/// left side.
fn check_bridge(frame: &LandmarkFrame) -> ValidationVerdict {
    let (Some(left_shoulder), Some(left_hip), Some(left_knee), Some(_), Some(_), Some(_)) = (
        frame.get(PoseLandmark::LeftShoulder),
        frame.get(PoseLandmark::LeftHip),
        frame.get(PoseLandmark::LeftKnee),
        frame.get(PoseLandmark::RightShoulder),
        frame.get(PoseLandmark::RightHip),
        frame.get(PoseLandmark::RightKnee),
    ) else {
        return ValidationVerdict::fail(MSG_LANDMARKS_MISSING);
    };

    let hip_angle = angle(left_shoulder, left_hip, left_knee);
    if !in_window(hip_angle, FLEXION_MIN, FLEXION_MAX) {
        return ValidationVerdict::fail("lift your hips higher");
    }

    ValidationVerdict::pass(MSG_GOOD_FORM)
}

/// Right knee bent past 90 degrees
fn check_knee_bend(frame: &LandmarkFrame) -> ValidationVerdict {
    let (Some(hip), Some(knee), Some(ankle)) = (
        frame.get(PoseLandmark::RightHip),
        frame.get(PoseLandmark::RightKnee),
        frame.get(PoseLandmark::RightAnkle),
    ) else {
        return ValidationVerdict::fail(MSG_LANDMARKS_MISSING);
    };

    let knee_angle = angle(hip, knee, ankle);
    if knee_angle >= KNEE_BEND_MAX {
        return ValidationVerdict::fail("bend the knee further");
    }

    ValidationVerdict::pass(MSG_GOOD_FORM)
}

/// Left knee raised above hip height, visibility gated
fn check_knee_raise(frame: &LandmarkFrame) -> ValidationVerdict {
    let (Some(knee), Some(hip)) = (
        frame.get(PoseLandmark::LeftKnee),
        frame.get(PoseLandmark::LeftHip),
    ) else {
        return ValidationVerdict::fail(MSG_LANDMARKS_MISSING);
    };

    if !is_visible(knee, STRICT_VISIBILITY_THRESHOLD)
        || !is_visible(hip, STRICT_VISIBILITY_THRESHOLD)
    {
        return ValidationVerdict::fail(MSG_LOW_VISIBILITY);
    }

    // Image y grows downward, so above means smaller y
    if knee.y >= hip.y {
        return ValidationVerdict::fail("raise the knee above hip height");
    }

    ValidationVerdict::pass(MSG_GOOD_FORM)
}

/// Both wrists raised above the head, visibility gated
fn check_raise_hands(frame: &LandmarkFrame) -> ValidationVerdict {
    let (Some(left_wrist), Some(right_wrist), Some(nose)) = (
        frame.get(PoseLandmark::LeftWrist),
        frame.get(PoseLandmark::RightWrist),
        frame.get(PoseLandmark::Nose),
    ) else {
        return ValidationVerdict::fail(MSG_LANDMARKS_MISSING);
    };

    if !is_visible(left_wrist, STRICT_VISIBILITY_THRESHOLD)
        || !is_visible(right_wrist, STRICT_VISIBILITY_THRESHOLD)
    {
        return ValidationVerdict::fail(MSG_LOW_VISIBILITY);
    }

    if left_wrist.y >= nose.y || right_wrist.y >= nose.y {
        return ValidationVerdict::fail("raise both hands above your head");
    }

    ValidationVerdict::pass(MSG_GOOD_FORM)
}

/// Left wrist brought within touching distance of the left shoulder
fn check_touch_shoulder(frame: &LandmarkFrame) -> ValidationVerdict {
    let (Some(wrist), Some(shoulder)) = (
        frame.get(PoseLandmark::LeftWrist),
        frame.get(PoseLandmark::LeftShoulder),
    ) else {
        return ValidationVerdict::fail(MSG_LANDMARKS_MISSING);
    };

    if !is_visible(wrist, STRICT_VISIBILITY_THRESHOLD)
        || !is_visible(shoulder, STRICT_VISIBILITY_THRESHOLD)
    {
        return ValidationVerdict::fail(MSG_LOW_VISIBILITY);
    }

    if distance(wrist, shoulder) >= TOUCH_DISTANCE_MAX {
        return ValidationVerdict::fail("bring your hand to your shoulder");
    }

    ValidationVerdict::pass(MSG_GOOD_FORM)
}
