// ABOUTME: Static exercise catalog: display metadata and default prescriptions per kind
// ABOUTME: Feeds target counts and UI labels before a session starts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Rehab Motion Engine

use serde::Serialize;

use crate::models::ExerciseKind;

/// Relative difficulty of an exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Suitable as a first prescription
    Beginner,
    /// Requires some established mobility
    Intermediate,
    /// Prescribed late in a rehab plan
    Advanced,
}

/// Catalog entry for one exercise kind
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ExerciseInfo {
    /// Which validator this entry selects
    pub kind: ExerciseKind,
    /// Display name
    pub name: &'static str,
    /// Short description shown in the plan
    pub description: &'static str,
    /// Body region grouping
    pub category: &'static str,
    /// Relative difficulty
    pub difficulty: Difficulty,
    /// Suggested duration in minutes
    pub duration_minutes: u32,
    /// Default repetition target for the counting engine
    pub repetitions: u32,
    /// Default number of sets
    pub sets: u32,
    /// How to perform the exercise
    pub instructions: &'static str,
}

impl ExerciseInfo {
    /// Catalog entry for `kind`
    #[must_use]
    pub const fn for_kind(kind: ExerciseKind) -> Self {
        match kind {
            ExerciseKind::Squat => Self {
                kind,
                name: "Squat",
                description: "Strengthens the legs and glutes",
                category: "legs",
                difficulty: Difficulty::Intermediate,
                duration_minutes: 10,
                repetitions: 12,
                sets: 3,
                instructions: "Stand with feet shoulder-width apart, bend the knees and lower the hips, keeping the back straight",
            },
            ExerciseKind::ShoulderPress => Self {
                kind,
                name: "Shoulder press",
                description: "Strengthens the shoulders and arms",
                category: "upper body",
                difficulty: Difficulty::Beginner,
                duration_minutes: 12,
                repetitions: 15,
                sets: 3,
                instructions: "Hold weights at shoulder height and press upward until the arms are fully extended",
            },
            ExerciseKind::Plank => Self {
                kind,
                name: "Plank",
                description: "Strengthens the core and abdomen",
                category: "core",
                difficulty: Difficulty::Advanced,
                duration_minutes: 5,
                repetitions: 3,
                sets: 1,
                instructions: "Support the body on forearms and toes, keeping a straight line from shoulders to heels",
            },
            ExerciseKind::BicepCurl => Self {
                kind,
                name: "Bicep curl",
                description: "Strengthens the upper arm",
                category: "upper body",
                difficulty: Difficulty::Beginner,
                duration_minutes: 10,
                repetitions: 12,
                sets: 3,
                instructions: "Hold weights palms-up and curl the elbows to bring the weights toward the shoulders",
            },
            ExerciseKind::Bridge => Self {
                kind,
                name: "Glute bridge",
                description: "Strengthens the glutes and lower back",
                category: "back",
                difficulty: Difficulty::Beginner,
                duration_minutes: 8,
                repetitions: 15,
                sets: 3,
                instructions: "Lie on your back with knees bent and lift the pelvis upward",
            },
            ExerciseKind::WallPushup => Self {
                kind,
                name: "Wall push-up",
                description: "Strengthens the chest and shoulders",
                category: "upper body",
                difficulty: Difficulty::Beginner,
                duration_minutes: 10,
                repetitions: 12,
                sets: 3,
                instructions: "Stand facing a wall, place hands at shoulder height, bend the elbows and lean in",
            },
            ExerciseKind::KneeBend => Self {
                kind,
                name: "Knee bend",
                description: "Restores knee flexion range of motion",
                category: "legs",
                difficulty: Difficulty::Beginner,
                duration_minutes: 8,
                repetitions: 12,
                sets: 3,
                instructions: "Standing or seated, bend the right knee past 90 degrees and return",
            },
            ExerciseKind::KneeRaise => Self {
                kind,
                name: "Knee raise",
                description: "Improves hip mobility and balance",
                category: "legs",
                difficulty: Difficulty::Beginner,
                duration_minutes: 8,
                repetitions: 10,
                sets: 3,
                instructions: "Standing, raise the left knee above hip height and lower it back down",
            },
            ExerciseKind::RaiseHands => Self {
                kind,
                name: "Raise hands",
                description: "Improves shoulder range of motion",
                category: "upper body",
                difficulty: Difficulty::Beginner,
                duration_minutes: 6,
                repetitions: 10,
                sets: 3,
                instructions: "Raise both hands above head height and lower them back down",
            },
            ExerciseKind::TouchShoulder => Self {
                kind,
                name: "Touch shoulder",
                description: "Improves arm coordination and mobility",
                category: "upper body",
                difficulty: Difficulty::Beginner,
                duration_minutes: 6,
                repetitions: 10,
                sets: 3,
                instructions: "Bring the left hand up to touch the left shoulder, then lower it",
            },
        }
    }

    /// Full catalog in display order
    #[must_use]
    pub fn all() -> Vec<Self> {
        ExerciseKind::ALL.iter().copied().map(Self::for_kind).collect()
    }
}
