// ABOUTME: Geometric feature extraction over pose landmarks
// ABOUTME: Angle-at-vertex, planar distance, and visibility gating primitives
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Rehab Motion Engine

use crate::models::Landmark;

/// Default visibility threshold for general posture checks
pub const VISIBILITY_THRESHOLD: f64 = 0.5;

/// Stricter threshold for exercises gated purely on visibility + position
pub const STRICT_VISIBILITY_THRESHOLD: f64 = 0.6;

/// Angle at vertex `b` formed by rays `b→a` and `b→c`, in degrees.
///
/// Computed from the `atan2` of each ray's direction in the camera plane.
/// Raw `atan2` differences range over `[-360, 360]`; the absolute value is
/// folded back via `360 − angle` when above 180, so the result always lies
/// in `[0, 180]` and is orientation-independent: `angle(a, b, c) ==
/// angle(c, b, a)`.
#[must_use]
pub fn angle(a: &Landmark, b: &Landmark, c: &Landmark) -> f64 {
    let radians = (c.y - b.y).atan2(c.x - b.x) - (a.y - b.y).atan2(a.x - b.x);
    let degrees = radians.to_degrees().abs();
    if degrees > 180.0 {
        360.0 - degrees
    } else {
        degrees
    }
}

/// Planar Euclidean distance between two landmarks.
///
/// Depth (`z`) is ignored; posture checks operate in the 2D camera plane.
#[must_use]
pub fn distance(p: &Landmark, q: &Landmark) -> f64 {
    (p.x - q.x).hypot(p.y - q.y)
}

/// Whether a landmark's position can be trusted.
///
/// Landmarks at or below the threshold must not feed angle or distance
/// computation; callers treat a failed gate as insufficient data, not as a
/// geometric fail.
#[must_use]
pub fn is_visible(landmark: &Landmark, threshold: f64) -> bool {
    landmark.visibility > threshold
}
