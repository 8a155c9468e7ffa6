// ABOUTME: Landmark stream sources: the consumed interface plus a scripted replay source
// ABOUTME: Frames are delivered in order; stop() is synchronous and idempotent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Rehab Motion Engine

use std::collections::VecDeque;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::models::LandmarkFrame;

/// Default frame cadence of the pose model (one inference per 100 ms)
pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 100;

/// A producer of landmark frames.
///
/// Wraps a capture device plus pose-estimation model in real deployments;
/// the engine only consumes this interface. Implementations must deliver
/// frames in production order, and after [`LandmarkSource::stop`] they must
/// yield no further frames and must have released the capture device — a
/// leaked open camera is a correctness defect, not an efficiency one.
#[async_trait]
pub trait LandmarkSource: Send {
    /// Next frame in arrival order; `None` when the stream is exhausted or
    /// stopped
    async fn next_frame(&mut self) -> Option<LandmarkFrame>;

    /// Synchronously halt the stream and release the underlying device.
    /// Idempotent.
    fn stop(&mut self);
}

/// Replays a prepared frame sequence at a fixed cadence.
///
/// Stands in for the camera + model pair in the demo binary and in
/// integration tests. Frames are yielded exactly as given, so tests control
/// timestamps by pre-stamping them.
pub struct ScriptedSource {
    frames: VecDeque<LandmarkFrame>,
    frame_interval: Duration,
    started: bool,
    stopped: bool,
}

impl ScriptedSource {
    /// Source that replays `frames` with `frame_interval` between yields
    #[must_use]
    pub fn new(frames: Vec<LandmarkFrame>, frame_interval: Duration) -> Self {
        Self {
            frames: frames.into(),
            frame_interval,
            started: false,
            stopped: false,
        }
    }

    /// Whether the source has been stopped
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}

#[async_trait]
impl LandmarkSource for ScriptedSource {
    async fn next_frame(&mut self) -> Option<LandmarkFrame> {
        if self.stopped {
            return None;
        }
        if self.started {
            tokio::time::sleep(self.frame_interval).await;
        }
        self.started = true;
        // A stop may have raced the sleep
        if self.stopped {
            return None;
        }
        self.frames.pop_front()
    }

    fn stop(&mut self) {
        if !self.stopped {
            debug!("scripted source stopped");
        }
        self.stopped = true;
        self.frames.clear();
    }
}
