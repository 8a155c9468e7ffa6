// ABOUTME: One live exercise session: wires source, validator, counter, and dispatcher
// ABOUTME: Owns the active flag, deterministic teardown, and the completion delay
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Rehab Motion Engine

use std::sync::Arc;
use std::time::Duration;

use chrono::Duration as ChronoDuration;
use tracing::{debug, info};

use crate::counter::{CounterState, RepEvent, DEFAULT_DEBOUNCE_MS};
use crate::dispatcher::{dispatch_completion, CompletionSink};
use crate::models::{CompletionReport, ExerciseKind, LandmarkFrame};
use crate::validators;

/// Delay between reaching the target and resolving the session, so the host
/// can render a success message before navigating away
pub const DEFAULT_COMPLETION_DELAY_MS: u64 = 1500;

/// Per-frame feedback for the UI layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameFeedback {
    /// Repetitions accepted so far
    pub count: u32,
    /// Session repetition target
    pub target_count: u32,
    /// Whether the session has completed
    pub is_complete: bool,
    /// Exercise-specific status string for the patient
    pub message: String,
}

/// Final outcome of a session run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    /// Exercise that was scored
    pub kind: ExerciseKind,
    /// Repetitions accepted
    pub repetitions: u32,
    /// Whether the target was reached (false when the stream ended early)
    pub completed: bool,
}

/// One exercise session over one assignment.
///
/// Exclusively owns its [`CounterState`] and is the sole consumer of one
/// landmark source. The session is single-threaded and event-driven: each
/// frame is folded in synchronously, and the only asynchronous operation —
/// the completion dispatch — is never awaited by the frame path.
pub struct ExerciseSession {
    kind: ExerciseKind,
    assignment_id: String,
    counter: CounterState,
    debounce: ChronoDuration,
    sink: Arc<dyn CompletionSink>,
    active: bool,
}

impl ExerciseSession {
    /// Session for `kind` aiming at `target_count` repetitions, with the
    /// default 1 s debounce
    #[must_use]
    pub fn new(
        kind: ExerciseKind,
        assignment_id: &str,
        target_count: u32,
        sink: Arc<dyn CompletionSink>,
    ) -> Self {
        Self::with_debounce(
            kind,
            assignment_id,
            target_count,
            ChronoDuration::milliseconds(DEFAULT_DEBOUNCE_MS),
            sink,
        )
    }

    /// Session with an explicit debounce interval
    #[must_use]
    pub fn with_debounce(
        kind: ExerciseKind,
        assignment_id: &str,
        target_count: u32,
        debounce: ChronoDuration,
        sink: Arc<dyn CompletionSink>,
    ) -> Self {
        Self {
            kind,
            assignment_id: assignment_id.to_owned(),
            counter: CounterState::new(target_count),
            debounce,
            sink,
            active: true,
        }
    }

    /// Repetitions accepted so far
    #[must_use]
    pub fn count(&self) -> u32 {
        self.counter.count()
    }

    /// Whether the target has been reached
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.counter.is_complete()
    }

    /// Whether the session still accepts frames
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Halt the session: no further state-machine mutation happens, even
    /// for a frame callback already in flight (check-before-mutate)
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Fold one frame into the session.
    ///
    /// Must be called in frame arrival order; the debounce timestamps are
    /// only meaningful under in-order delivery. Once the session is
    /// complete or deactivated, frames are ignored entirely — the stream is
    /// stopped by the host asynchronously and may still deliver a few.
    pub fn process_frame(&mut self, frame: &LandmarkFrame) -> FrameFeedback {
        if !self.active || self.counter.is_complete() {
            let message = if self.counter.is_complete() {
                "exercise complete, well done!"
            } else {
                "session stopped"
            };
            return self.feedback(message);
        }

        let verdict = validators::validate(frame, self.kind);
        let event = self
            .counter
            .observe(verdict.is_valid, frame.captured_at(), self.debounce);

        match event {
            Some(RepEvent::Counted { count }) => {
                debug!(kind = %self.kind, count, "repetition counted");
            }
            Some(RepEvent::TargetReached { count }) => {
                info!(kind = %self.kind, count, "target reached, dispatching completion");
                self.active = false;
                dispatch_completion(
                    Arc::clone(&self.sink),
                    self.assignment_id.clone(),
                    CompletionReport::standard(frame.captured_at().date_naive()),
                );
                return self.feedback("exercise complete, well done!");
            }
            None => {}
        }

        self.feedback(&verdict.message)
    }

    fn feedback(&self, message: &str) -> FrameFeedback {
        FrameFeedback {
            count: self.counter.count(),
            target_count: self.counter.target_count(),
            is_complete: self.counter.is_complete(),
            message: message.to_owned(),
        }
    }

    /// Drive the session from a source until completion or stream end.
    ///
    /// Stops the source deterministically on the way out, then waits the
    /// completion delay when the target was reached so the host can show a
    /// success message before navigating.
    pub async fn run(
        &mut self,
        source: &mut dyn crate::source::LandmarkSource,
        completion_delay: Duration,
    ) -> SessionSummary {
        while self.active {
            let Some(frame) = source.next_frame().await else {
                break;
            };
            if !self.active {
                break;
            }
            let feedback = self.process_frame(&frame);
            if feedback.is_complete {
                break;
            }
        }

        source.stop();

        if self.counter.is_complete() {
            tokio::time::sleep(completion_delay).await;
        }

        SessionSummary {
            kind: self.kind,
            repetitions: self.counter.count(),
            completed: self.counter.is_complete(),
        }
    }
}
