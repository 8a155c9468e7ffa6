// ABOUTME: Repetition counter state machine: debounced counting over verdict streams
// ABOUTME: Pure reducer with injected timestamps and an idempotent terminal state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Rehab Motion Engine

use chrono::{DateTime, Duration, Utc};

/// Default minimum time between two accepted repetition counts
pub const DEFAULT_DEBOUNCE_MS: i64 = 1000;

/// Discrete event produced by one observed frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepEvent {
    /// A repetition was accepted
    Counted {
        /// Running count after the increment
        count: u32,
    },
    /// The accepted repetition reached the session target; emitted once
    TargetReached {
        /// Final count
        count: u32,
    },
}

/// Counting state for one exercise session.
///
/// Exclusively owned by one active session and mutated only through
/// [`CounterState::observe`]. `count` is monotonically non-decreasing;
/// `is_complete` flips false→true exactly once and every mutation is gated
/// on the flag afterwards, so frames that race the host's asynchronous
/// stream stop are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterState {
    count: u32,
    last_count_at: Option<DateTime<Utc>>,
    target_count: u32,
    is_complete: bool,
}

impl CounterState {
    /// Fresh state aiming for `target_count` repetitions (minimum 1)
    #[must_use]
    pub fn new(target_count: u32) -> Self {
        Self {
            count: 0,
            last_count_at: None,
            target_count: target_count.max(1),
            is_complete: false,
        }
    }

    /// Repetitions accepted so far
    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Configured repetition target
    #[must_use]
    pub fn target_count(&self) -> u32 {
        self.target_count
    }

    /// Whether the target has been reached
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    /// Fold one frame's verdict into the state.
    ///
    /// A valid frame counts when no repetition was accepted yet or at least
    /// `debounce` has elapsed since the last accepted one. A held correct
    /// posture produces many consecutive valid frames at stream cadence;
    /// the debounce collapses them into one count per window.
    ///
    /// An invalid frame re-arms the counter by clearing the timestamp, so
    /// the next valid frame is eligible immediately: the debounce only
    /// suppresses consecutive valid frames within one sustained hold, never
    /// the gap between distinct repetitions.
    ///
    /// Once complete, frames are ignored entirely.
    pub fn observe(
        &mut self,
        is_valid: bool,
        now: DateTime<Utc>,
        debounce: Duration,
    ) -> Option<RepEvent> {
        if self.is_complete {
            return None;
        }

        if !is_valid {
            self.last_count_at = None;
            return None;
        }

        let eligible = self
            .last_count_at
            .is_none_or(|last| now - last >= debounce);
        if !eligible {
            return None;
        }

        self.count += 1;
        self.last_count_at = Some(now);

        if self.count >= self.target_count {
            self.is_complete = true;
            return Some(RepEvent::TargetReached { count: self.count });
        }

        Some(RepEvent::Counted { count: self.count })
    }
}
