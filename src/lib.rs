// ABOUTME: Main library entry point for the rehab motion engine
// ABOUTME: Real-time pose-based repetition counting and form validation for rehab exercises
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Rehab Motion Engine

#![deny(unsafe_code)]

//! # Rehab Motion Engine
//!
//! A real-time repetition counting and form-validation engine for
//! rehabilitation exercises. The engine consumes a stream of body-landmark
//! frames produced by an external pose-estimation model, judges posture
//! frame-by-frame against per-exercise geometric rules, debounces sustained
//! holds into discrete repetition counts, and fires an exactly-once
//! completion call against the clinic's assignment API when the target
//! count is reached.
//!
//! ## Architecture
//!
//! The engine is a pipeline of small, mostly pure components:
//!
//! - **Source**: delivers [`models::LandmarkFrame`] values in arrival order
//! - **Geometry**: angle, distance, and visibility primitives
//! - **Validators**: one pass/fail predicate per [`models::ExerciseKind`]
//! - **Counter**: a pure reducer with debounce and an idempotent terminal state
//! - **Dispatcher**: fire-and-forget completion side effect
//! - **Session**: wires the above together for one exercise assignment
//!
//! ## Example
//!
//! ```rust,no_run
//! use rehab_motion_engine::counter::CounterState;
//! use chrono::{Duration, Utc};
//!
//! let mut counter = CounterState::new(10);
//! let event = counter.observe(true, Utc::now(), Duration::milliseconds(1000));
//! assert_eq!(counter.count(), 1);
//! # let _ = event;
//! ```

/// External patient-exercise API client (assignment lookup, mark-complete)
pub mod api;

/// Static exercise catalog: display metadata and default prescriptions
pub mod catalog;

/// Environment-driven engine configuration
pub mod config;

/// Repetition counter state machine (pure reducer)
pub mod counter;

/// Completion dispatch: exactly-once, fire-and-forget side effect
pub mod dispatcher;

/// Typed error taxonomy for the engine
pub mod errors;

/// Geometric feature extraction over landmarks
pub mod geometry;

/// Structured logging initialization for binaries
pub mod logging;

/// Core value types: landmarks, frames, exercise kinds, verdicts
pub mod models;

/// One live exercise session: source → validator → counter → dispatcher
pub mod session;

/// Landmark stream sources (consumed interface plus a scripted replay)
pub mod source;

/// Per-exercise form validators
pub mod validators;
