// ABOUTME: Typed error taxonomy for the rehab motion engine
// ABOUTME: Defines EngineError with structured variants and the EngineResult alias
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Rehab Motion Engine

/// Errors escalated out of the engine.
///
/// Per-frame problems (missing landmarks, low visibility) are never errors;
/// they are converted into negative verdicts and counting continues. Only
/// device acquisition failures, configuration problems, and collaborator
/// I/O reach this type.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Capture device unavailable or permission denied; fatal to the session
    #[error("capture device unavailable: {reason}")]
    DeviceUnavailable {
        /// Why the device could not be acquired
        reason: String,
    },

    /// Exercise kind has no registered validator; a configuration problem,
    /// surfaced to the operator rather than silently mis-scored
    #[error("unsupported exercise kind: '{kind}'")]
    UnsupportedKind {
        /// The kind string that failed to resolve
        kind: String,
    },

    /// HTTP transport failure talking to the patient-exercise API
    #[error("http request failed during {context}")]
    Http {
        /// Operation that was in flight
        context: &'static str,
        /// Underlying transport error
        #[source]
        source: reqwest::Error,
    },

    /// Patient-exercise API answered with a non-success status
    #[error("unexpected status {status} during {context}")]
    UnexpectedStatus {
        /// Operation that was in flight
        context: &'static str,
        /// HTTP status code returned
        status: u16,
    },
}

/// Result alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
