// ABOUTME: Environment-driven engine configuration with typed defaults
// ABOUTME: Unparsable values fall back to defaults with a warning, never a panic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Rehab Motion Engine

use std::env;
use std::time::Duration;

use chrono::Duration as ChronoDuration;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::counter::DEFAULT_DEBOUNCE_MS;
use crate::session::DEFAULT_COMPLETION_DELAY_MS;
use crate::source::DEFAULT_FRAME_INTERVAL_MS;

/// Default base URL for the practice-management API
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

/// Runtime configuration for the engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Minimum milliseconds between two accepted repetition counts
    pub debounce_interval_ms: i64,
    /// Milliseconds between frames for the scripted source
    pub frame_interval_ms: u64,
    /// Milliseconds to linger after completion before resolving the session
    pub completion_delay_ms: u64,
    /// Base URL of the CRUD collaborator's REST API
    pub api_base_url: String,
    /// Request timeout for collaborator calls, seconds
    pub http_timeout_secs: u64,
    /// Connection timeout for collaborator calls, seconds
    pub http_connect_timeout_secs: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            debounce_interval_ms: DEFAULT_DEBOUNCE_MS,
            frame_interval_ms: DEFAULT_FRAME_INTERVAL_MS,
            completion_delay_ms: DEFAULT_COMPLETION_DELAY_MS,
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            http_timeout_secs: 30,
            http_connect_timeout_secs: 10,
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset or unparsable.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            debounce_interval_ms: parse_env(
                "REHAB_DEBOUNCE_INTERVAL_MS",
                defaults.debounce_interval_ms,
            ),
            frame_interval_ms: parse_env("REHAB_FRAME_INTERVAL_MS", defaults.frame_interval_ms),
            completion_delay_ms: parse_env(
                "REHAB_COMPLETION_DELAY_MS",
                defaults.completion_delay_ms,
            ),
            api_base_url: env::var("REHAB_API_BASE_URL").unwrap_or(defaults.api_base_url),
            http_timeout_secs: parse_env("REHAB_HTTP_TIMEOUT_SECS", defaults.http_timeout_secs),
            http_connect_timeout_secs: parse_env(
                "REHAB_HTTP_CONNECT_TIMEOUT_SECS",
                defaults.http_connect_timeout_secs,
            ),
        }
    }

    /// Debounce interval as a chrono duration for the counter
    #[must_use]
    pub fn debounce(&self) -> ChronoDuration {
        ChronoDuration::milliseconds(self.debounce_interval_ms)
    }

    /// Frame cadence for scripted sources
    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    /// Post-completion linger
    #[must_use]
    pub fn completion_delay(&self) -> Duration {
        Duration::from_millis(self.completion_delay_ms)
    }
}

/// Parse an environment variable, warning and falling back on bad input
fn parse_env<T: std::str::FromStr + Copy + std::fmt::Display>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, %default, "unparsable value, using default");
            default
        }),
        Err(_) => default,
    }
}
