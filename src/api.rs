// ABOUTME: HTTP client for the practice-management patient-exercise API
// ABOUTME: Shared reqwest client with configured timeouts, assignment lookup and mark-complete
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Rehab Motion Engine

use std::sync::OnceLock;
use std::time::Duration;

use reqwest::{Client, ClientBuilder};
use serde::{Deserialize, Serialize};

use crate::errors::{EngineError, EngineResult};
use crate::models::CompletionReport;

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default connection timeout in seconds
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Configured timeout values for the shared client
static CLIENT_TIMEOUTS: OnceLock<(u64, u64)> = OnceLock::new();

/// Global shared HTTP client for collaborator calls
static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

/// Initialize the shared HTTP client timeout configuration.
///
/// Call once at startup before the first API client is created; otherwise
/// defaults apply (30s request, 10s connect).
pub fn initialize_shared_client(timeout_secs: u64, connect_timeout_secs: u64) {
    let _ = CLIENT_TIMEOUTS.set((timeout_secs, connect_timeout_secs));
}

fn shared_client() -> &'static Client {
    SHARED_CLIENT.get_or_init(|| {
        let (timeout, connect_timeout) = CLIENT_TIMEOUTS
            .get()
            .copied()
            .unwrap_or((DEFAULT_TIMEOUT_SECS, DEFAULT_CONNECT_TIMEOUT_SECS));

        ClientBuilder::new()
            .timeout(Duration::from_secs(timeout))
            .connect_timeout(Duration::from_secs(connect_timeout))
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}

/// Assignment record returned by the lookup, consumed before the engine
/// starts to select the right validator and label the UI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientExercise {
    /// Assignment identifier
    pub id: String,
    /// Exercise display name
    pub exercise_name: String,
    /// Exercise description shown to the patient
    #[serde(default)]
    pub description: Option<String>,
    /// Wire identifier of the exercise kind, parsed by the caller
    pub exercise_type: String,
    /// Prescribed repetitions, when set by the therapist
    #[serde(default)]
    pub repetitions: Option<u32>,
    /// Prescribed sets, when set by the therapist
    #[serde(default)]
    pub sets: Option<u32>,
}

/// Client for the CRUD collaborator's patient-exercise routes
#[derive(Debug, Clone)]
pub struct ExerciseApiClient {
    base_url: String,
}

impl ExerciseApiClient {
    /// Client rooted at the collaborator's base URL (e.g. `http://host/api`)
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Fetch one assignment by id.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Http`] on transport failure and
    /// [`EngineError::UnexpectedStatus`] on a non-success response.
    pub async fn get_patient_exercise(&self, id: &str) -> EngineResult<PatientExercise> {
        let url = format!("{}/patient-exercises/{id}", self.base_url);
        let response = shared_client()
            .get(&url)
            .send()
            .await
            .map_err(|source| EngineError::Http {
                context: "assignment lookup",
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(EngineError::UnexpectedStatus {
                context: "assignment lookup",
                status: status.as_u16(),
            });
        }

        response
            .json::<PatientExercise>()
            .await
            .map_err(|source| EngineError::Http {
                context: "assignment decode",
                source,
            })
    }

    /// Mark one assignment as completed.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Http`] on transport failure and
    /// [`EngineError::UnexpectedStatus`] on a non-success response. Callers
    /// on the completion path treat both as best-effort and log them.
    pub async fn complete_patient_exercise(
        &self,
        id: &str,
        report: &CompletionReport,
    ) -> EngineResult<()> {
        let url = format!("{}/patient-exercises/{id}/complete", self.base_url);
        let response = shared_client()
            .post(&url)
            .json(report)
            .send()
            .await
            .map_err(|source| EngineError::Http {
                context: "mark complete",
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(EngineError::UnexpectedStatus {
                context: "mark complete",
                status: status.as_u16(),
            });
        }

        Ok(())
    }
}
