// ABOUTME: Completion dispatch: exactly-once, fire-and-forget side effect on target reached
// ABOUTME: CompletionSink trait, HTTP-backed sink, and a recording sink for tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Rehab Motion Engine

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::runtime::Handle;
use tracing::{info, warn};

use crate::api::ExerciseApiClient;
use crate::errors::EngineResult;
use crate::models::CompletionReport;

/// Receiver of the "mark assignment complete" side effect.
///
/// The counting path never awaits an implementation directly; dispatch goes
/// through [`dispatch_completion`], which spawns the call so a slow or
/// failing collaborator cannot stall frame processing.
#[async_trait]
pub trait CompletionSink: Send + Sync {
    /// Record the assignment as completed with the given report
    async fn complete(&self, assignment_id: &str, report: &CompletionReport) -> EngineResult<()>;
}

/// Fire-and-forget completion dispatch.
///
/// The remote acknowledgement has no clinical value over the locally
/// achieved count, so a failure is logged and swallowed; the patient is
/// never blocked on a network blip. Callable from synchronous frame
/// handlers: without an ambient async runtime the dispatch is logged and
/// skipped instead of panicking.
pub fn dispatch_completion(
    sink: Arc<dyn CompletionSink>,
    assignment_id: String,
    report: CompletionReport,
) {
    let Ok(handle) = Handle::try_current() else {
        warn!(
            %assignment_id,
            "no async runtime available, completion not recorded"
        );
        return;
    };
    handle.spawn(async move {
        match sink.complete(&assignment_id, &report).await {
            Ok(()) => info!(%assignment_id, "exercise completion recorded"),
            Err(error) => warn!(
                %assignment_id,
                %error,
                "failed to record exercise completion, continuing"
            ),
        }
    });
}

/// Completion sink backed by the patient-exercise HTTP API
pub struct HttpCompletionSink {
    client: ExerciseApiClient,
}

impl HttpCompletionSink {
    /// Wrap an API client as a completion sink
    #[must_use]
    pub fn new(client: ExerciseApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CompletionSink for HttpCompletionSink {
    async fn complete(&self, assignment_id: &str, report: &CompletionReport) -> EngineResult<()> {
        self.client
            .complete_patient_exercise(assignment_id, report)
            .await
    }
}

/// Test double that records calls instead of talking to the network
#[derive(Default)]
pub struct RecordingSink {
    calls: AtomicUsize,
    last_report: Mutex<Option<CompletionReport>>,
}

impl RecordingSink {
    /// Fresh sink with no recorded calls
    #[must_use]
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// How many times the sink was invoked
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The most recent report, if any call happened
    #[must_use]
    pub fn last_report(&self) -> Option<CompletionReport> {
        self.last_report.lock().map_or(None, |guard| guard.clone())
    }
}

#[async_trait]
impl CompletionSink for RecordingSink {
    async fn complete(&self, _assignment_id: &str, report: &CompletionReport) -> EngineResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut guard) = self.last_report.lock() {
            *guard = Some(report.clone());
        }
        Ok(())
    }
}
