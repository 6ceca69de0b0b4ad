// ABOUTME: Recommendation audit sink recording every served prediction and simulation
// ABOUTME: In-memory implementation is a bounded ring that evicts the oldest entry first
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::VecDeque;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::errors::AppResult;

/// What produced an audit entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditKind {
    /// A single prediction
    Prediction,
    /// A what-if simulation
    Simulation,
}

/// One audited recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// Recommendation id returned to the caller
    pub recommendation_id: Uuid,
    /// Athlete the recommendation was served to
    pub athlete_id: String,
    /// When it was served
    pub created_at: DateTime<Utc>,
    /// Prediction or simulation
    pub kind: AuditKind,
    /// Request as received (after profile completion)
    pub request: Value,
    /// Response as returned
    pub response: Value,
}

impl AuditEntry {
    /// Entry stamped with the current time
    #[must_use]
    pub fn now(
        recommendation_id: Uuid,
        athlete_id: &str,
        kind: AuditKind,
        request: Value,
        response: Value,
    ) -> Self {
        Self {
            recommendation_id,
            athlete_id: athlete_id.to_owned(),
            created_at: Utc::now(),
            kind,
            request,
            response,
        }
    }
}

/// Destination for recommendation audit records
#[async_trait]
pub trait AuditSink: Send + Sync {
    /// Record an entry
    ///
    /// # Errors
    ///
    /// Returns an error if the entry could not be stored
    async fn record(&self, entry: AuditEntry) -> AppResult<()>;

    /// Most recent entries for an athlete, newest first
    async fn recent(&self, athlete_id: &str, limit: usize) -> Vec<AuditEntry>;
}

/// Bounded in-memory audit log
pub struct InMemoryAuditLog {
    capacity: usize,
    entries: Mutex<VecDeque<AuditEntry>>,
}

impl InMemoryAuditLog {
    /// Log retaining at most `capacity` entries (minimum 1)
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Number of retained entries
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    /// True when nothing has been recorded
    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

#[async_trait]
impl AuditSink for InMemoryAuditLog {
    async fn record(&self, entry: AuditEntry) -> AppResult<()> {
        let mut entries = self.entries.lock().await;
        while entries.len() >= self.capacity {
            entries.pop_front();
        }
        entries.push_back(entry);
        Ok(())
    }

    async fn recent(&self, athlete_id: &str, limit: usize) -> Vec<AuditEntry> {
        self.entries
            .lock()
            .await
            .iter()
            .rev()
            .filter(|entry| entry.athlete_id == athlete_id)
            .take(limit)
            .cloned()
            .collect()
    }
}
