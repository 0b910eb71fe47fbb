use std::collections::VecDeque;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::debug;

use crate::utils::timestamp_serde;

/// Number of pings the ledger keeps before evicting the oldest one.
pub const PING_LEDGER_CAPACITY: usize = 8;

/// One accepted ping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PingRecord {
    /// Server time at which the ping was accepted
    #[serde(serialize_with = "timestamp_serde::serialize")]
    pub timestamp: DateTime<Utc>,
    /// Operator supplied text, stored as-is
    pub reason: String,
}

/// Bounded, shared store of the most recent pings.
///
/// Cloning is cheap and every clone points at the same records. Records are
/// only reachable through [`PingLedger::record`] and [`PingLedger::snapshot`].
#[derive(Clone, Default)]
pub struct PingLedger {
    /// Oldest record at the front, newest at the back
    records: Arc<RwLock<VecDeque<PingRecord>>>,
}

impl PingLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(VecDeque::with_capacity(PING_LEDGER_CAPACITY))),
        }
    }

    /// Append a new ping stamped with the current server time, evicting the
    /// oldest one once the ledger is full.
    pub async fn record(&self, reason: String) -> PingRecord {
        let mut records = self.records.write().await;

        // Timestamps never go backwards, even if the wall clock does.
        let now = Utc::now();
        let timestamp = match records.back() {
            Some(newest) if newest.timestamp > now => newest.timestamp,
            _ => now,
        };

        if records.len() == PING_LEDGER_CAPACITY {
            if let Some(evicted) = records.pop_front() {
                debug!(evicted_at = %evicted.timestamp, "Evicted oldest ping");
            }
        }

        let record = PingRecord { timestamp, reason };
        records.push_back(record.clone());

        record
    }

    /// Copy of the current records, newest first.
    pub async fn snapshot(&self) -> Vec<PingRecord> {
        let records = self.records.read().await;
        records.iter().rev().cloned().collect()
    }
}
