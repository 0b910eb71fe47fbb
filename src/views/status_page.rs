//! # Status Page
//!
//! Renders the ledger snapshot as the public HTML page. The template is
//! compiled into the binary and registered under an `.html` name, which makes
//! Tera escape every operator supplied reason.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use chrono_humanize::HumanTime;
use serde::Serialize;
use tera::{Context, Tera};

use crate::ledger::{PingRecord, PING_LEDGER_CAPACITY};

const STATUS_TEMPLATE_NAME: &str = "status.html";
const STATUS_TEMPLATE: &str = include_str!("../../templates/status.html");

/// A ping as shown on the page: the record plus how long ago it arrived.
#[derive(Serialize)]
struct StatusEntry<'a> {
    #[serde(flatten)]
    record: &'a PingRecord,
    ago: String,
}

#[derive(Clone)]
pub struct StatusPage {
    tera: Arc<Tera>,
}

impl StatusPage {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_template(STATUS_TEMPLATE_NAME, STATUS_TEMPLATE)?;

        Ok(Self {
            tera: Arc::new(tera),
        })
    }

    /// Render `pings` (expected newest first) relative to `now`.
    pub fn render(&self, pings: &[PingRecord], now: DateTime<Utc>) -> Result<String, tera::Error> {
        let entries: Vec<StatusEntry> = pings
            .iter()
            .take(PING_LEDGER_CAPACITY)
            .map(|record| StatusEntry {
                record,
                ago: HumanTime::from(record.timestamp - now).to_string(),
            })
            .collect();

        let mut context = Context::new();
        context.insert("pings", &entries);
        context.insert("capacity", &PING_LEDGER_CAPACITY);

        self.tera.render(STATUS_TEMPLATE_NAME, &context)
    }
}
