pub mod ping_ledger;

pub use ping_ledger::{PingLedger, PingRecord, PING_LEDGER_CAPACITY};
