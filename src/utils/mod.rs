pub mod timestamp_serde;
