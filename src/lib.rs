pub mod auth;
pub mod config;
pub mod errors;
pub mod extractors;
pub mod ledger;
pub mod routes;
pub mod state;
pub mod utils;
pub mod views;
