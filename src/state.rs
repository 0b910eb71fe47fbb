use crate::auth::Authenticator;
use crate::config::AppConfig;
use crate::ledger::PingLedger;
use crate::views::status_page::StatusPage;

/// Everything a request handler needs, built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub authenticator: Authenticator,
    pub ledger: PingLedger,
    pub status_page: StatusPage,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Result<Self, tera::Error> {
        Ok(Self {
            authenticator: Authenticator::new(config.operator_token.as_str()),
            ledger: PingLedger::new(),
            status_page: StatusPage::new()?,
        })
    }
}
