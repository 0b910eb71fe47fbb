use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use serde::Deserialize;

#[derive(Deserialize, Clone)]
pub struct AppConfig {
    pub operator_token: String,
    #[serde(default = "AppConfig::default_ip")]
    pub ip: IpAddr,
    #[serde(default = "AppConfig::default_port")]
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        Self::from_vars(std::env::vars())
    }

    /// Builds the config from an arbitrary set of `NAME=value` pairs.
    pub fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config = envy::from_iter::<_, AppConfig>(vars)?;

        if config.operator_token.trim().is_empty() {
            return Err(envy::Error::Custom(
                "OPERATOR_TOKEN cannot be empty.".to_string(),
            ));
        }

        Ok(config)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.ip, self.port)
    }

    fn default_ip() -> IpAddr {
        IpAddr::V4(Ipv4Addr::LOCALHOST)
    }

    fn default_port() -> u16 {
        3000
    }
}

// Hand-written so the token never ends up in logs.
impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("operator_token", &"<redacted>")
            .field("ip", &self.ip)
            .field("port", &self.port)
            .finish()
    }
}
