//! Configuration for lcb
//!
//! Already-resolved connection settings. Nothing here reads the
//! environment; the CLI owns that fallback chain.

use std::time::Duration;

use crate::error::{LcbError, Result};

/// Default clipboard server host
pub const DEFAULT_SERVER: &str = "localhost";

/// Default clipboard server port
pub const DEFAULT_PORT: u16 = 4242;

/// Connection settings for one client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    // -------------------------------------------------------------------------
    // Destination
    // -------------------------------------------------------------------------
    /// Server host name or IP address
    pub server: String,

    /// Server TCP port
    pub port: u16,

    // -------------------------------------------------------------------------
    // Timeouts (milliseconds, 0 disables)
    // -------------------------------------------------------------------------
    /// Connect timeout per resolved address
    pub connect_timeout_ms: u64,

    /// Socket read timeout
    pub read_timeout_ms: u64,

    /// Socket write timeout
    pub write_timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server: DEFAULT_SERVER.to_string(),
            port: DEFAULT_PORT,
            connect_timeout_ms: 5000,
            read_timeout_ms: 5000,
            write_timeout_ms: 5000,
        }
    }
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// `host:port` form used for address resolution and logging
    pub fn address(&self) -> String {
        format!("{}:{}", self.server, self.port)
    }

    /// Check that the destination is usable
    pub fn validate(&self) -> Result<()> {
        if self.server.trim().is_empty() {
            return Err(LcbError::Config("server must not be empty".to_string()));
        }
        if self.port == 0 {
            return Err(LcbError::Config("port must not be 0".to_string()));
        }
        Ok(())
    }

    pub(crate) fn connect_timeout(&self) -> Option<Duration> {
        millis(self.connect_timeout_ms)
    }

    pub(crate) fn read_timeout(&self) -> Option<Duration> {
        millis(self.read_timeout_ms)
    }

    pub(crate) fn write_timeout(&self) -> Option<Duration> {
        millis(self.write_timeout_ms)
    }
}

fn millis(ms: u64) -> Option<Duration> {
    (ms > 0).then(|| Duration::from_millis(ms))
}

/// Builder for ClientConfig
#[derive(Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the server host
    pub fn server(mut self, server: impl Into<String>) -> Self {
        self.config.server = server.into();
        self
    }

    /// Set the server port
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Set the connect timeout (in milliseconds)
    pub fn connect_timeout_ms(mut self, ms: u64) -> Self {
        self.config.connect_timeout_ms = ms;
        self
    }

    /// Set the read timeout (in milliseconds)
    pub fn read_timeout_ms(mut self, ms: u64) -> Self {
        self.config.read_timeout_ms = ms;
        self
    }

    /// Set the write timeout (in milliseconds)
    pub fn write_timeout_ms(mut self, ms: u64) -> Self {
        self.config.write_timeout_ms = ms;
        self
    }

    /// Set all three timeouts at once
    pub fn timeout_ms(self, ms: u64) -> Self {
        self.connect_timeout_ms(ms).read_timeout_ms(ms).write_timeout_ms(ms)
    }

    pub fn build(self) -> ClientConfig {
        self.config
    }
}
