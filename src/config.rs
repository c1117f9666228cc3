//! Device endpoint configuration
//!
//! Where a projector lives on the network, with sensible defaults.

use std::time::Duration;

/// Default TCP port registered for the PJLink protocol
pub const DEFAULT_PORT: u16 = 4352;

/// Default connect/read/write timeout per round trip
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Default protocol version digit
pub const DEFAULT_VERSION: u8 = 1;

/// A projector endpoint: one device on the network
///
/// The client keeps no connection open between calls; the endpoint is
/// only the address (and credential) each round trip dials.
#[derive(Debug, Clone)]
pub struct Endpoint {
    // -------------------------------------------------------------------------
    // Address
    // -------------------------------------------------------------------------
    /// Hostname or IP address of the projector
    pub host: String,

    /// TCP port (PJLink registered port by default)
    pub port: u16,

    // -------------------------------------------------------------------------
    // Session Parameters
    // -------------------------------------------------------------------------
    /// Optional authentication token, held for callers that configure one
    /// on the device
    pub password: Option<String>,

    /// Protocol version digit carried in every frame header (1-9)
    pub version: u8,

    /// Timeout applied to connect, read, and write for each round trip
    pub timeout: Duration,
}

impl Endpoint {
    /// Create an endpoint for `host` with protocol defaults
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: DEFAULT_PORT,
            password: None,
            version: DEFAULT_VERSION,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Create an endpoint builder for `host`
    pub fn builder(host: impl Into<String>) -> EndpointBuilder {
        EndpointBuilder {
            endpoint: Endpoint::new(host),
        }
    }

    /// The `host:port` string this endpoint dials
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Builder for Endpoint
pub struct EndpointBuilder {
    endpoint: Endpoint,
}

impl EndpointBuilder {
    /// Set the TCP port
    pub fn port(mut self, port: u16) -> Self {
        self.endpoint.port = port;
        self
    }

    /// Set the authentication token
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.endpoint.password = Some(password.into());
        self
    }

    /// Set the protocol version digit
    pub fn version(mut self, version: u8) -> Self {
        self.endpoint.version = version;
        self
    }

    /// Set the per-round-trip timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.endpoint.timeout = timeout;
        self
    }

    pub fn build(self) -> Endpoint {
        self.endpoint
    }
}
