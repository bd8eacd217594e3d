//! Server settings.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Port the service has always listened on.
pub const DEFAULT_PORT: u16 = 5000;

/// Default data file, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "data.json";

/// Runtime settings for [`ItemServer`](crate::ItemServer).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind; all interfaces by default.
    pub bind_addr: SocketAddr,
    /// JSON file that mirrors the collection.
    pub data_file: PathBuf,
    /// Write the data file indented instead of on one line.
    pub pretty: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            pretty: true,
        }
    }
}
