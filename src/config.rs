//! Configuration Module
//!
//! Handles parsing server configuration from the command line.

use clap::Parser;

/// Default HTTP listen port
pub const DEFAULT_PORT: u16 = 8080;

/// Largest request body the server will read, in bytes
pub const MAX_BODY_BYTES: usize = 1024 * 1024; // 1 MiB

/// Server configuration parameters.
#[derive(Debug, Clone, Parser)]
#[command(name = "album_server", about = "Album collection HTTP server")]
pub struct Config {
    /// Port to listen on
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

impl Config {
    /// Parses configuration from the process arguments.
    ///
    /// Exits with a usage message on invalid arguments.
    pub fn from_args() -> Self {
        Self::parse()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}
