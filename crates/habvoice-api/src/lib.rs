// habvoice-api: Async Rust client for the openHAB REST API

pub mod error;
pub mod rest;
pub mod transport;

pub use error::Error;
pub use rest::RestClient;
pub use rest::types::{RawItem, SystemInfo, SystemInfoResponse};
pub use transport::{TlsMode, TransportConfig};
