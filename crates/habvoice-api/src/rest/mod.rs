// REST API surface: client + response types.

mod client;
pub mod types;

pub use client::RestClient;
