// unicheck-api: async client for the UniFi Network Integration API
//
// Only the read endpoints a utilization check needs: sites, devices,
// and the latest device statistics.

pub mod error;
pub mod integration;
pub mod transport;

pub use error::Error;
pub use integration::IntegrationClient;
pub use integration::types as integration_types;
pub use transport::{TlsMode, TransportConfig};
