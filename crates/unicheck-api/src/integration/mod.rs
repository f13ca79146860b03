// Integration API client for the UniFi Network Application.
//
// Uses X-API-KEY authentication and RESTful JSON endpoints under
// /proxy/network/integrations/v1/.

pub mod client;
pub mod types;

pub use client::{INTEGRATION_BASE_PATH, IntegrationClient};
