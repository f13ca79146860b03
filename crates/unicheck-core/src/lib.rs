//! Check logic between `unicheck-api` and the `check_unifi` binary.
//!
//! - **[`CheckConfig`]**: validated input for one invocation.
//! - **[`run_check`]**: the linear pipeline. Fetch sites, resolve the site,
//!   fetch devices, resolve the device, fetch statistics, extract the metric,
//!   classify it.
//! - **[`resolve`]**: first-match lookups returning [`Lookup`].
//! - **[`Mode`]** / **[`metric::extract`]**: which statistics field to read
//!   and how to turn it into an integer.
//! - **[`classify`]**: thresholds to [`Status`].

pub mod check;
pub mod config;
pub mod error;
pub mod metric;
pub mod resolve;
pub mod status;

pub use check::{Measurement, check_device, run_check};
pub use config::{CheckConfig, DEFAULT_SITE, Thresholds};
pub use error::{CheckError, Stage};
pub use metric::{Mode, Reading};
pub use resolve::{Lookup, resolve_device, resolve_site};
pub use status::{Status, classify};

pub use unicheck_api::{TlsMode, TransportConfig};
