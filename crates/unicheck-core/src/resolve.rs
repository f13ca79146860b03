// ── Site / device resolution ──
//
// Pure lookups over fetched collections. Matching is exact and
// case-sensitive, and the first match in controller order wins.

use unicheck_api::integration_types::{DeviceResponse, SiteResponse};

/// Result of looking an entity up by key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    Found(T),
    /// Nothing matched; carries the key that was searched for.
    NotFound(String),
}

impl<T> Lookup<T> {
    /// Convert into a `Result`, building the error from the missing key.
    pub fn or_else_missing<E>(self, err: impl FnOnce(String) -> E) -> Result<T, E> {
        match self {
            Self::Found(value) => Ok(value),
            Self::NotFound(key) => Err(err(key)),
        }
    }
}

fn first_match<'a, T>(
    items: &'a [T],
    key: &str,
    field: impl Fn(&T) -> &str,
) -> Lookup<&'a T> {
    items
        .iter()
        .find(|item| field(item) == key)
        .map_or_else(|| Lookup::NotFound(key.to_owned()), Lookup::Found)
}

/// Find the site whose display name equals `name`.
pub fn resolve_site<'a>(sites: &'a [SiteResponse], name: &str) -> Lookup<&'a SiteResponse> {
    first_match(sites, name, |s| s.name.as_str())
}

/// Find the device whose MAC address equals `mac`.
///
/// The controller reports lowercase addresses; `AA:BB:...` will not match
/// `aa:bb:...`.
pub fn resolve_device<'a>(devices: &'a [DeviceResponse], mac: &str) -> Lookup<&'a DeviceResponse> {
    first_match(devices, mac, |d| d.mac_address.as_str())
}
