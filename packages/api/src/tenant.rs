//! Tenant (organisation) derivation from the browser host.
//!
//! The backend is multi-tenant by subdomain: `acme.hr.example.com` belongs to
//! the `acme` organisation. During development the app runs under
//! `acme.localhost:3000`, where only one label follows the tenant.

/// Subdomain of `host`, if it has one.
///
/// Drops the last label for `localhost` hosts and the last two otherwise,
/// then takes the first remaining label.
pub fn subdomain_from_host(host: &str) -> Option<String> {
    let host = host.trim();
    if host.is_empty() {
        return None;
    }
    let parts: Vec<&str> = host.split('.').collect();
    let keep = if host.contains("localhost") {
        parts.len().saturating_sub(1)
    } else {
        parts.len().saturating_sub(2)
    };
    parts[..keep]
        .first()
        .filter(|label| !label.is_empty())
        .map(|label| label.to_string())
}
