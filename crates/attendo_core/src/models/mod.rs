//! Data models shared across the Attendo crates.

/// Credential-side account rows and session identity.
pub mod account;
/// Profile records stored per user id.
pub mod user;

#[cfg(test)]
mod tests;
