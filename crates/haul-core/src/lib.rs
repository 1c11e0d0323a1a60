//! `haul-core` — foundational types for the `haul` routing workspace.
//!
//! This crate is a dependency of every other `haul-*` crate.  It has no
//! `haul-*` dependencies and a single required external one (`thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`ids`]      | `LocationId`                                           |
//! | [`config`]   | `RouteConfig`, `FrontierStrategy`                      |
//! | [`error`]    | `CoreError`, `CoreResult`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{FrontierStrategy, RouteConfig};
pub use error::{CoreError, CoreResult};
pub use ids::LocationId;
