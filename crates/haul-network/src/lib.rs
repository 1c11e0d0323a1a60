//! `haul-network` — the location graph the routing engine searches.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`network`] | `Network` (CSR adjacency), `NetworkBuilder`, `Location`, `EdgeRecord` |
//! | [`loader`]  | `load_network_csv`, `load_network_reader`, `read_description` |
//! | [`error`]   | `NetworkError`, `NetworkResult<T>`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod loader;
pub mod network;

#[cfg(test)]
mod tests;

pub use error::{NetworkError, NetworkResult};
pub use loader::{load_network_csv, load_network_reader, read_description};
pub use network::{EdgeRecord, Location, Network, NetworkBuilder, Slot};
