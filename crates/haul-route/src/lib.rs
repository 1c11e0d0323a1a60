//! `haul-route` — shortest paths and waypoint-constrained routes.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`search`]   | `shortest_path_tree`, `SearchTree` (per-query search state) |
//! | [`path`]     | `reverse_chain`, `reconstruct`                             |
//! | [`router`]   | `Router` trait, `Route`, `Dijkstra`, `shortest_path`       |
//! | [`composer`] | `route_through_waypoints`, `compose_with`, `WaypointRoute` |
//! | [`error`]    | `RouteError`, `RouteResult<T>`                             |
//!
//! # State isolation
//!
//! A [`haul_network::Network`] is immutable.  Every query allocates its own
//! distance / visited / predecessor arrays, so nothing carries over from one
//! query to the next.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `Route` and `WaypointRoute`. |

pub mod composer;
pub mod error;
pub mod path;
pub mod router;
pub mod search;


pub use composer::{compose_with, route_through_waypoints, route_through_waypoints_rebuilt, WaypointRoute};
pub use error::{RouteError, RouteResult};
pub use path::{reconstruct, reverse_chain};
pub use router::{shortest_path, Dijkstra, Route, Router};
pub use search::{shortest_path_tree, SearchTree};
